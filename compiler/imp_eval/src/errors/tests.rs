use super::*;
use pretty_assertions::assert_eq;

#[test]
fn message_matches_kind_display() {
    let errors = [
        unbound_name(&Name::from("x")),
        type_mismatch("assignment to `x`", "int", "bool"),
        division_by_zero(BinaryOp::Mod),
        integer_overflow("addition"),
        input_closed(&Name::from("n")),
        iteration_budget_exceeded(1000),
    ];
    for error in errors {
        assert_eq!(error.message, error.kind.to_string());
        assert_eq!(error.to_string(), error.message);
    }
}

#[test]
fn messages_name_the_culprit() {
    assert_eq!(unbound_name(&Name::from("total")).message, "unbound name: total");
    assert_eq!(
        type_mismatch("while condition", "bool", "int").message,
        "type mismatch in while condition: expected bool, got int"
    );
    assert_eq!(
        division_by_zero(BinaryOp::Div).message,
        "division by zero in operator `/`"
    );
    assert_eq!(
        input_closed(&Name::from("n")).message,
        "input closed while reading a number into n"
    );
}

#[test]
fn notes_accumulate_in_order() {
    let error = division_by_zero(BinaryOp::Div)
        .with_note("in program 'a'")
        .with_note("second");
    assert_eq!(error.notes, vec!["in program 'a'".to_string(), "second".to_string()]);
    // Notes do not change the message.
    assert_eq!(error.message, "division by zero in operator `/`");
}
