use super::*;

mod constructors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seq_of_nothing_is_skip() {
        assert_eq!(Stmt::seq(Vec::<Stmt>::new()), Stmt::Skip);
    }

    #[test]
    fn seq_of_one_is_that_statement() {
        let stmt = Stmt::assign("x", Expr::int(1));
        assert_eq!(Stmt::seq([stmt.clone()]), stmt);
    }

    #[test]
    fn seq_nests_to_the_right() {
        let a = Stmt::assign("a", Expr::int(1));
        let b = Stmt::assign("b", Expr::int(2));
        let c = Stmt::assign("c", Expr::int(3));
        let expected = Stmt::Seq(
            Box::new(a.clone()),
            Box::new(Stmt::Seq(Box::new(b.clone()), Box::new(c.clone()))),
        );
        assert_eq!(Stmt::seq([a, b, c]), expected);
    }

    #[test]
    fn program_keeps_declaration_order() {
        let program = Program::new("p", ["z", "a", "m"], Stmt::Skip);
        let names: Vec<&str> = program.vars.iter().map(Name::as_str).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn describe_names_statement_kinds() {
        assert_eq!(Stmt::Skip.describe(), "skip");
        assert_eq!(
            Stmt::while_do(Expr::bool(false), Stmt::Skip).describe(),
            "while condition"
        );
        assert_eq!(
            Stmt::for_range("i", Expr::int(0), Expr::int(1), Stmt::Skip).describe(),
            "for bound"
        );
    }
}

mod expr_display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literals_and_names() {
        assert_eq!(Expr::int(-4).to_string(), "-4");
        assert_eq!(Expr::bool(true).to_string(), "true");
        assert_eq!(Expr::var("sum").to_string(), "sum");
    }

    #[test]
    fn precedence_needs_no_parens() {
        let expr = Expr::add(
            Expr::var("x"),
            Expr::mul(Expr::var("y"), Expr::int(2)),
        );
        assert_eq!(expr.to_string(), "x + y * 2");
    }

    #[test]
    fn looser_child_is_parenthesized() {
        let expr = Expr::mul(
            Expr::add(Expr::var("x"), Expr::int(1)),
            Expr::var("y"),
        );
        assert_eq!(expr.to_string(), "(x + 1) * y");
    }

    #[test]
    fn right_operand_of_same_precedence_is_parenthesized() {
        let grouped_right = Expr::sub(
            Expr::var("a"),
            Expr::sub(Expr::var("b"), Expr::var("c")),
        );
        assert_eq!(grouped_right.to_string(), "a - (b - c)");

        let grouped_left = Expr::sub(
            Expr::sub(Expr::var("a"), Expr::var("b")),
            Expr::var("c"),
        );
        assert_eq!(grouped_left.to_string(), "a - b - c");
    }

    #[test]
    fn negation_wraps_compound_operand() {
        let expr = Expr::not(Expr::and(Expr::bool(true), Expr::bool(false)));
        assert_eq!(expr.to_string(), "not (true and false)");
    }

    #[test]
    fn comparison_symbols() {
        let expr = Expr::and(
            Expr::le(Expr::var("i"), Expr::int(10)),
            Expr::equals(Expr::modulo(Expr::var("i"), Expr::int(2)), Expr::int(0)),
        );
        assert_eq!(expr.to_string(), "i <= 10 and i % 2 = 0");
    }
}

mod stmt_display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequence_prints_one_statement_per_line() {
        let stmt = Stmt::seq([
            Stmt::assign("x", Expr::int(1)),
            Stmt::assign("y", Expr::add(Expr::var("x"), Expr::int(2))),
        ]);
        assert_eq!(stmt.to_string(), "x := 1\ny := x + 2\n");
    }

    #[test]
    fn nested_bodies_are_indented() {
        let stmt = Stmt::while_do(
            Expr::le(Expr::var("i"), Expr::int(10)),
            Stmt::seq([
                Stmt::if_then(
                    Expr::gt(Expr::var("i"), Expr::int(5)),
                    Stmt::write_num(Expr::var("i")),
                ),
                Stmt::assign("i", Expr::add(Expr::var("i"), Expr::int(1))),
            ]),
        );
        let expected = "\
while i <= 10 do
  if i > 5 then
    write i
  end
  i := i + 1
end
";
        assert_eq!(stmt.to_string(), expected);
    }

    #[test]
    fn post_test_loops_and_io() {
        let stmt = Stmt::seq([
            Stmt::repeat_until(Stmt::read_num("n"), Expr::gt(Expr::var("n"), Expr::int(0))),
            Stmt::do_while(Stmt::write_str("again"), Expr::bool(false)),
        ]);
        let expected = "\
repeat
  read n
until n > 0
do
  write \"again\"
while false
";
        assert_eq!(stmt.to_string(), expected);
    }

    #[test]
    fn program_header_and_body() {
        let program = Program::new(
            "sum",
            ["i", "sum"],
            Stmt::for_range(
                "i",
                Expr::int(0),
                Expr::int(10),
                Stmt::assign("sum", Expr::add(Expr::var("sum"), Expr::var("i"))),
            ),
        );
        let expected = "\
program sum
var i, sum
begin
  for i := 0 to 10 do
    sum := sum + i
  end
end
";
        assert_eq!(program.to_string(), expected);
    }

    #[test]
    fn long_sequence_renders_without_recursion() {
        let stmt = Stmt::seq((0..5_000).map(|_| Stmt::Skip));
        assert_eq!(stmt.to_string().lines().count(), 5_000);
    }
}
