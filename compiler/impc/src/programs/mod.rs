//! Built-in sample programs.
//!
//! Programs are built on demand from the AST constructors; there is no
//! surface syntax to parse.

use imp_ir::{Expr, Program, Stmt};

/// A named entry in the catalog.
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Program,
}

impl Sample {
    /// Build a fresh copy of the program.
    pub fn program(&self) -> Program {
        (self.build)()
    }
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "assign",
        description: "x := 1; y := x + 2",
        build: assign,
    },
    Sample {
        name: "while_sum",
        description: "sum 0..10 with a while loop",
        build: while_sum,
    },
    Sample {
        name: "for_sum",
        description: "sum 0..10 with a for loop",
        build: for_sum,
    },
    Sample {
        name: "conditional",
        description: "if 10 < 15 then result := 10 else result := 11",
        build: conditional,
    },
    Sample {
        name: "negation",
        description: "branch on not (true and false)",
        build: negation,
    },
    Sample {
        name: "type_error",
        description: "x := true, rejected at run time",
        build: type_error,
    },
    Sample {
        name: "factorial",
        description: "read n and write n!",
        build: factorial,
    },
    Sample {
        name: "countdown",
        description: "count down from 5 with repeat-until",
        build: countdown,
    },
    Sample {
        name: "doubling",
        description: "double from 1 while below 100 with do-while",
        build: doubling,
    },
    Sample {
        name: "gcd",
        description: "read two numbers and write their gcd",
        build: gcd,
    },
    Sample {
        name: "table",
        description: "3x3 multiplication table with nested for loops",
        build: table,
    },
];

/// Every sample, in catalog order.
pub fn all() -> &'static [Sample] {
    SAMPLES
}

/// Look up a sample by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

fn var(name: &str) -> Expr {
    Expr::var(name)
}

fn int(value: i64) -> Expr {
    Expr::int(value)
}

fn assign() -> Program {
    Program::new(
        "assign",
        ["x", "y"],
        Stmt::seq([
            Stmt::assign("x", int(1)),
            Stmt::assign("y", Expr::add(var("x"), int(2))),
        ]),
    )
}

fn while_sum() -> Program {
    Program::new(
        "while_sum",
        ["i", "sum"],
        Stmt::seq([
            Stmt::while_do(
                Expr::le(var("i"), int(10)),
                Stmt::seq([
                    Stmt::assign("sum", Expr::add(var("sum"), var("i"))),
                    Stmt::assign("i", Expr::add(var("i"), int(1))),
                ]),
            ),
            Stmt::write_num(var("sum")),
        ]),
    )
}

fn for_sum() -> Program {
    Program::new(
        "for_sum",
        ["sum"],
        Stmt::seq([
            Stmt::for_range(
                "i",
                int(0),
                int(10),
                Stmt::assign("sum", Expr::add(var("sum"), var("i"))),
            ),
            Stmt::write_num(var("sum")),
        ]),
    )
}

fn conditional() -> Program {
    Program::new(
        "conditional",
        ["result"],
        Stmt::seq([
            Stmt::if_then_else(
                Expr::lt(int(10), int(15)),
                Stmt::assign("result", int(10)),
                Stmt::assign("result", int(11)),
            ),
            Stmt::write_num(var("result")),
        ]),
    )
}

fn negation() -> Program {
    Program::new(
        "negation",
        Vec::<&str>::new(),
        Stmt::if_then_else(
            Expr::not(Expr::and(Expr::bool(true), Expr::bool(false))),
            Stmt::write_str("true"),
            Stmt::write_str("false"),
        ),
    )
}

fn type_error() -> Program {
    Program::new("type_error", ["x"], Stmt::assign("x", Expr::bool(true)))
}

fn factorial() -> Program {
    Program::new(
        "factorial",
        ["n", "f"],
        Stmt::seq([
            Stmt::write_str("n?"),
            Stmt::read_num("n"),
            Stmt::assign("f", int(1)),
            Stmt::for_range(
                "i",
                int(1),
                var("n"),
                Stmt::assign("f", Expr::mul(var("f"), var("i"))),
            ),
            Stmt::write_num(var("f")),
        ]),
    )
}

fn countdown() -> Program {
    Program::new(
        "countdown",
        ["n"],
        Stmt::seq([
            Stmt::assign("n", int(5)),
            Stmt::repeat_until(
                Stmt::seq([
                    Stmt::write_num(var("n")),
                    Stmt::assign("n", Expr::sub(var("n"), int(1))),
                ]),
                Expr::equals(var("n"), int(0)),
            ),
            Stmt::write_str("liftoff"),
        ]),
    )
}

fn doubling() -> Program {
    Program::new(
        "doubling",
        ["x"],
        Stmt::seq([
            Stmt::assign("x", int(1)),
            Stmt::do_while(
                Stmt::seq([
                    Stmt::assign("x", Expr::mul(var("x"), int(2))),
                    Stmt::write_num(var("x")),
                ]),
                Expr::lt(var("x"), int(100)),
            ),
        ]),
    )
}

fn gcd() -> Program {
    Program::new(
        "gcd",
        ["a", "b", "t"],
        Stmt::seq([
            Stmt::read_num("a"),
            Stmt::read_num("b"),
            Stmt::while_do(
                Expr::not(Expr::equals(var("b"), int(0))),
                Stmt::seq([
                    Stmt::assign("t", Expr::modulo(var("a"), var("b"))),
                    Stmt::assign("a", var("b")),
                    Stmt::assign("b", var("t")),
                ]),
            ),
            Stmt::write_num(var("a")),
        ]),
    )
}

fn table() -> Program {
    Program::new(
        "table",
        Vec::<&str>::new(),
        Stmt::for_range(
            "i",
            int(1),
            int(3),
            Stmt::for_range(
                "j",
                int(1),
                int(3),
                Stmt::write_num(Expr::mul(var("i"), var("j"))),
            ),
        ),
    )
}
