//! Readable rendering of IMP trees.
//!
//! Expressions print infix with the fewest parentheses that keep the tree
//! shape. Statements print one per line, nested bodies indented two spaces.

use std::fmt::{self, Write};

use super::{BinaryOp, Constant, Expr, Program, Stmt};

const INDENT: usize = 2;

/// Precedence slot for the outermost expression: never parenthesized.
const TOP_LEVEL: u8 = u8::MAX;

/// Unary operators bind tighter than every binary operator.
const UNARY_PRECEDENCE: u8 = 1;

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(n) => write!(f, "{n}"),
            Constant::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, TOP_LEVEL)
    }
}

fn precedence_of(expr: &Expr) -> u8 {
    match expr {
        Expr::Const(_) | Expr::Var(_) => 0,
        Expr::Unary { .. } => UNARY_PRECEDENCE,
        Expr::Binary { op, .. } => op.precedence(),
    }
}

/// Write `expr`, parenthesizing it if it binds looser than `limit` allows.
fn write_expr(f: &mut impl Write, expr: &Expr, limit: u8) -> fmt::Result {
    let parens = precedence_of(expr) > limit;
    if parens {
        f.write_char('(')?;
    }
    match expr {
        Expr::Const(c) => write!(f, "{c}")?,
        Expr::Var(name) => write!(f, "{name}")?,
        Expr::Binary { op, left, right } => write_binary(f, *op, left, right)?,
        Expr::Unary { op, operand } => {
            write!(f, "{} ", op.as_symbol())?;
            write_expr(f, operand, UNARY_PRECEDENCE)?;
        }
    }
    if parens {
        f.write_char(')')?;
    }
    Ok(())
}

fn write_binary(f: &mut impl Write, op: BinaryOp, left: &Expr, right: &Expr) -> fmt::Result {
    let prec = op.precedence();
    // Left-associative: an equal-precedence right child needs parentheses.
    write_expr(f, left, prec)?;
    write!(f, " {} ", op.as_symbol())?;
    write_expr(f, right, prec.saturating_sub(1))
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

fn write_line(f: &mut impl Write, indent: usize, text: fmt::Arguments<'_>) -> fmt::Result {
    writeln!(f, "{:indent$}{text}", "")
}

fn write_stmt(f: &mut impl Write, stmt: &Stmt, indent: usize) -> fmt::Result {
    // Walk the right spine of a sequence iteratively so long programs do not
    // recurse once per statement.
    let mut current = stmt;
    while let Stmt::Seq(first, rest) = current {
        write_stmt(f, first, indent)?;
        current = rest;
    }
    let body_indent = indent + INDENT;
    match current {
        Stmt::Seq(..) => Ok(()),
        Stmt::Skip => write_line(f, indent, format_args!("skip")),
        Stmt::Assign(name, value) => write_line(f, indent, format_args!("{name} := {value}")),
        Stmt::IfThenElse {
            cond,
            then_branch,
            else_branch,
        } => {
            write_line(f, indent, format_args!("if {cond} then"))?;
            write_stmt(f, then_branch, body_indent)?;
            write_line(f, indent, format_args!("else"))?;
            write_stmt(f, else_branch, body_indent)?;
            write_line(f, indent, format_args!("end"))
        }
        Stmt::IfThen { cond, body } => {
            write_line(f, indent, format_args!("if {cond} then"))?;
            write_stmt(f, body, body_indent)?;
            write_line(f, indent, format_args!("end"))
        }
        Stmt::While { cond, body } => {
            write_line(f, indent, format_args!("while {cond} do"))?;
            write_stmt(f, body, body_indent)?;
            write_line(f, indent, format_args!("end"))
        }
        Stmt::RepeatUntil { body, cond } => {
            write_line(f, indent, format_args!("repeat"))?;
            write_stmt(f, body, body_indent)?;
            write_line(f, indent, format_args!("until {cond}"))
        }
        Stmt::DoWhile { body, cond } => {
            write_line(f, indent, format_args!("do"))?;
            write_stmt(f, body, body_indent)?;
            write_line(f, indent, format_args!("while {cond}"))
        }
        Stmt::For {
            var,
            low,
            high,
            body,
        } => {
            write_line(f, indent, format_args!("for {var} := {low} to {high} do"))?;
            write_stmt(f, body, body_indent)?;
            write_line(f, indent, format_args!("end"))
        }
        Stmt::ReadNum(name) => write_line(f, indent, format_args!("read {name}")),
        Stmt::WriteNum(value) => write_line(f, indent, format_args!("write {value}")),
        Stmt::WriteStr(text) => write_line(f, indent, format_args!("write {text:?}")),
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "program {}", self.name)?;
        if !self.vars.is_empty() {
            f.write_str("var ")?;
            for (i, var) in self.vars.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{var}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "begin")?;
        write_stmt(f, &self.body, INDENT)?;
        writeln!(f, "end")
    }
}
