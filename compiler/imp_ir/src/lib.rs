//! IMP IR - program representation for the IMP interpreter.
//!
//! This crate holds the data every other crate agrees on:
//! - `Name` for variable identifiers
//! - `BinaryOp` / `UnaryOp` for expression operators
//! - `Expr`, `Stmt` and `Program` trees
//!
//! There is no parser. Programs are built directly from these types, usually
//! through the smart constructors on `Expr` and `Stmt`. Every tree type has a
//! `Display` impl that renders a readable concrete form, used by `imp show`
//! and in test failure output.

pub mod ast;
mod name;

pub use ast::{BinaryOp, Constant, Expr, Program, Stmt, UnaryOp};
pub use name::Name;
