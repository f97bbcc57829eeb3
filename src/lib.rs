//! Prints Lox syntax trees as fully parenthesized Lisp forms.
//!
//! The output is a debugging aid and a format for golden tests: it is deterministic and unambiguous, but it is not
//! Lox source and cannot be parsed back.

pub mod object;
pub mod token;

pub mod expr;
pub mod stmt;

pub mod error;
pub mod visitor;
pub mod printer;

pub use error::PrintError;
pub use printer::{AstPrinter, Part};
pub use visitor::{Node, Visitor};
