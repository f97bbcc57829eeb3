use std::error::Error;
use std::fmt;

use crate::token::Token;

/// Print Error.
///
/// Raised when the printer meets a tree the parser could never have built, such as a class whose superclass is not a
/// variable.  Carries the token of the enclosing declaration so the report points at a line.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PrintError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error at '{}': {}", self.token.line, self.token.lexeme, self.message)
    }
}

impl Error for PrintError {}

/// print_error!
///
/// Convenience macro to create a Print Error.  Clones the token and creates a String.
///
macro_rules! print_error {
    ($a:expr,$b:expr) => {
        PrintError { token: $a.clone(), message: String::from($b) }
    };
}
pub (crate) use print_error;
