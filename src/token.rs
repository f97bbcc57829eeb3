use std::fmt;

use crate::object::Object;

/// Defines all token types used by Lox.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenType {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual, Equal, EqualEqual,
    Greater, GreaterEqual, Less, LessEqual,

    Identifier, String, Number,

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    Eof,
}

/// Token.
///
/// Produced by the scanner and read by the printer.  Contains the lexeme, its token type, literal value, and line
/// location.  The printer only ever looks at the lexeme.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub literal: Object,
    pub line: usize,
}

impl Token {
    /// Factory method to create a new Token.
    ///
    pub fn new(token_type: TokenType, lexeme: String, literal: Object, line: usize) -> Token {
        Token { token_type, lexeme, literal, line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} {}", self.token_type, self.lexeme, self.literal)
    }
}

/// token!
///
/// Convenience macro for creating token.  Converts string reference to String.
///
#[macro_export]
macro_rules! token {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        $crate::token::Token::new($a, String::from($b), $c, $d)
    };
}
