use crate::expr::{Expr, ExprRef};
use crate::token::Token;

pub type StmtRef = Box<Stmt>;

/// Statement.
///
/// `Class` keeps its superclass as an expression and its methods as statements, the way the parser produces them.
/// Only a `Variable` superclass and `Function` methods are well formed; the printer rejects anything else.
///
#[derive(PartialEq, Clone, Debug)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Class(Token, Option<ExprRef>, Vec<Stmt>),
    Expression(Expr),
    Function(Token, Vec<Token>, Vec<Stmt>),
    If(Expr, StmtRef, Option<StmtRef>),
    Print(Expr),
    Return(Option<Expr>),
    While(Expr, StmtRef),
    Var(Token, Option<Expr>),
}

impl Stmt {
    /// Name of the variant, for error messages.
    ///
    pub fn kind(&self) -> &'static str {
        match self {
            Stmt::Block(..) => "Block",
            Stmt::Class(..) => "Class",
            Stmt::Expression(..) => "Expression",
            Stmt::Function(..) => "Function",
            Stmt::If(..) => "If",
            Stmt::Print(..) => "Print",
            Stmt::Return(..) => "Return",
            Stmt::While(..) => "While",
            Stmt::Var(..) => "Var",
        }
    }
}

// Statement macros take the boxed expressions built by the expression macros and return an unboxed Stmt.

#[macro_export]
macro_rules! expression {
    ($a:expr) => {
        $crate::stmt::Stmt::Expression(*$a)
    };
}

#[macro_export]
macro_rules! print_stmt {
    ($a:expr) => {
        $crate::stmt::Stmt::Print(*$a)
    };
}

#[macro_export]
macro_rules! return_stmt {
    () => {
        $crate::stmt::Stmt::Return(None)
    };
    ($a:expr) => {
        $crate::stmt::Stmt::Return(Some(*$a))
    };
}

#[macro_export]
macro_rules! var {
    ($a:expr) => {
        $crate::stmt::Stmt::Var($a, None)
    };
    ($a:expr,$b:expr) => {
        $crate::stmt::Stmt::Var($a, Some(*$b))
    };
}

#[macro_export]
macro_rules! block {
    ($($stmt:expr),* $(,)?) => {
        $crate::stmt::Stmt::Block(vec![$($stmt),*])
    };
}

#[macro_export]
macro_rules! if_stmt {
    ($a:expr,$b:expr) => {
        $crate::stmt::Stmt::If(*$a, Box::new($b), None)
    };
    ($a:expr,$b:expr,$c:expr) => {
        $crate::stmt::Stmt::If(*$a, Box::new($b), Some(Box::new($c)))
    };
}

#[macro_export]
macro_rules! while_stmt {
    ($a:expr,$b:expr) => {
        $crate::stmt::Stmt::While(*$a, Box::new($b))
    };
}

#[macro_export]
macro_rules! function {
    ($a:expr,$b:expr,$c:expr) => {
        $crate::stmt::Stmt::Function($a, $b, $c)
    };
}

#[macro_export]
macro_rules! class {
    ($a:expr,$b:expr,$c:expr) => {
        $crate::stmt::Stmt::Class($a, $b, $c)
    };
}
