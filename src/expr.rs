use crate::token::Token;
use crate::object::Object;

pub type ExprRef = Box<Expr>;

/// Expression.
///
/// Every expression the Lox grammar can produce.  Children are owned by their parent, so a tree built from these
/// nodes is always acyclic.
///
#[derive(PartialEq, Clone, Debug)]
pub enum Expr {
    Assign(Token, ExprRef),
    Binary(ExprRef, Token, ExprRef),
    Call(ExprRef, Vec<Expr>),
    Get(ExprRef, Token),
    Grouping(ExprRef),
    Literal(Object),
    Logical(ExprRef, Token, ExprRef),
    Set(ExprRef, Token, ExprRef),
    Super(Token),
    This,
    Unary(Token, ExprRef),
    Variable(Token),
}

impl Expr {
    /// Name of the variant, for error messages.
    ///
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Assign(..) => "Assign",
            Expr::Binary(..) => "Binary",
            Expr::Call(..) => "Call",
            Expr::Get(..) => "Get",
            Expr::Grouping(..) => "Grouping",
            Expr::Literal(..) => "Literal",
            Expr::Logical(..) => "Logical",
            Expr::Set(..) => "Set",
            Expr::Super(..) => "Super",
            Expr::This => "This",
            Expr::Unary(..) => "Unary",
            Expr::Variable(..) => "Variable",
        }
    }
}

#[macro_export]
macro_rules! number {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Literal($crate::object::Object::from({
            let number: f64 = $a;
            number
        })))
    };
}

#[macro_export]
macro_rules! string {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Literal($crate::object::Object::from($a)))
    };
}

#[macro_export]
macro_rules! boolean {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Literal($crate::object::Object::from($a)))
    };
}

#[macro_export]
macro_rules! nil {
    () => {
        Box::new($crate::expr::Expr::Literal($crate::object::Object::None))
    };
}

#[macro_export]
macro_rules! literal {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Literal($a))
    };
}

#[macro_export]
macro_rules! this {
    () => {
        Box::new($crate::expr::Expr::This)
    };
}

#[macro_export]
macro_rules! superman {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Super($a))
    };
}

#[macro_export]
macro_rules! grouping {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Grouping($a))
    };
}

#[macro_export]
macro_rules! variable {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Variable($a))
    };
}

#[macro_export]
macro_rules! assign {
    ($a:expr,$b:expr) => {
        Box::new($crate::expr::Expr::Assign($a,$b))
    };
}

#[macro_export]
macro_rules! binary {
    ($a:expr,$b:expr,$c:expr) => {
        Box::new($crate::expr::Expr::Binary($a,$b,$c))
    };
}

#[macro_export]
macro_rules! logical {
    ($a:expr,$b:expr,$c:expr) => {
        Box::new($crate::expr::Expr::Logical($a,$b,$c))
    };
}

/// call!
///
/// Arguments are given as boxed expressions, the same as every other child.
///
#[macro_export]
macro_rules! call {
    ($a:expr) => {
        Box::new($crate::expr::Expr::Call($a, Vec::new()))
    };
    ($a:expr, $($arg:expr),+ $(,)?) => {
        Box::new($crate::expr::Expr::Call($a, vec![$(*$arg),+]))
    };
}

#[macro_export]
macro_rules! unary {
    ($a:expr,$b:expr) => {
        Box::new($crate::expr::Expr::Unary($a,$b))
    };
}

#[macro_export]
macro_rules! get {
    ($a:expr,$b:expr) => {
        Box::new($crate::expr::Expr::Get($a,$b))
    };
}

#[macro_export]
macro_rules! set {
    ($a:expr,$b:expr,$c:expr) => {
        Box::new($crate::expr::Expr::Set($a,$b,$c))
    };
}
