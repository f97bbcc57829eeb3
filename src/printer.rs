use crate::error::{PrintError, print_error};

use crate::object::Object;
use crate::token::Token;

use crate::expr::Expr;
use crate::stmt::Stmt;
use crate::visitor::{Node, Visitor};

type PrintResult = Result<String, PrintError>;

/// One piece of a parenthesized form.
///
/// A `Seq` is spliced into the surrounding form: each of its parts gets the usual leading space, but the sequence
/// itself adds neither a space nor parentheses, so an empty sequence contributes nothing.
///
#[derive(Debug, Clone)]
pub enum Part<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Token(&'a Token),
    Seq(Vec<Part<'a>>),
    Text(&'a str),
    Value(&'a Object),
}

/// Ast Printer.
///
/// Renders a syntax tree as a fully parenthesized Lisp form, for debugging the parser and for golden tests.
///
/// # Example
///
/// ```
/// use lox_printer::object::Object;
/// use lox_printer::token::TokenType;
/// use lox_printer::{binary, number, token, AstPrinter};
///
/// let expr = binary!(number!(1.0), token!(TokenType::Plus, "+", Object::None, 1), number!(2.0));
///
/// assert_eq!("(+ 1 2)", AstPrinter::new().print(&*expr).unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> AstPrinter {
        AstPrinter
    }

    /// Prints an expression or a statement.
    ///
    /// # Errors
    ///
    /// Returns a print error if a class has a superclass that is not a variable, or a method that is not a function.
    ///
    pub fn print<N: Node>(&mut self, node: &N) -> PrintResult {
        node.accept(self)
    }

    /// Prints each top level statement of a program on its own.
    ///
    pub fn print_program(&mut self, stmts: &[Stmt]) -> Result<Vec<String>, PrintError> {
        stmts.iter().map(|stmt| self.visit_stmt(stmt)).collect()
    }

    /// Builds `(name part part ...)`, with a single space before every part.
    ///
    pub fn parenthesize(&mut self, name: &str, parts: &[Part]) -> PrintResult {
        let mut builder = String::from("(");
        builder.push_str(name);

        self.transform(&mut builder, parts)?;
        builder.push(')');

        Ok(builder)
    }

    fn transform(&mut self, builder: &mut String, parts: &[Part]) -> Result<(), PrintError> {
        for part in parts {
            let rendered = match part {
                Part::Seq(parts) => {
                    self.transform(builder, parts)?;
                    continue;
                }
                Part::Expr(expr) => self.visit_expr(expr)?,
                Part::Stmt(stmt) => self.visit_stmt(stmt)?,
                Part::Token(token) => token.lexeme.clone(),
                Part::Text(text) => text.to_string(),
                Part::Value(value) => value.to_string(),
            };

            builder.push(' ');
            builder.push_str(&rendered);
        }
        Ok(())
    }
}

impl Visitor<PrintResult> for AstPrinter {
    fn visit_assign(&mut self, name: &Token, value: &Expr) -> PrintResult {
        self.parenthesize("=", &[Part::Token(name), Part::Expr(value)])
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> PrintResult {
        self.parenthesize(&operator.lexeme, &[Part::Expr(left), Part::Expr(right)])
    }

    fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]) -> PrintResult {
        let arguments = arguments.iter().map(Part::Expr).collect();

        self.parenthesize("call", &[Part::Expr(callee), Part::Seq(arguments)])
    }

    fn visit_get(&mut self, object: &Expr, name: &Token) -> PrintResult {
        self.parenthesize(".", &[Part::Expr(object), Part::Token(name)])
    }

    fn visit_grouping(&mut self, expr: &Expr) -> PrintResult {
        self.parenthesize("group", &[Part::Expr(expr)])
    }

    fn visit_literal(&mut self, value: &Object) -> PrintResult {
        Ok(value.to_string())
    }

    fn visit_logical(&mut self, left: &Expr, operator: &Token, right: &Expr) -> PrintResult {
        self.parenthesize(&operator.lexeme, &[Part::Expr(left), Part::Expr(right)])
    }

    // Same head as Assign; the extra object part tells the two apart.
    fn visit_set(&mut self, object: &Expr, name: &Token, value: &Expr) -> PrintResult {
        self.parenthesize("=", &[Part::Expr(object), Part::Token(name), Part::Expr(value)])
    }

    fn visit_super(&mut self, method: &Token) -> PrintResult {
        self.parenthesize("super", &[Part::Token(method)])
    }

    fn visit_this(&mut self) -> PrintResult {
        Ok(String::from("this"))
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> PrintResult {
        self.parenthesize(&operator.lexeme, &[Part::Expr(right)])
    }

    fn visit_variable(&mut self, name: &Token) -> PrintResult {
        Ok(name.lexeme.clone())
    }

    fn visit_block(&mut self, stmts: &[Stmt]) -> PrintResult {
        let mut builder = String::from("(block");

        if !stmts.is_empty() {
            builder.push(' ');
        }
        for stmt in stmts {
            builder.push_str(&self.visit_stmt(stmt)?);
        }
        builder.push(')');

        Ok(builder)
    }

    fn visit_class(&mut self, name: &Token, superclass: Option<&Expr>, methods: &[Stmt]) -> PrintResult {
        let mut builder = format!("(class{}", name.lexeme);

        if let Some(superclass) = superclass {
            if !matches!(superclass, Expr::Variable(_)) {
                let message = format!("Superclass must be a variable, found {}.", superclass.kind());
                return Err(print_error!(name, message));
            }
            builder.push_str(" < ");
            builder.push_str(&self.visit_expr(superclass)?);
        }

        for method in methods {
            if !matches!(method, Stmt::Function(..)) {
                let message = format!("Class method must be a function, found {}.", method.kind());
                return Err(print_error!(name, message));
            }
            builder.push(' ');
            builder.push_str(&self.visit_stmt(method)?);
        }
        builder.push(')');

        Ok(builder)
    }

    fn visit_expression(&mut self, expr: &Expr) -> PrintResult {
        self.parenthesize(";", &[Part::Expr(expr)])
    }

    fn visit_function(&mut self, name: &Token, params: &[Token], body: &[Stmt]) -> PrintResult {
        let params: Vec<&str> = params.iter().map(|param| param.lexeme.as_str()).collect();
        let mut builder = format!("(fun {}({}) ", name.lexeme, params.join(" "));

        for stmt in body {
            builder.push_str(&self.visit_stmt(stmt)?);
        }
        builder.push(')');

        Ok(builder)
    }

    // An absent else branch prints the then-only form, never "if-else".
    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> PrintResult {
        match else_branch {
            Some(else_branch) => self.parenthesize(
                "if-else",
                &[Part::Expr(condition), Part::Stmt(then_branch), Part::Stmt(else_branch)],
            ),
            None => self.parenthesize("if", &[Part::Expr(condition), Part::Stmt(then_branch)]),
        }
    }

    fn visit_print(&mut self, expr: &Expr) -> PrintResult {
        self.parenthesize("print", &[Part::Expr(expr)])
    }

    fn visit_return(&mut self, value: Option<&Expr>) -> PrintResult {
        match value {
            Some(value) => self.parenthesize("return", &[Part::Expr(value)]),
            None => Ok(String::from("(return)")),
        }
    }

    fn visit_while(&mut self, condition: &Expr, body: &Stmt) -> PrintResult {
        self.parenthesize("while", &[Part::Expr(condition), Part::Stmt(body)])
    }

    fn visit_var(&mut self, name: &Token, initializer: Option<&Expr>) -> PrintResult {
        match initializer {
            Some(initializer) => self.parenthesize("var", &[Part::Token(name), Part::Text("="), Part::Expr(initializer)]),
            None => self.parenthesize("var", &[Part::Token(name)]),
        }
    }
}
