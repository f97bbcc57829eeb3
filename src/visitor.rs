use crate::object::Object;
use crate::token::Token;

use crate::expr::Expr;
use crate::stmt::Stmt;

/// Visitor.
///
/// `visit_expr` and `visit_stmt` match every variant and dispatch to the matching method.  None of the per-variant
/// methods have defaults, so a new node variant fails to compile until every visitor handles it.
///
pub trait Visitor<T> {
    /// Matches expression and dispatches to appropriate method.
    ///
    fn visit_expr(&mut self, expr: &Expr) -> T {
        match expr {
            Expr::Assign(name, value) => self.visit_assign(name, value),
            Expr::Binary(left, operator, right) => self.visit_binary(left, operator, right),
            Expr::Call(callee, arguments) => self.visit_call(callee, arguments),
            Expr::Get(object, name) => self.visit_get(object, name),
            Expr::Grouping(expr) => self.visit_grouping(expr),
            Expr::Literal(value) => self.visit_literal(value),
            Expr::Logical(left, operator, right) => self.visit_logical(left, operator, right),
            Expr::Set(object, name, value) => self.visit_set(object, name, value),
            Expr::Super(method) => self.visit_super(method),
            Expr::This => self.visit_this(),
            Expr::Unary(operator, right) => self.visit_unary(operator, right),
            Expr::Variable(name) => self.visit_variable(name),
        }
    }

    /// Matches statement and dispatches to appropriate method.
    ///
    fn visit_stmt(&mut self, stmt: &Stmt) -> T {
        match stmt {
            Stmt::Block(stmts) => self.visit_block(stmts),
            Stmt::Class(name, superclass, methods) => self.visit_class(name, superclass.as_deref(), methods),
            Stmt::Expression(expr) => self.visit_expression(expr),
            Stmt::Function(name, params, body) => self.visit_function(name, params, body),
            Stmt::If(condition, then_branch, else_branch) => self.visit_if(condition, then_branch, else_branch.as_deref()),
            Stmt::Print(expr) => self.visit_print(expr),
            Stmt::Return(value) => self.visit_return(value.as_ref()),
            Stmt::While(condition, body) => self.visit_while(condition, body),
            Stmt::Var(name, initializer) => self.visit_var(name, initializer.as_ref()),
        }
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> T;
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> T;
    fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]) -> T;
    fn visit_get(&mut self, object: &Expr, name: &Token) -> T;
    fn visit_grouping(&mut self, expr: &Expr) -> T;
    fn visit_literal(&mut self, value: &Object) -> T;
    fn visit_logical(&mut self, left: &Expr, operator: &Token, right: &Expr) -> T;
    fn visit_set(&mut self, object: &Expr, name: &Token, value: &Expr) -> T;
    fn visit_super(&mut self, method: &Token) -> T;
    fn visit_this(&mut self) -> T;
    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> T;
    fn visit_variable(&mut self, name: &Token) -> T;

    fn visit_block(&mut self, stmts: &[Stmt]) -> T;
    fn visit_class(&mut self, name: &Token, superclass: Option<&Expr>, methods: &[Stmt]) -> T;
    fn visit_expression(&mut self, expr: &Expr) -> T;
    fn visit_function(&mut self, name: &Token, params: &[Token], body: &[Stmt]) -> T;
    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> T;
    fn visit_print(&mut self, expr: &Expr) -> T;
    fn visit_return(&mut self, value: Option<&Expr>) -> T;
    fn visit_while(&mut self, condition: &Expr, body: &Stmt) -> T;
    fn visit_var(&mut self, name: &Token, initializer: Option<&Expr>) -> T;
}

/// Any tree node a visitor can be pointed at.
///
pub trait Node {
    fn accept<T, V: Visitor<T>>(&self, visitor: &mut V) -> T;
}

impl Node for Expr {
    fn accept<T, V: Visitor<T>>(&self, visitor: &mut V) -> T {
        visitor.visit_expr(self)
    }
}

impl Node for Stmt {
    fn accept<T, V: Visitor<T>>(&self, visitor: &mut V) -> T {
        visitor.visit_stmt(self)
    }
}
