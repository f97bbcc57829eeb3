use insta::assert_snapshot;

use lox_printer::object::Object;
use lox_printer::token::{Token, TokenType};
use lox_printer::AstPrinter;
use lox_printer::{assign, binary, block, call, class, expression, function, get, if_stmt, logical, nil, number};
use lox_printer::{print_stmt, return_stmt, set, string, superman, this, token, var, variable, while_stmt};

fn ident(name: &str, line: usize) -> Token {
    token!(TokenType::Identifier, name, Object::None, line)
}

fn op(token_type: TokenType, lexeme: &str, line: usize) -> Token {
    token!(token_type, lexeme, Object::None, line)
}

// class Doughnut { cook() { print "Fry until golden brown."; } }
// class BostonCream < Doughnut { cook() { super.cook(); this.filled = true; } }
// var d = BostonCream();
// d.cook();
#[test]
fn class_program() {
    let doughnut = class!(
        ident("Doughnut", 1),
        None,
        vec![function!(ident("cook", 2), vec![], vec![print_stmt!(string!("Fry until golden brown."))])]
    );
    let boston_cream = class!(
        ident("BostonCream", 6),
        Some(variable!(ident("Doughnut", 6))),
        vec![function!(
            ident("cook", 7),
            vec![],
            vec![
                expression!(call!(superman!(ident("cook", 8)))),
                expression!(set!(this!(), ident("filled", 9), lox_printer::boolean!(true))),
            ]
        )]
    );
    let program = vec![
        doughnut,
        boston_cream,
        var!(ident("d", 13), call!(variable!(ident("BostonCream", 13)))),
        expression!(call!(get!(variable!(ident("d", 14)), ident("cook", 14)))),
    ];

    let lines = AstPrinter::new().print_program(&program).unwrap();

    assert_snapshot!(lines.join("\n"), @r###"
    (classDoughnut (fun cook() (print Fry until golden brown.)))
    (classBostonCream < Doughnut (fun cook() (; (call (super cook)))(; (= this filled true))))
    (var d = (call BostonCream))
    (; (call (. d cook)))
    "###);
}

// fun fib(n) { if (n <= 1) return n; return fib(n - 2) + fib(n - 1); }
// var i = 0;
// while (i < 20 and !nil) { print fib(i); i = i + 1; }
#[test]
fn fibonacci_program() {
    let n = || variable!(ident("n", 2));
    let fib = function!(
        ident("fib", 1),
        vec![ident("n", 1)],
        vec![
            if_stmt!(binary!(n(), op(TokenType::LessEqual, "<=", 2), number!(1.0)), return_stmt!(n())),
            return_stmt!(binary!(
                call!(variable!(ident("fib", 3)), binary!(n(), op(TokenType::Minus, "-", 3), number!(2.0))),
                op(TokenType::Plus, "+", 3),
                call!(variable!(ident("fib", 3)), binary!(n(), op(TokenType::Minus, "-", 3), number!(1.0)))
            )),
        ]
    );
    let i = || variable!(ident("i", 7));
    let main_loop = while_stmt!(
        logical!(
            binary!(i(), op(TokenType::Less, "<", 7), number!(20.0)),
            op(TokenType::And, "and", 7),
            lox_printer::unary!(op(TokenType::Bang, "!", 7), nil!())
        ),
        block![
            print_stmt!(call!(variable!(ident("fib", 8)), i())),
            expression!(assign!(ident("i", 8), binary!(i(), op(TokenType::Plus, "+", 8), number!(1.0))))
        ]
    );
    let program = vec![fib, var!(ident("i", 6), number!(0.0)), main_loop];

    let lines = AstPrinter::new().print_program(&program).unwrap();

    assert_snapshot!(lines.join("\n"), @r###"
    (fun fib(n) (if (<= n 1) (return n))(return (+ (call fib (- n 2)) (call fib (- n 1)))))
    (var i = 0)
    (while (and (< i 20) (! nil)) (block (print (call fib i))(; (= i (+ i 1)))))
    "###);
}

// A malformed class reports the line of its name.
#[test]
fn malformed_class_reports_line() {
    let stmt = class!(ident("Broken", 12), Some(string!("Base")), vec![]);

    let error = AstPrinter::new().print(&stmt).unwrap_err();

    assert_eq!("[line 12] Error at 'Broken': Superclass must be a variable, found Literal.", error.to_string());
}
