use treelox::ast_printer::AstPrinter;
use treelox::error::LoxError;
use treelox::parser::Parser;
use treelox::scanner::Scanner;
use treelox::stmt::Stmt;
use treelox::token::Token;

fn parse_source(source: &str) -> (Vec<Stmt>, Vec<LoxError>) {
    let tokens: Vec<Token> = Scanner::new(source.as_bytes())
        .filter_map(Result::ok)
        .collect();

    Parser::new(tokens).parse()
}

/// Parse a single expression statement and render the expression.
fn parse_expr(source: &str) -> String {
    let (statements, errors) = parse_source(source);

    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
    assert_eq!(statements.len(), 1);

    match &statements[0] {
        Stmt::Expression(expr) => AstPrinter::print(expr),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_expr("1 + 2 * 3;"), "(+ 1.0 (* 2.0 3.0))");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(parse_expr("1 - 2 - 3;"), "(- (- 1.0 2.0) 3.0)");
}

#[test]
fn unary_binds_tighter_than_factor() {
    assert_eq!(parse_expr("-1 * 2;"), "(* (- 1.0) 2.0)");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(parse_expr("(1 + 2) * 3;"), "(* (group (+ 1.0 2.0)) 3.0)");
}

#[test]
fn comparison_binds_tighter_than_equality() {
    assert_eq!(parse_expr("1 < 2 == true;"), "(== (< 1.0 2.0) true)");
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(parse_expr("a or b and c;"), "(or a (and b c))");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(parse_expr("a = b = 1;"), "(= a (= b 1.0))");
}

#[test]
fn assignment_through_property_becomes_set() {
    assert_eq!(parse_expr("a.b = 1;"), "(=. a b 1.0)");
}

#[test]
fn call_and_property_chains() {
    assert_eq!(parse_expr("a.b(1).c;"), "(. (call (. a b) 1.0) c)");
}

#[test]
fn super_access_parses_inside_expressions() {
    assert_eq!(parse_expr("super.method(1);"), "(call (super method) 1.0)");
}

#[test]
fn for_loop_desugars_to_block_and_while() {
    let (statements, errors) = parse_source("for (var i = 0; i < 3; i = i + 1) print i;");

    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
    assert_eq!(statements.len(), 1);

    // { var i = 0; while (i < 3) { print i; i = i + 1; } }
    let Stmt::Block(outer) = &statements[0] else {
        panic!("expected desugared block, got {:?}", statements[0]);
    };

    assert_eq!(outer.len(), 2);
    assert!(matches!(outer[0], Stmt::Var { .. }));

    let Stmt::While { body, .. } = &outer[1] else {
        panic!("expected while loop, got {:?}", outer[1]);
    };

    let Stmt::Block(inner) = body.as_ref() else {
        panic!("expected inner block, got {:?}", body);
    };

    assert!(matches!(inner[0], Stmt::Print(_)));
    assert!(matches!(inner[1], Stmt::Expression(_)));
}

#[test]
fn bare_for_loop_gets_a_true_condition() {
    let (statements, errors) = parse_source("for (;;) print 1;");

    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);

    // No initializer and no increment, so no wrapping blocks.
    let Stmt::While { condition, body } = &statements[0] else {
        panic!("expected while loop, got {:?}", statements[0]);
    };

    assert_eq!(AstPrinter::print(condition), "true");
    assert!(matches!(body.as_ref(), Stmt::Print(_)));
}

#[test]
fn invalid_assignment_target_reports_without_panicking() {
    let (statements, errors) = parse_source("1 = 2;");

    // The expression is still produced; only the error is recorded.
    assert_eq!(statements.len(), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "[line 1] Error at '=': Invalid assignment target."
    );
}

#[test]
fn synchronization_surfaces_multiple_errors_in_one_pass() {
    let (statements, errors) = parse_source("var = 1;\nprint 2;\n+;\n");

    assert_eq!(errors.len(), 2, "errors: {:?}", errors);
    assert!(errors[0].to_string().contains("Expect variable name."));
    assert!(errors[1].to_string().contains("Expect expression."));

    // The statement between the two bad ones survives.
    assert_eq!(statements.len(), 1);
    assert!(matches!(statements[0], Stmt::Print(_)));
}

#[test]
fn more_than_255_arguments_is_an_error_but_parsing_continues() {
    let args = vec!["0"; 256].join(", ");
    let (statements, errors) = parse_source(&format!("f({});", args));

    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .to_string()
        .contains("Can't have more than 255 arguments."));
    assert_eq!(statements.len(), 1);
}

#[test]
fn missing_semicolon_is_reported_at_end() {
    let (_, errors) = parse_source("print 1");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "[line 1] Error at end: Expect ';' after value."
    );
}

#[test]
fn class_declaration_with_superclass_and_methods() {
    let (statements, errors) = parse_source("class B < A { init(x) {} method() {} }");

    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);

    let Stmt::Class {
        name,
        superclass,
        methods,
    } = &statements[0]
    else {
        panic!("expected class declaration, got {:?}", statements[0]);
    };

    assert_eq!(name.lexeme, "B");
    assert!(superclass.is_some());
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0].name.lexeme, "init");
    assert_eq!(methods[1].name.lexeme, "method");
}
