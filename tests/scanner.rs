use treelox::scanner::Scanner;
use treelox::token::{Token, TokenType};

fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
    let scanner = Scanner::new(source.as_bytes());
    let tokens: Vec<Token> = scanner.filter_map(Result::ok).collect();

    assert_eq!(
        tokens.len(),
        expected.len(),
        "token count mismatch for {:?}",
        source
    );

    for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(actual.token_type, *expected_type);
        assert_eq!(actual.lexeme, *expected_lexeme);
    }
}

#[test]
fn test_scanner_01_symbols() {
    assert_token_sequence(
        "({*.,+*})",
        &[
            (TokenType::LEFT_PAREN, "("),
            (TokenType::LEFT_BRACE, "{"),
            (TokenType::STAR, "*"),
            (TokenType::DOT, "."),
            (TokenType::COMMA, ","),
            (TokenType::PLUS, "+"),
            (TokenType::STAR, "*"),
            (TokenType::RIGHT_BRACE, "}"),
            (TokenType::RIGHT_PAREN, ")"),
            (TokenType::EOF, ""),
        ],
    );
}

#[test]
fn test_scanner_02_operators() {
    assert_token_sequence(
        "! != = == < <= > >= / -",
        &[
            (TokenType::BANG, "!"),
            (TokenType::BANG_EQUAL, "!="),
            (TokenType::EQUAL, "="),
            (TokenType::EQUAL_EQUAL, "=="),
            (TokenType::LESS, "<"),
            (TokenType::LESS_EQUAL, "<="),
            (TokenType::GREATER, ">"),
            (TokenType::GREATER_EQUAL, ">="),
            (TokenType::SLASH, "/"),
            (TokenType::MINUS, "-"),
            (TokenType::EOF, ""),
        ],
    );
}

#[test]
fn test_scanner_03_comments_and_whitespace() {
    assert_token_sequence(
        "var x; // the rest is ignored != \"even this\"\nprint x;",
        &[
            (TokenType::VAR, "var"),
            (TokenType::IDENTIFIER, "x"),
            (TokenType::SEMICOLON, ";"),
            (TokenType::PRINT, "print"),
            (TokenType::IDENTIFIER, "x"),
            (TokenType::SEMICOLON, ";"),
            (TokenType::EOF, ""),
        ],
    );
}

#[test]
fn test_scanner_04_string_literal_payload() {
    let tokens: Vec<Token> = Scanner::new(b"\"hello world\"")
        .filter_map(Result::ok)
        .collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");

    match &tokens[0].token_type {
        TokenType::STRING(contents) => assert_eq!(contents, "hello world"),
        other => panic!("expected STRING, got {:?}", other),
    }
}

#[test]
fn test_scanner_05_multiline_string_counts_lines() {
    let tokens: Vec<Token> = Scanner::new(b"\"line one\nline two\"\nprint")
        .filter_map(Result::ok)
        .collect();

    // The string starts on line 1; the tokens after it sit past the
    // embedded newline.
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].token_type, TokenType::PRINT);
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn test_scanner_06_numbers() {
    let tokens: Vec<Token> = Scanner::new(b"123 45.67").filter_map(Result::ok).collect();

    match tokens[0].token_type {
        TokenType::NUMBER(n) => assert_eq!(n, 123.0),
        ref other => panic!("expected NUMBER, got {:?}", other),
    }

    match tokens[1].token_type {
        TokenType::NUMBER(n) => assert_eq!(n, 45.67),
        ref other => panic!("expected NUMBER, got {:?}", other),
    }
}

#[test]
fn test_scanner_07_trailing_dot_is_not_fractional() {
    assert_token_sequence(
        "123.",
        &[
            (TokenType::NUMBER(123.0), "123"),
            (TokenType::DOT, "."),
            (TokenType::EOF, ""),
        ],
    );
}

#[test]
fn test_scanner_08_leading_dot_is_not_a_number() {
    assert_token_sequence(
        ".5",
        &[
            (TokenType::DOT, "."),
            (TokenType::NUMBER(5.0), "5"),
            (TokenType::EOF, ""),
        ],
    );
}

#[test]
fn test_scanner_09_keywords_and_identifiers() {
    assert_token_sequence(
        "class classy _under score99 fun fund",
        &[
            (TokenType::CLASS, "class"),
            (TokenType::IDENTIFIER, "classy"),
            (TokenType::IDENTIFIER, "_under"),
            (TokenType::IDENTIFIER, "score99"),
            (TokenType::FUN, "fun"),
            (TokenType::IDENTIFIER, "fund"),
            (TokenType::EOF, ""),
        ],
    );
}

#[test]
fn test_scanner_10_unexpected_chars_do_not_stop_the_scan() {
    let results: Vec<_> = Scanner::new(b",.$(#").collect();

    // COMMA, DOT, error for '$', LEFT_PAREN, error for '#', EOF.
    assert_eq!(results.len(), 6);

    let error_count = results.iter().filter(|r| r.is_err()).count();
    assert_eq!(error_count, 2);

    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        let rendered = err.to_string();
        assert!(
            rendered.contains("Unexpected character."),
            "unexpected message: {}",
            rendered
        );
        assert!(rendered.starts_with("[line 1] Error: "));
    }

    let kinds: Vec<TokenType> = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|t| t.token_type.clone())
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenType::COMMA,
            TokenType::DOT,
            TokenType::LEFT_PAREN,
            TokenType::EOF,
        ]
    );
}

#[test]
fn test_scanner_11_unterminated_string() {
    let results: Vec<_> = Scanner::new(b"var s = \"oops").collect();

    let errors: Vec<String> = results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .map(ToString::to_string)
        .collect();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Unterminated string."));
}

#[test]
fn test_scanner_12_eof_line_tracks_newlines() {
    let tokens: Vec<Token> = Scanner::new(b"print 1;\nprint 2;\n\nprint 3;\n")
        .filter_map(Result::ok)
        .collect();

    let eof = tokens.last().expect("scanner always emits EOF");
    assert_eq!(eof.token_type, TokenType::EOF);
    assert_eq!(eof.line, 5);
}
