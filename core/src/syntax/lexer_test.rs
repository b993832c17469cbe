use bumpalo::Bump;
use pretty_assertions::assert_eq;

use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::diagnostics::Diagnostic;
use crate::value::Value;

/// Scan everything, including whitespace and bad tokens.
fn lex<'a>(arena: &'a Bump, source: &'a str) -> (Vec<Token<'a>>, Vec<Diagnostic<'a>>) {
    let mut lexer = Lexer::new(arena, source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfFile;
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, lexer.into_diagnostics().into_vec())
}

#[test]
fn scans_every_fixed_token() {
    let cases: &[(&str, TokenKind)] = &[
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("!", TokenKind::Bang),
        ("&&", TokenKind::AmpersandAmpersand),
        ("||", TokenKind::PipePipe),
        ("=", TokenKind::Equals),
        ("==", TokenKind::EqualsEquals),
        ("!=", TokenKind::BangEquals),
        ("true", TokenKind::TrueKeyword),
        ("false", TokenKind::FalseKeyword),
        ("abc", TokenKind::Identifier),
        ("1234", TokenKind::Number),
    ];

    for &(source, kind) in cases {
        let arena = Bump::new();
        let (tokens, diagnostics) = lex(&arena, source);
        assert_eq!(tokens.len(), 2, "{source}");
        assert_eq!(tokens[0].kind, kind, "{source}");
        assert_eq!(tokens[0].text, source);
        assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
        assert!(diagnostics.is_empty(), "{source}");
    }
}

#[test]
fn number_token_carries_its_value() {
    let arena = Bump::new();
    let (tokens, _) = lex(&arena, "123");
    assert_eq!(tokens[0].value, Some(Value::Number(123.0)));
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 3);
}

#[test]
fn zero_is_a_valid_number_literal() {
    let arena = Bump::new();
    let (tokens, diagnostics) = lex(&arena, "0");
    assert_eq!(tokens[0].value, Some(Value::Number(0.0)));
    assert!(diagnostics.is_empty());
}

#[test]
fn keywords_carry_bool_values() {
    let arena = Bump::new();
    let (tokens, _) = lex(&arena, "true false");
    assert_eq!(tokens[0].value, Some(Value::Bool(true)));
    assert_eq!(tokens[2].value, Some(Value::Bool(false)));
}

#[test]
fn keyword_prefix_is_still_an_identifier() {
    let arena = Bump::new();
    let (tokens, _) = lex(&arena, "truthy");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, None);
}

#[test]
fn two_character_operators_are_greedy() {
    let arena = Bump::new();
    let (tokens, _) = lex(&arena, "===");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::EqualsEquals,
            TokenKind::Equals,
            TokenKind::EndOfFile
        ]
    );
}

#[test]
fn lone_ampersand_is_a_bad_token() {
    for source in ["&", "|", "&|"] {
        let arena = Bump::new();
        let (tokens, diagnostics) = lex(&arena, source);
        assert!(
            tokens[..tokens.len() - 1]
                .iter()
                .all(|t| t.kind == TokenKind::Bad),
            "{source}"
        );
        assert_eq!(diagnostics.len(), source.len(), "{source}");
        assert!(diagnostics[0].message.contains("invalid character"));
    }
}

#[test]
fn unrecognized_character_reports_and_advances() {
    let arena = Bump::new();
    let (tokens, diagnostics) = lex(&arena, "1 $ 2");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Whitespace,
            TokenKind::Bad,
            TokenKind::Whitespace,
            TokenKind::Number,
            TokenKind::EndOfFile
        ]
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "invalid character '$' in input");
    assert_eq!(diagnostics[0].span.start, 2);
}

#[test]
fn spans_track_lines_and_columns() {
    let arena = Bump::new();
    let (tokens, _) = lex(&arena, "1 +\n 2");

    let plus = tokens[2];
    assert_eq!(plus.span.line, 1);
    assert_eq!(plus.span.column, 3);

    let two = tokens[4];
    assert_eq!(two.span.line, 2);
    assert_eq!(two.span.column, 2);
    assert_eq!(two.span.start, 5);
}

#[test]
fn empty_input_is_just_end_of_file() {
    let arena = Bump::new();
    let (tokens, diagnostics) = lex(&arena, "");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    assert_eq!(tokens[0].text, "");
    assert!(diagnostics.is_empty());
}

#[test]
fn iterator_stops_after_end_of_file() {
    let arena = Bump::new();
    let lexer = Lexer::new(&arena, "1 + 2");
    let tokens: Vec<_> = lexer.collect();
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
    assert_eq!(
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::EndOfFile)
            .count(),
        1
    );
}
