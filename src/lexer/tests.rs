//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals
//! - Single-character symbols
//! - Peek/consume lookahead behaviour
//! - Error cases and poisoning

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    tokenize(source, Some("test.k".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    assert_eq!(kinds("        "), vec![TokenKind::EndOfInput]);
    assert_eq!(kinds(" \t\r\n \n"), vec![TokenKind::EndOfInput]);
}

#[test]
fn test_peek_whitespace_is_end_of_input_repeatedly() {
    let mut lexer = Lexer::new("  \t \r\n ", None);

    for _ in 0..3 {
        assert_eq!(lexer.peek().unwrap().kind, TokenKind::EndOfInput);
    }
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("def def   def\ndef"),
        vec![
            TokenKind::Def,
            TokenKind::Def,
            TokenKind::Def,
            TokenKind::Def,
            TokenKind::EndOfInput
        ]
    );
    assert_eq!(
        kinds("extern extern   extern"),
        vec![
            TokenKind::Extern,
            TokenKind::Extern,
            TokenKind::Extern,
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        kinds("define externally de ext def1"),
        vec![
            TokenKind::Identifier("define"),
            TokenKind::Identifier("externally"),
            TokenKind::Identifier("de"),
            TokenKind::Identifier("ext"),
            TokenKind::Identifier("def1"),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    assert_eq!(
        kinds("   \r\nid1 Abc78TTTT x"),
        vec![
            TokenKind::Identifier("id1"),
            TokenKind::Identifier("Abc78TTTT"),
            TokenKind::Identifier("x"),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    assert_eq!(
        kinds("   \n\n\r\n1    \r\n888734743  42"),
        vec![
            TokenKind::Number("1"),
            TokenKind::Number("888734743"),
            TokenKind::Number("42"),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_number_stops_at_decimal_point() {
    assert_eq!(
        kinds("3.14"),
        vec![
            TokenKind::Number("3"),
            TokenKind::Character("."),
            TokenKind::Number("14"),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_digit_then_letters_splits() {
    assert_eq!(
        kinds("12ab"),
        vec![
            TokenKind::Number("12"),
            TokenKind::Identifier("ab"),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_tokenize_characters() {
    assert_eq!(
        kinds("   ( ) - + * , .   "),
        vec![
            TokenKind::Character("("),
            TokenKind::Character(")"),
            TokenKind::Character("-"),
            TokenKind::Character("+"),
            TokenKind::Character("*"),
            TokenKind::Character(","),
            TokenKind::Character("."),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("foo(a,b)*2"),
        vec![
            TokenKind::Identifier("foo"),
            TokenKind::Character("("),
            TokenKind::Identifier("a"),
            TokenKind::Character(","),
            TokenKind::Identifier("b"),
            TokenKind::Character(")"),
            TokenKind::Character("*"),
            TokenKind::Number("2"),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("  def foo", Some("test.k".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 2);
    assert_eq!(tokens[0].span.end.0, 5);
    assert_eq!(tokens[1].span.start.0, 6);
    assert_eq!(tokens[1].span.end.0, 9);
    assert_eq!(tokens[2].span.start.0, 9);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(*tokens[1].span.start.1, "test.k");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x", None).unwrap();
    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_peek_is_stable_until_consume() {
    let mut lexer = Lexer::new("a b", None);

    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Identifier("a"));
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Identifier("a"));

    lexer.consume().unwrap();
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Identifier("b"));
}

#[test]
fn test_consume_without_peek() {
    let mut lexer = Lexer::new("a b", None);

    lexer.consume().unwrap();
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Identifier("b"));
}

#[test]
fn test_consume_past_end_is_noop() {
    let mut lexer = Lexer::new("a", None);

    lexer.consume().unwrap();
    lexer.consume().unwrap();
    lexer.consume().unwrap();
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::EndOfInput);
}

#[test]
fn test_unrecognised_character() {
    let result = tokenize("1 + $", Some("test.k".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_byte(), b'$');
    assert_eq!(error.get_position().0, 4);
    assert_eq!(
        error.to_string(),
        "could not continue lexing, unknown character found: '$'"
    );
}

#[test]
fn test_poisoned_lexer_repeats_error() {
    let mut lexer = Lexer::new("a ; b", None);

    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Identifier("a"));
    lexer.consume().unwrap();

    let first = lexer.peek().unwrap_err();
    let second = lexer.peek().unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.get_byte(), b';');

    assert_eq!(lexer.consume().unwrap_err(), first);
    assert_eq!(lexer.peek().unwrap_err(), first);
}

#[test]
fn test_non_ascii_byte_poisons() {
    let error = tokenize("x é", None).unwrap_err();

    assert_eq!(error.get_byte(), 0xc3);
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_lexemes_borrow_source() {
    let source = String::from("alpha 123 (");
    let tokens = tokenize(&source, None).unwrap();

    for token in &tokens {
        if let Some(text) = token.kind.lexeme() {
            assert_eq!(&source[token.span.range()], text);
            assert!(source.as_bytes().as_ptr_range().contains(&text.as_ptr()));
        }
    }
}
