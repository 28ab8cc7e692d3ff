use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds().cloned().collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

#[test]
fn test_lex_interface_header() {
    assert_eq!(
        kinds("[version=1.0] interface PPB_Foo {"),
        vec![
            TokenKind::LBracket,
            ident("version"),
            TokenKind::Eq,
            TokenKind::Number("1.0".to_string()),
            TokenKind::RBracket,
            TokenKind::Interface,
            ident("PPB_Foo"),
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_need_word_boundary() {
    assert_eq!(
        kinds("interfaces structure label_x"),
        vec![ident("interfaces"), ident("structure"), ident("label_x"), TokenKind::Eof]
    );
}

#[test]
fn test_comments_are_skipped() {
    let source = "/* header\n * more */ enum // trailing\n E";
    assert_eq!(kinds(source), vec![TokenKind::Enum, ident("E"), TokenKind::Eof]);
}

#[test]
fn test_unterminated_block_comment() {
    let tokens = lex("enum /* never closed");
    let kinds: Vec<_> = tokens.kinds().cloned().collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Enum, TokenKind::UnterminatedComment, TokenKind::Eof]
    );
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(5, 20)));
}

#[test]
fn test_slash_star_slash_is_not_a_comment() {
    assert_eq!(
        kinds("/*/"),
        vec![TokenKind::UnterminatedComment, TokenKind::Eof]
    );
}

#[test]
fn test_numbers_and_shifts() {
    assert_eq!(
        kinds("A = 1 << 0x1F"),
        vec![
            ident("A"),
            TokenKind::Eq,
            TokenKind::Number("1".to_string()),
            TokenKind::Shl,
            TokenKind::Number("0x1F".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_contents() {
    assert_eq!(
        kinds(r#"macro="PPB_X_INTERFACE""#),
        vec![
            ident("macro"),
            TokenKind::Eq,
            TokenKind::Str("PPB_X_INTERFACE".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_invalid_character_becomes_error_token() {
    let tokens = lex("int32_t @ x");
    let kinds: Vec<_> = tokens.kinds().cloned().collect();
    assert_eq!(kinds, vec![ident("int32_t"), TokenKind::Error, ident("x"), TokenKind::Eof]);
    assert!(kinds[1].is_error());
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(8, 9)));
}

#[test]
fn test_eof_span_and_clamped_get() {
    let tokens = lex("ab");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(2, 2)));
    assert_eq!(tokens.get(99).map(|t| &t.kind), Some(&TokenKind::Eof));
}

#[test]
fn test_display_for_messages() {
    assert_eq!(TokenKind::Struct.to_string(), "keyword `struct`");
    assert_eq!(ident("x").to_string(), "identifier `x`");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
    assert_eq!(TokenKind::Semicolon.to_string(), "`;`");
}
