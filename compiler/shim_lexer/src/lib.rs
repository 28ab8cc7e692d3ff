//! Tokenizer for PPAPI IDL.
//!
//! Comments and whitespace never reach the parser. Invalid input is not a
//! lexer failure: it becomes an error token and the parser decides how to
//! report it.

mod raw_token;
mod token;

use logos::Logos;
use shim_ir::Span;

use raw_token::RawToken;
pub use token::{Token, TokenKind, TokenList};

/// Lex IDL source into a `TokenList` ending in `Eof`.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::BlockComment) => {
                if slice.len() >= 4 && slice.ends_with("*/") {
                    continue;
                }
                TokenKind::UnterminatedComment
            }
            Ok(raw) => convert_token(raw, slice),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    result
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Interface => TokenKind::Interface,
        RawToken::Struct => TokenKind::Struct,
        RawToken::Union => TokenKind::Union,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Typedef => TokenKind::Typedef,
        RawToken::Label => TokenKind::Label,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Star => TokenKind::Star,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::HexNumber | RawToken::Number => TokenKind::Number(slice.to_string()),
        RawToken::String => {
            let inner = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice);
            TokenKind::Str(inner.to_string())
        }
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
        // Filtered by `lex` before conversion.
        RawToken::LineComment | RawToken::BlockComment => TokenKind::Error,
    }
}

#[cfg(test)]
mod tests;
