//! Token cursor for navigating the token stream.

use shim_diagnostic::{expected_identifier, unexpected_token, Diagnostic, ErrorCode};
use shim_ir::Span;
use shim_lexer::{Token, TokenKind, TokenList};

/// Position in a token stream that always ends in `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// The current token. Past the end this is the trailing `Eof`.
    pub fn current(&self) -> &'a Token {
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span::DUMMY,
        };
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    pub fn current_span(&self) -> Span {
        self.current().span
    }

    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).map_or(Span::DUMMY, |t| t.span),
            None => Span::DUMMY,
        }
    }

    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume `kind` if it is next.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, Diagnostic> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(&kind.to_string()))
        }
    }

    /// Consume an identifier and return its text and span.
    pub fn expect_ident(&mut self) -> Result<(String, Span), Diagnostic> {
        let token = self.current();
        match &token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok((name.clone(), token.span))
            }
            other if other.is_error() => Err(self.lex_error()),
            other => Err(expected_identifier(token.span, &other.to_string())),
        }
    }

    /// Like `expect_ident`, but also accepts keywords. Parameter and field
    /// names may be spelled like keywords (`[in] PP_Var label`).
    pub fn expect_name(&mut self) -> Result<(String, Span), Diagnostic> {
        let token = self.current();
        if let Some(kw) = token.kind.keyword_str() {
            self.advance();
            return Ok((kw.to_string(), token.span));
        }
        self.expect_ident()
    }

    /// Error for whatever token is current, given what was expected.
    pub fn error_here(&self, expected: &str) -> Diagnostic {
        let token = self.current();
        if token.kind.is_error() {
            return self.lex_error();
        }
        unexpected_token(token.span, expected, &token.kind.to_string())
    }

    fn lex_error(&self) -> Diagnostic {
        let token = self.current();
        match token.kind {
            TokenKind::UnterminatedComment => Diagnostic::error(ErrorCode::E0002)
                .with_message("unterminated block comment")
                .with_label(Span::new(token.span.start, token.span.start + 2), "comment starts here")
                .with_note("close it with `*/`"),
            _ => Diagnostic::error(ErrorCode::E0001)
                .with_message("invalid character in IDL source")
                .with_label(token.span, "not part of any token"),
        }
    }
}
