use std::fmt;

use shim_ir::Span;

/// Token kinds after conversion from raw logos output.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Ident(String),
    /// Decimal, hex, or dotted (`1.0`) number text.
    Number(String),
    /// String literal contents, without the quotes.
    Str(String),

    // Keywords
    Interface,
    Struct,
    Union,
    Enum,
    Typedef,
    Label,

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Eq,
    Star,
    Minus,
    Plus,
    Shl,
    Lt,
    Gt,
    Pipe,

    /// Unrecognized input.
    Error,
    /// `/*` without a closing `*/`.
    UnterminatedComment,
    Eof,
}

impl TokenKind {
    /// Text of a keyword token, for use where keywords double as names.
    pub fn keyword_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Interface => Some("interface"),
            TokenKind::Struct => Some("struct"),
            TokenKind::Union => Some("union"),
            TokenKind::Enum => Some("enum"),
            TokenKind::Typedef => Some("typedef"),
            TokenKind::Label => Some("label"),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::UnterminatedComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(kw) = self.keyword_str() {
            return write!(f, "keyword `{kw}`");
        }
        match self {
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Number(text) => write!(f, "number `{text}`"),
            TokenKind::Str(text) => write!(f, "string \"{text}\""),
            TokenKind::LBrace => f.write_str("`{`"),
            TokenKind::RBrace => f.write_str("`}`"),
            TokenKind::LParen => f.write_str("`(`"),
            TokenKind::RParen => f.write_str("`)`"),
            TokenKind::LBracket => f.write_str("`[`"),
            TokenKind::RBracket => f.write_str("`]`"),
            TokenKind::Semicolon => f.write_str("`;`"),
            TokenKind::Comma => f.write_str("`,`"),
            TokenKind::Eq => f.write_str("`=`"),
            TokenKind::Star => f.write_str("`*`"),
            TokenKind::Minus => f.write_str("`-`"),
            TokenKind::Plus => f.write_str("`+`"),
            TokenKind::Shl => f.write_str("`<<`"),
            TokenKind::Lt => f.write_str("`<`"),
            TokenKind::Gt => f.write_str("`>`"),
            TokenKind::Pipe => f.write_str("`|`"),
            TokenKind::Error => f.write_str("invalid input"),
            TokenKind::UnterminatedComment => f.write_str("unterminated comment"),
            TokenKind::Eof => f.write_str("end of file"),
            TokenKind::Interface
            | TokenKind::Struct
            | TokenKind::Union
            | TokenKind::Enum
            | TokenKind::Typedef
            | TokenKind::Label => Ok(()),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output. Always ends with exactly one `Eof` token.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Token at `index`, clamped to the trailing `Eof`.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &TokenKind> {
        self.tokens.iter().map(|t| &t.kind)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
