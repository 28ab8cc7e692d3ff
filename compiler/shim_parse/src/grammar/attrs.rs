//! Bracketed attribute lists: `[version=1.0, macro="X", passByValue]`.

use shim_diagnostic::{Diagnostic, ErrorCode};
use shim_ir::{ParamMode, Span, Version};
use shim_lexer::TokenKind;

use super::Parser;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AttrValue {
    /// Bare flag: `[passByValue]`.
    Flag,
    Number(String),
    Ident(String),
    Str(String),
    /// `name(...)`; the arguments are not interpreted.
    Args,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Attr {
    pub name: String,
    pub value: AttrValue,
    pub span: Span,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Attrs(Vec<Attr>);

impl Attrs {
    pub fn get(&self, name: &str) -> Option<&Attr> {
        self.0.iter().rev().find(|a| a.name == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// `in` unless `out` or `inout` is present; `inout` wins over `out`.
    pub fn param_mode(&self) -> ParamMode {
        if self.has("inout") {
            ParamMode::InOut
        } else if self.has("out") {
            ParamMode::Out
        } else {
            ParamMode::In
        }
    }

    /// Log attributes this node kind does not use. They are accepted so
    /// that full PPAPI IDL files parse.
    pub fn note_ignored(&self, known: &[&str], node: &str) {
        for attr in self.0.iter().filter(|a| !known.contains(&a.name.as_str())) {
            tracing::debug!(attr = %attr.name, node, "ignoring attribute");
        }
    }
}

impl Parser<'_> {
    /// Parse an optional attribute list.
    pub(super) fn parse_attrs(&mut self) -> Result<Attrs, Diagnostic> {
        let mut attrs = Vec::new();
        if !self.cursor.eat(&TokenKind::LBracket) {
            return Ok(Attrs(attrs));
        }
        if self.cursor.eat(&TokenKind::RBracket) {
            return Ok(Attrs(attrs));
        }
        loop {
            attrs.push(self.parse_attr()?);
            if self.cursor.eat(&TokenKind::Comma) {
                continue;
            }
            self.cursor.expect(&TokenKind::RBracket)?;
            return Ok(Attrs(attrs));
        }
    }

    fn parse_attr(&mut self) -> Result<Attr, Diagnostic> {
        let (name, start) = self.cursor.expect_name()?;
        let value = if self.cursor.eat(&TokenKind::Eq) {
            let token = self.cursor.current();
            let value = match &token.kind {
                TokenKind::Number(text) => AttrValue::Number(text.clone()),
                TokenKind::Ident(text) => AttrValue::Ident(text.clone()),
                TokenKind::Str(text) => AttrValue::Str(text.clone()),
                _ => {
                    return Err(Diagnostic::error(ErrorCode::E1006)
                        .with_message(format!(
                            "attribute `{name}` expects a value, found {}",
                            token.kind
                        ))
                        .with_label(token.span, "expected a number, name, or string"));
                }
            };
            self.cursor.advance();
            value
        } else if self.cursor.check(&TokenKind::LParen) {
            self.skip_balanced_parens()?;
            AttrValue::Args
        } else {
            AttrValue::Flag
        };
        Ok(Attr {
            name,
            value,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    fn skip_balanced_parens(&mut self) -> Result<(), Diagnostic> {
        let mut depth = 0usize;
        loop {
            match self.cursor.current_kind() {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.cursor.advance();
                        return Ok(());
                    }
                }
                TokenKind::Eof => return Err(self.cursor.error_here("`)`")),
                kind if kind.is_error() => return Err(self.cursor.error_here("`)`")),
                _ => {}
            }
            self.cursor.advance();
        }
    }

    /// Interpret a `version=`/`deprecate=` value. Numbers are versions;
    /// names refer to a release in this file's label.
    pub(super) fn version_value(&self, attr: &Attr) -> Result<Version, Diagnostic> {
        match &attr.value {
            AttrValue::Number(text) => Version::parse(text).ok_or_else(|| {
                Diagnostic::error(ErrorCode::E1003)
                    .with_message(format!("malformed version `{text}`"))
                    .with_label(attr.span, "expected `major` or `major.minor`")
            }),
            AttrValue::Ident(name) => self
                .file
                .releases
                .get(name)
                .map(|r| r.version)
                .ok_or_else(|| {
                    Diagnostic::error(ErrorCode::E1003)
                        .with_message(format!("unknown release `{name}`"))
                        .with_label(attr.span, "not defined by this file's label")
                }),
            AttrValue::Flag | AttrValue::Str(_) | AttrValue::Args => {
                Err(Diagnostic::error(ErrorCode::E1006)
                    .with_message(format!("attribute `{}` needs a version", attr.name))
                    .with_label(attr.span, "write it as `version=1.0`"))
            }
        }
    }

    pub(super) fn string_value(attr: &Attr) -> Result<String, Diagnostic> {
        match &attr.value {
            AttrValue::Str(text) | AttrValue::Ident(text) => Ok(text.clone()),
            AttrValue::Flag | AttrValue::Number(_) | AttrValue::Args => {
                Err(Diagnostic::error(ErrorCode::E1006)
                    .with_message(format!("attribute `{}` needs a string", attr.name))
                    .with_label(attr.span, "write it as `macro=\"NAME\"`"))
            }
        }
    }
}
