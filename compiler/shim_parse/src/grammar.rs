//! Recursive-descent grammar for IDL files.
//!
//! ```text
//! file      := item* EOF
//! item      := attrs? (label | aggregate | enum | typedef | interface)
//! label     := 'label' NAME '{' (NAME '=' NUMBER ','?)* '}' ';'
//! aggregate := ('struct' | 'union') NAME '{' (attrs? TYPE NAME dims ';')* '}' ';'
//! enum      := 'enum' NAME '{' (NAME ('=' expr)? ','?)* '}' ';'
//! typedef   := 'typedef' TYPE NAME ('(' params ')')? ';'
//! interface := 'interface' NAME '{' (attrs? TYPE NAME '(' params ')' ';')* '}' ';'
//! params    := (attrs? TYPE NAME dims (',' attrs? TYPE NAME dims)*)?
//! dims      := ('[' (NUMBER | NAME)? ']')*
//! ```

mod attrs;

use shim_diagnostic::{Diagnostic, ErrorCode};
use shim_ir::{
    AggregateKind, ArrayDim, Availability, Directionality, EnumDef, EnumVariant, Field, Interface,
    Member, Param, Release, SourceFile, Span, StructDef, Typedef, TypedefKind, Version,
};
use shim_lexer::{TokenKind, TokenList};

use attrs::Attrs;

use crate::cursor::Cursor;

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    file: SourceFile,
}

impl<'a> Parser<'a> {
    pub fn new(path: &str, source: &'a str, tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            source,
            file: SourceFile::new(path),
        }
    }

    pub fn parse_file(mut self) -> Result<SourceFile, Diagnostic> {
        while !self.cursor.is_at_end() {
            self.parse_item()?;
        }
        Ok(self.file)
    }

    fn parse_item(&mut self) -> Result<(), Diagnostic> {
        let attrs = self.parse_attrs()?;
        match self.cursor.current_kind() {
            TokenKind::Label => {
                attrs.note_ignored(&[], "label");
                self.parse_label()
            }
            TokenKind::Struct => {
                let def = self.parse_aggregate(AggregateKind::Struct, &attrs)?;
                self.file.structs.push(def);
                Ok(())
            }
            TokenKind::Union => {
                let def = self.parse_aggregate(AggregateKind::Union, &attrs)?;
                self.file.structs.push(def);
                Ok(())
            }
            TokenKind::Enum => {
                attrs.note_ignored(&[], "enum");
                let def = self.parse_enum()?;
                self.file.enums.push(def);
                Ok(())
            }
            TokenKind::Typedef => {
                attrs.note_ignored(&[], "typedef");
                let def = self.parse_typedef()?;
                self.file.typedefs.push(def);
                Ok(())
            }
            TokenKind::Interface => {
                let iface = self.parse_interface(&attrs)?;
                self.file.interfaces.push(iface);
                Ok(())
            }
            _ => Err(self.cursor.error_here("a declaration")),
        }
    }

    fn expect_end_of_block(&mut self) -> Result<(), Diagnostic> {
        self.cursor.expect(&TokenKind::RBrace)?;
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(())
    }

    fn parse_label(&mut self) -> Result<(), Diagnostic> {
        let keyword = self.cursor.advance().span;
        let (name, name_span) = self.cursor.expect_ident()?;
        if !self.file.releases.label.is_empty() {
            return Err(Diagnostic::error(ErrorCode::E1005)
                .with_message(format!(
                    "label `{name}` declared, but this file already has label `{}`",
                    self.file.releases.label
                ))
                .with_label(keyword.merge(name_span), "second label"));
        }
        self.file.releases.label = name;

        self.cursor.expect(&TokenKind::LBrace)?;
        while !self.cursor.check(&TokenKind::RBrace) {
            let (release, span) = self.cursor.expect_ident()?;
            self.cursor.expect(&TokenKind::Eq)?;
            let version = self.parse_version_literal()?;
            if self.file.releases.get(&release).is_some() {
                return Err(Diagnostic::error(ErrorCode::E1005)
                    .with_message(format!("release `{release}` is defined twice"))
                    .with_label(span, "duplicate release"));
            }
            self.file.releases.push(Release::new(release, version));
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect_end_of_block()
    }

    fn parse_version_literal(&mut self) -> Result<Version, Diagnostic> {
        let token = self.cursor.current();
        let TokenKind::Number(text) = &token.kind else {
            return Err(self.cursor.error_here("a version number"));
        };
        let version = Version::parse(text).ok_or_else(|| {
            Diagnostic::error(ErrorCode::E1003)
                .with_message(format!("malformed version `{text}`"))
                .with_label(token.span, "expected `major` or `major.minor`")
        })?;
        self.cursor.advance();
        Ok(version)
    }

    /// A type reference. IDL types are bare names.
    fn parse_type(&mut self) -> Result<String, Diagnostic> {
        self.cursor.expect_ident().map(|(name, _)| name)
    }

    fn parse_dims(&mut self) -> Result<Vec<ArrayDim>, Diagnostic> {
        let mut dims = Vec::new();
        while self.cursor.eat(&TokenKind::LBracket) {
            if self.cursor.eat(&TokenKind::RBracket) {
                dims.push(ArrayDim(None));
                continue;
            }
            let size = match self.cursor.current_kind() {
                TokenKind::Number(text) | TokenKind::Ident(text) => text.clone(),
                _ => return Err(self.cursor.error_here("an array size or `]`")),
            };
            self.cursor.advance();
            self.cursor.expect(&TokenKind::RBracket)?;
            dims.push(ArrayDim(Some(size)));
        }
        Ok(dims)
    }

    fn parse_aggregate(
        &mut self,
        kind: AggregateKind,
        attrs: &Attrs,
    ) -> Result<StructDef, Diagnostic> {
        attrs.note_ignored(&["passByValue", "returnByValue"], kind.keyword());
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::LBrace)?;

        let mut fields: Vec<Field> = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            let field_start = self.cursor.current_span();
            let field_attrs = self.parse_attrs()?;
            field_attrs.note_ignored(&[], "field");
            let ty = self.parse_type()?;
            let (field_name, name_span) = self.cursor.expect_name()?;
            let array = self.parse_dims()?;
            self.cursor.expect(&TokenKind::Semicolon)?;
            if fields.iter().any(|f| f.name == field_name) {
                return Err(Diagnostic::error(ErrorCode::E1005)
                    .with_message(format!("field `{field_name}` is declared twice in `{name}`"))
                    .with_label(name_span, "duplicate field"));
            }
            fields.push(Field {
                name: field_name,
                ty,
                array,
                span: field_start.merge(self.cursor.previous_span()),
            });
        }
        self.expect_end_of_block()?;

        Ok(StructDef {
            name,
            kind,
            pass_by_value: attrs.has("passByValue"),
            fields,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    fn parse_enum(&mut self) -> Result<EnumDef, Diagnostic> {
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::LBrace)?;

        let mut variants: Vec<EnumVariant> = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            let variant_attrs = self.parse_attrs()?;
            variant_attrs.note_ignored(&[], "enum variant");
            let (variant, span) = self.cursor.expect_name()?;
            let value = if self.cursor.eat(&TokenKind::Eq) {
                Some(self.parse_expr_text()?)
            } else {
                None
            };
            if variants.iter().any(|v| v.name == variant) {
                return Err(Diagnostic::error(ErrorCode::E1005)
                    .with_message(format!("variant `{variant}` is declared twice in `{name}`"))
                    .with_label(span, "duplicate variant"));
            }
            variants.push(EnumVariant {
                name: variant,
                value,
            });
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect_end_of_block()?;

        Ok(EnumDef {
            name,
            variants,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// Source text of an enum initializer, up to the next top-level `,` or
    /// `}`. The generator only copies it, so it is not evaluated.
    fn parse_expr_text(&mut self) -> Result<String, Diagnostic> {
        let start = self.cursor.current_span().start;
        let mut depth = 0usize;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Comma | TokenKind::RBrace if depth == 0 => break,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    if depth == 0 {
                        return Err(self.cursor.error_here("`,` or `}`"));
                    }
                    depth -= 1;
                }
                TokenKind::Semicolon | TokenKind::Eof => {
                    return Err(self.cursor.error_here("`,` or `}`"));
                }
                kind if kind.is_error() => return Err(self.cursor.error_here("a value")),
                _ => {}
            }
            self.cursor.advance();
        }
        let end = self.cursor.previous_span().end;
        if end <= start {
            return Err(self.cursor.error_here("a value"));
        }
        let text = self
            .source
            .get(Span::new(start, end).to_range())
            .unwrap_or_default();
        Ok(text.trim().to_string())
    }

    fn parse_typedef(&mut self) -> Result<Typedef, Diagnostic> {
        let start = self.cursor.advance().span;
        let ty = self.parse_type()?;
        let (name, _) = self.cursor.expect_ident()?;
        let kind = if self.cursor.check(&TokenKind::LParen) {
            let params = self.parse_params()?;
            TypedefKind::Function { ret: ty, params }
        } else {
            TypedefKind::Alias { target: ty }
        };
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(Typedef {
            name,
            kind,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// Availability from `version=`/`deprecate=`, with a default start.
    fn availability(
        &self,
        attrs: &Attrs,
        default_since: Option<Version>,
    ) -> Result<Availability, Diagnostic> {
        let since = match attrs.get("version") {
            Some(attr) => Some(self.version_value(attr)?),
            None => default_since,
        };
        let deprecated = match attrs.get("deprecate") {
            Some(attr) => Some(self.version_value(attr)?),
            None => None,
        };
        Ok(Availability::new(since, deprecated))
    }

    fn parse_interface(&mut self, attrs: &Attrs) -> Result<Interface, Diagnostic> {
        attrs.note_ignored(&["macro", "version", "deprecate"], "interface");
        let start = self.cursor.advance().span;
        let (name, name_span) = self.cursor.expect_ident()?;
        let Some(direction) = Directionality::from_interface_name(&name) else {
            return Err(Diagnostic::error(ErrorCode::E1004)
                .with_message(format!("interface `{name}` has no `PPB` or `PPP` prefix"))
                .with_label(name_span, "cannot tell which side implements this")
                .with_note("`PPB` interfaces are provided by the browser, `PPP` by the plugin"));
        };
        let macro_name = attrs.get("macro").map(Self::string_value).transpose()?;
        let availability = self.availability(attrs, self.file.releases.first_version())?;

        self.cursor.expect(&TokenKind::LBrace)?;
        let mut members: Vec<Member> = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            let (member, name_span) = self.parse_member()?;
            if let Some(first) = members
                .iter()
                .find(|m| m.name == member.name && m.availability.overlaps(&member.availability))
            {
                return Err(Diagnostic::error(ErrorCode::E1005)
                    .with_message(format!(
                        "member `{}` of `{name}` is declared twice for the same versions",
                        member.name
                    ))
                    .with_label(name_span, "duplicate member")
                    .with_secondary_label(first.span, "first declared here")
                    .with_note("give the declarations non-overlapping `version`/`deprecate` ranges"));
            }
            members.push(member);
        }
        self.expect_end_of_block()?;

        Ok(Interface {
            name,
            direction,
            macro_name,
            members,
            availability,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// One method; also returns the name span for duplicate reporting.
    fn parse_member(&mut self) -> Result<(Member, Span), Diagnostic> {
        let start = self.cursor.current_span();
        let attrs = self.parse_attrs()?;
        attrs.note_ignored(&["version", "deprecate"], "member");
        let availability = self.availability(&attrs, None)?;
        let ret = self.parse_type()?;
        let (name, name_span) = self.cursor.expect_name()?;
        let params = self.parse_params()?;
        self.cursor.expect(&TokenKind::Semicolon)?;
        let member = Member {
            name,
            ret,
            params,
            availability,
            span: start.merge(self.cursor.previous_span()),
        };
        Ok((member, name_span))
    }

    fn parse_params(&mut self) -> Result<Vec<Param>, Diagnostic> {
        self.cursor.expect(&TokenKind::LParen)?;
        let mut params: Vec<Param> = Vec::new();
        if self.cursor.eat(&TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            let start = self.cursor.current_span();
            let attrs = self.parse_attrs()?;
            attrs.note_ignored(&["in", "out", "inout", "version", "deprecate"], "parameter");
            let availability = self.availability(&attrs, None)?;
            let ty = self.parse_type()?;
            let (name, name_span) = self.cursor.expect_name()?;
            let array = self.parse_dims()?;
            if params.iter().any(|p| p.name == name) {
                return Err(Diagnostic::error(ErrorCode::E1005)
                    .with_message(format!("parameter `{name}` is declared twice"))
                    .with_label(name_span, "duplicate parameter"));
            }
            params.push(Param {
                name,
                ty,
                mode: attrs.param_mode(),
                array,
                availability,
                span: start.merge(self.cursor.previous_span()),
            });
            if self.cursor.eat(&TokenKind::Comma) {
                continue;
            }
            self.cursor.expect(&TokenKind::RParen)?;
            return Ok(params);
        }
    }
}
