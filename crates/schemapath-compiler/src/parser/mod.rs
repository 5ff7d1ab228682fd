//! Parser for schema files.
//!
//! Recursive descent over the token stream from [`lexer`]. Declarations are
//! built directly into the core [`TypeDecl`] model with [`Span`] locations.
//!
//! # Syntax
//!
//! ```text
//! file       = decl*
//! decl       = annotation* ("class" | "interface") IDENT "{" member* "}"
//! member     = annotation* modifier* (field | method) ";"?
//! modifier   = "final" | "static"
//! field      = IDENT ":" type
//! method     = "fn" IDENT "(" (param ("," param)*)? ")" (":" type)?
//! param      = IDENT ":" type
//! type       = path ("<" type ("," type)* ">")? ("[" "]")*
//! annotation = "@" path
//! path       = IDENT ("." IDENT)*
//! ```
//!
//! Parsing a source stops at its first error. Declarations completed before
//! the error are kept.

pub mod lexer;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod parser_tests;

pub use lexer::{Token, TokenKind, lex, token_text};

use rowan::{TextRange, TextSize};

use schemapath_core::{DeclKind, MemberField, MethodDecl, Modifiers, TypeDecl, TypeRef};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::source_map::{Source, SourceId, Span};

/// A declaration parsed from a schema file.
pub type Declaration = TypeDecl<Span>;

/// Declarations of one source plus the diagnostics produced while parsing it.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub declarations: Vec<Declaration>,
    pub diagnostics: Diagnostics,
}

impl ParseResult {
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Parse one source into declarations.
pub fn parse(source: Source<'_>) -> ParseResult {
    let mut diagnostics = Diagnostics::new();
    let declarations = Parser::new(source.id, source.content, &mut diagnostics).parse_file();
    tracing::debug!(
        source = source.kind.display_name(),
        declarations = declarations.len(),
        errors = diagnostics.error_count(),
        "parsed schema source"
    );
    ParseResult {
        declarations,
        diagnostics,
    }
}

/// Parsing was abandoned; the diagnostic has already been emitted.
#[derive(Debug)]
struct Stopped;

type PResult<T> = Result<T, Stopped>;

struct Parser<'s, 'd> {
    source: SourceId,
    text: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: &'d mut Diagnostics,
}

impl<'s, 'd> Parser<'s, 'd> {
    fn new(source: SourceId, text: &'s str, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            source,
            text,
            tokens: lex(text),
            pos: 0,
            diagnostics,
        }
    }

    fn parse_file(mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        while !self.at_eof() {
            match self.parse_decl() {
                Ok(decl) => declarations.push(decl),
                Err(Stopped) => break,
            }
        }
        declarations
    }

    fn parse_decl(&mut self) -> PResult<Declaration> {
        let attributes = self.parse_annotations()?;

        let kind = match self.peek_kind() {
            Some(TokenKind::Class) => DeclKind::Class,
            Some(TokenKind::Interface) => DeclKind::Interface,
            _ => return Err(self.unexpected(DiagnosticKind::ExpectedDeclaration)),
        };
        self.bump();

        let name = self.expect_ident(DiagnosticKind::ExpectedTypeName)?;
        let open = self.expect(TokenKind::LBrace)?;

        let mut decl = TypeDecl::new(self.text_of(&name), kind, self.span(name.span));
        decl.attributes = attributes;

        loop {
            match self.peek_kind() {
                Some(TokenKind::RBrace) => {
                    self.bump();
                    break;
                }
                None => {
                    let open_span = self.span(open.span);
                    let name_span = self.span(name.span);
                    self.diagnostics
                        .report(DiagnosticKind::UnclosedBody, open_span)
                        .related_to(format!("body of `{}`", decl.name), name_span)
                        .emit();
                    return Err(Stopped);
                }
                Some(_) => self.parse_member(&mut decl)?,
            }
        }

        Ok(decl)
    }

    /// `@a.b.Name` markers, recorded by their last segment.
    fn parse_annotations(&mut self) -> PResult<Vec<String>> {
        let mut names = Vec::new();
        while self.eat(TokenKind::At).is_some() {
            if self.peek_kind() != Some(TokenKind::Ident) {
                return Err(self.unexpected_token("annotation name"));
            }
            let mut path = self.parse_path()?;
            names.extend(path.pop());
        }
        Ok(names)
    }

    fn parse_member(&mut self, decl: &mut Declaration) -> PResult<()> {
        let attributes = self.parse_annotations()?;
        let modifiers = self.parse_modifiers()?;

        match self.peek_kind() {
            Some(TokenKind::Fn) => {
                let name = self.parse_method()?;
                decl.methods.push(MethodDecl::new(name, modifiers.is_static));
            }
            Some(TokenKind::Ident) => {
                let mut field = self.parse_field()?.with_modifiers(modifiers);
                field.attributes = attributes;
                decl.fields.push(field);
            }
            _ => return Err(self.unexpected(DiagnosticKind::ExpectedMemberName)),
        }

        self.eat(TokenKind::Semicolon);
        Ok(())
    }

    fn parse_modifiers(&mut self) -> PResult<Modifiers> {
        let mut modifiers = Modifiers::NONE;
        while let Some(token) = self.peek().filter(|t| t.kind.is_modifier()) {
            self.bump();
            let flag = match token.kind {
                TokenKind::Final => &mut modifiers.is_final,
                _ => &mut modifiers.is_static,
            };
            if *flag {
                let span = self.span(token.span);
                let text = self.text_of(&token);
                self.diagnostics
                    .report(DiagnosticKind::DuplicateModifier, span)
                    .message(text)
                    .fix("remove the repeated modifier", "")
                    .emit();
                return Err(Stopped);
            }
            *flag = true;
        }
        Ok(modifiers)
    }

    fn parse_field(&mut self) -> PResult<MemberField<Span>> {
        let name = self.expect_ident(DiagnosticKind::ExpectedMemberName)?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(MemberField::new(self.text_of(&name), ty, self.span(name.span)))
    }

    /// Methods only contribute their name; parameters and return type are checked for syntax.
    fn parse_method(&mut self) -> PResult<String> {
        self.expect(TokenKind::Fn)?;
        let name = self.expect_ident(DiagnosticKind::ExpectedMemberName)?;
        self.expect(TokenKind::LParen)?;

        if self.eat(TokenKind::RParen).is_none() {
            loop {
                if self.peek_kind() != Some(TokenKind::Ident) {
                    return Err(self.unexpected_token("parameter name"));
                }
                self.bump();
                self.expect(TokenKind::Colon)?;
                self.parse_type()?;
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        }

        if self.eat(TokenKind::Colon).is_some() {
            self.parse_type()?;
        }

        Ok(self.text_of(&name))
    }

    fn parse_type(&mut self) -> PResult<TypeRef> {
        if self.peek_kind() != Some(TokenKind::Ident) {
            return Err(self.unexpected(DiagnosticKind::ExpectedType));
        }
        let mut ty = TypeRef::path(self.parse_path()?);

        if self.eat(TokenKind::LAngle).is_some() {
            let mut args = vec![self.parse_type()?];
            while self.eat(TokenKind::Comma).is_some() {
                args.push(self.parse_type()?);
            }
            self.expect(TokenKind::RAngle)?;
            ty = ty.with_args(args);
        }

        while self.eat(TokenKind::LBracket).is_some() {
            self.expect(TokenKind::RBracket)?;
            ty = ty.array_of();
        }

        Ok(ty)
    }

    /// Dotted identifier path. The caller has checked that an identifier comes first.
    fn parse_path(&mut self) -> PResult<Vec<String>> {
        let first = self.expect_ident(DiagnosticKind::ExpectedType)?;
        let mut segments = vec![self.text_of(&first)];
        while self.eat(TokenKind::Dot).is_some() {
            if self.peek_kind() != Some(TokenKind::Ident) {
                return Err(self.unexpected_token("identifier after `.`"));
            }
            let segment = self.expect_ident(DiagnosticKind::ExpectedType)?;
            segments.push(self.text_of(&segment));
        }
        Ok(segments)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == Some(kind) {
            self.bump()
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind) -> PResult<Token> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected_token(kind.describe())),
        }
    }

    fn expect_ident(&mut self, kind: DiagnosticKind) -> PResult<Token> {
        match self.eat(TokenKind::Ident) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kind)),
        }
    }

    /// Report `kind` at the current token, or an unexpected character if the
    /// current token is unrecognized input.
    fn unexpected(&mut self, kind: DiagnosticKind) -> Stopped {
        let span = self.current_span();
        match self.peek() {
            Some(token) if token.kind == TokenKind::Garbage => {
                let text = format!("`{}`", self.text_of(&token));
                self.diagnostics
                    .report(DiagnosticKind::UnexpectedCharacter, span)
                    .message(text)
                    .emit();
            }
            _ => {
                let found = self.found();
                self.diagnostics.report(kind, span).message(found).emit();
            }
        }
        Stopped
    }

    /// Report a missing token described by `expected`.
    fn unexpected_token(&mut self, expected: &str) -> Stopped {
        if self.peek_kind() == Some(TokenKind::Garbage) {
            return self.unexpected(DiagnosticKind::ExpectedToken);
        }
        let detail = format!("{}, {}", expected, self.found());
        self.diagnostics
            .report(DiagnosticKind::ExpectedToken, self.current_span())
            .message(detail)
            .emit();
        Stopped
    }

    fn found(&self) -> String {
        match self.peek() {
            Some(token) => format!("found `{}`", self.text_of(&token)),
            None => "found end of input".to_string(),
        }
    }

    fn current_span(&self) -> Span {
        let range = match self.peek() {
            Some(token) => token.span,
            None => TextRange::empty(TextSize::of(self.text)),
        };
        self.span(range)
    }

    fn span(&self, range: TextRange) -> Span {
        Span::new(self.source, range)
    }

    fn text_of(&self, token: &Token) -> String {
        token_text(self.text, token).to_string()
    }
}
