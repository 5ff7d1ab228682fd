//! Lexer for schema files.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! source only when needed. Adjacent unrecognized characters are coalesced
//! into a single `Garbage` token; skipped whitespace or comments end the run.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
pub enum TokenKind {
    #[token("class")]
    Class,

    #[token("interface")]
    Interface,

    #[token("fn")]
    Fn,

    #[token("final")]
    Final,

    #[token("static")]
    Static,

    #[token("@")]
    At,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(".")]
    Dot,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    /// Run of characters the lexer does not recognize.
    Garbage,
}

impl TokenKind {
    /// How the token is written, for "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Class => "`class`",
            TokenKind::Interface => "`interface`",
            TokenKind::Fn => "`fn`",
            TokenKind::Final => "`final`",
            TokenKind::Static => "`static`",
            TokenKind::At => "`@`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LAngle => "`<`",
            TokenKind::RAngle => "`>`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Dot => "`.`",
            TokenKind::Ident => "identifier",
            TokenKind::Garbage => "unrecognized input",
        }
    }

    pub fn is_modifier(self) -> bool {
        matches!(self, TokenKind::Final | TokenKind::Static)
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

pub(crate) fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut garbage: Option<Range<usize>> = None;

    while let Some(next) = lexer.next() {
        let span = lexer.span();
        match next {
            Ok(kind) => {
                flush_garbage(&mut tokens, garbage.take());
                tokens.push(Token::new(kind, range_to_text_range(span)));
            }
            Err(()) => {
                if let Some(run) = garbage.as_mut().filter(|run| run.end == span.start) {
                    run.end = span.end;
                } else {
                    flush_garbage(&mut tokens, garbage.replace(span));
                }
            }
        }
    }
    flush_garbage(&mut tokens, garbage);

    tokens
}

fn flush_garbage(tokens: &mut Vec<Token>, run: Option<Range<usize>>) {
    if let Some(run) = run {
        tokens.push(Token::new(TokenKind::Garbage, range_to_text_range(run)));
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
