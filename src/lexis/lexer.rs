//! Logos-based lexer for single VeLang lines
//!
//! Fast tokenization using the logos crate. The classifier feeds one
//! trimmed line at a time through this lexer; byte offsets let it slice
//! raw segments (parameter lists, initializers) back out of the line.

use logos::Logos;

/// A token with its kind, text, and byte offset into the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset just past this token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Whether this token is whitespace or a comment
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = self.inner.span().start;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire line, dropping whitespace and comments
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).filter(|t| !t.is_trivia()).collect()
}

/// Token kinds the head patterns match against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Ident,
    Integer,
    Decimal,
    String,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Colon,
    Semicolon,
    Eq,
    Comma,
    /// Any character outside the head grammar (operators, stray quotes, ...)
    Error,
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Eq,

    #[token(",")]
    Comma,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::LineComment => TokenKind::Comment,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Integer => TokenKind::Integer,
            LogosToken::Decimal => TokenKind::Decimal,
            LogosToken::String => TokenKind::String,
            LogosToken::LBrace => TokenKind::LBrace,
            LogosToken::RBrace => TokenKind::RBrace,
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::Colon => TokenKind::Colon,
            LogosToken::Semicolon => TokenKind::Semicolon,
            LogosToken::Eq => TokenKind::Eq,
            LogosToken::Comma => TokenKind::Comma,
        }
    }
}
