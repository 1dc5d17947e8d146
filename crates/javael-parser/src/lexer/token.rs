//! Token definitions for the JavaEL expression language.
//!
//! This module defines the token types and structures used by the lexer.

use std::fmt::{self, Display, Formatter};
use std::ops::Range;

use logos::Logos;

/// The kind of token recognized by the lexer.
///
/// Relational and equality operators accept both symbolic (`>`, `<=`, `==`,
/// `!=`) and word forms (`gt`, `le`, `eq`, `ne`) — both spellings collapse
/// onto the same kind so the parser never has to branch on spelling.
#[derive(Logos, Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Delimiters
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // Logical
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    #[token("!")]
    Not,
    #[token("empty")]
    Empty,

    // Equality
    #[token("eq")]
    #[token("==")]
    Equal,
    #[token("ne")]
    #[token("!=")]
    NotEqual,

    // Relational
    #[token("gt")]
    #[token(">")]
    Greater,
    #[token("lt")]
    #[token("<")]
    Less,
    #[token("ge")]
    #[token(">=")]
    GreaterEqual,
    #[token("le")]
    #[token("<=")]
    LessEqual,

    // Arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("%")]
    Mod,

    // Literals
    #[token("true")]
    #[token("false")]
    BooleanLiteral,
    #[token("null")]
    NullLiteral,
    #[regex(r#""([^\\"]|\\.)*""#)]
    #[regex(r"'([^\\']|\\.)*'")]
    StringLiteral,
    #[regex(r"[0-9]+")]
    IntegerLiteral,

    // Identifiers - checked against keyword tokens above by Logos priority,
    // so `and`/`or`/`eq`/... never reach this arm.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// Synthetic end-of-input marker, never produced by the lexer itself.
    EndOfFile,
    /// Lexical error (unrecognized character or malformed literal).
    Error,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::OpenBracket => write!(f, "["),
            Self::CloseBracket => write!(f, "]"),
            Self::Dot => write!(f, "."),
            Self::Comma => write!(f, ","),
            Self::Question => write!(f, "?"),
            Self::Colon => write!(f, ":"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::Empty => write!(f, "empty"),
            Self::Equal => write!(f, "eq"),
            Self::NotEqual => write!(f, "ne"),
            Self::Greater => write!(f, "gt"),
            Self::Less => write!(f, "lt"),
            Self::GreaterEqual => write!(f, "ge"),
            Self::LessEqual => write!(f, "le"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Mod => write!(f, "%"),
            Self::BooleanLiteral => write!(f, "<boolean>"),
            Self::NullLiteral => write!(f, "null"),
            Self::StringLiteral => write!(f, "<string>"),
            Self::IntegerLiteral => write!(f, "<integer>"),
            Self::Identifier => write!(f, "<identifier>"),
            Self::EndOfFile => write!(f, "<end of input>"),
            Self::Error => write!(f, "<error>"),
        }
    }
}

/// A single lexed token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The lexeme (the actual text of the token) from the source code.
    pub lexeme: &'src str,
    /// The span of the token in the source code.
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: &'src str, span: Range<usize>) -> Self {
        Self { kind, lexeme, span }
    }

    /// Creates a token with an empty lexeme.
    #[must_use]
    pub const fn with_empty_lexeme(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span, lexeme: "" }
    }

    /// Returns the token kind.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind { &self.kind }

    /// Returns the lexeme.
    #[must_use]
    pub const fn lexeme(&self) -> &'src str { self.lexeme }

    /// Returns the span.
    #[must_use]
    pub const fn span(&self) -> &Range<usize> { &self.span }

    /// Returns the string literal's lexeme without its surrounding quotes.
    #[must_use]
    pub fn lexeme_unquote(&self) -> &str {
        if self.kind == TokenKind::StringLiteral && self.lexeme.len() >= 2 {
            &self.lexeme[1..self.lexeme.len() - 1]
        } else {
            self.lexeme
        }
    }

    /// Checks if the token is of the specified kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool { self.kind == kind }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.start, self.span.end)
    }
}
