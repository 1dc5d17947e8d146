//! Error types surfaced by the lexer and parser.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// The phase of the pipeline a [`SyntaxError`] was raised in.
///
/// Only `Lex` and `Parse` occur in this crate; later phases
/// (`ternary-analysis`, `fragmentation`, `normalization`, `translation`)
/// raise their own error kinds in `javael-analyzer`/`javael-compiler`, but
/// share this same tag so a caller can report them uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Tokenizing raw source text.
    Lex,
    /// Building the AST from a token stream.
    Parse,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => write!(f, "lex"),
            Self::Parse => write!(f, "parse"),
        }
    }
}

/// A syntax error: a lexical or grammatical problem with no recovery.
///
/// Parsing stops at the first `SyntaxError` — JavaEL expressions are short
/// enough that collecting a batch of diagnostics brings no benefit.
#[derive(Debug, Clone, Error)]
#[error("{phase} error at {line}:{column}: unexpected {offending_symbol}")]
pub struct SyntaxError {
    /// Which phase raised the error.
    pub phase: Phase,
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column number.
    pub column: usize,
    /// The token or character that triggered the error.
    pub offending_symbol: String,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(phase: Phase, line: usize, column: usize, offending_symbol: impl Into<String>) -> Self {
        Self { phase, line, column, offending_symbol: offending_symbol.into() }
    }
}

/// Errors the parser can raise. Currently just a thin wrapper around
/// [`SyntaxError`], kept as its own enum so later variants (e.g. a
/// `UnexpectedEof` distinct from a malformed token) don't need a breaking
/// change to callers matching on `ParseError`.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A lexical or syntactic error with no recovery.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Result type used throughout the lexer and parser.
pub type ParseResult<T> = Result<T, ParseError>;
