//! Lexer for the JavaEL expression language.
//!
//! Converts source text into a stream of [`Token`]s. JavaEL expressions are
//! a single free-form line of tokens — no indentation tracking, no implicit
//! line continuation, no string interpolation, unlike the host languages
//! this crate's lexer shape was learned from.

mod rules;
mod token;

use logos::Lexer as LogosLexer;
pub use rules::*;
pub use token::*;

/// Wraps a `logos`-generated token stream, surfacing the first lexical
/// error encountered rather than silently dropping invalid characters.
#[derive(Debug)]
pub struct Lexer<'src> {
    inner: LogosLexer<'src, TokenKind>,
    source: &'src str,
    errored: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self { Self { inner: TokenKind::lexer(source), source, errored: false } }

    /// Returns the source text being lexed.
    #[must_use]
    pub const fn source(&self) -> &'src str { self.source }

    /// Returns the byte offset the lexer last stopped at, after an error.
    #[must_use]
    pub fn byte_offset(&self) -> usize { self.inner.span().start }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.errored {
            return None;
        }

        match self.inner.next()? {
            Ok(kind) => Some(Token::new(kind, self.inner.slice(), self.inner.span())),
            Err(()) => {
                self.errored = true;
                Some(Token::new(TokenKind::Error, self.inner.slice(), self.inner.span()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_simple_relation() {
        let lexer = Lexer::new("a > 1");
        let kinds: Vec<_> = lexer.map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Greater, TokenKind::IntegerLiteral]);
    }

    #[test]
    fn word_and_symbol_forms_share_a_kind() {
        let word: Vec<_> = Lexer::new("a eq b").map(|t| t.kind).collect();
        let symbol: Vec<_> = Lexer::new("a == b").map(|t| t.kind).collect();
        assert_eq!(word, symbol);
    }

    #[test]
    fn reports_lexical_error() {
        let tokens: Vec<_> = Lexer::new("a & b").collect();
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Error));
    }
}
