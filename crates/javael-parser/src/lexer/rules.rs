//! Helper rules for lexical analysis.

use super::token::{Token, TokenKind};

/// Extracts the content of a string literal token, stripping the
/// surrounding quotes.
#[must_use]
pub fn extract_string_content<'src>(token: &Token<'src>) -> &'src str {
    match token.kind {
        TokenKind::StringLiteral if token.lexeme.len() >= 2 => {
            &token.lexeme[1..token.lexeme.len() - 1]
        }
        _ => token.lexeme,
    }
}

/// Parses an integer literal token's lexeme into an `i64`.
///
/// ## Errors
///
/// Returns an error if the lexeme does not fit in an `i64`.
pub fn parse_integer_literal(token: &Token<'_>) -> Result<i64, std::num::ParseIntError> {
    token.lexeme.parse()
}
