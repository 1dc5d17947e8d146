//! Diagnostics for the parsing phase.
//!
//! JavaEL expressions fail fast: parsing stops at the first lexical or
//! syntactic problem and reports a single [`SyntaxError`] rather than
//! collecting a batch of diagnostics with recovery, the way a full-language
//! parser would.

mod error;

pub use error::{ParseError, ParseResult, Phase, SyntaxError};
