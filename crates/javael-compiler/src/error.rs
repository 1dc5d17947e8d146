//! Error types surfaced by the translation pipeline.

use javael_parser::diagnostics::ParseError;
use thiserror::Error;

/// An invariant violation in a downstream pipeline phase — fragmentation,
/// normalization, or DMN construction saw a shape it cannot translate.
///
/// Unlike a [`ParseError`], a `TranslationError` always indicates a bug in
/// the translator (a grammar/DMN mismatch), not a problem with the input.
#[derive(Debug, Clone, Error)]
pub enum TranslationError {
    /// A rule row produced more than one literal output, which the decision
    /// table format cannot express.
    #[error("rule row for decision {decision} yielded {count} literal outputs, expected exactly one")]
    AmbiguousRuleOutput {
        /// The decision the offending row belongs to.
        decision: String,
        /// How many literal outputs were found.
        count: usize,
    },
    /// The DMN builder needed a canonical operator table for an operator
    /// kind that has none — indicates a grammar/DMN mismatch, not bad input.
    #[error("no canonical decision table is defined for operator `{operator}`")]
    MissingOperatorMapping {
        /// The operator kind's display form.
        operator: String,
    },
    /// The boolean normalizer produced an empty disjunctive-normal-form
    /// clause set.
    #[error("boolean normalization produced no clauses for the residual formula")]
    EmptyNormalForm,
}

/// The umbrella error returned by [`crate::translate`].
#[derive(Debug, Error)]
pub enum CompileError {
    /// The source failed to parse.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// A downstream phase hit an invariant violation.
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Result type used throughout this crate's public API.
pub type CompileResult<T> = Result<T, CompileError>;
