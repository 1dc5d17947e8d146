//! Pre-translation analysis for JavaEL expressions.
//!
//! Before a parsed expression is zipped into a FEEL formula and fragmented
//! into DMN operators, two passes run over the AST:
//!
//! - **Operand marking** ([`operand`]): finds the maximal sub-trees with no
//!   logical connective at their own root, so the zipper knows which nodes
//!   to replace wholesale with a synthetic `op_<N>` atom rather than
//!   recursing into.
//! - **Ternary analysis** ([`ternary`]): classifies each `Ternary` node and,
//!   for ones reached via a `then_branch` chain, collects the full chain as
//!   a [`ternary::TernaryPath`] for the decision-table builder.
//!
//! Neither pass mutates the AST — results are recorded in [`side_table`]
//! maps keyed by node identity, and read by `javael-compiler`.
//!
//! [`complexity::Analyzer`] is a third, independent pass: a plain
//! connective/depth count for diagnostics, unrelated to how the zipper
//! atomizes operands.

pub mod complexity;
pub mod operand;
pub mod side_table;
pub mod ternary;

pub use complexity::Analyzer;
pub use operand::{SimpleOperandTable, is_simple_operand, mark_simple_operands};
pub use ternary::{TernaryPath, TernaryStep, collect_ternary_path, is_ternary};
