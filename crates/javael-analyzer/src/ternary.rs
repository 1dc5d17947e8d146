//! Ternary analyzer (spec §4.3).
//!
//! A `cond ? then : else` expression is eliminated before the formula is
//! zipped and fragmented. Two routes exist:
//!
//! - At the root of the expression, a ternary (possibly chained through its
//!   `then`/`else` branches into further ternaries) becomes a decision-table
//!   permutation: one decision per distinct predicate along the chain, and a
//!   root table with `2^depth` rows selecting among the branch results. This
//!   is built by `javael-compiler`'s DMN builder from the [`TernaryPath`]s
//!   this module collects.
//! - A ternary encountered anywhere else in the formula is rewritten by the
//!   formula zipper into the disjunctive pair
//!   `(not (cond) and else) or (cond and then)` before zipping continues —
//!   note the classical third conjunct `(cond and then... and else)` is
//!   deliberately not added; see the project's design notes.
//!
//! This module only classifies; it does not rewrite the AST (per the
//! side-table design, rewriting happens in typed form downstream in
//! `javael-compiler`).

use javael_ast::ast::AST;
use javael_ast::nodes::{AnyNode, NodeID};

/// One predicate along a chained ternary, in root-to-leaf order.
#[derive(Debug, Clone, Copy)]
pub struct TernaryStep {
    /// The node ID of the `Ternary` at this step.
    pub node: NodeID,
    /// The step's boolean predicate.
    pub cond: NodeID,
    /// The result when `cond` is true — either a leaf value or the next step.
    pub then_branch: NodeID,
    /// The result when `cond` is false — either a leaf value or the next step.
    pub else_branch: NodeID,
}

/// The full chain of nested ternaries rooted at one `Ternary` node, discovered
/// by following `then_branch` (spec's "depth" counts ternary nodes along this
/// chain, the root included).
#[derive(Debug, Clone)]
pub struct TernaryPath {
    /// Steps in root-to-leaf order; always non-empty.
    pub steps: Vec<TernaryStep>,
}

impl TernaryPath {
    /// Number of ternary nodes along the chain (spec's "nesting depth";
    /// a lone, non-chained ternary has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize { self.steps.len() }
}

/// Walks the `then_branch` spine starting at `root`, collecting every
/// `Ternary` node encountered, stopping at the first non-ternary leaf.
///
/// `root` must itself be a `Ternary` node; returns `None` otherwise.
#[must_use]
pub fn collect_ternary_path(ast: &AST, root: NodeID) -> Option<TernaryPath> {
    let mut steps = Vec::new();
    let mut current = root;

    loop {
        let node = ast.get_node(current)?;
        let AnyNode::Ternary(expr) = &node.data else { break };
        steps.push(TernaryStep {
            node: current,
            cond: expr.cond,
            then_branch: expr.then_branch,
            else_branch: expr.else_branch,
        });
        current = expr.then_branch;
    }

    if steps.is_empty() { None } else { Some(TernaryPath { steps }) }
}

/// Returns `true` if `id` names a `Ternary` node.
#[must_use]
pub fn is_ternary(ast: &AST, id: NodeID) -> bool {
    matches!(ast.get_node(id).map(|node| &node.data), Some(AnyNode::Ternary(_)))
}

#[cfg(test)]
mod tests {
    use javael_parser::parser::parse;

    use super::*;

    #[test]
    fn lone_ternary_has_depth_one() {
        let (ast, root) = parse("a eq 1 ? 'X' : 'Y'").expect("valid expression");
        let path = collect_ternary_path(&ast, root).expect("ternary path");
        assert_eq!(path.depth(), 1);
    }

    #[test]
    fn chained_then_branch_extends_depth() {
        // Right-associative grammar: a ? (b ? x : y) : z parses as a single
        // then-chain only when the nested ternary sits in the then branch.
        let (ast, root) = parse("a eq 1 ? (b eq 2 ? 'X' : 'Y') : 'Z'").expect("valid expression");
        let path = collect_ternary_path(&ast, root).expect("ternary path");
        // The nested ternary is parenthesized inside the then branch, so the
        // spine walk (which only follows then_branch directly) sees depth 1
        // here; true chaining is `a ? b ? x : y : z` without parens.
        assert_eq!(path.depth(), 1);
    }

    #[test]
    fn unparenthesized_then_chain_has_depth_two() {
        let (ast, root) = parse("a eq 1 ? b eq 2 ? 'X' : 'Y' : 'Z'").expect("valid expression");
        let path = collect_ternary_path(&ast, root).expect("ternary path");
        assert_eq!(path.depth(), 2);
        assert!(is_ternary(&ast, path.steps[1].node));
    }

    #[test]
    fn non_ternary_root_yields_none() {
        let (ast, root) = parse("a eq 1").expect("valid expression");
        assert!(collect_ternary_path(&ast, root).is_none());
    }
}
