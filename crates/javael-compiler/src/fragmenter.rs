//! Fragmenter (spec §4.6): isolates every non-logical operator inside an
//! atom into its own [`DmnNode`], leaving only `Expression` leaves that the
//! builder can turn into identifier- or literal-reading decision tables.
//!
//! The source rewrites the parent's *text*, replacing the moved operand's
//! span with a synthetic `dmn<N>` placeholder and tagging the operand with
//! that id in its `colors` list. Operating on the typed AST (per §9's
//! license to skip textual round-trips), this crate never materializes that
//! placeholder text: the parent/child relationship the fragmenter discovers
//! is recorded directly as [`DmnNode::Operator`] parentage, and printing
//! happens once, at the leaf, via [`crate::feel_print::print_node`].

use javael_ast::ast::AST;
use javael_ast::nodes::{AnyNode, NodeID, UnaryOp};

use crate::dmn_tree::{DmnNode, OperatorKind};
use crate::feel_print::print_node;

/// Fragments the atom rooted at `id` into a [`DmnNode`].
///
/// `id` must be a node the operand marker judged `is_simple_operand` (an
/// atom registered in [`crate::formula::OperatorStorage`]) — a purely
/// logical node (`Or`/`And`/a boolean `Not`-of-connective) never reaches
/// here, since the zipper stops descending at the atom boundary.
#[must_use]
pub fn fragment(ast: &AST, id: NodeID) -> DmnNode {
    log::trace!("fragmenting atom {id}");
    let Some(node) = ast.get_node(id) else {
        return DmnNode::Expression { text: String::new(), contexts: vec![id] };
    };

    match &node.data {
        AnyNode::Equality(expr) => binary(ast, id, OperatorKind::from(expr.op), expr.left, expr.right),
        AnyNode::Relation(expr) => binary(ast, id, OperatorKind::from(expr.op), expr.left, expr.right),
        AnyNode::Algebraic(expr) => binary(ast, id, OperatorKind::from(expr.op), expr.left, expr.right),
        AnyNode::Member(expr) => binary(ast, id, OperatorKind::from(expr.op), expr.left, expr.right),
        AnyNode::Unary(expr) if expr.op == UnaryOp::Not => {
            DmnNode::Operator { kind: OperatorKind::Not, children: vec![fragment_unary_operand(ast, expr.operand)] }
        }
        AnyNode::Unary(expr) if expr.op == UnaryOp::Empty => {
            DmnNode::Operator { kind: OperatorKind::Empty, children: vec![fragment_unary_operand(ast, expr.operand)] }
        }
        // Unary minus is arithmetic sign, not a fragmentable comparison —
        // it stays inline as part of the leaf's printed text.
        _ => DmnNode::expression(print_node(ast, id), id),
    }
}

/// Builds the two-child `Operator` node for a binary non-logical operator.
///
/// Per §4.6, "do not rewrite the parent text (the atom is already
/// zipped)" — there is no parent text to begin with here, since the caller
/// is the atom itself; the two operand sub-trees simply become `Expression`
/// leaves.
fn binary(ast: &AST, _id: NodeID, kind: OperatorKind, left: NodeID, right: NodeID) -> DmnNode {
    DmnNode::Operator {
        kind,
        children: vec![DmnNode::expression(print_node(ast, left), left), DmnNode::expression(print_node(ast, right), right)],
    }
}

/// Consumes a chain of unary operators left-to-right (spec §4.6): the
/// leftmost operator already became the parent in [`fragment`]; each
/// further `not`/`empty` nests one level deeper, and a non-unary operand
/// (or a unary `-`, which is not fragmented) terminates the chain as a
/// plain `Expression` leaf.
fn fragment_unary_operand(ast: &AST, id: NodeID) -> DmnNode {
    match ast.get_node(id).map(|node| &node.data) {
        Some(AnyNode::Unary(expr)) if expr.op == UnaryOp::Not => {
            DmnNode::Operator { kind: OperatorKind::Not, children: vec![fragment_unary_operand(ast, expr.operand)] }
        }
        Some(AnyNode::Unary(expr)) if expr.op == UnaryOp::Empty => {
            DmnNode::Operator { kind: OperatorKind::Empty, children: vec![fragment_unary_operand(ast, expr.operand)] }
        }
        _ => DmnNode::expression(print_node(ast, id), id),
    }
}

#[cfg(test)]
mod tests {
    use javael_parser::parser::parse;

    use super::*;

    #[test]
    fn equality_atom_fragments_to_eq_operator_with_two_leaves() {
        let (ast, root) = parse("a eq 1").expect("valid expression");
        let dmn = fragment(&ast, root);
        let DmnNode::Operator { kind, children } = dmn else { panic!("expected operator") };
        assert_eq!(kind, OperatorKind::Eq);
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn empty_fragments_to_single_child_operator() {
        let (ast, root) = parse("empty a").expect("valid expression");
        let dmn = fragment(&ast, root);
        let DmnNode::Operator { kind, children } = dmn else { panic!("expected operator") };
        assert_eq!(kind, OperatorKind::Empty);
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn unary_chain_nests_left_to_right() {
        let (ast, root) = parse("not not empty a").expect("valid expression");
        let outer = fragment(&ast, root);
        let DmnNode::Operator { kind: outer_kind, children: outer_children } = outer else {
            panic!("expected operator")
        };
        assert_eq!(outer_kind, OperatorKind::Not);
        let DmnNode::Operator { kind: mid_kind, children: mid_children } = &outer_children[0] else {
            panic!("expected nested operator")
        };
        assert_eq!(*mid_kind, OperatorKind::Not);
        let DmnNode::Operator { kind: inner_kind, .. } = &mid_children[0] else {
            panic!("expected innermost operator")
        };
        assert_eq!(*inner_kind, OperatorKind::Empty);
    }

    #[test]
    fn plain_identifier_atom_fragments_to_bare_expression() {
        let (ast, root) = parse("a").expect("valid expression");
        let dmn = fragment(&ast, root);
        assert!(matches!(dmn, DmnNode::Expression { .. }));
    }

    #[test]
    fn unary_minus_is_not_fragmented() {
        let (ast, root) = parse("-a").expect("valid expression");
        let dmn = fragment(&ast, root);
        assert!(matches!(dmn, DmnNode::Expression { .. }), "unary minus stays inline, not an operator node");
    }
}
