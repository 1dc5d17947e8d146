//! Operand marker (spec §4.4).
//!
//! Identifies the maximal sub-trees of a JavaEL AST that contain no logical
//! connective at their own root — the atoms the formula zipper will replace
//! with a synthetic `op_<N>` token. `Or`/`And` chains and the operand of a
//! `Unary` node are walked like the source's "chain" kinds; everything else
//! is simple as a whole, since its interior operators (`eq`, relations,
//! arithmetic) are non-logical and get isolated by the fragmenter instead.
//!
//! A `Ternary` is never simple: it needs the disjunctive rewrite (or the
//! root-level decision-table specialization) rather than atomic zipping,
//! so it is excluded from every "simple as a whole" rule below, including
//! when it sits directly under a `Unary`. Its `cond`/`then`/`else` branches
//! are each independent sub-formulas, though, so the marker still descends
//! into them — a ternary boundary stops zipping, not analysis.

use javael_ast::ast::AST;
use javael_ast::nodes::{AnyNode, NodeID, NodeKind, TernaryExpr};

use crate::side_table::SideTable;

/// The `is_simple_operand` attribute for every node the marker visited.
pub type SimpleOperandTable = SideTable<bool>;

/// Runs the operand marker over the AST rooted at `root`.
///
/// Implements the rules in spec §4.4: in an `Or`/`And` chain each operand
/// child is marked simple unless it is itself a chain-forming node (another
/// `Or`, `And`, or `Unary`), in which case marking recurses into it instead
/// and the chain node itself stays unmarked. A run of consecutive `Unary`
/// nodes is collapsed to a single simple operand headed at the outermost
/// one, provided the run bottoms out in non-logical content — this is what
/// lets the fragmenter later consume a chain like `not not empty x`
/// left-to-right as one atom (spec §4.6).
#[must_use]
pub fn mark_simple_operands(ast: &AST, root: NodeID) -> SimpleOperandTable {
    let mut table = SimpleOperandTable::new();
    if mark(ast, root, &mut table) {
        table.set(root, true);
    }
    table
}

/// Returns whether `is_simple_operand` should be true for `id`, recording
/// marks for any descendants visited along the way.
fn mark(ast: &AST, id: NodeID, table: &mut SimpleOperandTable) -> bool {
    let Some(node) = ast.get_node(id) else { return false };

    match &node.data {
        AnyNode::Or(expr) => {
            mark_chain_operand(ast, expr.left, table);
            mark_chain_operand(ast, expr.right, table);
            false
        }
        AnyNode::And(expr) => {
            mark_chain_operand(ast, expr.left, table);
            mark_chain_operand(ast, expr.right, table);
            false
        }
        AnyNode::Unary(expr) => mark_unary(ast, expr.operand, table),
        AnyNode::Ternary(expr) => mark_ternary_children(ast, expr, table),
        AnyNode::Equality(_)
        | AnyNode::Relation(_)
        | AnyNode::Algebraic(_)
        | AnyNode::Member(_)
        | AnyNode::Value(_)
        | AnyNode::Primitive(_) => true,
    }
}

/// Marks a direct `Or`/`And` operand, recursing into it instead if it is
/// itself chain-forming (per spec §4.4, "un-marking any ancestor previously
/// marked — only the outermost simple operand stays marked").
fn mark_chain_operand(ast: &AST, id: NodeID, table: &mut SimpleOperandTable) {
    let simple = mark(ast, id, table);
    table.set(id, simple);
}

/// Marks the independent cond/then/else sub-formulas of a `Ternary`; the
/// ternary node itself is never simple.
fn mark_ternary_children(ast: &AST, expr: &TernaryExpr, table: &mut SimpleOperandTable) -> bool {
    mark_chain_operand(ast, expr.cond, table);
    mark_chain_operand(ast, expr.then_branch, table);
    mark_chain_operand(ast, expr.else_branch, table);
    false
}

/// Determines simplicity for a `Unary` node given its operand.
///
/// Recurses through [`mark`] rather than hand-walking the chain: when the
/// operand is itself `Unary`, `mark` calls back into this function on the
/// next level down, so only the outermost node of a `not not empty x` run
/// is ever handed to [`mark_chain_operand`] for persisting.
fn mark_unary(ast: &AST, operand: NodeID, table: &mut SimpleOperandTable) -> bool {
    let Some(node) = ast.get_node(operand) else { return false };

    match node.kind {
        NodeKind::Or | NodeKind::And => {
            mark_chain_operand(ast, operand, table);
            false
        }
        NodeKind::Ternary => {
            let AnyNode::Ternary(expr) = &node.data else { unreachable!("NodeKind::Ternary") };
            mark_ternary_children(ast, expr, table)
        }
        _ => mark(ast, operand, table),
    }
}

/// Returns whether `id` was marked `is_simple_operand` by a prior run of
/// [`mark_simple_operands`].
#[must_use]
pub fn is_simple_operand(table: &SimpleOperandTable, id: NodeID) -> bool { table.is_set(id) }

#[cfg(test)]
mod tests {
    use javael_parser::parser::parse;

    use super::*;

    fn marked(source: &str) -> (AST, NodeID, SimpleOperandTable) {
        let (ast, root) = parse(source).expect("valid expression");
        let table = mark_simple_operands(&ast, root);
        (ast, root, table)
    }

    #[test]
    fn bare_equality_is_simple_as_whole() {
        let (_, root, table) = marked("a eq 1");
        assert!(is_simple_operand(&table, root));
    }

    #[test]
    fn or_operands_marked_and_or_node_itself_is_not() {
        let (ast, root, table) = marked("a eq 1 or b eq 2");
        assert!(!is_simple_operand(&table, root));
        let AnyNode::Or(or_expr) = &ast.get_node(root).unwrap().data else { panic!("expected or") };
        assert!(is_simple_operand(&table, or_expr.left));
        assert!(is_simple_operand(&table, or_expr.right));
    }

    #[test]
    fn nested_or_under_or_marks_outermost_operands_only() {
        let (ast, root, table) = marked("a eq 1 or b eq 2 or c eq 3");
        // Left-associative: (a eq 1 or b eq 2) or c eq 3
        assert!(!is_simple_operand(&table, root));
        let AnyNode::Or(outer) = &ast.get_node(root).unwrap().data else { panic!("expected or") };
        assert!(!is_simple_operand(&table, outer.left)); // itself an Or, not simple
        assert!(is_simple_operand(&table, outer.right));
        let AnyNode::Or(inner) = &ast.get_node(outer.left).unwrap().data else { panic!("expected or") };
        assert!(is_simple_operand(&table, inner.left));
        assert!(is_simple_operand(&table, inner.right));
    }

    #[test]
    fn unary_over_leaf_is_simple_as_whole() {
        let (_, root, table) = marked("not a");
        assert!(is_simple_operand(&table, root));
    }

    #[test]
    fn unary_chain_collapses_to_outermost() {
        let (ast, root, table) = marked("not not empty a");
        assert!(is_simple_operand(&table, root));
        let AnyNode::Unary(outer) = &ast.get_node(root).unwrap().data else { panic!("expected unary") };
        // Intermediate levels are not individually marked.
        assert!(!is_simple_operand(&table, outer.operand));
    }

    #[test]
    fn unary_over_or_is_not_simple_and_or_operands_are() {
        let (ast, root, table) = marked("!(a eq 1 or b eq 2) and c eq 3");
        assert!(!is_simple_operand(&table, root));
        let AnyNode::And(and_expr) = &ast.get_node(root).unwrap().data else { panic!("expected and") };
        assert!(!is_simple_operand(&table, and_expr.left));
        assert!(is_simple_operand(&table, and_expr.right));
        let AnyNode::Unary(not_expr) = &ast.get_node(and_expr.left).unwrap().data else {
            panic!("expected unary")
        };
        let AnyNode::Or(or_expr) = &ast.get_node(not_expr.operand).unwrap().data else {
            panic!("expected or")
        };
        assert!(is_simple_operand(&table, or_expr.left));
        assert!(is_simple_operand(&table, or_expr.right));
    }

    #[test]
    fn ternary_is_never_simple() {
        let (ast, root, table) = marked("(a eq 1 ? true : false) or b eq 2");
        let AnyNode::Or(or_expr) = &ast.get_node(root).unwrap().data else { panic!("expected or") };
        assert!(!is_simple_operand(&table, or_expr.left));
        assert!(is_simple_operand(&table, or_expr.right));
    }

    #[test]
    fn ternary_branches_are_independently_marked() {
        let (ast, root) = parse("a eq 1 ? b eq 2 or c eq 3 : d eq 4").expect("valid expression");
        let table = mark_simple_operands(&ast, root);
        let AnyNode::Ternary(expr) = &ast.get_node(root).unwrap().data else { panic!("expected ternary") };
        assert!(is_simple_operand(&table, expr.cond));
        assert!(!is_simple_operand(&table, expr.then_branch), "the then-branch is itself an Or");
        assert!(is_simple_operand(&table, expr.else_branch));
    }
}
