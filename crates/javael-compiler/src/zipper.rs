//! Formula zipper (spec §4.5).
//!
//! Walks the AST, consulting the [`SimpleOperandTable`] from
//! `javael-analyzer`, and builds a [`BoolFormula`] over synthetic atoms:
//! every simple operand becomes an [`crate::formula::AtomId`] registered in
//! [`OperatorStorage`]; `Or`/`And`/`Not` recurse; an embedded ternary (one
//! not at the expression root — see [`crate::ternary_path`] for the root
//! case) is rewritten to the disjunctive pair the spec mandates.

use javael_analyzer::{SimpleOperandTable, is_simple_operand};
use javael_ast::ast::AST;
use javael_ast::nodes::{AnyNode, NodeID, UnaryOp};

use crate::formula::{BoolFormula, OperatorStorage};

/// Zips the sub-tree at `id` into a [`BoolFormula`], registering simple
/// operands in `storage` as it goes.
///
/// `id` must not itself be a root-level ternary — callers dispatch that
/// case to the decision-table specialization (§4.10) before calling this.
pub fn zip(ast: &AST, table: &SimpleOperandTable, storage: &mut OperatorStorage, id: NodeID) -> BoolFormula {
    if is_simple_operand(table, id) {
        let atom = storage.register(id);
        log::trace!("zipped {id} to atom {atom}");
        return BoolFormula::Atom(atom);
    }

    let Some(node) = ast.get_node(id) else {
        // A dangling id can only mean a side table built against a different
        // AST was passed in; treat it as an opaque atom rather than panic.
        return BoolFormula::Atom(storage.register(id));
    };

    match &node.data {
        AnyNode::Or(expr) => {
            BoolFormula::or(zip(ast, table, storage, expr.left), zip(ast, table, storage, expr.right))
        }
        AnyNode::And(expr) => {
            BoolFormula::and(zip(ast, table, storage, expr.left), zip(ast, table, storage, expr.right))
        }
        AnyNode::Unary(expr) if expr.op == UnaryOp::Not => {
            BoolFormula::not(zip(ast, table, storage, expr.operand))
        }
        AnyNode::Ternary(expr) => {
            // (! (c) and b) or (c and a) — the third conjunct of the
            // classical rewrite is intentionally omitted; see DESIGN.md.
            let cond = zip(ast, table, storage, expr.cond);
            let then_branch = zip(ast, table, storage, expr.then_branch);
            let else_branch = zip(ast, table, storage, expr.else_branch);
            BoolFormula::or(
                BoolFormula::and(BoolFormula::not(cond.clone()), else_branch),
                BoolFormula::and(cond, then_branch),
            )
        }
        // Not marked simple but not a connective either (e.g. a malformed
        // Unary(Empty|Minus) wrapping Or/And, which the grammar cannot
        // actually produce): fall back to zipping the whole node as an atom.
        _ => BoolFormula::Atom(storage.register(id)),
    }
}

#[cfg(test)]
mod tests {
    use javael_analyzer::mark_simple_operands;
    use javael_parser::parser::parse;

    use super::*;

    #[test]
    fn bare_atom_zips_to_a_single_atom() {
        let (ast, root) = parse("a eq 1").expect("valid expression");
        let table = mark_simple_operands(&ast, root);
        let mut storage = OperatorStorage::new();
        let formula = zip(&ast, &table, &mut storage, root);
        assert_eq!(formula, BoolFormula::Atom(storage.register(root)));
    }

    #[test]
    fn or_zips_to_or_of_atoms() {
        let (ast, root) = parse("a eq 1 or b eq 2").expect("valid expression");
        let table = mark_simple_operands(&ast, root);
        let mut storage = OperatorStorage::new();
        let formula = zip(&ast, &table, &mut storage, root);
        assert!(matches!(formula, BoolFormula::Or(_, _)));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn embedded_ternary_zips_to_disjunctive_pair() {
        let (ast, root) = parse("(a eq 1 ? b eq 2 : c eq 3) and d eq 4").expect("valid expression");
        let table = mark_simple_operands(&ast, root);
        let mut storage = OperatorStorage::new();
        let formula = zip(&ast, &table, &mut storage, root);
        let BoolFormula::And(left, _right) = &formula else { panic!("expected and") };
        assert!(matches!(**left, BoolFormula::Or(_, _)), "ternary rewrites to an or of two ands");
    }

    #[test]
    fn repeated_atoms_reuse_the_same_id() {
        let (ast, root) = parse("a eq 1 or a eq 1").expect("valid expression");
        let table = mark_simple_operands(&ast, root);
        let mut storage = OperatorStorage::new();
        let _ = zip(&ast, &table, &mut storage, root);
        // Structurally distinct nodes (two separate parses of "a eq 1") get
        // distinct atom ids even though they print identically — identity,
        // not textual equality, is what OperatorStorage keys on.
        assert_eq!(storage.len(), 2);
    }
}
