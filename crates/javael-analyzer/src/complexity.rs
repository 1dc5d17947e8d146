//! Complexity introspection, for diagnostics rather than translation.
//!
//! Separate from [`crate::operand`]'s boolean `is_simple_operand` flag: this
//! counts `and`/`or` connectives and measures nesting depth over the whole
//! tree, the way a linter reports cyclomatic complexity rather than how the
//! zipper decides what to atomize.

use javael_ast::ast::AST;
use javael_ast::nodes::{AnyNode, ASTNode, NodeID};

/// A one-line complexity summary for an expression, printed by `--verbose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Analyzer {
    /// Number of `And` nodes in the tree.
    pub and_count: usize,
    /// Number of `Or` nodes in the tree.
    pub or_count: usize,
    /// Longest root-to-leaf path, in node hops.
    pub tree_depth: usize,
}

impl Analyzer {
    /// Walks the AST rooted at `root`, counting connectives and measuring
    /// depth in a single pass.
    #[must_use]
    pub fn analyze(ast: &AST, root: NodeID) -> Self {
        let mut analyzer = Self::default();
        analyzer.visit(ast, root, 1);
        analyzer
    }

    fn visit(&mut self, ast: &AST, id: NodeID, depth: usize) {
        self.tree_depth = self.tree_depth.max(depth);
        let Some(node) = ast.get_node(id) else { return };
        match &node.data {
            AnyNode::And(_) => self.and_count += 1,
            AnyNode::Or(_) => self.or_count += 1,
            _ => {}
        }
        for child in node.data.children() {
            self.visit(ast, child, depth + 1);
        }
    }
}

impl std::fmt::Display for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "and_count={} or_count={} tree_depth={}", self.and_count, self.or_count, self.tree_depth)
    }
}

#[cfg(test)]
mod tests {
    use javael_parser::parser::parse;

    use super::*;

    fn analyze(source: &str) -> Analyzer {
        let (ast, root) = parse(source).expect("valid expression");
        Analyzer::analyze(&ast, root)
    }

    #[test]
    fn bare_equality_has_no_connectives_and_depth_three() {
        let analyzer = analyze("a eq 1");
        assert_eq!(analyzer.and_count, 0);
        assert_eq!(analyzer.or_count, 0);
        // Equality -> Value -> Primitive on the left, Primitive on the right.
        assert!(analyzer.tree_depth >= 2);
    }

    #[test]
    fn conjunction_of_two_equalities_counts_one_and() {
        let analyzer = analyze("a eq 1 and b eq 2");
        assert_eq!(analyzer.and_count, 1);
        assert_eq!(analyzer.or_count, 0);
    }

    #[test]
    fn mixed_connectives_count_both_kinds() {
        let analyzer = analyze("!(a or b) and c");
        assert_eq!(analyzer.and_count, 1);
        assert_eq!(analyzer.or_count, 1);
    }

    #[test]
    fn deeper_nesting_increases_tree_depth() {
        let shallow = analyze("a eq 1");
        let deep = analyze("a eq 1 and (b eq 2 or (c eq 3 and d eq 4))");
        assert!(deep.tree_depth > shallow.tree_depth);
    }
}
