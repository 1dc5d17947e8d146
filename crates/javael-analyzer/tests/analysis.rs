//! Integration tests for operand marking and ternary analysis against
//! representative JavaEL expressions.

use javael_analyzer::{collect_ternary_path, is_simple_operand, mark_simple_operands};
use javael_ast::nodes::AnyNode;
use javael_parser::parser::parse;

#[test]
fn mixed_connective_marks_only_outermost_operands() {
    // Mirrors a De Morgan-style negated disjunction conjoined with a clause:
    // `!(a eq 1 or b eq 2) and c ne 3`.
    let (ast, root) = parse("!(a eq 1 or b eq 2) and c ne 3").expect("valid expression");
    let table = mark_simple_operands(&ast, root);

    assert!(!is_simple_operand(&table, root));

    let AnyNode::And(and_expr) = &ast.get_node(root).unwrap().data else { panic!("expected and") };
    assert!(!is_simple_operand(&table, and_expr.left), "negated disjunction is not simple");
    assert!(is_simple_operand(&table, and_expr.right), "bare inequality is simple");

    let AnyNode::Unary(not_expr) = &ast.get_node(and_expr.left).unwrap().data else {
        panic!("expected unary not")
    };
    let AnyNode::Or(or_expr) = &ast.get_node(not_expr.operand).unwrap().data else {
        panic!("expected or under not")
    };
    assert!(is_simple_operand(&table, or_expr.left));
    assert!(is_simple_operand(&table, or_expr.right));
}

#[test]
fn root_level_ternary_chain_has_matching_depth() {
    let (ast, root) = parse("status eq 'A' ? reason eq 'X' ? 1 : 2 : 3").expect("valid expression");
    let path = collect_ternary_path(&ast, root).expect("ternary path at root");
    assert_eq!(path.depth(), 2);
}

#[test]
fn lone_root_ternary_has_depth_one() {
    let (ast, root) = parse("status eq 'A' ? 1 : 2").expect("valid expression");
    let path = collect_ternary_path(&ast, root).expect("ternary path at root");
    assert_eq!(path.depth(), 1);
}

#[test]
fn embedded_ternary_is_not_simple_so_the_zipper_must_rewrite_it() {
    let (ast, root) = parse("(a eq 1 ? true : false) and b eq 2").expect("valid expression");
    let table = mark_simple_operands(&ast, root);
    let AnyNode::And(and_expr) = &ast.get_node(root).unwrap().data else { panic!("expected and") };
    assert!(!is_simple_operand(&table, and_expr.left));
    assert!(collect_ternary_path(&ast, and_expr.left).is_some());
}
