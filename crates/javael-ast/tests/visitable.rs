//! Tests for the `Visitable` trait implementation.

use javael_ast::ast::AST;
use javael_ast::nodes::{
    AlgebraicExpr,
    AlgebraicOp,
    AndExpr,
    AnyNode,
    EqualityExpr,
    EqualityOp,
    Literal,
    NodeID,
    NodeKind,
    OrExpr,
    PrimitiveExpr,
    PrimitiveKind,
    TernaryExpr,
    UnaryExpr,
    UnaryOp,
};
use javael_ast::visitor::{Visitable, Visitor, VisitorResult};
use javael_source::types::Span;

struct TestVisitor {
    visited_nodes: Vec<&'static str>,
}

impl TestVisitor {
    const fn new() -> Self { Self { visited_nodes: Vec::new() } }
}

impl Visitor<()> for TestVisitor {
    fn visit(&mut self, _node_id: NodeID) -> Option<()> { None }

    fn visit_ternary(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_ternary");
        Ok(())
    }

    fn visit_or(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_or");
        Ok(())
    }

    fn visit_and(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_and");
        Ok(())
    }

    fn visit_equality(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_equality");
        Ok(())
    }

    fn visit_algebraic(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_algebraic");
        Ok(())
    }

    fn visit_unary(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_unary");
        Ok(())
    }

    fn visit_primitive(&mut self, _node_id: NodeID) -> VisitorResult<()> {
        self.visited_nodes.push("visit_primitive");
        Ok(())
    }
}

#[test]
fn test_any_node_visitable_equality() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let equality = EqualityExpr::new(
        NodeID::new(0, 0),
        EqualityOp::Eq,
        NodeID::new(0, 0),
        NodeID::new(0, 0),
        span,
    );
    let id = ast.alloc_node(NodeKind::Equality, AnyNode::Equality(equality), span);

    let mut visitor = TestVisitor::new();
    if let Some(node) = ast.get_node(id) {
        drop(node.data.accept(&mut visitor, id));
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_equality"]);
}

#[test]
fn test_any_node_visitable_ternary_and_unary() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let ternary =
        TernaryExpr::new(NodeID::new(0, 0), NodeID::new(0, 0), NodeID::new(0, 0), NodeID::new(0, 0), span);
    let ternary_id = ast.alloc_node(NodeKind::Ternary, AnyNode::Ternary(ternary), span);

    let unary = UnaryExpr::new(UnaryOp::Not, NodeID::new(0, 0), NodeID::new(0, 0), span);
    let unary_id = ast.alloc_node(NodeKind::Unary, AnyNode::Unary(unary), span);

    let mut visitor = TestVisitor::new();
    if let Some(node) = ast.get_node(ternary_id) {
        drop(node.data.accept(&mut visitor, ternary_id));
    }
    if let Some(node) = ast.get_node(unary_id) {
        drop(node.data.accept(&mut visitor, unary_id));
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_ternary", "visit_unary"]);
}

#[test]
fn test_multiple_node_types_visitable() {
    let mut ast = AST::new();
    let span = Span::new(0, 5);

    let literal = PrimitiveExpr::new(PrimitiveKind::Literal(Literal::Integer(42)), NodeID::new(0, 0), span);
    let literal_id = ast.alloc_node(NodeKind::Primitive, AnyNode::Primitive(literal), span);

    let or_expr = OrExpr::new(literal_id, literal_id, NodeID::new(1, 0), span);
    let or_id = ast.alloc_node(NodeKind::Or, AnyNode::Or(or_expr), span);

    let and_expr = AndExpr::new(literal_id, literal_id, NodeID::new(2, 0), span);
    let and_id = ast.alloc_node(NodeKind::And, AnyNode::And(and_expr), span);

    let mut visitor = TestVisitor::new();
    for id in [literal_id, or_id, and_id] {
        if let Some(node) = ast.get_node(id) {
            drop(node.data.accept(&mut visitor, id));
        }
    }

    assert_eq!(visitor.visited_nodes, vec!["visit_primitive", "visit_or", "visit_and"]);
}

#[test]
fn test_concrete_type_visitable() {
    let span = Span::new(0, 5);
    let algebraic =
        AlgebraicExpr::new(NodeID::new(0, 0), AlgebraicOp::Add, NodeID::new(0, 0), NodeID::new(0, 0), span);

    let mut visitor = TestVisitor::new();
    let node_id = NodeID::new(1, 1);
    drop(algebraic.accept(&mut visitor, node_id));

    assert_eq!(visitor.visited_nodes, vec!["visit_algebraic"]);
}

#[test]
fn test_as_variant_accessors() {
    let literal = PrimitiveExpr::new(PrimitiveKind::Literal(Literal::Boolean(true)), NodeID::new(0, 0), Span::new(0, 1));
    let node = AnyNode::Primitive(literal);

    assert!(node.as_primitive().is_some());
    assert!(node.as_ternary().is_none());
}
