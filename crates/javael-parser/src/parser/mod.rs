//! Recursive-descent parser for the JavaEL expression grammar.
//!
//! Precedence low to high: `ternary > expression (or) > term (and) > equality
//! > relation > algebraic (+ -) > member (* / %) > base (unary) > value >
//! primitive`. Grouping parentheses only appear at the `relation` level —
//! `(a or b) and c` parses the parenthesized sub-expression as a single
//! atomic relation operand, exactly as the grammar defines it.

use javael_ast::ast::AST;
use javael_ast::nodes::{
    Accessor,
    AlgebraicExpr,
    AlgebraicOp,
    AndExpr,
    AnyNode,
    EqualityExpr,
    EqualityOp,
    Literal,
    MemberExpr,
    MemberOp,
    NodeID,
    NodeKind,
    OrExpr,
    PrimitiveExpr,
    PrimitiveKind,
    RelationExpr,
    RelationOp,
    TernaryExpr,
    UnaryExpr,
    UnaryOp,
    ValueExpr,
};
use javael_source::types::{Source, Span};

use crate::diagnostics::{ParseError, ParseResult, Phase, SyntaxError};
use crate::lexer::{Lexer, Token, TokenKind};

/// Parses a JavaEL expression into an AST, returning the arena and the
/// root node's ID.
///
/// ## Errors
///
/// Returns a [`ParseError`] on the first lexical or syntactic problem.
pub fn parse(source: &str) -> ParseResult<(AST, NodeID)> {
    let mut parser = Parser::new(source)?;
    let root = parser.parse_ternary()?;
    parser.expect(TokenKind::EndOfFile)?;
    parser.ast.set_root(root);
    Ok((parser.ast, root))
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    pos: usize,
    ast: AST,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> ParseResult<Self> {
        let tokens: Vec<_> = Lexer::new(source).collect();
        Ok(Self { source, tokens, pos: 0, ast: AST::new() })
    }

    fn current(&self) -> &Token<'src> {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().expect("at least EndOfFile"))
    }

    fn check(&self, kind: TokenKind) -> bool { self.current().kind == kind }

    fn advance(&mut self) -> Token<'src> {
        let token = self.current().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        if self.check(kind) { Ok(self.advance()) } else { Err(self.syntax_error(Phase::Parse)) }
    }

    fn syntax_error(&self, phase: Phase) -> ParseError {
        let token = self.current();
        let (line, column) = Source::new(self.source).get_line_column(token.span.start);
        let symbol = if token.kind == TokenKind::EndOfFile {
            "end of input".to_owned()
        } else if token.kind == TokenKind::Error {
            format!("character {:?}", token.lexeme)
        } else {
            format!("token {}", token.kind)
        };
        SyntaxError::new(phase, line, column, symbol).into()
    }

    fn alloc(&mut self, kind: NodeKind, data: AnyNode, span: Span) -> NodeID {
        self.ast.alloc_node(kind, data, span)
    }

    fn span_of(start: &Token<'src>, end_offset: usize) -> Span { Span::new(start.span.start, end_offset) }

    // ternary := expression ('?' ternary ':' ternary)?
    fn parse_ternary(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let cond = self.parse_expression()?;

        if self.check(TokenKind::Question) {
            let _ = self.advance();
            let then_branch = self.parse_ternary()?;
            self.expect(TokenKind::Colon)?;
            let else_branch = self.parse_ternary()?;
            let span = Self::span_of(&start, self.current().span.start);
            let node = TernaryExpr::new(cond, then_branch, else_branch, NodeID::placeholder(), span);
            return Ok(self.alloc(NodeKind::Ternary, AnyNode::Ternary(node), span));
        }

        Ok(cond)
    }

    // expression := term ('or' term)*
    fn parse_expression(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let mut left = self.parse_term()?;

        while self.check(TokenKind::Or) {
            let _ = self.advance();
            let right = self.parse_term()?;
            let span = Self::span_of(&start, self.current().span.start);
            let node = OrExpr::new(left, right, NodeID::placeholder(), span);
            left = self.alloc(NodeKind::Or, AnyNode::Or(node), span);
        }

        Ok(left)
    }

    // term := equality ('and' equality)*
    fn parse_term(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let mut left = self.parse_equality()?;

        while self.check(TokenKind::And) {
            let _ = self.advance();
            let right = self.parse_equality()?;
            let span = Self::span_of(&start, self.current().span.start);
            let node = AndExpr::new(left, right, NodeID::placeholder(), span);
            left = self.alloc(NodeKind::And, AnyNode::And(node), span);
        }

        Ok(left)
    }

    // equality := relation (('eq'|'==' | 'ne'|'!=') relation)?
    fn parse_equality(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let left = self.parse_relation()?;

        let op = match self.current().kind {
            TokenKind::Equal => EqualityOp::Eq,
            TokenKind::NotEqual => EqualityOp::Ne,
            _ => return Ok(left),
        };
        let _ = self.advance();
        let right = self.parse_relation()?;
        let span = Self::span_of(&start, self.current().span.start);
        let node = EqualityExpr::new(left, op, right, NodeID::placeholder(), span);
        Ok(self.alloc(NodeKind::Equality, AnyNode::Equality(node), span))
    }

    // relation := algebraic (rel_op algebraic)? | '(' ternary ')'
    fn parse_relation(&mut self) -> ParseResult<NodeID> {
        if self.check(TokenKind::OpenParen) {
            let _ = self.advance();
            let inner = self.parse_ternary()?;
            self.expect(TokenKind::CloseParen)?;
            return Ok(inner);
        }

        let start = self.current().clone();
        let left = self.parse_algebraic()?;

        let op = match self.current().kind {
            TokenKind::Greater => RelationOp::Gt,
            TokenKind::Less => RelationOp::Lt,
            TokenKind::GreaterEqual => RelationOp::Ge,
            TokenKind::LessEqual => RelationOp::Le,
            _ => return Ok(left),
        };
        let _ = self.advance();
        let right = self.parse_algebraic()?;
        let span = Self::span_of(&start, self.current().span.start);
        let node = RelationExpr::new(left, op, right, NodeID::placeholder(), span);
        Ok(self.alloc(NodeKind::Relation, AnyNode::Relation(node), span))
    }

    // algebraic := member (('+'|'-') member)*
    fn parse_algebraic(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let mut left = self.parse_member()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Plus => AlgebraicOp::Add,
                TokenKind::Minus => AlgebraicOp::Sub,
                _ => break,
            };
            let _ = self.advance();
            let right = self.parse_member()?;
            let span = Self::span_of(&start, self.current().span.start);
            let node = AlgebraicExpr::new(left, op, right, NodeID::placeholder(), span);
            left = self.alloc(NodeKind::Algebraic, AnyNode::Algebraic(node), span);
        }

        Ok(left)
    }

    // member := base (('*'|'/'|'%') base)*
    fn parse_member(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let mut left = self.parse_base()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Mul => MemberOp::Mul,
                TokenKind::Div => MemberOp::Div,
                TokenKind::Mod => MemberOp::Mod,
                _ => break,
            };
            let _ = self.advance();
            let right = self.parse_base()?;
            let span = Self::span_of(&start, self.current().span.start);
            let node = MemberExpr::new(left, op, right, NodeID::placeholder(), span);
            left = self.alloc(NodeKind::Member, AnyNode::Member(node), span);
        }

        Ok(left)
    }

    // base := ('not'|'!'|'-'|'empty')+ expression | value
    //
    // Each unary token nests a level deeper, each owning the next as its
    // operand; once the chain of unary tokens runs out, the final operand is
    // a full `expression` (so e.g. `not a or b` parses as `not (a or b)`).
    fn parse_base(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let op = match self.current().kind {
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Minus,
            TokenKind::Empty => UnaryOp::Empty,
            _ => return self.parse_value(),
        };
        let _ = self.advance();

        let operand = if matches!(self.current().kind, TokenKind::Not | TokenKind::Minus | TokenKind::Empty) {
            self.parse_base()?
        } else {
            self.parse_expression()?
        };

        let span = Self::span_of(&start, self.current().span.start);
        let node = UnaryExpr::new(op, operand, NodeID::placeholder(), span);
        Ok(self.alloc(NodeKind::Unary, AnyNode::Unary(node), span))
    }

    // value := primitive ('.' identifier | '[' primitive ']' | '(' value? ')')*
    //
    // The grammar's `value` only grows `.`/`[...]` accessors off a
    // `primitive` head, but a postfix `(...)` is allowed to follow an
    // accessor too (`a.b(x)`), not just a bare primitive — the literal
    // `primitive '(' value ')'` production alone cannot reach that shape
    // since by the time `.b` is consumed the head primitive has already
    // finished parsing.
    fn parse_value(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let head = self.parse_primitive()?;
        let mut accessors = Vec::new();

        loop {
            if self.check(TokenKind::Dot) {
                let _ = self.advance();
                let name = self.expect(TokenKind::Identifier)?;
                accessors.push(Accessor::Field(name.lexeme.to_owned()));
            } else if self.check(TokenKind::OpenBracket) {
                let _ = self.advance();
                let index = self.parse_primitive()?;
                self.expect(TokenKind::CloseBracket)?;
                accessors.push(Accessor::Index(index));
            } else if self.check(TokenKind::OpenParen) {
                let _ = self.advance();
                let args = if self.check(TokenKind::CloseParen) {
                    Vec::new()
                } else {
                    vec![self.parse_value()?]
                };
                self.expect(TokenKind::CloseParen)?;
                accessors.push(Accessor::Call(args));
            } else {
                break;
            }
        }

        let span = Self::span_of(&start, self.current().span.start);
        let node = ValueExpr::new(head, accessors, NodeID::placeholder(), span);
        Ok(self.alloc(NodeKind::Value, AnyNode::Value(node), span))
    }

    // primitive := literal | identifier | primitive '(' value ')' | primitive '(' ')'
    fn parse_primitive(&mut self) -> ParseResult<NodeID> {
        let start = self.current().clone();
        let mut node_id = self.parse_primitive_atom(&start)?;

        while self.check(TokenKind::OpenParen) {
            let _ = self.advance();
            let arg = if self.check(TokenKind::CloseParen) { None } else { Some(self.parse_value()?) };
            self.expect(TokenKind::CloseParen)?;
            let span = Self::span_of(&start, self.current().span.start);
            let node = PrimitiveExpr::new(
                PrimitiveKind::Call { callee: node_id, arg },
                NodeID::placeholder(),
                span,
            );
            node_id = self.alloc(NodeKind::Primitive, AnyNode::Primitive(node), span);
        }

        Ok(node_id)
    }

    fn parse_primitive_atom(&mut self, start: &Token<'src>) -> ParseResult<NodeID> {
        let span = Span::new(start.span.start, start.span.end);
        let kind = match self.current().kind {
            TokenKind::BooleanLiteral => {
                let token = self.advance();
                PrimitiveKind::Literal(Literal::Boolean(token.lexeme == "true"))
            }
            TokenKind::NullLiteral => {
                let _ = self.advance();
                PrimitiveKind::Literal(Literal::Null)
            }
            TokenKind::StringLiteral => {
                let token = self.advance();
                let content = &token.lexeme[1..token.lexeme.len() - 1];
                PrimitiveKind::Literal(Literal::String(content.to_owned()))
            }
            TokenKind::IntegerLiteral => {
                let token = self.advance();
                let value = token.lexeme.parse().map_err(|_| self.syntax_error(Phase::Parse))?;
                PrimitiveKind::Literal(Literal::Integer(value))
            }
            TokenKind::Identifier => {
                let token = self.advance();
                PrimitiveKind::Identifier(token.lexeme.to_owned())
            }
            _ => return Err(self.syntax_error(Phase::Parse)),
        };

        let node = PrimitiveExpr::new(kind, NodeID::placeholder(), span);
        Ok(self.alloc(NodeKind::Primitive, AnyNode::Primitive(node), span))
    }
}

#[cfg(test)]
mod tests {
    use javael_ast::nodes::AnyNode;

    use super::*;

    #[test]
    fn parses_simple_relation() {
        let (ast, root) = parse("a > 1").expect("valid expression");
        let node = ast.get_node(root).expect("root node");
        assert!(matches!(node.data, AnyNode::Value(_)));
    }

    #[test]
    fn parses_ternary() {
        let (ast, root) = parse("a > 1 ? b : c").expect("valid expression");
        let node = ast.get_node(root).expect("root node");
        assert!(matches!(node.data, AnyNode::Ternary(_)));
    }

    #[test]
    fn parses_boolean_chain_left_associative() {
        let (ast, root) = parse("a and b or c").expect("valid expression");
        let node = ast.get_node(root).expect("root node");
        assert!(matches!(node.data, AnyNode::Or(_)));
    }

    #[test]
    fn parenthesized_group_is_atomic_at_relation_level() {
        let (ast, root) = parse("(a or b) and c").expect("valid expression");
        let node = ast.get_node(root).expect("root node");
        assert!(matches!(node.data, AnyNode::And(_)));
        let AnyNode::And(and) = &node.data else { unreachable!() };
        let left = ast.get_node(and.left).expect("left operand");
        assert!(matches!(left.data, AnyNode::Or(_)));
    }

    #[test]
    fn unary_chain_nests() {
        let (ast, root) = parse("not not a").expect("valid expression");
        let node = ast.get_node(root).expect("root node");
        let AnyNode::Unary(outer) = &node.data else { panic!("expected unary") };
        assert_eq!(outer.op, UnaryOp::Not);
        let inner = ast.get_node(outer.operand).expect("inner operand");
        assert!(matches!(inner.data, AnyNode::Unary(_)));
    }

    #[test]
    fn parses_member_access_and_call_chain() {
        let (ast, root) = parse("a.b(x)").expect("valid expression");
        let node = ast.get_node(root).expect("root node");
        let AnyNode::Value(value) = &node.data else { panic!("expected value") };
        assert_eq!(value.accessors.len(), 2);
    }

    #[test]
    fn reports_syntax_error_with_location() {
        let err = parse("a >").unwrap_err();
        match err {
            ParseError::Syntax(syntax) => assert_eq!(syntax.phase, Phase::Parse),
        }
    }
}
