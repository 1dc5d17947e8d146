//! JavaEL expression node types.
//!
//! Mirrors the grammar in the lexer/parser design note: `ternary`, `expression`
//! (or-chain), `term` (and-chain), `equality`, `relation`, `algebraic`, `member`,
//! `base` (unary), `value` (access chain), `primitive`.

use std::fmt;

use javael_source::types::Span;

use super::{ASTNode, NodeID, NodeKind};

// ============================================================================
// Ternary
// ============================================================================

/// `cond ? then : else`. Right-associative; the analyzer in `javael-analyzer`
/// walks chains of these to compute nesting depth.
#[derive(Debug, Clone, Copy)]
pub struct TernaryExpr {
    /// The boolean predicate.
    pub cond: NodeID,
    /// Branch taken when `cond` is true.
    pub then_branch: NodeID,
    /// Branch taken when `cond` is false.
    pub else_branch: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl TernaryExpr {
    /// Creates a new ternary expression.
    #[must_use]
    pub const fn new(
        cond: NodeID,
        then_branch: NodeID,
        else_branch: NodeID,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { cond, then_branch, else_branch, id, parent: None, span }
    }
}

impl ASTNode for TernaryExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Ternary }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.cond, self.then_branch, self.else_branch] }
}

impl_visitable!(TernaryExpr, visit_ternary);

impl fmt::Display for TernaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Ternary") }
}

// ============================================================================
// Or / And
// ============================================================================

/// `left or right`.
#[derive(Debug, Clone, Copy)]
pub struct OrExpr {
    /// Left-hand operand.
    pub left: NodeID,
    /// Right-hand operand.
    pub right: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl OrExpr {
    /// Creates a new `or` expression.
    #[must_use]
    pub const fn new(left: NodeID, right: NodeID, id: NodeID, span: Span) -> Self {
        Self { left, right, id, parent: None, span }
    }
}

impl ASTNode for OrExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Or }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.left, self.right] }
}

impl_visitable!(OrExpr, visit_or);

impl fmt::Display for OrExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Or") }
}

/// `left and right`.
#[derive(Debug, Clone, Copy)]
pub struct AndExpr {
    /// Left-hand operand.
    pub left: NodeID,
    /// Right-hand operand.
    pub right: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl AndExpr {
    /// Creates a new `and` expression.
    #[must_use]
    pub const fn new(left: NodeID, right: NodeID, id: NodeID, span: Span) -> Self {
        Self { left, right, id, parent: None, span }
    }
}

impl ASTNode for AndExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::And }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.left, self.right] }
}

impl_visitable!(AndExpr, visit_and);

impl fmt::Display for AndExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "And") }
}

// ============================================================================
// Equality / Relation / Algebraic / Member (binary non-logical operators)
// ============================================================================

/// `eq` / `ne` (also written `==` / `!=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityOp {
    /// `eq` / `==`
    Eq,
    /// `ne` / `!=`
    Ne,
}

impl fmt::Display for EqualityOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
        })
    }
}

/// `left (eq|ne) right`.
#[derive(Debug, Clone, Copy)]
pub struct EqualityExpr {
    /// Left-hand operand.
    pub left: NodeID,
    /// The comparison operator.
    pub op: EqualityOp,
    /// Right-hand operand.
    pub right: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl EqualityExpr {
    /// Creates a new equality expression.
    #[must_use]
    pub const fn new(
        left: NodeID,
        op: EqualityOp,
        right: NodeID,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { left, op, right, id, parent: None, span }
    }
}

impl ASTNode for EqualityExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Equality }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.left, self.right] }
}

impl_visitable!(EqualityExpr, visit_equality);

impl fmt::Display for EqualityExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Equality({})", self.op) }
}

/// `gt` / `lt` / `ge` / `le` (also written `>` / `<` / `>=` / `<=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationOp {
    /// `gt` / `>`
    Gt,
    /// `lt` / `<`
    Lt,
    /// `ge` / `>=`
    Ge,
    /// `le` / `<=`
    Le,
}

impl fmt::Display for RelationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::Ge => "ge",
            Self::Le => "le",
        })
    }
}

/// `left (gt|lt|ge|le) right`.
#[derive(Debug, Clone, Copy)]
pub struct RelationExpr {
    /// Left-hand operand.
    pub left: NodeID,
    /// The comparison operator.
    pub op: RelationOp,
    /// Right-hand operand.
    pub right: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl RelationExpr {
    /// Creates a new relation expression.
    #[must_use]
    pub const fn new(
        left: NodeID,
        op: RelationOp,
        right: NodeID,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { left, op, right, id, parent: None, span }
    }
}

impl ASTNode for RelationExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Relation }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.left, self.right] }
}

impl_visitable!(RelationExpr, visit_relation);

impl fmt::Display for RelationExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Relation({})", self.op) }
}

/// `+` / `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraicOp {
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl fmt::Display for AlgebraicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
        })
    }
}

/// `left (+|-) right`.
#[derive(Debug, Clone, Copy)]
pub struct AlgebraicExpr {
    /// Left-hand operand.
    pub left: NodeID,
    /// The arithmetic operator.
    pub op: AlgebraicOp,
    /// Right-hand operand.
    pub right: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl AlgebraicExpr {
    /// Creates a new algebraic expression.
    #[must_use]
    pub const fn new(
        left: NodeID,
        op: AlgebraicOp,
        right: NodeID,
        id: NodeID,
        span: Span,
    ) -> Self {
        Self { left, op, right, id, parent: None, span }
    }
}

impl ASTNode for AlgebraicExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Algebraic }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.left, self.right] }
}

impl_visitable!(AlgebraicExpr, visit_algebraic);

impl fmt::Display for AlgebraicExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Algebraic({})", self.op)
    }
}

/// `*` / `/` / `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOp {
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl fmt::Display for MemberOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        })
    }
}

/// `left (*|/|%) right`. Named `Member` after the `member` grammar production,
/// not to be confused with member (`.field`) access, which lives on `ValueExpr`.
#[derive(Debug, Clone, Copy)]
pub struct MemberExpr {
    /// Left-hand operand.
    pub left: NodeID,
    /// The arithmetic operator.
    pub op: MemberOp,
    /// Right-hand operand.
    pub right: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl MemberExpr {
    /// Creates a new member (multiplicative) expression.
    #[must_use]
    pub const fn new(left: NodeID, op: MemberOp, right: NodeID, id: NodeID, span: Span) -> Self {
        Self { left, op, right, id, parent: None, span }
    }
}

impl ASTNode for MemberExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Member }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.left, self.right] }
}

impl_visitable!(MemberExpr, visit_member);

impl fmt::Display for MemberExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Member({})", self.op) }
}

// ============================================================================
// Unary
// ============================================================================

/// `not` / `!` / `empty` / unary `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `not` / `!`
    Not,
    /// `empty`
    Empty,
    /// unary `-`
    Minus,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Not => "not",
            Self::Empty => "empty",
            Self::Minus => "-",
        })
    }
}

/// `op operand`. Chains of unary operators (`not not empty x`) nest, each level
/// owning the next as its `operand`.
#[derive(Debug, Clone, Copy)]
pub struct UnaryExpr {
    /// The unary operator.
    pub op: UnaryOp,
    /// The operand the operator applies to.
    pub operand: NodeID,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl UnaryExpr {
    /// Creates a new unary expression.
    #[must_use]
    pub const fn new(op: UnaryOp, operand: NodeID, id: NodeID, span: Span) -> Self {
        Self { op, operand, id, parent: None, span }
    }
}

impl ASTNode for UnaryExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Unary }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> { vec![self.operand] }
}

impl_visitable!(UnaryExpr, visit_unary);

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Unary({})", self.op) }
}

// ============================================================================
// Value (access chains) / Primitive (literal, identifier, call)
// ============================================================================

/// A single link in an access chain: `.field`, `[expr]`, `()`, or `(args)`.
#[derive(Debug, Clone)]
pub enum Accessor {
    /// `.field`
    Field(String),
    /// `[expr]`
    Index(NodeID),
    /// `()` or `(args)` — zero or more `Value` argument nodes.
    Call(Vec<NodeID>),
}

impl Accessor {
    /// The child nodes this accessor references, if any.
    #[must_use]
    pub fn children(&self) -> Vec<NodeID> {
        match self {
            Self::Field(_) => vec![],
            Self::Index(id) => vec![*id],
            Self::Call(args) => args.clone(),
        }
    }
}

/// `primitive (.field | [expr])*` — a primitive head with zero or more accessors.
#[derive(Debug, Clone)]
pub struct ValueExpr {
    /// The primitive this chain starts from.
    pub head: NodeID,
    /// The access chain, applied left to right.
    pub accessors: Vec<Accessor>,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl ValueExpr {
    /// Creates a new value expression.
    #[must_use]
    pub const fn new(head: NodeID, accessors: Vec<Accessor>, id: NodeID, span: Span) -> Self {
        Self { head, accessors, id, parent: None, span }
    }
}

impl ASTNode for ValueExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Value }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        let mut out = vec![self.head];
        for accessor in &self.accessors {
            out.extend(accessor.children());
        }
        out
    }
}

impl_visitable!(ValueExpr, visit_value);

impl fmt::Display for ValueExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({} accessors)", self.accessors.len())
    }
}

/// A literal value: boolean, null, string, or integer.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `true` / `false`
    Boolean(bool),
    /// `null`
    Null,
    /// Single- or double-quoted string, unescaped.
    String(String),
    /// Decimal integer.
    Integer(i64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::String(value) => write!(f, "'{value}'"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// `literal | identifier | primitive '(' value? ')'`.
#[derive(Debug, Clone)]
pub enum PrimitiveKind {
    /// A boolean/null/string/integer literal.
    Literal(Literal),
    /// A bare identifier reference, dotted segments already split by the caller.
    Identifier(String),
    /// A call: `callee(arg)` or `callee()`.
    Call {
        /// The callee, itself a `Primitive` node.
        callee: NodeID,
        /// The single argument, if any (the grammar allows at most one `value`).
        arg: Option<NodeID>,
    },
}

/// A primitive: literal, identifier, or call.
#[derive(Debug, Clone)]
pub struct PrimitiveExpr {
    /// The primitive's payload.
    pub kind: PrimitiveKind,
    /// The ID of this node in the AST arena.
    pub id: NodeID,
    /// The ID of the parent node, if any.
    pub parent: Option<NodeID>,
    /// The span of this node in the source code.
    pub span: Span,
}

impl PrimitiveExpr {
    /// Creates a new primitive expression.
    #[must_use]
    pub const fn new(kind: PrimitiveKind, id: NodeID, span: Span) -> Self {
        Self { kind, id, parent: None, span }
    }
}

impl ASTNode for PrimitiveExpr {
    fn id(&self) -> NodeID { self.id }

    fn parent(&self) -> Option<NodeID> { self.parent }

    fn with_parent(mut self, parent: NodeID) -> Self {
        self.parent = Some(parent);
        self
    }

    fn kind(&self) -> NodeKind { NodeKind::Primitive }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeID> {
        match &self.kind {
            PrimitiveKind::Literal(_) | PrimitiveKind::Identifier(_) => vec![],
            PrimitiveKind::Call { callee, arg } => {
                let mut out = vec![*callee];
                out.extend(arg.iter().copied());
                out
            }
        }
    }
}

impl_visitable!(PrimitiveExpr, visit_primitive);

impl fmt::Display for PrimitiveExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PrimitiveKind::Literal(literal) => write!(f, "Primitive({literal})"),
            PrimitiveKind::Identifier(name) => write!(f, "Primitive({name})"),
            PrimitiveKind::Call { .. } => write!(f, "Primitive(call)"),
        }
    }
}
