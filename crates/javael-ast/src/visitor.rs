//! AST visitor pattern implementation.
//!
//! Arena-based: visitors receive `NodeID`s rather than direct references, and
//! generation counters in the arena prevent use-after-free. The AST is never
//! mutated by a visitor — analysis results live in side tables keyed by
//! `NodeID` (see `javael-analyzer`), per the design note that dynamic
//! attributes belong off the tree, not on it.

use std::fmt::{self, Display, Formatter};

use crate::nodes::NodeID;

/// Trait for AST nodes that can be visited.
pub trait Visitable {
    /// Accepts a visitor and dispatches to the appropriate visit method.
    ///
    /// ## Errors
    ///
    /// Returns a `VisitorError` if the visitor has no implementation for this
    /// node's variant (see `VisitorError::Custom`, emitted by the default
    /// `visit_*` methods generated by `visit_default!`).
    fn accept<T>(&self, visitor: &mut dyn Visitor<T>, node_id: NodeID) -> VisitorResult<T>;
}

/// Macro to generate all `visit_*` methods with the same default-erroring body.
macro_rules! visit_default {
    ($($method:ident),* $(,)?) => {
        $(
            /// Visits a node of the specified shape.
            ///
            /// ## Errors
            ///
            /// Returns an error unless overridden for this node shape.
            fn $method(&mut self, node_id: NodeID) -> VisitorResult<T> {
                Err(VisitorError::Custom(format!(
                    concat!(stringify!($method), " not implemented for node {}"), node_id,
                )))
            }
        )*
    };
}

/// Visitor trait for AST nodes, dispatched by variant via `Visitable::accept`.
pub trait Visitor<T> {
    /// Helper to visit a node and turn a `None` result into an error.
    ///
    /// ## Errors
    ///
    /// Returns an error if the underlying `visit` call returns `None`.
    fn try_visit(&mut self, node_id: NodeID) -> VisitorResult<T> {
        self.visit(node_id)
            .ok_or_else(|| VisitorError::Custom(format!("failed to visit node {node_id}")))
    }

    /// Helper to visit an optional node.
    ///
    /// ## Errors
    ///
    /// Returns an error if `node_id_opt` is `Some` and the visit fails.
    fn try_visit_opt(&mut self, node_id_opt: Option<NodeID>) -> VisitorResult<Option<T>> {
        node_id_opt.map_or_else(|| Ok(None), |node_id| self.try_visit(node_id).map(Some))
    }

    /// Visits a list of nodes, failing fast on the first error.
    ///
    /// ## Errors
    ///
    /// Returns the first error encountered.
    fn visit_list(&mut self, node_ids: &[NodeID]) -> VisitorResult<Vec<T>> {
        node_ids.iter().map(|&id| self.try_visit(id)).collect()
    }

    /// Generic entry point for visiting any node by ID.
    fn visit(&mut self, node_id: NodeID) -> Option<T>;

    visit_default!(
        visit_ternary,
        visit_or,
        visit_and,
        visit_equality,
        visit_relation,
        visit_algebraic,
        visit_member,
        visit_unary,
        visit_value,
        visit_primitive,
    );
}

/// Error type for visitor operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitorError {
    /// Node not found in the AST.
    NodeNotFound(NodeID),
    /// Node type mismatch.
    TypeMismatch {
        /// The node ID that caused the mismatch.
        node_id: NodeID,
        /// Expected node kind.
        expected: String,
        /// Actual node kind.
        actual: String,
    },
    /// Custom error with message.
    Custom(String),
}

impl Display for VisitorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound(id) => write!(f, "node not found: {id}"),
            Self::TypeMismatch { node_id, expected, actual } => {
                write!(f, "type mismatch for node {node_id}: expected {expected}, got {actual}")
            }
            Self::Custom(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for VisitorError {}

/// Result type for visitor operations.
pub type VisitorResult<T> = Result<T, VisitorError>;
