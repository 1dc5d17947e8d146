//! Declarative macros for reducing boilerplate in AST node implementations.
//!
//! This module contains macros that generate repetitive trait implementations
//! for the `AnyNode` enum and related types.
//!
//! ## Design Philosophy
//!
//! Rather than manually writing a match arm per node kind for each trait, we use
//! a master list of node variants and generate all implementations from it.
//!
//! - **Single Source of Truth**: all node variants are defined in one place
//! - **Maintainability**: adding a new node type requires updating only the master list

/// Master list of all AST node variants.
///
/// Each line follows the pattern `EnumVariant(Type) => visitor_method_name,`. To add a
/// node type: add its struct to `nodes::expressions`, then add a line here.
#[macro_export]
macro_rules! for_each_node_variant {
    ($callback:ident) => {
        $callback! {
            Ternary(TernaryExpr) => visit_ternary,
            Or(OrExpr) => visit_or,
            And(AndExpr) => visit_and,
            Equality(EqualityExpr) => visit_equality,
            Relation(RelationExpr) => visit_relation,
            Algebraic(AlgebraicExpr) => visit_algebraic,
            Member(MemberExpr) => visit_member,
            Unary(UnaryExpr) => visit_unary,
            Value(ValueExpr) => visit_value,
            Primitive(PrimitiveExpr) => visit_primitive,
        }
    };
}

/// Generates the `ASTNode` trait implementation for `AnyNode`.
#[macro_export]
macro_rules! impl_astnode_for_anynode {
    ($($variant:ident($type:ty) => $visit:ident),* $(,)?) => {
        impl $crate::nodes::ASTNode for $crate::nodes::AnyNode {
            fn id(&self) -> $crate::nodes::NodeID {
                match self {
                    $(Self::$variant(node) => node.id(),)*
                }
            }

            fn parent(&self) -> Option<$crate::nodes::NodeID> {
                match self {
                    $(Self::$variant(node) => node.parent(),)*
                }
            }

            fn with_parent(self, parent: $crate::nodes::NodeID) -> Self {
                match self {
                    $(Self::$variant(node) => Self::$variant(node.with_parent(parent)),)*
                }
            }

            fn kind(&self) -> $crate::nodes::NodeKind {
                match self {
                    $(Self::$variant(node) => node.kind(),)*
                }
            }

            fn span(&self) -> javael_source::types::Span {
                match self {
                    $(Self::$variant(node) => node.span(),)*
                }
            }

            fn children(&self) -> Vec<$crate::nodes::NodeID> {
                match self {
                    $(Self::$variant(node) => node.children(),)*
                }
            }
        }
    };
}

/// Generates the `Visitable` trait implementation for `AnyNode`.
#[macro_export]
macro_rules! impl_visitable_for_anynode {
    ($($variant:ident($type:ty) => $visit:ident),* $(,)?) => {
        impl $crate::visitor::Visitable for $crate::nodes::AnyNode {
            fn accept<T>(
                &self,
                visitor: &mut dyn $crate::visitor::Visitor<T>,
                node_id: $crate::nodes::NodeID,
            ) -> $crate::visitor::VisitorResult<T> {
                match self {
                    $(Self::$variant(_) => visitor.$visit(node_id),)*
                }
            }
        }
    };
}

/// Generates a complete `Visitable` trait implementation for a concrete node type.
#[macro_export]
macro_rules! impl_visitable {
    ($type:ty, $method:ident) => {
        impl $crate::visitor::Visitable for $type {
            fn accept<T>(
                &self,
                visitor: &mut dyn $crate::visitor::Visitor<T>,
                node_id: $crate::nodes::NodeID,
            ) -> $crate::visitor::VisitorResult<T> {
                visitor.$method(node_id)
            }
        }
    };
}

/// Generates the `Display` trait implementation for `AnyNode`.
#[macro_export]
macro_rules! impl_display_for_anynode {
    ($($variant:ident($type:ty) => $visit:ident),* $(,)?) => {
        impl std::fmt::Display for $crate::nodes::AnyNode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant(node) => node.fmt(f),)*
                }
            }
        }
    };
}

/// Generates a `NodeKind`-checked accessor for each variant, e.g. `AnyNode::as_ternary()`.
#[macro_export]
macro_rules! impl_as_variant_for_anynode {
    ($($variant:ident($type:ty) => $visit:ident),* $(,)?) => {
        impl $crate::nodes::AnyNode {
            $(
                paste::paste! {
                    #[doc = concat!("Returns the inner `", stringify!($type), "` if this node is a `", stringify!($variant), "`.")]
                    #[must_use]
                    pub fn [<as_ $variant:snake>](&self) -> Option<&$type> {
                        match self {
                            Self::$variant(inner) => Some(inner),
                            _ => None,
                        }
                    }
                }
            )*
        }
    };
}
