//! The typed logical formula produced by the zipper (spec §4.5) and
//! consumed by the normalizer (§4.7).
//!
//! Per §9's design note ("an implementation may keep a richer typed
//! intermediate representation and skip reparsing"), this crate never
//! actually stringifies the residual boolean skeleton and re-parses it as
//! FEEL between stages — `BoolFormula` carries the same information a
//! textual round-trip would, and [`crate::feel_print`] renders it to FEEL
//! text only where the spec's testable properties require literal output
//! (property 2, the ternary normal form).

use javael_ast::nodes::NodeID;
use rustc_hash::FxHashMap;

/// A synthetic atom id assigned during zipping (`op_<N>` in spec prose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomId(u32);

impl std::fmt::Display for AtomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "op_{}", self.0) }
}

/// `op_id → AST sub-tree`, spec §3's **OperatorStorage**.
///
/// Atoms survive the whole pipeline: the zipper registers one per simple
/// operand, the normalizer's "unzip" step looks them back up, and the
/// fragmenter consumes the `NodeID` to build the DMN operator tree.
#[derive(Debug, Clone, Default)]
pub struct OperatorStorage {
    atoms: Vec<NodeID>,
    by_node: FxHashMap<NodeID, AtomId>,
}

impl OperatorStorage {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers `node` as an atom, reusing the existing [`AtomId`] if this
    /// node was already zipped (the same sub-tree never needs two ids).
    pub fn register(&mut self, node: NodeID) -> AtomId {
        if let Some(&id) = self.by_node.get(&node) {
            return id;
        }
        let id = AtomId(u32::try_from(self.atoms.len()).expect("fewer than u32::MAX atoms per compile"));
        self.atoms.push(node);
        self.by_node.insert(node, id);
        id
    }

    /// Looks up the AST node an atom was registered for.
    #[must_use]
    pub fn lookup(&self, id: AtomId) -> Option<NodeID> { self.atoms.get(id.0 as usize).copied() }

    /// Number of distinct atoms registered so far.
    #[must_use]
    pub fn len(&self) -> usize { self.atoms.len() }

    /// Returns `true` if no atoms have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.atoms.is_empty() }
}

/// The residual purely-logical formula over atoms (spec §3's `DmnNode`
/// companion — this is the "boolean skeleton", not the DMN tree itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolFormula {
    /// A zipped simple operand.
    Atom(AtomId),
    /// `not(inner)`.
    Not(Box<BoolFormula>),
    /// `left and right`.
    And(Box<BoolFormula>, Box<BoolFormula>),
    /// `left or right`.
    Or(Box<BoolFormula>, Box<BoolFormula>),
}

impl BoolFormula {
    /// Shorthand for [`BoolFormula::Not`].
    #[must_use]
    pub fn not(inner: Self) -> Self { Self::Not(Box::new(inner)) }

    /// Shorthand for [`BoolFormula::And`].
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self { Self::And(Box::new(left), Box::new(right)) }

    /// Shorthand for [`BoolFormula::Or`].
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self { Self::Or(Box::new(left), Box::new(right)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registering_the_same_node_twice_reuses_the_atom_id() {
        let mut storage = OperatorStorage::new();
        let node = NodeID::placeholder();
        let first = storage.register(node);
        let second = storage.register(node);
        assert_eq!(first, second);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn lookup_resolves_back_to_the_original_node() {
        let mut storage = OperatorStorage::new();
        let node = NodeID::placeholder();
        let id = storage.register(node);
        assert_eq!(storage.lookup(id), Some(node));
    }
}
