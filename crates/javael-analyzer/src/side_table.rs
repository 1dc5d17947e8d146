//! Identity-keyed side tables.
//!
//! The AST is never mutated to carry analysis results — attributes computed
//! by a pass (whether a node is a simple operand, the ternary nesting depth)
//! live in maps keyed by [`NodeID`], scoped to the lifetime of one compile.

use javael_ast::nodes::NodeID;
use rustc_hash::FxHashMap;

/// A map from node identity to an attribute value, populated by a single
/// analysis pass and read by later pipeline stages.
#[derive(Debug, Clone, Default)]
pub struct SideTable<T> {
    values: FxHashMap<NodeID, T>,
}

impl<T> SideTable<T> {
    /// Creates an empty side table.
    #[must_use]
    pub fn new() -> Self { Self { values: FxHashMap::default() } }

    /// Records the attribute value for a node.
    pub fn set(&mut self, id: NodeID, value: T) { drop(self.values.insert(id, value)); }

    /// Returns the attribute value for a node, if one was recorded.
    #[must_use]
    pub fn get(&self, id: NodeID) -> Option<&T> { self.values.get(&id) }

    /// Returns the number of entries recorded.
    #[must_use]
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` if no entries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl SideTable<bool> {
    /// Returns the recorded value, defaulting to `false` for nodes the pass
    /// never visited (a node it never considered a candidate is not simple).
    #[must_use]
    pub fn is_set(&self, id: NodeID) -> bool { self.get(id).copied().unwrap_or(false) }
}
