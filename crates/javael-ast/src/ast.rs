//! AST arena allocator for efficient node management.
//!
//! Provides the core AST arena that manages memory allocation for all AST
//! nodes using a bump allocator with generation-based safety.

use bumpalo::Bump;
use javael_source::types::Span;

use crate::nodes::{AnyNode, Node, NodeID, NodeKind};
use crate::visitor::{Visitor, VisitorResult};

/// Metadata for a single slot in the node arena.
#[derive(Debug, Clone, Copy)]
struct SlotMetadata {
    /// Generation counter for this slot (incremented on removal).
    generation: u32,
    /// Whether this slot currently contains a node.
    occupied: bool,
}

impl SlotMetadata {
    const fn new(occupied: bool) -> Self { Self { generation: 1, occupied } }

    const fn increment_generation(&mut self) { self.generation = self.generation.wrapping_add(1); }
}

/// An arena for allocating AST nodes.
///
/// Manages memory allocation for all AST nodes using a bump allocator, with
/// generation-based safety to prevent use-after-free bugs when slots are reused.
#[derive(Debug)]
pub struct AST {
    /// The bump allocator, used for allocating interned strings.
    allocator: Bump,
    /// Storage for nodes with associated metadata.
    nodes: Vec<Option<Node>>,
    /// Metadata for each slot (generation counter and occupancy status).
    metadata: Vec<SlotMetadata>,
    /// Free list for O(1) slot reuse.
    free_list: Vec<u32>,
    /// The root node of the AST, if any.
    root: Option<NodeID>,
}

impl AST {
    /// Creates a new empty AST arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: Bump::new(),
            nodes: Vec::new(),
            metadata: Vec::new(),
            free_list: Vec::new(),
            root: None,
        }
    }

    /// Creates a new AST arena with the given initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            allocator: Bump::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            metadata: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            root: None,
        }
    }

    /// Sets the root node of the AST.
    pub const fn set_root(&mut self, root: NodeID) { self.root = Some(root); }

    /// Returns the root node of the AST, if any.
    pub const fn root(&self) -> Option<NodeID> { self.root }

    /// Allocates a new node in the arena with O(1) slot allocation.
    pub fn alloc_node(&mut self, kind: NodeKind, data: AnyNode, span: Span) -> NodeID {
        let (index, generation) = if let Some(free_index) = self.free_list.pop() {
            let metadata = &self.metadata[free_index as usize];
            (free_index, metadata.generation)
        } else {
            let index = self.nodes.len() as u32;
            self.nodes.push(None);
            self.metadata.push(SlotMetadata::new(true));
            (index, 1)
        };

        let node = Node { kind, data, span, parent: None };
        self.nodes[index as usize] = Some(node);
        self.metadata[index as usize].occupied = true;

        NodeID::new(index, generation)
    }

    /// Gets a reference to a node by its ID with generation validation.
    pub fn get_node(&self, id: NodeID) -> Option<&Node> {
        let index = id.index() as usize;
        if index >= self.nodes.len() || self.metadata[index].generation != id.generation() {
            return None;
        }

        self.nodes[index].as_ref()
    }

    /// Gets a mutable reference to a node by its ID with generation validation.
    pub fn get_node_mut(&mut self, id: NodeID) -> Option<&mut Node> {
        let index = id.index() as usize;
        if index >= self.nodes.len() || self.metadata[index].generation != id.generation() {
            return None;
        }

        self.nodes[index].as_mut()
    }

    /// Checks whether a node exists in the arena.
    #[must_use]
    pub fn node_exists(&self, id: NodeID) -> bool { self.get_node(id).is_some() }

    /// Sets the parent of a node.
    pub fn set_parent(&mut self, child: NodeID, parent: NodeID) -> bool {
        if let Some(node) = self.get_node_mut(child) {
            node.parent = Some(parent);
            return true;
        }

        false
    }

    /// Gets the parent of a node, if any.
    #[must_use]
    pub fn get_parent(&self, id: NodeID) -> Option<NodeID> { self.get_node(id)?.parent }

    /// Allocates a string in the arena.
    pub fn alloc_str(&self, s: &str) -> &str { self.allocator.alloc_str(s) }

    /// Returns the number of nodes currently stored in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize { self.nodes.iter().filter(|n| n.is_some()).count() }

    /// Removes a node from the arena, invalidating all `NodeID`s pointing at it.
    pub fn remove(&mut self, id: NodeID) -> bool {
        let index = id.index() as usize;
        if index >= self.nodes.len()
            || self.metadata[index].generation != id.generation()
            || self.nodes[index].is_none()
        {
            return false;
        }

        self.nodes[index] = None;
        self.metadata[index].increment_generation();
        self.metadata[index].occupied = false;
        self.free_list.push(id.index());

        true
    }

    /// Helper method for the visitor pattern.
    pub fn visit_as<T>(&mut self, node_id: NodeID) -> Option<T>
    where Self: Visitor<T> {
        <Self as Visitor<T>>::visit(self, node_id)
    }

    /// Performs a pre-order traversal of the AST starting from the given node.
    ///
    /// Returns `true` if the traversal completed, `false` if `visit_fn` aborted it.
    pub fn traverse_pre_order<F>(&self, node_id: NodeID, visit_fn: &mut F) -> bool
    where F: FnMut(NodeID) -> bool {
        if !visit_fn(node_id) {
            return false;
        }

        let Some(node) = self.get_node(node_id) else { return false };

        for child_id in node.data.children() {
            if !self.traverse_pre_order(child_id, visit_fn) {
                return false;
            }
        }

        true
    }

    /// Performs a post-order traversal of the AST starting from the given node.
    pub fn traverse_post_order<F>(&self, node_id: NodeID, visit_fn: &mut F) -> bool
    where F: FnMut(NodeID) -> bool {
        let Some(node) = self.get_node(node_id) else { return false };

        for child_id in node.data.children() {
            if !self.traverse_post_order(child_id, visit_fn) {
                return false;
            }
        }

        visit_fn(node_id)
    }

    /// Collects all nodes in pre-order traversal.
    #[must_use]
    pub fn collect_nodes_pre_order(&self, start_node: NodeID) -> Vec<NodeID> {
        let mut result = Vec::new();
        let _ = self.traverse_pre_order(start_node, &mut |node_id| {
            result.push(node_id);
            true
        });

        result
    }

    /// Collects all nodes in post-order traversal.
    #[must_use]
    pub fn collect_nodes_post_order(&self, start_node: NodeID) -> Vec<NodeID> {
        let mut result = Vec::new();
        let _ = self.traverse_post_order(start_node, &mut |node_id| {
            result.push(node_id);
            true
        });

        result
    }

    /// Finds all nodes of a specific kind, in pre-order.
    #[must_use]
    pub fn find_nodes_of_kind(&self, start_node: NodeID, node_kind: NodeKind) -> Vec<NodeID> {
        self.collect_nodes_pre_order(start_node)
            .into_iter()
            .filter(|&id| self.get_node(id).is_some_and(|node| node.kind == node_kind))
            .collect()
    }

    /// Gets a strongly-typed reference to a node's data, via `AnyNode`'s
    /// generated `as_*` accessors.
    ///
    /// ## Errors
    ///
    /// Returns `VisitorError::NodeNotFound` if `node_id` is stale or unknown.
    pub fn get_as<T>(&self, node_id: NodeID, project: impl FnOnce(&AnyNode) -> Option<&T>) -> VisitorResult<&T> {
        use crate::visitor::VisitorError;

        let node = self.get_node(node_id).ok_or(VisitorError::NodeNotFound(node_id))?;
        project(&node.data).ok_or_else(|| VisitorError::TypeMismatch {
            node_id,
            expected: "requested variant".to_owned(),
            actual: format!("{:?}", node.kind),
        })
    }
}

impl Clone for AST {
    fn clone(&self) -> Self {
        Self {
            allocator: Bump::new(),
            nodes: self.nodes.clone(),
            metadata: self.metadata.clone(),
            free_list: self.free_list.clone(),
            root: self.root,
        }
    }
}

impl Default for AST {
    fn default() -> Self { Self::new() }
}
