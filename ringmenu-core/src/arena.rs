//! Fixed-capacity node storage
//!
//! Sibling rings are cyclic, so nodes live in one arena and refer to each
//! other by [`NodeId`]. Nodes are never freed individually; the whole graph
//! goes away with the arena.

use core::ops::{Index, IndexMut};

use heapless::Vec;

use crate::error::MenuError;
use crate::node::{MenuNode, NodeId};

/// Arena of up to `N` menu nodes
#[derive(Debug, Clone, Default)]
pub struct NodeArena<const N: usize> {
    nodes: Vec<MenuNode, N>,
}

impl<const N: usize> NodeArena<N> {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a fresh, unlinked node
    ///
    /// Returns [`MenuError::CapacityExhausted`] when the arena is full.
    pub fn allocate(&mut self) -> Result<NodeId, MenuError> {
        let index = self.nodes.len();
        if index > u16::MAX as usize {
            return Err(MenuError::CapacityExhausted);
        }

        self.nodes
            .push(MenuNode::new())
            .map_err(|_| MenuError::CapacityExhausted)?;

        Ok(NodeId(index as u16))
    }

    pub fn get(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut MenuNode> {
        self.nodes.get_mut(id.index())
    }

    /// Number of allocated nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Walk a sibling ring once, starting at `start`
    ///
    /// Stops early on a broken link, and after `len()` steps at the latest.
    pub fn ring(&self, start: NodeId) -> Ring<'_, N> {
        Ring {
            arena: self,
            start,
            next: self.get(start).map(|_| start),
            remaining: self.len(),
        }
    }
}

impl<const N: usize> Index<NodeId> for NodeArena<N> {
    type Output = MenuNode;

    fn index(&self, id: NodeId) -> &MenuNode {
        &self.nodes[id.index()]
    }
}

impl<const N: usize> IndexMut<NodeId> for NodeArena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut MenuNode {
        &mut self.nodes[id.index()]
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for NodeArena<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "NodeArena[{}/{}]", self.len(), N);
    }
}

/// Iterator over one sibling ring
pub struct Ring<'a, const N: usize> {
    arena: &'a NodeArena<N>,
    start: NodeId,
    next: Option<NodeId>,
    remaining: usize,
}

impl<const N: usize> Iterator for Ring<'_, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;

        self.next = self
            .arena
            .get(current)
            .and_then(MenuNode::next)
            .filter(|&id| id != self.start);

        Some(current)
    }
}
