//! Menu node and its arena handle

use super::level::Level;
use super::payload::Payload;

/// Stable handle of a node inside a [`NodeArena`](crate::arena::NodeArena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeId(pub(crate) u16);

impl NodeId {
    /// Position of the node in its arena
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One menu entry
///
/// `next`/`prev` link the entry into its sibling ring, `parent` points one
/// group up and `child` is the entry point of this node's own ring. The
/// setters perform no validation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuNode {
    payload: Payload,
    level: Level,
    next: Option<NodeId>,
    prev: Option<NodeId>,
    parent: Option<NodeId>,
    child: Option<NodeId>,
}

impl MenuNode {
    /// Create an unlinked node with no payload at the data level
    pub const fn new() -> Self {
        Self {
            payload: Payload::Absent,
            level: Level::DATA,
            next: None,
            prev: None,
            parent: None,
            child: None,
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }

    pub fn set_payload(&mut self, payload: Payload) {
        self.payload = payload;
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Next sibling in the ring
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    /// Previous sibling in the ring
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Entry point of the child ring
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    pub fn set_child(&mut self, child: Option<NodeId>) {
        self.child = child;
    }

    /// Returns true if this node is a value rather than a group
    pub fn is_data(&self) -> bool {
        self.level.is_data()
    }
}
