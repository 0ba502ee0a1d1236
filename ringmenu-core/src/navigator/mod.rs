//! Menu navigator
//!
//! Owns the node arena and the cursor. The graph is built through
//! [`Navigator::add_sibling`] and [`Navigator::add_child`], each of which can
//! move the cursor in the same call, and then walked with
//! [`Navigator::drive`] in response to input events.

pub mod command;
pub mod cursor;
pub mod render;

pub use command::NavCommand;
pub use cursor::Cursor;
pub use render::{dispatch, Callbacks, Render};

use crate::arena::NodeArena;
use crate::config::{MenuConfig, DEFAULT_CAPACITY};
use crate::error::MenuError;
use crate::node::{Level, MenuNode, NodeId, Payload};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Navigator with the default node capacity
pub type Menu = Navigator<DEFAULT_CAPACITY>;

/// What a new child entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChildKind {
    /// Opens a navigable group one level deeper
    Group,
    /// Is itself a value (data leaf, level 0)
    Data,
}

/// Traversal session over one menu graph of up to `N` entries
#[derive(Debug, Clone)]
pub struct Navigator<const N: usize> {
    nodes: NodeArena<N>,
    root: NodeId,
    cursor: Cursor,
    callbacks: Callbacks,
    config: MenuConfig,
}

impl<const N: usize> Navigator<N> {
    /// Create a menu whose first entry carries `payload`
    ///
    /// The root forms a ring of one at the top level, with the cursor on it.
    pub fn new(payload: Payload) -> Result<Self, MenuError> {
        Self::with_config(payload, MenuConfig::default())
    }

    /// Create a menu with explicit settings
    pub fn with_config(payload: Payload, config: MenuConfig) -> Result<Self, MenuError> {
        let mut nodes = NodeArena::new();
        let root = nodes.allocate()?;

        let node = &mut nodes[root];
        node.set_payload(payload);
        node.set_level(Level::TOP);
        node.set_next(Some(root));
        node.set_prev(Some(root));

        Ok(Self {
            nodes,
            root,
            cursor: Cursor::new(root),
            callbacks: Callbacks::new(),
            config,
        })
    }

    /// Insert a sibling right after the cursor, then apply `command`
    ///
    /// The new entry takes the current level and shares the cursor's parent.
    /// Pass [`NavCommand::Forward`] to land on it.
    pub fn add_sibling(
        &mut self,
        payload: Payload,
        command: NavCommand,
    ) -> Result<NodeId, MenuError> {
        let anchor = self.cursor.node;
        let head = self.nodes[anchor].next().unwrap_or(anchor);
        let parent = self.nodes[anchor].parent();

        let id = self.allocate()?;
        let node = &mut self.nodes[id];
        node.set_payload(payload);
        node.set_level(self.cursor.level);
        node.set_parent(parent);
        node.set_prev(Some(anchor));
        node.set_next(Some(head));

        self.nodes[anchor].set_next(Some(id));
        self.nodes[head].set_prev(Some(id));

        #[cfg(feature = "defmt")]
        defmt::trace!("menu: sibling {} after {}", id, anchor);

        self.drive(command);
        Ok(id)
    }

    /// Start a child ring under the cursor, then apply `command`
    ///
    /// This always repoints the cursor's child slot at the new entry. To add
    /// more entries to an existing child ring, move into it with
    /// [`NavCommand::Down`] and use [`Navigator::add_sibling`].
    pub fn add_child(
        &mut self,
        payload: Payload,
        kind: ChildKind,
        command: NavCommand,
    ) -> Result<NodeId, MenuError> {
        let level = match kind {
            ChildKind::Data => Level::DATA,
            ChildKind::Group => self
                .cursor
                .level
                .deeper()
                .filter(|level| *level <= self.config.max_level)
                .ok_or(MenuError::LevelOverflow)?,
        };

        let parent = self.cursor.node;
        #[cfg(feature = "defmt")]
        if self.nodes[parent].child().is_some() {
            defmt::warn!("menu: replacing child ring of {}", parent);
        }

        let id = self.allocate()?;
        let node = &mut self.nodes[id];
        node.set_payload(payload);
        node.set_level(level);
        node.set_next(Some(id));
        node.set_prev(Some(id));
        node.set_parent(Some(parent));

        self.nodes[parent].set_child(Some(id));
        if level > self.cursor.level_max {
            self.cursor.level_max = level;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("menu: child {} of {} at level {}", id, parent, level);

        self.drive(command);
        Ok(id)
    }

    fn allocate(&mut self) -> Result<NodeId, MenuError> {
        let result = self.nodes.allocate();
        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::warn!("menu: node storage full ({} entries)", N);
        }
        result
    }

    /// Move the cursor back to the root entry
    ///
    /// The level is left as is; see [`Navigator::reset`].
    pub fn start(&mut self) {
        self.cursor.node = self.root;
    }

    /// Move the cursor to the root entry at the top level
    pub fn reset(&mut self) {
        self.cursor.node = self.root;
        self.cursor.level = Level::TOP;
    }

    /// Apply a navigation command
    pub fn drive(&mut self, command: NavCommand) {
        self.cursor = self.cursor.apply(command, &self.nodes);
    }

    /// Apply a raw command byte; unknown values are ignored
    pub fn drive_byte(&mut self, byte: u8) {
        if let Some(command) = NavCommand::from_byte(byte) {
            self.drive(command);
        }
    }

    pub fn forward(&mut self) {
        self.drive(NavCommand::Forward);
    }

    pub fn backward(&mut self) {
        self.drive(NavCommand::Backward);
    }

    pub fn up(&mut self) {
        self.drive(NavCommand::Up);
    }

    pub fn down(&mut self) {
        self.drive(NavCommand::Down);
    }

    // Cursor inspection

    /// Current traversal state
    pub fn state(&self) -> Cursor {
        self.cursor
    }

    /// Focused node
    pub fn cursor(&self) -> NodeId {
        self.cursor.node
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn level(&self) -> Level {
        self.cursor.level
    }

    pub fn level_max(&self) -> Level {
        self.cursor.level_max
    }

    /// Returns true while the cursor sits on a data leaf
    pub fn on_data(&self) -> bool {
        self.current().is_data()
    }

    pub fn current(&self) -> &MenuNode {
        &self.nodes[self.cursor.node]
    }

    pub fn next_item(&self) -> Option<&MenuNode> {
        self.current().next().and_then(|id| self.nodes.get(id))
    }

    pub fn prev_item(&self) -> Option<&MenuNode> {
        self.current().prev().and_then(|id| self.nodes.get(id))
    }

    pub fn parent_item(&self) -> Option<&MenuNode> {
        self.current().parent().and_then(|id| self.nodes.get(id))
    }

    pub fn child_item(&self) -> Option<&MenuNode> {
        self.current().child().and_then(|id| self.nodes.get(id))
    }

    pub fn node(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id)
    }

    /// The whole graph, read-only
    pub fn nodes(&self) -> &NodeArena<N> {
        &self.nodes
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    // Live values

    /// Replace the payload of `id`; returns false for an unknown id
    pub fn set_payload(&mut self, id: NodeId, payload: Payload) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.set_payload(payload);
                true
            }
            None => false,
        }
    }

    pub fn payload_mut(&mut self, id: NodeId) -> Option<&mut Payload> {
        self.nodes.get_mut(id).map(MenuNode::payload_mut)
    }

    pub fn current_payload_mut(&mut self) -> &mut Payload {
        self.nodes[self.cursor.node].payload_mut()
    }

    // Rendering

    pub fn set_text_renderer(&mut self, render: fn(&str)) {
        self.callbacks.set_text(render);
    }

    pub fn set_integer_renderer(&mut self, render: fn(i64)) {
        self.callbacks.set_integer(render);
    }

    pub fn set_real_renderer(&mut self, render: fn(f64)) {
        self.callbacks.set_real(render);
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    /// Render the entry under the cursor through the registered callbacks
    ///
    /// Returns [`MenuError::MissingRenderer`] without drawing anything if
    /// the needed slot was never set.
    pub fn handle(&self) -> Result<(), MenuError> {
        self.callbacks
            .dispatch(self.current().payload(), self.config.placeholder)
    }

    /// Render the entry under the cursor into `renderer`
    pub fn render_with<R: Render + ?Sized>(&self, renderer: &mut R) {
        dispatch(self.current().payload(), self.config.placeholder, renderer);
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for Navigator<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Navigator(root={}, cursor={}, nodes={}, callbacks={})",
            self.root,
            self.cursor,
            self.nodes,
            self.callbacks
        );
    }
}
