//! Traversal state machine
//!
//! The navigator's state is the triple (cursor node, level, deepest level
//! seen). There is no mode flag: whether `Down` enters a group or a data leaf
//! follows from comparing `level` with `level_max`. Each transition is a
//! pure function of the state and the graph.

use crate::arena::NodeArena;
use crate::node::{Level, NodeId};

use super::command::NavCommand;

/// Cursor position within a menu graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Focused node
    pub node: NodeId,
    /// Level of the ring the cursor is in, tracked apart from the node's own level
    pub level: Level,
    /// Deepest group level created so far
    pub level_max: Level,
}

impl Cursor {
    /// Initial state: at `root`, top level
    pub const fn new(root: NodeId) -> Self {
        Self {
            node: root,
            level: Level::TOP,
            level_max: Level::TOP,
        }
    }

    /// Apply a command and return the next state
    pub fn apply<const N: usize>(self, command: NavCommand, nodes: &NodeArena<N>) -> Self {
        match command {
            NavCommand::None => self,
            NavCommand::Forward => self.forward(nodes),
            NavCommand::Backward => self.backward(nodes),
            NavCommand::Up => self.up(nodes),
            NavCommand::Down => self.down(nodes),
        }
    }

    /// Next sibling
    pub fn forward<const N: usize>(self, nodes: &NodeArena<N>) -> Self {
        match nodes.get(self.node).and_then(|node| node.next()) {
            Some(next) => Self { node: next, ..self },
            None => self,
        }
    }

    /// Previous sibling
    pub fn backward<const N: usize>(self, nodes: &NodeArena<N>) -> Self {
        match nodes.get(self.node).and_then(|node| node.prev()) {
            Some(prev) => Self { node: prev, ..self },
            None => self,
        }
    }

    /// Descend
    ///
    /// Above the deepest group level this enters the child ring one level
    /// down. At the deepest level it only enters a child that is a data leaf.
    pub fn down<const N: usize>(self, nodes: &NodeArena<N>) -> Self {
        let Some(child) = nodes.get(self.node).and_then(|node| node.child()) else {
            return self;
        };

        if self.level < self.level_max {
            if self.level.is_data() {
                return self;
            }
            // level < level_max, so one deeper never passes level_max
            return match self.level.deeper() {
                Some(level) => Self {
                    node: child,
                    level,
                    ..self
                },
                None => self,
            };
        }

        match nodes.get(child) {
            Some(leaf) if leaf.is_data() => Self {
                node: child,
                level: Level::DATA,
                ..self
            },
            _ => self,
        }
    }

    /// Ascend to the parent entry
    ///
    /// From a data leaf the level is restored from the parent's own level.
    pub fn up<const N: usize>(self, nodes: &NodeArena<N>) -> Self {
        let Some(parent) = nodes.get(self.node).and_then(|node| node.parent()) else {
            return self;
        };

        if self.level > Level::TOP {
            return Self {
                node: parent,
                level: self.level.shallower(),
                ..self
            };
        }

        match nodes.get(parent) {
            Some(group) if self.level.is_data() => Self {
                node: parent,
                level: group.level(),
                ..self
            },
            _ => self,
        }
    }

    /// Returns true while the tracked level is the data level
    ///
    /// A data leaf entered from above `level_max` keeps a group level, so
    /// this can be false while the node itself is a data leaf.
    pub fn at_data_level(&self) -> bool {
        self.level.is_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root ring [a, b], a -> child ring [a1] (level 2), a1 -> data leaf d
    fn sample() -> (NodeArena<8>, [NodeId; 4]) {
        let mut nodes: NodeArena<8> = NodeArena::new();
        let a = nodes.allocate().unwrap();
        let b = nodes.allocate().unwrap();
        let a1 = nodes.allocate().unwrap();
        let d = nodes.allocate().unwrap();

        nodes[a].set_level(Level::TOP);
        nodes[a].set_next(Some(b));
        nodes[a].set_prev(Some(b));
        nodes[a].set_child(Some(a1));
        nodes[b].set_level(Level::TOP);
        nodes[b].set_next(Some(a));
        nodes[b].set_prev(Some(a));

        nodes[a1].set_level(Level(2));
        nodes[a1].set_next(Some(a1));
        nodes[a1].set_prev(Some(a1));
        nodes[a1].set_parent(Some(a));
        nodes[a1].set_child(Some(d));

        nodes[d].set_next(Some(d));
        nodes[d].set_prev(Some(d));
        nodes[d].set_parent(Some(a1));

        (nodes, [a, b, a1, d])
    }

    fn at(node: NodeId, level: u8) -> Cursor {
        Cursor {
            node,
            level: Level(level),
            level_max: Level(2),
        }
    }

    #[test]
    fn test_initial_state() {
        let cursor = Cursor::new(NodeId(0));
        assert_eq!(cursor.level, Level::TOP);
        assert_eq!(cursor.level_max, Level::TOP);
    }

    #[test]
    fn test_forward_and_backward_wrap() {
        let (nodes, [a, b, ..]) = sample();
        assert_eq!(at(a, 1).forward(&nodes).node, b);
        assert_eq!(at(b, 1).forward(&nodes).node, a);
        assert_eq!(at(a, 1).backward(&nodes).node, b);
    }

    #[test]
    fn test_down_into_group() {
        let (nodes, [a, _, a1, _]) = sample();
        assert_eq!(at(a, 1).down(&nodes), at(a1, 2));
    }

    #[test]
    fn test_down_into_data_at_deepest_level() {
        let (nodes, [.., a1, d]) = sample();
        assert_eq!(at(a1, 2).down(&nodes), at(d, 0));
    }

    #[test]
    fn test_down_without_child_is_noop() {
        let (nodes, [_, b, ..]) = sample();
        assert_eq!(at(b, 1).down(&nodes), at(b, 1));
    }

    #[test]
    fn test_down_from_data_is_noop() {
        let (nodes, [.., d]) = sample();
        assert_eq!(at(d, 0).down(&nodes), at(d, 0));
    }

    #[test]
    fn test_down_at_deepest_level_skips_groups() {
        let (nodes, [a, ..]) = sample();
        let cursor = Cursor {
            node: a,
            level: Level::TOP,
            level_max: Level::TOP,
        };
        assert_eq!(cursor.down(&nodes), cursor);
    }

    #[test]
    fn test_up_from_group() {
        let (nodes, [a, _, a1, _]) = sample();
        assert_eq!(at(a1, 2).up(&nodes), at(a, 1));
    }

    #[test]
    fn test_up_from_data_restores_parent_level() {
        let (nodes, [.., a1, d]) = sample();
        assert_eq!(at(d, 0).up(&nodes), at(a1, 2));
    }

    #[test]
    fn test_up_at_top_is_noop() {
        let (nodes, [a, ..]) = sample();
        assert_eq!(at(a, 1).up(&nodes), at(a, 1));
    }

    #[test]
    fn test_up_without_parent_keeps_level() {
        let (nodes, [a, ..]) = sample();
        assert_eq!(at(a, 2).up(&nodes), at(a, 2));
    }

    #[test]
    fn test_down_into_data_above_deepest_level() {
        let (mut nodes, [_, b, ..]) = sample();
        let leaf = nodes.allocate().unwrap();
        nodes[leaf].set_next(Some(leaf));
        nodes[leaf].set_prev(Some(leaf));
        nodes[leaf].set_parent(Some(b));
        nodes[b].set_child(Some(leaf));

        let start = at(b, 1);
        let entered = start.down(&nodes);
        assert_eq!(entered, at(leaf, 2));
        assert!(nodes[entered.node].is_data());
        assert!(!entered.at_data_level());

        assert_eq!(entered.up(&nodes), start);
    }

    #[test]
    fn test_none_is_noop() {
        let (nodes, [.., a1, _]) = sample();
        assert_eq!(at(a1, 2).apply(NavCommand::None, &nodes), at(a1, 2));
    }
}
