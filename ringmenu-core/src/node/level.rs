//! Menu nesting levels

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nesting depth of a menu entry
///
/// Level 0 is reserved for data leaves, i.e. entries that are a value rather
/// than a navigable group. Groups start at level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Level(pub u8);

impl Level {
    /// Data-terminal level
    pub const DATA: Level = Level(0);
    /// Outermost navigable group
    pub const TOP: Level = Level(1);
    /// Deepest representable level
    pub const MAX: Level = Level(u8::MAX);

    /// Returns true if this level marks a data leaf
    pub const fn is_data(self) -> bool {
        self.0 == Self::DATA.0
    }

    /// One level deeper, or `None` past [`Level::MAX`]
    pub const fn deeper(self) -> Option<Level> {
        match self.0.checked_add(1) {
            Some(level) => Some(Level(level)),
            None => None,
        }
    }

    /// One level shallower, never above [`Level::TOP`]
    pub const fn shallower(self) -> Level {
        if self.0 > Self::TOP.0 {
            Level(self.0 - 1)
        } else {
            Self::TOP
        }
    }

    /// Raw depth value
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Level {
    fn from(level: u8) -> Self {
        Level(level)
    }
}
