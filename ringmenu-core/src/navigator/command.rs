//! Navigation commands

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Command issued to the navigator, usually from an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavCommand {
    /// Stay put
    #[default]
    None,
    /// Next sibling, wrapping around the ring
    Forward,
    /// Previous sibling, wrapping around the ring
    Backward,
    /// Back to the parent entry
    Up,
    /// Into the child group or data leaf
    Down,
}

// Wire format values
const COMMAND_NONE: u8 = 0x00;
const COMMAND_FORWARD: u8 = 0x01;
const COMMAND_BACKWARD: u8 = 0x02;
const COMMAND_UP: u8 = 0x03;
const COMMAND_DOWN: u8 = 0x04;

impl NavCommand {
    /// Parse a command from its wire format byte
    ///
    /// Unknown values yield `None`; callers treat them as a no-op.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            COMMAND_NONE => Some(NavCommand::None),
            COMMAND_FORWARD => Some(NavCommand::Forward),
            COMMAND_BACKWARD => Some(NavCommand::Backward),
            COMMAND_UP => Some(NavCommand::Up),
            COMMAND_DOWN => Some(NavCommand::Down),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            NavCommand::None => COMMAND_NONE,
            NavCommand::Forward => COMMAND_FORWARD,
            NavCommand::Backward => COMMAND_BACKWARD,
            NavCommand::Up => COMMAND_UP,
            NavCommand::Down => COMMAND_DOWN,
        }
    }

    /// Returns true if this command may move the cursor
    pub fn is_move(&self) -> bool {
        !matches!(self, NavCommand::None)
    }

    /// Returns true for moves within the current ring
    pub fn is_lateral(&self) -> bool {
        matches!(self, NavCommand::Forward | NavCommand::Backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_are_stable() {
        assert_eq!(NavCommand::None.to_byte(), 0);
        assert_eq!(NavCommand::Forward.to_byte(), 1);
        assert_eq!(NavCommand::Backward.to_byte(), 2);
        assert_eq!(NavCommand::Up.to_byte(), 3);
        assert_eq!(NavCommand::Down.to_byte(), 4);
        assert_eq!(NavCommand::from_byte(4), Some(NavCommand::Down));
    }

    #[test]
    fn test_unknown_command() {
        assert!(NavCommand::from_byte(0x05).is_none());
        assert!(NavCommand::from_byte(0xFF).is_none());
    }

    #[test]
    fn test_is_move() {
        assert!(!NavCommand::None.is_move());
        assert!(NavCommand::Up.is_move());
        assert!(NavCommand::Forward.is_lateral());
        assert!(!NavCommand::Down.is_lateral());
    }
}
