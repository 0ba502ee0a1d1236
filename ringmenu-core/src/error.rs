//! Menu errors

use core::fmt;

use crate::node::PayloadKind;

/// Errors raised while building or rendering a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Node storage is full; the graph was left unchanged
    CapacityExhausted,
    /// A group child would be nested deeper than the configured maximum
    LevelOverflow,
    /// Text does not fit into a payload label
    TextTooLong,
    /// No renderer registered for this payload type
    MissingRenderer(PayloadKind),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::CapacityExhausted => f.write_str("menu node storage exhausted"),
            MenuError::LevelOverflow => f.write_str("menu nested beyond maximum level"),
            MenuError::TextTooLong => f.write_str("text does not fit into a menu label"),
            MenuError::MissingRenderer(kind) => {
                write!(f, "no renderer registered for {:?} payload", kind)
            }
        }
    }
}
