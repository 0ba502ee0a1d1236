//! Typed menu payloads

use heapless::String;

use crate::error::MenuError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length in bytes
pub const TEXT_CAPACITY: usize = 16;

/// Payload type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PayloadKind {
    Absent,
    Text,
    Integer,
    Real,
}

/// Value carried by a menu entry
///
/// The tag and the value travel together, so a payload can never be read
/// as a type other than the one it was stored as.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Payload {
    /// Nothing to show; rendered as the configured placeholder
    #[default]
    Absent,
    /// Short label
    Text(String<TEXT_CAPACITY>),
    /// Whole number reading or setting
    Integer(i64),
    /// Fractional reading or setting
    Real(f64),
}

impl Payload {
    /// Build a text payload
    ///
    /// Fails with [`MenuError::TextTooLong`] if `text` exceeds
    /// [`TEXT_CAPACITY`] bytes.
    pub fn text(text: &str) -> Result<Self, MenuError> {
        let mut label = String::new();
        label.push_str(text).map_err(|_| MenuError::TextTooLong)?;
        Ok(Payload::Text(label))
    }

    /// Type tag of this payload
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Absent => PayloadKind::Absent,
            Payload::Text(_) => PayloadKind::Text,
            Payload::Integer(_) => PayloadKind::Integer,
            Payload::Real(_) => PayloadKind::Real,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Payload::Absent)
    }

    /// Label text, if this is a text payload
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(label) => Some(label.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Payload::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Payload::Real(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Integer(value)
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Payload::Integer(value.into())
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Real(value)
    }
}

impl From<f32> for Payload {
    fn from(value: f32) -> Self {
        Payload::Real(value.into())
    }
}
