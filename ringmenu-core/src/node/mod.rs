//! Menu entries
//!
//! A [`MenuNode`] is plain linkage bookkeeping: a typed payload, a nesting
//! level and four links into the node arena. Keeping the links consistent is
//! the navigator's job.

pub mod item;
pub mod level;
pub mod payload;

pub use item::{MenuNode, NodeId};
pub use level::Level;
pub use payload::{Payload, PayloadKind, TEXT_CAPACITY};
