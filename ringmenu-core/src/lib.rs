//! Board-agnostic menu model for segment and small character displays
//!
//! A menu is a graph of sibling rings: every entry links to its next and
//! previous sibling (wrapping around), to its parent entry and to the first
//! entry of its own child ring. A [`Navigator`] owns the graph and a cursor
//! that four discrete inputs move around:
//!
//! - `Forward` / `Backward` step through the current ring
//! - `Down` enters a child group, or a data leaf at the deepest group
//! - `Up` returns to the parent
//!
//! Rendering is left to the caller: the navigator hands the payload under
//! the cursor to a [`Render`] implementation or to three registered
//! function pointers, one per payload type.
//!
//! ```
//! use ringmenu_core::{ChildKind, Menu, NavCommand, Payload};
//!
//! let mut menu = Menu::new(Payload::text("SET")?)?;
//! menu.add_child(Payload::text("t1")?, ChildKind::Group, NavCommand::Down)?;
//! menu.add_child(Payload::Integer(42), ChildKind::Data, NavCommand::None)?;
//! menu.add_sibling(Payload::text("t2")?, NavCommand::None)?;
//!
//! menu.drive(NavCommand::Down);
//! assert_eq!(menu.current().payload(), &Payload::Integer(42));
//! # Ok::<(), ringmenu_core::MenuError>(())
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod navigator;
pub mod node;

pub use arena::NodeArena;
pub use config::{MenuConfig, DEFAULT_CAPACITY, DEFAULT_PLACEHOLDER};
pub use error::MenuError;
pub use navigator::{dispatch, Callbacks, ChildKind, Cursor, Menu, NavCommand, Navigator, Render};
pub use node::{Level, MenuNode, NodeId, Payload, PayloadKind, TEXT_CAPACITY};
