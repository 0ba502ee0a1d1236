//! Display-side helpers for ringmenu
//!
//! This crate provides:
//! - `Screen` one-line character buffer sized for the target display
//! - `ScreenRenderer`, a `Render` implementation that formats menu payloads
//!   into a `Screen`
//! - `DisplayBackend` trait for the physical display and `present` to push
//!   a dirty screen to it
//! - Seven-segment glyph encoding
//! - `InputEvent` to `NavCommand` mapping for rotary-encoder front panels
//!
//! # Architecture
//!
//! The menu core never draws anything itself. Firmware wires the pieces
//! together in its main loop:
//!
//! ```
//! use ringmenu_core::{Menu, Payload};
//! use ringmenu_display::{InputEvent, Screen, ScreenRenderer};
//!
//! let mut menu = Menu::new(Payload::text("ON")?)?;
//! menu.add_sibling(Payload::Integer(1200), ringmenu_core::NavCommand::None)?;
//! let mut screen: Screen<4> = Screen::new();
//!
//! menu.drive(InputEvent::EncoderCw.command());
//! menu.render_with(&mut ScreenRenderer::new(&mut screen));
//! assert_eq!(screen.as_str(), "1200");
//! # Ok::<(), ringmenu_core::MenuError>(())
//! ```

#![no_std]

pub mod backend;
pub mod format;
pub mod input;
pub mod renderer;
pub mod screen;
pub mod segment;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use input::InputEvent;
pub use renderer::{present, ScreenRenderer};
pub use screen::Screen;
