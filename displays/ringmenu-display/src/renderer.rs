//! Screen rendering
//!
//! Formats the payload under the menu cursor into a [`Screen`] and pushes
//! the screen to a [`DisplayBackend`] when it changed.

use heapless::String;
use ringmenu_core::Render;

use crate::backend::{DisplayBackend, DisplayError};
use crate::format;
use crate::screen::Screen;

/// Decimal places shown for real values unless configured otherwise
pub const DEFAULT_DECIMALS: u8 = 2;

/// [`Render`] implementation writing into a screen buffer
///
/// Text is left-aligned and truncated, numbers are right-aligned.
pub struct ScreenRenderer<'s, const COLS: usize> {
    screen: &'s mut Screen<COLS>,
    decimals: u8,
}

impl<'s, const COLS: usize> ScreenRenderer<'s, COLS> {
    pub fn new(screen: &'s mut Screen<COLS>) -> Self {
        Self {
            screen,
            decimals: DEFAULT_DECIMALS,
        }
    }

    /// Maximum decimal places for real values
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}

impl<const COLS: usize> Render for ScreenRenderer<'_, COLS> {
    fn text(&mut self, text: &str) {
        self.screen.set_text(text);
    }

    fn integer(&mut self, value: i64) {
        let mut out: String<COLS> = String::new();
        format::integer_into(value, &mut out);
        self.screen.set_text(&out);
    }

    fn real(&mut self, value: f64) {
        let mut out: String<COLS> = String::new();
        format::real_into(value, self.decimals, &mut out);
        self.screen.set_text(&out);
    }
}

/// Push `screen` to `backend` if it needs redrawing
///
/// Returns `Ok(true)` if the display was updated, and
/// [`DisplayError::BufferOverflow`] if the screen is wider than the backend.
pub fn present<B, const COLS: usize>(
    screen: &mut Screen<COLS>,
    backend: &mut B,
) -> Result<bool, DisplayError>
where
    B: DisplayBackend + ?Sized,
{
    if !screen.is_dirty() {
        return Ok(false);
    }
    if !backend.is_ready() {
        return Err(DisplayError::NotInitialized);
    }
    if screen.cols() > backend.columns() as usize {
        return Err(DisplayError::BufferOverflow);
    }

    backend.clear()?;
    backend.write_text(screen.as_str())?;
    backend.flush()?;
    screen.mark_clean();

    #[cfg(feature = "defmt")]
    defmt::trace!("display: {}", screen);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringmenu_core::{ChildKind, Menu, NavCommand, Payload};

    /// Backend that keeps the last flushed text
    struct FakeDisplay {
        pending: String<8>,
        shown: String<8>,
        flushes: u8,
        ready: bool,
        columns: u8,
    }

    impl FakeDisplay {
        fn new() -> Self {
            Self {
                pending: String::new(),
                shown: String::new(),
                flushes: 0,
                ready: true,
                columns: 8,
            }
        }
    }

    impl DisplayBackend for FakeDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.pending.clear();
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
            self.pending
                .push_str(text)
                .map_err(|_| DisplayError::BufferOverflow)
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.shown = self.pending.clone();
            self.flushes += 1;
            Ok(())
        }

        fn columns(&self) -> u8 {
            self.columns
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_renders_each_payload_kind() {
        let mut menu = Menu::new(Payload::text("HEAT").unwrap()).unwrap();
        menu.add_child(Payload::Real(37.5), ChildKind::Data, NavCommand::None)
            .unwrap();
        menu.add_sibling(Payload::Integer(-5), NavCommand::None)
            .unwrap();
        menu.add_sibling(Payload::Absent, NavCommand::None).unwrap();

        let mut screen: Screen<4> = Screen::new();

        menu.render_with(&mut ScreenRenderer::new(&mut screen));
        assert_eq!(screen.as_str(), "HEAT");

        menu.forward();
        menu.render_with(&mut ScreenRenderer::new(&mut screen));
        assert_eq!(screen.as_str(), "E0  ");

        menu.forward();
        menu.render_with(&mut ScreenRenderer::new(&mut screen));
        assert_eq!(screen.as_str(), "  -5");

        menu.forward();
        menu.down();
        menu.render_with(&mut ScreenRenderer::new(&mut screen).with_decimals(1));
        assert_eq!(screen.as_str(), "37.5");
    }

    #[test]
    fn test_present_only_when_dirty() {
        let mut screen: Screen<8> = Screen::new();
        let mut display = FakeDisplay::new();

        screen.set_text("MENU");
        assert_eq!(present(&mut screen, &mut display), Ok(true));
        assert_eq!(display.shown.as_str(), "MENU");

        assert_eq!(present(&mut screen, &mut display), Ok(false));
        assert_eq!(display.flushes, 1);
    }

    #[test]
    fn test_present_requires_ready_display() {
        let mut screen: Screen<8> = Screen::new();
        let mut display = FakeDisplay::new();
        display.ready = false;

        assert_eq!(
            present(&mut screen, &mut display),
            Err(DisplayError::NotInitialized)
        );
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_present_rejects_wider_screen() {
        let mut screen: Screen<8> = Screen::new();
        let mut display = FakeDisplay::new();
        display.columns = 4;

        screen.set_text("MENU");
        assert_eq!(
            present(&mut screen, &mut display),
            Err(DisplayError::BufferOverflow)
        );
        assert_eq!(display.flushes, 0);
        assert!(screen.is_dirty());

        let mut narrow: Screen<4> = Screen::new();
        narrow.set_text("MENU");
        assert_eq!(present(&mut narrow, &mut display), Ok(true));
        assert_eq!(display.shown.as_str(), "MENU");
    }
}
