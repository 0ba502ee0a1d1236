//! Screen buffer
//!
//! One line of text sized for the target display.

use heapless::String;

/// Single-line screen buffer with `COLS` character positions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen<const COLS: usize> {
    /// Current display content
    line: String<COLS>,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl<const COLS: usize> Default for Screen<COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize> Screen<COLS> {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            line: String::new(),
            dirty: true,
        }
    }

    /// Clear the screen
    pub fn clear(&mut self) {
        self.line.clear();
        self.dirty = true;
    }

    /// Replace the content, truncating to `COLS` characters
    ///
    /// Only marks the screen dirty if the content changed.
    pub fn set_text(&mut self, text: &str) {
        let text = match text.char_indices().nth(COLS) {
            Some((end, _)) => &text[..end],
            None => text,
        };
        if self.line.as_str() == text {
            return;
        }

        self.line.clear();
        for ch in text.chars() {
            // Multi-byte characters can still overrun the byte capacity
            if self.line.push(ch).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    /// Get the current content
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        COLS
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize> defmt::Format for Screen<COLS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[{}]", self.line.as_str());
    }
}
