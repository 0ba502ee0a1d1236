//! Display backend trait
//!
//! Defines the interface a physical segment or character display offers to
//! the menu front end.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
    /// More digits or characters than the display has
    BufferOverflow,
}

/// Display backend trait
///
/// Implementations drive the actual hardware (multiplexed seven-segment
/// digits, HD44780-style character LCDs, and so on).
pub trait DisplayBackend {
    /// Blank the display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at the leftmost position
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Number of character positions
    fn columns(&self) -> u8;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
