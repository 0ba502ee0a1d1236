//! Front-panel input events
//!
//! A rotary encoder with a push button is the usual input for these
//! displays. Rotation walks the current ring, a click descends and a long
//! press backs out.

use ringmenu_core::NavCommand;

/// Input event from the encoder front panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Encoder rotated clockwise (1 detent)
    EncoderCw,
    /// Encoder rotated counter-clockwise (1 detent)
    EncoderCcw,
    /// Short press
    EncoderClick,
    /// Long press
    EncoderLongPress,
    /// Button released (after long press)
    EncoderRelease,
}

// Wire format values
const EVENT_ENCODER_CW: u8 = 0x01;
const EVENT_ENCODER_CCW: u8 = 0x02;
const EVENT_ENCODER_CLICK: u8 = 0x10;
const EVENT_ENCODER_LONG_PRESS: u8 = 0x11;
const EVENT_ENCODER_RELEASE: u8 = 0x12;

impl InputEvent {
    /// Parse an event from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            EVENT_ENCODER_CW => Some(InputEvent::EncoderCw),
            EVENT_ENCODER_CCW => Some(InputEvent::EncoderCcw),
            EVENT_ENCODER_CLICK => Some(InputEvent::EncoderClick),
            EVENT_ENCODER_LONG_PRESS => Some(InputEvent::EncoderLongPress),
            EVENT_ENCODER_RELEASE => Some(InputEvent::EncoderRelease),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            InputEvent::EncoderCw => EVENT_ENCODER_CW,
            InputEvent::EncoderCcw => EVENT_ENCODER_CCW,
            InputEvent::EncoderClick => EVENT_ENCODER_CLICK,
            InputEvent::EncoderLongPress => EVENT_ENCODER_LONG_PRESS,
            InputEvent::EncoderRelease => EVENT_ENCODER_RELEASE,
        }
    }

    /// Navigation command for this event
    pub fn command(self) -> NavCommand {
        match self {
            InputEvent::EncoderCw => NavCommand::Forward,
            InputEvent::EncoderCcw => NavCommand::Backward,
            InputEvent::EncoderClick => NavCommand::Down,
            InputEvent::EncoderLongPress => NavCommand::Up,
            InputEvent::EncoderRelease => NavCommand::None,
        }
    }

    /// Returns true if this is a rotation event
    pub fn is_rotation(&self) -> bool {
        matches!(self, InputEvent::EncoderCw | InputEvent::EncoderCcw)
    }
}

impl From<InputEvent> for NavCommand {
    fn from(event: InputEvent) -> Self {
        event.command()
    }
}
