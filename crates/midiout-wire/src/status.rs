//! Channel-voice status bytes.
//!
//! A status byte carries the message class in its high nibble and the wire
//! channel (0-15) in its low nibble. Public APIs in this workspace take
//! 1-based channels (1-16), so composing a status byte subtracts one first.

use serde::{Deserialize, Serialize};

pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const POLY_AFTERTOUCH: u8 = 0xA0;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const PROGRAM_CHANGE: u8 = 0xC0;
pub const CHANNEL_AFTERTOUCH: u8 = 0xD0;
pub const PITCH_BEND: u8 = 0xE0;

/// Start of the system message range (SysEx, clock, ...). Not channel-voice.
pub const SYSTEM: u8 = 0xF0;

/// Lowest and highest 1-based channel.
pub const MIN_CHANNEL: u8 = 1;
pub const MAX_CHANNEL: u8 = 16;

/// Channel-voice message class, selected by the status high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageClass {
    NoteOff,
    NoteOn,
    PolyAftertouch,
    ControlChange,
    ProgramChange,
    ChannelAftertouch,
    PitchBend,
}

impl MessageClass {
    /// Status byte with channel bits cleared (e.g. `0x90` for note on).
    #[inline]
    pub const fn status_nibble(self) -> u8 {
        match self {
            MessageClass::NoteOff => NOTE_OFF,
            MessageClass::NoteOn => NOTE_ON,
            MessageClass::PolyAftertouch => POLY_AFTERTOUCH,
            MessageClass::ControlChange => CONTROL_CHANGE,
            MessageClass::ProgramChange => PROGRAM_CHANGE,
            MessageClass::ChannelAftertouch => CHANNEL_AFTERTOUCH,
            MessageClass::PitchBend => PITCH_BEND,
        }
    }

    /// Number of data bytes following the status byte.
    #[inline]
    pub const fn data_len(self) -> usize {
        match self {
            MessageClass::ProgramChange | MessageClass::ChannelAftertouch => 1,
            _ => 2,
        }
    }

    /// Total frame length, status included.
    #[inline]
    pub const fn frame_len(self) -> usize {
        self.data_len() + 1
    }

    /// Classify a status byte. Returns `None` for data bytes and system messages.
    pub const fn from_status(status: u8) -> Option<Self> {
        match status & 0xF0 {
            NOTE_OFF => Some(MessageClass::NoteOff),
            NOTE_ON => Some(MessageClass::NoteOn),
            POLY_AFTERTOUCH => Some(MessageClass::PolyAftertouch),
            CONTROL_CHANGE => Some(MessageClass::ControlChange),
            PROGRAM_CHANGE => Some(MessageClass::ProgramChange),
            CHANNEL_AFTERTOUCH => Some(MessageClass::ChannelAftertouch),
            PITCH_BEND => Some(MessageClass::PitchBend),
            _ => None,
        }
    }
}

/// Wire channel nibble (0-15) for a 1-based channel.
///
/// Out-of-range channels wrap into the nibble instead of spilling into the
/// class bits: channel 0 maps to 15, channel 17 maps to 0.
#[inline]
pub const fn channel_nibble(channel: u8) -> u8 {
    channel.wrapping_sub(1) & 0x0F
}

/// True for channels 1 through 16.
#[inline]
pub const fn is_valid_channel(channel: u8) -> bool {
    channel >= MIN_CHANNEL && channel <= MAX_CHANNEL
}

/// Compose a status byte from a class and a 1-based channel.
#[inline]
pub const fn status_byte(class: MessageClass, channel: u8) -> u8 {
    class.status_nibble() | channel_nibble(channel)
}

/// True when the top bit is set.
#[inline]
pub const fn is_status(byte: u8) -> bool {
    byte & 0x80 != 0
}
