//! MIDI 1.0 channel-voice wire encoding.
//!
//! Stateless helpers that turn high-level arguments (1-based channel, pitch,
//! value) into status and data bytes:
//!
//! - **Status bytes**: message class in the high nibble, channel in the low nibble
//! - **Pitch bend**: 14-bit values split into two 7-bit halves, LSB first
//! - **Frames**: stack-allocated 2- or 3-byte [`ShortMessage`]s
//! - **Typed messages**: [`ChannelVoice`] encode/decode
//!
//! # Example
//!
//! ```
//! use midiout_wire::{DataPolicy, ShortMessage};
//!
//! let msg = ShortMessage::note_on(1, 60, 127, DataPolicy::Mask);
//! assert_eq!(msg.as_bytes(), &[0x90, 0x3C, 0x7F]);
//!
//! let bend = ShortMessage::pitch_bend(1, 8192);
//! assert_eq!(bend.as_bytes(), &[0xE0, 0x00, 0x40]);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod status;
pub use status::{channel_nibble, is_valid_channel, status_byte, MessageClass};

pub mod pitch_bend;
pub use pitch_bend::{
    is_valid_pitch_bend, join_pitch_bend, pitch_bend_from_signed, pitch_bend_to_signed,
    split_pitch_bend, PITCH_BEND_CENTER, PITCH_BEND_MAX,
};

mod frame;
pub use frame::{DataPolicy, ShortMessage};

mod message;
pub use message::ChannelVoice;
