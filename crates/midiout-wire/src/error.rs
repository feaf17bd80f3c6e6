//! Error types for decoding MIDI wire frames.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty MIDI message")]
    Empty,

    #[error("expected a status byte, found data byte 0x{0:02X}")]
    MissingStatus(u8),

    #[error("status 0x{status:02X} needs {expected} bytes, got {got}")]
    Truncated {
        status: u8,
        expected: usize,
        got: usize,
    },

    #[error("status 0x{0:02X} is not a channel-voice message")]
    NotChannelVoice(u8),

    #[error("status 0x{status:02X} carries a data byte with the top bit set: 0x{byte:02X}")]
    DataByte { status: u8, byte: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
