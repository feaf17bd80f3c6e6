//! Error types for the MIDI output facade.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("MIDI output port {index} out of range ({count} available)")]
    PortOutOfRange { index: usize, count: usize },

    #[error("MIDI port error: {0}")]
    PortOpen(String),

    #[error("virtual MIDI ports are not supported on this platform")]
    VirtualUnsupported,

    #[error("no MIDI output port matching '{0}'")]
    NoMatchingPort(String),

    #[error("pitch bend value {0} does not fit in 14 bits (must be less than 16384)")]
    InvalidPitchBendRange(u16),

    #[error("MIDI output port is not open")]
    NotOpen,

    #[error("MIDI send error: {0}")]
    Send(String),

    #[error("MIDI device error: {0}")]
    Device(String),
}

#[cfg(feature = "midi-io")]
impl From<midir::InitError> for Error {
    fn from(e: midir::InitError) -> Self {
        Error::Device(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::ConnectError<midir::MidiOutput>> for Error {
    fn from(e: midir::ConnectError<midir::MidiOutput>) -> Self {
        Error::PortOpen(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::SendError> for Error {
    fn from(e: midir::SendError) -> Self {
        Error::Send(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
