//! Centralized error type for the midiout umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Wire: {0}")]
    Wire(#[from] midiout_wire::Error),

    #[error("MIDI output: {0}")]
    Io(#[from] midiout_io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
