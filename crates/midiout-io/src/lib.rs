//! MIDI output facade.
//!
//! Holds one connection to a MIDI output endpoint (an OS/hardware port or a
//! virtual port) and formats channel-voice messages onto it.
//!
//! - **Port management**: enumerate, open by index/name, open virtual, close
//! - **Sending**: note on/off, control/program change, pitch bend, aftertouch, raw bytes
//! - **Transports**: midir (feature: `midi-io`) or the in-memory [`RecordingTransport`]
//!
//! # Example
//!
//! ```ignore
//! use midiout_io::{set_verbose, Output};
//!
//! set_verbose(true);
//! let mut out = Output::new("sketch");
//! if out.open_virtual_port("sketch out") {
//!     out.send_control_change(10, 7, 100)?;
//!     out.send_program_change(2, 5)?;
//! }
//! ```

pub mod error;
pub use error::{Error, Result};

mod verbose;
pub use verbose::{is_verbose, set_verbose};

mod output;
pub use output::{Output, OutputBuilder, OutputDevice, PortState};

pub mod transport;
pub use transport::{MidiTransport, RecordedConnection, RecordingHandle, RecordingTransport};

#[cfg(feature = "midi-io")]
pub use transport::MidirTransport;

// Re-export the encoding types callers pass to `Output`
pub use midiout_wire::{ChannelVoice, DataPolicy, MessageClass, ShortMessage};
