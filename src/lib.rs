//! # midiout - MIDI Output
//!
//! Opens one MIDI output endpoint and sends channel-voice messages to it.
//!
//! ## Architecture
//!
//! midiout is an umbrella crate over:
//! - **midiout-wire** - Message encoding (status bytes, 14-bit pitch bend, 2/3-byte frames)
//! - **midiout-io** - Port management and the `Output` facade (midir or custom transports)
//!
//! ## Quick Start
//!
//! ```ignore
//! use midiout::prelude::*;
//!
//! let mut out = Output::new("sketch");
//! for dev in out.list_devices() {
//!     println!("{}: {}", dev.index, dev.name);
//! }
//!
//! if out.open_port(0) {
//!     out.send_note_on(1, 60, 100)?;
//!     out.send_pitch_bend(1, 8192)?;
//!     out.send_note_off(1, 60, 0)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `midi-io`
//! - `midi-io` - Hardware and virtual ports through midir

/// Re-export of midiout-wire for direct access
pub use midiout_wire as wire;

/// Re-export of midiout-io for direct access
pub use midiout_io as io;

// Port manager + sending
pub use midiout_io::{
    is_verbose, set_verbose, MidiTransport, Output, OutputBuilder, OutputDevice, PortState,
    RecordedConnection, RecordingHandle, RecordingTransport,
};

#[cfg(feature = "midi-io")]
pub use midiout_io::MidirTransport;

// Encoding
pub use midiout_wire::{
    channel_nibble, join_pitch_bend, split_pitch_bend, status_byte, ChannelVoice, DataPolicy,
    MessageClass, ShortMessage, PITCH_BEND_CENTER, PITCH_BEND_MAX,
};

mod error;
pub use error::{Error, Result};

pub mod prelude {
    // Output facade
    pub use crate::{set_verbose, Output, OutputDevice};

    // Messages
    pub use crate::{ChannelVoice, DataPolicy, ShortMessage};

    pub use crate::{Error, Result};
}
