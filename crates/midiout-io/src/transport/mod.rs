//! MIDI transports.
//!
//! The [`MidiTransport`] trait is the seam between the `Output` facade and
//! whatever pushes bytes to the OS. The midir backend requires the
//! `midi-io` feature; [`RecordingTransport`] is always available.

#[cfg(feature = "midi-io")]
mod hardware;
mod recording;

#[cfg(feature = "midi-io")]
pub use hardware::MidirTransport;
pub use recording::{RecordedConnection, RecordingHandle, RecordingTransport};

use crate::error::Result;

/// Port enumeration, connection and byte transmission for one output endpoint.
///
/// A transport holds at most one open connection. Opening while a connection
/// is already open is the caller's responsibility to avoid; `Output` always
/// closes first.
pub trait MidiTransport: Send {
    /// Number of output ports currently visible.
    fn port_count(&self) -> usize;

    /// Display name of port `index`, `None` when out of range.
    fn port_name(&self, index: usize) -> Option<String>;

    /// All port names in index order, read as one snapshot.
    fn port_names(&self) -> Vec<String> {
        (0..self.port_count())
            .map_while(|i| self.port_name(i))
            .collect()
    }

    /// Connect to port `index`, announcing the connection as `announce_name`.
    fn open_port(&mut self, index: usize, announce_name: &str) -> Result<()>;

    /// Create a virtual port other applications can connect to.
    fn open_virtual_port(&mut self, name: &str) -> Result<()>;

    /// Drop the current connection. Must be a no-op when nothing is open.
    fn close_port(&mut self);

    /// Transmit `bytes` as one MIDI event.
    fn send_message(&mut self, bytes: &[u8]) -> Result<()>;
}

impl<T: MidiTransport + ?Sized> MidiTransport for Box<T> {
    fn port_count(&self) -> usize {
        (**self).port_count()
    }

    fn port_name(&self, index: usize) -> Option<String> {
        (**self).port_name(index)
    }

    fn port_names(&self) -> Vec<String> {
        (**self).port_names()
    }

    fn open_port(&mut self, index: usize, announce_name: &str) -> Result<()> {
        (**self).open_port(index, announce_name)
    }

    fn open_virtual_port(&mut self, name: &str) -> Result<()> {
        (**self).open_virtual_port(name)
    }

    fn close_port(&mut self) {
        (**self).close_port()
    }

    fn send_message(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send_message(bytes)
    }
}
