//! midir-backed transport: OS port enumeration, connection and sending.

use midir::{MidiOutput, MidiOutputConnection};
use tracing::debug;

use super::MidiTransport;
use crate::error::{Error, Result};

/// Hardware/OS MIDI output through midir.
///
/// midir consumes its `MidiOutput` client when connecting, so enumeration
/// reads each snapshot from one short-lived client and every connection
/// gets a fresh one.
pub struct MidirTransport {
    client_name: String,
    connection: Option<MidiOutputConnection>,
}

impl MidirTransport {
    /// No OS resources are acquired until a port is listed or opened.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            connection: None,
        }
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    fn client(&self) -> Result<MidiOutput> {
        Ok(MidiOutput::new(&self.client_name)?)
    }
}

impl MidiTransport for MidirTransport {
    fn port_count(&self) -> usize {
        match self.client() {
            Ok(midi_output) => midi_output.port_count(),
            Err(e) => {
                debug!("MIDI output enumeration unavailable: {}", e);
                0
            }
        }
    }

    fn port_name(&self, index: usize) -> Option<String> {
        let midi_output = self.client().ok()?;
        let ports = midi_output.ports();
        let port = ports.get(index)?;
        midi_output.port_name(port).ok()
    }

    fn port_names(&self) -> Vec<String> {
        let midi_output = match self.client() {
            Ok(midi_output) => midi_output,
            Err(e) => {
                debug!("MIDI output enumeration unavailable: {}", e);
                return Vec::new();
            }
        };
        midi_output
            .ports()
            .iter()
            .map(|port| midi_output.port_name(port).unwrap_or_default())
            .collect()
    }

    fn open_port(&mut self, index: usize, announce_name: &str) -> Result<()> {
        self.close_port();

        let midi_output = self.client()?;
        let ports = midi_output.ports();
        let port = ports.get(index).ok_or(Error::PortOutOfRange {
            index,
            count: ports.len(),
        })?;

        let connection = midi_output.connect(port, announce_name)?;
        self.connection = Some(connection);
        Ok(())
    }

    #[cfg(unix)]
    fn open_virtual_port(&mut self, name: &str) -> Result<()> {
        use midir::os::unix::VirtualOutput;

        self.close_port();

        let midi_output = self.client()?;
        let connection = midi_output.create_virtual(name)?;
        self.connection = Some(connection);
        Ok(())
    }

    #[cfg(not(unix))]
    fn open_virtual_port(&mut self, _name: &str) -> Result<()> {
        self.close_port();
        Err(Error::VirtualUnsupported)
    }

    fn close_port(&mut self) {
        if let Some(conn) = self.connection.take() {
            let _ = conn.close();
        }
    }

    fn send_message(&mut self, bytes: &[u8]) -> Result<()> {
        let conn = self.connection.as_mut().ok_or(Error::NotOpen)?;
        conn.send(bytes)?;
        Ok(())
    }
}

impl Drop for MidirTransport {
    fn drop(&mut self) {
        self.close_port();
    }
}
