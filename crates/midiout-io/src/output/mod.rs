//! MIDI output facade: one connection to one output endpoint.
//!
//! ## Quick Start
//!
//! ```ignore
//! use midiout_io::Output;
//!
//! let mut out = Output::builder().client_name("sketch").build()?;
//!
//! for (i, name) in out.enumerate().iter().enumerate() {
//!     println!("[{}] {}", i, name);
//! }
//!
//! if out.open_port(0) {
//!     out.send_note_on(1, 60, 100)?;
//!     out.send_pitch_bend(1, 8192)?;
//!     out.send_note_off(1, 60, 0)?;
//! }
//! out.close_port();
//! ```

mod builder;
mod send;

pub use builder::OutputBuilder;

use midiout_wire::DataPolicy;
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::transport::MidiTransport;
use crate::verbose::is_verbose;

/// An output port as seen during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDevice {
    pub index: usize,
    pub name: String,
}

/// Connection state of an [`Output`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PortState {
    #[default]
    Closed,
    Numeric { index: usize, name: String },
    Virtual { name: String },
}

impl PortState {
    pub fn is_open(&self) -> bool {
        !matches!(self, PortState::Closed)
    }
}

/// Holds at most one connection to a MIDI output endpoint and sends
/// channel-voice messages to it.
///
/// Not reentrant: every send and lifecycle call takes `&mut self`.
/// Dropping an `Output` closes its port.
pub struct Output {
    client_name: String,
    transport: Box<dyn MidiTransport>,
    state: PortState,
    data_policy: DataPolicy,
}

impl Output {
    pub fn builder() -> OutputBuilder {
        OutputBuilder::default()
    }

    /// Output over the OS MIDI backend (midir).
    #[cfg(feature = "midi-io")]
    pub fn new(client_name: impl Into<String>) -> Self {
        let client_name = client_name.into();
        let transport = crate::transport::MidirTransport::new(client_name.clone());
        Self::with_transport(client_name, transport)
    }

    /// Output over any transport.
    pub fn with_transport(
        client_name: impl Into<String>,
        transport: impl MidiTransport + 'static,
    ) -> Self {
        Self::from_boxed(client_name.into(), Box::new(transport))
    }

    pub(crate) fn from_boxed(client_name: String, transport: Box<dyn MidiTransport>) -> Self {
        Self {
            client_name,
            transport,
            state: PortState::Closed,
            data_policy: DataPolicy::default(),
        }
    }

    pub(crate) fn set_data_policy(&mut self, policy: DataPolicy) {
        self.data_policy = policy;
    }

    // ==================== Enumeration ====================

    /// Snapshot of the available output port names. The index of each name
    /// is the port number accepted by [`Output::open_port`].
    ///
    /// Ordering may change as devices come and go; do not cache indices.
    pub fn enumerate(&self) -> Vec<String> {
        self.transport.port_names()
    }

    /// Like [`Output::enumerate`], with indices attached.
    pub fn list_devices(&self) -> Vec<OutputDevice> {
        self.enumerate()
            .into_iter()
            .enumerate()
            .map(|(index, name)| OutputDevice { index, name })
            .collect()
    }

    pub fn count_ports(&self) -> usize {
        self.transport.port_count()
    }

    /// Name of port `index`, or an empty string when out of range.
    pub fn port_name(&self, index: usize) -> String {
        self.transport.port_name(index).unwrap_or_default()
    }

    // ==================== Connection ====================

    /// Close any open port, then connect to port `index`.
    ///
    /// Returns `false` on failure. A failed open leaves the output closed,
    /// not connected to whatever was open before.
    pub fn open_port(&mut self, index: usize) -> bool {
        match self.try_open_port(index) {
            Ok(()) => true,
            Err(e) => {
                error!("[midiout::Output::open_port] couldn't open port {} {}", index, e);
                false
            }
        }
    }

    /// [`Output::open_port`] with the transport's error instead of a bool.
    pub fn try_open_port(&mut self, index: usize) -> Result<()> {
        self.close_port();

        let announce_name = format!("{}Output {}", self.client_name, index);
        self.transport.open_port(index, &announce_name)?;

        let name = self.port_name(index);
        if is_verbose() {
            info!("[midiout::Output::open_port] opened port {} {}", index, name);
        }
        self.state = PortState::Numeric { index, name };
        Ok(())
    }

    /// Open the first port whose name contains `fragment` (case-insensitive).
    pub fn open_port_by_name(&mut self, fragment: &str) -> bool {
        match self.find_port(fragment) {
            Some(index) => self.open_port(index),
            None => {
                self.close_port();
                error!(
                    "[midiout::Output::open_port_by_name] {}",
                    Error::NoMatchingPort(fragment.to_string())
                );
                false
            }
        }
    }

    /// Index of the first port whose name contains `fragment` (case-insensitive).
    pub fn find_port(&self, fragment: &str) -> Option<usize> {
        let needle = fragment.to_lowercase();
        self.enumerate()
            .iter()
            .position(|name| name.to_lowercase().contains(&needle))
    }

    /// Close any open port, then create a virtual port named `name`.
    ///
    /// Returns `false` where the platform has no virtual ports. A virtual
    /// port reports `port() == -1`.
    pub fn open_virtual_port(&mut self, name: &str) -> bool {
        match self.try_open_virtual_port(name) {
            Ok(()) => true,
            Err(e) => {
                error!(
                    "[midiout::Output::open_virtual_port] couldn't open virtual port {} {}",
                    name, e
                );
                false
            }
        }
    }

    pub fn try_open_virtual_port(&mut self, name: &str) -> Result<()> {
        self.close_port();

        self.transport.open_virtual_port(name)?;

        if is_verbose() {
            info!("[midiout::Output::open_virtual_port] opened virtual port {}", name);
        }
        self.state = PortState::Virtual {
            name: name.to_string(),
        };
        Ok(())
    }

    /// Close the connection. Safe to call when already closed.
    pub fn close_port(&mut self) {
        if is_verbose() {
            match &self.state {
                PortState::Virtual { name } => {
                    info!("[midiout::Output::close_port] closed virtual port {}", name)
                }
                PortState::Numeric { index, name } => {
                    info!("[midiout::Output::close_port] closed port {}: {}", index, name)
                }
                PortState::Closed => {}
            }
        }
        self.transport.close_port();
        self.state = PortState::Closed;
    }

    // ==================== State ====================

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.state, PortState::Virtual { .. })
    }

    /// Open port number, or -1 when closed or virtual.
    pub fn port(&self) -> i32 {
        match self.state {
            PortState::Numeric { index, .. } => i32::try_from(index).unwrap_or(i32::MAX),
            _ => -1,
        }
    }

    /// Current port name, or `""` when closed.
    pub fn name(&self) -> &str {
        match &self.state {
            PortState::Numeric { name, .. } | PortState::Virtual { name } => name,
            PortState::Closed => "",
        }
    }

    pub fn state(&self) -> &PortState {
        &self.state
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn data_policy(&self) -> DataPolicy {
        self.data_policy
    }
}

impl Drop for Output {
    fn drop(&mut self) {
        self.close_port();
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("client_name", &self.client_name)
            .field("state", &self.state)
            .field("data_policy", &self.data_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{RecordedConnection, RecordingTransport};

    fn output_with_ports() -> Output {
        let transport = RecordingTransport::new().with_ports(["IAC Bus 1", "USB Keyboard"]);
        Output::with_transport("test", transport)
    }

    fn assert_invariants(out: &Output) {
        if out.is_virtual() {
            assert_eq!(out.port(), -1);
        }
        if out.port() >= 0 {
            assert!(!out.is_virtual());
        }
        assert_eq!(out.is_open(), out.port() >= 0 || out.is_virtual());
        if !out.is_open() {
            assert_eq!(out.name(), "");
        }
    }

    #[test]
    fn test_new_output_is_closed() {
        let out = output_with_ports();
        assert!(!out.is_open());
        assert!(!out.is_virtual());
        assert_eq!(out.port(), -1);
        assert_eq!(out.name(), "");
        assert_eq!(out.state(), &PortState::Closed);
        assert_invariants(&out);
    }

    #[test]
    fn test_enumeration() {
        let out = output_with_ports();
        assert_eq!(out.enumerate(), vec!["IAC Bus 1", "USB Keyboard"]);
        assert_eq!(out.count_ports(), 2);
        assert_eq!(out.port_name(1), "USB Keyboard");
        assert_eq!(out.port_name(7), "");
        assert_eq!(
            out.list_devices()[1],
            OutputDevice {
                index: 1,
                name: "USB Keyboard".to_string()
            }
        );
    }

    #[test]
    fn test_open_numeric_port() {
        let mut out = output_with_ports();
        assert!(out.open_port(1));
        assert!(out.is_open());
        assert!(!out.is_virtual());
        assert_eq!(out.port(), 1);
        assert_eq!(out.name(), "USB Keyboard");
        assert_invariants(&out);
    }

    #[test]
    fn test_announce_name_uses_client_name() {
        let transport = RecordingTransport::new().with_ports(["A"]);
        let handle = transport.handle();
        let mut out = Output::with_transport("Sketch", transport);
        out.open_port(0);
        assert_eq!(
            handle.connection(),
            Some(RecordedConnection::Port {
                index: 0,
                announce_name: "SketchOutput 0".to_string()
            })
        );
    }

    #[test]
    fn test_open_virtual_port() {
        let mut out = output_with_ports();
        assert!(out.open_virtual_port("midiout virtual"));
        assert!(out.is_open());
        assert!(out.is_virtual());
        assert_eq!(out.port(), -1);
        assert_eq!(out.name(), "midiout virtual");
        assert_invariants(&out);
    }

    #[test]
    fn test_failed_open_leaves_closed() {
        let mut out = output_with_ports();
        assert!(out.open_port(0));

        // Out of range: the previous connection is gone too
        assert!(!out.open_port(5));
        assert!(!out.is_open());
        assert_eq!(out.port(), -1);
        assert_eq!(out.name(), "");
        assert_invariants(&out);
    }

    #[test]
    fn test_try_open_reports_error() {
        let mut out = output_with_ports();
        let err = out.try_open_port(9).unwrap_err();
        assert!(matches!(err, Error::PortOutOfRange { index: 9, count: 2 }));
    }

    #[test]
    fn test_virtual_unsupported() {
        let transport = RecordingTransport::new().with_ports(["A"]).without_virtual();
        let mut out = Output::with_transport("test", transport);
        assert!(out.open_port(0));
        assert!(!out.open_virtual_port("v"));
        assert!(!out.is_open());
        assert_invariants(&out);
    }

    #[test]
    fn test_reopen_same_port_closes_first() {
        let transport = RecordingTransport::new().with_ports(["A"]);
        let handle = transport.handle();
        let mut out = Output::with_transport("test", transport);

        assert!(out.open_port(0));
        let closes = handle.close_calls();
        assert!(out.open_port(0));
        assert_eq!(handle.close_calls(), closes + 1);
        assert_eq!(out.port(), 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut out = output_with_ports();
        out.close_port();
        out.close_port();
        assert_eq!(out.state(), &PortState::Closed);

        out.open_virtual_port("v");
        out.close_port();
        out.close_port();
        assert_eq!(out.state(), &PortState::Closed);
        assert_invariants(&out);
    }

    #[test]
    fn test_open_by_name() {
        let mut out = output_with_ports();
        assert_eq!(out.find_port("keyboard"), Some(1));
        assert!(out.open_port_by_name("usb"));
        assert_eq!(out.port(), 1);

        assert!(!out.open_port_by_name("nonexistent"));
        assert!(!out.is_open());
    }

    #[test]
    fn test_drop_closes_port() {
        let transport = RecordingTransport::new().with_ports(["A"]);
        let handle = transport.handle();
        {
            let mut out = Output::with_transport("test", transport);
            out.open_port(0);
            assert!(handle.connection().is_some());
        }
        assert_eq!(handle.connection(), None);
    }
}
