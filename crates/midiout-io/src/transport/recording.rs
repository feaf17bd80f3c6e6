//! In-memory transport that records every frame it is asked to send.
//!
//! Useful for tests and dry runs: the port list is configurable, opens can
//! be made to fail, and a cloneable [`RecordingHandle`] reads back what was
//! sent after the transport has been moved into an `Output`.

use std::sync::Arc;

use parking_lot::Mutex;

use super::MidiTransport;
use crate::error::{Error, Result};

/// Connection currently held by a [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedConnection {
    Port { index: usize, announce_name: String },
    Virtual { name: String },
}

#[derive(Default)]
struct Shared {
    ports: Vec<String>,
    failing_ports: Vec<usize>,
    virtual_supported: bool,
    connection: Option<RecordedConnection>,
    sent: Vec<Vec<u8>>,
    close_calls: usize,
}

pub struct RecordingTransport {
    shared: Arc<Mutex<Shared>>,
}

impl RecordingTransport {
    /// No ports, virtual ports supported.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                virtual_supported: true,
                ..Shared::default()
            })),
        }
    }

    pub fn with_ports<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shared.lock().ports = names.into_iter().map(Into::into).collect();
        self
    }

    /// Opening `index` fails as if the device were busy.
    pub fn failing_port(self, index: usize) -> Self {
        self.shared.lock().failing_ports.push(index);
        self
    }

    /// Behave like a platform without virtual port support.
    pub fn without_virtual(self) -> Self {
        self.shared.lock().virtual_supported = false;
        self
    }

    pub fn handle(&self) -> RecordingHandle {
        RecordingHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MidiTransport for RecordingTransport {
    fn port_count(&self) -> usize {
        self.shared.lock().ports.len()
    }

    fn port_name(&self, index: usize) -> Option<String> {
        self.shared.lock().ports.get(index).cloned()
    }

    fn port_names(&self) -> Vec<String> {
        self.shared.lock().ports.clone()
    }

    fn open_port(&mut self, index: usize, announce_name: &str) -> Result<()> {
        let mut shared = self.shared.lock();
        let count = shared.ports.len();
        if index >= count {
            return Err(Error::PortOutOfRange { index, count });
        }
        if shared.failing_ports.contains(&index) {
            return Err(Error::PortOpen(format!("device {} is busy", index)));
        }
        shared.connection = Some(RecordedConnection::Port {
            index,
            announce_name: announce_name.to_string(),
        });
        Ok(())
    }

    fn open_virtual_port(&mut self, name: &str) -> Result<()> {
        let mut shared = self.shared.lock();
        if !shared.virtual_supported {
            return Err(Error::VirtualUnsupported);
        }
        shared.connection = Some(RecordedConnection::Virtual {
            name: name.to_string(),
        });
        Ok(())
    }

    fn close_port(&mut self) {
        let mut shared = self.shared.lock();
        shared.connection = None;
        shared.close_calls += 1;
    }

    fn send_message(&mut self, bytes: &[u8]) -> Result<()> {
        let mut shared = self.shared.lock();
        if shared.connection.is_none() {
            return Err(Error::NotOpen);
        }
        shared.sent.push(bytes.to_vec());
        Ok(())
    }
}

/// Read side of a [`RecordingTransport`]. Clone is cheap (Arc internally).
#[derive(Clone)]
pub struct RecordingHandle {
    shared: Arc<Mutex<Shared>>,
}

impl RecordingHandle {
    /// Every frame sent so far, in call order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.shared.lock().sent.clone()
    }

    /// Drain the recorded frames.
    pub fn take(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.shared.lock().sent)
    }

    pub fn last(&self) -> Option<Vec<u8>> {
        self.shared.lock().sent.last().cloned()
    }

    pub fn connection(&self) -> Option<RecordedConnection> {
        self.shared.lock().connection.clone()
    }

    /// Number of `close_port` calls the transport received.
    pub fn close_calls(&self) -> usize {
        self.shared.lock().close_calls
    }

    /// Replace the visible port list, as if devices were plugged or unplugged.
    pub fn set_ports<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shared.lock().ports = names.into_iter().map(Into::into).collect();
    }
}
