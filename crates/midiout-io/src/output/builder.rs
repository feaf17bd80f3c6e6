//! Output builder for configuring client name, data policy and transport.

use midiout_wire::DataPolicy;

use crate::error::Result;
use crate::transport::MidiTransport;
use crate::verbose::set_verbose;

use super::Output;

pub const DEFAULT_CLIENT_NAME: &str = "midiout";

pub struct OutputBuilder {
    pub(super) client_name: String,
    pub(super) data_policy: DataPolicy,
    pub(super) verbose: Option<bool>,
    pub(super) transport: Option<Box<dyn MidiTransport>>,
}

impl Default for OutputBuilder {
    fn default() -> Self {
        Self {
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            data_policy: DataPolicy::default(),
            verbose: None,
            transport: None,
        }
    }
}

impl OutputBuilder {
    /// Name announced to the OS; port connections are announced as
    /// `"{client_name}Output {index}"`.
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    pub fn data_policy(mut self, policy: DataPolicy) -> Self {
        self.data_policy = policy;
        self
    }

    /// Sets the process-wide verbose flag when the output is built.
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbose = Some(on);
        self
    }

    /// Use a custom transport instead of the OS backend.
    pub fn transport(mut self, transport: impl MidiTransport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn build(self) -> Result<Output> {
        if let Some(on) = self.verbose {
            set_verbose(on);
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Self::default_transport(&self.client_name)?,
        };

        let mut output = Output::from_boxed(self.client_name, transport);
        output.set_data_policy(self.data_policy);
        Ok(output)
    }

    #[cfg(feature = "midi-io")]
    fn default_transport(client_name: &str) -> Result<Box<dyn MidiTransport>> {
        Ok(Box::new(crate::transport::MidirTransport::new(client_name)))
    }

    #[cfg(not(feature = "midi-io"))]
    fn default_transport(_client_name: &str) -> Result<Box<dyn MidiTransport>> {
        Err(crate::error::Error::Device(
            "no transport configured (enable the `midi-io` feature or call .transport())"
                .to_string(),
        ))
    }
}
