//! Shared test helpers
//!
//! Transports that record or fail instead of touching hardware. Used by
//! this crate's integration tests; kept public so downstream crates can
//! exercise their UI glue against a fake launcher.

use protocol::COMMAND_LEN;
use std::sync::{Arc, Mutex};

use crate::error::{DeviceError, Result};
use crate::transport::Transport;

/// Transport that records every command it is asked to send.
#[derive(Default, Clone)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<[u8; COMMAND_LEN]>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command sent so far, in order.
    pub fn sent(&self) -> Vec<[u8; COMMAND_LEN]> {
        self.sent.lock().expect("transport log poisoned").clone()
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, command: &[u8; COMMAND_LEN]) -> Result<()> {
        self.sent
            .lock()
            .expect("transport log poisoned")
            .push(*command);
        Ok(())
    }
}

/// Transport that fails every send with the given rusb error.
pub struct FailingTransport {
    error: rusb::Error,
}

impl FailingTransport {
    pub fn new(error: rusb::Error) -> Self {
        Self { error }
    }
}

impl Transport for FailingTransport {
    fn send(&mut self, _command: &[u8; COMMAND_LEN]) -> Result<()> {
        Err(DeviceError::Usb(self.error))
    }
}
