//! Command transport
//!
//! Every command reaches the device as three host-to-device control
//! transfers in a row: the two fixed init messages, then the 64-byte
//! command buffer. Nothing is ever read back; the turret moving (or not)
//! is the only observable effect.

use protocol::{COMMAND_LEN, CTRL_INDEX, CTRL_REQUEST, CTRL_REQUEST_TYPE, CTRL_VALUE, INIT_A, INIT_B};
use std::time::Duration;
use tracing::debug;

use crate::error::Result;
use crate::session::Session;

/// Timeout for each control transfer.
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(5);

/// Sink for encoded commands.
///
/// The launcher facade is written against this trait so its behavior can
/// be tested without hardware; [`UsbTransport`] is the real thing.
pub trait Transport {
    /// Deliver one encoded command to the device.
    fn send(&mut self, command: &[u8; COMMAND_LEN]) -> Result<()>;

    /// Tear down whatever the transport holds open. No-op by default.
    fn shutdown(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// The three control-transfer payloads that carry one command, in order.
pub fn wire_sequence(command: &[u8; COMMAND_LEN]) -> [&[u8]; 3] {
    [&INIT_A, &INIT_B, command.as_slice()]
}

/// Transport over the real USB control endpoint.
pub struct UsbTransport {
    session: Session,
}

impl UsbTransport {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn write(&self, payload: &[u8]) -> Result<()> {
        let written = self.session.handle()?.write_control(
            CTRL_REQUEST_TYPE,
            CTRL_REQUEST,
            CTRL_VALUE,
            CTRL_INDEX,
            payload,
            TRANSFER_TIMEOUT,
        )?;
        debug!(
            "control transfer: request_type={:#04x} request={:#04x} len={}/{}",
            CTRL_REQUEST_TYPE,
            CTRL_REQUEST,
            written,
            payload.len()
        );
        Ok(())
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, command: &[u8; COMMAND_LEN]) -> Result<()> {
        for payload in wire_sequence(command) {
            self.write(payload)?;
        }
        Ok(())
    }

    fn shutdown(self) -> Result<()> {
        self.session.close()
    }
}
