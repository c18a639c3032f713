//! Device access for the missilectl launcher
//!
//! Owns everything that talks to the hardware: the USB session lifecycle
//! (find, open, claim, release), the command transport (init handshake
//! plus command over the control endpoint), and the launcher facade the
//! front-ends drive.
//!
//! Everything here is synchronous and blocking; the device has no notion
//! of concurrent callers and the OS driver claim keeps other processes
//! out.

pub mod error;
pub mod launcher;
pub mod session;
pub mod test_utils;
pub mod transport;

pub use error::{DeviceError, Result};
pub use launcher::{DEFAULT_FIRE_DELAY_SECS, FireCount, FireDelay, Launcher, TurretProfile};
pub use session::Session;
pub use transport::{Transport, UsbTransport, wire_sequence};
