//! Command buffer layout and device constants
//!
//! Every command sent to the launcher is exactly 64 bytes: the 6-byte
//! action vector, the horizontal and vertical amplitude bytes, then 56
//! zero bytes of padding. The two init messages and the control-transfer
//! value/index fields come straight from a capture of the vendor software
//! and have no known meaning; they are sent verbatim.

use crate::action::{Action, VECTOR_LEN};

/// USB vendor ID of the launcher.
pub const VENDOR_ID: u16 = 0x1130;
/// USB product ID of the launcher.
pub const PRODUCT_ID: u16 = 0x0202;

/// Number of physical missile bays.
pub const BAY_CAPACITY: u8 = 3;

/// Default horizontal amplitude: 6 movements cover the full pan range.
pub const DEFAULT_H_AMP: u8 = 4;
/// Default vertical amplitude: 4 movements cover the full tilt range.
pub const DEFAULT_V_AMP: u8 = 2;

/// Length of the two initialization messages.
pub const INIT_LEN: usize = 8;
/// First initialization message, sent before every command.
pub const INIT_A: [u8; INIT_LEN] = [85, 83, 66, 67, 0, 0, 4, 0];
/// Second initialization message, sent before every command.
pub const INIT_B: [u8; INIT_LEN] = [85, 83, 66, 67, 0, 64, 2, 0];

/// Control transfer request type: class, interface recipient, host-to-device.
pub const CTRL_REQUEST_TYPE: u8 = 0x21;
/// Control transfer request: the SET_CONFIGURATION-style code the device expects.
pub const CTRL_REQUEST: u8 = 0x09;
/// Control transfer wValue, fixed by the captured protocol.
pub const CTRL_VALUE: u16 = 0x02;
/// Control transfer wIndex, fixed by the captured protocol.
pub const CTRL_INDEX: u16 = 0x01;

/// Total length of an encoded command buffer.
pub const COMMAND_LEN: usize = 64;

/// Build the 64-byte command buffer for an action.
///
/// Layout: action vector (6 bytes), horizontal amplitude, vertical
/// amplitude, 56 zero bytes. The amplitudes control how many discrete
/// movements span the full physical range, independently per axis.
pub fn encode_command(action: Action, h_amp: u8, v_amp: u8) -> [u8; COMMAND_LEN] {
    let mut buf = [0u8; COMMAND_LEN];
    buf[..VECTOR_LEN].copy_from_slice(&action.vector());
    buf[VECTOR_LEN] = h_amp;
    buf[VECTOR_LEN + 1] = v_amp;
    buf
}
