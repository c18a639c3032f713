//! Protocol definitions for the missilectl launcher
//!
//! This crate defines everything the turret understands: the fixed action
//! vectors, the 64-byte command buffer layout, the two-message init
//! handshake, and the control-transfer parameters. It is pure data with no
//! I/O and no failure modes.
//!
//! The protocol itself was reverse engineered from a capture of the vendor
//! software; several constants (the init messages, the value/index fields)
//! have no documented meaning and are preserved verbatim.
//!
//! # Example
//!
//! ```
//! use protocol::{Action, encode_command, COMMAND_LEN, DEFAULT_H_AMP, DEFAULT_V_AMP};
//!
//! let action = Action::from_alias("ne").unwrap();
//! assert_eq!(action, Action::UpRight);
//!
//! let buf = encode_command(action, DEFAULT_H_AMP, DEFAULT_V_AMP);
//! assert_eq!(buf.len(), COMMAND_LEN);
//! assert_eq!(&buf[..8], &[0, 0, 1, 1, 0, 0, 4, 2]);
//! ```

pub mod action;
pub mod command;

pub use action::{Action, VECTOR_LEN};
pub use command::{
    BAY_CAPACITY, COMMAND_LEN, CTRL_INDEX, CTRL_REQUEST, CTRL_REQUEST_TYPE, CTRL_VALUE,
    DEFAULT_H_AMP, DEFAULT_V_AMP, INIT_A, INIT_B, INIT_LEN, PRODUCT_ID, VENDOR_ID,
    encode_command,
};
