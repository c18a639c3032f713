//! Interactive front-ends
//!
//! Three interchangeable ways to drive the launcher facade: a
//! command-word text loop, a numeric-keypad loop, and a graphical button
//! panel. All of them own the launcher for their lifetime and close the
//! session on the way out.

pub mod numpad;
pub mod panel;
pub mod text;

/// Farewell printed by the line-oriented UIs.
pub(crate) const FAREWELL: &str = "Goodbye!";
