//! Panel event handling
//!
//! Maps crossterm key presses onto panel inputs. The poll loop is
//! synchronous: the launcher blocks on its control transfers anyway, so
//! there is nothing to run concurrently.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use protocol::Action;
use std::time::Duration;

/// User input derived from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Press a direction button
    Move(Action),
    /// Press the central stop button
    Stop,
    /// Press the fire button
    Fire,
    /// Leave the panel
    Quit,
    /// Ignored key
    None,
}

impl From<KeyEvent> for Input {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,

            KeyCode::Up => Input::Move(Action::Up),
            KeyCode::Down => Input::Move(Action::Down),
            KeyCode::Left => Input::Move(Action::Left),
            KeyCode::Right => Input::Move(Action::Right),

            // Numpad compass rose, same mapping as the numpad UI
            KeyCode::Char('5') => Input::Stop,
            KeyCode::Char(digit @ '1'..='9') => match Action::from_alias(&digit.to_string()) {
                Some(action) => Input::Move(action),
                None => Input::None,
            },

            KeyCode::Char('f') | KeyCode::Char(' ') => Input::Fire,
            KeyCode::Char('s') => Input::Stop,

            _ => Input::None,
        }
    }
}

/// Poll for the next input, returning `None` on a tick with no key press.
pub fn poll_input(timeout: Duration) -> Result<Option<Input>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        CrosstermEvent::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(Some(Input::from(key)))
        }
        // Resize redraws on the next tick; everything else is ignored
        _ => Ok(None),
    }
}
