//! Panel application state
//!
//! Holds the launcher, tracks the last pressed button for highlighting,
//! and translates inputs into facade calls.

use device::{FireDelay, Launcher, Transport};
use protocol::Action;
use tracing::debug;

use super::events::Input;

/// One button on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    UpLeft,
    Up,
    UpRight,
    Left,
    Stop,
    Right,
    DownLeft,
    Down,
    DownRight,
    Fire,
}

impl Button {
    /// The 3x3 direction grid, row by row, stop in the center.
    pub const GRID: [[Button; 3]; 3] = [
        [Button::UpLeft, Button::Up, Button::UpRight],
        [Button::Left, Button::Stop, Button::Right],
        [Button::DownLeft, Button::Down, Button::DownRight],
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::UpLeft => "↖",
            Button::Up => "↑",
            Button::UpRight => "↗",
            Button::Left => "←",
            Button::Stop => "STOP",
            Button::Right => "→",
            Button::DownLeft => "↙",
            Button::Down => "↓",
            Button::DownRight => "↘",
            Button::Fire => "FIRE",
        }
    }

    fn for_move(action: Action) -> Option<Button> {
        match action {
            Action::Up => Some(Button::Up),
            Action::Down => Some(Button::Down),
            Action::Left => Some(Button::Left),
            Action::Right => Some(Button::Right),
            Action::UpLeft => Some(Button::UpLeft),
            Action::UpRight => Some(Button::UpRight),
            Action::DownLeft => Some(Button::DownLeft),
            Action::DownRight => Some(Button::DownRight),
            Action::Stop | Action::Fire => None,
        }
    }
}

/// Panel state.
pub struct App<T: Transport> {
    launcher: Launcher<T>,
    last_pressed: Option<Button>,
    status: String,
    should_quit: bool,
}

impl<T: Transport> App<T> {
    pub fn new(launcher: Launcher<T>) -> Self {
        Self {
            launcher,
            last_pressed: None,
            status: "Ready".to_string(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn last_pressed(&self) -> Option<Button> {
        self.last_pressed
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Apply one input. Transport failures propagate and end the panel.
    pub fn handle_input(&mut self, input: Input) -> device::Result<()> {
        match input {
            Input::Quit => {
                debug!("panel quit requested");
                self.should_quit = true;
            }
            Input::Move(action) => {
                self.launcher.send(action)?;
                self.last_pressed = Button::for_move(action);
                self.status = format!("Moving {}", direction_name(action));
            }
            Input::Stop => {
                self.launcher.stop()?;
                self.last_pressed = Some(Button::Stop);
                self.status = "Stopped".to_string();
            }
            Input::Fire => {
                // One shot per press, like the physical remote
                self.launcher.fire(1u8, FireDelay::default())?;
                self.last_pressed = Some(Button::Fire);
                self.status = "Missile away!".to_string();
            }
            Input::None => {}
        }
        Ok(())
    }

    pub fn into_launcher(self) -> Launcher<T> {
        self.launcher
    }
}

fn direction_name(action: Action) -> &'static str {
    match action {
        Action::Up => "up",
        Action::Down => "down",
        Action::Left => "left",
        Action::Right => "right",
        Action::UpLeft => "up-left",
        Action::UpRight => "up-right",
        Action::DownLeft => "down-left",
        Action::DownRight => "down-right",
        Action::Stop => "nowhere",
        Action::Fire => "nowhere",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device::test_utils::RecordingTransport;
    use protocol::{DEFAULT_H_AMP, DEFAULT_V_AMP, encode_command};

    fn app() -> (App<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let launcher = Launcher::new(transport.clone()).with_sleep_hook(Box::new(|_| {}));
        (App::new(launcher), transport)
    }

    #[test]
    fn test_move_input_sends_and_highlights() {
        let (mut app, transport) = app();

        app.handle_input(Input::Move(Action::UpRight)).unwrap();

        assert_eq!(
            transport.sent(),
            vec![encode_command(Action::UpRight, DEFAULT_H_AMP, DEFAULT_V_AMP)]
        );
        assert_eq!(app.last_pressed(), Some(Button::UpRight));
        assert_eq!(app.status(), "Moving up-right");
    }

    #[test]
    fn test_stop_input_presses_center_button() {
        let (mut app, transport) = app();

        app.handle_input(Input::Stop).unwrap();

        assert_eq!(
            transport.sent(),
            vec![encode_command(Action::Stop, DEFAULT_H_AMP, DEFAULT_V_AMP)]
        );
        assert_eq!(app.last_pressed(), Some(Button::Stop));
    }

    #[test]
    fn test_fire_input_fires_exactly_once() {
        let (mut app, transport) = app();

        app.handle_input(Input::Fire).unwrap();

        assert_eq!(
            transport.sent(),
            vec![encode_command(Action::Fire, DEFAULT_H_AMP, DEFAULT_V_AMP)]
        );
        assert_eq!(app.last_pressed(), Some(Button::Fire));
    }

    #[test]
    fn test_quit_sets_flag_without_sending() {
        let (mut app, transport) = app();

        app.handle_input(Input::Quit).unwrap();

        assert!(app.should_quit());
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_none_input_changes_nothing() {
        let (mut app, transport) = app();

        app.handle_input(Input::None).unwrap();

        assert!(!app.should_quit());
        assert_eq!(app.last_pressed(), None);
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_grid_covers_all_directions_once() {
        let flat: Vec<Button> = Button::GRID.into_iter().flatten().collect();
        assert_eq!(flat.len(), 9);
        assert_eq!(flat[4], Button::Stop);
    }
}
