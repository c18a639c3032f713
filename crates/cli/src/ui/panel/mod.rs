//! Graphical button panel
//!
//! A terminal rendition of the classic launcher control pad: a 3x3 grid
//! of direction buttons around a central stop, with a fire button below.
//! Keyboard driven and fully synchronous; events are polled inline since
//! nothing else needs the thread.

mod app;
mod events;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use device::{Launcher, Transport};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use app::App;

/// Poll timeout; doubles as the redraw tick.
const TICK: Duration = Duration::from_millis(200);

pub fn run<T: Transport>(launcher: Launcher<T>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = App::new(launcher);
    let result = event_loop(&mut terminal, &mut app);

    // Restore the terminal on every exit path before surfacing errors.
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;

    let close_result = app.into_launcher().close();
    result?;
    close_result?;
    Ok(())
}

fn event_loop<T: Transport>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<T>,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(input) = events::poll_input(TICK)? {
            app.handle_input(input)?;
        }
    }
    Ok(())
}
