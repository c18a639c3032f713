//! Panel rendering with ratatui

use device::Transport;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Button};

/// Render the complete panel.
pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // grid row: up-left, up, up-right
            Constraint::Length(3), // grid row: left, stop, right
            Constraint::Length(3), // grid row: down-left, down, down-right
            Constraint::Length(3), // fire button
            Constraint::Length(3), // status bar
            Constraint::Min(0),
        ])
        .split(frame.area());

    for (row, buttons) in Button::GRID.iter().enumerate() {
        render_button_row(frame, app, buttons, chunks[row]);
    }
    render_fire_button(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_button_row<T: Transport>(
    frame: &mut Frame,
    app: &App<T>,
    buttons: &[Button; 3],
    area: Rect,
) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (cell, &button) in cells.iter().zip(buttons) {
        render_button(frame, app, button, *cell);
    }
}

fn render_button<T: Transport>(frame: &mut Frame, app: &App<T>, button: Button, area: Rect) {
    let pressed = app.last_pressed() == Some(button);

    let style = match (button, pressed) {
        (Button::Fire, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        (Button::Fire, false) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        (_, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (_, false) => Style::default(),
    };

    let widget = Paragraph::new(button.label())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_fire_button<T: Transport>(frame: &mut Frame, app: &App<T>, area: Rect) {
    render_button(frame, app, Button::Fire, area);
}

fn render_status_bar<T: Transport>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let text = vec![
        Span::styled(app.status(), Style::default().fg(Color::Cyan)),
        Span::raw("  |  "),
        Span::styled(
            "arrows/1-9 move · 5/s stop · f/space fire · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let status = Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Missile Control ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Blue)),
        );

    frame.render_widget(status, area);
}
