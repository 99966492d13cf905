//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Focus, StatusKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", get_focus_hints(app.state.focus)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(status) = &app.state.status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            status.text.as_str(),
            Style::default().fg(status_color(status.kind)),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Sent => Color::Green,
        StatusKind::Rejected => Color::Yellow,
    }
}

/// Get keyboard hints for the focused element
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Name | Focus::Email => {
            format!("Tab:next  Enter:next  {SUBMIT_SHORTCUT}:send  Esc:quit")
        }
        Focus::Message => format!("Tab:next  Enter:newline  {SUBMIT_SHORTCUT}:send  Esc:quit"),
        Focus::SubmitButton => "Enter:send  Shift+Tab:back  Esc:quit".to_string(),
    }
}
