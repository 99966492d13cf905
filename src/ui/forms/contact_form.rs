//! Contact form view

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{FieldKind, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form with its error lines, submit button and banner
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focus = app.state.focus;

    let outer = Block::default()
        .title(" Get In Touch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Min(5),                // Message
            Constraint::Length(1),             // Message error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Success banner
        ])
        .split(inner);

    for (idx, kind) in FieldKind::ALL.into_iter().enumerate() {
        let field = form.field(kind);
        let is_active = focus.field() == Some(kind);
        draw_field(frame, chunks[idx * 2], field, is_active);
        draw_field_error(frame, chunks[idx * 2 + 1], field);
    }

    let button_area = Rect {
        width: chunks[6].width.min(14),
        ..chunks[6]
    };
    render_button(
        frame,
        button_area,
        "Send",
        matches!(focus, Focus::SubmitButton),
    );

    let banner = form.banner();
    if banner.is_visible() {
        let line = Line::from(Span::styled(
            banner.text.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            chunks[7],
        );
    }
}
