//! Reusable UI widget helpers

use crate::state::InputField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one measurement input field: bordered label, value with cursor,
/// and an inline error line when validation flagged it
pub fn draw_input_field(frame: &mut Frame, area: Rect, field: &InputField, is_active: bool) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = if field.value.is_empty() && !is_active {
        vec![Span::styled(
            field.spec.placeholder,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::styled(field.value.as_str(), value_style)]
    };
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(error) = field.error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", field.spec.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the submit button row
pub fn draw_submit_button(frame: &mut Frame, area: Rect, label: &str, is_active: bool) {
    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_active {
            Color::Green
        } else {
            Color::DarkGray
        }));

    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .centered()
        .block(block);
    frame.render_widget(button, area);
}

/// Draw an alert panel (result or error) with a colored border and title
pub fn draw_alert(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, color: Color) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
