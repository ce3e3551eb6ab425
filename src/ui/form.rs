//! Measurement form rendering

use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::state::{SubmissionState, BUTTON_ROW};
use crate::ui::widgets::{draw_alert, draw_input_field, draw_submit_button};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

/// Rows of bordered field + inline error line
const FIELD_HEIGHT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;
const ALERT_HEIGHT: u16 = 4;
const CARD_WIDTH: u16 = 72;

/// Draw the crop recommendation form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_card(area);

    let block = Block::default()
        .title(Span::styled(
            " CropCast — Crop Recommendation ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT * 4), // field grid, 4 rows of 2
            Constraint::Length(BUTTON_HEIGHT),    // submit button
            Constraint::Length(ALERT_HEIGHT),     // result / error alert
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_field_grid(frame, chunks[0], app);

    let submitting = app.state.submission.is_submitting();
    let label = if submitting {
        "Analyzing..."
    } else {
        "Get Recommendation"
    };
    draw_submit_button(
        frame,
        centered_width(chunks[1], 30),
        label,
        app.state.form.active_index == BUTTON_ROW,
    );

    draw_result(frame, chunks[2], app);
}

/// Seven fields laid out two per row
fn draw_field_grid(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
        ])
        .split(area);

    for (i, field) in app.state.form.fields.iter().enumerate() {
        let row = rows[i / 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        let cell = cols[i % 2];
        draw_input_field(frame, cell, field, app.state.form.active_index == i);
    }
}

/// Success or failure alert under the button, mirroring the submission state
fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    match app.state.submission.state() {
        SubmissionState::Success { predicted_crop } => {
            let lines = vec![
                Line::from(Span::styled(
                    predicted_crop.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Optimized for your soil and climate. {COPY_SHORTCUT} to copy."),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            draw_alert(frame, area, "Recommended Crop", lines, Color::Green);
        }
        SubmissionState::Failed { message } => {
            let lines = vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))];
            draw_alert(frame, area, "Error", lines, Color::Red);
        }
        SubmissionState::Idle | SubmissionState::Submitting => {}
    }
}

fn centered_card(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = (FIELD_HEIGHT * 4 + BUTTON_HEIGHT + ALERT_HEIGHT + 2).min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        width,
        ..area
    }
}
