//! Status bar and shared layout helpers

use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::state::SubmissionState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the one-line status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let bar = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    let message = if let Some(copy) = &app.copy_message {
        Span::styled(copy.as_str(), Style::default().fg(Color::Green))
    } else if let Some(status) = &app.state.status_message {
        Span::styled(status.as_str(), Style::default().fg(Color::Yellow))
    } else {
        let hints = match app.state.submission.state() {
            SubmissionState::Success { .. } => format!(
                "Tab/↑↓ move · Enter submit · {COPY_SHORTCUT} copy crop · F1 info · Ctrl+C quit"
            ),
            _ => "Tab/↑↓ move · Enter submit · F1 info · Ctrl+C quit".to_string(),
        };
        Span::styled(hints, Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(Line::from(message)), bar);
}
