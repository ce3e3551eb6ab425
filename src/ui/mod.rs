//! UI module for rendering the TUI

mod form;
mod info;
mod layout;
mod leaves;
mod splash;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match &app.state.current_view {
        View::Splash => {
            if let Some(splash_state) = &app.splash_state {
                splash::draw(frame, area, splash_state);
            }
            return;
        }
        View::Form => {
            // Decorative background first so the form draws over it
            leaves::draw(frame, area, &app.state.leaves);
            form::draw(frame, area, app);
        }
        View::Info => {
            leaves::draw(frame, area, &app.state.leaves);
            info::draw(frame, area);
        }
    }

    layout::draw_status_bar(frame, app);
}
