//! Falling-leaves background rendering

use crate::state::LeafField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

const GLYPHS: [&str; 3] = ["❀", "✿", "·"];
const PALETTE: [Color; 3] = [Color::Green, Color::LightGreen, Color::Yellow];

/// Draw the leaf particles that are currently on screen
pub fn draw(frame: &mut Frame, area: Rect, field: &LeafField) {
    if !field.is_enabled() || area.width == 0 || area.height == 0 {
        return;
    }

    let elapsed = field.elapsed_secs();
    for leaf in &field.particles {
        if let Some((x, y)) = leaf.position(area.width, area.height, elapsed) {
            let glyph = GLYPHS[leaf.glyph as usize % GLYPHS.len()];
            let color = PALETTE[leaf.color as usize % PALETTE.len()];
            let cell = Rect {
                x: area.x + x,
                y: area.y + y,
                width: 1,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(glyph, Style::default().fg(color))),
                cell,
            );
        }
    }
}
