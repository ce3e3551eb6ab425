//! "Why crop selection matters" educational panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

struct InfoItem {
    title: &'static str,
    content: &'static str,
    color: Color,
}

const ITEMS: [InfoItem; 4] = [
    InfoItem {
        title: "Crop Selection Impact",
        content: "Proper crop selection can increase yield by up to 30% and reduce resource \
                  usage by 20%, directly affecting farmer income and sustainability.",
        color: Color::Green,
    },
    InfoItem {
        title: "Failed Harvest Risks",
        content: "Crop failure can lead to an average 60% income loss for small-scale farmers, \
                  pushing many into debt cycles and food insecurity for their families.",
        color: Color::Yellow,
    },
    InfoItem {
        title: "Optimal Growth",
        content: "Crops grown in optimal soil and climate conditions require 40% less water, \
                  30% less fertilizer, and are more resistant to pests and diseases.",
        color: Color::Green,
    },
    InfoItem {
        title: "Did You Know?",
        content: "Planting inappropriate crops can lead to up to 70% more water usage and a \
                  significant increase in fertilizer costs, while dramatically reducing yield \
                  and income potential.",
        color: Color::Yellow,
    },
];

/// Draw the info view
pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Why Crop Selection Matters ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for item in &ITEMS {
        lines.push(Line::from(Span::styled(
            item.title,
            Style::default()
                .fg(item.color)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(item.content));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Press Esc or F1 to return to the form",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
