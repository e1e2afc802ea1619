//! Stat card component.
//!
//! A small bordered card showing a headline metric: title, value, context
//! line, and a trend arrow. The overview page lays four of these in a row.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::{StatSummary, Trend};

/// Arrow glyph and color for a trend direction.
fn trend_glyph(trend: Trend) -> (&'static str, Color) {
    match trend {
        Trend::Up => ("↑", Color::Green),
        Trend::Down => ("↓", Color::Red),
        Trend::Neutral => ("→", Color::DarkGray),
    }
}

/// A renderable stat card.
pub struct StatCard<'a> {
    summary: &'a StatSummary,
}

impl<'a> StatCard<'a> {
    /// Create a card for the given metric.
    pub fn new(summary: &'a StatSummary) -> Self {
        Self { summary }
    }

    /// Render the card into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (glyph, color) = trend_glyph(self.summary.trend);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.summary.title),
                Style::default().fg(Color::DarkGray),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let text = vec![
            Line::from(Span::styled(
                self.summary.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("{} ", glyph), Style::default().fg(color)),
                Span::styled(
                    self.summary.description.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_glyphs() {
        assert_eq!(trend_glyph(Trend::Up), ("↑", Color::Green));
        assert_eq!(trend_glyph(Trend::Down), ("↓", Color::Red));
        assert_eq!(trend_glyph(Trend::Neutral), ("→", Color::DarkGray));
    }
}
