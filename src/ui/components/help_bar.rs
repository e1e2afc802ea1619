//! Contextual help bar component.
//!
//! Displays context-sensitive keyboard shortcut hints at the bottom of the
//! screen. Hint strings mark keys in brackets, e.g. "[j/k] move  [q] quit".

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render a help bar with the given hint string.
pub fn render_help_bar(frame: &mut Frame, area: Rect, hints: &str) {
    let line = Line::from(hint_spans(hints));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split a hint string into styled spans: bracketed keys in cyan, the rest
/// muted.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(
                        current.clone(),
                        Style::default().fg(Color::DarkGray),
                    ));
                    current.clear();
                }
                in_bracket = true;
                current.push(c);
            }
            ']' if in_bracket => {
                current.push(c);
                spans.push(Span::styled(
                    current.clone(),
                    Style::default().fg(Color::Cyan),
                ));
                current.clear();
                in_bracket = false;
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, Style::default().fg(Color::DarkGray)));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_spans_simple() {
        let spans = hint_spans("[j/k] navigate");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "[j/k]");
    }

    #[test]
    fn test_hint_spans_multiple_keys() {
        let spans = hint_spans("[j/k] move  [Enter] open  [?] help");
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn test_hint_spans_empty() {
        assert!(hint_spans("").is_empty());
    }

    #[test]
    fn test_hint_spans_no_brackets() {
        let spans = hint_spans("just text");
        assert_eq!(spans.len(), 1);
    }
}
