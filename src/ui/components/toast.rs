//! Toast notifications for user feedback.
//!
//! Transient success/error/info messages rendered in the bottom-right
//! corner and expired on the event-loop tick.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// How many toasts are shown at once; older ones are dropped.
const MAX_VISIBLE: usize = 3;

/// The kind of toast, which determines its color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational message (blue).
    Info,
    /// Success message (green).
    Success,
    /// Warning message (yellow).
    Warning,
    /// Error message (red).
    Error,
}

impl ToastKind {
    /// Icon shown before the message.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✓",
            ToastKind::Warning => "⚠",
            ToastKind::Error => "✗",
        }
    }

    /// Color for text and border.
    pub fn color(&self) -> Color {
        match self {
            ToastKind::Info => Color::Blue,
            ToastKind::Success => Color::Green,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Error => Color::Red,
        }
    }

    /// How long a toast of this kind stays visible.
    fn duration(&self) -> Duration {
        match self {
            ToastKind::Info | ToastKind::Success => Duration::from_secs(3),
            ToastKind::Warning | ToastKind::Error => Duration::from_secs(5),
        }
    }
}

/// A single toast message.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message text.
    pub message: String,
    /// The kind of toast.
    pub kind: ToastKind,
    /// When the toast was created.
    created_at: Instant,
    /// How long it should be displayed.
    duration: Duration,
}

impl Toast {
    /// Create a toast of the given kind with its default duration.
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    /// Override the display duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check whether the toast has outlived its duration.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// The queue of visible toasts.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
}

impl ToastStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast, dropping the oldest beyond the visible limit.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Push an info toast.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Info));
    }

    /// Push a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Success));
    }

    /// Push a warning toast.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Warning));
    }

    /// Push an error toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Error));
    }

    /// Drop expired toasts. Called on every event-loop tick.
    pub fn tick(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Check if there are no toasts.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Iterate over the visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Render the stack in the bottom-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.toasts.is_empty() {
            return;
        }

        let width = 44.min(area.width.saturating_sub(4));
        let height = 3u16;
        let mut y = area.y + area.height.saturating_sub(1);

        // Newest at the bottom, stacking upward.
        for toast in self.toasts.iter().rev() {
            if y < area.y + height {
                break;
            }
            y -= height;
            let rect = Rect::new(area.x + area.width.saturating_sub(width + 2), y, width, height);
            render_toast(toast, frame, rect);
        }
    }
}

/// Render a single toast.
fn render_toast(toast: &Toast, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let style = Style::default().fg(toast.kind.color());
    let text = Line::from(vec![
        Span::styled(
            format!("{} ", toast.kind.icon()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(&toast.message, style),
    ]);

    let block = Block::default().borders(Borders::ALL).border_style(style);
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_icons() {
        assert_eq!(ToastKind::Success.icon(), "✓");
        assert_eq!(ToastKind::Error.icon(), "✗");
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(ToastKind::Info.color(), Color::Blue);
        assert_eq!(ToastKind::Warning.color(), Color::Yellow);
    }

    #[test]
    fn test_error_outlives_success() {
        let success = Toast::new("ok", ToastKind::Success);
        let error = Toast::new("bad", ToastKind::Error);
        assert!(error.duration > success.duration);
    }

    #[test]
    fn test_stack_push_and_len() {
        let mut stack = ToastStack::new();
        assert!(stack.is_empty());
        stack.success("Saved");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_stack_caps_visible_toasts() {
        let mut stack = ToastStack::new();
        stack.info("1");
        stack.info("2");
        stack.info("3");
        stack.info("4");
        assert_eq!(stack.len(), MAX_VISIBLE);
        let messages: Vec<&str> = stack.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_tick_drops_expired() {
        let mut stack = ToastStack::new();
        stack.push(Toast::new("gone", ToastKind::Info).with_duration(Duration::from_millis(1)));
        std::thread::sleep(Duration::from_millis(5));
        stack.tick();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_tick_keeps_fresh() {
        let mut stack = ToastStack::new();
        stack.info("fresh");
        stack.tick();
        assert_eq!(stack.len(), 1);
    }
}
