//! Modal dialog components.
//!
//! Centered overlays: a yes/no confirmation dialog and a list picker used
//! for choosing among a fixed set of options (order status, product
//! status).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Compute a centered rectangle of the given percentage size within `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Outcome of a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// The user confirmed.
    Confirm,
    /// The user backed out.
    Cancel,
}

/// A yes/no confirmation dialog.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    /// Dialog title.
    title: String,
    /// Question shown in the body.
    message: String,
}

impl ConfirmDialog {
    /// Create a dialog with the given title and message.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Handle keyboard input.
    ///
    /// y/Enter confirms; n/Esc cancels; anything else is ignored.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ConfirmAction> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(ConfirmAction::Confirm)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(ConfirmAction::Cancel),
            _ => None,
        }
    }

    /// Render the dialog centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rect = centered_rect(50, 25, area);
        frame.render_widget(Clear, rect);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let text = vec![
            Line::from(self.message.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(Color::Cyan)),
                Span::raw(" confirm  "),
                Span::styled("[n]", Style::default().fg(Color::Cyan)),
                Span::raw(" cancel"),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rect,
        );
    }
}

/// Outcome of a list picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// The option at this index was chosen.
    Choose(usize),
    /// The picker was dismissed.
    Cancel,
}

/// A centered list picker over a fixed set of options.
#[derive(Debug, Clone)]
pub struct SelectDialog {
    /// Dialog title.
    title: String,
    /// The selectable options.
    options: Vec<String>,
    /// Cursor position.
    selected: usize,
}

impl SelectDialog {
    /// Create a picker with a cursor on the given initial option.
    pub fn new(title: impl Into<String>, options: Vec<String>, initial: usize) -> Self {
        let selected = initial.min(options.len().saturating_sub(1));
        Self {
            title: title.into(),
            options,
            selected,
        }
    }

    /// The current cursor position.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handle keyboard input.
    ///
    /// Up/Down (and j/k) move the cursor, Enter chooses, Esc/q dismisses.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SelectAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.options.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => Some(SelectAction::Choose(self.selected)),
            KeyCode::Esc | KeyCode::Char('q') => Some(SelectAction::Cancel),
            _ => None,
        }
    }

    /// Render the picker centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let height_percent = ((self.options.len() as u16 + 4) * 100 / area.height.max(1)).clamp(20, 60);
        let rect = centered_rect(40, height_percent, area);
        frame.render_widget(Clear, rect);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(format!(" {} ", option), style)))
            })
            .collect();

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        frame.render_widget(List::new(items).block(block), rect);
    }
}
