//! Customers page: the customer table with a detail modal.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::data::{format_money, Customer};
use crate::events::KeyBindings;
use crate::table::{CellValue, Column, DataTable, TableError};
use crate::ui::components::{centered_rect, render_data_table};

use super::{handle_filter_keys, handle_table_keys};

pub struct CustomersView {
    table: DataTable<Customer>,
    filter_active: bool,
    detail: Option<Customer>,
}

impl CustomersView {
    pub fn new(customers: Vec<Customer>) -> Result<Self, TableError> {
        let columns = vec![
            Column::new("name", "Name", |c: &Customer| CellValue::text(c.name.clone())),
            Column::new("email", "Email", |c: &Customer| {
                CellValue::text(c.email.clone())
            }),
            Column::new("registered", "Registered", |c: &Customer| {
                CellValue::text(c.registration_date.clone())
            }),
            Column::new("orders", "Orders", |c: &Customer| {
                CellValue::number(c.total_orders as f64)
            }),
            Column::new("ltv", "Lifetime Value", |c: &Customer| {
                CellValue::money(c.lifetime_value)
            }),
            Column::new("last_seen", "Last Seen", |c: &Customer| {
                CellValue::text(c.last_seen.clone())
            })
            .sortable(false),
        ];
        Ok(Self {
            table: DataTable::new(columns, customers)?
                .with_filter_placeholder("Press / to search customers by name, email..."),
            filter_active: false,
            detail: None,
        })
    }

    /// Apply a configured page size. Out-of-set sizes are ignored.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        self.table.set_page_size(size)
    }

    /// Current rows per page.
    pub fn page_size(&self) -> usize {
        self.table.page_size()
    }

    /// Whether a modal or the filter line is capturing input.
    pub fn is_capturing_input(&self) -> bool {
        self.filter_active || self.detail.is_some()
    }

    pub fn handle_input(&mut self, key: KeyEvent, bindings: &KeyBindings) {
        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.detail = None;
            }
            return;
        }

        if self.filter_active {
            self.filter_active = handle_filter_keys(&mut self.table, &key);
            return;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.filter_active = true;
            }
            KeyCode::Enter => {
                self.detail = self.table.selected_row().cloned();
            }
            _ => {
                handle_table_keys(&mut self.table, &key, bindings);
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_data_table(
            frame,
            area,
            "Customers",
            &self.table,
            self.filter_active,
            |_: &Customer, _: &str| None,
        );

        if let Some(customer) = &self.detail {
            render_customer_detail(frame, area, customer);
        }
    }

    pub fn help_text(&self) -> &'static str {
        if self.filter_active {
            "[Esc/Enter] done  type to filter"
        } else if self.detail.is_some() {
            "[Esc] close"
        } else {
            "[Enter] details  [/] search  [1-5] sort  [j/k/h/l] navigate"
        }
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &DataTable<Customer> {
        &self.table
    }
}

fn render_customer_detail(frame: &mut Frame, area: Rect, customer: &Customer) {
    let rect = centered_rect(55, 45, area);
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(vec![
            Span::styled("Email:          ", Style::default().fg(Color::DarkGray)),
            Span::raw(customer.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Registered:     ", Style::default().fg(Color::DarkGray)),
            Span::raw(customer.registration_date.clone()),
        ]),
        Line::from(vec![
            Span::styled("Orders:         ", Style::default().fg(Color::DarkGray)),
            Span::raw(customer.total_orders.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Lifetime value: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_money(customer.lifetime_value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Last seen:      ", Style::default().fg(Color::DarkGray)),
            Span::raw(customer.last_seen.clone()),
        ]),
    ];

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", customer.name),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> CustomersView {
        CustomersView::new(sample::customers()).unwrap()
    }

    #[test]
    fn test_filter_narrows_customers() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('/')), &bindings);
        for c in "alice".chars() {
            view.handle_input(key(KeyCode::Char(c)), &bindings);
        }
        assert_eq!(view.table().filtered_count(), 1);
    }

    #[test]
    fn test_enter_opens_and_esc_closes_detail() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Enter), &bindings);
        assert!(view.is_capturing_input());
        view.handle_input(key(KeyCode::Esc), &bindings);
        assert!(!view.is_capturing_input());
    }

    #[test]
    fn test_last_seen_column_is_not_sortable() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('6')), &bindings);
        assert!(view.table().sort().is_none());
    }
}
