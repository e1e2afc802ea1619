//! Orders page: the order table, a detail modal, and a status picker.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

use crate::data::{format_money, Order, OrderStatus};
use crate::events::KeyBindings;
use crate::table::{CellValue, Column, DataTable, TableError};
use crate::ui::components::{centered_rect, render_data_table, SelectAction, SelectDialog};
use crate::ui::theme::order_status_color;

use super::{handle_filter_keys, handle_table_keys};

/// A change requested by the orders page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdersAction {
    /// Set the status of the order with this id.
    UpdateStatus {
        order_id: String,
        status: OrderStatus,
    },
}

enum Modal {
    None,
    Detail(Order),
    StatusPicker { order_id: String, dialog: SelectDialog },
}

pub struct OrdersView {
    table: DataTable<Order>,
    filter_active: bool,
    modal: Modal,
}

impl OrdersView {
    pub fn new(orders: Vec<Order>) -> Result<Self, TableError> {
        let columns = vec![
            Column::new("id", "Order", |o: &Order| CellValue::text(o.id.clone())),
            Column::new("customer", "Customer", |o: &Order| {
                CellValue::text(o.customer_name.clone())
            }),
            Column::new("date", "Date", |o: &Order| CellValue::text(o.date.clone())),
            Column::new("status", "Status", |o: &Order| {
                CellValue::text(o.status.name())
            }),
            Column::new("total", "Total", |o: &Order| CellValue::money(o.total)),
        ];
        Ok(Self {
            table: DataTable::new(columns, orders)?
                .with_filter_placeholder("Press / to search orders by ID, customer, status..."),
            filter_active: false,
            modal: Modal::None,
        })
    }

    /// Replace the backing rows after a store mutation.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.table.set_rows(orders);
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
        self.filter_active || !matches!(self.modal, Modal::None)
    }

    pub fn handle_input(&mut self, key: KeyEvent, bindings: &KeyBindings) -> Option<OrdersAction> {
        match &mut self.modal {
            Modal::Detail(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.modal = Modal::None;
                }
                return None;
            }
            Modal::StatusPicker { order_id, dialog } => {
                return match dialog.handle_input(key) {
                    Some(SelectAction::Choose(index)) => {
                        let order_id = order_id.clone();
                        let status = OrderStatus::all()[index];
                        self.modal = Modal::None;
                        debug!(%order_id, status = status.name(), "status picked");
                        Some(OrdersAction::UpdateStatus { order_id, status })
                    }
                    Some(SelectAction::Cancel) => {
                        self.modal = Modal::None;
                        None
                    }
                    None => None,
                };
            }
            Modal::None => {}
        }

        if self.filter_active {
            self.filter_active = handle_filter_keys(&mut self.table, &key);
            return None;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.filter_active = true;
            }
            KeyCode::Enter => {
                if let Some(order) = self.table.selected_row() {
                    self.modal = Modal::Detail(order.clone());
                }
            }
            KeyCode::Char('u') => {
                if let Some(order) = self.table.selected_row() {
                    let initial = OrderStatus::all()
                        .iter()
                        .position(|s| *s == order.status)
                        .unwrap_or(0);
                    let options = OrderStatus::all().iter().map(|s| s.name().to_string()).collect();
                    self.modal = Modal::StatusPicker {
                        order_id: order.id.clone(),
                        dialog: SelectDialog::new("Update Status", options, initial),
                    };
                }
            }
            _ => {
                handle_table_keys(&mut self.table, &key, bindings);
            }
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_data_table(
            frame,
            area,
            "Orders",
            &self.table,
            self.filter_active,
            |order: &Order, column_id: &str| {
                (column_id == "status")
                    .then(|| Style::default().fg(order_status_color(order.status)))
            },
        );

        match &self.modal {
            Modal::Detail(order) => render_order_detail(frame, area, order),
            Modal::StatusPicker { dialog, .. } => dialog.render(frame, area),
            Modal::None => {}
        }
    }

    pub fn help_text(&self) -> &'static str {
        if self.filter_active {
            "[Esc/Enter] done  type to filter"
        } else if matches!(self.modal, Modal::StatusPicker { .. }) {
            "[j/k] move  [Enter] choose  [Esc] cancel"
        } else if matches!(self.modal, Modal::Detail(_)) {
            "[Esc] close"
        } else {
            "[Enter] details  [u] update status  [/] search  [1-5] sort  [j/k/h/l] navigate"
        }
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &DataTable<Order> {
        &self.table
    }
}

fn render_order_detail(frame: &mut Frame, area: Rect, order: &Order) {
    let rect = centered_rect(60, 60, area);
    frame.render_widget(Clear, rect);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Customer: ", Style::default().fg(Color::DarkGray)),
            Span::raw(order.customer_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Email:    ", Style::default().fg(Color::DarkGray)),
            Span::raw(order.customer_email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Date:     ", Style::default().fg(Color::DarkGray)),
            Span::raw(order.date.clone()),
        ]),
        Line::from(vec![
            Span::styled("Status:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                order.status.name(),
                Style::default().fg(order_status_color(order.status)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Items",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for item in &order.items {
        lines.push(Line::from(format!(
            "  {} x{}  {}",
            item.name,
            item.quantity,
            format_money(item.price)
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_money(order.total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    let block = Block::default()
        .title(Span::styled(
            format!(" Order {} ", order.id),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        rect,
    );
}
