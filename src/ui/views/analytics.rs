//! Analytics page: sales and traffic charts plus a product performance
//! table.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::data::sample;
use crate::events::KeyBindings;
use crate::table::{CellValue, Column, DataTable, TableError};
use crate::ui::components::{render_data_table, ChartKind, ChartPanel};

use super::{handle_filter_keys, handle_table_keys};

/// One row of the product performance table.
#[derive(Debug, Clone)]
pub struct PerformanceRow {
    pub product: String,
    pub units_sold: u32,
    pub revenue: f64,
}

pub struct AnalyticsView {
    sales: ChartPanel,
    traffic: ChartPanel,
    table: DataTable<PerformanceRow>,
    filter_active: bool,
}

impl AnalyticsView {
    pub fn new() -> Result<Self, TableError> {
        let rows = sample::product_performance()
            .into_iter()
            .map(|(product, units_sold, revenue)| PerformanceRow {
                product,
                units_sold,
                revenue,
            })
            .collect();
        let columns = vec![
            Column::new("product", "Product", |r: &PerformanceRow| {
                CellValue::text(r.product.clone())
            }),
            Column::new("units", "Units Sold", |r: &PerformanceRow| {
                CellValue::number(r.units_sold as f64)
            }),
            Column::new("revenue", "Revenue", |r: &PerformanceRow| {
                CellValue::money(r.revenue)
            }),
        ];
        Ok(Self {
            sales: ChartPanel::new(
                "Monthly Sales Trend",
                ChartKind::Bar,
                sample::analytics_monthly_sales(),
            ),
            traffic: ChartPanel::new("Traffic Sources", ChartKind::Pie, sample::traffic_sources()),
            table: DataTable::new(columns, rows)?,
            filter_active: false,
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

    /// Whether the filter line is capturing input.
    pub fn is_capturing_input(&self) -> bool {
        self.filter_active
    }

    pub fn handle_input(&mut self, key: KeyEvent, bindings: &KeyBindings) {
        if self.filter_active {
            self.filter_active = handle_filter_keys(&mut self.table, &key);
            return;
        }
        match key.code {
            KeyCode::Char('/') => {
                self.filter_active = true;
            }
            _ => {
                handle_table_keys(&mut self.table, &key, bindings);
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);
        self.sales.render(frame, charts[0]);
        self.traffic.render(frame, charts[1]);

        render_data_table(
            frame,
            rows[1],
            "Product Performance",
            &self.table,
            self.filter_active,
            |_: &PerformanceRow, _: &str| None,
        );
    }

    pub fn help_text(&self) -> &'static str {
        if self.filter_active {
            "[Esc/Enter] done  type to filter"
        } else {
            "[/] search  [1-3] sort  [j/k/h/l] navigate"
        }
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &DataTable<PerformanceRow> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_performance_rows_load() {
        let view = AnalyticsView::new().unwrap();
        assert_eq!(view.table().filtered_count(), 4);
    }

    #[test]
    fn test_revenue_sorts_numerically() {
        let mut view = AnalyticsView::new().unwrap();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('3')), &bindings);

        let revenues: Vec<f64> = view
            .table()
            .page_rows()
            .map(|r| r.revenue)
            .collect();
        let mut sorted = revenues.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(revenues, sorted);
    }
}
