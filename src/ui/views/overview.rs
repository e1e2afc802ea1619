//! Dashboard overview: headline stats plus sales and device charts.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::data::{sample, StatSummary};
use crate::ui::components::{ChartKind, ChartPanel, StatCard};

pub struct OverviewView {
    stats: Vec<StatSummary>,
    sales: ChartPanel,
    devices: ChartPanel,
}

impl OverviewView {
    pub fn new() -> Self {
        Self {
            stats: sample::overview_stats(),
            sales: ChartPanel::new("Monthly Sales", ChartKind::Line, sample::monthly_sales()),
            devices: ChartPanel::new("Device Share", ChartKind::Pie, sample::device_share()),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(8)])
            .split(area);

        let card_slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, self.stats.len().max(1) as u32);
                self.stats.len().max(1)
            ])
            .split(rows[0]);
        for (summary, slot) in self.stats.iter().zip(card_slots.iter()) {
            StatCard::new(summary).render(frame, *slot);
        }

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        self.sales.render(frame, charts[0]);
        self.devices.render(frame, charts[1]);
    }

    pub fn help_text(&self) -> &'static str {
        "[Tab] next page  [Shift+Tab] previous page  [q] quit"
    }
}

impl Default for OverviewView {
    fn default() -> Self {
        Self::new()
    }
}
