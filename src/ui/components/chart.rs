//! Chart panel component.
//!
//! A titled panel that renders one analytics series as a line chart, bar
//! chart, or pie-style breakdown, dispatching on [`ChartKind`]. Pie charts
//! become proportion bars: terminals have no arcs.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::data::SeriesPoint;

/// Colors cycled through pie segments and bars.
const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// The kind of chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Connected line over the series.
    Line,
    /// One bar per point.
    Bar,
    /// Proportional breakdown of the series total.
    Pie,
}

/// A titled chart over one series.
pub struct ChartPanel {
    title: String,
    kind: ChartKind,
    points: Vec<SeriesPoint>,
}

impl ChartPanel {
    /// Create a chart panel.
    pub fn new(title: impl Into<String>, kind: ChartKind, points: Vec<SeriesPoint>) -> Self {
        Self {
            title: title.into(),
            kind,
            points,
        }
    }

    /// The chart kind.
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// The series behind the chart.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Render the panel into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self.kind {
            ChartKind::Line => self.render_line(frame, area),
            ChartKind::Bar => self.render_bar(frame, area),
            ChartKind::Pie => self.render_pie(frame, area),
        }
    }

    fn block(&self) -> Block<'_> {
        Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    fn render_line(&self, frame: &mut Frame, area: Rect) {
        let data: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();

        let max_y = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(0.0_f64, f64::max)
            .max(1.0);
        let max_x = (self.points.len().saturating_sub(1)) as f64;

        let x_labels: Vec<Span> = match self.points.as_slice() {
            [] => Vec::new(),
            [only] => vec![Span::raw(only.label.clone())],
            [first, .., last] => vec![
                Span::raw(first.label.clone()),
                Span::raw(last.label.clone()),
            ],
        };
        let y_labels = vec![
            Span::raw("0"),
            Span::raw(format!("{:.0}", max_y / 2.0)),
            Span::raw(format!("{:.0}", max_y)),
        ];

        let datasets = vec![Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data)];

        let chart = Chart::new(datasets)
            .block(self.block())
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, max_x.max(1.0)])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, max_y])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn render_bar(&self, frame: &mut Frame, area: Rect) {
        let data: Vec<(&str, u64)> = self
            .points
            .iter()
            .map(|p| (p.label.as_str(), p.value.max(0.0) as u64))
            .collect();

        let bar_width = if self.points.is_empty() {
            3
        } else {
            // Leave a gap column per bar; borders take 2 columns.
            ((area.width.saturating_sub(2) as usize / self.points.len()).saturating_sub(1))
                .clamp(1, 9) as u16
        };

        let chart = BarChart::default()
            .block(self.block())
            .data(&data)
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

        frame.render_widget(chart, area);
    }

    fn render_pie(&self, frame: &mut Frame, area: Rect) {
        let total: f64 = self.points.iter().map(|p| p.value).sum();
        let label_width = self
            .points
            .iter()
            .map(|p| p.label.len())
            .max()
            .unwrap_or(0);
        // Inner width minus label, percentage column, and padding.
        let bar_space = (area.width as usize)
            .saturating_sub(2)
            .saturating_sub(label_width + 8);

        let lines: Vec<Line> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let share = if total > 0.0 { p.value / total } else { 0.0 };
                let filled = (share * bar_space as f64).round() as usize;
                let color = SERIES_COLORS[i % SERIES_COLORS.len()];
                Line::from(vec![
                    Span::raw(format!("{:<width$} ", p.label, width = label_width)),
                    Span::styled(
                        format!("{:>4.0}% ", share * 100.0),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled("█".repeat(filled), Style::default().fg(color)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(self.block()), area);
    }
}
