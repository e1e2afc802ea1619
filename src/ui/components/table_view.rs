//! Renderer for [`DataTable`] state.
//!
//! Draws the global filter line, the header row with sort arrows, the
//! current page of rows with a cursor highlight, the "No results."
//! fallback, and a footer with row and page counts. All state lives in the
//! [`DataTable`]; this module only reflects it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::table::DataTable;

/// Render a full data table panel: filter line, grid, footer.
///
/// `filter_active` marks the filter line as receiving keystrokes (the view
/// is in insert mode behind '/'). `cell_style` may override the style of
/// individual cells, keyed by row and column id; views use it for status
/// badges.
pub fn render_data_table<T, F>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &DataTable<T>,
    filter_active: bool,
    cell_style: F,
) where
    F: Fn(&T, &str) -> Option<Style>,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_filter_line(frame, chunks[0], table, filter_active);
    render_grid(frame, chunks[1], title, table, &cell_style);
    render_footer(frame, chunks[2], table);
}

/// Render the global filter line as a vim-style "/query" prompt.
fn render_filter_line<T>(frame: &mut Frame, area: Rect, table: &DataTable<T>, active: bool) {
    let query = table.global_filter();

    let (text, style) = if active {
        (
            format!("/{}", query),
            Style::default().fg(Color::Yellow),
        )
    } else if query.is_empty() {
        (
            table
                .filter_placeholder()
                .unwrap_or("Press / to search all columns")
                .to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            format!("/{} [{} matches]", query, table.filtered_count()),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text).style(style), area);

    if active {
        // Byte length overshoots on multibyte input; the cursor sits at a
        // character column.
        let offset = query.chars().count() as u16;
        frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y));
    }
}

/// Render the grid itself, or the empty-result fallback.
fn render_grid<T, F>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &DataTable<T>,
    cell_style: &F,
) where
    F: Fn(&T, &str) -> Option<Style>,
{
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if table.no_results() {
        frame.render_widget(
            Paragraph::new("No results.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let header_cells: Vec<Cell> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let mut spans = Vec::new();
            // Digit hint only where pressing the digit does something.
            if column.is_sortable() {
                spans.push(Span::styled(
                    format!("{} ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                column.header().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            if let Some(sort) = table.sort() {
                if sort.column == column.id() {
                    spans.push(Span::styled(
                        format!(" {}", sort.direction.arrow()),
                        Style::default().fg(Color::Yellow),
                    ));
                }
            }
            Cell::from(Line::from(spans))
        })
        .collect();
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = table
        .page_rows()
        .enumerate()
        .map(|(i, row)| {
            let cells: Vec<Cell> = table
                .columns()
                .iter()
                .map(|column| {
                    let text = column.value(row).to_string();
                    match cell_style(row, column.id()) {
                        Some(style) => Cell::from(Span::styled(text, style)),
                        None => Cell::from(text),
                    }
                })
                .collect();
            let row = Row::new(cells).height(1);
            if i == table.selected() {
                row.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                row
            }
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, table.columns().len() as u32); table.columns().len()];

    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

/// Render the pagination footer.
fn render_footer<T>(frame: &mut Frame, area: Rect, table: &DataTable<T>) {
    frame.render_widget(
        Paragraph::new(footer_text(table)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Build the footer text: row counts, page position, page size.
fn footer_text<T>(table: &DataTable<T>) -> String {
    format!(
        "{} of {} row(s)  |  Page {}/{}  |  {} per page [-/+]",
        table.filtered_count(),
        table.rows().len(),
        if table.page_count() == 0 {
            0
        } else {
            table.page_index() + 1
        },
        table.page_count(),
        table.page_size(),
    )
}
