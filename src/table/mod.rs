//! Generic sortable, filterable, paginated data table.
//!
//! [`DataTable`] owns the sorting, filtering, and pagination state for an
//! in-memory collection of rows and derives the visible page from it. The
//! row type is opaque: the table only sees rows through the accessor
//! functions supplied in each [`Column`] definition, so any record shape
//! works. Every page view in the application drives one of these.
//!
//! The derived view is recomputed on each state change as a pure pipeline:
//! filter (case-insensitive substring match across filterable columns),
//! then a stable sort on the active column, then the page slice.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Page sizes the user can select. Requests outside this set are rejected.
pub const PAGE_SIZE_CHOICES: [usize; 6] = [5, 10, 20, 30, 40, 50];

/// Page size used when the caller does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Errors raised when a table is constructed from invalid column definitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The column list was empty.
    #[error("table requires at least one column")]
    NoColumns,

    /// Two columns share the same id.
    #[error("duplicate column id '{0}'")]
    DuplicateColumn(String),
}

/// A displayable cell value produced by a column accessor.
///
/// Keeping numbers distinct from text lets the sort comparator compare
/// numerically instead of lexicographically (where "10" < "9").
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text content, compared ordinally (byte-wise, locale-insensitive).
    Text(String),
    /// Numeric content, compared numerically.
    Number(f64),
    /// A dollar amount: displays as "$1.23" but compares numerically.
    Money(f64),
}

impl CellValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Create a numeric value.
    pub fn number(value: impl Into<f64>) -> Self {
        CellValue::Number(value.into())
    }

    /// Create a dollar amount.
    pub fn money(value: impl Into<f64>) -> Self {
        CellValue::Money(value.into())
    }

    /// The numeric content, if this value is numeric.
    fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Text(_) => None,
            CellValue::Number(n) | CellValue::Money(n) => Some(*n),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Money(n) => write!(f, "${:.2}", n),
        }
    }
}

/// Compare two cell values.
///
/// Numeric values compare numerically; anything else falls back to ordinal
/// comparison of the displayed strings.
fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.to_string().as_bytes().cmp(b.to_string().as_bytes()),
    }
}

/// A column definition: how to pull a displayable value out of a row,
/// plus the header label and sort/filter participation flags.
pub struct Column<T> {
    id: String,
    header: String,
    accessor: Box<dyn Fn(&T) -> CellValue>,
    sortable: bool,
    filterable: bool,
}

impl<T> Column<T> {
    /// Create a column with the given id, header label, and accessor.
    ///
    /// Columns are sortable and filterable by default.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Box::new(accessor),
            sortable: true,
            filterable: true,
        }
    }

    /// Set whether this column participates in sorting.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set whether this column participates in the global filter.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Get the column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Check if this column can be sorted.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Check if this column participates in the global filter.
    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Extract the cell value for a row.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Arrow glyph for rendering in a column header.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort: one column id and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Id of the sorted column.
    pub column: String,
    /// Sort direction.
    pub direction: SortDirection,
}

/// A sortable, filterable, paginated view over an in-memory row collection.
///
/// State transitions are driven by discrete user actions and the derived
/// view (filtered + sorted row indices) is recomputed synchronously on each
/// of them. The page index is always clamped to the valid range after any
/// change to the filter or page size.
pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    global_filter: String,
    filter_placeholder: Option<String>,
    sort: Option<Sort>,
    page_index: usize,
    page_size: usize,
    /// Filtered + sorted indices into `rows`.
    view: Vec<usize>,
    /// Cursor position within the current page.
    selected: usize,
}

impl<T> DataTable<T> {
    /// Create a table over the given columns and rows.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the column list is empty or contains
    /// duplicate ids.
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.id == column.id) {
                return Err(TableError::DuplicateColumn(column.id.clone()));
            }
        }

        let mut table = Self {
            columns,
            rows,
            global_filter: String::new(),
            filter_placeholder: None,
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            view: Vec::new(),
            selected: 0,
        };
        table.derive();
        Ok(table)
    }

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Get the full (unfiltered) row collection.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Replace the row collection, keeping filter and sort state.
    ///
    /// The page index and cursor are re-clamped against the new data.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.derive();
    }

    /// Set the hint shown on the empty filter line, replacing the generic
    /// one.
    pub fn with_filter_placeholder(mut self, text: impl Into<String>) -> Self {
        self.filter_placeholder = Some(text.into());
        self
    }

    /// Get the filter-line hint, if one was set.
    pub fn filter_placeholder(&self) -> Option<&str> {
        self.filter_placeholder.as_deref()
    }

    /// Get the current global filter string.
    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    /// Replace the global filter string and reset to the first page.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.global_filter = text.into();
        self.page_index = 0;
        self.selected = 0;
        self.derive();
    }

    /// Get the active sort, if any.
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Advance the sort cycle on a column.
    ///
    /// Repeated toggles on the same column cycle ascending → descending →
    /// unsorted. Toggling a different column clears the prior sort and
    /// starts at ascending. Unknown or non-sortable columns are a no-op.
    /// The page index is unaffected: sorting never changes the row count.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id == column_id && c.sortable);
        if !sortable {
            return;
        }

        self.sort = match &self.sort {
            Some(sort) if sort.column == column_id => match sort.direction {
                SortDirection::Ascending => Some(Sort {
                    column: column_id.to_string(),
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Sort {
                column: column_id.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
        self.derive();
    }

    /// Get the current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size.
    ///
    /// Only values from [`PAGE_SIZE_CHOICES`] are accepted; anything else is
    /// rejected with no state change. Returns whether the size was applied.
    /// The page index is re-clamped against the new page count.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_CHOICES.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.clamp_page_index();
        self.clamp_selection();
        true
    }

    /// Get the current 0-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Jump to a page, clamped to the valid range.
    pub fn set_page_index(&mut self, index: usize) {
        let max = self.page_count().saturating_sub(1);
        self.page_index = index.min(max);
        self.clamp_selection();
    }

    /// Whether a next page exists.
    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Whether a previous page exists.
    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.page_index += 1;
            self.clamp_selection();
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.page_index -= 1;
            self.clamp_selection();
        }
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) {
        self.set_page_index(self.page_count().saturating_sub(1));
    }

    /// Number of rows that pass the current filter.
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Number of pages for the current filter and page size.
    pub fn page_count(&self) -> usize {
        (self.view.len() + self.page_size - 1) / self.page_size
    }

    /// Whether the filtered set is empty (the "No results" display state).
    pub fn no_results(&self) -> bool {
        self.view.is_empty()
    }

    /// Indices (into the full collection) of the rows on the current page.
    pub fn page_indices(&self) -> &[usize] {
        let start = (self.page_index * self.page_size).min(self.view.len());
        let end = (start + self.page_size).min(self.view.len());
        &self.view[start..end]
    }

    /// The rows visible on the current page, in display order.
    pub fn page_rows(&self) -> impl Iterator<Item = &T> {
        self.page_indices().iter().map(move |&i| &self.rows[i])
    }

    /// Cursor position within the current page.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The row under the cursor, if the page is non-empty.
    pub fn selected_row(&self) -> Option<&T> {
        self.page_indices().get(self.selected).map(|&i| &self.rows[i])
    }

    /// Move the cursor down one row within the page.
    pub fn select_next(&mut self) {
        let len = self.page_indices().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the cursor up one row within the page.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Recompute the derived view: filter, then stable sort, then clamp.
    fn derive(&mut self) {
        let query = self.global_filter.to_lowercase();
        let mut view: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                query.is_empty()
                    || self
                        .columns
                        .iter()
                        .filter(|c| c.is_filterable())
                        .any(|c| c.value(row).to_string().to_lowercase().contains(&query))
            })
            .map(|(i, _)| i)
            .collect();

        if let Some(sort) = &self.sort {
            if let Some(column) = self.columns.iter().find(|c| c.id == sort.column) {
                let rows = &self.rows;
                let descending = sort.direction == SortDirection::Descending;
                // sort_by is stable, so ties keep filtered order.
                view.sort_by(|&a, &b| {
                    let ord = compare_cells(&column.value(&rows[a]), &column.value(&rows[b]));
                    if descending {
                        ord.reverse()
                    } else {
                        ord
                    }
                });
            }
        }

        self.view = view;
        self.clamp_page_index();
        self.clamp_selection();
    }

    /// Clamp the page index to `[0, max(0, page_count - 1)]`.
    fn clamp_page_index(&mut self) {
        let max = self.page_count().saturating_sub(1);
        if self.page_index > max {
            self.page_index = max;
        }
    }

    /// Keep the cursor inside the current page slice.
    fn clamp_selection(&mut self) {
        let len = self.page_indices().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        price: f64,
        stock: i64,
    }

    fn item(name: &str, price: f64, stock: i64) -> Item {
        Item {
            name: name.to_string(),
            price,
            stock,
        }
    }

    fn item_columns() -> Vec<Column<Item>> {
        vec![
            Column::new("name", "Name", |i: &Item| CellValue::text(i.name.clone())),
            Column::new("price", "Price", |i: &Item| CellValue::number(i.price)),
            Column::new("stock", "Stock", |i: &Item| CellValue::number(i.stock as f64)),
        ]
    }

    fn numbered_items(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| item(&format!("Item {:02}", i), i as f64, 0))
            .collect()
    }

    #[test]
    fn test_new_rejects_empty_columns() {
        let result = DataTable::<Item>::new(Vec::new(), Vec::new());
        assert_eq!(result.err(), Some(TableError::NoColumns));
    }

    #[test]
    fn test_new_rejects_duplicate_column_ids() {
        let columns = vec![
            Column::new("name", "Name", |i: &Item| CellValue::text(i.name.clone())),
            Column::new("name", "Also Name", |i: &Item| CellValue::text(i.name.clone())),
        ];
        let result = DataTable::new(columns, Vec::new());
        assert_eq!(
            result.err(),
            Some(TableError::DuplicateColumn("name".to_string()))
        );
    }

    #[test]
    fn test_empty_collection_is_no_results_not_error() {
        let table = DataTable::new(item_columns(), Vec::new()).unwrap();
        assert!(table.no_results());
        assert_eq!(table.filtered_count(), 0);
        assert_eq!(table.page_count(), 0);
        assert_eq!(table.page_indices(), &[] as &[usize]);
        assert!(table.selected_row().is_none());
    }

    #[test]
    fn test_pagination_scenario_25_rows() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        assert_eq!(table.page_size(), 10);
        assert_eq!(table.page_count(), 3);

        // Page 0 shows rows 0-9.
        let names: Vec<String> = table.page_rows().map(|i| i.name.clone()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Item 00");
        assert_eq!(names[9], "Item 09");

        table.next_page();
        table.next_page();
        assert_eq!(table.page_index(), 2);
        // Last page holds the remaining 5 rows.
        let names: Vec<String> = table.page_rows().map(|i| i.name.clone()).collect();
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "Item 20");
        assert_eq!(names[4], "Item 24");

        // next_page at the last page is a no-op.
        assert!(!table.can_next_page());
        table.next_page();
        assert_eq!(table.page_index(), 2);
    }

    #[test]
    fn test_previous_page_at_first_is_noop() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        assert!(!table.can_previous_page());
        table.previous_page();
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn test_first_and_last_page() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.last_page();
        assert_eq!(table.page_index(), 2);
        table.first_page();
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn test_page_count_matches_ceiling_division() {
        let mut table = DataTable::new(item_columns(), numbered_items(20)).unwrap();
        // Exact multiple: final page is full.
        assert_eq!(table.page_count(), 2);
        table.last_page();
        assert_eq!(table.page_rows().count(), 10);

        assert!(table.set_page_size(30));
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.page_rows().count(), 20);
    }

    #[test]
    fn test_set_page_size_rejects_values_outside_choices() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.next_page();
        assert!(!table.set_page_size(7));
        assert!(!table.set_page_size(0));
        // State unchanged.
        assert_eq!(table.page_size(), 10);
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn test_set_page_size_clamps_page_index() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.last_page();
        assert_eq!(table.page_index(), 2);
        assert!(table.set_page_size(50));
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn test_global_filter_matches_filterable_columns() {
        let rows = vec![
            item("Alice Wonderland", 10.0, 1),
            item("Bob The Builder", 20.0, 2),
            item("Charlie Brown", 30.0, 3),
        ];
        let mut table = DataTable::new(item_columns(), rows).unwrap();
        table.set_global_filter("alice");

        assert_eq!(table.filtered_count(), 1);
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.page_index(), 0);
        assert_eq!(table.page_rows().next().unwrap().name, "Alice Wonderland");
    }

    #[test]
    fn test_filter_placeholder_defaults_to_none() {
        let table = DataTable::new(item_columns(), numbered_items(3)).unwrap();
        assert_eq!(table.filter_placeholder(), None);

        let table = DataTable::new(item_columns(), numbered_items(3))
            .unwrap()
            .with_filter_placeholder("Press / to search items by name...");
        assert_eq!(
            table.filter_placeholder(),
            Some("Press / to search items by name...")
        );
    }

    #[test]
    fn test_global_filter_is_case_insensitive() {
        let rows = vec![item("ALICE", 1.0, 0), item("alice", 2.0, 0), item("Bob", 3.0, 0)];
        let mut table = DataTable::new(item_columns(), rows).unwrap();
        table.set_global_filter("AlIcE");
        assert_eq!(table.filtered_count(), 2);
    }

    #[test]
    fn test_global_filter_skips_non_filterable_columns() {
        let columns = vec![
            Column::new("name", "Name", |i: &Item| CellValue::text(i.name.clone()))
                .filterable(false),
            Column::new("price", "Price", |i: &Item| CellValue::number(i.price)),
        ];
        let rows = vec![item("Alice", 10.0, 0), item("Bob", 20.0, 0)];
        let mut table = DataTable::new(columns, rows).unwrap();
        table.set_global_filter("alice");
        // Name is excluded from the global search, so nothing matches.
        assert!(table.no_results());

        table.set_global_filter("20");
        assert_eq!(table.filtered_count(), 1);
    }

    #[test]
    fn test_global_filter_matches_numeric_column_text() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.set_global_filter("24");
        assert_eq!(table.filtered_count(), 1);
        assert_eq!(table.page_rows().next().unwrap().name, "Item 24");
    }

    #[test]
    fn test_set_global_filter_resets_page_index() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.last_page();
        assert_eq!(table.page_index(), 2);
        table.set_global_filter("item");
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn test_clearing_filter_restores_full_collection() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.set_global_filter("item 01");
        assert_eq!(table.filtered_count(), 1);
        table.set_global_filter("");
        assert_eq!(table.filtered_count(), 25);
    }

    #[test]
    fn test_toggle_sort_cycles_asc_desc_none() {
        let rows = vec![item("b", 2.0, 0), item("a", 1.0, 0), item("c", 3.0, 0)];
        let mut table = DataTable::new(item_columns(), rows).unwrap();

        table.toggle_sort("price");
        assert_eq!(
            table.sort(),
            Some(&Sort {
                column: "price".to_string(),
                direction: SortDirection::Ascending,
            })
        );
        let prices: Vec<f64> = table.page_rows().map(|i| i.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);

        table.toggle_sort("price");
        assert_eq!(
            table.sort().map(|s| s.direction),
            Some(SortDirection::Descending)
        );
        let prices: Vec<f64> = table.page_rows().map(|i| i.price).collect();
        assert_eq!(prices, vec![3.0, 2.0, 1.0]);

        // Third toggle clears the sort and restores filtered order.
        table.toggle_sort("price");
        assert!(table.sort().is_none());
        let prices: Vec<f64> = table.page_rows().map(|i| i.price).collect();
        assert_eq!(prices, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_toggle_sort_on_new_column_resets_to_ascending() {
        let rows = vec![item("b", 2.0, 0), item("a", 1.0, 0)];
        let mut table = DataTable::new(item_columns(), rows).unwrap();

        table.toggle_sort("price");
        table.toggle_sort("price");
        assert_eq!(
            table.sort().map(|s| s.direction),
            Some(SortDirection::Descending)
        );

        table.toggle_sort("name");
        let sort = table.sort().unwrap();
        assert_eq!(sort.column, "name");
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_sort_non_sortable_column_is_noop() {
        let columns = vec![
            Column::new("name", "Name", |i: &Item| CellValue::text(i.name.clone()))
                .sortable(false),
            Column::new("price", "Price", |i: &Item| CellValue::number(i.price)),
        ];
        let mut table =
            DataTable::new(columns, vec![item("b", 2.0, 0), item("a", 1.0, 0)]).unwrap();
        table.toggle_sort("name");
        assert!(table.sort().is_none());
    }

    #[test]
    fn test_toggle_sort_unknown_column_is_noop() {
        let mut table = DataTable::new(item_columns(), numbered_items(3)).unwrap();
        table.toggle_sort("missing");
        assert!(table.sort().is_none());
    }

    #[test]
    fn test_numeric_sort_is_not_lexicographic() {
        let rows = vec![item("a", 10.0, 0), item("b", 9.0, 0), item("c", 100.0, 0)];
        let mut table = DataTable::new(item_columns(), rows).unwrap();
        table.toggle_sort("price");
        let prices: Vec<f64> = table.page_rows().map(|i| i.price).collect();
        assert_eq!(prices, vec![9.0, 10.0, 100.0]);
    }

    #[test]
    fn test_text_sort_is_ordinal() {
        let rows = vec![item("banana", 0.0, 0), item("Apple", 0.0, 0), item("apple", 0.0, 0)];
        let mut table = DataTable::new(item_columns(), rows).unwrap();
        table.toggle_sort("name");
        let names: Vec<String> = table.page_rows().map(|i| i.name.clone()).collect();
        // Byte-wise: uppercase sorts before lowercase.
        assert_eq!(names, vec!["Apple", "apple", "banana"]);
    }

    #[test]
    fn test_sort_ties_preserve_filtered_order() {
        let rows = vec![
            item("first", 5.0, 0),
            item("second", 5.0, 0),
            item("third", 5.0, 0),
        ];
        let mut table = DataTable::new(item_columns(), rows).unwrap();
        table.toggle_sort("price");
        let names: Vec<String> = table.page_rows().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_applies_after_filter() {
        let rows = vec![
            item("widget c", 3.0, 0),
            item("gadget", 99.0, 0),
            item("widget a", 2.0, 0),
            item("widget b", 1.0, 0),
        ];
        let mut table = DataTable::new(item_columns(), rows).unwrap();
        table.set_global_filter("widget");
        table.toggle_sort("price");
        let names: Vec<String> = table.page_rows().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["widget b", "widget a", "widget c"]);
    }

    #[test]
    fn test_sort_does_not_change_page_index() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.next_page();
        table.toggle_sort("price");
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn test_filter_shrink_clamps_page_index() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.last_page();
        // "item 1" matches Item 10-19, a single page.
        table.set_global_filter("item 1");
        assert_eq!(table.filtered_count(), 10);
        assert_eq!(table.page_index(), 0);
        assert_eq!(table.page_count(), 1);
    }

    #[test]
    fn test_set_rows_keeps_filter_and_reclamps() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.set_global_filter("item");
        table.last_page();
        table.set_rows(numbered_items(5));
        assert_eq!(table.global_filter(), "item");
        assert_eq!(table.filtered_count(), 5);
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn test_set_page_index_clamps() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        table.set_page_index(99);
        assert_eq!(table.page_index(), 2);
        table.set_page_index(1);
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn test_selection_moves_within_page() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        assert_eq!(table.selected(), 0);
        table.select_next();
        table.select_next();
        assert_eq!(table.selected(), 2);
        assert_eq!(table.selected_row().unwrap().name, "Item 02");

        table.select_previous();
        assert_eq!(table.selected(), 1);

        // Clamped at the top.
        table.select_previous();
        table.select_previous();
        assert_eq!(table.selected(), 0);
    }

    #[test]
    fn test_selection_clamped_on_short_last_page() {
        let mut table = DataTable::new(item_columns(), numbered_items(25)).unwrap();
        for _ in 0..9 {
            table.select_next();
        }
        assert_eq!(table.selected(), 9);
        table.last_page();
        // Last page has 5 rows; cursor lands on the final one.
        assert_eq!(table.selected(), 4);
        assert_eq!(table.selected_row().unwrap().name, "Item 24");
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::number(150.0).to_string(), "150");
        assert_eq!(CellValue::number(29.99).to_string(), "29.99");
        assert_eq!(CellValue::money(120.5).to_string(), "$120.50");
    }

    #[test]
    fn test_money_sorts_numerically_not_by_display() {
        // "$1000.00" < "$30.00" lexicographically; numeric compare must win.
        let columns = vec![
            Column::new("name", "Name", |i: &Item| CellValue::text(i.name.clone())),
            Column::new("price", "Price", |i: &Item| CellValue::money(i.price)),
        ];
        let rows = vec![item("a", 1000.0, 0), item("b", 30.0, 0)];
        let mut table = DataTable::new(columns, rows).unwrap();
        table.toggle_sort("price");
        let prices: Vec<f64> = table.page_rows().map(|i| i.price).collect();
        assert_eq!(prices, vec![30.0, 1000.0]);
    }
}
