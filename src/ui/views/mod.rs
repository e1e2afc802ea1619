//! Application views (pages).
//!
//! One view per dashboard page. Table pages share the same key scheme:
//! j/k or arrows move the cursor, h/l or arrows flip pages, g/G jump to
//! the first/last page, -/+ steps the page size through the allowed
//! choices, digits toggle sorting on the numbered column, and '/' edits
//! the global filter.

mod analytics;
mod customers;
mod orders;
mod overview;
mod products;

use crossterm::event::{KeyCode, KeyEvent};

pub use analytics::AnalyticsView;
pub use customers::CustomersView;
pub use orders::{OrdersAction, OrdersView};
pub use overview::OverviewView;
pub use products::{ProductsAction, ProductsView};

use crate::events::KeyBindings;
use crate::table::{DataTable, PAGE_SIZE_CHOICES};

/// Handle the shared table-page keys. Returns true if the key was consumed.
fn handle_table_keys<T>(table: &mut DataTable<T>, key: &KeyEvent, bindings: &KeyBindings) -> bool {
    if bindings.is_down(key) {
        table.select_next();
        return true;
    }
    if bindings.is_up(key) {
        table.select_previous();
        return true;
    }
    if bindings.is_left(key) {
        table.previous_page();
        return true;
    }
    if bindings.is_right(key) {
        table.next_page();
        return true;
    }

    match key.code {
        KeyCode::Char('g') => {
            table.first_page();
            true
        }
        KeyCode::Char('G') => {
            table.last_page();
            true
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            step_page_size(table, 1);
            true
        }
        KeyCode::Char('-') => {
            step_page_size(table, -1);
            true
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(id) = table.columns().get(index).map(|col| col.id().to_string()) {
                table.toggle_sort(&id);
            }
            true
        }
        _ => false,
    }
}

/// Move the page size one step through [`PAGE_SIZE_CHOICES`].
fn step_page_size<T>(table: &mut DataTable<T>, delta: i32) {
    let position = PAGE_SIZE_CHOICES
        .iter()
        .position(|&s| s == table.page_size())
        .unwrap_or(0) as i32;
    let next = position + delta;
    if next >= 0 && (next as usize) < PAGE_SIZE_CHOICES.len() {
        table.set_page_size(PAGE_SIZE_CHOICES[next as usize]);
    }
}

/// Handle keys while the filter line is being edited.
///
/// Characters and deletions re-derive the filtered view live. Returns
/// whether the filter stays active (Esc and Enter leave edit mode).
fn handle_filter_keys<T>(table: &mut DataTable<T>, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => false,
        KeyCode::Char(c) => {
            let mut query = table.global_filter().to_string();
            query.push(c);
            table.set_global_filter(query);
            true
        }
        KeyCode::Backspace => {
            let mut query = table.global_filter().to_string();
            query.pop();
            table.set_global_filter(query);
            true
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, Column};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_table() -> DataTable<u32> {
        let columns = vec![
            Column::new("n", "N", |v: &u32| CellValue::number(*v as f64)),
            Column::new("double", "Double", |v: &u32| {
                CellValue::number((*v * 2) as f64)
            }),
        ];
        DataTable::new(columns, (0..25).collect()).unwrap()
    }

    #[test]
    fn test_table_keys_navigate_pages() {
        let mut table = sample_table();
        let bindings = KeyBindings::default();

        assert!(handle_table_keys(&mut table, &key(KeyCode::Char('l')), &bindings));
        assert_eq!(table.page_index(), 1);
        assert!(handle_table_keys(&mut table, &key(KeyCode::Char('h')), &bindings));
        assert_eq!(table.page_index(), 0);
        assert!(handle_table_keys(&mut table, &key(KeyCode::Char('G')), &bindings));
        assert_eq!(table.page_index(), 2);
        assert!(handle_table_keys(&mut table, &key(KeyCode::Char('g')), &bindings));
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn test_table_keys_move_cursor() {
        let mut table = sample_table();
        let bindings = KeyBindings::default();
        handle_table_keys(&mut table, &key(KeyCode::Down), &bindings);
        handle_table_keys(&mut table, &key(KeyCode::Char('j')), &bindings);
        assert_eq!(table.selected(), 2);
        handle_table_keys(&mut table, &key(KeyCode::Char('k')), &bindings);
        assert_eq!(table.selected(), 1);
    }

    #[test]
    fn test_table_keys_step_page_size() {
        let mut table = sample_table();
        let bindings = KeyBindings::default();
        handle_table_keys(&mut table, &key(KeyCode::Char('+')), &bindings);
        assert_eq!(table.page_size(), 20);
        handle_table_keys(&mut table, &key(KeyCode::Char('-')), &bindings);
        handle_table_keys(&mut table, &key(KeyCode::Char('-')), &bindings);
        assert_eq!(table.page_size(), 5);
        // Stepping below the smallest choice is a no-op.
        handle_table_keys(&mut table, &key(KeyCode::Char('-')), &bindings);
        assert_eq!(table.page_size(), 5);
    }

    #[test]
    fn test_table_keys_toggle_sort_by_digit() {
        let mut table = sample_table();
        let bindings = KeyBindings::default();
        handle_table_keys(&mut table, &key(KeyCode::Char('2')), &bindings);
        assert_eq!(table.sort().unwrap().column, "double");
        // A digit past the last column is consumed but changes nothing.
        handle_table_keys(&mut table, &key(KeyCode::Char('9')), &bindings);
        assert_eq!(table.sort().unwrap().column, "double");
    }

    #[test]
    fn test_filter_keys_edit_live() {
        let mut table = sample_table();
        assert!(handle_filter_keys(&mut table, &key(KeyCode::Char('2'))));
        assert!(handle_filter_keys(&mut table, &key(KeyCode::Char('4'))));
        assert_eq!(table.global_filter(), "24");
        assert!(handle_filter_keys(&mut table, &key(KeyCode::Backspace)));
        assert_eq!(table.global_filter(), "2");
    }

    #[test]
    fn test_filter_keys_exit_on_esc_and_enter() {
        let mut table = sample_table();
        assert!(!handle_filter_keys(&mut table, &key(KeyCode::Esc)));
        assert!(!handle_filter_keys(&mut table, &key(KeyCode::Enter)));
    }
}
