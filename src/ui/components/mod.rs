//! Reusable UI components.

mod chart;
mod help_bar;
mod input;
mod modal;
mod stat_card;
mod table_view;
mod toast;

pub use chart::{ChartKind, ChartPanel};
pub use help_bar::render_help_bar;
pub use input::TextInput;
pub use modal::{centered_rect, ConfirmAction, ConfirmDialog, SelectAction, SelectDialog};
pub use stat_card::StatCard;
pub use table_view::render_data_table;
pub use toast::ToastStack;
