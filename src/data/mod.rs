//! Domain types, sample datasets, and the in-memory store.
//!
//! All data is hardcoded sample data rebuilt on every launch; mutations
//! applied through [`Store`] live only in process memory.

pub mod sample;
mod store;
mod types;

pub use store::{ProductDraft, Store};
pub use types::{
    format_money, Customer, LineItem, Order, OrderStatus, Product, ProductStatus, SeriesPoint,
    StatSummary, Trend,
};
