//! Domain types for the store dashboard.

use std::fmt;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// All statuses, in the order they appear in pickers.
    pub fn all() -> [OrderStatus; 6] {
        [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ]
    }

    /// Display name for this status.
    pub fn name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single item line within an order.
#[derive(Debug, Clone)]
pub struct LineItem {
    /// Item name.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price in dollars.
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// A customer order.
#[derive(Debug, Clone)]
pub struct Order {
    /// Order id, e.g. "ORD001".
    pub id: String,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Order date (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Current status.
    pub status: OrderStatus,
    /// Order total in dollars.
    pub total: f64,
    /// The ordered items.
    pub items: Vec<LineItem>,
}

/// Publication status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Published,
    Draft,
    Archived,
}

impl ProductStatus {
    /// All statuses, in the order they appear in pickers.
    pub fn all() -> [ProductStatus; 3] {
        [
            ProductStatus::Published,
            ProductStatus::Draft,
            ProductStatus::Archived,
        ]
    }

    /// Display name for this status.
    pub fn name(&self) -> &'static str {
        match self {
            ProductStatus::Published => "Published",
            ProductStatus::Draft => "Draft",
            ProductStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    /// Product id, e.g. "PROD001".
    pub id: String,
    /// Product name.
    pub name: String,
    /// Stock-keeping unit code.
    pub sku: String,
    /// Category name.
    pub category: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Units in stock.
    pub stock: u32,
    /// Publication status.
    pub status: ProductStatus,
    /// Optional description.
    pub description: String,
}

/// A registered customer.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Customer id, e.g. "CUST001".
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Registration date (ISO `YYYY-MM-DD`).
    pub registration_date: String,
    /// Number of orders placed.
    pub total_orders: u32,
    /// Lifetime spend in dollars.
    pub lifetime_value: f64,
    /// Human-readable last activity, e.g. "2 days ago".
    pub last_seen: String,
}

/// One labeled point in an analytics series.
#[derive(Debug, Clone)]
pub struct SeriesPoint {
    /// Category label (month name, traffic source, ...).
    pub label: String,
    /// The value at this point.
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Direction of a headline-metric trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// A headline metric for the overview page.
#[derive(Debug, Clone)]
pub struct StatSummary {
    /// Metric title, e.g. "Total Revenue".
    pub title: String,
    /// Formatted value, e.g. "$45,231.89".
    pub value: String,
    /// Short context line.
    pub description: String,
    /// Trend direction.
    pub trend: Trend,
}

impl StatSummary {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
        trend: Trend,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: description.into(),
            trend,
        }
    }
}

/// Format a dollar amount for display.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}
