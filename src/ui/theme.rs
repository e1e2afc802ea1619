//! Theme and styling configuration.

use ratatui::style::Color;

use crate::data::{OrderStatus, ProductStatus};

/// Color theme for the application.
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Highlight color for selected items.
    pub highlight: Color,
    /// Accent color for active elements (focused inputs, sort arrows).
    pub accent: Color,
    /// Muted color for chrome and hints.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            highlight: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
        }
    }

    /// A light-background theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            highlight: Color::Blue,
            accent: Color::Magenta,
            muted: Color::Gray,
        }
    }

    /// Resolve a theme by name, falling back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Badge color for an order status.
pub fn order_status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Processing => Color::Blue,
        OrderStatus::Shipped => Color::Cyan,
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Cancelled | OrderStatus::Refunded => Color::Red,
    }
}

/// Badge color for a product status.
pub fn product_status_color(status: ProductStatus) -> Color {
    match status {
        ProductStatus::Published => Color::Green,
        ProductStatus::Draft => Color::Yellow,
        ProductStatus::Archived => Color::DarkGray,
    }
}
