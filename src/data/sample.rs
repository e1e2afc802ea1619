//! Hardcoded sample datasets.
//!
//! Rebuilt on every launch; nothing here survives a restart.

use super::types::{
    Customer, LineItem, Order, OrderStatus, Product, ProductStatus, SeriesPoint, StatSummary,
    Trend,
};

/// Sample orders.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001".to_string(),
            customer_name: "Alice Wonderland".to_string(),
            customer_email: "alice@example.com".to_string(),
            date: "2024-07-15".to_string(),
            status: OrderStatus::Delivered,
            total: 120.50,
            items: vec![
                LineItem::new("Toy Car", 1, 20.50),
                LineItem::new("Doll", 2, 50.00),
            ],
        },
        Order {
            id: "ORD002".to_string(),
            customer_name: "Bob The Builder".to_string(),
            customer_email: "bob@example.com".to_string(),
            date: "2024-07-18".to_string(),
            status: OrderStatus::Processing,
            total: 75.00,
            items: vec![LineItem::new("Building Blocks", 1, 75.00)],
        },
        Order {
            id: "ORD003".to_string(),
            customer_name: "Charlie Brown".to_string(),
            customer_email: "charlie@example.com".to_string(),
            date: "2024-07-19".to_string(),
            status: OrderStatus::Pending,
            total: 30.00,
            items: vec![LineItem::new("Kite", 1, 30.00)],
        },
        Order {
            id: "ORD004".to_string(),
            customer_name: "Diana Prince".to_string(),
            customer_email: "diana@example.com".to_string(),
            date: "2024-07-20".to_string(),
            status: OrderStatus::Shipped,
            total: 250.99,
            items: vec![LineItem::new("Action Figure Set", 1, 250.99)],
        },
        Order {
            id: "ORD005".to_string(),
            customer_name: "Edward Scissorhands".to_string(),
            customer_email: "edward@example.com".to_string(),
            date: "2024-07-21".to_string(),
            status: OrderStatus::Cancelled,
            total: 45.00,
            items: vec![LineItem::new("Art Kit", 1, 45.00)],
        },
    ]
}

/// Sample product catalog.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "PROD001".to_string(),
            name: "Plush Toy Dragon".to_string(),
            sku: "PTD-001".to_string(),
            category: "Toys".to_string(),
            price: 29.99,
            stock: 150,
            status: ProductStatus::Published,
            description: "A friendly plush dragon.".to_string(),
        },
        Product {
            id: "PROD002".to_string(),
            name: "Wooden Block Set".to_string(),
            sku: "WBS-002".to_string(),
            category: "Educational".to_string(),
            price: 45.00,
            stock: 80,
            status: ProductStatus::Published,
            description: "Colorful wooden blocks for creative play.".to_string(),
        },
        Product {
            id: "PROD003".to_string(),
            name: "RC Car Extreme".to_string(),
            sku: "RCC-003".to_string(),
            category: "Vehicles".to_string(),
            price: 79.50,
            stock: 0,
            status: ProductStatus::Draft,
            description: "Fast remote-controlled car.".to_string(),
        },
    ]
}

/// Sample customers.
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUST001".to_string(),
            name: "Alice Wonderland".to_string(),
            email: "alice@example.com".to_string(),
            registration_date: "2023-01-10".to_string(),
            total_orders: 5,
            lifetime_value: 560.00,
            last_seen: "2 days ago".to_string(),
        },
        Customer {
            id: "CUST002".to_string(),
            name: "Bob The Builder".to_string(),
            email: "bob@example.com".to_string(),
            registration_date: "2023-02-20".to_string(),
            total_orders: 2,
            lifetime_value: 150.75,
            last_seen: "5 hours ago".to_string(),
        },
        Customer {
            id: "CUST003".to_string(),
            name: "Charlie Brown".to_string(),
            email: "charlie@example.com".to_string(),
            registration_date: "2023-03-05".to_string(),
            total_orders: 8,
            lifetime_value: 1200.20,
            last_seen: "1 week ago".to_string(),
        },
        Customer {
            id: "CUST004".to_string(),
            name: "Diana Prince".to_string(),
            email: "diana@example.com".to_string(),
            registration_date: "2023-04-12".to_string(),
            total_orders: 12,
            lifetime_value: 2100.50,
            last_seen: "Online".to_string(),
        },
    ]
}

/// Headline metrics for the overview page.
pub fn overview_stats() -> Vec<StatSummary> {
    vec![
        StatSummary::new(
            "Total Revenue",
            "$45,231.89",
            "+20.1% from last month",
            Trend::Up,
        ),
        StatSummary::new(
            "New Customers",
            "+1340",
            "+180.1% from last month",
            Trend::Up,
        ),
        StatSummary::new("New Orders", "5", "From today's sales", Trend::Neutral),
        StatSummary::new("Active Now", "+573", "Users currently on site", Trend::Up),
    ]
}

/// Monthly sales series for the overview line chart.
pub fn monthly_sales() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Jan", 4000.0),
        SeriesPoint::new("Feb", 3000.0),
        SeriesPoint::new("Mar", 2000.0),
        SeriesPoint::new("Apr", 2780.0),
        SeriesPoint::new("May", 1890.0),
        SeriesPoint::new("Jun", 2390.0),
        SeriesPoint::new("Jul", 3490.0),
    ]
}

/// Device share for the overview pie breakdown.
pub fn device_share() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Desktop", 65.0),
        SeriesPoint::new("Mobile", 25.0),
        SeriesPoint::new("Tablet", 10.0),
    ]
}

/// Monthly sales series for the analytics bar chart.
pub fn analytics_monthly_sales() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Jan", 4200.0),
        SeriesPoint::new("Feb", 3100.0),
        SeriesPoint::new("Mar", 5000.0),
        SeriesPoint::new("Apr", 4500.0),
        SeriesPoint::new("May", 6200.0),
        SeriesPoint::new("Jun", 5800.0),
    ]
}

/// Traffic sources for the analytics pie breakdown.
pub fn traffic_sources() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Organic Search", 45.0),
        SeriesPoint::new("Direct", 25.0),
        SeriesPoint::new("Referral", 15.0),
        SeriesPoint::new("Social Media", 15.0),
    ]
}

/// Per-product sales and revenue for the analytics table.
///
/// Returned as (name, units sold, revenue) tuples.
pub fn product_performance() -> Vec<(String, u32, f64)> {
    vec![
        ("Plush Dragon".to_string(), 120, 3598.80),
        ("Block Set".to_string(), 95, 4275.00),
        ("RC Car".to_string(), 70, 5565.00),
        ("Art Kit".to_string(), 150, 6750.00),
    ]
}
