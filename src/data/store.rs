//! In-memory store with local-only mutations.
//!
//! The store owns the sample datasets and applies edits (product
//! add/edit/delete, order status changes) to process memory only. There is
//! no persistence: every launch starts from the same samples.

use anyhow::{anyhow, bail, Result};
use tracing::{debug, info};

use super::sample;
use super::types::{Customer, Order, OrderStatus, Product, ProductStatus};

/// Validated input for creating or editing a product.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub description: String,
}

impl ProductDraft {
    /// Check the draft against the catalog rules.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error for the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().len() < 3 {
            bail!("Product name must be at least 3 characters");
        }
        if self.sku.trim().is_empty() {
            bail!("SKU is required");
        }
        if self.price <= 0.0 {
            bail!("Price must be positive");
        }
        if self.description.len() > 500 {
            bail!("Description too long (max 500 characters)");
        }
        Ok(())
    }
}

/// The in-memory data store behind all pages.
pub struct Store {
    orders: Vec<Order>,
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store seeded with the sample datasets.
    pub fn new() -> Self {
        Self {
            orders: sample::orders(),
            products: sample::products(),
            customers: sample::customers(),
        }
    }

    /// All orders.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All customers.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up an order by id.
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Change an order's status.
    ///
    /// # Errors
    ///
    /// Fails if no order with the given id exists.
    pub fn update_order_status(&mut self, id: &str, status: OrderStatus) -> Result<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| anyhow!("Order '{}' not found", id))?;
        info!(order = id, status = %status, "updating order status");
        order.status = status;
        Ok(())
    }

    /// Add a product from a draft, assigning the next free id.
    ///
    /// Returns the new product's id.
    ///
    /// # Errors
    ///
    /// Fails if the draft does not validate.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<String> {
        draft.validate()?;
        let id = self.next_product_id();
        debug!(product = %id, name = %draft.name, "adding product");
        self.products.push(Product {
            id: id.clone(),
            name: draft.name,
            sku: draft.sku,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            status: draft.status,
            description: draft.description,
        });
        Ok(id)
    }

    /// Replace a product's fields from a draft.
    ///
    /// # Errors
    ///
    /// Fails if the draft does not validate or the id is unknown.
    pub fn update_product(&mut self, id: &str, draft: ProductDraft) -> Result<()> {
        draft.validate()?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| anyhow!("Product '{}' not found", id))?;
        debug!(product = id, "updating product");
        product.name = draft.name;
        product.sku = draft.sku;
        product.category = draft.category;
        product.price = draft.price;
        product.stock = draft.stock;
        product.status = draft.status;
        product.description = draft.description;
        Ok(())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Fails if no product with the given id exists.
    pub fn delete_product(&mut self, id: &str) -> Result<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(anyhow!("Product '{}' not found", id));
        }
        info!(product = id, "deleted product");
        Ok(())
    }

    /// Count of orders not yet delivered or closed, shown as the nav badge.
    pub fn open_order_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|o| {
                matches!(
                    o.status,
                    OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped
                )
            })
            .count()
    }

    /// Next unused product id in the "PROD000" sequence.
    fn next_product_id(&self) -> String {
        let max = self
            .products
            .iter()
            .filter_map(|p| p.id.strip_prefix("PROD"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("PROD{:03}", max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, sku: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            sku: sku.to_string(),
            category: "Toys".to_string(),
            price,
            stock: 10,
            status: ProductStatus::Draft,
            description: String::new(),
        }
    }

    #[test]
    fn test_store_seeds_sample_data() {
        let store = Store::new();
        assert_eq!(store.orders().len(), 5);
        assert_eq!(store.products().len(), 3);
        assert_eq!(store.customers().len(), 4);
    }

    #[test]
    fn test_update_order_status() {
        let mut store = Store::new();
        store
            .update_order_status("ORD003", OrderStatus::Shipped)
            .unwrap();
        assert_eq!(store.order("ORD003").unwrap().status, OrderStatus::Shipped);
    }

    #[test]
    fn test_update_order_status_unknown_id() {
        let mut store = Store::new();
        let err = store
            .update_order_status("ORD999", OrderStatus::Shipped)
            .unwrap_err();
        assert!(err.to_string().contains("ORD999"));
    }

    #[test]
    fn test_add_product_assigns_next_id() {
        let mut store = Store::new();
        let id = store.add_product(draft("Toy Robot", "TR-004", 19.99)).unwrap();
        assert_eq!(id, "PROD004");
        assert_eq!(store.products().len(), 4);
        assert_eq!(store.product("PROD004").unwrap().name, "Toy Robot");
    }

    #[test]
    fn test_add_product_rejects_short_name() {
        let mut store = Store::new();
        let err = store.add_product(draft("ab", "SKU-1", 5.0)).unwrap_err();
        assert!(err.to_string().contains("at least 3 characters"));
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_add_product_rejects_empty_sku() {
        let mut store = Store::new();
        let err = store.add_product(draft("Toy Robot", "  ", 5.0)).unwrap_err();
        assert!(err.to_string().contains("SKU"));
    }

    #[test]
    fn test_add_product_rejects_non_positive_price() {
        let mut store = Store::new();
        let err = store.add_product(draft("Toy Robot", "TR-1", 0.0)).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_update_product() {
        let mut store = Store::new();
        let mut d = draft("Plush Toy Dragon XL", "PTD-001", 39.99);
        d.stock = 5;
        store.update_product("PROD001", d).unwrap();
        let product = store.product("PROD001").unwrap();
        assert_eq!(product.name, "Plush Toy Dragon XL");
        assert_eq!(product.price, 39.99);
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn test_update_product_unknown_id() {
        let mut store = Store::new();
        let err = store
            .update_product("PROD999", draft("Toy Robot", "TR-1", 5.0))
            .unwrap_err();
        assert!(err.to_string().contains("PROD999"));
    }

    #[test]
    fn test_delete_product() {
        let mut store = Store::new();
        store.delete_product("PROD002").unwrap();
        assert_eq!(store.products().len(), 2);
        assert!(store.product("PROD002").is_none());
    }

    #[test]
    fn test_delete_product_unknown_id() {
        let mut store = Store::new();
        assert!(store.delete_product("PROD999").is_err());
    }

    #[test]
    fn test_open_order_count() {
        let mut store = Store::new();
        // Pending, Processing, and Shipped from the samples.
        assert_eq!(store.open_order_count(), 3);
        store
            .update_order_status("ORD003", OrderStatus::Delivered)
            .unwrap();
        assert_eq!(store.open_order_count(), 2);
    }

    #[test]
    fn test_draft_validate_long_description() {
        let mut d = draft("Toy Robot", "TR-1", 5.0);
        d.description = "x".repeat(501);
        assert!(d.validate().is_err());
    }
}
