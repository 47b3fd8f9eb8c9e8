//! The store interface every backing engine implements.
//!
//! One interface, swappable adapters: the embedded SQLite adapter lives in
//! `stockroom-db`, and a networked engine would implement the same trait
//! with different connection parameters and placeholder syntax.

use thiserror::Error;

use crate::types::{InventoryStats, Order, PendingRestock, Product, StockLevel};

/// Failure taxonomy shared by every store operation.
///
/// Callers that only care whether the operation happened can treat any
/// variant as "it did not"; callers that need diagnostics match on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A product insert collided with an existing sku. The existing row is
    /// left unmodified.
    #[error("duplicate product sku '{0}'")]
    DuplicateSku(String),
    /// An order, restock, or relationship referenced a sku that is not in
    /// the products table.
    #[error("unknown product sku: {0}")]
    UnknownSku(String),
    /// The backing engine failed, including a lost or unusable connection.
    #[error("storage engine failure: {0}")]
    Engine(String),
}

/// Typed CRUD and derived reads over the inventory tables.
///
/// Every operation is a single request/response against the backing engine;
/// there is no transaction spanning multiple calls. Mutating operations
/// never partially write.
pub trait InventoryStore {
    /// Insert a new product. Fails with [`StoreError::DuplicateSku`] if the
    /// sku already exists.
    fn insert_product(&self, product: &Product) -> Result<(), StoreError>;

    /// Fetch a product by sku. An unknown sku is `Ok(None)`, never an error.
    fn find_product(&self, sku: &str) -> Result<Option<Product>, StoreError>;

    /// Fetch all products, in engine-default order.
    fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Products with stock strictly below `threshold`, ascending by stock.
    ///
    /// See [`crate::types::DEFAULT_LOW_STOCK_THRESHOLD`].
    fn low_stock_products(&self, threshold: i64) -> Result<Vec<StockLevel>, StoreError>;

    /// Record an order against a product. Returns the generated row id.
    fn insert_order(&self, sku: &str, quantity: i64) -> Result<i64, StoreError>;

    /// The most recent orders, newest first, at most `limit` rows.
    fn recent_orders(&self, limit: u32) -> Result<Vec<Order>, StoreError>;

    /// Record a restock task for a product, initially pending. Returns the
    /// generated row id.
    fn insert_restock(&self, sku: &str, quantity: i64) -> Result<i64, StoreError>;

    /// All restock tasks not yet completed.
    fn pending_restocks(&self) -> Result<Vec<PendingRestock>, StoreError>;

    /// Mark every restock task for `sku` completed. Returns the number of
    /// rows updated; matching nothing is `Ok(0)`, not an error. Completion
    /// is never reversed.
    fn complete_restocks(&self, sku: &str) -> Result<usize, StoreError>;

    /// Record that two products were seen together. Inserts the pair with
    /// frequency 1, or increments the counter if the pair already exists.
    fn record_relationship(&self, sku1: &str, sku2: &str) -> Result<(), StoreError>;

    /// Skus related to `sku`, from either side of the stored pair.
    fn related_skus(&self, sku: &str) -> Result<Vec<String>, StoreError>;

    /// The counter for one stored pair, as ordered at recording time.
    /// `Ok(None)` if the pair was never recorded.
    fn relationship_frequency(&self, sku1: &str, sku2: &str)
        -> Result<Option<i64>, StoreError>;

    /// Summary counts across the inventory tables.
    fn stats(&self) -> Result<InventoryStats, StoreError>;
}
