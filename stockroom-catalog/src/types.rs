//! Data model types for the inventory system.
//!
//! These types represent the persistent inventory schema: products, orders,
//! restock tasks, and co-purchase relationships between products.

/// Threshold used by the low-stock report when the caller has no opinion.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

// ── Product ─────────────────────────────────────────────────────────────────

/// A stocked product. The sku is the unique key everything else references.
///
/// Stock is expected to be non-negative but the store does not enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub stock: i64,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// One row of the low-stock report: a product whose stock fell below the
/// requested threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    pub sku: String,
    pub stock: i64,
}

// ── Orders ──────────────────────────────────────────────────────────────────

/// A recorded customer order against a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub sku: String,
    pub quantity: i64,
    /// Engine-assigned insertion timestamp.
    pub order_date: String,
}

// ── Restocks ────────────────────────────────────────────────────────────────

/// A restock request that has not been fulfilled yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRestock {
    pub sku: String,
    pub quantity: i64,
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary counts across the inventory tables.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InventoryStats {
    pub products: i64,
    pub orders: i64,
    pub restocks: i64,
    pub pending_restocks: i64,
    pub relationships: i64,
}
