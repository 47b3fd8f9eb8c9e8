//! SQLite persistence layer for the inventory system.
//!
//! Implements the [`InventoryStore`](stockroom_catalog::InventoryStore)
//! interface over an embedded SQLite database (via rusqlite with bundled
//! feature). Schema creation is idempotent and runs at store construction;
//! the connection is held privately for the store's lifetime.

mod schema;
mod store;

pub use schema::default_database_path;
pub use store::SqliteStore;
