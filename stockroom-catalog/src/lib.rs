//! Inventory data model types and the store interface.
//!
//! This crate defines the persistent data model for the inventory system
//! without any database dependencies. Consumers can use these types directly
//! for display, or go through an [`InventoryStore`] implementation such as
//! the SQLite adapter in `stockroom-db` for persistence.

pub mod store;
pub mod types;

pub use store::{InventoryStore, StoreError};
pub use types::*;
