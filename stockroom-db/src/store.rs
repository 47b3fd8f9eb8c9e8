//! SQLite-backed implementation of the inventory store.

use std::path::Path;

use rusqlite::{Connection, ffi, params};
use stockroom_catalog::{
    InventoryStats, InventoryStore, Order, PendingRestock, Product, StockLevel, StoreError,
};

use crate::schema;

/// Inventory store backed by an embedded SQLite database.
///
/// Holds one open connection for its lifetime; the connection is never
/// handed out. Single-threaded, blocking access: every operation waits for
/// the engine to respond.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create an inventory database at `path` and bootstrap the
    /// schema.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = schema::open_database(path).map_err(engine_err)?;
        Ok(Self { conn })
    }

    /// Open the database at [`default_database_path`](crate::default_database_path),
    /// creating parent directories as needed.
    pub fn open_default() -> Result<Self, StoreError> {
        let path = schema::default_database_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Engine(e.to_string()))?;
        }
        Self::open(&path)
    }

    /// Open a fresh in-memory database with the full schema. Useful for
    /// testing.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = schema::open_memory().map_err(engine_err)?;
        Ok(Self { conn })
    }

    /// Close the connection, surfacing any final flush error.
    ///
    /// Dropping the store also closes the connection; this variant reports
    /// failures instead of discarding them.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| engine_err(e))
    }
}

impl InventoryStore for SqliteStore {
    fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO products (sku, name, stock, price, category)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    product.sku,
                    product.name,
                    product.stock,
                    product.price,
                    product.category,
                ],
            )
            .map_err(|e| classify(e, &product.sku))?;
        Ok(())
    }

    fn find_product(&self, sku: &str) -> Result<Option<Product>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT sku, name, stock, price, category FROM products WHERE sku = ?1")
            .map_err(engine_err)?;
        let result = stmt.query_row(params![sku], row_to_product);
        match result {
            Ok(p) => Ok(Some(p)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(engine_err(e)),
        }
    }

    fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT sku, name, stock, price, category FROM products")
            .map_err(engine_err)?;
        let rows = stmt.query_map([], row_to_product).map_err(engine_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(engine_err)
    }

    fn low_stock_products(&self, threshold: i64) -> Result<Vec<StockLevel>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT sku, stock FROM products WHERE stock < ?1 ORDER BY stock")
            .map_err(engine_err)?;
        let rows = stmt
            .query_map(params![threshold], |row| {
                Ok(StockLevel {
                    sku: row.get(0)?,
                    stock: row.get(1)?,
                })
            })
            .map_err(engine_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(engine_err)
    }

    fn insert_order(&self, sku: &str, quantity: i64) -> Result<i64, StoreError> {
        self.conn
            .execute(
                "INSERT INTO orders (sku, quantity) VALUES (?1, ?2)",
                params![sku, quantity],
            )
            .map_err(|e| classify(e, sku))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn recent_orders(&self, limit: u32) -> Result<Vec<Order>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, sku, quantity, order_date FROM orders
                 ORDER BY id DESC LIMIT ?1",
            )
            .map_err(engine_err)?;
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(Order {
                    id: row.get(0)?,
                    sku: row.get(1)?,
                    quantity: row.get(2)?,
                    order_date: row.get(3)?,
                })
            })
            .map_err(engine_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(engine_err)
    }

    fn insert_restock(&self, sku: &str, quantity: i64) -> Result<i64, StoreError> {
        self.conn
            .execute(
                "INSERT INTO restocks (sku, quantity) VALUES (?1, ?2)",
                params![sku, quantity],
            )
            .map_err(|e| classify(e, sku))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn pending_restocks(&self) -> Result<Vec<PendingRestock>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT sku, quantity FROM restocks WHERE is_completed = 0")
            .map_err(engine_err)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PendingRestock {
                    sku: row.get(0)?,
                    quantity: row.get(1)?,
                })
            })
            .map_err(engine_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(engine_err)
    }

    fn complete_restocks(&self, sku: &str) -> Result<usize, StoreError> {
        let changed = self
            .conn
            .execute(
                "UPDATE restocks SET is_completed = 1 WHERE sku = ?1",
                params![sku],
            )
            .map_err(engine_err)?;
        if changed == 0 {
            log::debug!("no restock tasks matched sku '{sku}'");
        }
        Ok(changed)
    }

    fn record_relationship(&self, sku1: &str, sku2: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO product_relationships (sku1, sku2, frequency)
                 VALUES (?1, ?2, 1)
                 ON CONFLICT(sku1, sku2) DO UPDATE SET frequency = frequency + 1",
                params![sku1, sku2],
            )
            .map_err(|e| classify(e, &format!("{sku1}, {sku2}")))?;
        Ok(())
    }

    fn related_skus(&self, sku: &str) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT sku2 FROM product_relationships WHERE sku1 = ?1
                 UNION
                 SELECT sku1 FROM product_relationships WHERE sku2 = ?1",
            )
            .map_err(engine_err)?;
        let rows = stmt
            .query_map(params![sku], |row| row.get::<_, String>(0))
            .map_err(engine_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(engine_err)
    }

    fn relationship_frequency(
        &self,
        sku1: &str,
        sku2: &str,
    ) -> Result<Option<i64>, StoreError> {
        let result = self.conn.query_row(
            "SELECT frequency FROM product_relationships WHERE sku1 = ?1 AND sku2 = ?2",
            params![sku1, sku2],
            |row| row.get(0),
        );
        match result {
            Ok(f) => Ok(Some(f)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(engine_err(e)),
        }
    }

    fn stats(&self) -> Result<InventoryStats, StoreError> {
        let count = |sql: &str| -> Result<i64, StoreError> {
            self.conn
                .query_row(sql, [], |r| r.get(0))
                .map_err(engine_err)
        };

        Ok(InventoryStats {
            products: count("SELECT COUNT(*) FROM products")?,
            orders: count("SELECT COUNT(*) FROM orders")?,
            restocks: count("SELECT COUNT(*) FROM restocks")?,
            pending_restocks: count("SELECT COUNT(*) FROM restocks WHERE is_completed = 0")?,
            relationships: count("SELECT COUNT(*) FROM product_relationships")?,
        })
    }
}

// ── Error mapping ───────────────────────────────────────────────────────────

/// Map a constraint failure onto the store taxonomy. `sku` is the key (or
/// keys) the failed statement was about.
fn classify(err: rusqlite::Error, sku: &str) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _) => match e.extended_code {
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                StoreError::DuplicateSku(sku.to_owned())
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => StoreError::UnknownSku(sku.to_owned()),
            _ => engine_err(err),
        },
        _ => engine_err(err),
    }
}

fn engine_err(err: rusqlite::Error) -> StoreError {
    log::warn!("sqlite failure: {err}");
    StoreError::Engine(err.to_string())
}

// ── Row mapping ─────────────────────────────────────────────────────────────

fn row_to_product(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        sku: row.get(0)?,
        name: row.get(1)?,
        stock: row.get(2)?,
        price: row.get(3)?,
        category: row.get(4)?,
    })
}
