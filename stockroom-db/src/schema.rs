//! SQLite schema creation and connection setup.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

/// Create all tables and indexes if they don't exist.
///
/// Idempotent, safe to run on an existing database.
pub(crate) fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Open or create an inventory database at the given path.
pub(crate) fn open_database(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub(crate) fn open_memory() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Per-user default location for the inventory database:
/// `<data dir>/stockroom/inventory.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("stockroom").join("inventory.db")
}

const SCHEMA_SQL: &str = r#"
-- Products, keyed by sku
CREATE TABLE IF NOT EXISTS products (
    sku TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    stock INTEGER NOT NULL,
    price REAL,
    category TEXT
);

-- Customer orders
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sku TEXT NOT NULL REFERENCES products(sku),
    quantity INTEGER NOT NULL,
    order_date TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_orders_sku ON orders(sku);

-- Restock tasks
CREATE TABLE IF NOT EXISTS restocks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sku TEXT NOT NULL REFERENCES products(sku),
    quantity INTEGER NOT NULL,
    is_completed BOOLEAN NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_restocks_pending ON restocks(is_completed) WHERE is_completed = 0;

-- Co-purchase pairs with an occurrence counter
CREATE TABLE IF NOT EXISTS product_relationships (
    sku1 TEXT NOT NULL REFERENCES products(sku),
    sku2 TEXT NOT NULL REFERENCES products(sku),
    frequency INTEGER NOT NULL DEFAULT 1,
    PRIMARY KEY (sku1, sku2)
);
"#;
