use stockroom_catalog::{
    DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, PendingRestock, Product, StoreError,
};
use stockroom_db::SqliteStore;

fn store() -> SqliteStore {
    SqliteStore::open_in_memory().unwrap()
}

fn product(sku: &str, name: &str, stock: i64) -> Product {
    Product {
        sku: sku.to_string(),
        name: name.to_string(),
        stock,
        price: Some(4.99),
        category: Some("widgets".to_string()),
    }
}

#[test]
fn insert_and_find_round_trip() {
    let store = store();
    let widget = product("W-100", "Widget", 12);
    store.insert_product(&widget).unwrap();

    let found = store.find_product("W-100").unwrap().unwrap();
    assert_eq!(found, widget);
}

#[test]
fn unknown_sku_is_absent() {
    let store = store();
    assert_eq!(store.find_product("nope").unwrap(), None);
}

#[test]
fn duplicate_sku_rejected_without_mutation() {
    let store = store();
    store.insert_product(&product("W-100", "Widget", 12)).unwrap();

    let err = store
        .insert_product(&product("W-100", "Impostor", 99))
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateSku("W-100".to_string()));

    let found = store.find_product("W-100").unwrap().unwrap();
    assert_eq!(found.name, "Widget");
    assert_eq!(found.stock, 12);
}

#[test]
fn list_products_returns_everything() {
    let store = store();
    store.insert_product(&product("A", "Alpha", 1)).unwrap();
    store.insert_product(&product("B", "Beta", 2)).unwrap();
    store.insert_product(&product("C", "Gamma", 3)).unwrap();

    let mut skus: Vec<String> = store
        .list_products()
        .unwrap()
        .into_iter()
        .map(|p| p.sku)
        .collect();
    skus.sort();
    assert_eq!(skus, ["A", "B", "C"]);
}

#[test]
fn low_stock_filters_and_sorts() {
    let store = store();
    store.insert_product(&product("empty", "Empty", 0)).unwrap();
    store.insert_product(&product("low", "Low", 3)).unwrap();
    store.insert_product(&product("edge", "Edge", 5)).unwrap();
    store.insert_product(&product("full", "Full", 40)).unwrap();

    let report = store
        .low_stock_products(DEFAULT_LOW_STOCK_THRESHOLD)
        .unwrap();
    let skus: Vec<&str> = report.iter().map(|r| r.sku.as_str()).collect();

    // stock == threshold stays out; results ascend by stock
    assert_eq!(skus, ["empty", "low"]);
    assert_eq!(report[0].stock, 0);
    assert_eq!(report[1].stock, 3);
}

#[test]
fn orders_require_an_existing_product() {
    let store = store();
    let err = store.insert_order("ghost", 2).unwrap_err();
    assert_eq!(err, StoreError::UnknownSku("ghost".to_string()));
    assert_eq!(store.recent_orders(10).unwrap().len(), 0);
}

#[test]
fn recent_orders_newest_first_with_limit() {
    let store = store();
    store.insert_product(&product("W-100", "Widget", 12)).unwrap();

    let first = store.insert_order("W-100", 1).unwrap();
    let second = store.insert_order("W-100", 2).unwrap();
    let third = store.insert_order("W-100", 3).unwrap();
    assert!(first < second && second < third);

    let recent = store.recent_orders(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, third);
    assert_eq!(recent[0].quantity, 3);
    assert_eq!(recent[1].id, second);
    assert!(!recent[0].order_date.is_empty());
}

#[test]
fn restock_lifecycle() {
    let store = store();
    store.insert_product(&product("X", "Xylo", 1)).unwrap();
    store.insert_restock("X", 10).unwrap();

    let pending = store.pending_restocks().unwrap();
    assert_eq!(
        pending,
        [PendingRestock {
            sku: "X".to_string(),
            quantity: 10,
        }]
    );

    assert_eq!(store.complete_restocks("X").unwrap(), 1);
    assert!(store.pending_restocks().unwrap().is_empty());
}

#[test]
fn completing_unknown_restocks_is_a_no_op() {
    let store = store();
    assert_eq!(store.complete_restocks("ghost").unwrap(), 0);
}

#[test]
fn restocks_require_an_existing_product() {
    let store = store();
    let err = store.insert_restock("ghost", 10).unwrap_err();
    assert_eq!(err, StoreError::UnknownSku("ghost".to_string()));
}

#[test]
fn relationship_upsert_counts_and_is_symmetric() {
    let store = store();
    store.insert_product(&product("A", "Alpha", 1)).unwrap();
    store.insert_product(&product("B", "Beta", 1)).unwrap();

    store.record_relationship("A", "B").unwrap();
    store.record_relationship("A", "B").unwrap();

    assert_eq!(store.relationship_frequency("A", "B").unwrap(), Some(2));
    // the stored pair is directional; only the lookup is symmetric
    assert_eq!(store.relationship_frequency("B", "A").unwrap(), None);

    assert_eq!(store.related_skus("A").unwrap(), ["B"]);
    assert_eq!(store.related_skus("B").unwrap(), ["A"]);
}

#[test]
fn relationship_requires_existing_products() {
    let store = store();
    store.insert_product(&product("A", "Alpha", 1)).unwrap();

    let err = store.record_relationship("A", "ghost").unwrap_err();
    assert!(matches!(err, StoreError::UnknownSku(_)));
    assert_eq!(store.related_skus("A").unwrap(), Vec::<String>::new());
}

#[test]
fn self_pair_is_not_excluded() {
    let store = store();
    store.insert_product(&product("A", "Alpha", 1)).unwrap();
    store.record_relationship("A", "A").unwrap();

    assert_eq!(store.related_skus("A").unwrap(), ["A"]);
}

#[test]
fn stats_track_every_table() {
    let store = store();
    store.insert_product(&product("A", "Alpha", 1)).unwrap();
    store.insert_product(&product("B", "Beta", 2)).unwrap();
    store.insert_order("A", 1).unwrap();
    store.insert_restock("A", 5).unwrap();
    store.insert_restock("B", 5).unwrap();
    store.complete_restocks("A").unwrap();
    store.record_relationship("A", "B").unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.products, 2);
    assert_eq!(stats.orders, 1);
    assert_eq!(stats.restocks, 2);
    assert_eq!(stats.pending_restocks, 1);
    assert_eq!(stats.relationships, 1);
}

#[test]
fn close_releases_cleanly() {
    let store = store();
    store.insert_product(&product("A", "Alpha", 1)).unwrap();
    store.close().unwrap();
}
