/// Inventory store tests over the in-memory data source.
///
/// Run with: cargo test --test inventory_store_tests
use storefront::{InMemoryInventory, InventoryStore, StockMovement, StoreError};

fn movement(quantity: u32) -> StockMovement {
    StockMovement {
        quantity,
        unit_price: 1_000.0,
    }
}

#[tokio::test]
async fn test_purchase_clamps_at_zero() {
    let store = InMemoryInventory::new();
    store.seed("p3", 2, 1_000.0).await;

    let stock = store.apply_purchase("p3", movement(5)).await.unwrap();

    assert_eq!(stock.new_quantity, 0);
}

#[tokio::test]
async fn test_purchase_never_goes_negative() {
    let store = InMemoryInventory::new();

    for (have, buy) in [(0u32, 1u32), (1, 2), (3, 10), (7, 8)] {
        store.seed("x", have, 500.0).await;
        let stock = store.apply_purchase("x", movement(buy)).await.unwrap();
        assert_eq!(stock.new_quantity, 0, "have={have} buy={buy}");
    }
}

#[tokio::test]
async fn test_partial_purchase_subtracts() {
    let store = InMemoryInventory::new();
    store.seed("5", 10, 2_500.0).await;

    let stock = store.apply_purchase("5", movement(4)).await.unwrap();

    assert_eq!(stock.producto_id, 5);
    assert_eq!(stock.new_quantity, 6);

    let detail = store.get("5").await.unwrap();
    assert_eq!(detail.available_quantity, 6);
}

#[tokio::test]
async fn test_purchase_unknown_product_creates_empty_record() {
    let store = InMemoryInventory::new();

    let stock = store.apply_purchase("nuevo", movement(3)).await.unwrap();
    assert_eq!(stock.new_quantity, 0);

    let detail = store.get("nuevo").await.unwrap();
    assert_eq!(detail.available_quantity, 0);
}

#[tokio::test]
async fn test_register_incoming_adds_stock() {
    let store = InMemoryInventory::with_demo_data();

    let status = store
        .register_incoming(
            "2",
            StockMovement {
                quantity: 7,
                unit_price: 21_000.0,
            },
        )
        .await
        .unwrap();

    assert_eq!(status.product_id, "2");
    assert_eq!(status.quantity, 12);

    let detail = store.get("2").await.unwrap();
    assert_eq!(detail.available_quantity, 12);
    assert_eq!(detail.unit_price, 21_000.0);
}

#[tokio::test]
async fn test_register_incoming_creates_missing_record() {
    let store = InMemoryInventory::new();

    let status = store.register_incoming("9", movement(4)).await.unwrap();

    assert_eq!(status.quantity, 4);
}

#[tokio::test]
async fn test_get_unknown_product_fails() {
    let store = InMemoryInventory::new();

    let err = store.get("77").await.unwrap_err();
    assert!(matches!(err, StoreError::InventoryNotFound(_)));
}

#[tokio::test]
async fn test_demo_seed_levels() {
    let store = InMemoryInventory::with_demo_data();

    for (id, expected) in [("1", 10u32), ("2", 5), ("3", 3)] {
        let detail = store.get(id).await.unwrap();
        assert_eq!(detail.available_quantity, expected, "producto {id}");
        assert_eq!(detail.name, format!("Producto {id}"));
    }
}
