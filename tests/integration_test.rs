use rust_decimal_macros::dec;

use loud_orders::clients::ActorClient;
use loud_orders::lifecycle::{repair_orders, run_audit, OrderSystem};
use loud_orders::model::{OrderCreate, OrderLineItem, OrderStatus, OrderUpdate, ProductCreate};
use loud_orders::order_actor::OrderError;
use loud_orders::pricing::Reconciliation;

/// Full end-to-end flow with all real actors: catalog seeding, checkout,
/// stock accounting, and the confirmation workflow.
#[tokio::test]
async fn test_full_storefront_flow() {
    let system = OrderSystem::new();

    let hoodie_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Boxy Hoodie".to_string(),
            price: dec!(2500),
            stock: 10,
        })
        .await
        .expect("Failed to create product");
    let cap_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Snap Cap".to_string(),
            price: dec!(1200),
            stock: 5,
        })
        .await
        .expect("Failed to create product");

    let initial_stock = system
        .product_client
        .check_stock(hoodie_id.clone())
        .await
        .expect("Failed to check stock");
    assert_eq!(initial_stock, 10);

    // Checkout: 2 hoodies + 1 cap, flat 400 delivery fee.
    let order_id = system
        .order_client
        .create_order(OrderCreate::placed(
            "LB-1001",
            "Amina",
            vec![
                OrderLineItem::new(hoodie_id.clone(), dec!(2500), 2),
                OrderLineItem::new(cap_id.clone(), dec!(1200), 1),
            ],
            dec!(400),
        ))
        .await
        .expect("Failed to create order");

    let order = system
        .order_client
        .get(order_id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.order_number, "LB-1001");
    assert_eq!(order.subtotal, dec!(6200));
    assert_eq!(order.total, dec!(6600));
    assert_eq!(order.status, OrderStatus::Pending);

    // Stock was reserved per line.
    assert_eq!(system.product_client.check_stock(hoodie_id.clone()).await.unwrap(), 8);
    assert_eq!(system.product_client.check_stock(cap_id.clone()).await.unwrap(), 4);

    // Insufficient stock fails the checkout and leaves stock untouched.
    let result = system
        .order_client
        .create_order(OrderCreate::placed(
            "LB-1002",
            "Lina",
            vec![OrderLineItem::new(hoodie_id.clone(), dec!(2500), 99)],
            dec!(400),
        ))
        .await;
    assert!(result.is_err(), "Should fail when stock is insufficient");
    assert_eq!(system.product_client.check_stock(hoodie_id.clone()).await.unwrap(), 8);

    // Confirmation workflow: Pending -> Confirmed, and only once.
    let status = system
        .order_client
        .confirm_order(order_id.clone())
        .await
        .expect("Failed to confirm order");
    assert_eq!(status, OrderStatus::Confirmed);

    let second_confirm = system.order_client.confirm_order(order_id).await;
    assert!(matches!(second_confirm, Err(OrderError::Validation(_))));

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Cancelling an order returns its reserved stock to the catalog.
#[tokio::test]
async fn test_cancellation_releases_stock() {
    let system = OrderSystem::new();

    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Wide Trouser".to_string(),
            price: dec!(3200),
            stock: 10,
        })
        .await
        .unwrap();

    let order_id = system
        .order_client
        .create_order(OrderCreate::placed(
            "LB-1003",
            "Sara",
            vec![OrderLineItem::new(product_id.clone(), dec!(3200), 4)],
            dec!(400),
        ))
        .await
        .unwrap();
    assert_eq!(system.product_client.check_stock(product_id.clone()).await.unwrap(), 6);

    let status = system.order_client.cancel_order(order_id.clone()).await.unwrap();
    assert_eq!(status, OrderStatus::Cancelled);
    assert_eq!(system.product_client.check_stock(product_id).await.unwrap(), 10);

    // A cancelled order cannot be cancelled (or confirmed) again.
    assert!(system.order_client.cancel_order(order_id.clone()).await.is_err());
    assert!(system.order_client.confirm_order(order_id).await.is_err());

    system.shutdown().await.unwrap();
}

/// An administrative correction recomputes totals in the same message,
/// so the corrected order reconciles clean immediately.
#[tokio::test]
async fn test_admin_correction_recomputes_totals() {
    let system = OrderSystem::new();

    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Logo Tee".to_string(),
            price: dec!(1500),
            stock: 20,
        })
        .await
        .unwrap();

    let order_id = system
        .order_client
        .create_order(OrderCreate::placed(
            "LB-1004",
            "Nassim",
            vec![OrderLineItem::new(product_id, dec!(1500), 2)],
            dec!(400),
        ))
        .await
        .unwrap();

    // Delivery agent renegotiated the fee.
    let corrected = system
        .order_client
        .correct_order(
            order_id.clone(),
            OrderUpdate {
                items: None,
                delivery_fee: Some(dec!(250)),
            },
        )
        .await
        .unwrap();
    assert_eq!(corrected.subtotal, dec!(3000));
    assert_eq!(corrected.total, dec!(3250));

    let outcome = system.order_client.reconcile_order(order_id.clone()).await.unwrap();
    assert_eq!(outcome, Reconciliation::Consistent);

    // A correction that corrupts a line is rejected and changes nothing.
    let rejected = system
        .order_client
        .correct_order(
            order_id.clone(),
            OrderUpdate {
                items: Some(vec![OrderLineItem::new("ghost", dec!(-5), 1)]),
                delivery_fee: None,
            },
        )
        .await;
    assert!(matches!(rejected, Err(OrderError::Validation(_))));

    let order = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.total, dec!(3250));

    system.shutdown().await.unwrap();
}

/// The reconciliation story end to end: legacy imports drift, the audit
/// finds them without touching anything, bulk repair fixes the selection,
/// and the next audit comes back clean.
#[tokio::test]
async fn test_audit_finds_and_repairs_legacy_drift() {
    let system = OrderSystem::new();

    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Puffer Jacket".to_string(),
            price: dec!(4550),
            stock: 30,
        })
        .await
        .unwrap();

    // A healthy checkout order.
    system
        .order_client
        .create_order(OrderCreate::placed(
            "LB-1005",
            "Amina",
            vec![OrderLineItem::new(product_id, dec!(4550), 1)],
            dec!(450),
        ))
        .await
        .unwrap();

    // Legacy import whose float-era totals overcharged by 100.
    // Canonical: subtotal 9100, total 9550.
    let drifted_id = system
        .order_client
        .create_order(OrderCreate::imported(
            "LB-0417",
            "Yacine",
            vec![OrderLineItem::new("discontinued_parka", dec!(4550), 2)],
            dec!(450),
            dec!(9200),
            dec!(9650),
        ))
        .await
        .unwrap();

    // Legacy import with harmless sub-centime noise: canonical 99.99,
    // stored 100.00.
    system
        .order_client
        .create_order(OrderCreate::imported(
            "LB-0233",
            "Sara",
            vec![OrderLineItem::new("legacy_tee", dec!(33.33), 3)],
            dec!(0),
            dec!(100.00),
            dec!(100.00),
        ))
        .await
        .unwrap();

    // Corrupt legacy record: a zero-quantity line. Reconciliation reports
    // it as a failure, not a drift.
    system
        .order_client
        .create_order(OrderCreate::imported(
            "LB-0098",
            "Mehdi",
            vec![OrderLineItem::new("legacy_belt", dec!(800), 0)],
            dec!(0),
            dec!(800),
            dec!(800),
        ))
        .await
        .unwrap();

    let report = run_audit(&system.order_client).await.unwrap();
    assert_eq!(report.consistent.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(report.failed[0].error, OrderError::Validation(_)));

    assert_eq!(report.inconsistent.len(), 1);
    let drift = &report.inconsistent[0];
    assert_eq!(drift.order_id, drifted_id);
    assert_eq!(
        drift.reconciliation,
        Reconciliation::Inconsistent {
            stored_subtotal: dec!(9200),
            stored_total: dec!(9650),
            canonical_subtotal: dec!(9100),
            canonical_total: dec!(9550),
            delta: dec!(100),
        }
    );

    // Repair only the reviewed selection.
    let outcome = repair_orders(&system.order_client, report.inconsistent_ids()).await;
    assert_eq!(outcome.repaired, vec![drifted_id.clone()]);
    assert!(outcome.failed.is_empty());

    let repaired = system.order_client.get(drifted_id.clone()).await.unwrap().unwrap();
    assert_eq!(repaired.subtotal, dec!(9100));
    assert_eq!(repaired.total, dec!(9550));
    assert_eq!(
        system.order_client.reconcile_order(drifted_id).await.unwrap(),
        Reconciliation::Consistent
    );

    // The corrupt record still fails; nothing else is flagged.
    let report = run_audit(&system.order_client).await.unwrap();
    assert!(report.inconsistent.is_empty());
    assert_eq!(report.consistent.len(), 3);
    assert_eq!(report.failed.len(), 1);

    system.shutdown().await.unwrap();
}

/// Concurrent checkouts against one product: the actor serializes stock
/// accounting, so exactly the available stock is sold.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = OrderSystem::new();

    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Limited Cap".to_string(),
            price: dec!(1000),
            stock: 20,
        })
        .await
        .unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let order_client = system.order_client.clone();
        let pid = product_id.clone();

        let handle = tokio::spawn(async move {
            let order = OrderCreate::placed(
                format!("LB-2{:03}", i),
                "Walk-in",
                vec![OrderLineItem::new(pid, dec!(1000), 2)],
                dec!(200),
            );
            order_client.create_order(order).await
        });
        handles.push(handle);
    }

    let mut successful = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(_) => failed += 1,
        }
    }

    // 20 stock / 2 per order: all ten fit exactly.
    assert_eq!(successful, 10, "Expected exactly 10 successful orders");
    assert_eq!(failed, 0, "Expected no failures with sufficient stock");

    let final_stock = system.product_client.check_stock(product_id).await.unwrap();
    assert_eq!(final_stock, 0, "All stock should be consumed");

    system.shutdown().await.unwrap();
}
