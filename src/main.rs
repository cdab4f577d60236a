//! Demo driver: seeds the catalog, walks an order through checkout and
//! confirmation, then audits and repairs a drifted legacy import.
//!
//! Run with `RUST_LOG=info cargo run` to watch the flow.

use rust_decimal::Decimal;
use tracing::info;

use loud_orders::clients::ActorClient;
use loud_orders::lifecycle::{repair_orders, run_audit, setup_tracing, OrderSystem};
use loud_orders::model::{OrderCreate, OrderLineItem, ProductCreate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let system = OrderSystem::new();

    // Seed the catalog.
    let hoodie_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Boxy Hoodie".to_string(),
            price: Decimal::from(2500),
            stock: 40,
        })
        .await?;
    let cap_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Snap Cap".to_string(),
            price: Decimal::from(1200),
            stock: 25,
        })
        .await?;

    // Checkout: two hoodies and a cap, flat delivery fee.
    let order_id = system
        .order_client
        .create_order(OrderCreate::placed(
            "LB-1001",
            "Amina",
            vec![
                OrderLineItem::new(hoodie_id.clone(), Decimal::from(2500), 2),
                OrderLineItem::new(cap_id.clone(), Decimal::from(1200), 1),
            ],
            Decimal::from(400),
        ))
        .await?;

    let order = system
        .order_client
        .get(order_id.clone())
        .await?
        .expect("order just created");
    info!(order_number = %order.order_number, subtotal = %order.subtotal, total = %order.total, "Order placed");

    system.order_client.confirm_order(order_id).await?;

    // A record migrated from the old storefront, stored totals and all.
    // Its float-era arithmetic overcharged by a full 100.00.
    system
        .order_client
        .create_order(OrderCreate::imported(
            "LB-0417",
            "Yacine",
            vec![OrderLineItem::new("discontinued_parka", Decimal::from(4550), 2)],
            Decimal::from(450),
            Decimal::from(9200),
            Decimal::from(9650),
        ))
        .await?;

    // Audit, review, repair, audit again.
    let report = run_audit(&system.order_client).await?;
    let outcome = repair_orders(&system.order_client, report.inconsistent_ids()).await;
    info!(repaired = outcome.repaired.len(), "Bulk repair applied");

    let report = run_audit(&system.order_client).await?;
    info!(clean = report.is_clean(), "Post-repair audit");

    system.shutdown().await?;
    Ok(())
}
