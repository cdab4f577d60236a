use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::Totals;

/// One line of an order: a product reference with the price and quantity
/// agreed at checkout.
///
/// `unit_price` is a snapshot, not a live catalog lookup. Reconciliation
/// recomputes totals from these snapshots, so repricing a product never
/// changes what an existing order owes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLineItem {
    pub fn new(product_id: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            unit_price,
            quantity,
        }
    }
}

/// Where an order sits in the confirmation/delivery workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Placed at checkout, awaiting a confirmation agent.
    Pending,
    /// Confirmed by an agent; stock stays reserved.
    Confirmed,
    /// Handed to the delivery carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Called off; reserved stock was released.
    Cancelled,
}

/// A customer order.
///
/// `subtotal` and `total` are cached results of
/// [`pricing::compute_totals`](crate::pricing::compute_totals) over `items`
/// and `delivery_fee`. Every write path through the order actor keeps them
/// canonical; [`pricing::reconcile()`](crate::pricing::reconcile()) exists
/// to audit records (chiefly legacy imports) where the cache has drifted.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    /// Human-readable reference assigned by checkout (e.g. "LB-1042").
    pub order_number: String,
    pub customer: String,
    pub items: Vec<OrderLineItem>,
    pub delivery_fee: Decimal,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// Payload for creating an order.
///
/// Built via [`OrderCreate::placed`] for checkout orders (totals computed
/// at creation, stock reserved) or [`OrderCreate::imported`] for records
/// migrated from the legacy storefront (stored totals kept verbatim, no
/// catalog interaction).
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub order_number: String,
    pub customer: String,
    pub items: Vec<OrderLineItem>,
    pub delivery_fee: Decimal,
    /// Totals carried over verbatim from a legacy record; `None` for
    /// checkout orders.
    pub imported_totals: Option<Totals>,
}

impl OrderCreate {
    /// A fresh checkout order.
    pub fn placed(
        order_number: impl Into<String>,
        customer: impl Into<String>,
        items: Vec<OrderLineItem>,
        delivery_fee: Decimal,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            customer: customer.into(),
            items,
            delivery_fee,
            imported_totals: None,
        }
    }

    /// A fulfilled order migrated from the legacy store, stored totals and
    /// all. These records are what the totals audit exists for.
    pub fn imported(
        order_number: impl Into<String>,
        customer: impl Into<String>,
        items: Vec<OrderLineItem>,
        delivery_fee: Decimal,
        stored_subtotal: Decimal,
        stored_total: Decimal,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            customer: customer.into(),
            items,
            delivery_fee,
            imported_totals: Some(Totals {
                subtotal: stored_subtotal,
                total: stored_total,
            }),
        }
    }
}

/// Payload for an administrative correction to an order's billable
/// contents. Totals are recomputed in the same message that applies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub items: Option<Vec<OrderLineItem>>,
    pub delivery_fee: Option<Decimal>,
}
