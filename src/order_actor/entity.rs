//! Entity trait implementation for the Order domain type.
//!
//! Enables [`Order`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). Checkout orders
//! reserve stock against the injected [`ProductClient`] context and store
//! computed totals; legacy imports keep their stored totals verbatim for
//! the audit to examine. Because every one of these paths runs inside the
//! order actor's sequential loop, repairs and corrections to the same order
//! can never interleave.

use async_trait::async_trait;
use tracing::warn;

use super::actions::{OrderAction, OrderActionResult};
use crate::clients::ProductClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};
use crate::pricing::{compute_totals, reconcile};

/// Returns stock reserved earlier in a checkout that did not complete.
///
/// Release failures are logged and swallowed: the rollback must visit
/// every line even if one product has vanished from the catalog.
async fn release_reserved(products: &ProductClient, reserved: &[(String, u32)]) {
    for (product_id, quantity) in reserved {
        if let Err(e) = products.release_stock(product_id.clone(), *quantity).await {
            warn!(product_id = %product_id, error = %e, "Failed to release reserved stock");
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type UpdateParams = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ProductClient;

    /// Builds the order record.
    ///
    /// Checkout orders get canonical totals computed here, so a stored
    /// order can only violate the totals invariant if it was imported with
    /// drifted legacy values. Imports arrive already fulfilled
    /// (`Delivered`) and keep their stored totals untouched.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        let (subtotal, total, status) = match params.imported_totals {
            Some(stored) => (stored.subtotal, stored.total, OrderStatus::Delivered),
            None => {
                let totals = compute_totals(&params.items, params.delivery_fee)
                    .map_err(|e| e.to_string())?;
                (totals.subtotal, totals.total, OrderStatus::Pending)
            }
        };

        Ok(Self {
            id,
            order_number: params.order_number,
            customer: params.customer,
            items: params.items,
            delivery_fee: params.delivery_fee,
            subtotal,
            total,
            status,
        })
    }

    /// Reserves stock for every line of a checkout order.
    ///
    /// All-or-nothing: a failed reservation releases whatever was already
    /// reserved and fails the creation. Legacy imports skip the catalog
    /// entirely; their products may be long discontinued.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), String> {
        if self.status != OrderStatus::Pending {
            return Ok(());
        }

        let mut reserved: Vec<(String, u32)> = Vec::new();
        for item in &self.items {
            if let Err(e) = products
                .reserve_stock(item.product_id.clone(), item.quantity)
                .await
            {
                release_reserved(products, &reserved).await;
                return Err(e.to_string());
            }
            reserved.push((item.product_id.clone(), item.quantity));
        }
        Ok(())
    }

    /// Applies an administrative correction to items and/or delivery fee.
    ///
    /// Totals are recomputed in the same message, so the stored cache never
    /// goes stale through this path. Validation runs against the corrected
    /// candidate before anything is committed.
    async fn on_update(&mut self, update: OrderUpdate, _products: &ProductClient) -> Result<(), String> {
        let items = update.items.unwrap_or_else(|| self.items.clone());
        let delivery_fee = update.delivery_fee.unwrap_or(self.delivery_fee);

        let totals = compute_totals(&items, delivery_fee).map_err(|e| e.to_string())?;

        self.items = items;
        self.delivery_fee = delivery_fee;
        self.subtotal = totals.subtotal;
        self.total = totals.total;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        products: &ProductClient,
    ) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::Confirm => {
                if self.status != OrderStatus::Pending {
                    return Err(format!("cannot confirm a {:?} order", self.status));
                }
                self.status = OrderStatus::Confirmed;
                Ok(OrderActionResult::Confirm(self.status))
            }
            OrderAction::Cancel => {
                if !matches!(self.status, OrderStatus::Pending | OrderStatus::Confirmed) {
                    return Err(format!("cannot cancel a {:?} order", self.status));
                }
                let reserved: Vec<(String, u32)> = self
                    .items
                    .iter()
                    .map(|item| (item.product_id.clone(), item.quantity))
                    .collect();
                release_reserved(products, &reserved).await;
                self.status = OrderStatus::Cancelled;
                Ok(OrderActionResult::Cancel(self.status))
            }
            OrderAction::Reconcile => {
                let outcome = reconcile(self).map_err(|e| e.to_string())?;
                Ok(OrderActionResult::Reconcile(outcome))
            }
            OrderAction::Repair => {
                let totals =
                    compute_totals(&self.items, self.delivery_fee).map_err(|e| e.to_string())?;
                self.subtotal = totals.subtotal;
                self.total = totals.total;
                Ok(OrderActionResult::Repair(totals))
            }
        }
    }
}
