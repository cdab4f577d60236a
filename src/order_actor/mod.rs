//! Order-specific resource logic: checkout, the confirmation workflow,
//! and totals reconciliation/repair.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// The actor's context (a [`ProductClient`](crate::clients::ProductClient))
/// is injected later, at [`ResourceActor::run`].
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let order_id_counter = Arc::new(AtomicU64::new(1));
    let next_order_id = move || {
        let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("order_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_order_id);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
