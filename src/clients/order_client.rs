use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::pricing::{Reconciliation, Totals};

/// Client for interacting with the Order actor.
///
/// Checkout orchestration (stock reservation, totals computation) happens
/// in the Order actor's `on_create` hook; reconcile and repair run inside
/// the actor's sequential loop, which serializes them against every other
/// write to the same order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places a checkout order or imports a legacy record, depending on
    /// how the [`OrderCreate`] was built.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<String, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies an administrative correction; the actor recomputes totals
    /// in the same message.
    #[instrument(skip(self, update))]
    pub async fn correct_order(
        &self,
        id: String,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        debug!(?update, "correct_order called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn confirm_order(&self, id: String) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Confirm)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Confirm(status) => Ok(status),
            other => Err(OrderError::Validation(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: String) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Cancel)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Cancel(status) => Ok(status),
            other => Err(OrderError::Validation(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }

    /// Checks one order's stored totals against recomputation. Read-only.
    #[instrument(skip(self))]
    pub async fn reconcile_order(&self, id: String) -> Result<Reconciliation, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Reconcile)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Reconcile(outcome) => Ok(outcome),
            other => Err(OrderError::Validation(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }

    /// Overwrites one order's stored totals with their canonical
    /// recomputation and returns the totals applied.
    #[instrument(skip(self))]
    pub async fn repair_order(&self, id: String) -> Result<Totals, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Repair)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Repair(totals) => Ok(totals),
            other => Err(OrderError::Validation(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from_framework(e)
    }
}
