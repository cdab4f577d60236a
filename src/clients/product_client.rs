use async_trait::async_trait;
use tracing::{debug, instrument};

use super::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product (catalog) actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!(?params, "create_product called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: String,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!(?update, "update_product called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(stock) => Ok(stock),
            other => Err(ProductError::Rejected(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: String, quantity: u32) -> Result<(), ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::ReserveStock(()) => Ok(()),
            other => Err(ProductError::Rejected(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: String, quantity: u32) -> Result<(), ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReleaseStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::ReleaseStock(()) => Ok(()),
            other => Err(ProductError::Rejected(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from_framework(e)
    }
}
