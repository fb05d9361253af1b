use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, params), fields(sku = %params.sku))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, sku: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!(?patch, "Sending request");
        self.inner.update(sku, patch).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn check_sellable(&self, sku: String) -> Result<bool, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(sku, ProductAction::CheckSellable).await? {
            ProductActionResult::Sellable(sellable) => Ok(sellable),
            other => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_active(&self, sku: String, active: bool) -> Result<bool, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(sku, ProductAction::SetActive(active)).await? {
            ProductActionResult::ActiveChanged(changed) => Ok(changed),
            other => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }
}
