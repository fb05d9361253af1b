use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::{ProductClient, UserClient};
use crate::domain::{CustomerDetails, Invoice, Order, OrderCreate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::product_actor::ProductError;

/// Client for interacting with the Order actor.
///
/// This client handles the checkout orchestration, validating the shopper and every
/// product before the order is created, prepared and filed in the shopper's history.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    product_client: ProductClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            user_client,
            product_client,
        }
    }

    /// Places an order for `invoice` and simulates its preparation.
    ///
    /// # Errors
    /// - `MissingCustomerDetails` / `EmptyCart` before anything is sent
    /// - `InvalidUser` when the shopper is unknown
    /// - `InvalidProduct` / `ProductUnavailable` when a line can no longer be sold
    #[instrument(skip(self, customer, invoice), fields(lines = invoice.items.len(), total = invoice.total))]
    pub async fn place_order(
        &self,
        user_id: String,
        customer: CustomerDetails,
        invoice: Invoice,
        prep_delay: Duration,
    ) -> Result<Order, OrderError> {
        info!("Processing place_order request");

        if !customer.is_complete() {
            return Err(OrderError::MissingCustomerDetails);
        }
        if invoice.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        // Step 1: Validate user
        match self.user_client.get_user(user_id.clone()).await {
            Ok(Some(user)) => info!(user_name = %user.name, "User validation successful"),
            Ok(None) => {
                error!("User not found");
                return Err(OrderError::InvalidUser(user_id));
            }
            Err(e) => {
                error!(error = %e, "User validation failed");
                return Err(OrderError::InvalidUser(format!("User validation failed: {}", e)));
            }
        }

        // Step 2: Every line must still be sellable
        for item in &invoice.items {
            match self.product_client.check_sellable(item.sku.clone()).await {
                Ok(true) => {}
                Ok(false) => {
                    warn!(sku = %item.sku, "Product archived since it was added");
                    return Err(OrderError::ProductUnavailable(item.sku.clone()));
                }
                Err(ProductError::NotFound(sku)) => {
                    error!(%sku, "Product not found");
                    return Err(OrderError::InvalidProduct(sku));
                }
                Err(e) => {
                    error!(error = %e, "Product validation failed");
                    return Err(OrderError::InvalidProduct(format!("Product validation failed: {}", e)));
                }
            }
        }
        info!("Product validation successful");

        // Step 3: Create the pending order
        let params = OrderCreate { user_id: user_id.clone(), customer, invoice };
        let order_id = self.inner.create(params).await?;
        info!(%order_id, "Order accepted, preparing");

        // Step 4: Simulated preparation
        if !prep_delay.is_zero() {
            tokio::time::sleep(prep_delay).await;
        }
        match self.inner.perform_action(order_id.clone(), OrderAction::Complete).await? {
            OrderActionResult::Completed(true) => debug!(%order_id, "Order marked completed"),
            OrderActionResult::Completed(false) => warn!(%order_id, "Order was already completed"),
        }
        let order = self.inner.get(order_id.clone()).await?
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?;

        // Step 5: File the order in the shopper's history
        self.user_client.record_order(user_id, order.clone()).await
            .map_err(|e| OrderError::InvalidUser(format!("Recording order failed: {}", e)))?;

        info!(%order_id, total = order.total, "Order completed");
        Ok(order)
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);
