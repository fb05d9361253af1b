use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during checkout and order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Customer name and email are required")]
    MissingCustomerDetails,
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,
    #[error("Invalid user: {0}")]
    InvalidUser(String),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Product unavailable: {0}")]
    ProductUnavailable(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Rejected(reason) => OrderError::ValidationError(reason),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
