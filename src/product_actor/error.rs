use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product already exists: {0}")]
    AlreadyExists(String),
    #[error("Product is not available: {0}")]
    Unavailable(String),
    #[error("Invalid product: {0}")]
    Invalid(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(sku) => ProductError::NotFound(sku),
            FrameworkError::AlreadyExists(sku) => ProductError::AlreadyExists(sku),
            FrameworkError::Rejected(reason) => ProductError::Invalid(reason),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
