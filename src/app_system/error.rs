use thiserror::Error;

pub use crate::order_actor::OrderError;
pub use crate::product_actor::ProductError;
pub use crate::settings_actor::SettingsError;
pub use crate::storefront::{AdminError, ScanError};
pub use crate::user_actor::UserError;

/// Malformed configuration value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Any failure surfaced by the storefront.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Task failed: {0}")]
    Task(String),
}
