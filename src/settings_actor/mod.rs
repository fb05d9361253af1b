//! Single-record actor holding the store's admin settings.

pub mod service;
pub mod error;

pub use service::*;
pub use error::*;
