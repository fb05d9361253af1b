//! Catalog entries as actor-managed entities, keyed by SKU.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
