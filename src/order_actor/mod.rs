//! Placed orders and their preparation status.

pub mod entity;
pub mod error;

pub use entity::{OrderAction, OrderActionResult};
pub use error::*;
