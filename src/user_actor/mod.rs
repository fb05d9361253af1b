//! Shopper profiles behind the simulated sign-in.

pub mod entity;
pub mod error;

pub use entity::{UserAction, UserActionResult};
pub use error::*;
