//! Typed handles for talking to the store's actors.

#[macro_use]
mod macros;

pub mod product_client;
pub mod user_client;
pub mod order_client;
pub mod settings_client;

pub use product_client::*;
pub use user_client::*;
pub use order_client::*;
pub use settings_client::*;
