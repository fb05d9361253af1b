//! System orchestration, configuration, startup, and shutdown logic.

pub mod store_system;
pub mod tracing;
pub mod error;
pub mod config;
pub mod seed;

pub use store_system::*;
pub use self::tracing::*;
pub use error::*;
pub use config::*;
pub use seed::*;
