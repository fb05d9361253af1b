//! Shopper-facing session, the owner's admin console and the simulated menu scanner.

pub mod session;
pub mod admin;
pub mod scanner;

pub use session::*;
pub use admin::*;
pub use scanner::*;
