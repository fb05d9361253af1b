pub mod product;
pub mod cart;
pub mod order;
pub mod user;
pub mod settings;

pub use product::*;
pub use cart::*;
pub use order::*;
pub use user::*;
pub use settings::*;
