//! Domain entities and their creation/patch rules.

pub mod coerce;
pub mod error;
pub mod product;
pub mod seed;
pub mod user;

pub use error::ApiError;
pub use product::Product;
pub use user::User;
