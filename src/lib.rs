pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::error::ApiError;
pub use domain::product::Product;
pub use domain::user::User;
pub use storage::store::{Keyed, Store};
