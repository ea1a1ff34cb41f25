//! Application-level error type.
//!
//! Every rejected request maps to one of these variants; the HTTP layer
//! turns them into status codes and `{"error": "..."}` bodies.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Creation body missing or failing a required-field check.
    #[error("{0}")]
    MissingFields(&'static str),

    /// Unknown entity id. The kind name feeds the "<Kind> not found" body.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// User patch carrying none of the recognized fields.
    #[error("Nothing to update")]
    NothingToUpdate,

    /// Anything unexpected; details are logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub const MISSING_PRODUCT_FIELDS: &'static str = "Missing required fields";
    pub const MISSING_USER_FIELDS: &'static str = "Name and age are required";

    pub fn product_not_found() -> Self {
        Self::NotFound("Product")
    }

    pub fn user_not_found() -> Self {
        Self::NotFound("User")
    }
}
