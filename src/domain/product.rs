//! The product entity and its creation/patch rules.
//!
//! Creation and patch bodies arrive as raw JSON so that "key absent" and
//! "key present with a null/empty value" stay distinguishable; the rules
//! below depend on that distinction (see DESIGN.md for the full matrix).

use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::domain::coerce;
use crate::domain::error::ApiError;
use crate::infra::id;
use crate::storage::store::Keyed;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    /// Generated at creation, immutable afterwards.
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: f64,
    /// Serialized as an explicit `null` when unset.
    pub rating: Option<f64>,
    /// Image URL; serialized as an explicit `null` when unset.
    pub image: Option<String>,
}

impl Keyed for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Required text field for creation: missing or falsy rejects with 400,
/// a truthy non-string value is an internal error (there is nothing
/// sensible to trim).
fn required_text(body: &JsonValue, key: &str) -> Result<String, ApiError> {
    let v = body.get(key).ok_or(ApiError::MissingFields(
        ApiError::MISSING_PRODUCT_FIELDS,
    ))?;
    if !coerce::is_truthy(v) {
        return Err(ApiError::MissingFields(ApiError::MISSING_PRODUCT_FIELDS));
    }
    match v.as_str() {
        Some(s) => Ok(s.trim().to_string()),
        None => Err(ApiError::Internal(format!(
            "product field '{key}' is not a string: {v}"
        ))),
    }
}

/// Required numeric field for creation: checked by presence, not
/// truthiness, so an explicit 0 is accepted. An absent key, an explicit
/// null, or a value that will not coerce all reject with 400.
fn required_number(body: &JsonValue, key: &str) -> Result<f64, ApiError> {
    match body.get(key) {
        None | Some(JsonValue::Null) => {
            Err(ApiError::MissingFields(ApiError::MISSING_PRODUCT_FIELDS))
        }
        Some(v) => coerce::to_number(v)
            .map_err(|_| ApiError::MissingFields(ApiError::MISSING_PRODUCT_FIELDS)),
    }
}

impl Product {
    /// Validates a creation body and builds the product with a fresh id.
    pub fn create(body: &JsonValue) -> Result<Self, ApiError> {
        let name = required_text(body, "name")?;
        let category = required_text(body, "category")?;
        let description = required_text(body, "description")?;
        let price = required_number(body, "price")?;
        let stock = required_number(body, "stock")?;

        // Optional fields: a present rating is coerced (0 kept as 0), an
        // absent one stays null; a falsy image collapses to null.
        let rating = match body.get("rating") {
            None | Some(JsonValue::Null) => None,
            Some(v) => Some(
                coerce::to_number(v)
                    .map_err(|_| ApiError::MissingFields(ApiError::MISSING_PRODUCT_FIELDS))?,
            ),
        };
        let image = match body.get("image") {
            Some(v) if coerce::is_truthy(v) => match v.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    return Err(ApiError::MissingFields(ApiError::MISSING_PRODUCT_FIELDS))
                }
            },
            _ => None,
        };

        Ok(Self {
            id: id::generate(),
            name,
            category,
            description,
            price,
            stock,
            rating,
            image,
        })
    }

    /// Applies a partial update: only keys present in the body change the
    /// stored record.
    ///
    /// Field quirks preserved from the original contract:
    /// - `rating` is truthiness-gated: a falsy value (null, 0, "") clears
    ///   the rating instead of storing 0.
    /// - `image` is stored as given, so an empty string is kept and an
    ///   explicit null clears it.
    pub fn apply_patch(&mut self, body: &JsonValue) -> Result<(), ApiError> {
        if let Some(v) = body.get("name") {
            self.name = patch_text("name", v)?;
        }
        if let Some(v) = body.get("category") {
            self.category = patch_text("category", v)?;
        }
        if let Some(v) = body.get("description") {
            self.description = patch_text("description", v)?;
        }
        if let Some(v) = body.get("price") {
            self.price = patch_number("price", v)?;
        }
        if let Some(v) = body.get("stock") {
            self.stock = patch_number("stock", v)?;
        }
        if let Some(v) = body.get("rating") {
            self.rating = if coerce::is_truthy(v) {
                Some(patch_number("rating", v)?)
            } else {
                None
            };
        }
        if let Some(v) = body.get("image") {
            self.image = match v {
                JsonValue::Null => None,
                JsonValue::String(s) => Some(s.clone()),
                other => {
                    return Err(ApiError::Internal(format!(
                        "product field 'image' is not a string: {other}"
                    )))
                }
            };
        }
        Ok(())
    }
}

fn patch_text(key: &str, v: &JsonValue) -> Result<String, ApiError> {
    match v.as_str() {
        Some(s) => Ok(s.trim().to_string()),
        None => Err(ApiError::Internal(format!(
            "product field '{key}' is not a string: {v}"
        ))),
    }
}

fn patch_number(key: &str, v: &JsonValue) -> Result<f64, ApiError> {
    coerce::to_number(v).map_err(|e| ApiError::Internal(format!("product field '{key}': {e}")))
}
