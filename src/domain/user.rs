//! The user entity and its creation/patch rules.

use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::domain::coerce;
use crate::domain::error::ApiError;
use crate::infra::id;
use crate::storage::store::Keyed;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    /// Generated at creation, immutable afterwards.
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl Keyed for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl User {
    /// Validates a creation body and builds the user with a fresh id.
    ///
    /// `name` is truthiness-checked (empty string rejects), `age` is
    /// presence-checked (0 is accepted).
    pub fn create(body: &JsonValue) -> Result<Self, ApiError> {
        let name = match body.get("name") {
            Some(v) if coerce::is_truthy(v) => match v.as_str() {
                Some(s) => s.trim().to_string(),
                None => {
                    return Err(ApiError::Internal(format!(
                        "user field 'name' is not a string: {v}"
                    )))
                }
            },
            _ => return Err(ApiError::MissingFields(ApiError::MISSING_USER_FIELDS)),
        };
        let age = match body.get("age") {
            None | Some(JsonValue::Null) => {
                return Err(ApiError::MissingFields(ApiError::MISSING_USER_FIELDS))
            }
            Some(v) => coerce::to_integer(v)
                .map_err(|_| ApiError::MissingFields(ApiError::MISSING_USER_FIELDS))?,
        };

        Ok(Self {
            id: id::generate(),
            name,
            age,
        })
    }

    /// Applies a partial update. Rejects with `NothingToUpdate` when the
    /// body carries neither recognized field; an `age` of 0 is applied,
    /// not dropped.
    pub fn apply_patch(&mut self, body: &JsonValue) -> Result<(), ApiError> {
        let name = body.get("name").filter(|v| !v.is_null());
        let age = body.get("age").filter(|v| !v.is_null());
        if name.is_none() && age.is_none() {
            return Err(ApiError::NothingToUpdate);
        }

        if let Some(v) = name {
            self.name = match v.as_str() {
                Some(s) => s.trim().to_string(),
                None => {
                    return Err(ApiError::Internal(format!(
                        "user field 'name' is not a string: {v}"
                    )))
                }
            };
        }
        if let Some(v) = age {
            self.age = coerce::to_integer(v)
                .map_err(|e| ApiError::Internal(format!("user field 'age': {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_trims_name_and_keeps_age() {
        let u = User::create(&json!({"name": "  Alice ", "age": 30})).unwrap();
        assert_eq!(u.name, "Alice");
        assert_eq!(u.age, 30);
    }

    #[test]
    fn create_accepts_age_zero() {
        let u = User::create(&json!({"name": "Newborn", "age": 0})).unwrap();
        assert_eq!(u.age, 0);
    }

    #[test]
    fn create_rejects_empty_name() {
        assert_eq!(
            User::create(&json!({"name": "", "age": 30})),
            Err(ApiError::MissingFields(ApiError::MISSING_USER_FIELDS))
        );
    }

    #[test]
    fn create_rejects_missing_age() {
        assert!(User::create(&json!({"name": "Bob"})).is_err());
    }

    #[test]
    fn create_coerces_age_string() {
        let u = User::create(&json!({"name": "Bob", "age": "42"})).unwrap();
        assert_eq!(u.age, 42);
    }

    #[test]
    fn empty_patch_rejects_with_nothing_to_update() {
        let mut u = User::create(&json!({"name": "Alice", "age": 30})).unwrap();
        assert_eq!(u.apply_patch(&json!({})), Err(ApiError::NothingToUpdate));
        assert_eq!(u.name, "Alice");
        assert_eq!(u.age, 30);
    }

    #[test]
    fn patch_age_zero_is_applied_not_dropped() {
        let mut u = User::create(&json!({"name": "Alice", "age": 30})).unwrap();
        u.apply_patch(&json!({"age": 0})).unwrap();
        assert_eq!(u.age, 0);
    }

    #[test]
    fn patch_single_field_leaves_other_untouched() {
        let mut u = User::create(&json!({"name": "Alice", "age": 30})).unwrap();
        u.apply_patch(&json!({"name": " Alicia "})).unwrap();
        assert_eq!(u.name, "Alicia");
        assert_eq!(u.age, 30);
    }

    #[test]
    fn unrecognized_keys_alone_reject() {
        let mut u = User::create(&json!({"name": "Alice", "age": 30})).unwrap();
        assert_eq!(
            u.apply_patch(&json!({"email": "a@example.com"})),
            Err(ApiError::NothingToUpdate)
        );
    }
}
