use crate::domain::product::Product;
use crate::domain::user::User;
use crate::storage::store::Store;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// Shared application state: one store per entity kind, each behind its own
/// lock. The two collections are independent; no request touches both.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<RwLock<Store<Product>>>,
    pub users: Arc<RwLock<Store<User>>>,
}

impl AppState {
    pub fn new(products: Store<Product>, users: Store<User>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Store::new(), Store::new())
    }
}

/// Body of every rejected request.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

// The structs below only describe request bodies for the OpenAPI document.
// Handlers read the raw JSON instead, because the update rules distinguish
// "key absent" from "key present but null", which typed extraction erases.

#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: f64,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
}

#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}
