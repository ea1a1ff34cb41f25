use crate::domain::error::ApiError;
use crate::domain::user::User;
use crate::transport::http::types::{AppState, ErrorBody, NewUser, UserPatch};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users in insertion order", body = [User])
    )
)]
pub async fn list_users_handler(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.users.read().await;
    Json(users.list())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "Unknown user id", body = ErrorBody)
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let users = state.users.read().await;
    users.get(&id).map(Json).ok_or_else(ApiError::user_not_found)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Name and age are required", body = ErrorBody)
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::MissingFields(ApiError::MISSING_USER_FIELDS))?;
    let user = User::create(&body)?;

    let mut users = state.users.write().await;
    let stored = users.insert(user);
    tracing::debug!(id = %stored.id, "user created");
    Ok((StatusCode::CREATED, Json(stored)))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Nothing to update", body = ErrorBody),
        (status = 404, description = "Unknown user id", body = ErrorBody)
    )
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let mut users = state.users.write().await;
    let mut user = users.get(&id).ok_or_else(ApiError::user_not_found)?;

    let Json(body) = body.map_err(|_| ApiError::NothingToUpdate)?;
    user.apply_patch(&body)?;

    let updated = users
        .update(&id, move |u| *u = user)
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Unknown user id", body = ErrorBody)
    )
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut users = state.users.write().await;
    if users.remove(&id) {
        tracing::debug!(%id, "user deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::user_not_found())
    }
}
