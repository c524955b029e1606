use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extractors::{ApiJson, ApiPath};
use crate::api::state::AppState;
use crate::auth::password::hash_password_async;
use crate::domain::user::{User, UserId, UserUpdate};
use crate::domain::DomainError;

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for a partial user update
///
/// Missing and `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User as returned by the API; the password is never included
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let password_hash = hash_password_async(req.password, state.bcrypt_cost)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let _guard = state.write_gate.lock().await;

    let id = state
        .users
        .next_id()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to allocate user id: {}", e)))?;

    let user = User::new(id, req.username, req.email, password_hash);
    state
        .users
        .save(&user)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save user: {}", e)))?;

    tracing::info!(user_id = id, "user created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// Get a user by ID
///
/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to load user: {}", e)))?
        .ok_or(DomainError::UserNotFound(user_id))?;

    Ok(Json(UserResponse::from(&user)))
}

/// Update some fields of a user
///
/// PUT /users/:user_id
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    // Hash before taking the write gate
    let password_hash = match req.password {
        Some(password) => Some(
            hash_password_async(password, state.bcrypt_cost)
                .await
                .map_err(|e| {
                    ApiError::internal_server_error(format!("Failed to hash password: {}", e))
                })?,
        ),
        None => None,
    };

    let _guard = state.write_gate.lock().await;

    let mut user = state
        .users
        .find_by_id(user_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to load user: {}", e)))?
        .ok_or(DomainError::UserNotFound(user_id))?;

    user.apply_update(UserUpdate {
        username: req.username,
        email: req.email,
        password_hash,
    })?;

    state
        .users
        .save(&user)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save user: {}", e)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// Delete a user and every playlist it owns
///
/// DELETE /users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_gate.lock().await;

    let removed = state
        .users
        .delete(user_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete user: {}", e)))?;

    if !removed {
        return Err(DomainError::UserNotFound(user_id).into());
    }

    let playlists_removed = state
        .playlists
        .delete_by_owner(user_id)
        .await
        .map_err(|e| {
            ApiError::internal_server_error(format!("Failed to delete owned playlists: {}", e))
        })?;

    tracing::info!(user_id, playlists_removed, "user deleted");

    Ok(StatusCode::NO_CONTENT)
}
