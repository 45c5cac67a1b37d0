//! User registration, login, and management endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::EntityId;
use domain::{Role, User};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::boundary::required;
use crate::error::ApiError;

// -- Request types --

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial update: only the provided fields change.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: EntityId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user_id: EntityId,
    pub name: String,
    pub role: Role,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub message: String,
    pub user_id: EntityId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub message: String,
    pub deleted_user_id: EntityId,
}

fn parse_role(value: &str) -> Result<Role, ApiError> {
    value.parse().map_err(|reason| ApiError::Validation {
        field: "role",
        reason,
    })
}

// -- Handlers --

/// POST /users/register — create a user. Duplicate emails are not
/// rejected; the store enforces no uniqueness.
#[tracing::instrument(skip(state, req))]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let name = required(req.name, "name")?;
    let email = required(req.email, "email")?;
    let password = required(req.password, "password")?;
    let role = parse_role(&required(req.role, "role")?)?;

    let saved = state
        .users
        .register(User::new(name, email, password, role))
        .await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
        user_id: saved.id.unwrap_or_default(),
    }))
}

/// POST /users/login — check credentials. Unknown email and wrong
/// password are both 401 with distinct messages; inactive is 403.
#[tracing::instrument(skip(state, req))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = required(req.email, "email")?;
    let password = required(req.password, "password")?;

    let user = state.users.login(&email, &password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id: user.id.unwrap_or_default(),
        name: user.name,
        role: user.role,
    }))
}

/// GET /users — list all users in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.all_users().await?))
}

/// GET /users/:id — load a user by id.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;

    Ok(Json(user))
}

/// PUT /users/:id — partial update; absent fields keep their value.
#[tracing::instrument(skip(state, req))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    let mut user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;

    if let Some(name) = req.name {
        user.name = name;
    }
    if let Some(email) = req.email {
        user.email = email;
    }
    if let Some(password) = req.password {
        user.password = password;
    }
    if let Some(role) = req.role {
        user.role = parse_role(&role)?;
    }

    let updated = state.users.update_user(user).await?;

    Ok(Json(UpdateUserResponse {
        message: "User updated successfully".to_string(),
        user_id: updated.id.unwrap_or_default(),
    }))
}

/// DELETE /users/:id — remove a user; 404 if the id doesn't exist
/// (unlike orders, where a missing id deletes silently).
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    state.users.delete_user(id).await?;

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully".to_string(),
        deleted_user_id: id,
    }))
}

/// GET /users/role/:role — users with the given role.
#[tracing::instrument(skip(state))]
pub async fn by_role(
    State(state): State<Arc<AppState>>,
    Path(role): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let role = parse_role(&role)?;
    Ok(Json(state.users.find_by_role(role).await?))
}

/// GET /users/active/:flag — users filtered by the active flag.
#[tracing::instrument(skip(state))]
pub async fn by_active(
    State(state): State<Arc<AppState>>,
    Path(flag): Path<bool>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.find_by_active(flag).await?))
}
