//! User management.

use atadiesel_core::UserId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::db::UserRepository;
use crate::error::Result;
use crate::models::{User, UserForm};
use crate::state::AppState;

/// GET /users
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(UserRepository::new(state.db()).list_all().await)
}

/// Register a user.
///
/// POST /users
///
/// # Errors
///
/// Returns 400 for a blank name or malformed email and 409 if the email is
/// taken.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<UserForm>,
) -> Result<(StatusCode, Json<User>)> {
    let user = form.into_user(UserId::new(Uuid::new_v4().to_string()), Utc::now())?;
    let user = UserRepository::new(state.db()).create(user).await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's details.
///
/// PUT /users/{id}
///
/// # Errors
///
/// Returns 400 for invalid input, 404 for unknown ids and 409 if the email
/// belongs to another user.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(form): Json<UserForm>,
) -> Result<Json<User>> {
    // created_at is kept from the stored record
    let user = form.into_user(id, Utc::now())?;
    let user = UserRepository::new(state.db()).update(user).await?;

    tracing::info!(user_id = %user.id, active = user.active, "User updated");

    Ok(Json(user))
}

/// DELETE /users/{id}
///
/// # Errors
///
/// Returns 404 for unknown ids.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<StatusCode> {
    UserRepository::new(state.db()).delete(&id).await?;
    tracing::info!(user_id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
