//! User registration and login handlers.
//!
//! There is no session layer behind these endpoints: login hands back a
//! fabricated token that nothing else ever validates.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pocketshop_core::User;

use crate::error::AppError;
use crate::state::AppState;

/// Registration request body.
///
/// Fields default to empty strings when absent, matching the loose bodies
/// the demo frontend sends.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response from creating a user.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: User,
}

/// Response from a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Register a new user.
///
/// POST /users
///
/// Always succeeds on a parsable body; duplicate usernames produce distinct
/// users with their own IDs.
///
/// # Errors
///
/// Returns `AppError::MalformedBody` when the body is not valid JSON for
/// the schema.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(req) = body?;

    let user = state.store().register(req.username, req.password);
    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(RegisterResponse {
        message: "user created",
        user,
    }))
}

/// Log a user in.
///
/// POST /users/login
///
/// # Errors
///
/// Returns `AppError::MalformedBody` on an unparsable body and
/// `AppError::InvalidCredentials` when no user matches.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(req) = body?;

    let token = state.store().authenticate(&req.username, &req.password)?;

    Ok(Json(LoginResponse { token }))
}
