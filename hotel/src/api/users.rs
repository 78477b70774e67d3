//! Back-office account endpoints.

use crate::api::required;
use crate::auth::AuthUser;
use crate::server::state::{AppState, SessionCache};
use axum::extract::State;
use hotel_auth::{PasswordChange, Registration};
use hotel_core::HotelStore;
use hotel_web::{ApiResponse, JsonBody, WebResult};
use serde::Deserialize;

/// `POST /api/register` body.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display name, 3-100 characters
    #[serde(default)]
    pub name: String,
    /// Login name, 3-100 characters
    #[serde(default)]
    pub username: String,
    /// Plaintext password, 6-100 characters
    #[serde(default)]
    pub password: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
}

/// `PUT /api/password` body.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    /// Account to change, must be the caller
    #[serde(default)]
    pub username: String,
    /// Current password
    #[serde(default)]
    pub old_password: String,
    /// Replacement password
    #[serde(default)]
    pub new_password: String,
}

/// Create an account. Open to unauthenticated callers.
///
/// # Errors
///
/// 400 for fields outside their bounds, 500 if the username is taken.
#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn register<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> WebResult<ApiResponse<()>> {
    state
        .users
        .register(Registration {
            name: request.name,
            username: request.username,
            password: request.password,
            email: request.email,
        })
        .await?;

    Ok(ApiResponse::created_empty())
}

/// Change the caller's password.
///
/// # Errors
///
/// - 400 for blank or out-of-bounds fields, or an unchanged password
/// - 401 if the old password does not match
/// - 403 when `username` is not the caller
#[tracing::instrument(skip(state, user, request), fields(caller = %user.username))]
pub async fn change_password<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    user: AuthUser,
    JsonBody(request): JsonBody<ChangePasswordRequest>,
) -> WebResult<ApiResponse<()>> {
    required("username", &request.username)?;

    state
        .users
        .change_password(
            &user.username,
            PasswordChange {
                username: request.username,
                old_password: request.old_password,
                new_password: request.new_password,
            },
        )
        .await?;

    Ok(ApiResponse::success())
}
