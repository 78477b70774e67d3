//! Session endpoints: login, logout, refresh.

use crate::api::required;
use crate::auth::AuthUser;
use crate::metrics;
use crate::server::state::{AppState, SessionCache};
use axum::extract::State;
use hotel_auth::{AuthError, AuthResponse};
use hotel_core::HotelStore;
use hotel_web::{ApiResponse, JsonBody, WebResult};
use serde::Deserialize;

/// `POST /auth/login` body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account username
    #[serde(default)]
    pub username: String,
    /// Plaintext password
    #[serde(default)]
    pub password: String,
}

/// Exchange credentials for a session token.
///
/// # Errors
///
/// 400 for blank fields, 401 for an unknown user or wrong password, 500 if
/// the token cache is down.
#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn login<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> WebResult<ApiResponse<AuthResponse>> {
    required("username", &request.username)?;
    required("password", &request.password)?;

    match state.auth.login(&request.username, &request.password).await {
        Ok(session) => {
            metrics::record_login(true);
            Ok(ApiResponse::ok(session))
        }
        Err(err) => {
            if matches!(err, AuthError::UserNotFound | AuthError::WrongPassword) {
                metrics::record_login(false);
            }
            Err(err.into())
        }
    }
}

/// Drop the caller's live token.
///
/// # Errors
///
/// 401 without a live session, 500 if the token cache is down.
pub async fn logout<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    user: AuthUser,
) -> WebResult<ApiResponse<()>> {
    state.auth.logout(&user.username).await?;
    Ok(ApiResponse::success())
}

/// Re-sign the caller's live token with a fresh expiry.
///
/// # Errors
///
/// 401 without a live session, 500 if the token cache is down.
pub async fn refresh<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    user: AuthUser,
) -> WebResult<ApiResponse<AuthResponse>> {
    let session = state.auth.refresh(&user.username).await?;
    Ok(ApiResponse::ok(session))
}
