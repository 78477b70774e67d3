//! Authentication guard for protected routes.
//!
//! [`require_auth`] runs as a route layer in front of every protected route
//! and stores the [`AuthUser`] in the request extensions. Handlers that need
//! the caller extract [`AuthUser`] again, which reads the stored value.
//!
//! ```rust,ignore
//! async fn logout(user: AuthUser, State(state): State<AppState<S, C>>) -> WebResult<ApiResponse<()>> {
//!     state.auth.logout(&user.username).await?;
//!     Ok(ApiResponse::success())
//! }
//! ```

use crate::server::state::{AppState, SessionCache};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use hotel_core::{HotelStore, UserId};
use hotel_web::{AppError, BearerToken};

/// Authenticated caller, taken from a live bearer token.
///
/// Rejects with 401 when the header is missing, the token does not verify,
/// or it is no longer the cached token for its user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// User id from the token claims
    pub user_id: UserId,
    /// Username from the token claims
    pub username: String,
}

#[async_trait]
impl<S, C> FromRequestParts<AppState<S, C>> for AuthUser
where
    S: HotelStore,
    C: SessionCache,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S, C>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<Self>() {
            return Ok(user.clone());
        }

        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let claims = state.auth.authenticate(&token).await.map_err(|err| {
            tracing::debug!(error = %err, "Rejected bearer token");
            AppError::from(err)
        })?;

        Ok(Self {
            user_id: claims.user_id,
            username: claims.username,
        })
    }
}

/// Route layer rejecting requests without a live session.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/rooms", get(list_rooms::<S, C>))
///     .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth::<S, C>));
/// ```
pub async fn require_auth<S: HotelStore, C: SessionCache>(
    user: AuthUser,
    mut request: Request,
    next: Next,
) -> Response {
    request.extensions_mut().insert(user);
    next.run(request).await
}
