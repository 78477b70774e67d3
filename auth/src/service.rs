//! Login, logout, refresh and request authentication.

use crate::error::{AuthError, Result};
use crate::password::PasswordHasher;
use crate::providers::TokenCache;
use crate::token::{Claims, TokenIssuer};
use hotel_core::{HotelError, UserStore};
use serde::{Deserialize, Serialize};

/// Result of a successful login or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Authenticated username
    pub username: String,
    /// Display name, present on login only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Session token for the `Authorization: Bearer` header
    pub token: String,
}

/// Session management over a user store and a token cache.
#[derive(Debug, Clone)]
pub struct AuthService<S, C> {
    users: S,
    cache: C,
    tokens: TokenIssuer,
    hasher: PasswordHasher,
}

impl<S, C> AuthService<S, C>
where
    S: UserStore,
    C: TokenCache,
{
    /// Create a service.
    #[must_use]
    pub const fn new(users: S, cache: C, tokens: TokenIssuer, hasher: PasswordHasher) -> Self {
        Self {
            users,
            cache,
            tokens,
            hasher,
        }
    }

    /// Check credentials and open a session.
    ///
    /// The issued token becomes the user's only live token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::UserNotFound`] for an unknown username
    /// - [`AuthError::WrongPassword`] when the password does not match
    /// - [`AuthError::Cache`] if the token cannot be stored
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let user = self
            .users
            .get_user_by_username(username)
            .await
            .map_err(|e| match e {
                HotelError::NotFound { .. } => AuthError::UserNotFound,
                other => AuthError::Store(other),
            })?;

        if !self.hasher.verify(password, &user.password_hash) {
            tracing::info!(username, "Login rejected: wrong password");
            return Err(AuthError::WrongPassword);
        }

        let token = self.tokens.issue(user.id, &user.username)?;
        self.cache
            .put(&user.username, &token, self.tokens.ttl())
            .await?;

        tracing::info!(username, user_id = %user.id, "User logged in");
        Ok(AuthResponse {
            username: user.username,
            name: Some(user.name),
            token,
        })
    }

    /// Close the user's session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Cache`] if the cache is unreachable.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self, username: &str) -> Result<()> {
        self.cache.delete(username).await?;
        tracing::info!(username, "User logged out");
        Ok(())
    }

    /// Re-sign the user's live token with a fresh expiry.
    ///
    /// # Errors
    ///
    /// - [`AuthError::TokenNotFound`] if no token is cached
    /// - [`AuthError::InvalidToken`] if the cached token no longer verifies
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self, username: &str) -> Result<AuthResponse> {
        let current = self
            .cache
            .get(username)
            .await?
            .ok_or(AuthError::TokenNotFound)?;
        let claims = self.tokens.verify(&current)?;

        let token = self.tokens.reissue(&claims)?;
        self.cache.put(username, &token, self.tokens.ttl()).await?;

        tracing::debug!(username, "Token refreshed");
        Ok(AuthResponse {
            username: claims.username,
            name: None,
            token,
        })
    }

    /// Validate a bearer token presented with a request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] if the token fails verification
    /// or is not the live token cached for its username.
    pub async fn authenticate(&self, token: &str) -> Result<Claims> {
        let claims = self.tokens.verify(token)?;

        match self.cache.get(&claims.username).await? {
            Some(live) if live == token => Ok(claims),
            _ => {
                tracing::debug!(username = %claims.username, "Token is not the live session");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
