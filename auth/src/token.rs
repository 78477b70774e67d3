//! HS256 session tokens.
//!
//! A token carries the user id, the username and an expiry timestamp. It is
//! only accepted while it is also the token cached for that username, so a
//! logout or refresh invalidates older tokens before they expire.

use crate::error::{AuthError, Result};
use chrono::{TimeDelta, Utc};
use hotel_core::UserId;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default session lifetime.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Claims embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user id
    pub user_id: UserId,
    /// Authenticated username
    pub username: String,
    /// Expiry as a Unix timestamp in seconds
    pub exp: i64,
}

/// Signs and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Issuer for `secret` with tokens living for `ttl`.
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Token lifetime.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a fresh token for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Internal`] if signing fails.
    pub fn issue(&self, user_id: UserId, username: &str) -> Result<String> {
        let claims = Claims {
            user_id,
            username: username.to_string(),
            exp: self.expiry()?,
        };
        self.sign(&claims)
    }

    /// Re-sign existing claims with a new expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Internal`] if signing fails.
    pub fn reissue(&self, claims: &Claims) -> Result<String> {
        let claims = Claims {
            exp: self.expiry()?,
            ..claims.clone()
        };
        self.sign(&claims)
    }

    /// Verify signature, algorithm and expiry, returning the claims.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] for any verification failure.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                AuthError::InvalidToken
            })
    }

    fn expiry(&self) -> Result<i64> {
        let ttl = TimeDelta::from_std(self.ttl)
            .map_err(|e| AuthError::Internal(format!("token ttl out of range: {e}")))?;
        Ok((Utc::now() + ttl).timestamp())
    }

    fn sign(&self, claims: &Claims) -> Result<String> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("failed to create token: {e}")))
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
