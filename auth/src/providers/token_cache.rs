//! Token cache trait.
//!
//! Holds the single live session token per username. A token is accepted
//! only while it equals the cached value, which makes logout and refresh
//! take effect immediately.

use crate::error::Result;
use std::time::Duration;

/// Key/value cache of live session tokens.
pub trait TokenCache: Send + Sync {
    /// Store `token` as the live token for `username`, expiring after `ttl`.
    ///
    /// Replaces any previous token for the user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AuthError::Cache`] if the cache is unreachable.
    fn put(
        &self,
        username: &str,
        token: &str,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// The live token for `username`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AuthError::Cache`] if the cache is unreachable.
    fn get(&self, username: &str)
    -> impl std::future::Future<Output = Result<Option<String>>> + Send;

    /// Drop the live token for `username`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AuthError::Cache`] if the cache is unreachable.
    fn delete(&self, username: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Cache key holding the live token of `username`.
#[must_use]
pub fn token_key(username: &str) -> String {
    format!("jwt-token-{username}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_key() {
        assert_eq!(token_key("desk"), "jwt-token-desk");
    }
}
