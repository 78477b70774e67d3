//! Redis-based token cache implementation.
//!
//! # Architecture
//!
//! Tokens are stored in Redis with:
//! - **Key**: `jwt-token-{username}` → the raw token string
//! - **TTL**: the token lifetime, so the key disappears when the token expires
//!
//! `SETEX` replaces any previous token for the user in one command.
//!
//! # Example
//!
//! ```no_run
//! use hotel_auth::stores::RedisTokenCache;
//! use hotel_auth::providers::TokenCache;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = RedisTokenCache::new("redis://127.0.0.1:6379").await?;
//! cache.put("desk", "eyJhbGciOi...", Duration::from_secs(900)).await?;
//! assert!(cache.get("desk").await?.is_some());
//! # Ok(())
//! # }
//! ```

use crate::error::{AuthError, Result};
use crate::providers::TokenCache;
use crate::providers::token_cache::token_key;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::time::Duration;

/// `Redis`-backed token cache.
///
/// # Thread Safety
///
/// This type is `Clone` and can be safely shared across threads.
/// Each clone shares the same `ConnectionManager`.
#[derive(Clone)]
pub struct RedisTokenCache {
    conn_manager: ConnectionManager,
}

impl RedisTokenCache {
    /// Connect to `Redis`.
    ///
    /// # Connection URL Format
    ///
    /// - TCP: `redis://[:password@]host[:port][/database]`
    /// - TLS: `rediss://[:password@]host[:port][/database]`
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Cache`] if the URL is malformed or the server
    /// cannot be reached.
    pub async fn new(redis_url: &str) -> Result<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| AuthError::Cache(format!("Failed to create Redis client: {e}")))?;

        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            AuthError::Cache(format!("Failed to create Redis connection manager: {e}"))
        })?;

        tracing::info!("RedisTokenCache initialized successfully");

        Ok(Self { conn_manager })
    }

    /// Cheap connectivity probe for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Cache`] if `PING` fails.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.conn_manager.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| AuthError::Cache(format!("Redis ping failed: {e}")))?;
        Ok(())
    }
}

impl TokenCache for RedisTokenCache {
    async fn put(&self, username: &str, token: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.conn_manager.clone();
        let ttl_seconds = ttl.as_secs().max(1);

        let _: () = conn
            .set_ex(token_key(username), token, ttl_seconds)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, username, "Failed to store token in Redis");
                AuthError::Cache("failed to store token in Redis".to_string())
            })?;

        tracing::debug!(username, ttl_seconds, "Stored token in Redis");
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Option<String>> {
        let mut conn = self.conn_manager.clone();

        conn.get(token_key(username)).await.map_err(|e| {
            tracing::error!(error = %e, username, "Failed to get token from Redis");
            AuthError::Cache("failed to get token from Redis".to_string())
        })
    }

    async fn delete(&self, username: &str) -> Result<()> {
        let mut conn = self.conn_manager.clone();

        let deleted: i32 = conn.del(token_key(username)).await.map_err(|e| {
            tracing::error!(error = %e, username, "Failed to delete token from Redis");
            AuthError::Cache("failed to delete token from Redis".to_string())
        })?;

        if deleted > 0 {
            tracing::debug!(username, "Deleted token from Redis");
        } else {
            tracing::trace!(username, "Token delete: key not found");
        }
        Ok(())
    }
}
