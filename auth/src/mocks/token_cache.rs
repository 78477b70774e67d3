//! Mock token cache for testing.

use crate::error::{AuthError, Result};
use crate::providers::TokenCache;
use crate::providers::token_cache::token_key;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory token cache.
///
/// TTLs are recorded but not enforced. Expiry is covered by the token's own
/// `exp` claim.
#[derive(Debug, Clone, Default)]
pub struct MockTokenCache {
    entries: Arc<Mutex<HashMap<String, (String, Duration)>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockTokenCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`AuthError::Cache`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// TTL recorded for `username`'s token (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Cache`] if the lock is poisoned.
    pub fn ttl_of(&self, username: &str) -> Result<Option<Duration>> {
        Ok(self.lock()?.get(&token_key(username)).map(|(_, ttl)| *ttl))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, (String, Duration)>>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Cache("token cache unavailable".to_string()));
        }
        self.entries
            .lock()
            .map_err(|e| AuthError::Cache(format!("Lock poisoned: {e}")))
    }
}

impl TokenCache for MockTokenCache {
    async fn put(&self, username: &str, token: &str, ttl: Duration) -> Result<()> {
        self.lock()?
            .insert(token_key(username), (token.to_string(), ttl));
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Option<String>> {
        Ok(self
            .lock()?
            .get(&token_key(username))
            .map(|(token, _)| token.clone()))
    }

    async fn delete(&self, username: &str) -> Result<()> {
        self.lock()?.remove(&token_key(username));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_delete() {
        let cache = MockTokenCache::new();
        cache
            .put("desk", "token-1", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get("desk").await.unwrap().as_deref(), Some("token-1"));
        assert_eq!(cache.ttl_of("desk").unwrap(), Some(Duration::from_secs(60)));

        cache
            .put("desk", "token-2", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get("desk").await.unwrap().as_deref(), Some("token-2"));

        cache.delete("desk").await.unwrap();
        assert_eq!(cache.get("desk").await.unwrap(), None);
        cache.delete("desk").await.unwrap();
    }

    #[tokio::test]
    async fn test_unavailable() {
        let cache = MockTokenCache::new();
        cache.set_unavailable(true);
        assert!(matches!(cache.get("desk").await, Err(AuthError::Cache(_))));
    }
}
