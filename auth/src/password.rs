//! bcrypt password hashing.

use crate::error::{AuthError, Result};

/// Hashes and verifies passwords with bcrypt.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher with an explicit work factor.
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Minimum-cost hasher for tests.
    #[must_use]
    pub const fn fast() -> Self {
        Self::new(4)
    }

    /// Hash a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Internal`] if bcrypt rejects the input.
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AuthError::Internal(format!("error hashing password: {e}")))
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed hash counts as a mismatch.
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::fast();
        let hash = hasher.hash("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(hasher.verify("secret123", &hash));
        assert!(!hasher.verify("secret124", &hash));
    }

    #[test]
    fn test_malformed_hash_is_mismatch() {
        assert!(!PasswordHasher::fast().verify("secret123", "not-a-hash"));
    }
}
