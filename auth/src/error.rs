//! Error types for authentication and user management.

use hotel_core::HotelError;
use thiserror::Error;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Failure modes of login, token handling and user management.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    // ═══════════════════════════════════════════════════════════
    // Authentication Errors
    // ═══════════════════════════════════════════════════════════

    /// No user with the given username.
    #[error("user not found")]
    UserNotFound,

    /// Password did not match the stored hash.
    #[error("wrong password")]
    WrongPassword,

    /// Token failed signature or expiry checks, or is not the live token.
    #[error("invalid or expired token")]
    InvalidToken,

    /// No live token cached for the user.
    #[error("token not found")]
    TokenNotFound,

    /// Caller tried to act on another user's account.
    #[error("username does not match authenticated user")]
    Forbidden,

    // ═══════════════════════════════════════════════════════════
    // Input Errors
    // ═══════════════════════════════════════════════════════════

    /// Request field failed validation.
    #[error("{0}")]
    Validation(String),

    /// New password equals the old one.
    #[error("new password must be different from old password")]
    SamePassword,

    // ═══════════════════════════════════════════════════════════
    // Infrastructure Errors
    // ═══════════════════════════════════════════════════════════

    /// Token cache operation failed.
    #[error("token cache error: {0}")]
    Cache(String),

    /// User store operation failed.
    #[error(transparent)]
    Store(#[from] HotelError),

    /// Hashing or signing failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Whether the error should be reported as an authentication failure.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound | Self::WrongPassword | Self::InvalidToken | Self::TokenNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_text() {
        assert_eq!(AuthError::UserNotFound.to_string(), "user not found");
        assert_eq!(AuthError::WrongPassword.to_string(), "wrong password");
        assert_eq!(
            AuthError::InvalidToken.to_string(),
            "invalid or expired token"
        );
        assert_eq!(
            AuthError::Store(HotelError::Store("username already exists".into())).to_string(),
            "store error: username already exists"
        );
    }

    #[test]
    fn test_unauthorized_classification() {
        assert!(AuthError::WrongPassword.is_unauthorized());
        assert!(AuthError::TokenNotFound.is_unauthorized());
        assert!(!AuthError::SamePassword.is_unauthorized());
        assert!(!AuthError::Cache("down".into()).is_unauthorized());
    }
}
