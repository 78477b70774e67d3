//! Error types for the hotel domain.

use std::fmt;
use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, HotelError>;

/// Failures raised by the booking engine, the services and the stores.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// A room, booking, guest or user does not exist.
    #[error("{resource} not found: {key}")]
    NotFound {
        /// Kind of record looked up
        resource: &'static str,
        /// Key used for the lookup
        key: String,
    },

    /// The room is not Available at booking time.
    #[error("room not available")]
    RoomUnavailable,

    /// The linked room is not Available, so the booking cannot be rescheduled.
    #[error("invalid room status")]
    InvalidRoomStatus,

    /// The booking is no longer Pending, so it cannot be rescheduled.
    #[error("invalid payment status")]
    InvalidPaymentStatus,

    /// Input rejected before reaching a store.
    #[error("{0}")]
    Validation(String),

    /// Opaque persistence failure.
    #[error("store error: {0}")]
    Store(String),
}

impl HotelError {
    /// Shorthand for [`HotelError::NotFound`].
    #[must_use]
    pub fn not_found(resource: &'static str, key: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    /// Whether the caller can fix the request (bad input or unknown key).
    ///
    /// Every other kind is reported as a server failure.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(HotelError::RoomUnavailable.to_string(), "room not available");
        assert_eq!(
            HotelError::not_found("booking", "abc").to_string(),
            "booking not found: abc"
        );
    }

    #[test]
    fn test_user_errors() {
        assert!(HotelError::Validation("x".into()).is_user_error());
        assert!(HotelError::not_found("room", "R1").is_user_error());
        assert!(!HotelError::InvalidPaymentStatus.is_user_error());
        assert!(!HotelError::Store("boom".into()).is_user_error());
    }
}
