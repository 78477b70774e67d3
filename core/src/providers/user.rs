//! User store trait.

use crate::error::Result;
use crate::types::{NewUser, User};

/// User store.
///
/// Passwords arrive already hashed; the store never sees plaintext.
pub trait UserStore: Send + Sync {
    /// Insert a user.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the username is taken or the write fails.
    fn insert_user(&self, user: &NewUser) -> impl std::future::Future<Output = Result<User>> + Send;

    /// Get a user by username.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if the username is unknown.
    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<User>> + Send;

    /// Replace a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if the username is unknown.
    fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
