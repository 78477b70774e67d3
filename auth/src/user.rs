//! User registration and password changes.

use crate::error::{AuthError, Result};
use crate::password::PasswordHasher;
use hotel_core::{HotelError, NewUser, User, UserStore};

/// Input for registering a user. The password is plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Display name, 3-100 characters
    pub name: String,
    /// Login name, 3-100 characters
    pub username: String,
    /// Password, 6-100 characters
    pub password: String,
    /// Contact email
    pub email: String,
}

/// Input for changing a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    /// Account to change
    pub username: String,
    /// Current password
    pub old_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Manages back-office user accounts.
#[derive(Debug, Clone)]
pub struct UserService<S> {
    users: S,
    hasher: PasswordHasher,
}

impl<S: UserStore> UserService<S> {
    /// Create a service.
    #[must_use]
    pub const fn new(users: S, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Validate and store a new user with a hashed password.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] for a field outside its length bounds or
    ///   an email without `@`
    /// - [`AuthError::Store`] for a duplicate username
    #[tracing::instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(&self, registration: Registration) -> Result<User> {
        check_length("name", &registration.name, 3, 100)?;
        check_length("username", &registration.username, 3, 100)?;
        check_length("password", &registration.password, 6, 100)?;
        check_email(&registration.email)?;

        let password_hash = self.hasher.hash(&registration.password)?;
        let user = self
            .users
            .insert_user(&NewUser {
                name: registration.name,
                username: registration.username,
                password_hash,
                email: registration.email,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Replace a user's password.
    ///
    /// `caller` is the authenticated username; it must own the account.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Forbidden`] if `caller` differs from the account
    /// - [`AuthError::Validation`] for passwords outside 6-100 characters
    /// - [`AuthError::UserNotFound`] for an unknown account
    /// - [`AuthError::WrongPassword`] if the old password does not match
    /// - [`AuthError::SamePassword`] if the new password matches the current one
    #[tracing::instrument(skip(self, change), fields(username = %change.username))]
    pub async fn change_password(&self, caller: &str, change: PasswordChange) -> Result<()> {
        check_length("old_password", &change.old_password, 6, 100)?;
        check_length("new_password", &change.new_password, 6, 100)?;
        if caller != change.username {
            return Err(AuthError::Forbidden);
        }

        let user = self
            .users
            .get_user_by_username(&change.username)
            .await
            .map_err(|e| match e {
                HotelError::NotFound { .. } => AuthError::UserNotFound,
                other => AuthError::Store(other),
            })?;

        if !self.hasher.verify(&change.old_password, &user.password_hash) {
            return Err(AuthError::WrongPassword);
        }
        if self.hasher.verify(&change.new_password, &user.password_hash) {
            return Err(AuthError::SamePassword);
        }

        let password_hash = self.hasher.hash(&change.new_password)?;
        self.users
            .update_password(&user.username, &password_hash)
            .await?;

        tracing::info!("Password changed");
        Ok(())
    }
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AuthError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<()> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(AuthError::Validation("email is invalid".to_string()));
    }
    Ok(())
}
