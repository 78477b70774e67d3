//! # Hotel Authentication
//!
//! Back-office user accounts and bearer-token sessions.
//!
//! ## Sessions
//!
//! Login checks a bcrypt hash and issues an HS256 token with claims
//! `{user_id, username, exp}`. The token is also written to a
//! [`TokenCache`](providers::TokenCache) under `jwt-token-{username}`, and a
//! request token is accepted only while it matches the cached one:
//!
//! ```text
//! login ──► issue token ──► cache.put(username, token, ttl)
//! request ──► verify signature/exp ──► cache.get(username) == token ?
//! logout ──► cache.delete(username)
//! refresh ──► cache.get ──► verify ──► re-sign ──► cache.put
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use hotel_auth::{AuthService, PasswordHasher, TokenIssuer, DEFAULT_TOKEN_TTL};
//! use hotel_auth::stores::RedisTokenCache;
//!
//! let cache = RedisTokenCache::new("redis://127.0.0.1:6379").await?;
//! let tokens = TokenIssuer::new(secret.as_bytes(), DEFAULT_TOKEN_TTL);
//! let auth = AuthService::new(store, cache, tokens, PasswordHasher::default());
//!
//! let session = auth.login("desk", "secret123").await?;
//! let claims = auth.authenticate(&session.token).await?;
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod password;
pub mod providers;
pub mod service;
pub mod stores;
pub mod token;
pub mod user;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

pub use error::{AuthError, Result};
pub use password::PasswordHasher;
pub use service::{AuthResponse, AuthService};
pub use token::{Claims, DEFAULT_TOKEN_TTL, TokenIssuer};
pub use user::{PasswordChange, Registration, UserService};
