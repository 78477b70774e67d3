//! Authentication providers.
//!
//! Traits for the external dependencies of the auth services. Concrete
//! implementations live in [`crate::stores`], test doubles in
//! [`crate::mocks`].

pub mod token_cache;

pub use token_cache::TokenCache;
