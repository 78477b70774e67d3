//! Storage implementations for the auth system.
//!
//! - **Token Cache** (Redis) - live session token per username, with TTL

pub mod token_redis;

pub use token_redis::RedisTokenCache;
