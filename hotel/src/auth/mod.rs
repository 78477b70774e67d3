//! Session endpoints and the request guard.

pub mod handlers;
pub mod middleware;

pub use middleware::{AuthUser, require_auth};
