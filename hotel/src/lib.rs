//! # Hotel
//!
//! Hotel operations backend: room inventory, guest records, bookings and
//! back-office accounts over a JSON HTTP API.
//!
//! ## Architecture
//!
//! - **Domain** (`hotel-core`): booking lifecycle engine, room and guest
//!   services, store traits
//! - **Persistence** (`hotel-postgres`): `PostgreSQL` stores and migrations
//! - **Sessions** (`hotel-auth`): bcrypt passwords, HS256 tokens cached in
//!   Redis
//! - **HTTP** (this crate on top of `hotel-web`): routes, request
//!   validation, the auth guard and business metrics
//!
//! ## Running
//!
//! ```bash
//! AUTH_JWT_SECRET=change-me cargo run --bin server
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod metrics;
pub mod server;

pub use config::{Config, ConfigError};
pub use server::{AppState, build_router};
