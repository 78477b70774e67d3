//! Axum glue for the hotel backend.
//!
//! # Request Flow
//!
//! 1. **Correlation layer** tags the request and opens a tracing span
//! 2. **Extract** query, JSON body and bearer token
//! 3. **Call** the domain service (`hotel-core`, `hotel-auth`)
//! 4. **Map** the result into an [`ApiResponse`] or an [`AppError`]
//!
//! Both success and failure bodies use the `{code, message, data}` envelope.
//!
//! # Example
//!
//! ```ignore
//! use hotel_web::{ApiResponse, AppError};
//!
//! async fn get_room(
//!     State(state): State<AppState>,
//!     Query(query): Query<RoomQuery>,
//! ) -> Result<ApiResponse<RoomView>, AppError> {
//!     Ok(ApiResponse::ok(state.rooms.room_by_name(&query.name).await?))
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{BearerToken, CorrelationId, JsonBody, PathParam, QueryParams};
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer};
pub use response::ApiResponse;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
