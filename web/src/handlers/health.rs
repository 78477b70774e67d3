//! Health check endpoint.
//!
//! Used by load balancers and monitoring systems to verify the process is up.

use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Liveness check. Does not touch the database or cache.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"code":200,"message":"success","data":{"status":"ok","version":"0.1.0"}}
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
