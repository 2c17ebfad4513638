//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness response with the configured upstreams.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstreams: Vec<UpstreamInfo>,
}

/// One configured upstream host.
#[derive(Debug, Serialize)]
pub struct UpstreamInfo {
    pub name: String,
    pub host: String,
}
