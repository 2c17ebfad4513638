//! REST API layer for HTTP request/response handling.
//!
//! Exposes the catalog helpers as JSON endpoints with the normalized
//! `{success, ...}` / `{success: false, error}` shape.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Request extractors (caller credentials)
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and rate limiting layers
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
