//! Data Transfer Objects for the JSON API.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for query parameter checks.

pub mod catalog;
pub mod health;
pub mod pagination;
