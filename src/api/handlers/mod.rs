//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod services;

pub use health::health_handler;
pub use services::{list_services_handler, service_detail_handler, subcategory_services_handler};
