//! HTML template rendering handlers.

mod pages;
mod services;

pub use pages::{fragment_handler, home_handler, page_handler};
pub use services::{service_detail_page_handler, services_page_handler, subcategory_page_handler};
