#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use httpmock::MockServer;
use httpmock::prelude::HttpMockRequest;
use serde_json::{Value, json};
use storefront::api::handlers::health_handler;
use storefront::config::Config;
use storefront::domain::entities::PageSources;
use storefront::routes::upstream_routes;
use storefront::state::AppState;

pub const ABOUT_PATH: &str = "/business-page/about-us";
pub const CONTACT_PATH: &str = "/page/contact-us";
pub const PRIVACY_PATH: &str = "/business-page/privacy-policy";
pub const TERMS_PATH: &str = "/business-page/terms-and-conditions";

/// Default configuration with every upstream pointed at the mock servers.
pub fn test_config(cms: &MockServer, api: &MockServer) -> Config {
    Config {
        api_url: api.base_url(),
        page_sources: PageSources {
            about: cms.url(ABOUT_PATH),
            contact: cms.url(CONTACT_PATH),
            privacy: cms.url(PRIVACY_PATH),
            terms: cms.url(TERMS_PATH),
        },
        http_timeout_seconds: 5,
        ..Config::default()
    }
}

/// Full route table without the rate limiter (which needs a peer address).
pub fn test_server(config: &Config) -> TestServer {
    let state = AppState::from_config(config).unwrap();
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(upstream_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub fn cms_document(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>CMS</title></head><body><header>nav</header>{body}<footer>f</footer></body></html>")
}

pub fn listing_envelope(services: Value, total: u64, per_page: u64) -> Value {
    json!({
        "response_code": "default_200",
        "message": "Successfully fetched data",
        "content": {
            "current_page": 1,
            "data": services,
            "per_page": per_page,
            "total": total
        }
    })
}

pub fn service_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "short_description": format!("{name} at home"),
        "thumbnail_full_path": format!("https://cdn.example.com/{id}.png"),
        "category_id": "c-7",
        "category": {
            "name": "Cleaning",
            "image_full_path": "https://cdn.example.com/cleaning.png"
        }
    })
}

/// Whether the upstream request carried `name` (case-insensitive).
pub fn has_header(req: &HttpMockRequest, name: &str) -> bool {
    req.headers
        .iter()
        .flatten()
        .any(|(key, _)| key.eq_ignore_ascii_case(name))
}
