mod common;

use axum::http::header::COOKIE;
use axum::http::{HeaderValue, StatusCode};
use common::{listing_envelope, service_json};
use httpmock::prelude::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_services_success_shape() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    api.mock_async(|when, then| {
        when.method(GET)
            .path("/api/v1/customer/service")
            .query_param("limit", "20")
            .query_param("offset", "2");
        then.status(200).json_body(listing_envelope(
            json!([service_json("s1", "Sofa Cleaning"), service_json("s2", "AC Repair")]),
            41,
            20,
        ));
    })
    .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/api/services").add_query_param("page", 2).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["services"].as_array().unwrap().len(), 2);
    assert_eq!(json["services"][0]["name"], "Sofa Cleaning");
    assert_eq!(json["total"], 41);
    assert_eq!(json["perPage"], 20);
    assert_eq!(json["totalPages"], 3);
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_list_services_non_success_envelope() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    api.mock_async(|when, then| {
        when.method(GET).path("/api/v1/customer/service");
        then.status(200).json_body(json!({
            "response_code": "default_404",
            "message": "Zone not found",
            "content": null
        }));
    })
    .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/api/services").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "error": "Failed to fetch services" })
    );
}

#[tokio::test]
async fn test_guest_id_sent_without_token() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    let mock = api
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/customer/service")
                .header("zoneid", "a02c55ff-cb84-4bbb-bf91-5300d1766a29")
                .header("x-localization", "en")
                .header("guest_id", "7e223db0-9f62-11f0-bba0-779e4e64bbc8")
                .matches(|req| !common::has_header(req, "authorization"));
            then.status(200)
                .json_body(listing_envelope(json!([]), 0, 20));
        })
        .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    server.get("/api/services").await.assert_status_ok();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_token_forwarded_instead_of_guest_id() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    let mock = api
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/customer/service/detail/s1")
                .header("authorization", "Bearer customer-token")
                .matches(|req| !common::has_header(req, "guest_id"));
            then.status(200).json_body(json!({
                "response_code": "default_200",
                "content": service_json("s1", "Sofa Cleaning")
            }));
        })
        .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server
        .get("/api/services/s1")
        .authorization_bearer("customer-token")
        .await;

    mock.assert_async().await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["service"]["id"], "s1");
    assert_eq!(json["service"]["category"]["name"], "Cleaning");
}

#[tokio::test]
async fn test_service_detail_failure() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    api.mock_async(|when, then| {
        when.method(GET).path("/api/v1/customer/service/detail/missing");
        then.status(404).json_body(json!({
            "response_code": "default_404",
            "message": "Resource not found"
        }));
    })
    .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/api/services/missing").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to fetch service details");
}

#[tokio::test]
async fn test_subcategory_derives_category() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    api.mock_async(|when, then| {
        when.method(GET)
            .path("/api/v1/customer/service/sub-category/c-7")
            .query_param("limit", "12")
            .query_param("offset", "1");
        then.status(200).json_body(json!({
            "response_code": "default_200",
            "content": {
                "current_page": 1,
                "last_page": 2,
                "total": 13,
                "per_page": 12,
                "data": [service_json("s1", "Sofa Cleaning")]
            }
        }));
    })
    .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/api/subcategories/c-7/services").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["currentPage"], 1);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["total"], 13);
    assert_eq!(json["category"]["id"], "c-7");
    assert_eq!(json["category"]["name"], "Cleaning");
    assert_eq!(json["category"]["description"], "Cleaning Services");
}

#[tokio::test]
async fn test_subcategory_http_error() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    api.mock_async(|when, then| {
        when.method(GET).path("/api/v1/customer/service/sub-category/c-7");
        then.status(500);
    })
    .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/api/subcategories/c-7/services").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"], "HTTP error! status: 500");
}

#[tokio::test]
async fn test_invalid_page_is_bad_request() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/api/services").add_query_param("page", 0).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_non_numeric_page_gets_json_error_body() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    let upstream = api
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(listing_envelope(json!([]), 0, 20));
        })
        .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    for path in ["/api/services", "/services", "/subcategories/c-7", "/api/subcategories/c-7/services"] {
        let response = server.get(path).add_query_param("page", "abc").await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error", "{path}");
        assert_eq!(body["error"]["message"], "Invalid query string", "{path}");
    }

    upstream.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_services_page_renders_grid() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    api.mock_async(|when, then| {
        when.method(GET).path("/api/v1/customer/service");
        then.status(200).json_body(listing_envelope(
            json!([service_json("s1", "Sofa Cleaning")]),
            41,
            20,
        ));
    })
    .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/services").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Sofa Cleaning"));
    assert!(html.contains(r#"href="/services/s1""#));
    assert!(html.contains("Page 1 of 3"));
    assert!(html.contains(r#"href="/services?page=2""#));
}

#[tokio::test]
async fn test_services_page_error_panel() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    api.mock_async(|when, then| {
        when.method(GET).path("/api/v1/customer/service");
        then.status(200).body("not json");
    })
    .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server.get("/services").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let html = response.text();
    assert!(html.contains("Services Unavailable"));
    assert!(html.contains(r#"data-state="error""#));
    assert!(!html.contains("service-grid"));
}

#[tokio::test]
async fn test_subcategory_page_uses_cookie_token() {
    let cms = MockServer::start_async().await;
    let api = MockServer::start_async().await;
    let mock = api
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/customer/service/sub-category/c-7")
                .header("authorization", "Bearer from-cookie");
            then.status(200).json_body(listing_envelope(
                json!([service_json("s1", "Sofa Cleaning")]),
                1,
                12,
            ));
        })
        .await;
    let server = common::test_server(&common::test_config(&cms, &api));

    let response = server
        .get("/subcategories/c-7")
        .add_header(COOKIE, HeaderValue::from_static("auth_token=from-cookie"))
        .await;

    mock.assert_async().await;
    response.assert_status_ok();
    assert!(response.text().contains("Cleaning Services"));
}
