//! Request extractors shared by API and web handlers.

use axum::{
    extract::{FromRequestParts, Query},
    http::{header::COOKIE, request::Parts},
};
use axum_auth::AuthBearer;
use std::convert::Infallible;
use validator::Validate;

use crate::api::dto::pagination::PageQuery;
use crate::domain::entities::Credentials;
use crate::error::AppError;

/// Name of the cookie holding a signed-in customer's token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Credentials of the caller, forwarded to the catalog API.
///
/// # Resolution Order
///
/// 1. `Authorization: Bearer <token>` header
/// 2. `auth_token` cookie (browser sessions)
/// 3. Guest
///
/// Never rejects: a missing or malformed token simply means guest.
#[derive(Debug, Clone)]
pub struct CallerCredentials(pub Credentials);

impl<S> FromRequestParts<S> for CallerCredentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(AuthBearer(token)) = AuthBearer::from_request_parts(parts, state).await {
            return Ok(Self(Credentials::from_token(Some(token))));
        }

        Ok(Self(Credentials::from_token(cookie_token(parts))))
    }
}

/// Validated `?page=N`, defaulting to 1.
///
/// A page that is not a number, or is outside `1..=10000`, is rejected with
/// the JSON `400` body of [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedPage(pub u32);

impl<S> FromRequestParts<S> for RequestedPage
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state).await?;
        query.validate()?;
        Ok(Self(query.page()))
    }
}

/// Extracts the `auth_token` value from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and ignoring others.
fn cookie_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut kv = cookie.trim().splitn(2, '=');
                match (kv.next(), kv.next()) {
                    (Some(AUTH_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}
