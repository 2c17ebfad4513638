//! Static header set for the catalog API.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use crate::domain::entities::Credentials;
use crate::error::FetchError;

const ZONE_ID: HeaderName = HeaderName::from_static("zoneid");
const LOCALIZATION: HeaderName = HeaderName::from_static("x-localization");
const GUEST_ID: HeaderName = HeaderName::from_static("guest_id");

/// Tenant headers attached to every catalog request.
///
/// `Authorization: Bearer <token>` is sent iff the caller has a token;
/// otherwise the configured `guest_id` is sent instead. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHeaders {
    pub zone_id: String,
    pub locale: String,
    pub guest_id: String,
}

impl ApiHeaders {
    pub fn new(
        zone_id: impl Into<String>,
        locale: impl Into<String>,
        guest_id: impl Into<String>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            locale: locale.into(),
            guest_id: guest_id.into(),
        }
    }

    /// Builds the header map for a request made with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Header`] if a value contains characters not
    /// allowed in an HTTP header.
    pub fn to_header_map(&self, credentials: &Credentials) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ZONE_ID, value(&self.zone_id, "zoneId")?);
        headers.insert(LOCALIZATION, value(&self.locale, "X-localization")?);

        match credentials.token() {
            Some(token) => {
                let mut auth = value(&format!("Bearer {token}"), "Authorization")?;
                auth.set_sensitive(true);
                headers.insert(AUTHORIZATION, auth);
            }
            None => {
                headers.insert(GUEST_ID, value(&self.guest_id, "guest_id")?);
            }
        }

        Ok(headers)
    }
}

fn value(raw: &str, name: &'static str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(raw).map_err(|_| FetchError::Header(name))
}
