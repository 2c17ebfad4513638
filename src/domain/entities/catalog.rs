//! Catalog records returned by the customer-service REST API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::error::FetchError;

/// `response_code` value the API uses for a successful call.
pub const SUCCESS_CODE: &str = "default_200";

/// JSON wrapper around every catalog API payload.
///
/// ```json
/// { "response_code": "default_200", "message": "...", "content": { ... } }
/// ```
///
/// `content` is decoded leniently: a payload that does not match `T` (the API
/// sends `[]` on some failures) is treated as absent rather than as a decode
/// error.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
    pub response_code: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default = "absent", deserialize_with = "lenient")]
    pub content: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.response_code == SUCCESS_CODE
    }

    /// Returns the content of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Envelope`] carrying `fallback` when the response
    /// code is not [`SUCCESS_CODE`] or the content is missing.
    pub fn into_content(self, fallback: &str) -> Result<T, FetchError> {
        match (self.is_success(), self.content) {
            (true, Some(content)) => Ok(content),
            _ => Err(FetchError::Envelope(fallback.to_string())),
        }
    }
}

fn absent<T>() -> Option<T> {
    None
}

/// Every envelope payload is a JSON object; anything else counts as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Accepts ids sent either as JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Paginated listing payload (`content` of a listing envelope).
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingContent {
    #[serde(default)]
    pub data: Option<Vec<Service>>,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub total: u64,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub per_page: u64,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub current_page: Option<u64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub last_page: Option<u64>,
}

/// A bookable service.
///
/// Only the fields the site reads are typed; everything else the API sends
/// is kept in `extra` and passed through unchanged when re-serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Service {
    /// Looks up an untyped string field.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.extra_str("thumbnail_full_path")
    }

    pub fn short_description(&self) -> Option<&str> {
        self.extra_str("short_description")
    }

    pub fn description(&self) -> Option<&str> {
        self.extra_str("description")
    }
}

/// Category reference embedded in a service record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_full_path: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Normalized result of the "all services" listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceList {
    pub services: Vec<Service>,
    pub total: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Normalized result of a subcategory listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryServices {
    pub services: Vec<Service>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub category: Option<CategorySummary>,
}

/// Category header derived from the first service of a subcategory page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub id: Option<String>,
    pub name: String,
    pub image_full_path: Option<String>,
    pub description: String,
}

impl CategorySummary {
    /// Derives the summary from the first service that has an embedded
    /// category. Returns `None` for an empty page.
    pub fn from_services(services: &[Service]) -> Option<Self> {
        let first = services.first()?;
        let category = first.category.as_ref()?;
        Some(Self {
            id: first.category_id.clone(),
            name: category.name.clone(),
            image_full_path: category.image_full_path.clone(),
            description: format!("{} Services", category.name),
        })
    }
}

/// Number of pages needed to show `total` items `per_page` at a time.
///
/// Zero when `per_page` is zero.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}
