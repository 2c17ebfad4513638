//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// `?page=N` query parameter shared by every listing endpoint.
///
/// Uses `serde_with` to parse the page number from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 10000, message = "Page must be between 1 and 10000"))]
    pub page: Option<u32>,
}

impl PageQuery {
    /// Requested page, defaulting to 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}
