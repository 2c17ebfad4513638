//! CMS-backed informational page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde_json::json;

use crate::domain::entities::{Page, PageState};
use crate::error::AppError;
use crate::state::AppState;

/// Full page: layout, heading and a body in the loading state.
///
/// The body carries `data-fragment-url`; `static/fragment.js` fetches it and
/// swaps the loading indicator for whatever the fragment endpoint returns.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub page: Page,
    pub state: PageState,
}

/// Page body alone, in its final state.
#[derive(Template, WebTemplate)]
#[template(path = "fragment.html")]
pub struct FragmentTemplate {
    pub page: Page,
    pub state: PageState,
}

fn resolve(slug: &str) -> Result<Page, AppError> {
    Page::from_slug(slug)
        .ok_or_else(|| AppError::not_found("Page not found", json!({ "page": slug })))
}

/// `GET /` sends visitors to the service catalog.
pub async fn home_handler() -> Redirect {
    Redirect::to("/services")
}

/// Renders the page shell with the loading indicator.
///
/// # Endpoint
///
/// `GET /{page}` where `page` is `about`, `contact`, `privacy` or `terms`
/// (long aliases such as `privacy-policy` are accepted).
///
/// # Errors
///
/// Returns 404 Not Found for an unknown page.
pub async fn page_handler(Path(slug): Path<String>) -> Result<PageTemplate, AppError> {
    let page = resolve(&slug)?;

    Ok(PageTemplate {
        page,
        state: PageState::Loading,
    })
}

/// Fetches the page's CMS document and renders the extracted fragment.
///
/// # Endpoint
///
/// `GET /fragments/{page}`
///
/// # Response
///
/// - `200 OK` with the content block
/// - `502 Bad Gateway` with the error panel when the fetch, the parse or the
///   selector lookup fails
///
/// # Errors
///
/// Returns 404 Not Found for an unknown page.
pub async fn fragment_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let page = resolve(&slug)?;
    let body = state.page_service.render_state(page).await;

    let status = if body.error().is_some() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    Ok((status, FragmentTemplate { page, state: body }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Fragment;

    #[test]
    fn test_shell_renders_loading_only() {
        let html = PageTemplate {
            page: Page::Privacy,
            state: PageState::Loading,
        }
        .render()
        .unwrap();

        assert!(html.contains("Fetching policy details..."));
        assert!(html.contains(r#"data-fragment-url="/fragments/privacy""#));
        assert!(!html.contains(r#"data-state="ready""#));
        assert!(!html.contains(r#"data-state="error""#));
    }

    #[test]
    fn test_fragment_renders_content_unescaped() {
        let html = FragmentTemplate {
            page: Page::About,
            state: PageState::Ready(Fragment::new(
                r#"<div class="privacy-section"><p>Hello</p></div>"#,
            )),
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"<div class="privacy-section"><p>Hello</p></div>"#));
        assert!(!html.contains(r#"data-state="error""#));
        assert!(!html.contains(r#"data-state="loading""#));
    }

    #[test]
    fn test_fragment_renders_error_panel() {
        let html = FragmentTemplate {
            page: Page::Terms,
            state: PageState::Failed("Failed to fetch: Internal Server Error".into()),
        }
        .render()
        .unwrap();

        assert!(html.contains("Content Unavailable"));
        assert!(html.contains("Failed to fetch: Internal Server Error"));
        assert!(html.contains("Try Again"));
        assert!(!html.contains(r#"data-state="ready""#));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = FragmentTemplate {
            page: Page::Contact,
            state: PageState::Failed("<script>x</script>".into()),
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>x</script>"));
    }

    #[test]
    fn test_resolve_unknown_slug() {
        assert!(matches!(resolve("careers"), Err(AppError::NotFound { .. })));
        assert_eq!(resolve("terms-and-conditions").unwrap(), Page::Terms);
    }
}
