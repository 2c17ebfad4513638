//! CMS-backed informational pages.

/// One of the site's informational pages whose body is scraped from a CMS.
///
/// Each page knows where its content lives by default, which CSS selectors
/// locate the fragment (first match wins), and the copy shown around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    About,
    Contact,
    Privacy,
    Terms,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::About, Page::Contact, Page::Privacy, Page::Terms];

    /// Resolves a URL path segment to a page.
    ///
    /// Accepts the short slug (`about`) as well as the long CMS-style alias
    /// (`about-us`, `privacy-policy`, `terms-and-conditions`).
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "about" | "about-us" => Some(Page::About),
            "contact" | "contact-us" => Some(Page::Contact),
            "privacy" | "privacy-policy" => Some(Page::Privacy),
            "terms" | "terms-and-conditions" => Some(Page::Terms),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::About => "about",
            Page::Contact => "contact",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            Page::About => "https://admin.workwaale.in/business-page/about-us",
            Page::Contact => "https://www.admin.clickads.in/page/contact-us",
            Page::Privacy => "https://www.admin.clickads.in/business-page/privacy-policy",
            Page::Terms => "https://www.admin.clickads.in/business-page/terms-and-conditions",
        }
    }

    /// CSS selectors tried in order against the fetched document.
    ///
    /// The about page is published by the CMS under the privacy section class.
    pub fn selectors(&self) -> &'static [&'static str] {
        match self {
            Page::About => &[".privacy-section"],
            Page::Contact => &[".contact-section"],
            Page::Privacy => &[".privacy-section"],
            Page::Terms => &[".privacy-section", ".terms-section"],
        }
    }

    /// Message shown when no selector matches.
    pub fn missing_message(&self) -> &'static str {
        match self {
            Page::About => "Content not found",
            Page::Contact => "Could not locate the contact details.",
            Page::Privacy => "Could not locate the privacy policy content.",
            Page::Terms => {
                "Could not locate the terms content. The page structure might have changed."
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::About => "About Us",
            Page::Contact => "Contact Us",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms & Conditions",
        }
    }

    /// Leading, unaccented part of the page heading.
    pub fn heading(&self) -> &'static str {
        match self {
            Page::About => "About",
            Page::Contact => "Get in",
            Page::Privacy => "Privacy",
            Page::Terms => "Terms &",
        }
    }

    /// Trailing, accented part of the page heading.
    pub fn heading_accent(&self) -> &'static str {
        match self {
            Page::About => "Us",
            Page::Contact => "Touch",
            Page::Privacy => "Policy",
            Page::Terms => "Conditions",
        }
    }

    pub fn tagline(&self) -> Option<&'static str> {
        match self {
            Page::About => None,
            Page::Contact => Some("We'd love to hear from you. Here is how you can reach us."),
            Page::Privacy => Some(
                "Your privacy is important to us. Please read how we collect, use, and protect your data.",
            ),
            Page::Terms => Some("Please read these terms carefully before using our services."),
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self {
            Page::About => "Fetching details...",
            Page::Contact => "Fetching contact details...",
            Page::Privacy => "Fetching policy details...",
            Page::Terms => "Loading terms...",
        }
    }

    pub fn error_title(&self) -> &'static str {
        match self {
            Page::About => "Unable to Load Content",
            Page::Contact => "Information Unavailable",
            Page::Privacy | Page::Terms => "Content Unavailable",
        }
    }

    pub fn retry_label(&self) -> &'static str {
        match self {
            Page::Terms => "Try Again",
            _ => "Retry",
        }
    }

    /// Contact details are laid out as a card grid rather than a prose card.
    pub fn is_card_grid(&self) -> bool {
        matches!(self, Page::Contact)
    }
}

/// Source URL for every page, overridable through configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSources {
    pub about: String,
    pub contact: String,
    pub privacy: String,
    pub terms: String,
}

impl PageSources {
    pub fn url_for(&self, page: Page) -> &str {
        match page {
            Page::About => &self.about,
            Page::Contact => &self.contact,
            Page::Privacy => &self.privacy,
            Page::Terms => &self.terms,
        }
    }

    /// Iterates `(page, url)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Page, &str)> {
        Page::ALL.into_iter().map(move |page| (page, self.url_for(page)))
    }
}

impl Default for PageSources {
    fn default() -> Self {
        Self {
            about: Page::About.default_url().to_string(),
            contact: Page::Contact.default_url().to_string(),
            privacy: Page::Privacy.default_url().to_string(),
            terms: Page::Terms.default_url().to_string(),
        }
    }
}

/// Serialized markup of the node extracted from a CMS document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }
}

/// Render state of a page body.
///
/// Exactly one of loading indicator, content or error panel is rendered
/// for any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Ready(Fragment),
    Failed(String),
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            PageState::Ready(fragment) => Some(fragment.as_html()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
    }

    #[test]
    fn test_long_aliases() {
        assert_eq!(Page::from_slug("about-us"), Some(Page::About));
        assert_eq!(Page::from_slug("contact-us"), Some(Page::Contact));
        assert_eq!(Page::from_slug("privacy-policy"), Some(Page::Privacy));
        assert_eq!(Page::from_slug("terms-and-conditions"), Some(Page::Terms));
        assert_eq!(Page::from_slug("careers"), None);
    }

    #[test]
    fn test_terms_falls_back_to_terms_section() {
        assert_eq!(
            Page::Terms.selectors(),
            &[".privacy-section", ".terms-section"]
        );
    }

    #[test]
    fn test_page_sources_defaults() {
        let sources = PageSources::default();
        assert_eq!(
            sources.url_for(Page::Contact),
            "https://www.admin.clickads.in/page/contact-us"
        );
        assert_eq!(sources.iter().count(), 4);
    }

    #[test]
    fn test_page_state_is_exclusive() {
        let loading = PageState::Loading;
        assert!(loading.is_loading());
        assert!(loading.content().is_none());
        assert!(loading.error().is_none());

        let ready = PageState::Ready(Fragment::new("<div>hi</div>"));
        assert!(!ready.is_loading());
        assert_eq!(ready.content(), Some("<div>hi</div>"));
        assert!(ready.error().is_none());

        let failed = PageState::Failed("boom".into());
        assert!(!failed.is_loading());
        assert!(failed.content().is_none());
        assert_eq!(failed.error(), Some("boom"));
    }
}
