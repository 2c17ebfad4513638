//! Identity a catalog request is made on behalf of.

/// Caller identity forwarded to the catalog API.
///
/// A signed-in customer is identified by a bearer token; everyone else is
/// served as a guest and the client attaches the configured guest id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    #[default]
    Guest,
    Bearer(String),
}

impl Credentials {
    /// Builds credentials from an optional token. Blank tokens count as absent.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => Credentials::Bearer(token.trim().to_string()),
            _ => Credentials::Guest,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Credentials::Bearer(token) => Some(token),
            Credentials::Guest => None,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Credentials::Guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(Credentials::from_token(None), Credentials::Guest);
        assert_eq!(Credentials::from_token(Some("  ".into())), Credentials::Guest);
        assert_eq!(
            Credentials::from_token(Some("abc".into())),
            Credentials::Bearer("abc".into())
        );
    }

    #[test]
    fn test_token_accessor() {
        assert_eq!(Credentials::Bearer("t".into()).token(), Some("t"));
        assert!(Credentials::Guest.token().is_none());
        assert!(Credentials::Guest.is_guest());
    }
}
