//! Backend base URL configuration.

use hyper::Uri;

use crate::BackendError;

/// Base URL of the vending-machine service when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/vending-machine/";

/// Where the backend lives. Every route is resolved relative to `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Validate and normalise a base URL.
    ///
    /// A trailing `/` is appended when missing so that route paths join
    /// beneath it.
    ///
    /// # Errors
    /// Returns [`BackendError::InvalidBaseUrl`] if the URL does not parse, is
    /// not absolute `http://`, or carries a query string.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let invalid = |reason: String| BackendError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };

        let mut url = base_url.trim().to_owned();
        if !url.ends_with('/') {
            url.push('/');
        }

        let uri: Uri = url.parse().map_err(|e| invalid(format!("{e}")))?;
        if uri.scheme_str() != Some("http") {
            return Err(invalid("only http:// URLs are supported".to_owned()));
        }
        if uri.authority().is_none() {
            return Err(invalid("missing host".to_owned()));
        }
        if uri.query().is_some() {
            return Err(invalid("query strings are not allowed".to_owned()));
        }

        Ok(Self { base_url: url })
    }

    /// The normalised base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a route path such as `vend-items` against the base URL.
    ///
    /// # Errors
    /// Returns [`BackendError::InvalidBaseUrl`] if the joined URL does not parse.
    pub fn endpoint(&self, path: &str) -> Result<Uri, BackendError> {
        let joined = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        joined.parse().map_err(|e| BackendError::InvalidBaseUrl {
            url: joined.clone(),
            reason: format!("{e}"),
        })
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let cfg = match BackendConfig::new("http://backend:9000/vending-machine") {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(cfg.base_url(), "http://backend:9000/vending-machine/");
    }

    #[test]
    fn endpoint_joins_under_base_path() {
        let cfg = BackendConfig::default();
        let uri = match cfg.endpoint("total-items") {
            Ok(u) => u,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(uri.to_string(), "http://localhost:8080/vending-machine/total-items");

        let uri = match cfg.endpoint("/vend-items") {
            Ok(u) => u,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(uri.path(), "/vending-machine/vend-items");
    }

    #[test]
    fn non_http_urls_are_rejected() {
        assert!(BackendConfig::new("https://backend/vending-machine/").is_err());
        assert!(BackendConfig::new("/vending-machine/").is_err());
        assert!(BackendConfig::new("not a url").is_err());
    }

    #[test]
    fn query_strings_are_rejected() {
        let err = BackendConfig::new("http://backend/vm?x=1");
        assert!(
            matches!(err, Err(BackendError::InvalidBaseUrl { .. })),
            "query string must be rejected"
        );
    }
}
