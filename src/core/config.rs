use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::errors::DocViewError;

/// What a search-result summary shows when the service call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFallback {
    /// Truncated text of the sibling `original-content-{n}` element.
    #[default]
    Excerpt,
    /// The same static failure message whole-document summaries use.
    Message,
}

impl FromStr for SearchFallback {
    type Err = DocViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excerpt" => Ok(SearchFallback::Excerpt),
            "message" => Ok(SearchFallback::Message),
            other => Err(DocViewError::ConfigError(format!(
                "unknown search fallback '{other}' (expected 'excerpt' or 'message')"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub search_fallback: SearchFallback,
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when `base_url` is not an absolute URL that can
    /// carry a path.
    pub fn new(base_url: &str) -> Result<Self, DocViewError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            search_fallback: SearchFallback::default(),
            request_timeout: None,
        })
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when `DOCVIEW_BASE_URL` is missing or any of the
    /// optional variables fail to parse.
    pub fn from_env() -> Result<Self, DocViewError> {
        let base_url = env::var("DOCVIEW_BASE_URL")
            .map_err(|e| DocViewError::ConfigError(format!("DOCVIEW_BASE_URL: {e}")))?;

        let search_fallback = match env::var("DOCVIEW_SEARCH_FALLBACK") {
            Ok(raw) => raw.parse()?,
            Err(_) => SearchFallback::default(),
        };

        let request_timeout = match env::var("DOCVIEW_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout_secs(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            search_fallback,
            request_timeout,
        })
    }

    #[must_use]
    pub fn with_search_fallback(mut self, fallback: SearchFallback) -> Self {
        self.search_fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Parse the service origin. Opaque URLs such as `mailto:` are rejected here
/// since no `/api/summary/...` path can be appended to them.
///
/// # Errors
///
/// Returns `ConfigError` for relative or opaque URLs.
pub fn parse_base_url(raw: &str) -> Result<Url, DocViewError> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(DocViewError::ConfigError(format!(
            "base URL {url} cannot carry a path"
        )));
    }
    Ok(url)
}

/// # Errors
///
/// Returns `ConfigError` for anything other than a positive integer.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, DocViewError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(DocViewError::ConfigError(format!(
            "DOCVIEW_REQUEST_TIMEOUT_SECS: expected a positive integer, got '{raw}'"
        ))),
    }
}
