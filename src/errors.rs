use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocViewError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Summary service returned an error: {0}")]
    ServiceError(String),

    #[error("Page element not found: {0}")]
    MissingElement(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to encode request: {0}")]
    ParseError(String),
}

impl DocViewError {
    /// Errors raised at the request boundary. These degrade to a rendered
    /// fallback; everything else propagates to the caller.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DocViewError::HttpError(_) | DocViewError::ServiceError(_)
        )
    }
}

impl From<reqwest::Error> for DocViewError {
    fn from(error: reqwest::Error) -> Self {
        DocViewError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for DocViewError {
    fn from(error: serde_json::Error) -> Self {
        DocViewError::ParseError(error.to_string())
    }
}

impl From<url::ParseError> for DocViewError {
    fn from(error: url::ParseError) -> Self {
        DocViewError::ConfigError(error.to_string())
    }
}
