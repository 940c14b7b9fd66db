//! Summary service client module
//!
//! Wraps the document summary endpoint, `POST /api/summary/{docid}`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::SummaryRequest;
use crate::errors::DocViewError;

/// One request, one response. Implementations return the raw body of a
/// successful response and an error for anything else.
#[async_trait]
pub trait SummaryTransport: Send + Sync {
    async fn post_summary(&self, request: &SummaryRequest) -> Result<String, DocViewError>;
}

/// reqwest-backed transport talking to a live summary service.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, DocViewError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DocViewError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        Self::with_client(client, config.base_url.clone())
    }

    /// Use an already configured reqwest client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` cannot carry a path.
    pub fn with_client(client: Client, base_url: Url) -> Result<Self, DocViewError> {
        if base_url.cannot_be_a_base() {
            return Err(DocViewError::ConfigError(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }
        Ok(Self { client, base_url })
    }

    /// Endpoint for a document. The id is percent-encoded as a single path
    /// segment so ids containing `/` or `?` cannot escape it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL cannot carry a path.
    pub fn summary_url(&self, document_id: &str) -> Result<Url, DocViewError> {
        summary_url(&self.base_url, document_id)
    }
}

/// # Errors
///
/// Returns `ConfigError` if `base_url` cannot carry a path (e.g. `mailto:`).
pub fn summary_url(base_url: &Url, document_id: &str) -> Result<Url, DocViewError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| {
            DocViewError::ConfigError(format!("base URL {base_url} cannot carry a path"))
        })?
        .pop_if_empty()
        .extend(["api", "summary", document_id]);
    Ok(url)
}

#[async_trait]
impl SummaryTransport for HttpTransport {
    async fn post_summary(&self, request: &SummaryRequest) -> Result<String, DocViewError> {
        let url = self.summary_url(&request.document_id)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!("POST {} (fileIndex={})", url, request.file_index);

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| DocViewError::HttpError(format!("Summary request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocViewError::ServiceError(format!("HTTP error! status: {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| DocViewError::HttpError(format!("Failed to read summary body: {e}")))
    }
}

/// Interpret a successful response body.
///
/// The service encodes its answer with a JSON encoder, so a body that is a
/// JSON string literal is unwrapped. A JSON object carrying an `error` key is
/// an in-band failure. Anything else is the summary text as-is.
///
/// The unwrapping is not reversible: a plain-text summary that happens to be
/// a quoted JSON string (`"quoted"`) is rendered without its quotes, and one
/// that is literally `{"error": ...}` is shown as a failure.
///
/// # Errors
///
/// Returns `ServiceError` for an in-band error object.
pub fn decode_summary_body(body: &str) -> Result<String, DocViewError> {
    match serde_json::from_str::<Value>(body.trim()) {
        Ok(Value::String(text)) => Ok(text),
        Ok(Value::Object(map)) if map.contains_key("error") => {
            let message = match map.get("error") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            Err(DocViewError::ServiceError(message))
        }
        _ => Ok(body.to_string()),
    }
}

/// Summary service client shared by every requester on a page.
#[derive(Clone)]
pub struct SummaryClient {
    transport: Arc<dyn SummaryTransport>,
}

impl SummaryClient {
    #[must_use]
    pub fn new(transport: Arc<dyn SummaryTransport>) -> Self {
        Self { transport }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, DocViewError> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    /// # Errors
    ///
    /// Returns `HttpError` for transport failures and `ServiceError` for a
    /// non-success status or an in-band error body.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<String, DocViewError> {
        #[cfg(feature = "debug-logs")]
        info!("Summary instructions:\n{}", request.instructions);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary for document {} file {}",
            request.document_id, request.file_index
        );

        let body = self.transport.post_summary(request).await?;
        decode_summary_body(&body)
    }
}
