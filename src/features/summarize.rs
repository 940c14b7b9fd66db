use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::clients::SummaryClient;
use crate::core::config::SearchFallback;
use crate::core::models::{SummaryKind, SummaryRequest, TargetId};
use crate::errors::DocViewError;
use crate::page::{Page, escape_html};
use crate::prompt::{FILE_SUMMARY_INSTRUCTIONS, search_result_instructions};

pub const SUMMARY_LABEL: &str = "<strong>AI Summary:</strong>";
pub const FAILURE_MESSAGE: &str = "Failed to generate summary";
/// Characters of original content shown when a search-result summary fails.
pub const EXCERPT_CHARS: usize = 300;

/// What happened to the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The service answered and its text was rendered.
    Rendered,
    /// The service failed and a fallback was rendered.
    Fallback,
    /// A newer request for the same target was issued meanwhile; nothing written.
    Stale,
}

/// Requests summaries and renders them into a page's summary slots.
#[derive(Clone)]
pub struct SummaryRequester {
    client: SummaryClient,
    page: Page,
    search_fallback: SearchFallback,
}

impl SummaryRequester {
    #[must_use]
    pub fn new(client: SummaryClient, page: Page, search_fallback: SearchFallback) -> Self {
        Self {
            client,
            page,
            search_fallback,
        }
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Summarize one file of a document into `summary-{file_index}`.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` if the page has no summary slot for the file.
    pub async fn summarize_file(
        &self,
        document_id: &str,
        file_index: u32,
    ) -> Result<Outcome, DocViewError> {
        let request = SummaryRequest::new(document_id, file_index, FILE_SUMMARY_INSTRUCTIONS);
        self.request_summary(SummaryKind::WholeDocument { file_index }, request)
            .await
    }

    /// Summarize a search hit into `summary-content-{result_index}`, steering
    /// the summary towards the user's query.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` if the page has no summary slot for the result.
    pub async fn summarize_search_result(
        &self,
        document_id: &str,
        result_index: u32,
        file_index: u32,
        query: &str,
    ) -> Result<Outcome, DocViewError> {
        let request =
            SummaryRequest::new(document_id, file_index, search_result_instructions(query));
        self.request_summary(SummaryKind::SearchResult { result_index }, request)
            .await
    }

    /// # Errors
    ///
    /// Returns `MissingElement` when the render target does not exist (no
    /// request is sent). Transport and service failures render a fallback and
    /// return `Ok`. Any other error also leaves the fallback in the slot, so a
    /// superseded request never leaves it empty, and is then returned.
    pub async fn request_summary(
        &self,
        kind: SummaryKind,
        request: SummaryRequest,
    ) -> Result<Outcome, DocViewError> {
        let target = self.page.resolve(&kind.target())?;
        let correlation_id = Uuid::new_v4();
        let span = info_span!(
            "summary",
            %correlation_id,
            document_id = %request.document_id,
            target = %target.id()
        );

        async move {
            let generation = target.begin();

            let (html, outcome) = match self.client.summarize(&request).await {
                Ok(summary) => (render_summary(&summary), Outcome::Rendered),
                Err(e) if e.is_recoverable() => {
                    error!("Error generating summary: {}", e);
                    (self.render_fallback(kind), Outcome::Fallback)
                }
                Err(e) => {
                    error!("Summary request could not be made: {}", e);
                    target.commit(generation, self.render_fallback(kind));
                    return Err(e);
                }
            };

            if target.commit(generation, html) {
                info!("Summary slot updated ({:?})", outcome);
                Ok(outcome)
            } else {
                warn!("Discarding stale summary result");
                Ok(Outcome::Stale)
            }
        }
        .instrument(span)
        .await
    }

    fn render_fallback(&self, kind: SummaryKind) -> String {
        match (kind, self.search_fallback) {
            (SummaryKind::SearchResult { result_index }, SearchFallback::Excerpt) => {
                match self.page.text_content(&TargetId::OriginalContent(result_index)) {
                    Some(original) => render_excerpt(&original),
                    None => {
                        warn!(
                            "No original content for result {}; showing failure message",
                            result_index
                        );
                        render_failure()
                    }
                }
            }
            _ => render_failure(),
        }
    }
}

#[must_use]
pub fn render_summary(summary: &str) -> String {
    format!(
        "{SUMMARY_LABEL} <span style=\"color: #2c3e50;\">{}</span>",
        escape_html(summary)
    )
}

#[must_use]
pub fn render_failure() -> String {
    format!(
        "{SUMMARY_LABEL} <span style=\"color: #e74c3c; font-style: italic;\">\
         {FAILURE_MESSAGE}</span>"
    )
}

#[must_use]
pub fn render_excerpt(original: &str) -> String {
    format!(
        "{SUMMARY_LABEL} <span style=\"color: #7f8c8d;\">{}</span>",
        escape_html(&excerpt(original))
    )
}

/// First [`EXCERPT_CHARS`] characters of `text`, with `...` appended only
/// when something was cut.
#[must_use]
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
