#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use docview::clients::{SummaryClient, SummaryTransport};
use docview::core::config::SearchFallback;
use docview::core::models::{SummaryRequest, TargetId};
use docview::errors::DocViewError;
use docview::features::SummaryRequester;
use docview::page::{Page, Visibility};

/// Scripted answer for one file index.
pub enum Reply {
    Body(String),
    Status(u16),
    Unreachable,
    /// Fails before anything is sent, as a misconfigured transport would.
    Misconfigured,
    /// Resolves with the body once the sender fires.
    Gate(oneshot::Receiver<String>),
}

/// Transport that answers from a script keyed by file index and records
/// every request it sees.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<HashMap<u32, Reply>>,
    calls: Mutex<Vec<SummaryRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, file_index: u32, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(file_index, reply);
        self
    }

    pub fn calls(&self) -> Vec<SummaryRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryTransport for StubTransport {
    async fn post_summary(&self, request: &SummaryRequest) -> Result<String, DocViewError> {
        self.calls.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().remove(&request.file_index);

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(code)) => Err(DocViewError::ServiceError(format!(
                "HTTP error! status: {code}"
            ))),
            Some(Reply::Unreachable) => Err(DocViewError::HttpError(
                "error sending request: connection refused".to_string(),
            )),
            Some(Reply::Misconfigured) => Err(DocViewError::ConfigError(
                "base URL mailto:ops@example.org cannot carry a path".to_string(),
            )),
            Some(Reply::Gate(rx)) => rx
                .await
                .map_err(|_| DocViewError::HttpError("gate dropped".to_string())),
            None => Err(DocViewError::ServiceError("no scripted reply".to_string())),
        }
    }
}

pub fn requester(
    transport: Arc<StubTransport>,
    page: Page,
    fallback: SearchFallback,
) -> SummaryRequester {
    SummaryRequester::new(SummaryClient::new(transport), page, fallback)
}

/// Document page with one summary slot per file.
pub fn document_page(files: u32) -> Page {
    (0..files).fold(Page::new(), |page, n| {
        page.with_element(TargetId::Summary(n).dom_id(), "", Visibility::Visible)
    })
}

/// Search page with a single hit whose original content is `original`.
pub fn search_page(result_index: u32, original: &str) -> Page {
    Page::new()
        .with_element(
            TargetId::SummaryContent(result_index).dom_id(),
            "",
            Visibility::Visible,
        )
        .with_element(
            TargetId::OriginalContent(result_index).dom_id(),
            &docview::page::escape_html(original),
            Visibility::Visible,
        )
}
