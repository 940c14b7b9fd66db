use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/summary/{docid}`. The document id travels in the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(skip)]
    pub document_id: String,
    pub file_index: u32,
    pub instructions: String,
}

impl SummaryRequest {
    #[must_use]
    pub fn new(
        document_id: impl Into<String>,
        file_index: u32,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            file_index,
            instructions: instructions.into(),
        }
    }
}

/// Typed handle for an element the page template supplies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetId {
    /// `summary-{file_index}` on the document page.
    Summary(u32),
    /// `summary-content-{result_index}` on the search page.
    SummaryContent(u32),
    /// `original-content-{result_index}`, the excerpt source for a search result.
    OriginalContent(u32),
    /// The page-wide `error` banner.
    Error,
    /// A toggleable section.
    Named(String),
    /// The `{id}-button` control paired with a toggleable section.
    Button(String),
}

impl TargetId {
    #[must_use]
    pub fn dom_id(&self) -> String {
        match self {
            TargetId::Summary(n) => format!("summary-{n}"),
            TargetId::SummaryContent(n) => format!("summary-content-{n}"),
            TargetId::OriginalContent(n) => format!("original-content-{n}"),
            TargetId::Error => "error".to_string(),
            TargetId::Named(id) => id.clone(),
            TargetId::Button(id) => format!("{id}-button"),
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dom_id())
    }
}

/// Which kind of summary slot a request renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    WholeDocument { file_index: u32 },
    SearchResult { result_index: u32 },
}

impl SummaryKind {
    #[must_use]
    pub fn target(self) -> TargetId {
        match self {
            SummaryKind::WholeDocument { file_index } => TargetId::Summary(file_index),
            SummaryKind::SearchResult { result_index } => TargetId::SummaryContent(result_index),
        }
    }
}
