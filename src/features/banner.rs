use tracing::warn;

use crate::core::models::TargetId;
use crate::errors::DocViewError;
use crate::page::{Page, Visibility};

/// The page-wide `error` element.
pub struct ErrorBanner<'a> {
    page: &'a Page,
}

impl<'a> ErrorBanner<'a> {
    #[must_use]
    pub fn new(page: &'a Page) -> Self {
        Self { page }
    }

    /// Show `message` as plain text, replacing whatever the banner held.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` if the page has no `error` element.
    pub fn show(&self, message: &str) -> Result<(), DocViewError> {
        let banner = self.page.resolve(&TargetId::Error)?;
        banner.set_text_content(message);
        banner.set_visibility(Visibility::Visible);
        warn!("Error banner shown: {}", message);
        Ok(())
    }
}
