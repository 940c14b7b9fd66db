use tracing::debug;

use crate::core::models::TargetId;
use crate::errors::DocViewError;
use crate::page::{Page, Visibility};

pub const SHOW_LABEL: &str = "show";
pub const HIDE_LABEL: &str = "hide";

/// Shows or hides a section and relabels its `{id}-button` control.
pub struct VisibilityToggle<'a> {
    page: &'a Page,
}

impl<'a> VisibilityToggle<'a> {
    #[must_use]
    pub fn new(page: &'a Page) -> Self {
        Self { page }
    }

    /// Flip the section's visibility and return the new state.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` if either the section or its button is absent;
    /// nothing is changed in that case.
    pub fn toggle(&self, id: &str) -> Result<Visibility, DocViewError> {
        let section = self.page.resolve(&TargetId::Named(id.to_string()))?;
        let button = self.page.resolve(&TargetId::Button(id.to_string()))?;

        let (next, label) = match section.visibility() {
            Visibility::Hidden => (Visibility::Visible, HIDE_LABEL),
            Visibility::Visible => (Visibility::Hidden, SHOW_LABEL),
        };
        section.set_visibility(next);
        button.set_inner_html(label);

        debug!("Toggled {} to {:?}", id, next);
        Ok(next)
    }
}
