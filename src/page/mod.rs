//! Headless page model.
//!
//! A `Page` is the set of id-addressed elements a page template supplies.
//! Components never look elements up by raw string: they resolve a
//! [`TargetId`] into a [`RenderTarget`] once, and write through that handle.
//! Each element carries a generation counter so overlapping requests for the
//! same slot can tell whether their result is still the latest.

pub mod escape;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scraper::{Html, Selector};
use tracing::debug;

use crate::core::models::TargetId;
use crate::errors::DocViewError;

pub use escape::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone)]
struct Element {
    inner_html: String,
    visibility: Visibility,
    generation: u64,
}

impl Element {
    fn new(inner_html: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            inner_html: inner_html.into(),
            visibility,
            generation: 0,
        }
    }
}

/// Token handed out by [`RenderTarget::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Arc<Mutex<HashMap<String, Element>>>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every element carrying an `id` attribute.
    ///
    /// An inline `display: none` marks the element hidden; anything else is
    /// visible. Later duplicates of an id are ignored, as `getElementById`
    /// would.
    #[must_use]
    pub fn from_html(markup: &str) -> Self {
        let document = Html::parse_document(markup);
        let mut elements = HashMap::new();

        if let Ok(selector) = Selector::parse("[id]") {
            for node in document.select(&selector) {
                let Some(id) = node.value().id() else {
                    continue;
                };
                let visibility = visibility_from_style(node.value().attr("style"));
                elements
                    .entry(id.to_string())
                    .or_insert_with(|| Element::new(node.inner_html(), visibility));
            }
        }

        debug!("Parsed page with {} addressable elements", elements.len());
        Self {
            elements: Arc::new(Mutex::new(elements)),
        }
    }

    /// Add (or replace) an element. Used to build pages in code.
    #[must_use]
    pub fn with_element(
        self,
        id: impl Into<String>,
        inner_html: &str,
        visibility: Visibility,
    ) -> Self {
        self.lock()
            .insert(id.into(), Element::new(inner_html, visibility));
        self
    }

    /// # Errors
    ///
    /// Returns `MissingElement` when the page has no element with that id.
    pub fn resolve(&self, target: &TargetId) -> Result<RenderTarget, DocViewError> {
        let id = target.dom_id();
        if !self.lock().contains_key(&id) {
            return Err(DocViewError::MissingElement(id));
        }
        Ok(RenderTarget {
            page: self.clone(),
            id,
        })
    }

    #[must_use]
    pub fn contains(&self, target: &TargetId) -> bool {
        self.lock().contains_key(&target.dom_id())
    }

    #[must_use]
    pub fn inner_html(&self, target: &TargetId) -> Option<String> {
        self.lock()
            .get(&target.dom_id())
            .map(|e| e.inner_html.clone())
    }

    #[must_use]
    pub fn text_content(&self, target: &TargetId) -> Option<String> {
        self.inner_html(target).map(|html| text_of(&html))
    }

    #[must_use]
    pub fn visibility(&self, target: &TargetId) -> Option<Visibility> {
        self.lock().get(&target.dom_id()).map(|e| e.visibility)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Element>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with<R>(&self, id: &str, f: impl FnOnce(&mut Element) -> R) -> R {
        let mut elements = self.lock();
        let element = elements
            .entry(id.to_string())
            .or_insert_with(|| Element::new("", Visibility::Visible));
        f(element)
    }
}

/// A validated handle to one element of a [`Page`].
///
/// Elements are never removed from a page, so once resolved every write
/// through the handle lands.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    page: Page,
    id: String,
}

impl RenderTarget {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn inner_html(&self) -> String {
        self.page.with(&self.id, |e| e.inner_html.clone())
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        text_of(&self.inner_html())
    }

    pub fn set_inner_html(&self, html: impl Into<String>) {
        let html = html.into();
        self.page.with(&self.id, |e| e.inner_html = html);
    }

    /// Store `text` as literal text; markup characters never become tags.
    pub fn set_text_content(&self, text: &str) {
        self.set_inner_html(escape_html(text));
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.page.with(&self.id, |e| e.visibility)
    }

    pub fn set_visibility(&self, visibility: Visibility) {
        self.page.with(&self.id, |e| e.visibility = visibility);
    }

    /// Start a new write generation; any older generation becomes stale.
    #[must_use]
    pub fn begin(&self) -> Generation {
        self.page.with(&self.id, |e| {
            e.generation += 1;
            Generation(e.generation)
        })
    }

    /// Apply `html` only if `generation` is still the latest one begun.
    /// Returns whether the write happened.
    pub fn commit(&self, generation: Generation, html: impl Into<String>) -> bool {
        let html = html.into();
        self.page.with(&self.id, |e| {
            if e.generation == generation.0 {
                e.inner_html = html;
                true
            } else {
                false
            }
        })
    }
}

fn visibility_from_style(style: Option<&str>) -> Visibility {
    let hidden = style.is_some_and(|style| {
        style.split(';').any(|decl| {
            let mut parts = decl.splitn(2, ':');
            let key = parts.next().unwrap_or("").trim();
            let value = parts.next().unwrap_or("").trim();
            key.eq_ignore_ascii_case("display") && value.eq_ignore_ascii_case("none")
        })
    });
    if hidden {
        Visibility::Hidden
    } else {
        Visibility::Visible
    }
}

fn text_of(html: &str) -> String {
    Html::parse_fragment(html).root_element().text().collect()
}
