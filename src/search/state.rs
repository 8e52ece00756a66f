//! Filter state owned by the caller
//!
//! ```
//! use folio::search::FilterState;
//!
//! let state = FilterState::new()
//!     .with_search("portfolio")
//!     .with_tag("react");
//! assert_eq!(state.search_text(), "portfolio");
//! assert_eq!(state.selected_tag(), Some("react"));
//! ```

use serde::{Deserialize, Serialize};

/// What the user has typed and which tag chip is selected
///
/// The engine only ever reads this value; the presentation layer replaces it
/// on every keystroke or chip tap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    search_text: String,
    selected_tag: Option<String>,
}

impl FilterState {
    /// A state that lets every item through
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text (matched as a case-insensitive title substring)
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Select a tag; an empty string clears the selection
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.set_tag(Some(tag.into()));
        self
    }

    /// Replace the tag selection
    ///
    /// The tag is kept as given. Only `Some("")` is treated as no selection;
    /// a whitespace-only tag is a real tag that no item carries.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.selected_tag = tag.filter(|t| !t.is_empty());
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref().filter(|t| !t.is_empty())
    }

    /// True when neither predicate can exclude anything
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.selected_tag().is_none()
    }
}
