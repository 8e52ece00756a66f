//! Project filtering used by the projects listing
//!
//! An item is visible when both predicates hold:
//!
//! - its title contains the search text, ignoring case (empty text matches everything)
//! - no tag is selected, or the item carries the selected tag, ignoring case
//!
//! Results keep catalog order and borrow from the catalog, so filtering is
//! free of side effects and can be applied again to its own output.
//!
//! # Iterator Adapters
//!
//! [`CatalogFilterExt`] adds the same operation to any iterator of items:
//!
//! ```
//! use folio::catalog::CatalogItem;
//! use folio::search::{CatalogFilterExt, FilterState};
//!
//! let items = vec![
//!     CatalogItem::new("a", "Social Zone", ["React"]),
//!     CatalogItem::new("b", "School Portfolio", ["HTML"]),
//! ];
//! let state = FilterState::new().with_tag("react");
//! let visible = items.iter().filter_by(&state);
//! assert_eq!(visible.titles(), vec!["Social Zone"]);
//! ```

use super::state::FilterState;
use super::tags::fold_case;
use crate::catalog::CatalogItem;

/// Visible items, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult<'a> {
    items: Vec<&'a CatalogItem>,
}

impl<'a> FilterResult<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CatalogItem> + '_ {
        self.items.iter().copied()
    }

    #[must_use]
    pub fn items(&self) -> &[&'a CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn titles(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }
}

impl<'a> IntoIterator for FilterResult<'a> {
    type Item = &'a CatalogItem;
    type IntoIter = std::vec::IntoIter<&'a CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'r, 'a> IntoIterator for &'r FilterResult<'a> {
    type Item = &'a CatalogItem;
    type IntoIter = std::iter::Copied<std::slice::Iter<'r, &'a CatalogItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

/// Compute the items visible under `state`
///
/// Never fails: an empty catalog or a state that matches nothing both yield
/// an empty result.
#[must_use]
pub fn filter<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    state: &FilterState,
) -> FilterResult<'a> {
    let needle = fold_case(state.search_text());
    let tag = state.selected_tag().map(fold_case);

    let items = items
        .into_iter()
        .filter(|item| fold_case(&item.title).contains(&needle))
        .filter(|item| {
            tag.as_deref()
                .is_none_or(|tag| item.tags.iter().any(|t| fold_case(t) == tag))
        })
        .collect();

    FilterResult { items }
}

/// Extension trait for filtering iterators of catalog items
pub trait CatalogFilterExt<'a>: IntoIterator<Item = &'a CatalogItem> + Sized {
    /// Keep the items visible under `state`, in iteration order
    fn filter_by(self, state: &FilterState) -> FilterResult<'a> {
        filter(self, state)
    }
}

impl<'a, I> CatalogFilterExt<'a> for I where I: IntoIterator<Item = &'a CatalogItem> {}
