//! Project search and tag filtering
//!
//! Provides the filter engine behind the projects listing:
//! 1. A caller-owned [`FilterState`] (search text and optional tag)
//! 2. [`filter`], which returns the visible projects in catalog order
//! 3. [`tag_universe`], which lists the tags to offer as filter chips

pub mod filter;
pub mod state;
pub mod tags;

pub use filter::{CatalogFilterExt, FilterResult, filter};
pub use state::FilterState;
pub use tags::{chip_label, fold_case, tag_counts, tag_universe};
