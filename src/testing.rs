//! Testing utilities for folio
//!
//! Shared fixtures for unit tests. Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, CatalogItem};

/// The three-project catalog used throughout the tests
///
/// # Panics
/// Panics if the fixture itself is invalid.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_items(vec![
        CatalogItem::new("school", "School Portfolio", ["HTML", "CSS", "JS", "PHP"])
            .with_github("https://github.com/example/school"),
        CatalogItem::new("social", "Social Zone", ["React", "Node.js", "MongoDB"])
            .with_live("https://socialzone.example.com/"),
        CatalogItem::new("personal", "Personal Portfolio", ["React", "Bootstrap"]),
    ])
    .expect("sample catalog is valid")
}
