//! Tag normalization and the tag universe
//!
//! Tags are compared case-insensitively everywhere. [`fold_case`] is the
//! single normalization used by both the filter predicate and the tag
//! universe, so a chip built from [`tag_universe`] always selects the items
//! that carry it.

use crate::catalog::CatalogItem;
use std::collections::{HashMap, HashSet};

/// Lower-case a string with locale-independent simple case mapping
///
/// Each character maps to exactly one character, so folding never changes
/// the character count and no context rules (such as final sigma) apply.
/// Diacritics are left untouched.
#[must_use]
pub fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// All distinct tags across `items`, case-folded, in first-seen order
#[must_use]
pub fn tag_universe<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<String> {
    tag_counts(items).into_iter().map(|(tag, _)| tag).collect()
}

/// Like [`tag_universe`], paired with the number of items carrying each tag
///
/// Each item counts once per tag even if it lists case variants of it.
#[must_use]
pub fn tag_counts<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<(String, usize)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        let mut on_item = HashSet::new();
        for tag in &item.tags {
            let folded = fold_case(tag);
            if !on_item.insert(folded.clone()) {
                continue;
            }
            if let Some(&idx) = positions.get(&folded) {
                counts[idx].1 += 1;
            } else {
                positions.insert(folded.clone(), counts.len());
                counts.push((folded, 1));
            }
        }
    }

    counts
}

/// Label for a tag chip: the tag with its first character upper-cased
#[must_use]
pub fn chip_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_fold_case_ascii() {
        assert_eq!(fold_case("Node.JS"), "node.js");
    }

    #[test]
    fn test_fold_case_is_simple_mapping() {
        // Full mapping would expand U+0130 into two characters.
        assert_eq!(fold_case("\u{130}stanbul"), "istanbul");
        // No final-sigma context rule.
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        // Diacritics survive.
        assert_eq!(fold_case("Café"), "café");
    }

    #[test]
    fn test_tag_universe_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            tag_universe(&catalog),
            vec!["html", "css", "js", "php", "react", "node.js", "mongodb", "bootstrap"]
        );
    }

    #[test]
    fn test_tag_universe_merges_case_variants() {
        let items = [
            CatalogItem::new("a", "A", ["Rust"]),
            CatalogItem::new("b", "B", ["RUST", "wasm"]),
        ];
        assert_eq!(tag_universe(&items), vec!["rust", "wasm"]);
    }

    #[test]
    fn test_tag_universe_empty_catalog() {
        let items: Vec<CatalogItem> = Vec::new();
        assert!(tag_universe(&items).is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let catalog = sample_catalog();
        let counts = tag_counts(&catalog);
        assert!(counts.contains(&("react".to_string(), 2)));
        assert!(counts.contains(&("html".to_string(), 1)));
    }

    #[test]
    fn test_tag_counts_one_per_item() {
        let mut item = CatalogItem::new("a", "A", ["Rust"]);
        item.tags.push("RUST".to_string());
        let items = [item, CatalogItem::new("b", "B", ["rust"])];
        assert_eq!(tag_counts(&items), vec![("rust".to_string(), 2)]);
    }

    #[test]
    fn test_chip_label() {
        assert_eq!(chip_label("node.js"), "Node.js");
        assert_eq!(chip_label("ui/ux"), "Ui/ux");
        assert_eq!(chip_label(""), "");
    }
}
