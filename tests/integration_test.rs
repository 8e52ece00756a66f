//! Integration tests for folio
//!
//! These tests load portfolios from temporary files and run the filter engine
//! and commands end to end through the public API.

use folio::catalog::{Catalog, CatalogItem, Portfolio};
use folio::commands;
use folio::config::{FolioConfig, OutputFormat};
use folio::search::{CatalogFilterExt, FilterState, filter, tag_universe};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PORTFOLIO: &str = r#"
[profile]
name = "Test Person"

[[projects]]
title = "School Portfolio"
tags = ["HTML", "CSS", "JS", "PHP"]

[[projects]]
title = "Social Zone"
tags = ["React", "Node.js", "MongoDB"]

[[projects]]
title = "Personal Portfolio"
tags = ["React", "Bootstrap"]
"#;

/// Helper function to write a portfolio file into a temporary directory
fn write_portfolio(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("portfolio.toml");
    fs::write(&path, content).unwrap();
    path
}

fn load_sample() -> (TempDir, Portfolio) {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path(), PORTFOLIO);
    let portfolio = Portfolio::load(&path).unwrap();
    (dir, portfolio)
}

#[test]
fn test_search_text_example() {
    let (_dir, portfolio) = load_sample();
    let result = filter(&portfolio.projects, &FilterState::new().with_search("portfolio"));
    assert_eq!(result.titles(), vec!["School Portfolio", "Personal Portfolio"]);
}

#[test]
fn test_selected_tag_example() {
    let (_dir, portfolio) = load_sample();
    let result = filter(&portfolio.projects, &FilterState::new().with_tag("react"));
    assert_eq!(result.titles(), vec!["Social Zone", "Personal Portfolio"]);
}

#[test]
fn test_conflicting_predicates_example() {
    let (_dir, portfolio) = load_sample();
    let state = FilterState::new().with_search("zone").with_tag("html");
    let result = filter(&portfolio.projects, &state);
    assert!(result.is_empty());
}

#[test]
fn test_unfiltered_returns_catalog_unchanged() {
    let (_dir, portfolio) = load_sample();
    let result = filter(&portfolio.projects, &FilterState::new().with_search("").with_tag(""));
    let all: Vec<&CatalogItem> = portfolio.projects.iter().collect();
    assert_eq!(result.items(), all.as_slice());
}

#[test]
fn test_every_search_prefix_is_a_subset_in_order() {
    let (_dir, portfolio) = load_sample();
    let catalog = &portfolio.projects;
    let position = |item: &CatalogItem| catalog.iter().position(|c| c == item).unwrap();

    for title in catalog.iter().map(|item| item.title.clone()) {
        for end in 0..=title.len() {
            let needle = &title[..end];
            let result = catalog.iter().filter_by(&FilterState::new().with_search(needle));

            let positions: Vec<_> = result.iter().map(|item| position(item)).collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken for {needle:?}");

            let expected = catalog
                .iter()
                .filter(|item| item.title.to_lowercase().contains(&needle.to_lowercase()))
                .count();
            assert_eq!(result.len(), expected, "wrong count for {needle:?}");
        }
    }
}

#[test]
fn test_tag_universe_drives_tag_filters() {
    let (_dir, portfolio) = load_sample();
    let universe = tag_universe(&portfolio.projects);
    assert_eq!(universe.len(), 8);

    let mut seen = 0;
    for tag in &universe {
        let result = filter(&portfolio.projects, &FilterState::new().with_tag(tag.to_uppercase()));
        assert!(!result.is_empty(), "tag {tag} selects nothing");
        seen += result.len();
    }
    // Sum of per-tag hits equals the number of (item, tag) pairs.
    let pairs: usize = portfolio.projects.iter().map(|item| item.tags.len()).sum();
    assert_eq!(seen, pairs);
}

#[test]
fn test_filtering_does_not_mutate_inputs() {
    let (_dir, portfolio) = load_sample();
    let before = portfolio.projects.clone();
    let state = FilterState::new().with_search("o").with_tag("React");
    let state_before = state.clone();

    let _ = filter(&portfolio.projects, &state);

    assert_eq!(portfolio.projects, before);
    assert_eq!(state, state_before);
}

#[test]
fn test_empty_portfolio_file() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path(), "");
    let portfolio = Portfolio::load(&path).unwrap();

    assert_eq!(portfolio.projects, Catalog::default());
    assert!(filter(&portfolio.projects, &FilterState::new()).is_empty());
    assert!(tag_universe(&portfolio.projects).is_empty());
}

#[test]
fn test_projects_command_against_loaded_file() {
    colored::control::set_override(false);
    let (_dir, portfolio) = load_sample();

    let mut buf = Vec::new();
    let state = FilterState::new().with_tag("bootstrap");
    commands::projects(&portfolio, &state, OutputFormat::Text, true, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "personal-portfolio\n");
}

#[test]
fn test_load_or_builtin_prefers_file() {
    let (dir, _) = load_sample();
    let path = dir.path().join("portfolio.toml");

    let from_file = Portfolio::load_or_builtin(Some(path.as_path())).unwrap();
    assert_eq!(from_file.profile.name, "Test Person");

    let builtin = Portfolio::load_or_builtin(None).unwrap();
    assert_ne!(builtin.profile.name, "Test Person");
    assert_eq!(builtin.projects.len(), 3);
}

#[test]
fn test_config_points_at_catalog() {
    let (dir, _) = load_sample();
    let config_path = dir.path().join("config").join("config.toml");
    let catalog_path = dir.path().join("portfolio.toml");

    let mut config = FolioConfig::default();
    config.set_catalog(catalog_path.clone()).unwrap();
    config.save_to(&config_path).unwrap();

    let loaded = FolioConfig::load_from(&config_path).unwrap();
    let portfolio = Portfolio::load_or_builtin(loaded.catalog.as_deref()).unwrap();
    assert_eq!(portfolio.profile.name, "Test Person");
}
