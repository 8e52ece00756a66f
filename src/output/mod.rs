//! Output formatting for CLI display
//!
//! This module provides utilities for formatting portfolio content in the
//! CLI: project cards, tag chips and contact lines, plus the JSON payloads
//! used by `--format json`.

use crate::catalog::{CatalogItem, Link, Skill};
use crate::search::{FilterResult, FilterState, chip_label};
use colored::{Colorize, CustomColor};
use serde::Serialize;

/// Message shown when a filter matches nothing
pub const NO_RESULTS: &str = "No projects found.";

/// Format a project as a multi-line card
#[must_use]
pub fn project_card(item: &CatalogItem, quiet: bool) -> String {
    if quiet {
        return item.id.clone();
    }

    let mut lines = vec![format!("{} {}", item.title.bold(), format!("({})", item.id).dimmed())];
    if !item.description.is_empty() {
        lines.push(format!("  {}", item.description));
    }
    if !item.tags.is_empty() {
        lines.push(format!("  {}", tag_chips(&item.tags)));
    }
    if let Some(url) = &item.github {
        lines.push(format!("  {} {}", "GitHub:".cyan(), url));
    }
    if let Some(url) = &item.live {
        lines.push(format!("  {} {}", "Live:".cyan(), url));
    }
    lines.join("\n")
}

/// Render tags as `[React] [Node.js]`
#[must_use]
pub fn tag_chips(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]").magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a tag with usage count, highlighting the selected one
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, selected: bool, quiet: bool) -> String {
    if quiet {
        return tag.to_string();
    }
    let label = chip_label(tag);
    let label = if selected {
        label.on_magenta().white().bold().to_string()
    } else {
        label.magenta().to_string()
    };
    format!("  {label} (used by {count} project(s))")
}

/// Format a skill badge, tinted with its color when it parses as hex
#[must_use]
pub fn skill_badge(skill: &Skill) -> String {
    match skill.color.as_deref().and_then(parse_hex_color) {
        Some(color) => skill.name.custom_color(color).bold().to_string(),
        None => skill.name.bold().to_string(),
    }
}

fn parse_hex_color(hex: &str) -> Option<CustomColor> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(CustomColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format a named link line
#[must_use]
pub fn link_line(link: &Link) -> String {
    format!("  {} {}", format!("{}:", chip_label(&link.name)).cyan(), link.url)
}

/// JSON payload for the projects listing
#[derive(Debug, Serialize)]
pub struct ProjectsReport<'a> {
    pub filter: &'a FilterState,
    pub total: usize,
    pub count: usize,
    pub projects: Vec<&'a CatalogItem>,
}

impl<'a> ProjectsReport<'a> {
    #[must_use]
    pub fn new(filter: &'a FilterState, total: usize, result: &FilterResult<'a>) -> Self {
        Self {
            filter,
            total,
            count: result.len(),
            projects: result.iter().collect(),
        }
    }
}

/// JSON entry for the tags listing
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: String,
    pub label: String,
    pub count: usize,
}

impl TagEntry {
    #[must_use]
    pub fn new(tag: String, count: usize) -> Self {
        let label = chip_label(&tag);
        Self { tag, label, count }
    }
}
