//! Tags command - the tag universe with usage counts

use crate::{
    FolioError,
    catalog::Portfolio,
    config::OutputFormat,
    output::{self, TagEntry},
    search::{fold_case, tag_counts},
};
use std::io::Write;

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if writing the output fails
pub fn execute<W: Write>(
    portfolio: &Portfolio,
    selected: Option<&str>,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let counts = tag_counts(&portfolio.projects);

    if format == OutputFormat::Json {
        let entries: Vec<TagEntry> = counts
            .into_iter()
            .map(|(tag, count)| TagEntry::new(tag, count))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    if counts.is_empty() {
        if !quiet {
            writeln!(out, "No tags found in catalog.")?;
        }
        return Ok(());
    }

    let selected = selected.filter(|t| !t.is_empty()).map(fold_case);
    if !quiet {
        writeln!(out, "Tags in catalog:")?;
    }
    for (tag, count) in &counts {
        let is_selected = selected.as_deref() == Some(tag.as_str());
        writeln!(out, "{}", output::tag_with_count(tag, *count, is_selected, quiet))?;
    }
    Ok(())
}
