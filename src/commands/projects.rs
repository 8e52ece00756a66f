//! Projects command - filtered project listing

use crate::{
    FolioError,
    catalog::Portfolio,
    config::OutputFormat,
    output::{self, ProjectsReport},
    search::{self, FilterState},
};
use std::io::Write;

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the projects command
///
/// Prints one card per visible project, or a "no results" line when the
/// filter matches nothing. An empty result is not an error.
///
/// # Errors
/// Returns an error if writing the output fails
pub fn execute<W: Write>(
    portfolio: &Portfolio,
    state: &FilterState,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let catalog = &portfolio.projects;
    let result = search::filter(catalog, state);
    tracing::debug!(
        search = state.search_text(),
        tag = state.selected_tag(),
        visible = result.len(),
        total = catalog.len(),
        "filtered projects"
    );

    if format == OutputFormat::Json {
        let report = ProjectsReport::new(state, catalog.len(), &result);
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    if result.is_empty() {
        if !quiet {
            writeln!(out, "{}", output::NO_RESULTS)?;
        }
        return Ok(());
    }

    if !quiet && !state.is_unfiltered() {
        writeln!(out, "Showing {} of {} project(s):\n", result.len(), catalog.len())?;
    }

    for (idx, item) in result.iter().enumerate() {
        if idx > 0 && !quiet {
            writeln!(out)?;
        }
        writeln!(out, "{}", output::project_card(item, quiet))?;
    }

    Ok(())
}
