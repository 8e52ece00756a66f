//! About command - profile and skills

use crate::{FolioError, catalog::Portfolio, output};
use colored::Colorize;
use std::io::Write;

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the about command
///
/// # Errors
/// Returns an error if writing the output fails
pub fn execute<W: Write>(portfolio: &Portfolio, quiet: bool, out: &mut W) -> Result<()> {
    let profile = &portfolio.profile;

    if quiet {
        for skill in &portfolio.skills {
            writeln!(out, "{}", skill.name)?;
        }
        return Ok(());
    }

    if !profile.name.is_empty() {
        writeln!(out, "{}", profile.name.bold())?;
    }
    if !profile.headline.is_empty() {
        writeln!(out, "{}", profile.headline.dimmed())?;
    }
    if !profile.location.is_empty() {
        writeln!(out, "{}", profile.location)?;
    }
    if !profile.bio.is_empty() {
        writeln!(out, "\n{}", profile.bio.trim())?;
    }

    if !portfolio.skills.is_empty() {
        let badges: Vec<String> = portfolio.skills.iter().map(output::skill_badge).collect();
        writeln!(out, "\n{}", "Skills:".underline())?;
        writeln!(out, "  {}", badges.join(" · "))?;
    }

    Ok(())
}
