//! Contact command - contact details and outbound links

use super::open::dispatch;
use crate::{FolioError, catalog::Portfolio, output};
use colored::Colorize;
use std::io::Write;

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the contact command
///
/// Without `open_link`, prints the contact card. With it, opens (or prints,
/// when `print` is set) the named link.
///
/// # Errors
/// Returns `FolioError::NotFound` if the named link does not exist, or an
/// I/O error if writing or launching fails
pub fn execute<W: Write>(
    portfolio: &Portfolio,
    open_link: Option<&str>,
    print: bool,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let contact = &portfolio.contact;

    if let Some(name) = open_link {
        let link = contact
            .link(name)
            .ok_or_else(|| FolioError::NotFound(format!("contact link '{name}'")))?;
        return dispatch(&link.url, print, quiet, out);
    }

    if quiet {
        if !contact.email.is_empty() {
            writeln!(out, "{}", contact.email)?;
        }
        return Ok(());
    }

    writeln!(out, "{}", "Get in Touch".bold())?;
    if let Some(location) = &contact.location {
        writeln!(out, "  {} {location}", "Location:".cyan())?;
    }
    if !contact.email.is_empty() {
        writeln!(out, "  {} {}", "Email:".cyan(), contact.email)?;
    }
    if let Some(phone) = &contact.phone {
        writeln!(out, "  {} {phone}", "Phone:".cyan())?;
    }
    for link in &contact.links {
        writeln!(out, "{}", output::link_line(link))?;
    }
    Ok(())
}
