//! Open command - hand a project link to the system opener

use crate::{FolioError, catalog::Portfolio};
use std::io::Write;

type Result<T> = std::result::Result<T, FolioError>;

/// Which of a project's links to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Live,
}

/// Execute the open command
///
/// # Errors
/// Returns `FolioError::NotFound` for an unknown project id,
/// `FolioError::InvalidInput` if the project has no link of that kind,
/// or an I/O error if launching fails
pub fn execute<W: Write>(
    portfolio: &Portfolio,
    id: &str,
    kind: LinkKind,
    print: bool,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let item = portfolio
        .projects
        .get(id)
        .ok_or_else(|| FolioError::NotFound(format!("project '{id}'")))?;

    let url = match kind {
        LinkKind::Github => item.github.as_deref(),
        LinkKind::Live => item.live.as_deref(),
    }
    .ok_or_else(|| {
        FolioError::InvalidInput(format!(
            "Project '{}' has no {} link",
            item.id,
            match kind {
                LinkKind::Github => "GitHub",
                LinkKind::Live => "live",
            }
        ))
    })?;

    dispatch(url, print, quiet, out)
}

/// Print `url` or launch it with the platform's default handler
///
/// # Errors
/// Returns an I/O error if writing or launching fails
pub fn dispatch<W: Write>(url: &str, print: bool, quiet: bool, out: &mut W) -> Result<()> {
    if print {
        writeln!(out, "{url}")?;
        return Ok(());
    }

    tracing::info!(url, "opening link");
    open::that(url)?;
    if !quiet {
        writeln!(out, "Opened {url}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(id: &str, kind: LinkKind) -> Result<String> {
        let portfolio = Portfolio::builtin().unwrap();
        let mut buf = Vec::new();
        execute(&portfolio, id, kind, true, false, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_print_github_link() {
        let out = run("school-portfolio", LinkKind::Github).unwrap();
        assert_eq!(out, "https://github.com/example/school\n");
    }

    #[test]
    fn test_print_live_link_case_insensitive_id() {
        let out = run("Social-Zone", LinkKind::Live).unwrap();
        assert_eq!(out, "https://socialzone.example.com/\n");
    }

    #[test]
    fn test_unknown_project() {
        let err = run("nope", LinkKind::Github).unwrap_err();
        assert!(matches!(err, FolioError::NotFound(_)));
    }

    #[test]
    fn test_missing_link() {
        let portfolio = Portfolio::from_toml_str("[[projects]]\ntitle = \"Bare\"\n").unwrap();
        let mut buf = Vec::new();
        let err = execute(&portfolio, "bare", LinkKind::Live, true, false, &mut buf).unwrap_err();
        assert!(matches!(err, FolioError::InvalidInput(_)));
    }
}
