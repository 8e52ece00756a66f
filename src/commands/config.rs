//! Config command - inspect and change configuration

use crate::{FolioError, catalog::Portfolio, cli::ConfigCommands, config::FolioConfig};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, FolioError>;

/// Execute a config subcommand against the config file at `config_path`
///
/// # Errors
/// Returns an error if the config cannot be saved, the catalog file does not
/// exist or fails to parse, or writing the output fails
pub fn execute<W: Write>(
    mut config: FolioConfig,
    config_path: &Path,
    command: &ConfigCommands,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| FolioError::InvalidInput(format!("Failed to render config: {e}")))?;
            write!(out, "{rendered}")?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
        ConfigCommands::SetCatalog { path } => {
            let path = path.canonicalize().map_err(|e| {
                FolioError::InvalidInput(format!("Cannot access path '{}': {e}", path.display()))
            })?;
            // Validate before saving.
            let portfolio = Portfolio::load(&path)?;
            config.set_catalog(path.clone())?;
            config.save_to(config_path)?;
            if !quiet {
                writeln!(
                    out,
                    "Catalog set to {} ({} project(s))",
                    path.display(),
                    portfolio.projects.len()
                )?;
            }
        }
        ConfigCommands::ClearCatalog => {
            let previous = config.clear_catalog();
            config.save_to(config_path)?;
            if !quiet {
                match previous {
                    Some(path) => writeln!(out, "Catalog {} removed; using built-in portfolio", path.display())?,
                    None => writeln!(out, "Already using built-in portfolio")?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_clear_catalog() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        let catalog_path = dir.path().join("portfolio.toml");
        fs::write(&catalog_path, "[[projects]]\ntitle = \"Only One\"\n").unwrap();

        let mut buf = Vec::new();
        let command = ConfigCommands::SetCatalog { path: catalog_path.clone() };
        execute(FolioConfig::default(), &config_path, &command, false, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("(1 project(s))"));

        let saved = FolioConfig::load_from(&config_path).unwrap();
        assert_eq!(saved.catalog, Some(catalog_path.canonicalize().unwrap()));

        let mut buf = Vec::new();
        execute(saved, &config_path, &ConfigCommands::ClearCatalog, true, &mut buf).unwrap();
        assert!(buf.is_empty());
        assert!(FolioConfig::load_from(&config_path).unwrap().catalog.is_none());
    }

    #[test]
    fn test_set_catalog_rejects_invalid_portfolio() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        let catalog_path = dir.path().join("broken.toml");
        fs::write(&catalog_path, "[[projects]]\n").unwrap();

        let command = ConfigCommands::SetCatalog { path: catalog_path };
        let err = execute(FolioConfig::default(), &config_path, &command, true, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, FolioError::CatalogError(_)));
        assert!(!config_path.exists());
    }

    #[test]
    fn test_show_and_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        let mut buf = Vec::new();
        execute(FolioConfig::default(), &config_path, &ConfigCommands::Show, false, &mut buf).unwrap();
        let shown = String::from_utf8(buf).unwrap();
        assert!(shown.contains("format = \"text\""));

        let mut buf = Vec::new();
        execute(FolioConfig::default(), &config_path, &ConfigCommands::Path, false, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), config_path.display().to_string());
    }
}
