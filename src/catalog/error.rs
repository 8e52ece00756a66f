//! Error types for catalog loading
//!
//! These errors can occur while reading a portfolio file from disk,
//! parsing its TOML content, or validating the project catalog.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a portfolio
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Portfolio file could not be read
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Portfolio file is not valid TOML or has the wrong shape
    #[error("Failed to parse portfolio: {0}")]
    Parse(String),

    /// Two projects share the same identifier
    #[error("Duplicate project id '{0}'")]
    DuplicateId(String),

    /// A project entry is unusable
    #[error("Invalid project: {0}")]
    InvalidItem(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
