//! Folio - a tag-filtered portfolio browser
//!
//! This library holds a portfolio's static content (profile, skills, contact
//! details and a project catalog) and the filter engine that narrows the
//! catalog by title search and tag selection.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod output;
pub mod search;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FolioError {
    /// Catalog loading error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Requested entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
