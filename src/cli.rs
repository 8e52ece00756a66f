//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for folio using the `clap` crate.
//!
//! # Commands
//!
//! - **projects**: List projects, filtered by title search and tag (default)
//! - **tags**: List the tags available for filtering
//! - **about**: Show the profile and skills
//! - **contact**: Show contact details or open a contact link
//! - **open**: Open a project's GitHub or live link
//! - **config**: Inspect and change configuration
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use folio::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["folio", "projects", "portfolio", "-t", "react"]);
//! let params = cli.get_command().get_filter_state();
//! assert_eq!(params.map(|s| s.search_text().to_string()), Some("portfolio".into()));
//! ```

use crate::config::OutputFormat;
use crate::search::FilterState;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Browse a developer portfolio from the terminal
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Portfolio file to use (overrides config)
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List projects, optionally filtered (default)
    #[command(visible_alias = "p")]
    Projects {
        /// Case-insensitive text to look for in project titles
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Only show projects carrying this tag
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,

        /// Output format (overrides config)
        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the tags projects can be filtered by
    Tags {
        /// Highlight this tag as the current selection
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        selected: Option<String>,

        /// Output format (overrides config)
        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the profile and skills
    #[command(visible_alias = "a")]
    About,

    /// Show contact details
    #[command(visible_alias = "c")]
    Contact {
        /// Open the named contact link (github, linkedin, web, ...)
        #[arg(long = "open", value_name = "LINK")]
        open: Option<String>,

        /// Print the link instead of launching it
        #[arg(long = "print", requires = "open")]
        print: bool,
    },

    /// Open a project's GitHub page (or live site with --live)
    #[command(visible_alias = "o")]
    Open {
        /// Project id as shown by `folio projects`
        #[arg(value_name = "ID")]
        id: String,

        /// Open the live site instead of the repository
        #[arg(short = 'l', long = "live")]
        live: bool,

        /// Print the link instead of launching it
        #[arg(long = "print")]
        print: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Use a portfolio file instead of the built-in one
    SetCatalog {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Go back to the built-in portfolio
    ClearCatalog,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command to execute, defaulting to an unfiltered projects listing
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Projects {
            query: None,
            tag: None,
            format: None,
        })
    }
}

impl Commands {
    /// Build the filter state for the projects command
    #[must_use]
    pub fn get_filter_state(&self) -> Option<FilterState> {
        match self {
            Self::Projects { query, tag, .. } => {
                let mut state = FilterState::new().with_search(query.clone().unwrap_or_default());
                state.set_tag(tag.clone());
                Some(state)
            }
            _ => None,
        }
    }

    /// Output format requested on the command line, if any
    #[must_use]
    pub const fn get_format(&self) -> Option<OutputFormat> {
        match self {
            Self::Projects { format, .. } | Self::Tags { format, .. } => *format,
            _ => None,
        }
    }
}
