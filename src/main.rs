//! Folio CLI application entry point
//!
//! This is the main executable for the folio portfolio browser. It provides a
//! command-line interface for listing and filtering projects and showing the
//! rest of the portfolio.
//!
//! # Features
//!
//! - **Projects**: Filter projects by title text and tag (default command)
//! - **Tags**: List the tags available as filters
//! - **About / Contact**: Profile, skills and contact details
//! - **Open**: Launch a project's repository or live site
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # List all projects (default command)
//! folio
//! folio projects
//!
//! # Filter by title and tag
//! folio projects portfolio
//! folio p -t react
//!
//! # Machine-readable output
//! folio projects zone --format json
//!
//! # Open a project's live site
//! folio open social-zone --live
//!
//! # Use your own portfolio file
//! folio config set-catalog ~/portfolio.toml
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/folio/config.toml` on Linux) and can be overridden with
//! `FOLIO_*` environment variables. Logging goes to stderr and is controlled
//! by `-v` or the `FOLIO_LOG` environment variable.

use clap::CommandFactory;
use folio::{
    FolioError,
    catalog::Portfolio,
    cli::{Cli, Commands},
    commands::{self, open::LinkKind},
    completions,
    config::FolioConfig,
};
use std::io;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FolioError>;

/// Initialise logging to stderr
///
/// `FOLIO_LOG` (or `RUST_LOG`) takes precedence over the `-v` count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let config_path = FolioConfig::config_path()?;
    let config = FolioConfig::load_from(&config_path)?;

    let quiet = cli.quiet || config.quiet;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let command = cli.get_command();
    let mut stdout = io::stdout().lock();

    match &command {
        Commands::Config { command } => {
            return commands::config(config, &config_path, command, quiet, &mut stdout);
        }
        Commands::Completions { shell } => {
            completions::generate_static(*shell, &mut Cli::command(), &mut stdout);
            return Ok(());
        }
        _ => {}
    }

    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let portfolio = Portfolio::load_or_builtin(catalog_path)?;
    let format = command.get_format().unwrap_or(config.format);

    match &command {
        Commands::Projects { .. } => {
            let state = command
                .get_filter_state()
                .ok_or_else(|| FolioError::InvalidInput("Failed to parse filter parameters".into()))?;
            commands::projects(&portfolio, &state, format, quiet, &mut stdout)?;
        }
        Commands::Tags { selected, .. } => {
            commands::tags(&portfolio, selected.as_deref(), format, quiet, &mut stdout)?;
        }
        Commands::About => {
            commands::about(&portfolio, quiet, &mut stdout)?;
        }
        Commands::Contact { open, print } => {
            commands::contact(&portfolio, open.as_deref(), *print, quiet, &mut stdout)?;
        }
        Commands::Open { id, live, print } => {
            let kind = if *live { LinkKind::Live } else { LinkKind::Github };
            commands::open(&portfolio, id, kind, *print, quiet, &mut stdout)?;
        }
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
