//! Command-line interface for spectre.
//!
//! Every subcommand works against the file-backed config store. Argument parsing
//! lives here; the subcommand bodies live in the [`commands`] submodule.

pub mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use spectre_config::{ConfigStore, DEFAULT_SHARE_ORIGIN, FileStorage};
use std::io::Write;
use std::path::PathBuf;

/// spectre - Edit, validate, and share Ghostty configurations
#[derive(Debug, Parser)]
#[command(name = "spectre")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// State file to operate on (default: <config dir>/spectre/state.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List options with their current values
    Options {
        /// Only options in this category (e.g. fonts, quick-terminal)
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Only options whose id, name, or description contains this text
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Only options that differ from their default
        #[arg(long)]
        modified: bool,
    },

    /// Print the current value of an option
    Get {
        id: String,
    },

    /// Set an option; repeatable options take one or more values
    Set {
        id: String,

        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },

    /// Reset an option, or everything with --all
    Reset {
        id: Option<String>,

        #[arg(long, conflicts_with = "id")]
        all: bool,
    },

    /// Write the Ghostty config text for the current overrides
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Import Ghostty config text (use - for stdin)
    Import {
        path: PathBuf,

        /// Discard current overrides instead of merging
        #[arg(long)]
        replace: bool,
    },

    /// Validate keybind entries, or the stored keybinds when none are given
    Validate {
        entries: Vec<String>,
    },

    /// Print a share link for the current overrides
    Share {
        #[arg(long, default_value = DEFAULT_SHARE_ORIGIN)]
        origin: String,
    },

    /// Load a shared config from a link, query string, or bare token
    OpenShare {
        link: String,

        /// Discard current overrides before loading
        #[arg(long)]
        replace: bool,
    },

    /// Apply a theme file's colors
    Theme {
        path: PathBuf,

        /// Theme name to record (default: the file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// List bundled presets
    Presets {
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },

    /// Replace the current overrides with a bundled preset
    Preset {
        id: String,
    },
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Initialise stderr logging. `level` takes precedence over `RUST_LOG`.
pub fn init_logging(level: Option<log::LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}

/// Open the store named by `--state` (or the default location) and rehydrate it.
pub fn open_store(state: Option<PathBuf>) -> anyhow::Result<ConfigStore> {
    let storage = match state {
        Some(path) => FileStorage::new(path),
        None => FileStorage::default_location(),
    };
    let path = storage.path().to_path_buf();
    log::debug!("Using state file {}", path.display());

    let mut store = ConfigStore::new(Box::new(storage));
    store
        .rehydrate()
        .with_context(|| format!("Failed to load state from {}", path.display()))?;
    Ok(store)
}

/// Run a parsed command line, writing its output to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut store = open_store(cli.state)?;
    commands::dispatch(&mut store, cli.command, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_with_many_values() {
        let cli = Cli::try_parse_from([
            "spectre",
            "set",
            "font-feature",
            "calt",
            "liga",
            "--state",
            "/tmp/x.yaml",
        ])
        .unwrap();
        assert_eq!(cli.state, Some(PathBuf::from("/tmp/x.yaml")));
        match cli.command {
            Commands::Set { id, values } => {
                assert_eq!(id, "font-feature");
                assert_eq!(values, vec!["calt", "liga"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_set_requires_value() {
        assert!(Cli::try_parse_from(["spectre", "set", "font-size"]).is_err());
    }

    #[test]
    fn test_reset_all_conflicts_with_id() {
        assert!(Cli::try_parse_from(["spectre", "reset", "font-size", "--all"]).is_err());
        assert!(Cli::try_parse_from(["spectre", "reset", "--all"]).is_ok());
    }

    #[test]
    fn test_share_default_origin() {
        let cli = Cli::try_parse_from(["spectre", "share"]).unwrap();
        assert!(matches!(cli.command, Commands::Share { origin } if origin == DEFAULT_SHARE_ORIGIN));
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["spectre", "--log-level", "debug", "presets"]).unwrap();
        assert_eq!(
            cli.log_level.map(LogLevelArg::to_level_filter),
            Some(log::LevelFilter::Debug)
        );
    }
}
