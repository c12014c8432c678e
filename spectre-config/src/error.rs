//! Typed error variants for the spectre-config crate.
//!
//! Only persistence can fail in a way callers need to handle. Everything else in
//! this crate degrades instead of erroring: codecs skip bad lines, share decoding
//! returns `None`, unknown option ids pass through.

use thiserror::Error;

/// Errors that can occur when loading or saving persisted store state.
///
/// # Example
///
/// ```rust,no_run
/// use spectre_config::{ConfigError, ConfigStore, FileStorage};
///
/// let mut store = ConfigStore::new(Box::new(FileStorage::default_location()));
/// if let Err(e) = store.rehydrate() {
///     match e {
///         ConfigError::Io(io) => eprintln!("I/O error: {io}"),
///         ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
///         ConfigError::InvalidPath(p) => eprintln!("Bad state path: {p}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the state file.
    #[error("I/O error accessing config state: {0}")]
    Io(#[from] std::io::Error),

    /// The state file contained YAML that could not be parsed.
    #[error("YAML parse error in config state: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// The state path has no parent directory to create.
    #[error("Invalid config state path: {0}")]
    InvalidPath(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
