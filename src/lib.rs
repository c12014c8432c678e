//! spectre - Ghostty configuration editor core.
//!
//! The configuration model lives in [`spectre_config`] and keybind handling in
//! [`spectre_keybindings`]; this crate adds the command-line driver.

pub mod cli;

pub use spectre_config as config;
pub use spectre_keybindings as keybindings;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
