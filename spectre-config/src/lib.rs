//! Configuration core for the Spectre Ghostty config editor.
//!
//! This crate owns the configuration state model and everything that reads or
//! writes it:
//!
//! - The static option schema and its 13 categories
//! - The change-tracking config store and its persistence backends
//! - The Ghostty `key = value` text codec
//! - The share-link codec
//! - Theme file parsing and mapping onto config overrides
//! - Bundled presets

pub mod codec;
pub mod error;
pub mod persistence;
pub mod presets;
pub mod schema;
pub mod share;
pub mod store;
pub mod themes;
pub mod value;

// Re-export main types for convenience
pub use codec::{CONFIG_HEADER, DecodedConfig, decode_config, encode_config, parse_value};
pub use error::{ConfigError, Result};
pub use persistence::{ConfigStorage, FileStorage, MemoryStorage, PersistedState};
pub use presets::{Preset, PresetCategory, find_preset, presets};
pub use schema::{
    Category, ConfigOption, EnumChoice, OptionKind, Platform, all_options, categories,
    find_option, options_by_category,
};
pub use share::{DEFAULT_SHARE_ORIGIN, ShareLookup, ShareableConfig};
pub use store::{ConfigStore, ImportMode, ImportReport, StoreEvent, SubscriptionId};
pub use themes::{Color, Theme, ThemeColors, ThemeKind};
pub use value::{ConfigValue, ConfigValues};
