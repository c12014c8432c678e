//! Durable storage of the store's override set.
//!
//! The store only talks to a [`ConfigStorage`]; [`FileStorage`] keeps a YAML
//! document on disk and [`MemoryStorage`] keeps it in a shared slot for tests and
//! embedding.

use crate::error::{ConfigError, Result};
use crate::value::ConfigValues;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Format version of [`PersistedState`].
pub const STATE_VERSION: u32 = 1;

/// Environment variable overriding the directory of the state file.
pub const STATE_DIR_ENV: &str = "SPECTRE_STATE_DIR";

const STATE_FILE_NAME: &str = "state.yaml";

/// What gets written to storage after each store mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default = "default_state_version")]
    pub version: u32,
    /// Overrides and passthrough values together.
    #[serde(default)]
    pub config: ConfigValues,
    #[serde(default)]
    pub theme: Option<String>,
}

fn default_state_version() -> u32 {
    STATE_VERSION
}

impl PersistedState {
    pub fn new(config: ConfigValues, theme: Option<String>) -> Self {
        Self {
            version: STATE_VERSION,
            config,
            theme,
        }
    }
}

/// Backend the store persists through.
pub trait ConfigStorage {
    /// Load the last saved state, `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<PersistedState>>;

    fn save(&self, state: &PersistedState) -> Result<()>;
}

/// YAML file storage with atomic replace on save.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at [`default_state_path`].
    pub fn default_location() -> Self {
        Self::new(default_state_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStorage for FileStorage {
    fn load(&self) -> Result<Option<PersistedState>> {
        if !self.path.exists() {
            log::debug!("No saved state at {:?}", self.path);
            return Ok(None);
        }
        if self.path.is_dir() {
            return Err(ConfigError::InvalidPath(self.path.display().to_string()));
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let state: PersistedState = serde_yaml_ng::from_str(&contents)?;
        log::info!(
            "Loaded {} saved override(s) from {:?}",
            state.config.len(),
            self.path
        );
        Ok(Some(state))
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        if self.path.is_dir() {
            return Err(ConfigError::InvalidPath(self.path.display().to_string()));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(state)?;

        // Write to a sibling temp file, then rename over the target.
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, &self.path)?;

        log::debug!("Saved {} override(s) to {:?}", state.config.len(), self.path);
        Ok(())
    }
}

/// In-memory storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<PersistedState>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// The last saved state.
    pub fn state(&self) -> Option<PersistedState> {
        self.slot.lock().clone()
    }
}

impl ConfigStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        *self.slot.lock() = Some(state.clone());
        Ok(())
    }
}

/// Directory holding the state file (using XDG convention).
///
/// `$SPECTRE_STATE_DIR` wins when set and non-empty.
pub fn state_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(STATE_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("spectre")
        } else {
            PathBuf::from(".")
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        // ~/.config/spectre on every Unix, macOS included
        if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join("spectre")
        } else {
            PathBuf::from(".")
        }
    }
}

pub fn default_state_path() -> PathBuf {
    state_dir().join(STATE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ConfigValue;
    use tempfile::TempDir;

    fn sample_state() -> PersistedState {
        let mut config = ConfigValues::new();
        config.insert("font-size".into(), ConfigValue::Number(14.0));
        config.insert("palette".into(), vec!["0=#000000"].into());
        PersistedState::new(config, Some("Nord".into()))
    }

    #[test]
    fn test_file_storage_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("state.yaml"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_round_trip_creates_parents() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("state.yaml"));
        storage.save(&sample_state()).unwrap();

        assert!(storage.path().exists());
        assert!(!storage.path().with_extension("yaml.tmp").exists());
        assert_eq!(storage.load().unwrap(), Some(sample_state()));
    }

    #[test]
    fn test_file_storage_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.save(&sample_state()),
            Err(ConfigError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_file_storage_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.yaml");
        fs::write(&path, "config: [unclosed").unwrap();
        assert!(matches!(
            FileStorage::new(&path).load(),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_fields_default() {
        let state: PersistedState = serde_yaml_ng::from_str("theme: Dracula\n").unwrap();
        assert_eq!(state.version, STATE_VERSION);
        assert!(state.config.is_empty());
        assert_eq!(state.theme.as_deref(), Some("Dracula"));
    }

    #[test]
    fn test_memory_storage_shares_slot() {
        let storage = MemoryStorage::new();
        let view = storage.clone();
        assert!(view.state().is_none());
        storage.save(&sample_state()).unwrap();
        assert_eq!(view.state(), Some(sample_state()));
    }
}
