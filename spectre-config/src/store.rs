//! The editable configuration state.
//!
//! [`ConfigStore`] holds only values that differ from the schema defaults. Values for
//! ids the schema knows live in the typed override map; anything else is kept
//! verbatim in a passthrough map so that imports never lose keys. Every mutation is
//! persisted through the configured [`ConfigStorage`] and then announced to
//! subscribers.

use crate::codec::{self, DecodedConfig};
use crate::error::Result;
use crate::persistence::{ConfigStorage, MemoryStorage, PersistedState, STATE_VERSION};
use crate::presets::Preset;
use crate::schema::{self, Category};
use crate::share;
use crate::themes::{self, THEME_COLOR_KEYS, Theme};
use crate::value::{ConfigValue, ConfigValues};

/// Handle returned by [`ConfigStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change notification delivered to subscribers after each write.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Rehydrated,
    ValueChanged { id: String },
    ValueReset { id: String },
    AllReset,
    Imported { keys: Vec<String> },
    Loaded { keys: Vec<String> },
    ThemeApplied { name: String },
}

/// How [`ConfigStore::import_config_with`] treats existing overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Keys in the text replace existing values; other overrides stay.
    #[default]
    Merge,
    /// Start from defaults, then apply the text.
    Replace,
}

/// What an import did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Keys that were written (including ones pruned back to the default).
    pub applied: Vec<String>,
    /// Keys the schema does not know; stored as passthrough.
    pub unknown_keys: Vec<String>,
    /// 1-based numbers of lines that were ignored.
    pub skipped_lines: Vec<usize>,
}

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

pub struct ConfigStore {
    overrides: ConfigValues,
    passthrough: ConfigValues,
    applied_theme: Option<String>,
    storage: Box<dyn ConfigStorage>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    ready: bool,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("overrides", &self.overrides)
            .field("passthrough", &self.passthrough)
            .field("applied_theme", &self.applied_theme)
            .field("subscribers", &self.subscribers.len())
            .field("ready", &self.ready)
            .finish()
    }
}

impl ConfigStore {
    /// Create an empty store. Call [`rehydrate`](Self::rehydrate) to load saved state.
    pub fn new(storage: Box<dyn ConfigStorage>) -> Self {
        Self {
            overrides: ConfigValues::new(),
            passthrough: ConfigValues::new(),
            applied_theme: None,
            storage,
            subscribers: Vec::new(),
            next_subscription: 0,
            ready: false,
        }
    }

    /// A store backed by fresh [`MemoryStorage`], already marked ready.
    pub fn in_memory() -> Self {
        let mut store = Self::new(Box::new(MemoryStorage::new()));
        store.ready = true;
        store
    }

    /// Replace the current state with whatever the storage holds.
    ///
    /// Saved entries go through the same pruning as [`set_value`](Self::set_value),
    /// so state written by an older schema is cleaned up on load.
    pub fn rehydrate(&mut self) -> Result<()> {
        let state = self.storage.load()?;
        self.overrides.clear();
        self.passthrough.clear();
        self.applied_theme = None;

        if let Some(state) = state {
            if state.version > STATE_VERSION {
                log::warn!(
                    "Saved state has version {} (this build writes {}); loading what it can",
                    state.version,
                    STATE_VERSION
                );
            }
            for (id, value) in state.config {
                self.put(&id, value);
            }
            self.applied_theme = state.theme.filter(|t| !t.is_empty());
        }

        self.ready = true;
        log::info!("Config store ready with {} override(s)", self.modified_count());
        self.notify(StoreEvent::Rehydrated);
        Ok(())
    }

    /// Whether [`rehydrate`](Self::rehydrate) has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Current value of `id`: the override, else the passthrough value, else the
    /// schema default. `None` only for ids that are neither stored nor known.
    pub fn get_value(&self, id: &str) -> Option<ConfigValue> {
        self.overrides
            .get(id)
            .or_else(|| self.passthrough.get(id))
            .cloned()
            .or_else(|| schema::find_option(id).map(|option| option.default_value()))
    }

    /// Store `value` for `id` without checking it against the option's kind.
    pub fn set_value(&mut self, id: &str, value: impl Into<ConfigValue>) {
        self.put(id, value.into());
        self.persist();
        self.notify(StoreEvent::ValueChanged { id: id.to_string() });
    }

    pub fn is_modified(&self, id: &str) -> bool {
        self.overrides.contains_key(id) || self.passthrough.contains_key(id)
    }

    pub fn reset_value(&mut self, id: &str) {
        let removed = self.overrides.remove(id).is_some() | self.passthrough.remove(id).is_some();
        if removed {
            self.persist();
            self.notify(StoreEvent::ValueReset { id: id.to_string() });
        }
    }

    /// Drop every override and the applied theme.
    pub fn reset_all(&mut self) {
        self.overrides.clear();
        self.passthrough.clear();
        self.applied_theme = None;
        self.persist();
        self.notify(StoreEvent::AllReset);
    }

    /// Ghostty config text for the current overrides; empty when nothing is set.
    pub fn export_config(&self) -> String {
        codec::encode_config(&self.snapshot())
    }

    /// Merge config text into the store.
    pub fn import_config(&mut self, text: &str) -> ImportReport {
        self.import_config_with(text, ImportMode::Merge)
    }

    pub fn import_config_with(&mut self, text: &str, mode: ImportMode) -> ImportReport {
        let DecodedConfig {
            values,
            unknown_keys,
            skipped_lines,
        } = codec::decode_config(text);

        if mode == ImportMode::Replace {
            self.overrides.clear();
            self.passthrough.clear();
            self.applied_theme = None;
        }

        let applied: Vec<String> = values.keys().cloned().collect();
        for (id, value) in values {
            self.put(&id, value);
        }

        log::info!(
            "Imported {} key(s) ({} unknown, {} line(s) skipped)",
            applied.len(),
            unknown_keys.len(),
            skipped_lines.len()
        );
        self.persist();
        self.notify(StoreEvent::Imported {
            keys: applied.clone(),
        });

        ImportReport {
            applied,
            unknown_keys,
            skipped_lines,
        }
    }

    /// Merge `patch` into the overrides. A theme name, when given, becomes the
    /// applied theme; `None` leaves the current one.
    pub fn load_config(&mut self, patch: &ConfigValues, theme_name: Option<&str>) {
        for (id, value) in patch {
            self.put(id, value.clone());
        }
        if let Some(name) = theme_name.filter(|n| !n.is_empty()) {
            self.applied_theme = Some(name.to_string());
        }
        self.persist();
        self.notify(StoreEvent::Loaded {
            keys: patch.keys().cloned().collect(),
        });
    }

    /// Replace all color keys with `theme`'s colors.
    pub fn apply_theme(&mut self, theme: &Theme) {
        for key in THEME_COLOR_KEYS {
            self.overrides.remove(key);
        }
        for (id, value) in themes::theme_to_config(theme) {
            self.put(&id, value);
        }
        self.applied_theme = Some(theme.name.clone());
        log::info!("Applied theme {}", theme.name);
        self.persist();
        self.notify(StoreEvent::ThemeApplied {
            name: theme.name.clone(),
        });
    }

    /// Reset everything, then load the preset's overrides.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.reset_all();
        self.load_config(&preset.config(), None);
        log::info!("Applied preset {}", preset.id);
    }

    /// Overrides and passthrough values in one map.
    pub fn snapshot(&self) -> ConfigValues {
        let mut all = self.passthrough.clone();
        all.extend(
            self.overrides
                .iter()
                .map(|(id, value)| (id.clone(), value.clone())),
        );
        all
    }

    /// Overrides for ids the schema knows.
    pub fn overrides(&self) -> &ConfigValues {
        &self.overrides
    }

    /// Values for ids the schema does not know.
    pub fn passthrough(&self) -> &ConfigValues {
        &self.passthrough
    }

    pub fn modified_count(&self) -> usize {
        self.overrides.len() + self.passthrough.len()
    }

    pub fn modified_count_in(&self, category: Category) -> usize {
        self.overrides
            .keys()
            .filter_map(|id| schema::find_option(id))
            .filter(|option| option.category == category)
            .count()
    }

    pub fn applied_theme(&self) -> Option<&str> {
        self.applied_theme.as_deref()
    }

    /// Share link for the current overrides and applied theme.
    pub fn share_url(&self, origin: &str) -> String {
        share::build_share_url(origin, &self.snapshot(), self.applied_theme())
    }

    /// Register a callback run synchronously after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn put(&mut self, id: &str, value: ConfigValue) {
        match schema::find_option(id) {
            Some(option) => {
                if value.is_vacuous() || option.is_default(&value) {
                    self.overrides.remove(id);
                } else {
                    self.overrides.insert(id.to_string(), value);
                }
            }
            None => {
                if value.is_vacuous() {
                    self.passthrough.remove(id);
                } else {
                    log::debug!("Keeping unknown option {id} as passthrough");
                    self.passthrough.insert(id.to_string(), value);
                }
            }
        }
    }

    fn persist(&self) {
        if !self.ready {
            log::debug!("Persisting before rehydrate; saved state will be overwritten");
        }
        let state = PersistedState::new(self.snapshot(), self.applied_theme.clone());
        if let Err(e) = self.storage.save(&state) {
            log::error!("Failed to persist config state: {e}");
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::find_preset;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_get_falls_back_to_default() {
        let store = ConfigStore::in_memory();
        assert_eq!(store.get_value("font-size"), Some(ConfigValue::Number(13.0)));
        assert_eq!(store.get_value("unknown-thing"), None);
        assert!(!store.is_modified("font-size"));
    }

    #[test]
    fn test_set_and_reset() {
        let mut store = ConfigStore::in_memory();
        store.set_value("font-size", 16.0);
        assert!(store.is_modified("font-size"));
        assert_eq!(store.get_value("font-size"), Some(ConfigValue::Number(16.0)));

        store.reset_value("font-size");
        assert!(!store.is_modified("font-size"));
        assert_eq!(store.get_value("font-size"), Some(ConfigValue::Number(13.0)));
    }

    #[test]
    fn test_default_and_vacuous_values_are_pruned() {
        let mut store = ConfigStore::in_memory();
        store.set_value("font-size", 16.0);
        store.set_value("font-size", 13.0);
        assert!(!store.is_modified("font-size"));

        store.set_value("keybind", vec!["ctrl+a=select_all"]);
        store.set_value("keybind", Vec::<String>::new());
        assert!(!store.is_modified("keybind"));
        assert_eq!(store.modified_count(), 0);
    }

    #[test]
    fn test_unknown_ids_pass_through() {
        let mut store = ConfigStore::in_memory();
        store.set_value("future-option", "on");
        assert!(store.is_modified("future-option"));
        assert_eq!(store.passthrough().len(), 1);
        assert!(store.overrides().is_empty());
        assert_eq!(store.get_value("future-option"), Some("on".into()));
        assert!(store.export_config().contains("future-option = on"));
    }

    #[test]
    fn test_no_kind_validation_on_set() {
        let mut store = ConfigStore::in_memory();
        store.set_value("font-size", "large");
        assert_eq!(store.get_value("font-size"), Some("large".into()));
    }

    #[test]
    fn test_reset_all_is_idempotent() {
        let mut store = ConfigStore::in_memory();
        store.set_value("font-size", 20.0);
        store.set_value("mystery", "x");
        store.reset_all();
        let once = store.snapshot();
        store.reset_all();
        assert_eq!(store.snapshot(), once);
        assert!(once.is_empty());
        assert_eq!(store.export_config(), "");
    }

    #[test]
    fn test_import_merges_and_reports() {
        let mut store = ConfigStore::in_memory();
        store.set_value("cursor-style", "bar");
        let report = store.import_config("font-size = 15\nweird-key = 1\nbroken line\n");

        assert_eq!(store.get_value("cursor-style"), Some("bar".into()));
        assert_eq!(store.get_value("font-size"), Some(ConfigValue::Number(15.0)));
        assert_eq!(report.unknown_keys, vec!["weird-key".to_string()]);
        assert_eq!(report.skipped_lines, vec![3]);
        assert_eq!(report.applied.len(), 2);
    }

    #[test]
    fn test_import_replace() {
        let mut store = ConfigStore::in_memory();
        store.set_value("cursor-style", "bar");
        store.import_config_with("font-size = 15", ImportMode::Replace);
        assert!(!store.is_modified("cursor-style"));
        assert!(store.is_modified("font-size"));
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut store = ConfigStore::in_memory();
        store.set_value("font-family", "Iosevka");
        store.set_value("background-opacity", 0.9);
        store.set_value("palette", vec!["0=#111111", "1=#ee0000"]);

        let mut other = ConfigStore::in_memory();
        other.import_config(&store.export_config());
        assert_eq!(other.snapshot(), store.snapshot());
    }

    #[test]
    fn test_apply_theme_replaces_colors() {
        let mut store = ConfigStore::in_memory();
        store.set_value("cursor-text", "#123456");
        store.set_value("palette", vec!["5=#abcdef"]);
        store.set_value("font-size", 18.0);

        let theme = Theme::from_content("Mono", "background = #101010\npalette = 0=#000000");
        store.apply_theme(&theme);

        assert!(!store.is_modified("cursor-text"));
        assert_eq!(store.get_value("palette"), Some(vec!["0=#000000"].into()));
        assert_eq!(store.get_value("background"), Some("#101010".into()));
        assert_eq!(store.get_value("font-size"), Some(ConfigValue::Number(18.0)));
        assert_eq!(store.applied_theme(), Some("Mono"));
    }

    #[test]
    fn test_apply_preset_resets_first() {
        let mut store = ConfigStore::in_memory();
        store.set_value("cursor-style", "underline");
        store.apply_preset(find_preset("minimal").unwrap());
        assert!(!store.is_modified("cursor-style"));
        assert_eq!(store.get_value("font-size"), Some(ConfigValue::Number(14.0)));
        assert_eq!(store.modified_count(), 4);
    }

    #[test]
    fn test_load_config_records_theme() {
        let mut store = ConfigStore::in_memory();
        let mut patch = ConfigValues::new();
        patch.insert("font-size".into(), ConfigValue::Number(12.0));
        store.load_config(&patch, Some("Nord"));
        assert_eq!(store.applied_theme(), Some("Nord"));
        store.load_config(&ConfigValues::new(), None);
        assert_eq!(store.applied_theme(), Some("Nord"));
    }

    #[test]
    fn test_modified_count_in_category() {
        let mut store = ConfigStore::in_memory();
        store.set_value("font-size", 15.0);
        store.set_value("font-family", "Hack");
        store.set_value("cursor-style", "bar");
        assert_eq!(store.modified_count_in(Category::Fonts), 2);
        assert_eq!(store.modified_count_in(Category::Cursor), 1);
        assert_eq!(store.modified_count_in(Category::Mouse), 0);
    }

    #[test]
    fn test_subscribers_see_events_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ConfigStore::in_memory();
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.set_value("font-size", 15.0);
        store.reset_value("font-size");
        store.reset_value("font-size");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.reset_all();

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::ValueChanged {
                    id: "font-size".into()
                },
                StoreEvent::ValueReset {
                    id: "font-size".into()
                },
            ]
        );
    }

    #[test]
    fn test_rehydrate_from_memory() {
        let storage = MemoryStorage::new();
        let mut first = ConfigStore::new(Box::new(storage.clone()));
        assert!(!first.is_ready());
        first.rehydrate().unwrap();
        assert!(first.is_ready());
        first.set_value("font-size", 17.0);
        first.set_value("unknown-key", "kept");
        first.load_config(&ConfigValues::new(), Some("Dracula"));

        let mut second = ConfigStore::new(Box::new(storage.clone()));
        second.rehydrate().unwrap();
        assert_eq!(second.get_value("font-size"), Some(ConfigValue::Number(17.0)));
        assert_eq!(second.get_value("unknown-key"), Some("kept".into()));
        assert_eq!(second.applied_theme(), Some("Dracula"));
        assert_eq!(storage.state().unwrap().config.len(), 2);
    }

    #[test]
    fn test_rehydrate_prunes_saved_defaults() {
        let mut config = ConfigValues::new();
        config.insert("font-size".into(), ConfigValue::Number(13.0));
        config.insert("keybind".into(), ConfigValue::List(vec![]));
        let storage = MemoryStorage::with_state(PersistedState::new(config, None));

        let mut store = ConfigStore::new(Box::new(storage));
        store.rehydrate().unwrap();
        assert_eq!(store.modified_count(), 0);
    }

    #[test]
    fn test_share_url_carries_theme() {
        let mut store = ConfigStore::in_memory();
        store.set_value("font-size", 15.0);
        store.load_config(&ConfigValues::new(), Some("Nord"));
        let url = store.share_url(share::DEFAULT_SHARE_ORIGIN);
        let shared = share::config_from_url(&url).loaded().unwrap();
        assert_eq!(shared.theme.as_deref(), Some("Nord"));
        assert_eq!(shared.config, store.snapshot());
    }
}
