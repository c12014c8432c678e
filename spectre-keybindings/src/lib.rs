//! Keybind support for the Spectre config editor.
//!
//! This crate understands Ghostty's `trigger=action` keybind entries:
//!
//! - The catalog of bindable actions and their parameters
//! - A parser for triggers (prefixes, modifiers, keys, `>` sequences) and actions
//! - User-facing validation of single entries and whole configs
//! - A keybind set that resolves triggers to actions and reports conflicts

pub mod actions;
pub mod parser;
pub mod validate;

pub use actions::{
    ActionCategory, KEYBIND_EXAMPLES, KeybindAction, KeybindExample, action_suggestions,
    actions_by_category, all_actions, find_action,
};
pub use parser::{
    ActionError, Key, Modifier, ParsedAction, Prefix, Trigger, TriggerError, TriggerPart,
    parse_action, parse_trigger, parse_trigger_part,
};
pub use validate::{
    ActionValidation, KeybindIssue, SequenceValidation, TriggerValidation, ValidationResult,
    validate_action, validate_config_keybinds, validate_keybind, validate_trigger,
    validate_trigger_sequence,
};

use std::collections::HashMap;
use thiserror::Error;

/// Why a `trigger=action` entry could not be added to a [`KeybindSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindError {
    #[error("missing '=' between trigger and action")]
    MissingSeparator,
    #[error(transparent)]
    Trigger(#[from] TriggerError),
    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Two entries that bind the same trigger. The later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindConflict {
    pub trigger: String,
    pub replaced: String,
    pub action: String,
}

/// Keybind entries resolved to actions, keyed by canonical trigger.
#[derive(Debug, Default)]
pub struct KeybindSet {
    bindings: HashMap<Trigger, ParsedAction>,
    conflicts: Vec<KeybindConflict>,
}

impl KeybindSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `trigger=action` entries.
    ///
    /// Invalid entries are logged and skipped.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut set = Self::new();

        log::debug!("Building keybind set from {} entries", entries.len());
        for entry in entries {
            let entry = entry.as_ref();
            if let Err(e) = set.insert(entry) {
                log::warn!("Invalid keybind '{}': {}", entry, e);
            }
        }

        log::debug!("Keybind set holds {} bindings", set.bindings.len());
        set
    }

    /// Parse and add one entry, replacing any binding of the same trigger.
    pub fn insert(&mut self, entry: &str) -> Result<(), KeybindError> {
        let (trigger, action) = entry
            .split_once('=')
            .ok_or(KeybindError::MissingSeparator)?;
        let trigger = parse_trigger(trigger)?;
        let action = parse_action(action)?;

        for warning in action
            .definition
            .deprecation_warning()
            .into_iter()
            .chain(action.param_warning())
        {
            log::warn!("{}", warning);
        }

        let key = trigger.canonical();
        if let Some(previous) = self.bindings.get(&key) {
            self.conflicts.push(KeybindConflict {
                trigger: trigger.to_string(),
                replaced: previous.to_string(),
                action: action.to_string(),
            });
        }
        self.bindings.insert(key, action);
        Ok(())
    }

    /// Action bound to `trigger`, ignoring modifier and prefix order.
    pub fn lookup(&self, trigger: &str) -> Option<&ParsedAction> {
        let trigger = parse_trigger(trigger).ok()?;
        self.bindings.get(&trigger.canonical())
    }

    pub fn conflicts(&self) -> &[KeybindConflict] {
        &self.conflicts
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = KeybindSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_from_entries() {
        let set = KeybindSet::from_entries(&["ctrl+shift+t=new_tab", "ctrl+a>n=next_tab"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.lookup("shift+ctrl+t").map(|a| a.name()), Some("new_tab"));
        assert_eq!(set.lookup("CTRL+A>N").map(|a| a.name()), Some("next_tab"));
        assert!(set.lookup("ctrl+a").is_none());
    }

    #[test]
    fn test_invalid_entries_skipped() {
        let set = KeybindSet::from_entries(&["invalidkey", "ctrl+a=bogus", "ctrl+b=quit"]);
        assert_eq!(set.len(), 1);
        assert!(set.conflicts().is_empty());
    }

    #[test]
    fn test_insert_errors() {
        let mut set = KeybindSet::new();
        assert_eq!(set.insert("ctrl+a"), Err(KeybindError::MissingSeparator));
        assert_eq!(
            set.insert("ctrl+a=bogus"),
            Err(KeybindError::Action(ActionError::Unknown("bogus".into())))
        );
        assert_eq!(
            set.insert("=quit").unwrap_err().to_string(),
            "Trigger cannot be empty"
        );
        assert_eq!(set.insert("ctrl+i=inspector:peek"), Ok(()));
        assert_eq!(set.lookup("ctrl+i").map(|a| a.to_string()).as_deref(), Some("inspector:peek"));
    }

    #[test]
    fn test_conflicts_last_wins() {
        let set = KeybindSet::from_entries(&["ctrl+shift+c=copy_to_clipboard", "shift+ctrl+c=quit"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.lookup("ctrl+shift+c").map(|a| a.name()), Some("quit"));
        assert_eq!(
            set.conflicts(),
            &[KeybindConflict {
                trigger: "shift+ctrl+c".into(),
                replaced: "copy_to_clipboard".into(),
                action: "quit".into(),
            }]
        );
    }
}
