//! Validation of keybind entries as shown to the user.
//!
//! These wrap the parser and flatten its results into displayable messages, so an
//! editor can show an inline error without matching on error types.

use crate::actions;
use crate::parser::{self, ParsedAction, Trigger, TriggerPart};
use spectre_config::{ConfigValues, OptionKind, all_options};

/// Outcome of checking a single trigger part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerValidation {
    pub valid: bool,
    pub error: Option<String>,
    pub part: Option<TriggerPart>,
}

/// Outcome of checking a trigger that may be a `>` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceValidation {
    pub valid: bool,
    pub error: Option<String>,
    pub trigger: Option<Trigger>,
}

/// Outcome of checking an action string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionValidation {
    pub valid: bool,
    pub error: Option<String>,
    pub action: Option<ParsedAction>,
}

/// Outcome of checking a full `trigger=action` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }
}

/// A keybind entry from a config that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindIssue {
    /// Option the entry came from, e.g. `keybind`.
    pub option: String,
    pub entry: String,
    pub result: ValidationResult,
}

pub fn validate_trigger(input: &str) -> TriggerValidation {
    match parser::parse_trigger_part(input) {
        Ok(part) => TriggerValidation {
            valid: true,
            error: None,
            part: Some(part),
        },
        Err(e) => TriggerValidation {
            valid: false,
            error: Some(e.to_string()),
            part: None,
        },
    }
}

pub fn validate_trigger_sequence(input: &str) -> SequenceValidation {
    match parser::parse_trigger(input) {
        Ok(trigger) => SequenceValidation {
            valid: true,
            error: None,
            trigger: Some(trigger),
        },
        Err(e) => SequenceValidation {
            valid: false,
            error: Some(e.to_string()),
            trigger: None,
        },
    }
}

pub fn validate_action(input: &str) -> ActionValidation {
    match parser::parse_action(input) {
        Ok(action) => ActionValidation {
            valid: true,
            error: None,
            action: Some(action),
        },
        Err(e) => ActionValidation {
            valid: false,
            error: Some(e.to_string()),
            action: None,
        },
    }
}

/// Validate a `trigger=action` entry.
///
/// The entry is split on the first `=`. Trigger and action are both checked and
/// their errors collected. Deprecated actions and parameters outside an action's
/// known values produce warnings, even when the trigger is invalid.
pub fn validate_keybind(entry: &str) -> ValidationResult {
    if entry.trim().is_empty() {
        return ValidationResult::failed("Keybind cannot be empty");
    }
    let Some((trigger, action)) = entry.split_once('=') else {
        return ValidationResult::failed(
            "Invalid format. Expected: trigger=action (e.g., ctrl+c=copy_to_clipboard)",
        );
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = parser::parse_trigger(trigger) {
        errors.push(e.to_string());
    }

    match parser::parse_action(action) {
        Ok(parsed) => {
            warnings.extend(parsed.definition.deprecation_warning());
            warnings.extend(parsed.param_warning());
        }
        Err(e) => {
            errors.push(e.to_string());
            let name = action.split(':').next().unwrap_or_default().trim();
            if let Some(definition) = actions::find_action(&name.to_lowercase()) {
                warnings.extend(definition.deprecation_warning());
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Check every keybind-kind option in `values`, returning the failing entries.
pub fn validate_config_keybinds(values: &ConfigValues) -> Vec<KeybindIssue> {
    let mut issues = Vec::new();

    for option in all_options() {
        if !matches!(option.kind, OptionKind::Keybind { .. }) {
            continue;
        }
        let Some(entries) = values.get(option.id).and_then(|v| v.as_list()) else {
            continue;
        };
        for entry in entries {
            let result = validate_keybind(entry);
            if !result.valid {
                log::debug!("Invalid keybind in {}: {entry}", option.id);
                issues.push(KeybindIssue {
                    option: option.id.to_string(),
                    entry: entry.clone(),
                    result,
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectre_config::ConfigValue;

    #[test]
    fn test_validate_trigger() {
        let ok = validate_trigger("ctrl+shift+t");
        assert!(ok.valid);
        assert!(ok.error.is_none());
        assert_eq!(ok.part.map(|p| p.to_string()).as_deref(), Some("ctrl+shift+t"));

        let bad = validate_trigger("");
        assert!(!bad.valid);
        assert_eq!(bad.error.as_deref(), Some("Trigger cannot be empty"));
    }

    #[test]
    fn test_validate_trigger_single_part_only() {
        // `>` has no meaning for a single part.
        assert!(!validate_trigger("ctrl+a>n").valid);
        assert!(validate_trigger_sequence("ctrl+a>n").valid);
    }

    #[test]
    fn test_validate_action() {
        assert!(validate_action("goto_split:left").valid);
        let bad = validate_action("bogus");
        assert_eq!(bad.error.as_deref(), Some("Unknown action: \"bogus\""));
    }

    #[test]
    fn test_validate_keybind() {
        let ok = validate_keybind("ctrl+c=copy_to_clipboard");
        assert!(ok.valid);
        assert!(ok.errors.is_empty());
        assert!(ok.warnings.is_empty());

        assert_eq!(validate_keybind("  ").errors, vec!["Keybind cannot be empty"]);
        assert_eq!(
            validate_keybind("ctrl+c").errors,
            vec!["Invalid format. Expected: trigger=action (e.g., ctrl+c=copy_to_clipboard)"]
        );
    }

    #[test]
    fn test_trigger_and_action_errors_accumulate() {
        let result = validate_keybind("ctrl+ctrl+c=nonexistent_action");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Duplicate modifier: \"ctrl\"",
                "Unknown action: \"nonexistent_action\"",
            ]
        );
    }

    #[test]
    fn test_deprecation_warning_survives_bad_trigger() {
        let result = validate_keybind("ctrl+ctrl+q=close_all_windows");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Duplicate modifier: \"ctrl\""]);
        assert_eq!(
            result.warnings,
            vec!["close_all_windows is deprecated. Use all:close_window instead."]
        );
    }

    #[test]
    fn test_unknown_param_warns_but_passes() {
        let result = validate_keybind("ctrl+i=inspector:maybe");
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("Unrecognized parameter \"maybe\""));
    }

    #[test]
    fn test_deprecated_action_warns() {
        let result = validate_keybind("ctrl+shift+q=close_all_windows");
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec!["close_all_windows is deprecated. Use all:close_window instead."]
        );
    }

    #[test]
    fn test_action_param_may_contain_equals() {
        assert!(validate_keybind("ctrl+e=text:a=b").valid);
    }

    #[test]
    fn test_validate_config_keybinds() {
        let mut values = ConfigValues::new();
        values.insert(
            "keybind".into(),
            ConfigValue::from(vec!["ctrl+c=copy_to_clipboard", "ctrl+x=nope", "bad"]),
        );
        values.insert("font-size".into(), ConfigValue::Number(14.0));

        let issues = validate_config_keybinds(&values);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].option, "keybind");
        assert_eq!(issues[0].entry, "ctrl+x=nope");
        assert_eq!(issues[1].entry, "bad");
    }
}
