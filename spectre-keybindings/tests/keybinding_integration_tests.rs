//! Integration tests for spectre-keybindings.
//!
//! These exercise the parse → validate → keybind set pipeline together with the
//! config store from spectre-config.

use spectre_config::{ConfigStore, ConfigValue};
use spectre_keybindings::{
    KEYBIND_EXAMPLES, KeybindSet, Modifier, Prefix, TriggerError, action_suggestions,
    all_actions, parse_trigger, validate_config_keybinds, validate_keybind,
    validate_trigger_sequence,
};

// ---------------------------------------------------------------------------
// Combined validation
// ---------------------------------------------------------------------------

#[test]
fn valid_keybinds_pass() {
    for entry in [
        "ctrl+c=copy_to_clipboard",
        "ctrl+shift+t=new_tab",
        "global:ctrl+grave=toggle_quick_terminal",
        "super+shift+left=goto_split:left",
        "ctrl+a>ctrl+n=new_window",
        "physical:ctrl+KeyQ=quit",
        "ctrl+e=text:\\x1b[A",
    ] {
        let result = validate_keybind(entry);
        assert!(result.valid, "{entry}: {:?}", result.errors);
        assert!(result.errors.is_empty());
    }
}

#[test]
fn invalid_keybinds_fail_with_message() {
    let cases = [
        ("ctrl+ctrl+c=copy_to_clipboard", "Duplicate modifier: \"ctrl\""),
        ("ctrl+c=nonexistent_action", "Unknown action: \"nonexistent_action\""),
        (
            "ctrl+c=increase_font_size",
            "Action \"increase_font_size\" requires a parameter (Amount in points (e.g., 1 or 1.5))",
        ),
        ("a+b=quit", "Only one key is allowed per trigger (multiple keys found)"),
        ("ctrl+shift=quit", "No key specified in trigger"),
        ("=quit", "Trigger cannot be empty"),
    ];
    for (entry, message) in cases {
        let result = validate_keybind(entry);
        assert!(!result.valid, "{entry} should be invalid");
        assert_eq!(result.errors, vec![message.to_string()], "{entry}");
    }
}

#[test]
fn deprecated_action_is_valid_with_warning() {
    let result = validate_keybind("ctrl+shift+q=close_all_windows");
    assert!(result.valid);
    assert!(!result.warnings.is_empty());
    assert!(result.warnings[0].contains("all:close_window"));
}

#[test]
fn sequence_errors_name_the_part() {
    let result = validate_keybind("ctrl+a>ctrl+bogus=new_tab");
    assert_eq!(result.errors, vec!["Sequence part 2: Invalid key: \"bogus\""]);

    let sequence = validate_trigger_sequence("ctrl+a>b>c");
    assert!(sequence.valid);
    assert_eq!(sequence.trigger.map(|t| t.parts.len()), Some(3));
}

// ---------------------------------------------------------------------------
// Parsed structure
// ---------------------------------------------------------------------------

#[test]
fn trigger_parts_are_normalized() {
    let trigger = parse_trigger("Global:Performable:Cmd+Opt+ArrowUp").unwrap();
    let part = &trigger.parts[0];
    assert_eq!(part.prefixes, vec![Prefix::Global, Prefix::Performable]);
    assert_eq!(part.modifiers, vec![Modifier::Super, Modifier::Alt]);
    assert_eq!(part.key.as_str(), "arrowup");
    assert!(part.key.is_physical_code());
    assert_eq!(trigger.to_string(), "global:performable:super+alt+arrowup");
}

#[test]
fn sequence_error_keeps_inner_error() {
    let err = parse_trigger("ctrl+a>bad:x").unwrap_err();
    match err {
        TriggerError::InSequence { index, error } => {
            assert_eq!(index, 2);
            assert_eq!(*error, TriggerError::InvalidPrefix("bad".into()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn bundled_examples_validate() {
    for example in KEYBIND_EXAMPLES {
        let result = validate_keybind(&example.entry());
        assert!(result.valid, "{}: {:?}", example.entry(), result.errors);
    }
}

#[test]
fn every_parameterless_action_validates() {
    for action in all_actions().iter().filter(|a| !a.has_param) {
        let entry = format!("ctrl+shift+f1={}", action.name);
        assert!(validate_keybind(&entry).valid, "{entry}");
    }
}

#[test]
fn closed_parameter_sets_accept_each_value() {
    for action in all_actions() {
        for param in action.param_options {
            let entry = format!("ctrl+k={}:{param}", action.name);
            assert!(validate_keybind(&entry).valid, "{entry}");
        }
    }
}

#[test]
fn suggestions_match_substrings() {
    let names: Vec<&str> = action_suggestions("split").iter().map(|a| a.name).collect();
    assert!(names.contains(&"new_split"));
    assert!(names.contains(&"goto_split"));
    assert!(names.iter().all(|n| n.contains("split")));
}

// ---------------------------------------------------------------------------
// Store integration
// ---------------------------------------------------------------------------

#[test]
fn store_keybinds_are_checked() {
    let mut store = ConfigStore::in_memory();
    store.import_config(
        "keybind = ctrl+c=copy_to_clipboard\nkeybind = ctrl+q=launch_rockets\nfont-size = 14\n",
    );

    let issues = validate_config_keybinds(&store.snapshot());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].entry, "ctrl+q=launch_rockets");
    assert_eq!(
        issues[0].result.errors,
        vec!["Unknown action: \"launch_rockets\""]
    );
}

#[test]
fn keybind_set_from_store_values() {
    let mut store = ConfigStore::in_memory();
    store.set_value(
        "keybind",
        vec!["ctrl+shift+t=new_tab", "ctrl+shift+t=new_window", "oops"],
    );

    let entries = store
        .get_value("keybind")
        .and_then(|v| v.as_list().map(<[String]>::to_vec))
        .unwrap_or_default();
    let set = KeybindSet::from_entries(&entries);

    assert_eq!(set.len(), 1);
    assert_eq!(set.conflicts().len(), 1);
    assert_eq!(
        set.lookup("shift+ctrl+t").map(|a| a.to_string()),
        Some("new_window".to_string())
    );
    assert_eq!(
        store.get_value("keybind").map(|v| matches!(v, ConfigValue::List(_))),
        Some(true)
    );
}
