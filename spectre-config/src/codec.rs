//! Ghostty `key = value` text codec.
//!
//! Encoding writes overrides in schema declaration order so that exported files are
//! stable across runs; keys the schema does not know follow in key order. Decoding is
//! lenient: it never fails, and a line that cannot be interpreted is skipped and
//! reported rather than aborting the import.

use crate::schema::{self, ConfigOption, OptionKind};
use crate::value::{ConfigValue, ConfigValues};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// First line of every exported file.
pub const CONFIG_HEADER: &str = "# Ghostty configuration generated by Spectre";

/// One or more `<number><unit>` groups, e.g. `750ms`, `1h30m`, `2.5s`.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d+)?(?:ns|us|µs|ms|s|m|h|d|y)\s*)+$")
        .expect("duration pattern is a valid regex")
});

/// Outcome of decoding a config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedConfig {
    /// Every key that produced a value, schema keys typed per kind.
    pub values: ConfigValues,
    /// Keys absent from the schema, in first-seen order. Their values are in `values`
    /// as text.
    pub unknown_keys: Vec<String>,
    /// 1-based numbers of non-comment lines that were ignored.
    pub skipped_lines: Vec<usize>,
}

/// Serialize overrides to Ghostty config text.
///
/// Returns an empty string when there is nothing to write.
pub fn encode_config(values: &ConfigValues) -> String {
    if values.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(64 + values.len() * 32);
    out.push_str(CONFIG_HEADER);
    out.push_str("\n\n");

    let mut written = BTreeSet::new();
    for option in schema::all_options() {
        if let Some(value) = values.get(option.id) {
            write_entry(&mut out, option.id, value);
            written.insert(option.id);
        }
    }

    for (key, value) in values {
        if !written.contains(key.as_str()) {
            write_entry(&mut out, key, value);
        }
    }

    out
}

fn write_entry(out: &mut String, key: &str, value: &ConfigValue) {
    match value {
        ConfigValue::List(items) => {
            for item in items {
                write_line(out, key, item);
            }
        }
        scalar => write_line(out, key, &scalar.to_config_string()),
    }
}

fn write_line(out: &mut String, key: &str, text: &str) {
    out.push_str(key);
    out.push_str(" = ");
    // Decoding strips one pair of quotes, so a value that is already quoted gets
    // another pair.
    if is_quoted(text) {
        out.push('"');
        out.push_str(text);
        out.push('"');
    } else {
        out.push_str(text);
    }
    out.push('\n');
}

/// Parse Ghostty config text.
///
/// Repeated keys overwrite each other, except repeatable ones which accumulate into
/// a list. An empty value on a repeatable key clears what accumulated so far, the
/// same way Ghostty itself treats it.
pub fn decode_config(text: &str) -> DecodedConfig {
    let mut decoded = DecodedConfig::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, raw_value)) = line.split_once('=') else {
            log::debug!("Skipping config line {line_no} without '=': {line}");
            decoded.skipped_lines.push(line_no);
            continue;
        };
        let key = key.trim();
        let raw_value = raw_value.trim();
        if key.is_empty() {
            decoded.skipped_lines.push(line_no);
            continue;
        }

        let Some(option) = schema::find_option(key) else {
            if !decoded.unknown_keys.iter().any(|k| k == key) {
                decoded.unknown_keys.push(key.to_string());
            }
            decoded
                .values
                .insert(key.to_string(), ConfigValue::Text(unquote(raw_value).to_string()));
            continue;
        };

        if option.kind.is_repeatable() {
            let entry = decoded
                .values
                .entry(key.to_string())
                .or_insert_with(|| ConfigValue::List(Vec::new()));
            match entry {
                ConfigValue::List(items) if raw_value.is_empty() => items.clear(),
                ConfigValue::List(items) => items.push(unquote(raw_value).to_string()),
                other => *other = ConfigValue::List(vec![unquote(raw_value).to_string()]),
            }
            continue;
        }

        match parse_value(option, raw_value) {
            Some(value) => {
                decoded.values.insert(key.to_string(), value);
            }
            None => {
                log::warn!(
                    "Ignoring invalid {} value for {key} on line {line_no}: {raw_value:?}",
                    option.kind.name()
                );
                decoded.skipped_lines.push(line_no);
            }
        }
    }

    decoded
}

/// Coerce the text form of a value into `option`'s kind.
///
/// Repeatable kinds yield a one-element list (or an empty list for empty text).
/// Returns `None` when a boolean or number does not parse.
pub fn parse_value(option: &ConfigOption, raw: &str) -> Option<ConfigValue> {
    let text = unquote(raw.trim());
    match option.kind {
        OptionKind::Boolean { .. } => match text {
            "true" => Some(ConfigValue::Bool(true)),
            "false" => Some(ConfigValue::Bool(false)),
            _ => None,
        },
        OptionKind::Number { .. } => text
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(ConfigValue::Number),
        OptionKind::Palette { .. } | OptionKind::Keybind { .. } => Some(list_of(text)),
        OptionKind::String { repeatable: true, .. } => Some(list_of(text)),
        OptionKind::Duration { .. } => {
            if !text.is_empty() && !is_valid_duration(text) {
                log::warn!("{} does not look like a duration: {text:?}", option.id);
            }
            Some(ConfigValue::Text(text.to_string()))
        }
        OptionKind::String { .. } | OptionKind::Enum { .. } | OptionKind::Color { .. } => {
            Some(ConfigValue::Text(text.to_string()))
        }
    }
}

fn list_of(text: &str) -> ConfigValue {
    if text.is_empty() {
        ConfigValue::List(Vec::new())
    } else {
        ConfigValue::List(vec![text.to_string()])
    }
}

/// Whether `text` is a Ghostty duration such as `750ms` or `1h30m`.
pub fn is_valid_duration(text: &str) -> bool {
    DURATION_PATTERN.is_match(text.trim())
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

fn unquote(text: &str) -> &str {
    if is_quoted(text) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
