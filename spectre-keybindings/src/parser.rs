//! Keybind trigger and action parser.
//!
//! Parses trigger strings like `"global:ctrl+shift+t"` or `"ctrl+a>n"` into a
//! [`Trigger`] and action strings like `"goto_split:left"` into a [`ParsedAction`].
//!
//! Triggers go through a small tokenizer followed by a state machine per sequence
//! part: leading `prefix:` groups first, then `+`-separated modifiers and exactly one
//! key.

use crate::actions::{self, KeybindAction};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Error type for trigger parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("Trigger cannot be empty")]
    Empty,
    #[error("Invalid trigger format")]
    InvalidFormat,
    #[error(
        "Invalid prefix: \"{0}\". Valid prefixes: all, global, unconsumed, performable, physical"
    )]
    InvalidPrefix(String),
    #[error("Duplicate modifier: \"{0}\"")]
    DuplicateModifier(String),
    #[error("Only one key is allowed per trigger (multiple keys found)")]
    MultipleKeys,
    #[error("Invalid key: \"{0}\"")]
    InvalidKey(String),
    #[error("No key specified in trigger")]
    MissingKey,
    /// Failure inside one part of a multi-part sequence (1-based).
    #[error("Sequence part {index}: {error}")]
    InSequence {
        index: usize,
        error: Box<TriggerError>,
    },
}

/// Error type for action parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Action cannot be empty")]
    Empty,
    #[error("Unknown action: \"{0}\"")]
    Unknown(String),
    #[error("Action \"{action}\" requires a parameter ({param_desc})")]
    MissingParameter {
        action: String,
        param_desc: &'static str,
    },
}

/// Trigger prefix that changes how a binding is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prefix {
    All,
    Global,
    Unconsumed,
    Performable,
    Physical,
}

impl Prefix {
    pub const ALL: [Prefix; 5] = [
        Prefix::All,
        Prefix::Global,
        Prefix::Unconsumed,
        Prefix::Performable,
        Prefix::Physical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::All => "all",
            Prefix::Global => "global",
            Prefix::Unconsumed => "unconsumed",
            Prefix::Performable => "performable",
            Prefix::Physical => "physical",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == token)
    }
}

/// Modifier key, with aliases folded into the canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    Super,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Shift => "shift",
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Super => "super",
        }
    }

    /// Recognize a modifier or one of its aliases.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "shift" => Some(Modifier::Shift),
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "alt" | "opt" | "option" => Some(Modifier::Alt),
            "super" | "cmd" | "command" => Some(Modifier::Super),
            _ => None,
        }
    }
}

/// Named keys accepted besides single characters and physical codes.
const SPECIAL_KEYS: &[&str] = &[
    // Function keys
    "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12", "f13", "f14",
    "f15", "f16", "f17", "f18", "f19", "f20", "f21", "f22", "f23", "f24",
    // Navigation
    "up", "down", "left", "right", "home", "end", "page_up", "page_down", "pageup", "pagedown",
    // Editing
    "insert", "delete", "backspace", "tab", "enter", "return", "escape", "esc", "space",
    // Numpad
    "numpad0", "numpad1", "numpad2", "numpad3", "numpad4", "numpad5", "numpad6", "numpad7",
    "numpad8", "numpad9", "numpad_add", "numpad_subtract", "numpad_multiply", "numpad_divide",
    "numpad_decimal", "numpad_enter", "numpad_equal",
    // Media
    "audio_mute", "audio_volume_down", "audio_volume_up", "media_play_pause", "media_stop",
    "media_next", "media_prev",
    // Misc
    "print_screen", "scroll_lock", "pause", "caps_lock", "num_lock", "context_menu",
    "grave_accent", "backquote",
    // Punctuation names
    "bracket_left", "bracket_right", "backslash", "semicolon", "quote", "comma", "period",
    "slash", "minus", "equal",
];

/// Symbolic names for characters that are awkward to write in a trigger.
const KEY_ALIASES: &[&str] = &["plus", "minus", "equal", "equals", "apostrophe", "grave"];

static PHYSICAL_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(key_?[a-z]|digit_?[0-9]|numpad_?[0-9]|arrow_?(up|down|left|right))$")
        .expect("PHYSICAL_KEY is a valid static regex pattern")
});

/// Whether `key` names a key Ghostty can bind.
pub fn is_valid_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    if SPECIAL_KEYS.contains(&lower.as_str()) || KEY_ALIASES.contains(&lower.as_str()) {
        return true;
    }
    if PHYSICAL_KEY.is_match(key) {
        return true;
    }
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_control())
}

/// The key of a trigger part, lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_physical_code(&self) -> bool {
        PHYSICAL_KEY.is_match(&self.0)
    }
}

/// One `prefix:...modifier+...+key` group of a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerPart {
    pub prefixes: Vec<Prefix>,
    /// In the order written.
    pub modifiers: Vec<Modifier>,
    pub key: Key,
}

impl TriggerPart {
    /// Same part with prefixes and modifiers sorted, for order-insensitive comparison.
    pub fn canonical(&self) -> Self {
        let mut prefixes = self.prefixes.clone();
        prefixes.sort_unstable();
        prefixes.dedup();
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();
        Self {
            prefixes,
            modifiers,
            key: self.key.clone(),
        }
    }
}

impl fmt::Display for TriggerPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prefix in &self.prefixes {
            write!(f, "{}:", prefix.as_str())?;
        }
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.as_str())?;
        }
        f.write_str(self.key.as_str())
    }
}

/// A parsed trigger: one part, or several joined by `>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trigger {
    pub parts: Vec<TriggerPart>,
}

impl Trigger {
    pub fn is_sequence(&self) -> bool {
        self.parts.len() > 1
    }

    pub fn canonical(&self) -> Self {
        Self {
            parts: self.parts.iter().map(TriggerPart::canonical).collect(),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(">")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Run of characters other than the separators below, trimmed.
    Word(&'a str),
    Plus,
    Colon,
    Then,
}

impl Token<'_> {
    fn literal(&self) -> &str {
        match self {
            Token::Word(w) => w,
            Token::Plus => "+",
            Token::Colon => ":",
            Token::Then => ">",
        }
    }
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, c) in input.char_indices() {
        let separator = match c {
            '+' => Token::Plus,
            ':' => Token::Colon,
            '>' => Token::Then,
            _ => continue,
        };
        let word = input[start..i].trim();
        if !word.is_empty() {
            tokens.push(Token::Word(word));
        }
        tokens.push(separator);
        start = i + c.len_utf8();
    }

    let word = input[start..].trim();
    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }
    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartState {
    /// Still in the first `+` group, where `name:` is a prefix.
    Prefixes,
    /// Past the first `+`; everything is a modifier or the key.
    Items,
}

struct PartBuilder {
    prefixes: Vec<Prefix>,
    modifiers: Vec<Modifier>,
    seen: HashSet<Modifier>,
    key: Option<Key>,
}

impl PartBuilder {
    fn new() -> Self {
        Self {
            prefixes: Vec::new(),
            modifiers: Vec::new(),
            seen: HashSet::new(),
            key: None,
        }
    }

    fn prefix(&mut self, text: &str) -> Result<(), TriggerError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        let prefix =
            Prefix::from_token(text).ok_or_else(|| TriggerError::InvalidPrefix(text.to_string()))?;
        self.prefixes.push(prefix);
        Ok(())
    }

    fn item(&mut self, text: &str) -> Result<(), TriggerError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        if let Some(modifier) = Modifier::from_token(text) {
            if !self.seen.insert(modifier) {
                return Err(TriggerError::DuplicateModifier(text.to_string()));
            }
            self.modifiers.push(modifier);
            return Ok(());
        }
        if self.key.is_some() {
            return Err(TriggerError::MultipleKeys);
        }
        if !is_valid_key(text) {
            return Err(TriggerError::InvalidKey(text.to_string()));
        }
        self.key = Some(Key(text.to_string()));
        Ok(())
    }

    fn finish(self) -> Result<TriggerPart, TriggerError> {
        let key = self.key.ok_or(TriggerError::MissingKey)?;
        Ok(TriggerPart {
            prefixes: self.prefixes,
            modifiers: self.modifiers,
            key,
        })
    }
}

/// Run the part state machine. `>` tokens are taken literally.
fn parse_part_tokens(tokens: &[Token<'_>]) -> Result<TriggerPart, TriggerError> {
    if !tokens
        .iter()
        .any(|t| matches!(t, Token::Word(_) | Token::Colon))
    {
        return Err(TriggerError::InvalidFormat);
    }

    let mut builder = PartBuilder::new();
    let mut state = PartState::Prefixes;
    let mut current = String::new();

    for token in tokens {
        match (state, token) {
            (PartState::Prefixes, Token::Colon) => {
                builder.prefix(&current)?;
                current.clear();
            }
            (_, Token::Plus) => {
                builder.item(&current)?;
                current.clear();
                state = PartState::Items;
            }
            (_, other) => current.push_str(other.literal()),
        }
    }
    builder.item(&current)?;
    builder.finish()
}

fn check_not_blank(input: &str) -> Result<(), TriggerError> {
    if input.trim().is_empty() {
        Err(TriggerError::Empty)
    } else {
        Ok(())
    }
}

/// Parse a single trigger part such as `"all:ctrl+shift+t"`.
///
/// A `>` is not special here; use [`parse_trigger`] for sequences.
pub fn parse_trigger_part(input: &str) -> Result<TriggerPart, TriggerError> {
    check_not_blank(input)?;
    let lower = input.to_lowercase();
    parse_part_tokens(&tokenize(&lower))
}

/// Parse a full trigger, including `>`-separated sequences.
///
/// Parts are checked in order and the first failure is returned. In a sequence of
/// more than one part the error is wrapped in [`TriggerError::InSequence`].
pub fn parse_trigger(input: &str) -> Result<Trigger, TriggerError> {
    check_not_blank(input)?;
    let lower = input.to_lowercase();
    let tokens = tokenize(&lower);

    let groups: Vec<&[Token<'_>]> = tokens
        .split(|t| *t == Token::Then)
        .filter(|group| !group.is_empty())
        .collect();
    if groups.is_empty() {
        return Err(TriggerError::InvalidFormat);
    }

    let sequence = groups.len() > 1;
    let mut parts = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        match parse_part_tokens(group) {
            Ok(part) => parts.push(part),
            Err(error) if sequence => {
                return Err(TriggerError::InSequence {
                    index: i + 1,
                    error: Box::new(error),
                });
            }
            Err(error) => return Err(error),
        }
    }
    Ok(Trigger { parts })
}

/// An action string resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAction {
    pub definition: &'static KeybindAction,
    pub param: Option<String>,
}

impl ParsedAction {
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    /// Warning for a parameter outside the action's known values.
    ///
    /// Known values are only suggestions; Ghostty may accept others.
    pub fn param_warning(&self) -> Option<String> {
        let options = self.definition.param_options;
        let param = self.param.as_deref()?.trim();
        if options.is_empty() || options.contains(&param) {
            return None;
        }
        Some(format!(
            "Unrecognized parameter \"{param}\" for action \"{}\". Known values: {}",
            self.definition.name,
            options.join(", ")
        ))
    }
}

impl fmt::Display for ParsedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}:{param}", self.definition.name),
            None => f.write_str(self.definition.name),
        }
    }
}

/// Parse `name` or `name:param`, splitting on the first `:`.
pub fn parse_action(input: &str) -> Result<ParsedAction, ActionError> {
    if input.trim().is_empty() {
        return Err(ActionError::Empty);
    }

    let (name, param) = match input.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (input, None),
    };
    let name = name.trim().to_lowercase();

    let definition = actions::find_action(&name).ok_or_else(|| ActionError::Unknown(name.clone()))?;
    let param = param.filter(|p| !p.is_empty()).map(str::to_string);

    if definition.has_param && param.is_none() {
        return Err(ActionError::MissingParameter {
            action: name,
            param_desc: definition.param_desc.unwrap_or("value"),
        });
    }

    Ok(ParsedAction { definition, param })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(input: &str) -> TriggerPart {
        parse_trigger_part(input).unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("global: ctrl + a>b"),
            vec![
                Token::Word("global"),
                Token::Colon,
                Token::Word("ctrl"),
                Token::Plus,
                Token::Word("a"),
                Token::Then,
                Token::Word("b"),
            ]
        );
    }

    #[test]
    fn test_parse_simple() {
        let p = part("Ctrl+Shift+T");
        assert!(p.prefixes.is_empty());
        assert_eq!(p.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(p.key.as_str(), "t");
    }

    #[test]
    fn test_modifier_aliases() {
        let p = part("control+option+cmd+k");
        assert_eq!(p.modifiers, vec![Modifier::Ctrl, Modifier::Alt, Modifier::Super]);
        assert_eq!(p.to_string(), "ctrl+alt+super+k");
        assert_eq!(part("opt+x").modifiers, vec![Modifier::Alt]);
    }

    #[test]
    fn test_prefixes() {
        let p = part("global:unconsumed:ctrl+grave");
        assert_eq!(p.prefixes, vec![Prefix::Global, Prefix::Unconsumed]);
        assert_eq!(p.key.as_str(), "grave");
        assert_eq!(p.to_string(), "global:unconsumed:ctrl+grave");
    }

    #[test]
    fn test_invalid_prefix() {
        let err = parse_trigger_part("bogus:ctrl+a").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid prefix: \"bogus\". Valid prefixes: all, global, unconsumed, performable, physical"
        );
    }

    #[test]
    fn test_prefix_after_modifier_is_part_of_key() {
        assert_eq!(
            parse_trigger_part("ctrl+global:a").unwrap_err(),
            TriggerError::InvalidKey("global:a".into())
        );
    }

    #[test]
    fn test_duplicate_modifier() {
        assert_eq!(
            parse_trigger_part("ctrl+ctrl+c").unwrap_err().to_string(),
            "Duplicate modifier: \"ctrl\""
        );
        assert_eq!(
            parse_trigger_part("ctrl+control+c").unwrap_err(),
            TriggerError::DuplicateModifier("control".into())
        );
    }

    #[test]
    fn test_key_count_errors() {
        assert_eq!(parse_trigger_part("a+b").unwrap_err(), TriggerError::MultipleKeys);
        assert_eq!(parse_trigger_part("ctrl+shift").unwrap_err(), TriggerError::MissingKey);
        assert_eq!(parse_trigger_part("").unwrap_err(), TriggerError::Empty);
        assert_eq!(parse_trigger_part("+ +").unwrap_err(), TriggerError::InvalidFormat);
    }

    #[test]
    fn test_key_validity() {
        for key in [
            "a", "1", "/", "f12", "page_up", "KeyA", "key_z", "digit_0", "Numpad5", "arrow_up",
            "plus", "equals", "numpad_enter", "é",
        ] {
            assert!(is_valid_key(key), "{key} should be valid");
        }
        for key in ["banana", "f25", "keyab", "ctrlx", ""] {
            assert!(!is_valid_key(key), "{key} should be invalid");
        }
        assert_eq!(
            parse_trigger_part("ctrl+banana").unwrap_err().to_string(),
            "Invalid key: \"banana\""
        );
        assert!(part("physical:ctrl+KeyA").key.is_physical_code());
    }

    #[test]
    fn test_colon_as_key() {
        assert_eq!(part("ctrl+:").key.as_str(), ":");
    }

    #[test]
    fn test_sequence() {
        let trigger = parse_trigger("ctrl+a>n").unwrap();
        assert!(trigger.is_sequence());
        assert_eq!(trigger.parts.len(), 2);
        assert_eq!(trigger.parts[1].key.as_str(), "n");
        assert_eq!(trigger.to_string(), "ctrl+a>n");
    }

    #[test]
    fn test_sequence_error_is_indexed() {
        let err = parse_trigger("ctrl+a>ctrl+ctrl+b").unwrap_err();
        assert_eq!(err.to_string(), "Sequence part 2: Duplicate modifier: \"ctrl\"");

        // A single part is reported without the wrapper.
        assert_eq!(
            parse_trigger("ctrl+ctrl+b").unwrap_err(),
            TriggerError::DuplicateModifier("ctrl".into())
        );
        assert_eq!(parse_trigger(">>").unwrap_err(), TriggerError::InvalidFormat);
        assert_eq!(parse_trigger("   ").unwrap_err(), TriggerError::Empty);
    }

    #[test]
    fn test_canonical_ignores_modifier_order() {
        let a = parse_trigger("shift+ctrl+t").unwrap();
        let b = parse_trigger("ctrl+shift+t").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_parse_action() {
        let action = parse_action("copy_to_clipboard").unwrap();
        assert_eq!(action.name(), "copy_to_clipboard");
        assert_eq!(action.param, None);

        let action = parse_action("text:hello:world").unwrap();
        assert_eq!(action.param.as_deref(), Some("hello:world"));
        assert_eq!(action.to_string(), "text:hello:world");

        assert_eq!(parse_action("New_Tab").unwrap().name(), "new_tab");
    }

    #[test]
    fn test_action_errors() {
        assert_eq!(parse_action(" ").unwrap_err().to_string(), "Action cannot be empty");
        assert_eq!(
            parse_action("nonexistent_action").unwrap_err().to_string(),
            "Unknown action: \"nonexistent_action\""
        );
        assert_eq!(
            parse_action("increase_font_size").unwrap_err().to_string(),
            "Action \"increase_font_size\" requires a parameter (Amount in points (e.g., 1 or 1.5))"
        );
        assert!(matches!(
            parse_action("goto_tab:").unwrap_err(),
            ActionError::MissingParameter { .. }
        ));
        assert!(parse_action("new_split:auto").is_ok());
    }

    #[test]
    fn test_unknown_param_is_advisory() {
        let action = parse_action("inspector:maybe").unwrap();
        assert_eq!(action.param.as_deref(), Some("maybe"));
        assert_eq!(
            action.param_warning().as_deref(),
            Some("Unrecognized parameter \"maybe\" for action \"inspector\". Known values: toggle, show, hide")
        );
        assert_eq!(parse_action("inspector:toggle").unwrap().param_warning(), None);
        assert_eq!(parse_action("goto_tab:3").unwrap().param_warning(), None);
    }
}
