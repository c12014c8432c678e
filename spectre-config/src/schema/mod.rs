//! Static option schema.
//!
//! Every Ghostty configuration key the editor knows about is declared once in
//! [`catalog`], together with its kind, default, and constraints. The schema is the
//! single source of truth for defaults and kinds: the store, the text codec, and the
//! keybind validator all consult it instead of assuming an option's shape.
//!
//! # Sub-modules
//!
//! - [`catalog`]: the declaration-ordered option table
//! - [`category`]: the 13 option categories and their display metadata

pub mod catalog;
pub mod category;

pub use category::{Category, categories};

use crate::value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Operating systems an option can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Macos,
    Linux,
    Windows,
}

impl Platform {
    /// Platform of the current compile target, if it is one Ghostty distinguishes.
    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(Platform::Macos)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else {
            None
        }
    }
}

/// One `{value, label}` choice of an enum option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Kind-specific payload of an option, including its typed default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionKind {
    String {
        default: &'static str,
        placeholder: Option<&'static str>,
        /// Key may appear on several lines; values accumulate into a list.
        repeatable: bool,
    },
    Number {
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Boolean {
        default: bool,
    },
    Enum {
        default: &'static str,
        options: &'static [EnumChoice],
    },
    Color {
        default: &'static str,
    },
    /// Entries are `index=color` strings.
    Palette {
        default: &'static [&'static str],
    },
    /// Entries are `trigger=action` strings.
    Keybind {
        default: &'static [&'static str],
    },
    Duration {
        default: &'static str,
        placeholder: Option<&'static str>,
    },
}

impl OptionKind {
    /// Short lowercase kind name (`"number"`, `"keybind"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::String { .. } => "string",
            OptionKind::Number { .. } => "number",
            OptionKind::Boolean { .. } => "boolean",
            OptionKind::Enum { .. } => "enum",
            OptionKind::Color { .. } => "color",
            OptionKind::Palette { .. } => "palette",
            OptionKind::Keybind { .. } => "keybind",
            OptionKind::Duration { .. } => "duration",
        }
    }

    /// Whether the key may be written on multiple lines.
    pub fn is_repeatable(&self) -> bool {
        match self {
            OptionKind::Palette { .. } | OptionKind::Keybind { .. } => true,
            OptionKind::String { repeatable, .. } => *repeatable,
            OptionKind::Number { .. }
            | OptionKind::Boolean { .. }
            | OptionKind::Enum { .. }
            | OptionKind::Color { .. }
            | OptionKind::Duration { .. } => false,
        }
    }
}

/// A single named, typed configuration setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigOption {
    /// Serialization key, unique across the catalog.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub kind: OptionKind,
    /// Empty means available everywhere.
    pub platforms: &'static [Platform],
    pub since_version: Option<&'static str>,
    pub deprecated: bool,
    pub note: Option<&'static str>,
    /// Managed outside the regular settings list (e.g. by a dedicated picker).
    pub hidden: bool,
}

impl ConfigOption {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        kind: OptionKind,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            kind,
            platforms: &[],
            since_version: None,
            deprecated: false,
            note: None,
            hidden: false,
        }
    }

    pub(crate) const fn string(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        default: &'static str,
    ) -> Self {
        Self::new(
            id,
            name,
            description,
            category,
            OptionKind::String {
                default,
                placeholder: None,
                repeatable: false,
            },
        )
    }

    pub(crate) const fn number(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        default: f64,
    ) -> Self {
        Self::new(
            id,
            name,
            description,
            category,
            OptionKind::Number {
                default,
                min: None,
                max: None,
                step: None,
            },
        )
    }

    pub(crate) const fn boolean(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        default: bool,
    ) -> Self {
        Self::new(id, name, description, category, OptionKind::Boolean { default })
    }

    pub(crate) const fn enumeration(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        default: &'static str,
        options: &'static [EnumChoice],
    ) -> Self {
        Self::new(
            id,
            name,
            description,
            category,
            OptionKind::Enum { default, options },
        )
    }

    pub(crate) const fn color(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        default: &'static str,
    ) -> Self {
        Self::new(id, name, description, category, OptionKind::Color { default })
    }

    pub(crate) const fn palette(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
    ) -> Self {
        Self::new(
            id,
            name,
            description,
            category,
            OptionKind::Palette { default: &[] },
        )
    }

    pub(crate) const fn keybind(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
    ) -> Self {
        Self::new(
            id,
            name,
            description,
            category,
            OptionKind::Keybind { default: &[] },
        )
    }

    pub(crate) const fn duration(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        default: &'static str,
    ) -> Self {
        Self::new(
            id,
            name,
            description,
            category,
            OptionKind::Duration {
                default,
                placeholder: None,
            },
        )
    }

    /// Set `min`/`max`/`step` on a number option. No-op for other kinds.
    pub(crate) const fn range(mut self, min: f64, max: f64, step: f64) -> Self {
        if let OptionKind::Number { default, .. } = self.kind {
            self.kind = OptionKind::Number {
                default,
                min: Some(min),
                max: Some(max),
                step: Some(step),
            };
        }
        self
    }

    /// Set only a lower bound on a number option.
    pub(crate) const fn at_least(mut self, min: f64) -> Self {
        if let OptionKind::Number {
            default, max, step, ..
        } = self.kind
        {
            self.kind = OptionKind::Number {
                default,
                min: Some(min),
                max,
                step,
            };
        }
        self
    }

    pub(crate) const fn placeholder(mut self, text: &'static str) -> Self {
        match self.kind {
            OptionKind::String {
                default,
                repeatable,
                ..
            } => {
                self.kind = OptionKind::String {
                    default,
                    placeholder: Some(text),
                    repeatable,
                };
            }
            OptionKind::Duration { default, .. } => {
                self.kind = OptionKind::Duration {
                    default,
                    placeholder: Some(text),
                };
            }
            _ => {}
        }
        self
    }

    pub(crate) const fn repeatable(mut self) -> Self {
        if let OptionKind::String {
            default,
            placeholder,
            ..
        } = self.kind
        {
            self.kind = OptionKind::String {
                default,
                placeholder,
                repeatable: true,
            };
        }
        self
    }

    pub(crate) const fn platforms(mut self, platforms: &'static [Platform]) -> Self {
        self.platforms = platforms;
        self
    }

    pub(crate) const fn since(mut self, version: &'static str) -> Self {
        self.since_version = Some(version);
        self
    }

    pub(crate) const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub(crate) const fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    pub(crate) const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// The schema default as a runtime value.
    pub fn default_value(&self) -> ConfigValue {
        match self.kind {
            OptionKind::String { default, .. }
            | OptionKind::Enum { default, .. }
            | OptionKind::Color { default }
            | OptionKind::Duration { default, .. } => ConfigValue::Text(default.to_string()),
            OptionKind::Number { default, .. } => ConfigValue::Number(default),
            OptionKind::Boolean { default } => ConfigValue::Bool(default),
            OptionKind::Palette { default } | OptionKind::Keybind { default } => {
                ConfigValue::List(default.iter().map(|s| s.to_string()).collect())
            }
        }
    }

    /// Whether `value` equals this option's default.
    pub fn is_default(&self, value: &ConfigValue) -> bool {
        *value == self.default_value()
    }

    /// Whether the option applies on `platform`.
    pub fn available_on(&self, platform: Platform) -> bool {
        self.platforms.is_empty() || self.platforms.contains(&platform)
    }
}

static OPTION_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(catalog::OPTIONS.len());
    for (i, option) in catalog::OPTIONS.iter().enumerate() {
        if index.insert(option.id, i).is_some() {
            log::error!("Duplicate option id in schema: {}", option.id);
        }
    }
    index
});

/// Every option, in declaration order.
pub fn all_options() -> &'static [ConfigOption] {
    catalog::OPTIONS
}

/// Look up an option by id.
pub fn find_option(id: &str) -> Option<&'static ConfigOption> {
    OPTION_INDEX.get(id).map(|&i| &catalog::OPTIONS[i])
}

/// Options in `category`, in declaration order.
pub fn options_by_category(category: Category) -> Vec<&'static ConfigOption> {
    catalog::OPTIONS
        .iter()
        .filter(|option| option.category == category)
        .collect()
}

/// Options available on `platform`, in declaration order.
pub fn options_for_platform(platform: Platform) -> Vec<&'static ConfigOption> {
    catalog::OPTIONS
        .iter()
        .filter(|option| option.available_on(platform))
        .collect()
}

/// Case-insensitive search over id, name, and description of visible options.
pub fn search_options(query: &str) -> Vec<&'static ConfigOption> {
    let query = query.trim().to_lowercase();
    catalog::OPTIONS
        .iter()
        .filter(|option| !option.hidden)
        .filter(|option| {
            query.is_empty()
                || option.id.contains(&query)
                || option.name.to_lowercase().contains(&query)
                || option.description.to_lowercase().contains(&query)
        })
        .collect()
}
