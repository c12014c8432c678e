//! Bundled starter configurations.

use crate::value::{ConfigValue, ConfigValues};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Starter,
    Workflow,
    Aesthetic,
    Performance,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 4] = [
        PresetCategory::Starter,
        PresetCategory::Workflow,
        PresetCategory::Aesthetic,
        PresetCategory::Performance,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PresetCategory::Starter => "starter",
            PresetCategory::Workflow => "workflow",
            PresetCategory::Aesthetic => "aesthetic",
            PresetCategory::Performance => "performance",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PresetCategory::Starter => "Starter",
            PresetCategory::Workflow => "Workflow",
            PresetCategory::Aesthetic => "Aesthetic",
            PresetCategory::Performance => "Performance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PresetCategory::Starter => "Great starting points",
            PresetCategory::Workflow => "Optimized for specific tasks",
            PresetCategory::Aesthetic => "Visual styles and themes",
            PresetCategory::Performance => "Speed and efficiency",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Statically declared value of a preset entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresetValue {
    Bool(bool),
    Number(f64),
    Text(&'static str),
    List(&'static [&'static str]),
}

impl From<PresetValue> for ConfigValue {
    fn from(value: PresetValue) -> Self {
        match value {
            PresetValue::Bool(b) => ConfigValue::Bool(b),
            PresetValue::Number(n) => ConfigValue::Number(n),
            PresetValue::Text(s) => ConfigValue::Text(s.to_string()),
            PresetValue::List(items) => {
                ConfigValue::List(items.iter().map(|s| s.to_string()).collect())
            }
        }
    }
}

/// A named bundle of overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: PresetCategory,
    pub tags: &'static [&'static str],
    pub entries: &'static [(&'static str, PresetValue)],
}

impl Preset {
    /// The preset's overrides as store values.
    pub fn config(&self) -> ConfigValues {
        self.entries
            .iter()
            .map(|(id, value)| (id.to_string(), ConfigValue::from(*value)))
            .collect()
    }

    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.contains(query))
    }
}

use PresetValue::{Bool, List, Number, Text};

static PRESETS: &[Preset] = &[
    Preset {
        id: "minimal",
        name: "Minimal",
        description: "Clean defaults with just essential settings. Perfect starting point.",
        category: PresetCategory::Starter,
        tags: &["beginner", "clean", "simple"],
        entries: &[
            ("font-size", Number(14.0)),
            ("window-padding-x", Number(8.0)),
            ("window-padding-y", Number(8.0)),
            ("confirm-close-surface", Bool(false)),
        ],
    },
    Preset {
        id: "comfortable",
        name: "Comfortable",
        description: "Relaxed spacing and readable fonts for long coding sessions.",
        category: PresetCategory::Starter,
        tags: &["relaxed", "readable", "coding"],
        entries: &[
            ("font-family", Text("JetBrains Mono")),
            ("font-size", Number(15.0)),
            ("window-padding-x", Number(16.0)),
            ("window-padding-y", Number(12.0)),
            ("cursor-style", Text("bar")),
            ("cursor-style-blink", Bool(true)),
            ("mouse-hide-while-typing", Bool(true)),
        ],
    },
    Preset {
        id: "poweruser",
        name: "Power User",
        description: "Optimized for keyboard-driven workflow with useful keybinds.",
        category: PresetCategory::Workflow,
        tags: &["productivity", "keyboard", "advanced"],
        entries: &[
            ("font-family", Text("JetBrains Mono")),
            ("font-size", Number(13.0)),
            ("window-padding-x", Number(4.0)),
            ("window-padding-y", Number(4.0)),
            ("cursor-style", Text("block")),
            ("mouse-hide-while-typing", Bool(true)),
            ("copy-on-select", Bool(true)),
            ("confirm-close-surface", Bool(false)),
            ("scrollback-limit", Number(50_000_000.0)),
            (
                "keybind",
                List(&[
                    "ctrl+shift+c=copy_to_clipboard",
                    "ctrl+shift+v=paste_from_clipboard",
                    "ctrl+shift+t=new_tab",
                    "ctrl+shift+w=close_tab",
                    "ctrl+plus=increase_font_size:1",
                    "ctrl+minus=decrease_font_size:1",
                    "ctrl+0=reset_font_size",
                    "f11=toggle_fullscreen",
                ]),
            ),
        ],
    },
    Preset {
        id: "developer",
        name: "Developer",
        description: "Tailored for software development with git-friendly colors and ligatures.",
        category: PresetCategory::Workflow,
        tags: &["coding", "programming", "ligatures"],
        entries: &[
            ("font-family", Text("Fira Code")),
            ("font-size", Number(14.0)),
            ("font-feature", List(&["calt", "liga"])),
            ("window-padding-x", Number(10.0)),
            ("window-padding-y", Number(8.0)),
            ("cursor-style", Text("bar")),
            ("cursor-style-blink", Bool(true)),
            ("shell-integration", Text("detect")),
            ("shell-integration-features", Text("cursor,sudo,title")),
            ("scrollback-limit", Number(100_000_000.0)),
            ("mouse-hide-while-typing", Bool(true)),
            ("copy-on-select", Bool(true)),
        ],
    },
    Preset {
        id: "sysadmin",
        name: "System Admin",
        description: "High scrollback, clear fonts, and visibility settings for server work.",
        category: PresetCategory::Workflow,
        tags: &["server", "ssh", "logs"],
        entries: &[
            ("font-family", Text("Source Code Pro")),
            ("font-size", Number(13.0)),
            ("window-padding-x", Number(4.0)),
            ("window-padding-y", Number(4.0)),
            ("cursor-style", Text("block")),
            ("cursor-style-blink", Bool(false)),
            ("scrollback-limit", Number(500_000_000.0)),
            ("bold-is-bright", Bool(true)),
            ("mouse-hide-while-typing", Bool(false)),
            ("shell-integration", Text("detect")),
        ],
    },
    Preset {
        id: "retro",
        name: "Retro Terminal",
        description: "Classic CRT-style look with green phosphor colors.",
        category: PresetCategory::Aesthetic,
        tags: &["vintage", "crt", "green"],
        entries: &[
            ("font-family", Text("VT323")),
            ("font-size", Number(18.0)),
            ("background", Text("#0a0a0a")),
            ("foreground", Text("#33ff33")),
            ("cursor-color", Text("#33ff33")),
            ("cursor-style", Text("block")),
            ("cursor-style-blink", Bool(true)),
            ("window-padding-x", Number(20.0)),
            ("window-padding-y", Number(16.0)),
            ("background-opacity", Number(0.95)),
        ],
    },
    Preset {
        id: "modern-dark",
        name: "Modern Dark",
        description: "Sleek dark theme with subtle transparency and rounded aesthetics.",
        category: PresetCategory::Aesthetic,
        tags: &["dark", "elegant", "transparent"],
        entries: &[
            ("font-family", Text("SF Mono")),
            ("font-size", Number(14.0)),
            ("background", Text("#1a1b26")),
            ("foreground", Text("#c0caf5")),
            ("cursor-color", Text("#c0caf5")),
            ("selection-background", Text("#364a82")),
            ("cursor-style", Text("bar")),
            ("cursor-style-blink", Bool(true)),
            ("window-padding-x", Number(16.0)),
            ("window-padding-y", Number(12.0)),
            ("background-opacity", Number(0.92)),
            ("unfocused-split-opacity", Number(0.7)),
        ],
    },
    Preset {
        id: "cozy-warm",
        name: "Cozy Warm",
        description: "Warm, eye-friendly colors perfect for evening coding.",
        category: PresetCategory::Aesthetic,
        tags: &["warm", "cozy", "night"],
        entries: &[
            ("font-family", Text("Cascadia Code")),
            ("font-size", Number(15.0)),
            ("background", Text("#1f1d2e")),
            ("foreground", Text("#e0def4")),
            ("cursor-color", Text("#eb6f92")),
            ("selection-background", Text("#44415a")),
            ("cursor-style", Text("bar")),
            ("cursor-style-blink", Bool(true)),
            ("window-padding-x", Number(20.0)),
            ("window-padding-y", Number(16.0)),
            ("background-opacity", Number(0.95)),
        ],
    },
    Preset {
        id: "performance",
        name: "Performance",
        description: "Minimal overhead settings for maximum speed and responsiveness.",
        category: PresetCategory::Performance,
        tags: &["fast", "efficient", "minimal"],
        entries: &[
            ("font-size", Number(13.0)),
            ("window-padding-x", Number(0.0)),
            ("window-padding-y", Number(0.0)),
            ("cursor-style", Text("block")),
            ("cursor-style-blink", Bool(false)),
            ("scrollback-limit", Number(10_000_000.0)),
            ("background-opacity", Number(1.0)),
            ("unfocused-split-opacity", Number(1.0)),
            ("resize-overlay", Text("never")),
            ("mouse-hide-while-typing", Bool(true)),
        ],
    },
    Preset {
        id: "presentation",
        name: "Presentation",
        description: "Large, readable text perfect for screen sharing or demos.",
        category: PresetCategory::Performance,
        tags: &["demo", "screenshare", "large"],
        entries: &[
            ("font-family", Text("Fira Code")),
            ("font-size", Number(20.0)),
            ("font-thicken", Bool(true)),
            ("window-padding-x", Number(24.0)),
            ("window-padding-y", Number(20.0)),
            ("cursor-style", Text("block")),
            ("cursor-style-blink", Bool(true)),
            ("background-opacity", Number(1.0)),
        ],
    },
];

pub fn presets() -> &'static [Preset] {
    PRESETS
}

pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

pub fn presets_by_category(category: PresetCategory) -> Vec<&'static Preset> {
    PRESETS
        .iter()
        .filter(|preset| preset.category == category)
        .collect()
}

/// Case-insensitive match over name, description, and tags.
pub fn search_presets(query: &str) -> Vec<&'static Preset> {
    let query = query.trim().to_lowercase();
    PRESETS.iter().filter(|preset| preset.matches(&query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{OptionKind, find_option};

    #[test]
    fn test_ten_presets_with_unique_ids() {
        assert_eq!(presets().len(), 10);
        let mut ids: Vec<&str> = presets().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_entries_match_schema_kinds() {
        for preset in presets() {
            for (id, value) in preset.entries {
                let option = find_option(id)
                    .unwrap_or_else(|| panic!("{} uses unknown option {id}", preset.id));
                let ok = match (option.kind, value) {
                    (OptionKind::Boolean { .. }, PresetValue::Bool(_)) => true,
                    (OptionKind::Number { .. }, PresetValue::Number(_)) => true,
                    (OptionKind::Palette { .. } | OptionKind::Keybind { .. }, PresetValue::List(_)) => true,
                    (OptionKind::String { repeatable, .. }, PresetValue::List(_)) => repeatable,
                    (OptionKind::String { repeatable, .. }, PresetValue::Text(_)) => !repeatable,
                    (
                        OptionKind::Enum { .. } | OptionKind::Color { .. } | OptionKind::Duration { .. },
                        PresetValue::Text(_),
                    ) => true,
                    _ => false,
                };
                assert!(ok, "{}: {id} has the wrong value kind", preset.id);
            }
        }
    }

    #[test]
    fn test_every_category_has_presets() {
        for category in PresetCategory::ALL {
            assert!(!presets_by_category(category).is_empty());
        }
    }

    #[test]
    fn test_search_presets() {
        let hits: Vec<&str> = search_presets("CODING").iter().map(|p| p.id).collect();
        assert!(hits.contains(&"comfortable"));
        assert!(hits.contains(&"cozy-warm"));
        assert!(search_presets("ssh").iter().any(|p| p.id == "sysadmin"));
        assert!(search_presets("nothing-matches-this").is_empty());
    }

    #[test]
    fn test_preset_config() {
        let config = find_preset("minimal").unwrap().config();
        assert_eq!(config["font-size"], ConfigValue::Number(14.0));
        assert_eq!(config["confirm-close-surface"], ConfigValue::Bool(false));
        assert_eq!(config.len(), 4);
    }
}
