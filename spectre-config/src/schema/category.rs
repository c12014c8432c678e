//! Option categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of groups every option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fonts,
    Colors,
    Window,
    Cursor,
    Mouse,
    Clipboard,
    Keybinds,
    Shell,
    Application,
    QuickTerminal,
    Macos,
    Linux,
    Advanced,
}

/// Display metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub description: &'static str,
}

const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: Category::Fonts,
        name: "Fonts",
        description: "Font family, size, styles, and variations",
    },
    CategoryInfo {
        id: Category::Colors,
        name: "Colors",
        description: "Theme, palette, background, foreground, cursor colors",
    },
    CategoryInfo {
        id: Category::Window,
        name: "Window",
        description: "Window decorations, padding, sizing, titlebar",
    },
    CategoryInfo {
        id: Category::Cursor,
        name: "Cursor",
        description: "Cursor style, color, and blinking behavior",
    },
    CategoryInfo {
        id: Category::Mouse,
        name: "Mouse",
        description: "Mouse click behavior, scrolling, hiding",
    },
    CategoryInfo {
        id: Category::Clipboard,
        name: "Clipboard",
        description: "Copy and paste behavior",
    },
    CategoryInfo {
        id: Category::Keybinds,
        name: "Keybinds",
        description: "Keyboard shortcuts and bindings",
    },
    CategoryInfo {
        id: Category::Shell,
        name: "Shell",
        description: "Shell integration, command, environment",
    },
    CategoryInfo {
        id: Category::Application,
        name: "Application",
        description: "Startup, shutdown, notifications",
    },
    CategoryInfo {
        id: Category::QuickTerminal,
        name: "Quick Terminal",
        description: "Quick terminal dropdown settings",
    },
    CategoryInfo {
        id: Category::Macos,
        name: "macOS",
        description: "macOS-specific settings",
    },
    CategoryInfo {
        id: Category::Linux,
        name: "Linux",
        description: "Linux and GTK-specific settings",
    },
    CategoryInfo {
        id: Category::Advanced,
        name: "Advanced",
        description: "Scrollback, shaders, image storage",
    },
];

/// All categories in sidebar order.
pub fn categories() -> &'static [CategoryInfo] {
    CATEGORIES
}

impl Category {
    /// Stable kebab-case identifier (`"quick-terminal"`).
    pub fn id(&self) -> &'static str {
        match self {
            Category::Fonts => "fonts",
            Category::Colors => "colors",
            Category::Window => "window",
            Category::Cursor => "cursor",
            Category::Mouse => "mouse",
            Category::Clipboard => "clipboard",
            Category::Keybinds => "keybinds",
            Category::Shell => "shell",
            Category::Application => "application",
            Category::QuickTerminal => "quick-terminal",
            Category::Macos => "macos",
            Category::Linux => "linux",
            Category::Advanced => "advanced",
        }
    }

    pub fn info(&self) -> &'static CategoryInfo {
        // CATEGORIES lists every variant in declaration order.
        &CATEGORIES[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }

    pub fn from_id(id: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .map(|info| info.id)
            .find(|category| category.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
