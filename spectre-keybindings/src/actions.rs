//! Catalog of keybind actions Ghostty understands.

use spectre_config::Platform;
use std::fmt;

/// Grouping used when listing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Basic,
    Clipboard,
    Font,
    Scroll,
    Selection,
    Tab,
    Split,
    Window,
    System,
    Text,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Basic => "basic",
            ActionCategory::Clipboard => "clipboard",
            ActionCategory::Font => "font",
            ActionCategory::Scroll => "scroll",
            ActionCategory::Selection => "selection",
            ActionCategory::Tab => "tab",
            ActionCategory::Split => "split",
            ActionCategory::Window => "window",
            ActionCategory::System => "system",
            ActionCategory::Text => "text",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One action of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeybindAction {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActionCategory,
    /// Whether `name:param` is mandatory.
    pub has_param: bool,
    pub param_desc: Option<&'static str>,
    /// Closed set of legal parameters; empty means free-form.
    pub param_options: &'static [&'static str],
    pub platform: Option<Platform>,
    /// Replacement advice for deprecated actions.
    pub deprecated: Option<&'static str>,
}

impl KeybindAction {
    const fn simple(name: &'static str, description: &'static str, category: ActionCategory) -> Self {
        Self {
            name,
            description,
            category,
            has_param: false,
            param_desc: None,
            param_options: &[],
            platform: None,
            deprecated: None,
        }
    }

    const fn with_param(
        name: &'static str,
        description: &'static str,
        category: ActionCategory,
        param_desc: &'static str,
    ) -> Self {
        Self {
            has_param: true,
            param_desc: Some(param_desc),
            ..Self::simple(name, description, category)
        }
    }

    const fn one_of(mut self, options: &'static [&'static str]) -> Self {
        self.param_options = options;
        self
    }

    const fn only_on(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    const fn deprecated(mut self, advice: &'static str) -> Self {
        self.deprecated = Some(advice);
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    /// Warning shown when a keybind uses this action, if it is deprecated.
    pub fn deprecation_warning(&self) -> Option<String> {
        self.deprecated
            .map(|advice| format!("{} is deprecated. {advice}.", self.name))
    }
}

use ActionCategory::*;

const DIRECTIONS_SELECT: &[&str] = &[
    "left",
    "right",
    "up",
    "down",
    "page_up",
    "page_down",
    "home",
    "end",
    "beginning_of_line",
    "end_of_line",
];
const FILE_ACTIONS: &[&str] = &["copy", "paste", "open"];

static ACTIONS: &[KeybindAction] = &[
    KeybindAction::simple(
        "ignore",
        "Ignore this key combination (won't process or forward to terminal)",
        Basic,
    ),
    KeybindAction::simple("unbind", "Unbind a previously bound key binding", Basic),
    KeybindAction::simple(
        "reset",
        "Reset the terminal (fixes broken state, like running 'reset' command)",
        Basic,
    ),
    KeybindAction::simple("copy_to_clipboard", "Copy the selected text to the clipboard", Clipboard),
    KeybindAction::simple(
        "paste_from_clipboard",
        "Paste the contents of the default clipboard",
        Clipboard,
    ),
    KeybindAction::simple(
        "paste_from_selection",
        "Paste the contents of the selection clipboard",
        Clipboard,
    ),
    KeybindAction::simple(
        "copy_url_to_clipboard",
        "Copy the URL under the cursor to the clipboard",
        Clipboard,
    ),
    KeybindAction::simple(
        "copy_title_to_clipboard",
        "Copy the terminal title to the clipboard",
        Clipboard,
    ),
    KeybindAction::with_param(
        "increase_font_size",
        "Increase font size by specified points",
        Font,
        "Amount in points (e.g., 1 or 1.5)",
    ),
    KeybindAction::with_param(
        "decrease_font_size",
        "Decrease font size by specified points",
        Font,
        "Amount in points (e.g., 1 or 1.5)",
    ),
    KeybindAction::simple("reset_font_size", "Reset font size to the original configured size", Font),
    KeybindAction::with_param(
        "set_font_size",
        "Set font size to a specific value in points",
        Font,
        "Font size in points (e.g., 14)",
    ),
    KeybindAction::simple("scroll_to_top", "Scroll to the top of the scrollback buffer", Scroll),
    KeybindAction::simple("scroll_to_bottom", "Scroll to the bottom of the screen", Scroll),
    KeybindAction::simple("scroll_to_selection", "Scroll to the currently selected text", Scroll),
    KeybindAction::simple("scroll_page_up", "Scroll the screen up by one page", Scroll),
    KeybindAction::simple("scroll_page_down", "Scroll the screen down by one page", Scroll),
    KeybindAction::with_param(
        "scroll_page_fractional",
        "Scroll by a fraction of a page (positive=down, negative=up)",
        Scroll,
        "Fraction (e.g., 0.5 or -0.5)",
    ),
    KeybindAction::with_param(
        "scroll_page_lines",
        "Scroll by a number of lines (positive=down, negative=up)",
        Scroll,
        "Number of lines (e.g., 3 or -3)",
    ),
    KeybindAction::with_param(
        "jump_to_prompt",
        "Jump forward/back by prompts (requires shell integration)",
        Scroll,
        "Number (positive=forward, negative=back)",
    ),
    KeybindAction::simple("select_all", "Select all text on the screen", Selection),
    KeybindAction::with_param(
        "adjust_selection",
        "Adjust the current selection in the given direction",
        Selection,
        "Direction",
    )
    .one_of(DIRECTIONS_SELECT),
    KeybindAction::simple("new_tab", "Open a new tab", Tab),
    KeybindAction::simple("previous_tab", "Go to the previous tab", Tab),
    KeybindAction::simple("next_tab", "Go to the next tab", Tab),
    KeybindAction::simple("last_tab", "Go to the last tab", Tab),
    KeybindAction::with_param(
        "goto_tab",
        "Go to a specific tab by index (1-based)",
        Tab,
        "Tab index (e.g., 1, 2, 3)",
    ),
    KeybindAction::with_param(
        "move_tab",
        "Move current tab by relative offset (wraps around)",
        Tab,
        "Offset (e.g., 1 or -1)",
    ),
    KeybindAction::simple(
        "toggle_tab_overview",
        "Toggle the tab overview (Linux with libadwaita 1.4+)",
        Tab,
    )
    .only_on(Platform::Linux),
    KeybindAction::simple("close_tab", "Close the current tab and all its splits", Tab),
    KeybindAction::with_param(
        "new_split",
        "Create a new split in the specified direction",
        Split,
        "Direction",
    )
    .one_of(&["right", "down", "left", "up", "auto"]),
    KeybindAction::with_param(
        "goto_split",
        "Focus on a split in the specified direction or order",
        Split,
        "Direction",
    )
    .one_of(&["right", "down", "left", "up", "previous", "next"]),
    KeybindAction::simple(
        "toggle_split_zoom",
        "Zoom in/out of the current split (hides other splits)",
        Split,
    ),
    KeybindAction::with_param(
        "resize_split",
        "Resize the current split in direction by pixels",
        Split,
        "direction,pixels (e.g., up,10)",
    ),
    KeybindAction::simple(
        "equalize_splits",
        "Equalize the size of all splits in the window",
        Split,
    ),
    KeybindAction::simple(
        "new_window",
        "Open a new window (brings app to front if unfocused)",
        Window,
    ),
    KeybindAction::simple(
        "close_surface",
        "Close the current surface (window, tab, or split)",
        Window,
    ),
    KeybindAction::simple(
        "close_window",
        "Close the current window and all its tabs/splits",
        Window,
    ),
    KeybindAction::simple("close_all_windows", "Close all windows", Window)
        .deprecated("Use all:close_window instead"),
    KeybindAction::simple(
        "toggle_fullscreen",
        "Toggle fullscreen mode for the current window",
        Window,
    ),
    KeybindAction::simple(
        "toggle_maximize",
        "Toggle maximize for the current window (Linux only)",
        Window,
    )
    .only_on(Platform::Linux),
    KeybindAction::simple(
        "toggle_window_decorations",
        "Toggle window decorations (titlebar, etc.) (Linux only)",
        Window,
    )
    .only_on(Platform::Linux),
    KeybindAction::simple("toggle_window_float_on_top", "Toggle window always-on-top", Window),
    KeybindAction::simple(
        "reset_window_size",
        "Reset window to default size (macOS only)",
        Window,
    )
    .only_on(Platform::Macos),
    KeybindAction::simple(
        "prompt_surface_title",
        "Change surface title via popup prompt (Linux libadwaita 1.5+)",
        Window,
    )
    .only_on(Platform::Linux),
    KeybindAction::simple("open_config", "Open the config file in the default OS editor", System),
    KeybindAction::simple("reload_config", "Reload the configuration file", System),
    KeybindAction::simple("toggle_quick_terminal", "Toggle the quick terminal dropdown", System),
    KeybindAction::simple("toggle_command_palette", "Toggle the command palette", System),
    KeybindAction::simple("toggle_visibility", "Toggle application visibility", System),
    KeybindAction::simple("toggle_secure_input", "Toggle secure input mode", System),
    KeybindAction::simple("check_for_updates", "Check for application updates", System),
    KeybindAction::with_param(
        "inspector",
        "Control the terminal inspector visibility",
        System,
        "Mode",
    )
    .one_of(&["toggle", "show", "hide"]),
    KeybindAction::simple("show_gtk_inspector", "Show the GTK inspector (Linux only)", System)
        .only_on(Platform::Linux),
    KeybindAction::simple(
        "show_on_screen_keyboard",
        "Show the on-screen keyboard (Linux GTK only)",
        System,
    )
    .only_on(Platform::Linux),
    KeybindAction::simple("undo", "Undo the last action", System),
    KeybindAction::simple("redo", "Redo the last undone action", System),
    KeybindAction::simple("quit", "Quit the application", System),
    KeybindAction::simple("clear_screen", "Clear the screen and all scrollback", System),
    KeybindAction::with_param(
        "csi",
        "Send a CSI sequence (without ESC [ prefix)",
        Text,
        "CSI sequence (e.g., 0m to reset styles)",
    ),
    KeybindAction::with_param("esc", "Send an ESC sequence", Text, "ESC sequence"),
    KeybindAction::with_param(
        "text",
        "Send the specified text (Zig string literal syntax)",
        Text,
        "Text to send",
    ),
    KeybindAction::with_param("cursor_key", "Send data based on cursor key mode", Text, "Mode")
        .one_of(&["application", "normal"]),
    KeybindAction::with_param(
        "write_scrollback_file",
        "Write entire scrollback to a temp file",
        Text,
        "Action",
    )
    .one_of(FILE_ACTIONS),
    KeybindAction::with_param(
        "write_screen_file",
        "Write screen contents to a temp file",
        Text,
        "Action",
    )
    .one_of(FILE_ACTIONS),
    KeybindAction::with_param(
        "write_selection_file",
        "Write selected text to a temp file",
        Text,
        "Action",
    )
    .one_of(FILE_ACTIONS),
];

/// A ready-made binding shown as a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeybindExample {
    pub trigger: &'static str,
    pub action: &'static str,
    pub description: &'static str,
}

impl KeybindExample {
    /// The example as a `trigger=action` entry.
    pub fn entry(&self) -> String {
        format!("{}={}", self.trigger, self.action)
    }
}

pub const KEYBIND_EXAMPLES: &[KeybindExample] = &[
    KeybindExample {
        trigger: "ctrl+c",
        action: "copy_to_clipboard",
        description: "Copy selection",
    },
    KeybindExample {
        trigger: "ctrl+v",
        action: "paste_from_clipboard",
        description: "Paste",
    },
    KeybindExample {
        trigger: "ctrl+shift+t",
        action: "new_tab",
        description: "New tab",
    },
    KeybindExample {
        trigger: "ctrl+shift+n",
        action: "new_window",
        description: "New window",
    },
    KeybindExample {
        trigger: "ctrl+plus",
        action: "increase_font_size:1",
        description: "Increase font",
    },
    KeybindExample {
        trigger: "ctrl+minus",
        action: "decrease_font_size:1",
        description: "Decrease font",
    },
    KeybindExample {
        trigger: "ctrl+0",
        action: "reset_font_size",
        description: "Reset font size",
    },
    KeybindExample {
        trigger: "ctrl+shift+w",
        action: "close_tab",
        description: "Close tab",
    },
    KeybindExample {
        trigger: "f11",
        action: "toggle_fullscreen",
        description: "Toggle fullscreen",
    },
];

/// Every action, grouped by category.
pub fn all_actions() -> &'static [KeybindAction] {
    ACTIONS
}

pub fn find_action(name: &str) -> Option<&'static KeybindAction> {
    ACTIONS.iter().find(|action| action.name == name)
}

/// Actions whose name contains `partial`, case-insensitively.
pub fn action_suggestions(partial: &str) -> Vec<&'static KeybindAction> {
    let partial = partial.trim().to_lowercase();
    ACTIONS
        .iter()
        .filter(|action| action.name.contains(&partial))
        .collect()
}

pub fn actions_by_category(category: ActionCategory) -> Vec<&'static KeybindAction> {
    ACTIONS
        .iter()
        .filter(|action| action.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<&str> = all_actions().iter().map(|a| a.name).collect();
        assert_eq!(names.len(), all_actions().len());
        assert_eq!(all_actions().len(), 66);
    }

    #[test]
    fn test_param_metadata_consistent() {
        for action in all_actions() {
            assert_eq!(action.has_param, action.param_desc.is_some(), "{}", action.name);
            if !action.param_options.is_empty() {
                assert!(action.has_param, "{}", action.name);
            }
        }
    }

    #[test]
    fn test_only_close_all_windows_is_deprecated() {
        let deprecated: Vec<&str> = all_actions()
            .iter()
            .filter(|a| a.is_deprecated())
            .map(|a| a.name)
            .collect();
        assert_eq!(deprecated, vec!["close_all_windows"]);
        assert_eq!(
            find_action("close_all_windows")
                .unwrap()
                .deprecation_warning()
                .unwrap(),
            "close_all_windows is deprecated. Use all:close_window instead."
        );
    }

    #[test]
    fn test_suggestions() {
        let names: Vec<&str> = action_suggestions("FONT").iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec![
                "increase_font_size",
                "decrease_font_size",
                "reset_font_size",
                "set_font_size"
            ]
        );
        assert_eq!(action_suggestions("").len(), all_actions().len());
    }

    #[test]
    fn test_examples_use_known_actions() {
        for example in KEYBIND_EXAMPLES {
            let name = example.action.split(':').next().unwrap();
            assert!(find_action(name).is_some(), "{}", example.action);
        }
        assert_eq!(KEYBIND_EXAMPLES[0].entry(), "ctrl+c=copy_to_clipboard");
    }

    #[test]
    fn test_categories_and_platforms() {
        assert_eq!(actions_by_category(ActionCategory::Basic).len(), 3);
        assert_eq!(
            find_action("reset_window_size").unwrap().platform,
            Some(Platform::Macos)
        );
        assert_eq!(ActionCategory::Split.to_string(), "split");
    }
}
