//! The option table.
//!
//! Order matters: categories list their options, and the text codec writes
//! overrides, in the order they appear here.

use super::category::Category::*;
use super::{ConfigOption, EnumChoice, Platform};

const MACOS: &[Platform] = &[Platform::Macos];
const LINUX: &[Platform] = &[Platform::Linux];

const fn choice(value: &'static str, label: &'static str) -> EnumChoice {
    EnumChoice { value, label }
}

const GRAPHEME_WIDTH_METHODS: &[EnumChoice] = &[
    choice("legacy", "Legacy (wcswidth)"),
    choice("unicode", "Unicode"),
];

const ALPHA_BLENDING: &[EnumChoice] = &[
    choice("native", "Native"),
    choice("linear", "Linear"),
    choice("linear-corrected", "Linear (corrected)"),
];

const WINDOW_COLORSPACES: &[EnumChoice] = &[choice("srgb", "sRGB"), choice("display-p3", "Display P3")];

const PADDING_COLORS: &[EnumChoice] = &[
    choice("background", "Background"),
    choice("extend", "Extend"),
    choice("extend-always", "Extend always"),
];

const WINDOW_DECORATIONS: &[EnumChoice] = &[
    choice("auto", "Auto"),
    choice("client", "Client-side"),
    choice("server", "Server-side"),
    choice("none", "None"),
];

const WINDOW_THEMES: &[EnumChoice] = &[
    choice("auto", "Auto"),
    choice("system", "System"),
    choice("light", "Light"),
    choice("dark", "Dark"),
    choice("ghostty", "Ghostty"),
];

const WINDOW_SAVE_STATE: &[EnumChoice] = &[
    choice("default", "Default"),
    choice("never", "Never"),
    choice("always", "Always"),
];

const NEW_TAB_POSITIONS: &[EnumChoice] = &[choice("current", "After current"), choice("end", "At end")];

const RESIZE_OVERLAY: &[EnumChoice] = &[
    choice("always", "Always"),
    choice("never", "Never"),
    choice("after-first", "After first resize"),
];

const OVERLAY_POSITIONS: &[EnumChoice] = &[
    choice("center", "Center"),
    choice("top-left", "Top left"),
    choice("top-center", "Top center"),
    choice("top-right", "Top right"),
    choice("bottom-left", "Bottom left"),
    choice("bottom-center", "Bottom center"),
    choice("bottom-right", "Bottom right"),
];

const CURSOR_STYLES: &[EnumChoice] = &[
    choice("block", "Block"),
    choice("bar", "Bar"),
    choice("underline", "Underline"),
    choice("block_hollow", "Hollow block"),
];

const MOUSE_SHIFT_CAPTURE: &[EnumChoice] = &[
    choice("false", "No (shift extends selection)"),
    choice("true", "Yes (programs may capture)"),
    choice("always", "Always"),
    choice("never", "Never"),
];

const RIGHT_CLICK_ACTIONS: &[EnumChoice] = &[
    choice("context-menu", "Context menu"),
    choice("paste", "Paste"),
    choice("copy", "Copy"),
    choice("copy-or-paste", "Copy or paste"),
    choice("ignore", "Ignore"),
];

const CLIPBOARD_ACCESS: &[EnumChoice] = &[
    choice("ask", "Ask"),
    choice("allow", "Allow"),
    choice("deny", "Deny"),
];

const SHELL_INTEGRATIONS: &[EnumChoice] = &[
    choice("none", "None"),
    choice("detect", "Detect"),
    choice("bash", "Bash"),
    choice("elvish", "Elvish"),
    choice("fish", "Fish"),
    choice("zsh", "Zsh"),
];

const AUTO_UPDATE: &[EnumChoice] = &[
    choice("off", "Off"),
    choice("check", "Check"),
    choice("download", "Download"),
];

const UPDATE_CHANNELS: &[EnumChoice] = &[choice("stable", "Stable"), choice("tip", "Tip")];

const QUICK_TERMINAL_POSITIONS: &[EnumChoice] = &[
    choice("top", "Top"),
    choice("bottom", "Bottom"),
    choice("left", "Left"),
    choice("right", "Right"),
    choice("center", "Center"),
];

const QUICK_TERMINAL_SCREENS: &[EnumChoice] = &[
    choice("main", "Main"),
    choice("mouse", "Under mouse"),
    choice("macos-menu-bar", "Menu bar screen"),
];

const QUICK_TERMINAL_SPACES: &[EnumChoice] = &[choice("move", "Move"), choice("remain", "Remain")];

const KEYBOARD_INTERACTIVITY: &[EnumChoice] = &[
    choice("none", "None"),
    choice("on-demand", "On demand"),
    choice("exclusive", "Exclusive"),
];

const TITLEBAR_STYLES: &[EnumChoice] = &[
    choice("native", "Native"),
    choice("transparent", "Transparent"),
    choice("tabs", "Tabs"),
    choice("hidden", "Hidden"),
];

const VISIBILITY: &[EnumChoice] = &[choice("visible", "Visible"), choice("hidden", "Hidden")];

const OPTION_AS_ALT: &[EnumChoice] = &[
    choice("false", "Off"),
    choice("true", "Both"),
    choice("left", "Left only"),
    choice("right", "Right only"),
];

const NON_NATIVE_FULLSCREEN: &[EnumChoice] = &[
    choice("false", "Native"),
    choice("true", "Non-native"),
    choice("visible-menu", "Non-native, visible menu"),
    choice("padded-notch", "Non-native, padded notch"),
];

const MACOS_ICONS: &[EnumChoice] = &[
    choice("official", "Official"),
    choice("blueprint", "Blueprint"),
    choice("chalkboard", "Chalkboard"),
    choice("microchip", "Microchip"),
    choice("glass", "Glass"),
    choice("holographic", "Holographic"),
    choice("paper", "Paper"),
    choice("retro", "Retro"),
    choice("xray", "X-Ray"),
    choice("custom", "Custom"),
    choice("custom-style", "Custom style"),
];

const ICON_FRAMES: &[EnumChoice] = &[
    choice("aluminum", "Aluminum"),
    choice("beige", "Beige"),
    choice("plastic", "Plastic"),
    choice("chrome", "Chrome"),
];

const MACOS_HIDDEN: &[EnumChoice] = &[choice("never", "Never"), choice("always", "Always")];

const GTK_SINGLE_INSTANCE: &[EnumChoice] = &[
    choice("desktop", "Desktop"),
    choice("false", "Off"),
    choice("true", "On"),
];

const GTK_TAB_LOCATIONS: &[EnumChoice] = &[
    choice("top", "Top"),
    choice("bottom", "Bottom"),
    choice("hidden", "Hidden"),
];

const TOOLBAR_STYLES: &[EnumChoice] = &[
    choice("flat", "Flat"),
    choice("raised", "Raised"),
    choice("raised-border", "Raised with border"),
];

const CGROUP_MODES: &[EnumChoice] = &[
    choice("never", "Never"),
    choice("always", "Always"),
    choice("single-instance", "Single instance"),
];

const ASYNC_BACKENDS: &[EnumChoice] = &[
    choice("auto", "Auto"),
    choice("epoll", "epoll"),
    choice("io_uring", "io_uring"),
];

const SHADER_ANIMATION: &[EnumChoice] = &[
    choice("true", "When focused"),
    choice("false", "Never"),
    choice("always", "Always"),
];

const COLOR_REPORT_FORMATS: &[EnumChoice] = &[
    choice("none", "None"),
    choice("8-bit", "8-bit"),
    choice("16-bit", "16-bit"),
];

pub(crate) static OPTIONS: &[ConfigOption] = &[
    // Fonts
    ConfigOption::string(
        "font-family",
        "Font Family",
        "Primary font family. Fallback fonts are searched automatically.",
        Fonts,
        "",
    )
    .placeholder("e.g. JetBrains Mono"),
    ConfigOption::string(
        "font-family-bold",
        "Bold Font Family",
        "Font family for bold text. Defaults to the primary family.",
        Fonts,
        "",
    ),
    ConfigOption::string(
        "font-family-italic",
        "Italic Font Family",
        "Font family for italic text. Defaults to the primary family.",
        Fonts,
        "",
    ),
    ConfigOption::string(
        "font-family-bold-italic",
        "Bold Italic Font Family",
        "Font family for bold italic text. Defaults to the primary family.",
        Fonts,
        "",
    ),
    ConfigOption::number(
        "font-size",
        "Font Size",
        "Font size in points.",
        Fonts,
        13.0,
    )
    .range(4.0, 72.0, 0.5),
    ConfigOption::string(
        "font-style",
        "Font Style",
        "Named style of the regular face, or false to disable it.",
        Fonts,
        "default",
    ),
    ConfigOption::string(
        "font-style-bold",
        "Bold Font Style",
        "Named style of the bold face, or false to disable it.",
        Fonts,
        "default",
    ),
    ConfigOption::string(
        "font-style-italic",
        "Italic Font Style",
        "Named style of the italic face, or false to disable it.",
        Fonts,
        "default",
    ),
    ConfigOption::string(
        "font-style-bold-italic",
        "Bold Italic Font Style",
        "Named style of the bold italic face, or false to disable it.",
        Fonts,
        "default",
    ),
    ConfigOption::string(
        "font-synthetic-style",
        "Synthetic Styles",
        "Which styles may be synthesized when the font lacks them.",
        Fonts,
        "bold,italic,bold-italic",
    )
    .since("1.0.1"),
    ConfigOption::string(
        "font-feature",
        "Font Features",
        "OpenType features to enable or disable, e.g. -calt or ss01.",
        Fonts,
        "",
    )
    .placeholder("e.g. -calt, ss01")
    .repeatable(),
    ConfigOption::string(
        "font-variation",
        "Font Variations",
        "Variable font axis settings, e.g. wght=500.",
        Fonts,
        "",
    )
    .placeholder("e.g. wght=500")
    .repeatable(),
    ConfigOption::string(
        "font-codepoint-map",
        "Codepoint Map",
        "Force a font for a codepoint range, e.g. U+E000-U+E0FF=Symbols Nerd Font.",
        Fonts,
        "",
    )
    .repeatable(),
    ConfigOption::boolean(
        "font-thicken",
        "Thicken Font",
        "Draw fonts with a thicker stroke.",
        Fonts,
        false,
    )
    .platforms(MACOS),
    ConfigOption::number(
        "font-thicken-strength",
        "Thicken Strength",
        "Strength of font thickening when enabled.",
        Fonts,
        255.0,
    )
    .range(0.0, 255.0, 1.0)
    .platforms(MACOS)
    .since("1.1.0"),
    ConfigOption::string(
        "adjust-cell-width",
        "Cell Width Adjustment",
        "Adjust cell width by points or percent, e.g. 1 or 10%.",
        Fonts,
        "",
    ),
    ConfigOption::string(
        "adjust-cell-height",
        "Cell Height Adjustment",
        "Adjust cell height by points or percent, e.g. 2 or 20%.",
        Fonts,
        "",
    ),
    ConfigOption::string(
        "adjust-font-baseline",
        "Baseline Adjustment",
        "Move the font baseline by points or percent.",
        Fonts,
        "",
    ),
    ConfigOption::string(
        "adjust-underline-position",
        "Underline Position",
        "Move the underline by points or percent.",
        Fonts,
        "",
    ),
    ConfigOption::string(
        "freetype-load-flags",
        "FreeType Load Flags",
        "FreeType hinting flags.",
        Fonts,
        "hinting,force-autohint,monochrome,autohint",
    )
    .platforms(LINUX),
    ConfigOption::enumeration(
        "grapheme-width-method",
        "Grapheme Width Method",
        "How to compute the width of a grapheme cluster.",
        Fonts,
        "unicode",
        GRAPHEME_WIDTH_METHODS,
    ),
    // Colors
    ConfigOption::string(
        "theme",
        "Theme",
        "Named theme, or light:NAME,dark:NAME to follow the system appearance.",
        Colors,
        "",
    )
    .placeholder("e.g. Dracula"),
    ConfigOption::color(
        "background",
        "Background",
        "Background color of the window.",
        Colors,
        "#282c34",
    ),
    ConfigOption::color(
        "foreground",
        "Foreground",
        "Default text color.",
        Colors,
        "#ffffff",
    ),
    ConfigOption::color(
        "selection-foreground",
        "Selection Foreground",
        "Text color of selected text. Empty inverts.",
        Colors,
        "",
    ),
    ConfigOption::color(
        "selection-background",
        "Selection Background",
        "Background color of selected text. Empty inverts.",
        Colors,
        "",
    ),
    ConfigOption::boolean(
        "selection-invert-fg-bg",
        "Invert Selection Colors",
        "Swap foreground and background for selections.",
        Colors,
        false,
    ),
    ConfigOption::palette(
        "palette",
        "Color Palette",
        "The 16 ANSI colors, written as index=color.",
        Colors,
    ),
    ConfigOption::boolean(
        "bold-is-bright",
        "Bold Is Bright",
        "Render bold text with the bright palette color.",
        Colors,
        false,
    ),
    ConfigOption::number(
        "minimum-contrast",
        "Minimum Contrast",
        "Minimum contrast ratio between foreground and background.",
        Colors,
        1.0,
    )
    .range(1.0, 21.0, 0.1),
    ConfigOption::number(
        "background-opacity",
        "Background Opacity",
        "Opacity of the window background.",
        Colors,
        1.0,
    )
    .range(0.0, 1.0, 0.01),
    ConfigOption::string(
        "background-blur",
        "Background Blur",
        "Blur behind a translucent background: true, false, or a radius.",
        Colors,
        "false",
    ),
    ConfigOption::number(
        "unfocused-split-opacity",
        "Unfocused Split Opacity",
        "Opacity of unfocused splits.",
        Colors,
        0.7,
    )
    .range(0.15, 1.0, 0.05),
    ConfigOption::color(
        "unfocused-split-fill",
        "Unfocused Split Fill",
        "Color used to dim unfocused splits.",
        Colors,
        "",
    ),
    ConfigOption::color(
        "split-divider-color",
        "Split Divider Color",
        "Color of the divider between splits.",
        Colors,
        "",
    )
    .since("1.1.0"),
    ConfigOption::enumeration(
        "window-colorspace",
        "Window Colorspace",
        "Colorspace used to interpret configured colors.",
        Colors,
        "srgb",
        WINDOW_COLORSPACES,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "alpha-blending",
        "Alpha Blending",
        "Color space used for alpha blending of text and images.",
        Colors,
        "native",
        ALPHA_BLENDING,
    )
    .since("1.1.0"),
    // Window
    ConfigOption::number(
        "window-padding-x",
        "Horizontal Padding",
        "Horizontal padding in points.",
        Window,
        2.0,
    )
    .range(0.0, 200.0, 1.0),
    ConfigOption::number(
        "window-padding-y",
        "Vertical Padding",
        "Vertical padding in points.",
        Window,
        2.0,
    )
    .range(0.0, 200.0, 1.0),
    ConfigOption::boolean(
        "window-padding-balance",
        "Balance Padding",
        "Distribute extra space evenly around the grid.",
        Window,
        false,
    ),
    ConfigOption::enumeration(
        "window-padding-color",
        "Padding Color",
        "How to color the padding area.",
        Window,
        "background",
        PADDING_COLORS,
    ),
    ConfigOption::enumeration(
        "window-decoration",
        "Window Decoration",
        "Which window decorations to draw.",
        Window,
        "auto",
        WINDOW_DECORATIONS,
    ),
    ConfigOption::string(
        "window-title-font-family",
        "Title Font Family",
        "Font family used for the window title.",
        Window,
        "",
    ),
    ConfigOption::enumeration(
        "window-theme",
        "Window Theme",
        "Theme for window chrome.",
        Window,
        "auto",
        WINDOW_THEMES,
    ),
    ConfigOption::number(
        "window-height",
        "Initial Height",
        "Initial window height in grid cells. 0 uses the platform default.",
        Window,
        0.0,
    )
    .at_least(0.0),
    ConfigOption::number(
        "window-width",
        "Initial Width",
        "Initial window width in grid cells. 0 uses the platform default.",
        Window,
        0.0,
    )
    .at_least(0.0),
    ConfigOption::enumeration(
        "window-save-state",
        "Save Window State",
        "Restore windows, tabs, and splits on restart.",
        Window,
        "default",
        WINDOW_SAVE_STATE,
    )
    .platforms(MACOS),
    ConfigOption::boolean(
        "window-step-resize",
        "Step Resize",
        "Resize the window in cell-sized increments.",
        Window,
        false,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "window-new-tab-position",
        "New Tab Position",
        "Where new tabs are inserted.",
        Window,
        "current",
        NEW_TAB_POSITIONS,
    ),
    ConfigOption::boolean(
        "window-inherit-working-directory",
        "Inherit Working Directory",
        "New windows, tabs, and splits start in the focused terminal's directory.",
        Window,
        true,
    ),
    ConfigOption::boolean(
        "window-inherit-font-size",
        "Inherit Font Size",
        "New windows, tabs, and splits inherit the focused terminal's font size.",
        Window,
        true,
    ),
    ConfigOption::boolean(
        "maximize",
        "Start Maximized",
        "Open new windows maximized.",
        Window,
        false,
    )
    .since("1.1.0"),
    ConfigOption::boolean(
        "fullscreen",
        "Start Fullscreen",
        "Open new windows in fullscreen.",
        Window,
        false,
    ),
    ConfigOption::string(
        "title",
        "Window Title",
        "Fixed window title. Empty lets programs set it.",
        Window,
        "",
    ),
    ConfigOption::enumeration(
        "resize-overlay",
        "Resize Overlay",
        "When to show the grid size overlay while resizing.",
        Window,
        "after-first",
        RESIZE_OVERLAY,
    ),
    ConfigOption::enumeration(
        "resize-overlay-position",
        "Resize Overlay Position",
        "Where the resize overlay is drawn.",
        Window,
        "center",
        OVERLAY_POSITIONS,
    ),
    ConfigOption::duration(
        "resize-overlay-duration",
        "Resize Overlay Duration",
        "How long the resize overlay stays visible.",
        Window,
        "750ms",
    )
    .placeholder("e.g. 750ms, 1s"),
    // Cursor
    ConfigOption::color(
        "cursor-color",
        "Cursor Color",
        "Color of the cursor. Empty uses the foreground color.",
        Cursor,
        "",
    ),
    ConfigOption::color(
        "cursor-text",
        "Cursor Text",
        "Color of text under the cursor.",
        Cursor,
        "",
    ),
    ConfigOption::number(
        "cursor-opacity",
        "Cursor Opacity",
        "Opacity of the cursor.",
        Cursor,
        1.0,
    )
    .range(0.0, 1.0, 0.05),
    ConfigOption::enumeration(
        "cursor-style",
        "Cursor Style",
        "Shape of the cursor.",
        Cursor,
        "block",
        CURSOR_STYLES,
    ),
    ConfigOption::boolean(
        "cursor-style-blink",
        "Cursor Blink",
        "Whether the cursor blinks.",
        Cursor,
        true,
    ),
    ConfigOption::boolean(
        "cursor-invert-fg-bg",
        "Invert Cursor Colors",
        "Draw the cursor by swapping foreground and background.",
        Cursor,
        false,
    ),
    ConfigOption::boolean(
        "cursor-click-to-move",
        "Click to Move Cursor",
        "Alt+click moves the cursor at a shell prompt.",
        Cursor,
        true,
    ),
    ConfigOption::string(
        "adjust-cursor-thickness",
        "Cursor Thickness",
        "Adjust bar and underline cursor thickness by points or percent.",
        Cursor,
        "",
    ),
    ConfigOption::string(
        "adjust-cursor-height",
        "Cursor Height",
        "Adjust cursor height by points or percent.",
        Cursor,
        "",
    ),
    // Mouse
    ConfigOption::boolean(
        "mouse-hide-while-typing",
        "Hide While Typing",
        "Hide the mouse pointer while typing.",
        Mouse,
        false,
    ),
    ConfigOption::enumeration(
        "mouse-shift-capture",
        "Shift Capture",
        "Whether programs with mouse reporting may capture shift+click.",
        Mouse,
        "false",
        MOUSE_SHIFT_CAPTURE,
    ),
    ConfigOption::number(
        "mouse-scroll-multiplier",
        "Scroll Multiplier",
        "Multiplier applied to scroll distance.",
        Mouse,
        3.0,
    )
    .range(0.01, 100.0, 0.5),
    ConfigOption::boolean(
        "mouse-reporting",
        "Mouse Reporting",
        "Allow programs to receive mouse events.",
        Mouse,
        true,
    )
    .since("1.1.0"),
    ConfigOption::boolean(
        "focus-follows-mouse",
        "Focus Follows Mouse",
        "Focus splits when the mouse hovers them.",
        Mouse,
        false,
    ),
    ConfigOption::number(
        "click-repeat-interval",
        "Click Repeat Interval",
        "Milliseconds between clicks to count as a double click. 0 uses the system default.",
        Mouse,
        0.0,
    )
    .at_least(0.0),
    ConfigOption::boolean(
        "link-url",
        "Clickable URLs",
        "Detect URLs and open them on ctrl/cmd+click.",
        Mouse,
        true,
    ),
    ConfigOption::enumeration(
        "right-click-action",
        "Right Click Action",
        "What a right click does.",
        Mouse,
        "context-menu",
        RIGHT_CLICK_ACTIONS,
    )
    .since("1.2.0"),
    // Clipboard
    ConfigOption::enumeration(
        "clipboard-read",
        "Clipboard Read",
        "Whether programs may read the clipboard via OSC 52.",
        Clipboard,
        "ask",
        CLIPBOARD_ACCESS,
    ),
    ConfigOption::enumeration(
        "clipboard-write",
        "Clipboard Write",
        "Whether programs may write the clipboard via OSC 52.",
        Clipboard,
        "allow",
        CLIPBOARD_ACCESS,
    ),
    ConfigOption::boolean(
        "clipboard-trim-trailing-spaces",
        "Trim Trailing Spaces",
        "Remove trailing whitespace from copied text.",
        Clipboard,
        true,
    ),
    ConfigOption::boolean(
        "clipboard-paste-protection",
        "Paste Protection",
        "Confirm before pasting text that could run commands.",
        Clipboard,
        true,
    ),
    ConfigOption::boolean(
        "clipboard-paste-bracketed-safe",
        "Bracketed Paste Is Safe",
        "Treat bracketed pastes as safe for paste protection.",
        Clipboard,
        true,
    ),
    ConfigOption::boolean(
        "copy-on-select",
        "Copy on Select",
        "Copy selected text to the selection clipboard automatically.",
        Clipboard,
        false,
    ),
    ConfigOption::boolean(
        "selection-clear-on-typing",
        "Clear Selection on Typing",
        "Clear the selection when typing.",
        Clipboard,
        true,
    )
    .since("1.2.0"),
    // Keybinds
    ConfigOption::keybind(
        "keybind",
        "Keybindings",
        "Custom keybindings written as trigger=action.",
        Keybinds,
    ),
    // Shell
    ConfigOption::string(
        "command",
        "Command",
        "Command to run instead of the login shell.",
        Shell,
        "",
    )
    .placeholder("e.g. /bin/zsh"),
    ConfigOption::string(
        "initial-command",
        "Initial Command",
        "Command for the first terminal only.",
        Shell,
        "",
    )
    .since("1.1.0"),
    ConfigOption::string(
        "working-directory",
        "Working Directory",
        "Starting directory: home, inherit, or an absolute path.",
        Shell,
        "",
    )
    .placeholder("home, inherit, or a path"),
    ConfigOption::enumeration(
        "shell-integration",
        "Shell Integration",
        "Which shell integration script to inject.",
        Shell,
        "detect",
        SHELL_INTEGRATIONS,
    ),
    ConfigOption::string(
        "shell-integration-features",
        "Shell Integration Features",
        "Comma-separated features, prefix with no- to disable.",
        Shell,
        "",
    )
    .placeholder("e.g. cursor,sudo,title"),
    ConfigOption::string(
        "env",
        "Environment",
        "Extra environment variables, written as NAME=value.",
        Shell,
        "",
    )
    .repeatable()
    .since("1.2.0"),
    ConfigOption::boolean(
        "wait-after-command",
        "Wait After Command",
        "Keep the terminal open after the command exits.",
        Shell,
        false,
    ),
    ConfigOption::number(
        "abnormal-command-exit-runtime",
        "Abnormal Exit Runtime",
        "Milliseconds under which a command exit is considered abnormal.",
        Shell,
        250.0,
    )
    .at_least(0.0),
    ConfigOption::string(
        "term",
        "TERM",
        "Value of the TERM environment variable.",
        Shell,
        "xterm-ghostty",
    ),
    ConfigOption::string(
        "enquiry-response",
        "Enquiry Response",
        "Response sent to the ENQ control character.",
        Shell,
        "",
    ),
    // Application
    ConfigOption::boolean(
        "confirm-close-surface",
        "Confirm Close",
        "Ask before closing a terminal with a running process.",
        Application,
        true,
    ),
    ConfigOption::boolean(
        "quit-after-last-window-closed",
        "Quit After Last Window",
        "Exit when the last window closes.",
        Application,
        false,
    ),
    ConfigOption::duration(
        "quit-after-last-window-closed-delay",
        "Quit Delay",
        "Delay before quitting after the last window closes.",
        Application,
        "",
    )
    .placeholder("e.g. 5m")
    .platforms(LINUX),
    ConfigOption::boolean(
        "initial-window",
        "Initial Window",
        "Open a window on launch.",
        Application,
        true,
    ),
    ConfigOption::enumeration(
        "auto-update",
        "Auto Update",
        "Update checking behavior.",
        Application,
        "check",
        AUTO_UPDATE,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "auto-update-channel",
        "Update Channel",
        "Release channel to update from.",
        Application,
        "stable",
        UPDATE_CHANNELS,
    )
    .platforms(MACOS),
    ConfigOption::boolean(
        "desktop-notifications",
        "Desktop Notifications",
        "Allow programs to post desktop notifications.",
        Application,
        true,
    ),
    ConfigOption::string(
        "bell-features",
        "Bell Features",
        "How the bell is signalled, e.g. system,attention.",
        Application,
        "",
    )
    .since("1.2.0"),
    ConfigOption::duration(
        "undo-timeout",
        "Undo Timeout",
        "How long closed terminals can be restored.",
        Application,
        "5s",
    )
    .platforms(MACOS)
    .since("1.2.0"),
    ConfigOption::string(
        "config-file",
        "Additional Config Files",
        "Extra config files to load. Prefix with ? to make optional.",
        Application,
        "",
    )
    .repeatable(),
    ConfigOption::boolean(
        "config-default-files",
        "Load Default Files",
        "Load the default config file locations.",
        Application,
        true,
    ),
    // Quick terminal
    ConfigOption::enumeration(
        "quick-terminal-position",
        "Position",
        "Edge the quick terminal slides in from.",
        QuickTerminal,
        "top",
        QUICK_TERMINAL_POSITIONS,
    ),
    ConfigOption::enumeration(
        "quick-terminal-screen",
        "Screen",
        "Screen the quick terminal appears on.",
        QuickTerminal,
        "main",
        QUICK_TERMINAL_SCREENS,
    )
    .platforms(MACOS),
    ConfigOption::number(
        "quick-terminal-animation-duration",
        "Animation Duration",
        "Slide animation duration in seconds. 0 disables it.",
        QuickTerminal,
        0.2,
    )
    .range(0.0, 10.0, 0.05),
    ConfigOption::boolean(
        "quick-terminal-autohide",
        "Autohide",
        "Hide the quick terminal when it loses focus.",
        QuickTerminal,
        true,
    ),
    ConfigOption::enumeration(
        "quick-terminal-space-behavior",
        "Space Behavior",
        "Whether the quick terminal follows across Spaces.",
        QuickTerminal,
        "move",
        QUICK_TERMINAL_SPACES,
    )
    .platforms(MACOS),
    ConfigOption::string(
        "quick-terminal-size",
        "Size",
        "Size as pixels or percent, primary and optional secondary.",
        QuickTerminal,
        "",
    )
    .placeholder("e.g. 50%,500px")
    .since("1.2.0"),
    ConfigOption::enumeration(
        "quick-terminal-keyboard-interactivity",
        "Keyboard Interactivity",
        "Layer-shell keyboard interactivity.",
        QuickTerminal,
        "on-demand",
        KEYBOARD_INTERACTIVITY,
    )
    .platforms(LINUX)
    .since("1.2.0"),
    // macOS
    ConfigOption::enumeration(
        "macos-titlebar-style",
        "Titlebar Style",
        "Appearance of the titlebar.",
        Macos,
        "transparent",
        TITLEBAR_STYLES,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "macos-titlebar-proxy-icon",
        "Proxy Icon",
        "Show the working directory proxy icon in the titlebar.",
        Macos,
        "visible",
        VISIBILITY,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "macos-window-buttons",
        "Window Buttons",
        "Show the traffic light buttons.",
        Macos,
        "visible",
        VISIBILITY,
    )
    .platforms(MACOS)
    .since("1.2.0"),
    ConfigOption::enumeration(
        "macos-option-as-alt",
        "Option as Alt",
        "Treat the option key as alt.",
        Macos,
        "false",
        OPTION_AS_ALT,
    )
    .platforms(MACOS),
    ConfigOption::boolean(
        "macos-window-shadow",
        "Window Shadow",
        "Draw a shadow around the window.",
        Macos,
        true,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "macos-non-native-fullscreen",
        "Non-native Fullscreen",
        "Use a fullscreen mode that does not create a new Space.",
        Macos,
        "false",
        NON_NATIVE_FULLSCREEN,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "macos-hidden",
        "Hide from Dock",
        "Hide the app from the dock and app switcher.",
        Macos,
        "never",
        MACOS_HIDDEN,
    )
    .platforms(MACOS),
    ConfigOption::boolean(
        "macos-auto-secure-input",
        "Auto Secure Input",
        "Enable secure input at password prompts.",
        Macos,
        true,
    )
    .platforms(MACOS),
    ConfigOption::boolean(
        "macos-secure-input-indication",
        "Secure Input Indicator",
        "Show an indicator while secure input is active.",
        Macos,
        true,
    )
    .platforms(MACOS),
    ConfigOption::enumeration(
        "macos-icon",
        "App Icon",
        "Alternate application icon.",
        Macos,
        "official",
        MACOS_ICONS,
    )
    .platforms(MACOS)
    .hidden(),
    ConfigOption::enumeration(
        "macos-icon-frame",
        "Icon Frame",
        "Frame material of a custom-style icon.",
        Macos,
        "aluminum",
        ICON_FRAMES,
    )
    .platforms(MACOS)
    .hidden(),
    ConfigOption::color(
        "macos-icon-ghost-color",
        "Icon Ghost Color",
        "Ghost color of a custom-style icon.",
        Macos,
        "",
    )
    .platforms(MACOS)
    .hidden(),
    ConfigOption::string(
        "macos-icon-screen-color",
        "Icon Screen Color",
        "Comma-separated gradient colors of a custom-style icon screen.",
        Macos,
        "",
    )
    .platforms(MACOS)
    .hidden(),
    ConfigOption::boolean(
        "window-vsync",
        "VSync",
        "Synchronize rendering with the display refresh.",
        Macos,
        true,
    )
    .platforms(MACOS),
    // Linux
    ConfigOption::enumeration(
        "gtk-single-instance",
        "Single Instance",
        "Reuse a running instance for new windows.",
        Linux,
        "desktop",
        GTK_SINGLE_INSTANCE,
    )
    .platforms(LINUX),
    ConfigOption::boolean(
        "gtk-titlebar",
        "Show Titlebar",
        "Draw the GTK titlebar.",
        Linux,
        true,
    )
    .platforms(LINUX),
    ConfigOption::boolean(
        "gtk-titlebar-hide-when-maximized",
        "Hide Titlebar When Maximized",
        "Hide the titlebar of maximized windows.",
        Linux,
        false,
    )
    .platforms(LINUX)
    .since("1.1.0"),
    ConfigOption::enumeration(
        "gtk-tabs-location",
        "Tabs Location",
        "Where the tab bar is drawn.",
        Linux,
        "top",
        GTK_TAB_LOCATIONS,
    )
    .platforms(LINUX),
    ConfigOption::boolean(
        "gtk-wide-tabs",
        "Wide Tabs",
        "Tabs fill the tab bar width.",
        Linux,
        true,
    )
    .platforms(LINUX),
    ConfigOption::enumeration(
        "adw-toolbar-style",
        "Toolbar Style",
        "libadwaita toolbar style.",
        Linux,
        "raised",
        TOOLBAR_STYLES,
    )
    .platforms(LINUX),
    ConfigOption::boolean(
        "gtk-adwaita",
        "Use libadwaita",
        "Use libadwaita widgets.",
        Linux,
        true,
    )
    .platforms(LINUX)
    .deprecated()
    .note("libadwaita is always used since 1.1.0"),
    ConfigOption::string(
        "gtk-custom-css",
        "Custom CSS",
        "Extra GTK CSS files to load.",
        Linux,
        "",
    )
    .platforms(LINUX)
    .repeatable(),
    ConfigOption::enumeration(
        "linux-cgroup",
        "Cgroup Isolation",
        "Place each terminal in its own cgroup.",
        Linux,
        "single-instance",
        CGROUP_MODES,
    )
    .platforms(LINUX),
    ConfigOption::string(
        "x11-instance-name",
        "X11 Instance Name",
        "WM_CLASS instance name on X11.",
        Linux,
        "",
    )
    .platforms(LINUX),
    ConfigOption::enumeration(
        "async-backend",
        "Async Backend",
        "Event loop backend.",
        Linux,
        "auto",
        ASYNC_BACKENDS,
    )
    .platforms(LINUX)
    .since("1.2.0"),
    // Advanced
    ConfigOption::number(
        "scrollback-limit",
        "Scrollback Limit",
        "Scrollback buffer size in bytes.",
        Advanced,
        10_000_000.0,
    )
    .at_least(0.0),
    ConfigOption::number(
        "image-storage-limit",
        "Image Storage Limit",
        "Bytes of image data kept per terminal.",
        Advanced,
        320_000_000.0,
    )
    .range(0.0, 4_294_967_295.0, 1_000_000.0),
    ConfigOption::string(
        "custom-shader",
        "Custom Shaders",
        "GLSL post-processing shader files.",
        Advanced,
        "",
    )
    .repeatable(),
    ConfigOption::enumeration(
        "custom-shader-animation",
        "Shader Animation",
        "When custom shaders animate.",
        Advanced,
        "true",
        SHADER_ANIMATION,
    ),
    ConfigOption::enumeration(
        "osc-color-report-format",
        "Color Report Format",
        "Format of OSC color query responses.",
        Advanced,
        "16-bit",
        COLOR_REPORT_FORMATS,
    ),
    ConfigOption::boolean(
        "vt-kam-allowed",
        "Allow KAM",
        "Allow the keyboard action mode escape sequence.",
        Advanced,
        false,
    ),
    ConfigOption::boolean(
        "title-report",
        "Title Report",
        "Allow programs to query the window title.",
        Advanced,
        false,
    ),
];
