//! # Theme System
//!
//! Provides the colour themes for the picture book.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Rendering
//! code references theme fields instead of hardcoding
//! `ratatui::style::Color` values. The active theme can be cycled at runtime
//! with `t`; the choice is persisted in the config file.
//!
//! ## Built-in Themes
//!
//! - **Barnyard** (default) - warm, light paper-and-wood look
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

/// All colors used by the UI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    // -- Background colors --
    /// Window background behind the title and button row.
    pub bg: Color,
    /// Background of the image viewport; transparent pixels blend into it.
    pub image_bg: Color,
    /// Background of the fact text viewport.
    pub text_bg: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted text (placeholders, footer, idle borders).
    pub fg_dim: Color,

    // -- Accent colors --
    /// Title text and focused borders.
    pub accent: Color,
    /// Highlighted text such as the fact card heading.
    pub secondary: Color,

    // -- Buttons --
    pub button_bg: Color,
    /// Button background while the mouse pointer is over it.
    pub button_hover: Color,
    pub button_border: Color,

    // -- Semantic status colors --
    /// Missing or unreadable image message.
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycling order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Barnyard).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(index + 1) % BUILT_IN_THEMES.len()]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Barnyard (default)
    Theme {
        name: "Barnyard",
        bg: Color::Rgb(255, 245, 230),
        image_bg: Color::Rgb(255, 255, 255),
        text_bg: Color::Rgb(255, 250, 240),
        fg: Color::Rgb(50, 35, 20),
        fg_dim: Color::Rgb(128, 128, 128),
        accent: Color::Rgb(205, 105, 30),
        secondary: Color::Rgb(170, 80, 20),
        button_bg: Color::Rgb(255, 230, 200),
        button_hover: Color::Rgb(255, 210, 170),
        button_border: Color::Rgb(150, 100, 50),
        error: Color::Rgb(190, 40, 40),
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),             // base
        image_bg: Color::Rgb(24, 24, 37),       // mantle
        text_bg: Color::Rgb(30, 30, 46),        // base
        fg: Color::Rgb(205, 214, 244),          // text
        fg_dim: Color::Rgb(108, 112, 134),      // overlay0
        accent: Color::Rgb(137, 180, 250),      // blue
        secondary: Color::Rgb(249, 226, 175),   // yellow
        button_bg: Color::Rgb(49, 50, 68),      // surface0
        button_hover: Color::Rgb(69, 71, 90),   // surface1
        button_border: Color::Rgb(250, 179, 135), // peach
        error: Color::Rgb(243, 139, 168),       // red
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        image_bg: Color::Rgb(33, 34, 44),
        text_bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        button_bg: Color::Rgb(68, 71, 90),
        button_hover: Color::Rgb(98, 114, 164),
        button_border: Color::Rgb(189, 147, 249), // purple
        error: Color::Rgb(255, 85, 85),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        image_bg: Color::Rgb(59, 66, 82),
        text_bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        button_bg: Color::Rgb(67, 76, 94),
        button_hover: Color::Rgb(76, 86, 106),
        button_border: Color::Rgb(208, 135, 112), // orange
        error: Color::Rgb(191, 97, 106),
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        image_bg: Color::Rgb(29, 32, 33),
        text_bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),   // blue
        secondary: Color::Rgb(250, 189, 47), // yellow
        button_bg: Color::Rgb(60, 56, 54),
        button_hover: Color::Rgb(80, 73, 69),
        button_border: Color::Rgb(254, 128, 25), // orange
        error: Color::Rgb(251, 73, 52),
    },
];
