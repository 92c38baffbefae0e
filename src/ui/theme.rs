//! Theme management and ANSI escape sequence generation.
//!
//! Themes are plain TOML documents embedded in the binary and selected by
//! name on the command line. Colors are hex strings turned into 24-bit ANSI
//! sequences at draw time.
//!
//! # Built-in Themes
//!
//! - `phogo-dark`: Green title bar on the terminal's own background (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#FFFDF5"
//! title_bg = "#25A065"
//! text_normal = "#DDDDDD"
//! text_dim = "#777777"
//! border = "#444444"
//! selection_fg = "#FFFDF5"
//! selection_bg = "#25A065"
//! match_highlight_fg = "#1E1E1E"
//! match_highlight_bg = "#E5C07B"
//! prompt_border = "#25A065"
//! empty_state_fg = "#61AFEF"
//! status_fg = "#61AFEF"
//! key_fg = "#25A065"
//! directory_fg = "#99CCFF"
//! error_fg = "#FF5555"
//! ```
//!
//! # Example
//!
//! ```rust
//! use phogo::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.title_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};

/// Name of the theme used when none (or an unknown one) is requested.
pub const DEFAULT_THEME: &str = "phogo-dark";

/// Names accepted by [`Theme::from_name`].
pub const THEME_NAMES: [&str; 3] = ["phogo-dark", "catppuccin-mocha", "catppuccin-latte"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4"). Optional fields default to
/// `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text color.
    pub title_fg: String,
    /// Optional title bar background color.
    #[serde(default)]
    pub title_bg: Option<String>,

    pub text_normal: String,
    /// Dimmed text color (subtitles, key descriptions).
    pub text_dim: String,

    /// Separator line color.
    pub border: String,

    pub selection_fg: String,
    pub selection_bg: String,

    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Border of the search/rename/delete prompt box.
    pub prompt_border: String,

    pub empty_state_fg: String,

    /// Status message color.
    pub status_fg: String,
    /// Key names in the footer hints.
    pub key_fg: String,
    /// Folder rows.
    pub directory_fg: String,
    /// Render failures and error messages.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phogo::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "phogo-dark" => include_str!("../../themes/phogo-dark.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a built-in theme, falling back to the default for unknown names.
    #[must_use]
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme = name, "unknown theme, using default");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`phogo-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in phogo-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses() {
        for name in THEME_NAMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::resolve(Some("solarized")).name, DEFAULT_THEME);
        assert_eq!(Theme::resolve(None).name, DEFAULT_THEME);
    }

    #[test]
    fn hex_colors_become_truecolor_sequences() {
        assert_eq!(Theme::fg("#25A065"), "\u{1b}[38;2;37;160;101m");
        assert_eq!(Theme::bg("FFFDF5"), "\u{1b}[48;2;255;253;245m");
        assert_eq!(Theme::fg("oops"), "\u{1b}[38;2;255;255;255m");
    }
}
