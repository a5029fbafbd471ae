//! # Output Configuration
//!
//! Controls how the CLI reports a run: whether colors and emojis are used,
//! and the small set of styles the commands share.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::fmt::Display;

use console::{style, StyledObject};

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color` flag
    /// (`always`, `never` or `auto`).
    ///
    /// In auto mode, colors are disabled when `NO_COLOR` is set, when
    /// `CLICOLOR=0`, when `TERM=dumb`, or when stdout is not a TTY and
    /// `CLICOLOR_FORCE` is not set.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Style for things that went well, e.g. "no changes"
    pub fn success<D: Display>(&self, text: D) -> StyledObject<D> {
        style(text).green().force_styling(self.use_color)
    }

    /// Style for changed documents
    pub fn changed<D: Display>(&self, text: D) -> StyledObject<D> {
        style(text).yellow().force_styling(self.use_color)
    }

    /// Style for secondary details such as paths and counts
    pub fn dim<D: Display>(&self, text: D) -> StyledObject<D> {
        style(text).dim().force_styling(self.use_color)
    }

    /// Style for headings such as project ids
    pub fn bold<D: Display>(&self, text: D) -> StyledObject<D> {
        style(text).bold().force_styling(self.use_color)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// The emoji when colors are enabled, the plain text alternative otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// `"1 document"`, `"2 documents"`
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_flags() {
        assert!(OutputConfig::from_env_and_flag("always").use_color);
        assert!(OutputConfig::from_env_and_flag("ALWAYS").use_color);
        assert!(!OutputConfig::from_env_and_flag("never").use_color);
    }

    #[test]
    fn test_emoji_helper() {
        assert_eq!(emoji(&OutputConfig::with_color(), "✅", "[OK]"), "✅");
        assert_eq!(emoji(&OutputConfig::without_color(), "✅", "[OK]"), "[OK]");
    }

    #[test]
    fn test_styles_are_plain_without_color() {
        let out = OutputConfig::without_color();
        assert_eq!(out.success("no changes").to_string(), "no changes");
        assert_eq!(out.bold("core").to_string(), "core");
    }

    #[test]
    fn test_styles_use_escape_codes_with_color() {
        let out = OutputConfig::with_color();
        assert!(out.changed("pom.xml").to_string().contains("\u{1b}["));
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "document", "documents"), "1 document");
        assert_eq!(plural(0, "document", "documents"), "0 documents");
        assert_eq!(plural(3, "dependency", "dependencies"), "3 dependencies");
    }
}
