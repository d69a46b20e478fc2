//! Presentation adapter: number formatting rules and terminal color modes.
//!
//! Formatting is a boundary concern; nothing upstream rounds or collapses
//! undefined values. In particular, an undefined metric renders as the
//! caller-supplied sentinel, never "0" or "NaN".

use colored::control;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org, then CLICOLOR / CLICOLOR_FORCE
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, uncolored output.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    pub fn apply(&self) {
        control::set_override(self.color.should_use_color());
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}

/// Format a currency amount: 0 decimal places at or above 1000, 2 below.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if value.abs() >= 1000.0 {
        format!("{symbol}{value:.0}")
    } else {
        format!("{symbol}{value:.2}")
    }
}

/// Format a percentage to 1 decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a payback period in months to 1 decimal place.
pub fn format_months(value: f64) -> String {
    format!("{value:.1} mo")
}

/// Render an optional metric, substituting the sentinel for `None`.
pub fn format_optional<F>(value: Option<f64>, sentinel: &str, format: F) -> String
where
    F: FnOnce(f64) -> String,
{
    match value {
        Some(v) => format(v),
        None => sentinel.to_string(),
    }
}
