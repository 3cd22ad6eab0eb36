//! Configuration for trailspace.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! [highlight]
//! enabled = true
//!
//! [theme]
//! background = "#1e1e1e"
//!
//! [theme.styles.trailing-whitespace]
//! bg = "#5f0000"
//! fg = "#ffffff"
//! ```
//!
//! Every key is optional. Without a `trailing-whitespace` style, the highlight
//! is a shade of the theme background: lighter on dark backgrounds, darker on
//! light ones.
//!
//! # Configuration Files
//!
//! When no path is given, trailspace reads
//! `$XDG_CONFIG_HOME/trailspace/config.toml` (or
//! `~/.config/trailspace/config.toml`) if it exists.

pub mod error;
pub mod theme;


use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use error::{ConfigError, Result};
pub use theme::{Color, HighlightStyle};

/// Theme style key for trailing-whitespace highlights.
pub const TRAILING_WHITESPACE: &str = "trailing-whitespace";

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
	pub highlight: HighlightConfig,
	pub theme: ThemeConfig,
}

/// The `[highlight]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
	/// Whether trailing whitespace is tracked at all. Unset means enabled.
	pub enabled: Option<bool>,
}

/// The `[theme]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
	/// Editor background, used to derive the fallback highlight.
	pub background: Option<Color>,
	/// Named styles.
	pub styles: BTreeMap<String, HighlightStyle>,
}

impl Config {
	/// Parses configuration from a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Loads configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}

	/// Loads the user configuration file if one exists.
	///
	/// Returns the default configuration when there is no file.
	pub fn load_default() -> Result<Self> {
		match Self::default_path() {
			Some(path) if path.is_file() => Self::load(path),
			_ => Ok(Self::default()),
		}
	}

	/// Returns the user configuration path.
	pub fn default_path() -> Option<PathBuf> {
		let base = std::env::var_os("XDG_CONFIG_HOME")
			.filter(|v| !v.is_empty())
			.map(PathBuf::from)
			.or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
		Some(base.join("trailspace").join("config.toml"))
	}

	/// Merges another config into this one.
	///
	/// Values set in `other` override values in `self`.
	pub fn merge(&mut self, other: Config) {
		if other.highlight.enabled.is_some() {
			self.highlight.enabled = other.highlight.enabled;
		}
		if other.theme.background.is_some() {
			self.theme.background = other.theme.background;
		}
		self.theme.styles.extend(other.theme.styles);
	}

	/// Returns true unless highlighting was switched off.
	pub fn highlight_enabled(&self) -> bool {
		self.highlight.enabled.unwrap_or(true)
	}

	/// Returns the style for trailing-whitespace spans.
	pub fn highlight_style(&self) -> HighlightStyle {
		if let Some(style) = self.theme.styles.get(TRAILING_WHITESPACE) {
			return *style;
		}
		let background = self.theme.background.unwrap_or(Color::WHITE);
		HighlightStyle::background(background.contrast_shade())
	}
}
