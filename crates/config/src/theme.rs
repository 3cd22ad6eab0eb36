//! Colors and highlight styles.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Scale factor used by [`Color::brighter`] and [`Color::darker`].
const SHADE_FACTOR: f64 = 0.7;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	pub const BLACK: Self = Self::rgb(0, 0, 0);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parses a hex color (`#RGB` or `#RRGGBB`).
	pub fn parse(value: &str) -> Result<Self> {
		let value = value.trim();
		let hex = value
			.strip_prefix('#')
			.ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;
		let err = || ConfigError::InvalidColor(format!("#{hex}"));
		if !hex.is_ascii() {
			return Err(err());
		}

		let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
		match hex.len() {
			3 => Ok(Self::rgb(
				channel(&hex[0..1].repeat(2))?,
				channel(&hex[1..2].repeat(2))?,
				channel(&hex[2..3].repeat(2))?,
			)),
			6 => Ok(Self::rgb(
				channel(&hex[0..2])?,
				channel(&hex[2..4])?,
				channel(&hex[4..6])?,
			)),
			_ => Err(err()),
		}
	}

	/// Returns true when the mean of the channels is below the midpoint.
	pub fn is_dark(self) -> bool {
		(u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) / 3 < 128
	}

	/// Returns a lighter variant of this color.
	///
	/// Pure black becomes a dim gray, and tiny channel values are lifted
	/// before scaling so they do not stay stuck near zero.
	pub fn brighter(self) -> Self {
		let floor = (1.0 / (1.0 - SHADE_FACTOR)) as u8;
		if self == Self::BLACK {
			return Self::rgb(floor, floor, floor);
		}
		let lift = |c: u8| {
			let c = if c > 0 && c < floor { floor } else { c };
			(f64::from(c) / SHADE_FACTOR).min(255.0) as u8
		};
		Self::rgb(lift(self.r), lift(self.g), lift(self.b))
	}

	/// Returns a darker variant of this color.
	pub fn darker(self) -> Self {
		let dim = |c: u8| (f64::from(c) * SHADE_FACTOR) as u8;
		Self::rgb(dim(self.r), dim(self.g), dim(self.b))
	}

	/// Shifts the color away from its own brightness: brighter when dark,
	/// darker otherwise.
	pub fn contrast_shade(self) -> Self {
		if self.is_dark() { self.brighter() } else { self.darker() }
	}
}

impl FromStr for Color {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl TryFrom<String> for Color {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self> {
		Self::parse(&value)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Colors applied to a highlighted span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct HighlightStyle {
	/// Background color.
	#[serde(default)]
	pub bg: Option<Color>,
	/// Foreground color.
	#[serde(default)]
	pub fg: Option<Color>,
}

impl HighlightStyle {
	/// A style that only sets the background.
	pub const fn background(bg: Color) -> Self {
		Self { bg: Some(bg), fg: None }
	}
}
