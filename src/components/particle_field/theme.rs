//! Colors and palettes for the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel, 0-255.
	pub r: u8,
	/// Green channel, 0-255.
	pub g: u8,
	/// Blue channel, 0-255.
	pub b: u8,
	/// Alpha, 0.0-1.0.
	pub a: f64,
}

impl Color {
	/// Fully opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from RGB channels and an explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same hue with a replaced alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors.
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// CSS color string: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fixed dark backdrop the field is drawn against every frame.
pub const BACKGROUND: Color = Color::rgb(10, 10, 20);

/// Two-hue palette of the original field: blue and red.
const CLASSIC: [Color; 2] = [Color::rgb(59, 130, 246), Color::rgb(239, 68, 68)];

/// Four-hue palette of the enhanced field: blue, red, purple, cyan.
const AURORA: [Color; 4] = [
	Color::rgb(59, 130, 246),
	Color::rgb(239, 68, 68),
	Color::rgb(168, 85, 247),
	Color::rgb(34, 211, 238),
];

/// Hue palette a particle's color is drawn from at spawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
	/// Blue/red pair.
	Classic,
	/// Blue/red/purple/cyan quartet.
	Aurora,
}

impl Palette {
	/// The hues in this palette.
	pub fn colors(self) -> &'static [Color] {
		match self {
			Palette::Classic => &CLASSIC,
			Palette::Aurora => &AURORA,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formats_opaque_as_hex() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
	}

	#[test]
	fn css_formats_translucent_as_rgba() {
		assert_eq!(
			Color::rgba(239, 68, 68, 0.5).to_css(),
			"rgba(239, 68, 68, 0.5)"
		);
	}

	#[test]
	fn lerp_hits_both_endpoints() {
		let a = Color::rgba(0, 0, 0, 0.0);
		let b = Color::rgba(255, 255, 255, 1.0);
		assert_eq!(a.lerp(b, 0.0), a);
		assert_eq!(a.lerp(b, 1.0), b);
	}

	#[test]
	fn palette_sizes() {
		assert_eq!(Palette::Classic.colors().len(), 2);
		assert_eq!(Palette::Aurora.colors().len(), 4);
	}
}
