//! Tunable parameters for the particle field.
//!
//! The field shipped in two near-duplicate flavors that differed only in
//! palette size, easing exponent, damping divisor, and glow. Both collapse
//! into one [`FieldConfig`]; [`FieldConfig::default`] is the enhanced flavor
//! and [`FieldConfig::classic`] the original one.

use serde::Deserialize;

use super::theme::Palette;

/// Falloff curve applied to normalized forces and link closeness.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
	/// Pass the value through unchanged.
	Linear,
	/// Square the value: steeper falloff toward the far edge.
	Quadratic,
}

impl Easing {
	/// Apply the curve to a value in `[0, 1]`.
	pub fn apply(self, t: f64) -> f64 {
		match self {
			Easing::Linear => t,
			Easing::Quadratic => t * t,
		}
	}
}

/// Complete configuration for one mounted particle field.
///
/// Deserializes from JSON with every field optional, so hosts can override
/// just the parameters they care about.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles, fixed for the life of the simulation.
	pub particle_count: usize,
	/// Pointer distance within which particles are pushed away.
	pub repulsion_radius: f64,
	/// Multiplier on the repulsion displacement.
	pub force_scale: f64,
	/// Falloff curve of the repulsion force.
	pub easing: Easing,
	/// Divisor of the per-axis return step toward rest; larger is slower.
	pub damping_divisor: f64,
	/// Pair distance under which a connecting line is drawn.
	pub connection_threshold: f64,
	/// Falloff curve of link opacity as pairs approach the threshold.
	pub link_fade: Easing,
	/// Smallest particle draw radius.
	pub size_min: f64,
	/// Largest particle draw radius.
	pub size_max: f64,
	/// Lower bound of the randomized particle alpha band.
	pub alpha_min: f64,
	/// Upper bound of the randomized particle alpha band.
	pub alpha_max: f64,
	/// Amplitude of the sinusoidal drift while relaxing; zero disables it.
	pub drift_amplitude: f64,
	/// Draw a soft radial glow behind each particle.
	pub glow: bool,
	/// Hue palette particles are colored from.
	pub palette: Palette,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 100,
			repulsion_radius: 300.0,
			force_scale: 2.0,
			easing: Easing::Quadratic,
			damping_divisor: 20.0,
			connection_threshold: 150.0,
			link_fade: Easing::Quadratic,
			size_min: 2.0,
			size_max: 5.0,
			alpha_min: 0.2,
			alpha_max: 0.7,
			drift_amplitude: 0.4,
			glow: true,
			palette: Palette::Aurora,
		}
	}
}

impl FieldConfig {
	/// The original two-hue flavor: linear falloffs, faster return, no glow.
	pub fn classic() -> Self {
		Self {
			force_scale: 1.0,
			easing: Easing::Linear,
			damping_divisor: 10.0,
			link_fade: Easing::Linear,
			size_min: 1.0,
			size_max: 6.0,
			drift_amplitude: 0.0,
			glow: false,
			palette: Palette::Classic,
			..Self::default()
		}
	}
}
