//! The per-particle state record and its randomized construction.

use std::f64::consts::TAU;

use super::config::FieldConfig;
use super::theme::Color;

/// One simulated point.
///
/// Only `x`, `y`, and `phase` mutate after spawn; the rest anchor, size,
/// density, and color are frozen for the life of the particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Current displayed x position.
	pub x: f64,
	/// Current displayed y position.
	pub y: f64,
	/// Rest anchor x, assigned once at spawn.
	pub base_x: f64,
	/// Rest anchor y, assigned once at spawn.
	pub base_y: f64,
	/// Draw radius.
	pub size: f64,
	/// Responsiveness coefficient to pointer repulsion.
	pub density: f64,
	/// Fill color, hue from the palette with a randomized alpha.
	pub color: Color,
	/// Phase angle driving the drift while relaxing.
	pub phase: f64,
	/// Per-frame phase increment.
	pub phase_velocity: f64,
}

impl Particle {
	/// Spawn one particle at a uniformly random point inside the surface
	/// bounds. Deterministic for a given `(index, seed)` pair, so a fixed
	/// seed reproduces the whole field.
	pub fn spawn(index: usize, seed: f64, width: f64, height: f64, config: &FieldConfig) -> Self {
		let s = seed + index as f64;
		let x = pseudo_random(s * 1.1) * width;
		let y = pseudo_random(s * 2.3) * height;
		let size = config.size_min + pseudo_random(s * 3.7) * (config.size_max - config.size_min);
		let density = 1.0 + pseudo_random(s * 4.1) * 29.0;

		let hues = config.palette.colors();
		let hue = hues[(pseudo_random(s * 5.3) * hues.len() as f64) as usize % hues.len()];
		let alpha = config.alpha_min + pseudo_random(s * 6.7) * (config.alpha_max - config.alpha_min);

		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			size,
			density,
			color: hue.with_alpha(alpha),
			phase: pseudo_random(s * 7.9) * TAU,
			phase_velocity: 0.02 + pseudo_random(s * 8.3) * 0.04,
		}
	}
}

/// Simple deterministic pseudo-random value in `[0, 1)`.
pub(crate) fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + 78.233).sin() * 43758.5453;
	x - x.floor()
}

#[cfg(test)]
mod tests {
	use super::*;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	#[test]
	fn spawns_inside_bounds_at_rest() {
		let config = FieldConfig::default();
		for i in 0..200 {
			let p = Particle::spawn(i, 17.5, W, H, &config);
			assert!((0.0..W).contains(&p.x));
			assert!((0.0..H).contains(&p.y));
			assert_eq!(p.x, p.base_x);
			assert_eq!(p.y, p.base_y);
		}
	}

	#[test]
	fn attributes_fall_in_configured_ranges() {
		let config = FieldConfig::default();
		for i in 0..200 {
			let p = Particle::spawn(i, 3.25, W, H, &config);
			assert!(p.size >= config.size_min && p.size < config.size_max);
			assert!(p.density >= 1.0 && p.density < 30.0);
			assert!(p.color.a >= config.alpha_min && p.color.a < config.alpha_max);
		}
	}

	#[test]
	fn color_hue_comes_from_palette() {
		let config = FieldConfig::classic();
		for i in 0..100 {
			let p = Particle::spawn(i, 9.125, W, H, &config);
			let in_palette = config
				.palette
				.colors()
				.iter()
				.any(|c| (c.r, c.g, c.b) == (p.color.r, p.color.g, p.color.b));
			assert!(in_palette);
		}
	}

	#[test]
	fn same_seed_reproduces_field() {
		let config = FieldConfig::default();
		let a = Particle::spawn(7, 123.5, W, H, &config);
		let b = Particle::spawn(7, 123.5, W, H, &config);
		assert_eq!(a.x, b.x);
		assert_eq!(a.y, b.y);
		assert_eq!(a.size, b.size);
		assert_eq!(a.density, b.density);
		assert_eq!(a.color, b.color);
	}

	#[test]
	fn different_seed_moves_particles() {
		let config = FieldConfig::default();
		let a = Particle::spawn(7, 123.25, W, H, &config);
		let b = Particle::spawn(7, 456.75, W, H, &config);
		assert!(a.x != b.x || a.y != b.y);
	}

	#[test]
	fn pseudo_random_stays_in_unit_interval() {
		for i in 0..1000 {
			let v = pseudo_random(i as f64 * 0.713);
			assert!((0.0..1.0).contains(&v));
		}
	}
}
