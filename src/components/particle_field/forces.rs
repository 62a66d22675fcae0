//! Per-frame force update: pointer repulsion and rest-seeking relaxation.

use super::config::FieldConfig;
use super::particle::Particle;

/// Advance one particle by one tick against the current pointer position.
///
/// Inside the repulsion radius the particle is displaced directly away from
/// the pointer, proportional to its density and the eased proximity. Outside
/// it, each axis relaxes toward the rest anchor by `1/damping_divisor` of the
/// remaining offset per tick, optionally overlaid with a small sinusoidal
/// drift so the return does not read as a straight line.
pub fn update(particle: &mut Particle, pointer_x: f64, pointer_y: f64, config: &FieldConfig) {
	let dx = pointer_x - particle.x;
	let dy = pointer_y - particle.y;
	let distance = (dx * dx + dy * dy).sqrt();

	// Pointer exactly on the particle: the direction is undefined, leave it
	// unmoved this frame rather than divide by zero.
	if distance == 0.0 {
		return;
	}

	if distance < config.repulsion_radius {
		let (ux, uy) = (dx / distance, dy / distance);
		let force = (config.repulsion_radius - distance) / config.repulsion_radius;
		let eased = config.easing.apply(force);
		particle.x -= ux * eased * particle.density * config.force_scale;
		particle.y -= uy * eased * particle.density * config.force_scale;
	} else {
		if particle.x != particle.base_x {
			particle.x -= (particle.x - particle.base_x) / config.damping_divisor;
		}
		if particle.y != particle.base_y {
			particle.y -= (particle.y - particle.base_y) / config.damping_divisor;
		}
		if config.drift_amplitude > 0.0 {
			particle.phase += particle.phase_velocity;
			particle.x += particle.phase.sin() * config.drift_amplitude;
			particle.y += particle.phase.cos() * config.drift_amplitude;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::theme::Color;

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			base_x: x,
			base_y: y,
			size: 3.0,
			density: 10.0,
			color: Color::rgba(59, 130, 246, 0.5),
			phase: 0.0,
			phase_velocity: 0.03,
		}
	}

	fn far_pointer() -> (f64, f64) {
		(10_000.0, 10_000.0)
	}

	#[test]
	fn coincident_pointer_leaves_particle_unmoved() {
		let config = FieldConfig::default();
		let mut p = particle_at(100.0, 100.0);
		update(&mut p, 100.0, 100.0, &config);
		assert_eq!((p.x, p.y), (100.0, 100.0));
		assert!(p.x.is_finite() && p.y.is_finite());
	}

	#[test]
	fn near_coincident_pointer_stays_finite() {
		let config = FieldConfig::default();
		let mut p = particle_at(100.0, 100.0);
		update(&mut p, 100.0 + 1e-12, 100.0, &config);
		assert!(p.x.is_finite() && p.y.is_finite());
	}

	#[test]
	fn repulsion_moves_particle_away_from_pointer() {
		let config = FieldConfig::default();
		let mut p = particle_at(400.0, 300.0);
		let (px, py) = (410.0, 320.0);
		let before = ((p.x - px).powi(2) + (p.y - py).powi(2)).sqrt();
		update(&mut p, px, py, &config);
		let after = ((p.x - px).powi(2) + (p.y - py).powi(2)).sqrt();
		assert!(after > before);
		// Displacement points along the pointer-to-particle direction.
		let disp = (p.x - 400.0, p.y - 300.0);
		let outward = (400.0 - px, 300.0 - py);
		assert!(disp.0 * outward.0 + disp.1 * outward.1 > 0.0);
	}

	#[test]
	fn repulsion_scales_with_density() {
		let config = FieldConfig::default();
		let mut light = particle_at(400.0, 300.0);
		let mut heavy = particle_at(400.0, 300.0);
		light.density = 5.0;
		heavy.density = 25.0;
		update(&mut light, 450.0, 300.0, &config);
		update(&mut heavy, 450.0, 300.0, &config);
		assert!((heavy.x - 400.0).abs() > (light.x - 400.0).abs());
	}

	#[test]
	fn quadratic_easing_is_weaker_than_linear_at_mid_range() {
		let mut linear_cfg = FieldConfig::classic();
		linear_cfg.force_scale = 1.0;
		let mut quad_cfg = FieldConfig::default();
		quad_cfg.force_scale = 1.0;

		let mut a = particle_at(0.0, 0.0);
		let mut b = particle_at(0.0, 0.0);
		// Distance 150 of 300: force 0.5 linear, 0.25 squared.
		update(&mut a, 150.0, 0.0, &linear_cfg);
		update(&mut b, 150.0, 0.0, &quad_cfg);
		assert!(b.x.abs() < a.x.abs());
	}

	#[test]
	fn relaxation_decays_by_damping_factor() {
		let config = FieldConfig::classic();
		let mut p = particle_at(100.0, 200.0);
		p.x = 180.0;
		let (px, py) = far_pointer();
		update(&mut p, px, py, &config);
		// One tick removes 1/10 of the 80 unit offset.
		assert!((p.x - 172.0).abs() < 1e-9);
		assert_eq!(p.y, 200.0);
	}

	#[test]
	fn rest_convergence_is_strictly_decreasing() {
		let config = FieldConfig::classic();
		let mut p = particle_at(100.0, 100.0);
		p.x = 200.0;
		p.y = 40.0;
		let (px, py) = far_pointer();
		let mut offset = ((p.x - p.base_x).powi(2) + (p.y - p.base_y).powi(2)).sqrt();
		for _ in 0..50 {
			update(&mut p, px, py, &config);
			let next = ((p.x - p.base_x).powi(2) + (p.y - p.base_y).powi(2)).sqrt();
			assert!(next < offset);
			offset = next;
		}
		assert!(offset < 1.0);
	}

	#[test]
	fn drift_keeps_relaxed_particle_near_rest() {
		let config = FieldConfig::default();
		let mut p = particle_at(500.0, 500.0);
		let (px, py) = far_pointer();
		for _ in 0..500 {
			update(&mut p, px, py, &config);
			assert!(p.x.is_finite() && p.y.is_finite());
		}
		// Drift is bounded by amplitude times the damping divisor.
		let bound = config.drift_amplitude * config.damping_divisor * 2.0;
		assert!((p.x - p.base_x).abs() < bound);
		assert!((p.y - p.base_y).abs() < bound);
	}
}
