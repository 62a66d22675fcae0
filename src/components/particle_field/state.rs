//! Shared simulation state for one mounted field.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop. The pointer and surface fields are written asynchronously
//! by the input and resize listeners; neither touches particle positions, so
//! the worst interleaving is a one-frame-stale read.

use super::config::FieldConfig;
use super::forces;
use super::links::{self, Link};
use super::particle::Particle;

/// All state owned by one renderer instance.
pub struct FieldState {
	/// Ordered particle sequence; order defines pairwise iteration.
	pub particles: Vec<Particle>,
	/// Last-known pointer x, origin before the first input event.
	pub pointer_x: f64,
	/// Last-known pointer y.
	pub pointer_y: f64,
	/// Current drawable width, always at least 1.
	pub width: f64,
	/// Current drawable height, always at least 1.
	pub height: f64,
	/// Segments computed by the latest tick, reused across frames.
	pub links: Vec<Link>,
}

impl FieldState {
	/// Seed a field from the current surface bounds. The particle count is
	/// fixed here and never changes afterwards.
	pub fn new(config: &FieldConfig, width: f64, height: f64, seed: f64) -> Self {
		let width = width.max(1.0);
		let height = height.max(1.0);
		let particles = (0..config.particle_count)
			.map(|i| Particle::spawn(i, seed, width, height, config))
			.collect();

		Self {
			particles,
			pointer_x: 0.0,
			pointer_y: 0.0,
			width,
			height,
			links: Vec::new(),
		}
	}

	/// Overwrite the pointer position. Called from the input listener.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer_x = x;
		self.pointer_y = y;
	}

	/// Record new surface dimensions, clamped to 1x1 so a transient zero or
	/// negative size during a resize burst cannot break drawing. Particles
	/// are not reseeded; any now outside the bounds relax back into view.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(1.0);
		self.height = height.max(1.0);
	}

	/// Advance the simulation one tick: update every particle against the
	/// current pointer, then rebuild the proximity graph from the post-update
	/// positions.
	pub fn tick(&mut self, config: &FieldConfig) {
		for particle in &mut self.particles {
			forces::update(particle, self.pointer_x, self.pointer_y, config);
		}
		links::collect_links(&self.particles, config, &mut self.links);
	}
}
