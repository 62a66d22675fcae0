//! Proximity graph: the distance-thresholded line segments between particles.
//!
//! The scan is a deliberate O(n²) all-pairs pass. At the canonical count of
//! 100 particles that is ~5,000 distance checks per frame, well under budget;
//! replacing it with a spatial structure would change candidate-pair order
//! and therefore draw order, so it stays as-is.

use super::config::FieldConfig;
use super::particle::Particle;
use super::theme::Color;

/// One connecting segment, ready to draw.
#[derive(Clone, Debug)]
pub struct Link {
	/// Endpoint A x.
	pub x1: f64,
	/// Endpoint A y.
	pub y1: f64,
	/// Endpoint B x.
	pub x2: f64,
	/// Endpoint B y.
	pub y2: f64,
	/// Endpoint A's particle color.
	pub color_a: Color,
	/// Endpoint B's particle color.
	pub color_b: Color,
	/// Stroke opacity from the eased closeness, in `(0, 0.5]`.
	pub alpha: f64,
}

/// Segment between two particles, or `None` at or beyond the threshold.
pub fn link_between(a: &Particle, b: &Particle, config: &FieldConfig) -> Option<Link> {
	let dx = a.x - b.x;
	let dy = a.y - b.y;
	let distance = (dx * dx + dy * dy).sqrt();
	if distance >= config.connection_threshold {
		return None;
	}

	let closeness = 1.0 - distance / config.connection_threshold;
	Some(Link {
		x1: a.x,
		y1: a.y,
		x2: b.x,
		y2: b.y,
		color_a: a.color,
		color_b: b.color,
		alpha: config.link_fade.apply(closeness) * 0.5,
	})
}

/// Scan every unordered pair in sequence order, collecting segments into the
/// caller's buffer. The buffer is cleared first so it can be reused across
/// frames without reallocating.
pub fn collect_links(particles: &[Particle], config: &FieldConfig, out: &mut Vec<Link>) {
	out.clear();
	for i in 0..particles.len() {
		for j in (i + 1)..particles.len() {
			if let Some(link) = link_between(&particles[i], &particles[j], config) {
				out.push(link);
			}
		}
	}
}
