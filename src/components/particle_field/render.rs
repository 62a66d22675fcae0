//! Canvas rendering for the particle field.
//!
//! One frame: clear, fill the dark backdrop, draw every particle (glow pass
//! first when enabled), then stroke the proximity links over them. All
//! positions are already in surface space; no transform is applied.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::FieldConfig;
use super::particle::Particle;
use super::state::FieldState;
use super::theme::{self, Color};

/// Draw the complete field for the current tick.
pub fn render(state: &FieldState, ctx: &CanvasRenderingContext2d, config: &FieldConfig) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.set_fill_style_str(&theme::BACKGROUND.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	for particle in &state.particles {
		if config.glow {
			draw_glow(ctx, particle);
		}
		draw_particle(ctx, particle);
	}

	draw_links(state, ctx);
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) {
	ctx.set_fill_style_str(&particle.color.to_css());
	ctx.begin_path();
	let _ = ctx.arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0);
	ctx.close_path();
	ctx.fill();
}

/// Soft radial halo in the particle's own hue, fading to transparent.
fn draw_glow(ctx: &CanvasRenderingContext2d, particle: &Particle) {
	let glow_radius = particle.size * 3.0;
	let Ok(gradient) = ctx.create_radial_gradient(
		particle.x,
		particle.y,
		particle.size * 0.5,
		particle.x,
		particle.y,
		glow_radius,
	) else {
		return;
	};

	let center = Color::rgb(255, 255, 255)
		.lerp(particle.color, 0.5)
		.with_alpha(particle.color.a * 0.4);
	if gradient.add_color_stop(0.0, &center.to_css()).is_err() {
		return;
	}
	let _ = gradient.add_color_stop(
		0.5,
		&particle.color.with_alpha(particle.color.a * 0.25).to_css(),
	);
	let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");

	ctx.begin_path();
	let _ = ctx.arc(particle.x, particle.y, glow_radius, 0.0, PI * 2.0);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

/// Stroke each link with a gradient running from endpoint A's hue to
/// endpoint B's, both at the link's distance-derived opacity.
fn draw_links(state: &FieldState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(1.0);

	for link in &state.links {
		let gradient = ctx.create_linear_gradient(link.x1, link.y1, link.x2, link.y2);
		let _ = gradient.add_color_stop(0.0, &link.color_a.with_alpha(link.alpha).to_css());
		let _ = gradient.add_color_stop(1.0, &link.color_b.with_alpha(link.alpha).to_css());

		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.begin_path();
		ctx.move_to(link.x1, link.y1);
		ctx.line_to(link.x2, link.y2);
		ctx.stroke();
	}
}
