//! particle-field: interactive particle background for the portfolio site.
//!
//! This crate provides a WASM-based canvas component that renders a field of
//! pointer-reactive particles connected by a distance-thresholded line graph,
//! drawn behind the host page's content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldConfig, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load config overrides from a script element with id="field-config".
/// Expected format: a JSON object of `FieldConfig` fields; all optional.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"particle-field: loaded config, {} particles",
				config.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the particle field full-bleed with an overlay slot above it, using
/// any config overrides supplied by the host page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page-background">
			<ParticleFieldCanvas config=config />
			<div class="background-overlay"></div>
		</div>
	}
}
