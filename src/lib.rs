//! particle-field: Animated particle background for the site header.
//!
//! This crate provides a WASM canvas component that renders a fixed set of
//! drifting, edge-bouncing particles joined by faint proximity lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	Color, FieldOptions, Particle, ParticleField, ParticleFieldCanvas, ParticleStyle, Surface,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load style overrides from a script element with id="particle-config".
/// Expected format: JSON object, e.g. { "count": 60, "palette": ["#00d4ff"] }
fn load_field_options() -> Option<FieldOptions> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldOptions>(&json_text) {
		Ok(options) => {
			info!("particle-field: loaded config overrides");
			Some(options)
		}
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads optional style overrides from the DOM and renders the particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let style = load_field_options()
		.map(|options| ParticleStyle::default().with_options(&options))
		.unwrap_or_default();

	view! {
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<ParticleFieldCanvas style=style />
	}
}
