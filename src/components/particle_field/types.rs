//! Page-provided configuration input for the particle field component.

use serde::Deserialize;

/// Optional overrides for [`ParticleStyle`](super::ParticleStyle).
///
/// Every field is optional; anything missing keeps the built-in default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOptions {
	/// Number of particles.
	pub count: Option<usize>,
	/// CSS hex colors (e.g., "#00d4ff" or "#fff").
	pub palette: Option<Vec<String>>,
	pub size_min: Option<f64>,
	pub size_max: Option<f64>,
	pub speed_min: Option<f64>,
	pub speed_max: Option<f64>,
	/// Maximum distance at which two particles are linked.
	pub link_distance: Option<f64>,
	pub opacity: Option<f64>,
	pub glow: Option<f64>,
	pub link_opacity: Option<f64>,
	pub link_width: Option<f64>,
}
