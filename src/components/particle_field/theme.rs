//! Visual styling for the particle field.
//!
//! Provides the color type, CSS color parsing, and the tunable particle style.

use log::warn;

use super::types::FieldOptions;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse a CSS hex color (`#rgb` or `#rrggbb`, leading `#` optional).
	pub fn from_hex(s: &str) -> Option<Self> {
		let hex = s.trim().trim_start_matches('#');
		if !hex.is_ascii() {
			return None;
		}
		match hex.len() {
			3 => {
				let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
				Some(Self::rgb(digits.next()??, digits.next()??, digits.next()??))
			}
			6 => {
				let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
				Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
			}
			_ => None,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Tunables for the particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStyle {
	/// Number of particles created at initialization
	pub count: usize,
	/// Colors particles are drawn from. Never empty.
	pub palette: Vec<Color>,
	/// Minimum particle radius
	pub size_min: f64,
	/// Maximum particle radius
	pub size_max: f64,
	/// Minimum speed in units per frame
	pub speed_min: f64,
	/// Maximum speed in units per frame
	pub speed_max: f64,
	/// Pairs closer than this are linked
	pub link_distance: f64,
	/// Particle fill opacity
	pub opacity: f64,
	/// Shadow blur used for the particle glow
	pub glow: f64,
	/// Link line opacity
	pub link_opacity: f64,
	/// Link line width
	pub link_width: f64,
}

impl ParticleStyle {
	/// Electric blue palette used by the site header.
	pub fn default_palette() -> Vec<Color> {
		vec![
			Color::rgb(0, 212, 255), // Electric cyan
			Color::rgb(0, 153, 204), // Deep cyan
			Color::rgb(255, 255, 255),
		]
	}

	/// Apply page-provided overrides on top of this style.
	pub fn with_options(mut self, options: &FieldOptions) -> Self {
		if let Some(count) = options.count {
			self.count = count;
		}
		if let Some(ref palette) = options.palette {
			let parsed: Vec<Color> = palette
				.iter()
				.filter_map(|s| {
					let color = Color::from_hex(s);
					if color.is_none() {
						warn!("particle-field: ignoring invalid palette color {:?}", s);
					}
					color
				})
				.collect();
			if parsed.is_empty() {
				warn!("particle-field: palette override is empty, keeping default");
			} else {
				self.palette = parsed;
			}
		}

		let (size_min, size_max) = ordered(
			options.size_min.unwrap_or(self.size_min),
			options.size_max.unwrap_or(self.size_max),
		);
		self.size_min = size_min;
		self.size_max = size_max;

		let (speed_min, speed_max) = ordered(
			options.speed_min.unwrap_or(self.speed_min),
			options.speed_max.unwrap_or(self.speed_max),
		);
		self.speed_min = speed_min;
		self.speed_max = speed_max;

		if let Some(d) = options.link_distance {
			self.link_distance = d;
		}
		if let Some(o) = options.opacity {
			self.opacity = o.clamp(0.0, 1.0);
		}
		if let Some(g) = options.glow {
			self.glow = g.max(0.0);
		}
		if let Some(o) = options.link_opacity {
			self.link_opacity = o.clamp(0.0, 1.0);
		}
		if let Some(w) = options.link_width {
			self.link_width = w.max(0.0);
		}
		self
	}
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
	if a <= b { (a, b) } else { (b, a) }
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 80,
			palette: Self::default_palette(),
			size_min: 1.0,
			size_max: 3.0,
			speed_min: 0.2,
			speed_max: 0.8,
			link_distance: 120.0,
			opacity: 0.6,
			glow: 10.0,
			link_opacity: 0.1,
			link_width: 0.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_short_and_long_hex() {
		assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
		assert_eq!(Color::from_hex("#00d4ff"), Some(Color::rgb(0, 212, 255)));
		assert_eq!(Color::from_hex("0099CC"), Some(Color::rgb(0, 153, 204)));
	}

	#[test]
	fn rejects_malformed_hex() {
		assert_eq!(Color::from_hex("#ffff"), None);
		assert_eq!(Color::from_hex("#gg0000"), None);
		assert_eq!(Color::from_hex(""), None);
		assert_eq!(Color::from_hex("#ééé"), None);
	}

	#[test]
	fn css_output_switches_on_alpha() {
		assert_eq!(Color::rgb(0, 212, 255).to_css(), "#00d4ff");
		assert_eq!(
			Color::rgb(0, 212, 255).with_alpha(0.5).to_css(),
			"rgba(0, 212, 255, 0.5)"
		);
	}

	#[test]
	fn options_override_defaults() {
		let options = FieldOptions {
			count: Some(12),
			palette: Some(vec!["#fff".into(), "nope".into()]),
			size_min: Some(4.0),
			size_max: Some(2.0),
			link_distance: Some(90.0),
			opacity: Some(3.0),
			..FieldOptions::default()
		};
		let style = ParticleStyle::default().with_options(&options);

		assert_eq!(style.count, 12);
		assert_eq!(style.palette, vec![Color::rgb(255, 255, 255)]);
		assert_eq!((style.size_min, style.size_max), (2.0, 4.0));
		assert_eq!(style.link_distance, 90.0);
		assert_eq!(style.opacity, 1.0);
		assert_eq!(style.speed_min, 0.2);
	}

	#[test]
	fn invalid_palette_keeps_default() {
		let options = FieldOptions {
			palette: Some(vec!["red".into()]),
			..FieldOptions::default()
		};
		let style = ParticleStyle::default().with_options(&options);
		assert_eq!(style.palette, ParticleStyle::default_palette());
	}

	#[test]
	fn empty_options_change_nothing() {
		let style = ParticleStyle::default().with_options(&FieldOptions::default());
		assert_eq!(style, ParticleStyle::default());
	}
}
