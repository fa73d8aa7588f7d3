//! Drawing for the particle field.
//!
//! Rendering is two passes over the field:
//! 1. Particles as glowing filled circles
//! 2. Link lines between every close pair, drawn once per pair

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::Color;

/// A 2D drawing target the field can render onto.
pub trait Surface {
	/// Erase the whole `width` x `height` area.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle, with `glow` as the shadow blur radius.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: f64);
	/// Stroke a straight line segment without glow.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: f64) {
		let css = color.to_css();
		self.set_shadow_blur(glow);
		self.set_shadow_color(&color.with_alpha(1.0).to_css());
		self.set_fill_style_str(&css);

		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.set_shadow_blur(0.0);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);

		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Renders the complete field. Reads particle state only.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let (width, height) = field.size();
	surface.clear(width, height);

	draw_particles(field, surface);
	draw_links(field, surface);
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let style = field.style();
	for p in field.particles() {
		surface.fill_circle(p.x, p.y, p.radius, p.color.with_alpha(style.opacity), style.glow);
	}
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let style = field.style();
	let particles = field.particles();

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			if a.distance_to(b) < style.link_distance {
				surface.stroke_line(
					(a.x, a.y),
					(b.x, b.y),
					a.color.with_alpha(style.link_opacity),
					style.link_width,
				);
			}
		}
	}
}


#[cfg(test)]
mod tests {
	use super::testing::{DrawOp, RecordingSurface};
	use super::*;
	use crate::components::particle_field::field::Particle;
	use crate::components::particle_field::theme::ParticleStyle;

	fn white_style() -> ParticleStyle {
		ParticleStyle {
			palette: vec![Color::rgb(255, 255, 255)],
			..ParticleStyle::default()
		}
	}

	fn still(x: f64, y: f64, color: Color) -> Particle {
		Particle::new(x, y, 0.0, 0.0, 2.0, color)
	}

	#[test]
	fn clears_before_drawing() {
		let field = ParticleField::from_particles(white_style(), 800.0, 600.0, vec![]);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert_eq!(
			surface.ops,
			vec![DrawOp::Clear {
				width: 800.0,
				height: 600.0
			}]
		);
	}

	#[test]
	fn close_pair_gets_one_line_far_pair_none() {
		let white = Color::rgb(255, 255, 255);
		let mut field = ParticleField::from_particles(
			white_style(),
			800.0,
			600.0,
			vec![still(0.0, 0.0, white), still(50.0, 0.0, white)],
		);

		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert_eq!(surface.lines().len(), 1);
		assert_eq!(surface.circles(), 2);

		field.particles_mut()[1].x = 200.0;
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert!(surface.lines().is_empty());
	}

	#[test]
	fn link_threshold_is_strict() {
		let white = Color::rgb(255, 255, 255);
		let field = ParticleField::from_particles(
			white_style(),
			800.0,
			600.0,
			vec![still(0.0, 0.0, white), still(120.0, 0.0, white)],
		);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert!(surface.lines().is_empty());
	}

	#[test]
	fn each_pair_linked_exactly_once() {
		let white = Color::rgb(255, 255, 255);
		let field = ParticleField::from_particles(
			white_style(),
			800.0,
			600.0,
			vec![
				still(10.0, 10.0, white),
				still(20.0, 10.0, white),
				still(10.0, 20.0, white),
			],
		);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert_eq!(surface.lines().len(), 3);
	}

	#[test]
	fn line_uses_first_particle_color() {
		let red = Color::rgb(255, 0, 0);
		let blue = Color::rgb(0, 0, 255);
		let style = ParticleStyle::default();
		let field = ParticleField::from_particles(
			style.clone(),
			800.0,
			600.0,
			vec![still(0.0, 0.0, red), still(30.0, 40.0, blue)],
		);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);

		assert_eq!(
			surface.lines(),
			vec![&DrawOp::Line {
				from: (0.0, 0.0),
				to: (30.0, 40.0),
				color: red.with_alpha(style.link_opacity),
				width: style.link_width,
			}]
		);
	}

	#[test]
	fn particles_drawn_with_glow_and_opacity() {
		let red = Color::rgb(255, 0, 0);
		let style = ParticleStyle::default();
		let field =
			ParticleField::from_particles(style.clone(), 800.0, 600.0, vec![still(5.0, 6.0, red)]);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);

		assert_eq!(
			surface.ops[1],
			DrawOp::Circle {
				x: 5.0,
				y: 6.0,
				radius: 2.0,
				color: red.with_alpha(style.opacity),
				glow: style.glow,
			}
		);
	}
}
