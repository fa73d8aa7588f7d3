//! Bouncing particle simulation.

use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::SliceRandom;

use super::render::{self, Surface};
use super::theme::{Color, ParticleStyle};

/// A single moving point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
}

impl Particle {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, color: Color) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
			color,
		}
	}

	/// Random particle inside a `width` x `height` surface.
	fn random<R: Rng + ?Sized>(style: &ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let angle = unit(rng) * TAU;
		let speed = style.speed_min + unit(rng) * (style.speed_max - style.speed_min);

		Self {
			x: unit(rng) * width,
			y: unit(rng) * height,
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			radius: style.size_min + unit(rng) * (style.size_max - style.size_min),
			color: style
				.palette
				.choose(rng)
				.copied()
				.unwrap_or(Color::rgb(255, 255, 255)),
		}
	}

	pub fn speed(&self) -> f64 {
		self.vx.hypot(self.vy)
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Uniform sample from `[0, 1)`.
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// A fixed set of particles bouncing inside a rectangular surface.
///
/// Created once when the component mounts and then driven by the animation
/// loop through [`run`](Self::run). The particle count never changes after
/// construction.
pub struct ParticleField {
	particles: Vec<Particle>,
	style: ParticleStyle,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Create `style.count` random particles within the surface bounds.
	pub fn new<R: Rng + ?Sized>(style: ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::random(&style, width, height, rng))
			.collect();

		Self {
			particles,
			style,
			width,
			height,
		}
	}

	/// Build a field from explicit particles.
	pub fn from_particles(
		style: ParticleStyle,
		width: f64,
		height: f64,
		particles: Vec<Particle>,
	) -> Self {
		Self {
			particles,
			style,
			width,
			height,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Move every particle by its velocity, reflecting off the surface edges.
	///
	/// Only the velocity sign flips on a bounce; the position is left where it
	/// landed, so a particle can sit just outside the bounds for one frame.
	pub fn advance(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
		}
	}

	/// Render the current state without changing it.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		render::render(self, surface);
	}

	/// One animation frame: advance, then draw.
	pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		self.advance();
		self.draw(surface);
	}

	/// Update the surface bounds. Particles are not moved or clamped.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
