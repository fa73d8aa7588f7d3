//! Ambient particle background.
//!
//! Renders a fixed set of softly glowing particles on a full-viewport canvas:
//! - Constant-speed drift, reflecting off the viewport edges
//! - Faint link lines between particles closer than a threshold
//! - Canvas resized with the window (particles are left where they are)
//!
//! # Example
//!
//! ```ignore
//! use particle_field::components::particle_field::{ParticleFieldCanvas, ParticleStyle};
//!
//! let style = ParticleStyle { count: 60, ..ParticleStyle::default() };
//!
//! view! { <ParticleFieldCanvas style=style /> }
//! ```

mod component;
mod field;
mod render;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use field::{Particle, ParticleField};
pub use render::{Surface, render};
pub use theme::{Color, ParticleStyle};
pub use types::FieldOptions;
