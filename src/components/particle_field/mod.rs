//! Interactive particle-field background renderer.
//!
//! A continuously running 2D simulation of point particles drawn full-bleed
//! on an HTML canvas:
//! - Particles repel from the pointer and elastically return to their rest
//!   positions when it moves away
//! - Pairs closer than a threshold are joined by gradient line segments,
//!   recomputed every frame with an O(n²) scan
//! - The canvas tracks viewport size; particles are seeded once and survive
//!   resizes unchanged
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleFieldCanvas};
//!
//! // Default enhanced flavor, or the original via FieldConfig::classic().
//! view! { <ParticleFieldCanvas config=FieldConfig::default() /> }
//! ```

mod component;
mod forces;
mod links;
mod particle;
mod render;
mod state;

pub mod config;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::{Easing, FieldConfig};
pub use theme::{Color, Palette};
