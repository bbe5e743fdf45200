//! Noise image rendering.
//!
//! Implements the image pipeline behind the noise server:
//! - Seeded OpenSimplex noise field
//! - Continuous gradients and stepped palettes
//! - Raster synthesis
//! - PNG and ICO encoding

pub mod error;
pub mod gradient;
pub mod ico;
pub mod noise;
pub mod palette;
pub mod png;
pub mod synth;

pub use crate::error::{RenderError, RenderResult};
pub use crate::gradient::Color;
pub use crate::noise::NoiseField;
pub use crate::palette::Palette;
pub use crate::synth::{render, Raster, NOISE_SCALE};
