//! Procedural surface synthesis
//!
//! Renders a body's surface as a seamless equirectangular RGBA8 color
//! field by sampling seeded 3D noise over the unit sphere, remapped through
//! the body's kind-specific palette, and a flat radial-band texture for
//! ringed bodies. The same parameters also export as a compact uniform set
//! for shader-driven renderers that recompute the field on the GPU; the
//! CPU raster here is the reference the shader must agree with.

pub mod cache;
pub mod field;
pub mod params;
pub mod ring;
pub mod synth;

pub use cache::{SurfaceCache, SurfaceKey};
pub use field::ColorField;
pub use params::{ShaderUniforms, SurfaceParams};
pub use ring::{ring_alpha, synthesize_ring, RING_SIZE};
pub use synth::{synthesize, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[cfg(test)]
mod ring_test;
