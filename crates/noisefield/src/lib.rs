//! Seeded 3D simplex noise and fractal Brownian motion
//!
//! A [`NoiseField`] owns an immutable permutation table built once from a
//! seed. All sampling goes through an explicit field instance, so unrelated
//! fields with different seeds can be sampled concurrently without any
//! shared state.

mod field;

pub use field::NoiseField;
