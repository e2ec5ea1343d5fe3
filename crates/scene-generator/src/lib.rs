//! Deterministic scene generation
//!
//! Turns raw item collections into fully specified celestial scenes: a star
//! class per collection, one body per item, orbital parameters, and a
//! spiral-arm macro layout across collections.
//!
//! Every draw is keyed by an arithmetic seed rather than pulled from a
//! sequential RNG stream, so body classification is order-independent:
//! given the precomputed distance prefix, bodies can be classified in any
//! order (or in parallel) with results identical to sequential execution.

pub mod config;
pub mod galaxy;
pub mod generation;
pub mod orbit;
pub mod sampling;
pub mod simulated;

pub use config::{GeneratorConfig, SpacingProfile};
pub use galaxy::{place_collection, layout_galaxy, GalaxyConfig, GalaxyPlacement};
pub use generation::{classify_body, classify_star, enrich_collection, select_kind};
pub use orbit::{angular_speed, distance_prefix, OrbitLayout};
pub use sampling::seeded_uniform;
pub use simulated::{simulated_collection, simulated_library};

#[cfg(test)]
mod galaxy_test;
#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod simulated_test;
