//! Celestial scene data model
//!
//! Types shared by the generation and surface-synthesis crates: colors,
//! star and body descriptors, the closed planet-kind taxonomy, and the
//! raw/enriched collection records. Descriptors are immutable once built;
//! regenerating from the same inputs reproduces them bit for bit, so there
//! is no update path.

pub mod body;
pub mod collection;
pub mod color;
pub mod planet_kind;
pub mod star;

pub use body::{body_seed, BodyDescriptor};
pub use collection::{Collection, CollectionSystem, RawItem};
pub use color::Color;
pub use planet_kind::{KindProfile, PlanetKind};
pub use star::{StarClass, StarDescriptor};

#[cfg(test)]
mod star_test;
