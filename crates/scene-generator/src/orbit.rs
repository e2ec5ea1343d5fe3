//! Orbital distance layout
//!
//! The only sequential dependency in generation: distances are a running
//! accumulator folded left to right over the item index. Each step's jitter
//! draw is addressable by seed, so the whole prefix can be computed up
//! front and classification distributed afterwards.

use std::f64::consts::TAU;

use celestial::body_seed;

use crate::config::SpacingProfile;
use crate::sampling::seeded_uniform;

/// Running distance accumulator for one collection
#[derive(Debug, Clone)]
pub struct OrbitLayout {
    collection_id: i64,
    profile: SpacingProfile,
    current: f64,
}

impl OrbitLayout {
    /// Start the accumulator at the collection's inner bound:
    /// `2 * star_radius + inner_offset`.
    pub fn new(collection_id: i64, star_radius: f64, profile: SpacingProfile) -> Self {
        Self {
            collection_id,
            profile,
            current: 2.0 * star_radius + profile.inner_offset,
        }
    }

    /// Advance past the body at `index` and return its orbital distance.
    ///
    /// Monotonic by construction: every advance adds at least the fixed
    /// spacing.
    pub fn advance(&mut self, index: usize) -> f64 {
        let r1 = seeded_uniform(body_seed(self.collection_id, index) as f64);
        self.current += self.profile.spacing + r1 * self.profile.jitter;
        self.current
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}

/// Distances for every body in a collection, computed as a prefix fold.
///
/// This is the sequential half of generation; feed the result to
/// classification, which is then free to run in any order.
pub fn distance_prefix(
    collection_id: i64,
    star_radius: f64,
    count: usize,
    profile: SpacingProfile,
) -> Vec<f64> {
    let mut layout = OrbitLayout::new(collection_id, star_radius, profile);
    (0..count).map(|i| layout.advance(i)).collect()
}

/// Angular speed for a body at the given distance. Inverse 3/2-power
/// relationship: inner bodies orbit faster.
pub fn angular_speed(distance: f64) -> f64 {
    (100.0 / distance.powf(1.5)) * 0.2
}

/// Initial phase angle from the body's first draw
pub fn phase_angle(r1: f64) -> f64 {
    r1 * TAU
}
