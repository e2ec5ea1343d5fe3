//! Simulated library synthesis
//!
//! Produces demo collections when no real library is available. Collection
//! sizes follow a rough distribution over the star classes (mostly
//! standard-sized, a few tiny and a few huge); the items themselves carry
//! only placeholder titles. Enrichment of a simulated collection goes
//! through the ordinary pipeline with the simulated spacing profile.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use celestial::{Collection, RawItem};

/// Synthesize one collection with a randomly rolled size
pub fn simulated_collection(id: i64, rng: &mut ChaChaRng) -> Collection {
    let roll: f64 = rng.random();
    let item_count = if roll < 0.1 {
        // Tiny single/EP - collapses to a black hole
        rng.random_range(1..5)
    } else if roll < 0.3 {
        // Small - dwarf star
        rng.random_range(5..10)
    } else if roll < 0.8 {
        // Standard - main sequence
        rng.random_range(10..30)
    } else {
        // Huge anthology - giant
        rng.random_range(50..150)
    };

    let items = (0..item_count)
        .map(|i| RawItem {
            title: format!("Track {}-{}", id, i + 1),
        })
        .collect();

    Collection {
        id,
        name: format!("Collection Vol {}", id),
        items,
    }
}

/// Synthesize a whole library of `count` collections from one RNG seed
pub fn simulated_library(count: usize, seed: u64) -> Vec<Collection> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..count)
        .map(|i| simulated_collection(i as i64, &mut rng))
        .collect()
}
