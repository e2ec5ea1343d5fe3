//! Collection enrichment pipeline
//!
//! Star classification from collection size, then one body per item from
//! six independent seeded draws. Pure functions of their inputs: two
//! invocations with the same collection id and index yield bit-identical
//! descriptors.

use celestial::{
    body_seed, BodyDescriptor, Collection, CollectionSystem, Color, PlanetKind, StarClass,
    StarDescriptor,
};

use crate::config::GeneratorConfig;
use crate::orbit::{angular_speed, distance_prefix, phase_angle};
use crate::sampling::seeded_uniform;

/// Star color palette, indexed by a draw keyed on the collection id
const STAR_PALETTE: [Color; 5] = [
    Color::new(0xAA, 0xAF, 0xFF),
    Color::new(0xFF, 0xFF, 0xFF),
    Color::new(0xFF, 0xFF, 0xAA),
    Color::new(0xFF, 0xAA, 0x55),
    Color::new(0xFF, 0x55, 0x33),
];

/// Seed multipliers for the per-collection draws
const STAR_COLOR_SEED_K: i64 = 7;
const GIANT_RADIUS_SEED_K: i64 = 11;
const MAIN_SEQUENCE_RADIUS_SEED_K: i64 = 13;

/// Derive the star record for a collection of `item_count` items.
///
/// Class comes from fixed size thresholds; Giant and MainSequence radii
/// carry a small seeded jitter so they vary per collection but
/// deterministically.
pub fn classify_star(collection_id: i64, item_count: usize) -> StarDescriptor {
    let class = StarClass::from_item_count(item_count);

    let radius = match class {
        StarClass::Giant => {
            class.base_radius()
                + seeded_uniform((collection_id * GIANT_RADIUS_SEED_K) as f64) * 15.0
        }
        StarClass::MainSequence => {
            class.base_radius()
                + seeded_uniform((collection_id * MAIN_SEQUENCE_RADIUS_SEED_K) as f64) * 8.0
        }
        _ => class.base_radius(),
    };

    let color_draw = seeded_uniform((collection_id * STAR_COLOR_SEED_K) as f64);
    let color = STAR_PALETTE[(color_draw * STAR_PALETTE.len() as f64) as usize];

    StarDescriptor {
        radius,
        color,
        class,
    }
}

/// Walk the kind table in declared order, accumulating weight until the
/// roll is covered. The walk order is a tie-break contract; see
/// [`PlanetKind::ALL`].
pub fn select_kind(type_roll: f64, config: &GeneratorConfig) -> PlanetKind {
    let mut cumulative = 0.0;
    for kind in PlanetKind::ALL {
        cumulative += config.weight_of(kind);
        if type_roll < cumulative {
            return kind;
        }
    }
    // Only reachable if the roll equals the total weight exactly; the roll
    // is drawn strictly below it.
    PlanetKind::IceGiant
}

/// Classify the body at `index` given its already-accumulated orbital
/// distance.
///
/// Pure function of `(collection_id, index, distance)` - all six draws are
/// addressed from the body's base seed, never pulled from a shared stream,
/// so bodies can be classified in any order once distances are known.
pub fn classify_body(
    collection_id: i64,
    index: usize,
    distance: f64,
    config: &GeneratorConfig,
) -> BodyDescriptor {
    let base = body_seed(collection_id, index);
    let r1 = seeded_uniform(base as f64);
    let r2 = seeded_uniform((base + 1) as f64);
    let r3 = seeded_uniform((base + 2) as f64);
    let r4 = seeded_uniform((base + 3) as f64);
    let r5 = seeded_uniform((base + 4) as f64);
    let r6 = seeded_uniform((base + 5) as f64);

    let total_weight = config.total_weight();
    let mut type_roll = r2 * total_weight;
    if distance > config.spacing.outer_threshold {
        // Outer system: bias toward gas kinds, clamped below the total so
        // the walk always terminates on a real entry.
        type_roll = (type_roll + config.spacing.gas_bias).min(total_weight - 1.0);
    }
    let kind = select_kind(type_roll, config);

    let profile = kind.profile();
    let (size_min, size_max) = profile.size_range;
    let size = size_min + r3 * (size_max - size_min);

    let color = profile.palette[(r4 * profile.palette.len() as f64) as usize];

    let has_rings = r5 < kind.ring_chance();
    let ring_color = has_rings.then(|| kind.ring_color());

    let has_atmosphere = kind.has_atmosphere();
    let atmosphere_color = kind.atmosphere_color();
    let has_clouds = has_atmosphere && r6 > 0.30;

    BodyDescriptor {
        index,
        distance,
        size,
        kind,
        color,
        has_rings,
        ring_color,
        has_atmosphere,
        atmosphere_color,
        has_clouds,
        speed: angular_speed(distance),
        phase: phase_angle(r1),
        seed: base,
    }
}

/// Enrich one raw collection into its celestial scene.
///
/// Total for any item count, including zero (callers normally drop empty
/// collections before this point; an empty one simply yields no bodies).
pub fn enrich_collection(collection: &Collection, config: &GeneratorConfig) -> CollectionSystem {
    let star = classify_star(collection.id, collection.items.len());

    let distances = distance_prefix(
        collection.id,
        star.radius,
        collection.items.len(),
        config.spacing,
    );
    let bodies = distances
        .iter()
        .enumerate()
        .map(|(index, &distance)| classify_body(collection.id, index, distance, config))
        .collect();

    CollectionSystem {
        collection_id: collection.id,
        name: collection.name.clone(),
        star,
        bodies,
    }
}
