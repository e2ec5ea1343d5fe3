use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use celestial::StarClass;

use crate::config::GeneratorConfig;
use crate::generation::enrich_collection;
use crate::simulated::{simulated_collection, simulated_library};

#[test]
fn library_is_reproducible_from_its_seed() {
    assert_eq!(simulated_library(25, 42), simulated_library(25, 42));
}

#[test]
fn different_seeds_give_different_libraries() {
    assert_ne!(simulated_library(25, 1), simulated_library(25, 2));
}

#[test]
fn item_counts_cover_all_star_classes() {
    // Over a reasonably sized library the size distribution should produce
    // every class at least once.
    let library = simulated_library(200, 7);
    let mut seen = [false; 4];
    for collection in &library {
        let class = StarClass::from_item_count(collection.items.len());
        seen[class as usize] = true;
        assert!(!collection.items.is_empty());
        assert!(collection.items.len() < 150);
    }
    assert!(seen.iter().all(|&s| s), "missing a star class: {seen:?}");
}

#[test]
fn simulated_collections_enrich_like_any_other() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let collection = simulated_collection(11, &mut rng);
    let config = GeneratorConfig::simulated();

    let system = enrich_collection(&collection, &config);
    assert_eq!(system.bodies.len(), collection.items.len());
    assert!(system.distances_are_monotonic());
}

#[test]
fn titles_follow_the_placeholder_scheme() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let collection = simulated_collection(3, &mut rng);
    assert_eq!(collection.name, "Collection Vol 3");
    assert_eq!(collection.items[0].title, "Track 3-1");
}
