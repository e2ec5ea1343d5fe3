//! WASM bindings for collection enrichment and galaxy layout.

use wasm_bindgen::prelude::*;

use celestial::Collection;
use scene_generator::{GalaxyConfig, GeneratorConfig};

use crate::{from_js, to_js};

/// Enrich a collection into a star system using the scanned-library
/// spacing profile.
///
/// # Arguments
/// * `collection` - A Collection object ({ id, name, items })
#[wasm_bindgen]
pub fn enrich_collection(collection: JsValue) -> Result<JsValue, JsError> {
    let collection: Collection = from_js(collection)?;
    let config = GeneratorConfig::default();
    to_js(&scene_generator::enrich_collection(&collection, &config))
}

/// Enrich a collection using the simulated-library spacing profile
/// (wider orbits, stronger outer gas bias).
#[wasm_bindgen]
pub fn enrich_simulated_collection(collection: JsValue) -> Result<JsValue, JsError> {
    let collection: Collection = from_js(collection)?;
    let config = GeneratorConfig::simulated();
    to_js(&scene_generator::enrich_collection(&collection, &config))
}

/// Enrich a whole library of collections at once.
///
/// # Arguments
/// * `collections` - An array of Collection objects
/// * `simulated` - Use the simulated-library spacing profile
#[wasm_bindgen]
pub fn enrich_library(collections: JsValue, simulated: bool) -> Result<JsValue, JsError> {
    let collections: Vec<Collection> = from_js(collections)?;
    let config = if simulated {
        GeneratorConfig::simulated()
    } else {
        GeneratorConfig::default()
    };
    let systems: Vec<_> = collections
        .iter()
        .map(|c| scene_generator::enrich_collection(c, &config))
        .collect();
    to_js(&systems)
}

/// Place a single collection on the spiral galaxy layout.
///
/// # Arguments
/// * `index` - The collection's position in the library ordering
#[wasm_bindgen]
pub fn place_collection(index: usize) -> Result<JsValue, JsError> {
    to_js(&scene_generator::place_collection(
        index,
        &GalaxyConfig::default(),
    ))
}

/// Lay out `count` collections across the spiral arms.
///
/// # Returns
/// Array of { index, arm, radius, position } placements.
#[wasm_bindgen]
pub fn layout_galaxy(count: usize) -> Result<JsValue, JsError> {
    to_js(&scene_generator::layout_galaxy(
        count,
        &GalaxyConfig::default(),
    ))
}

/// Generate a reproducible simulated library for demos and testing.
///
/// # Arguments
/// * `count` - Number of collections to generate
/// * `seed` - Random seed for reproducible generation
#[wasm_bindgen]
pub fn simulated_library(count: usize, seed: u64) -> Result<JsValue, JsError> {
    to_js(&scene_generator::simulated_library(count, seed))
}
