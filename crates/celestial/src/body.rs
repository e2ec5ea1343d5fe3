//! Per-item body descriptor

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::Color;
use crate::planet_kind::PlanetKind;

/// Derive the base seed for a body. Stable for the collection/index pair;
/// the classifier's six sub-draws use offsets 0..=5 from this value.
pub const fn body_seed(collection_id: i64, index: usize) -> i64 {
    collection_id * 1000 + index as i64
}

/// One generated celestial body, corresponding to one raw item.
///
/// Immutable once built. Within a collection, `distance` is strictly
/// increasing in `index`, and `size` lies inside the kind's declared range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BodyDescriptor {
    pub index: usize,
    pub distance: f64,
    pub size: f64,
    pub kind: PlanetKind,
    pub color: Color,
    pub has_rings: bool,
    pub ring_color: Option<Color>,
    pub has_atmosphere: bool,
    pub atmosphere_color: Option<Color>,
    pub has_clouds: bool,
    /// Angular speed; inner bodies orbit faster
    pub speed: f64,
    /// Initial phase angle in radians
    pub phase: f64,
    /// Base seed, also keys the body's surface texture
    pub seed: i64,
}
