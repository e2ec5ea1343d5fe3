//! Raw input collections and the enriched output record

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::BodyDescriptor;
use crate::planet_kind::PlanetKind;
use crate::star::StarDescriptor;

/// One raw item as delivered by the data collaborator. Carries no visual
/// attributes; those are derived during enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct RawItem {
    pub title: String,
}

/// A named, ordered collection of raw items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub items: Vec<RawItem>,
}

/// The enriched scene for one collection: star plus one body per item,
/// in item order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CollectionSystem {
    pub collection_id: i64,
    pub name: String,
    pub star: StarDescriptor,
    pub bodies: Vec<BodyDescriptor>,
}

impl CollectionSystem {
    /// Bodies of a given kind
    pub fn bodies_of_kind(&self, kind: PlanetKind) -> Vec<&BodyDescriptor> {
        self.bodies.iter().filter(|b| b.kind == kind).collect()
    }

    /// Whether orbital distances are strictly increasing in index
    pub fn distances_are_monotonic(&self) -> bool {
        self.bodies.windows(2).all(|w| w[0].distance < w[1].distance)
    }
}
