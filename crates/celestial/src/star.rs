//! Star classification
//!
//! A collection's star class is a pure function of its item count. Radii
//! and color are derived in the generator crate, where the seeded draws
//! live; only the thresholds and fixed per-class values belong here.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "snake_case")]
pub enum StarClass {
    BlackHole,
    Dwarf,
    MainSequence,
    Giant,
}

impl StarClass {
    /// Item count below which a collection collapses to a black hole
    pub const BLACK_HOLE_BELOW: usize = 5;
    /// Item count below which (and at/above BLACK_HOLE_BELOW) the star is a dwarf
    pub const DWARF_BELOW: usize = 10;
    /// Item count at/above which the star is a giant
    pub const GIANT_AT: usize = 20;

    /// Classify by collection size. Total for any count, including 0.
    pub fn from_item_count(count: usize) -> Self {
        match count {
            c if c < Self::BLACK_HOLE_BELOW => Self::BlackHole,
            c if c < Self::DWARF_BELOW => Self::Dwarf,
            c if c >= Self::GIANT_AT => Self::Giant,
            _ => Self::MainSequence,
        }
    }

    /// Fixed base radius; MainSequence and Giant add seeded jitter on top
    pub fn base_radius(&self) -> f64 {
        match self {
            Self::BlackHole => 8.0,
            Self::Dwarf => 10.0,
            Self::MainSequence => 12.0,
            Self::Giant => 25.0,
        }
    }

    /// Sprite scale used by the macro-layout view
    pub fn display_scale(&self) -> f64 {
        match self {
            Self::BlackHole => 10.0,
            Self::Dwarf => 15.0,
            Self::MainSequence => 20.0,
            Self::Giant => 50.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BlackHole => "Black Hole",
            Self::Dwarf => "Dwarf",
            Self::MainSequence => "Main Sequence",
            Self::Giant => "Giant",
        }
    }
}

impl std::fmt::Display for StarClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fully derived star record for one collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StarDescriptor {
    pub radius: f64,
    pub color: Color,
    pub class: StarClass,
}
