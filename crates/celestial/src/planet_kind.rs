//! Closed planet-kind taxonomy
//!
//! Every generated body is exactly one of these eight kinds. The declared
//! order of [`PlanetKind::ALL`] is load-bearing: weighted selection walks it
//! front to back accumulating weight, so reordering would change which kind
//! a given roll lands on.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::Color;

/// Per-kind generation profile: selection weight, body size range, and the
/// five-entry base-color palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    pub weight: f64,
    pub size_range: (f64, f64),
    pub palette: [Color; 5],
}

/// The eight planet kinds, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "snake_case")]
pub enum PlanetKind {
    Rocky,
    Ocean,
    Forest,
    Ice,
    Lava,
    Desert,
    Gas,
    IceGiant,
}

impl PlanetKind {
    /// Selection order for weighted classification. Fixed tie-break
    /// contract; do not reorder.
    pub const ALL: [PlanetKind; 8] = [
        Self::Rocky,
        Self::Ocean,
        Self::Forest,
        Self::Ice,
        Self::Lava,
        Self::Desert,
        Self::Gas,
        Self::IceGiant,
    ];

    /// Ring probability: giants ring often, everything else rarely
    pub const GIANT_RING_CHANCE: f64 = 0.40;
    pub const DEFAULT_RING_CHANCE: f64 = 0.08;

    pub fn profile(&self) -> KindProfile {
        match self {
            Self::Rocky => KindProfile {
                weight: 25.0,
                size_range: (0.8, 1.8),
                palette: [
                    Color::new(0x8B, 0x73, 0x55),
                    Color::new(0xA0, 0x52, 0x2D),
                    Color::new(0x69, 0x69, 0x69),
                    Color::new(0x8B, 0x45, 0x13),
                    Color::new(0xCD, 0x85, 0x3F),
                ],
            },
            Self::Ocean => KindProfile {
                weight: 15.0,
                size_range: (1.2, 2.2),
                palette: [
                    Color::new(0x1E, 0x90, 0xFF),
                    Color::new(0x41, 0x69, 0xE1),
                    Color::new(0x00, 0xCE, 0xD1),
                    Color::new(0x20, 0xB2, 0xAA),
                    Color::new(0x5F, 0x9E, 0xA0),
                ],
            },
            Self::Forest => KindProfile {
                weight: 12.0,
                size_range: (1.0, 2.0),
                palette: [
                    Color::new(0x22, 0x8B, 0x22),
                    Color::new(0x2E, 0x8B, 0x57),
                    Color::new(0x3C, 0xB3, 0x71),
                    Color::new(0x00, 0x64, 0x00),
                    Color::new(0x32, 0xCD, 0x32),
                ],
            },
            Self::Ice => KindProfile {
                weight: 12.0,
                size_range: (0.9, 1.8),
                palette: [
                    Color::new(0xE0, 0xFF, 0xFF),
                    Color::new(0xB0, 0xE0, 0xE6),
                    Color::new(0x87, 0xCE, 0xEB),
                    Color::new(0xAD, 0xD8, 0xE6),
                    Color::new(0xF0, 0xFF, 0xFF),
                ],
            },
            Self::Lava => KindProfile {
                weight: 8.0,
                size_range: (0.8, 1.6),
                palette: [
                    Color::new(0x8B, 0x00, 0x00),
                    Color::new(0xB2, 0x22, 0x22),
                    Color::new(0xCD, 0x5C, 0x5C),
                    Color::new(0xFF, 0x45, 0x00),
                    Color::new(0xDC, 0x14, 0x3C),
                ],
            },
            Self::Desert => KindProfile {
                weight: 10.0,
                size_range: (0.9, 1.7),
                palette: [
                    Color::new(0xDE, 0xB8, 0x87),
                    Color::new(0xD2, 0xB4, 0x8C),
                    Color::new(0xF4, 0xA4, 0x60),
                    Color::new(0xDA, 0xA5, 0x20),
                    Color::new(0xCD, 0x85, 0x3F),
                ],
            },
            Self::Gas => KindProfile {
                weight: 15.0,
                size_range: (2.5, 4.5),
                palette: [
                    Color::new(0xDE, 0xB8, 0x87),
                    Color::new(0xD2, 0x69, 0x1E),
                    Color::new(0xBC, 0x8F, 0x8F),
                    Color::new(0xF5, 0xDE, 0xB3),
                    Color::new(0xFF, 0xDA, 0xB9),
                ],
            },
            Self::IceGiant => KindProfile {
                weight: 3.0,
                size_range: (2.2, 3.8),
                palette: [
                    Color::new(0x00, 0xCE, 0xD1),
                    Color::new(0x48, 0xD1, 0xCC),
                    Color::new(0x40, 0xE0, 0xD0),
                    Color::new(0x7F, 0xFF, 0xD4),
                    Color::new(0x00, 0xFF, 0xFF),
                ],
            },
        }
    }

    /// Whether this kind is a gas-type giant
    pub fn is_giant(&self) -> bool {
        matches!(self, Self::Gas | Self::IceGiant)
    }

    pub fn ring_chance(&self) -> f64 {
        if self.is_giant() {
            Self::GIANT_RING_CHANCE
        } else {
            Self::DEFAULT_RING_CHANCE
        }
    }

    pub fn ring_color(&self) -> Color {
        match self {
            Self::IceGiant => Color::new(0x87, 0xCE, 0xEB),
            Self::Gas => Color::new(0xD2, 0xB4, 0x8C),
            _ => Color::new(0xA0, 0xA0, 0xA0),
        }
    }

    pub fn has_atmosphere(&self) -> bool {
        matches!(self, Self::Ocean | Self::Forest | Self::Gas | Self::IceGiant)
    }

    pub fn atmosphere_color(&self) -> Option<Color> {
        match self {
            Self::Ocean => Some(Color::new(0x41, 0x69, 0xE1)),
            Self::Forest => Some(Color::new(0x90, 0xEE, 0x90)),
            Self::Gas => Some(Color::new(0xDE, 0xB8, 0x87)),
            Self::IceGiant => Some(Color::new(0x00, 0xCE, 0xD1)),
            _ => None,
        }
    }

    /// Numeric kind id passed to shader-driven renderers.
    ///
    /// The GPU path groups the eight kinds into five shading programs:
    /// terrain (0), ocean (1), banded giant (2), lava (3), ice (4).
    pub fn shader_type_id(&self) -> u8 {
        match self {
            Self::Rocky | Self::Forest | Self::Desert => 0,
            Self::Ocean => 1,
            Self::Gas | Self::IceGiant => 2,
            Self::Lava => 3,
            Self::Ice => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rocky => "Rocky",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
            Self::Ice => "Ice",
            Self::Lava => "Lava",
            Self::Desert => "Desert",
            Self::Gas => "Gas",
            Self::IceGiant => "Ice Giant",
        }
    }
}

impl std::fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
