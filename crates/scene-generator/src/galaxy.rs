//! Spiral-arm macro layout
//!
//! Places whole collections in a logarithmic spiral: each collection is
//! assigned an arm by index, pushed outward with its position within the
//! arm, and wound around by an angle proportional to radius. A seeded
//! perpendicular spread thickens the arms and a vertical offset flattens
//! toward the rim. Placement consumes only seeded draws keyed by the
//! collection's global index, independent of any per-body data.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::sampling::seeded_uniform;

/// Seed multipliers for the three per-collection placement draws
const RADIAL_SEED_K: i64 = 7;
const SPREAD_SEED_K: i64 = 13;
const VERTICAL_SEED_K: i64 = 17;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyConfig {
    /// Number of spiral arms
    pub arms: usize,
    /// Fraction of radius collections spread from the arm centerline
    pub arm_spread: f64,
    /// How tightly the spiral winds (angle per 100 units of radius)
    pub rotation_factor: f64,
    /// Radius of the innermost arm position
    pub base_radius: f64,
    /// Radial step per position within an arm
    pub radial_step: f64,
    /// Seeded jitter on the radial distance
    pub radial_jitter: f64,
    /// Peak vertical offset at the core
    pub vertical_amplitude: f64,
    /// Radius at which the disc flattens out completely
    pub falloff_radius: f64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            arms: 4,
            arm_spread: 0.4,
            rotation_factor: 2.5,
            base_radius: 80.0,
            radial_step: 25.0,
            radial_jitter: 60.0,
            vertical_amplitude: 40.0,
            falloff_radius: 1500.0,
        }
    }
}

/// Macro-space placement of one collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyPlacement {
    pub index: usize,
    pub arm: usize,
    pub radius: f64,
    pub position: Vector3<f64>,
}

/// Place the collection at `index`. Addressable per index, so a full
/// layout and a single lookup always agree.
pub fn place_collection(index: usize, config: &GalaxyConfig) -> GalaxyPlacement {
    let arm = index % config.arms;
    let position_in_arm = (index / config.arms) as f64;

    let arm_offset = arm as f64 / config.arms as f64 * TAU;

    let id = index as i64;
    let radius = config.base_radius
        + position_in_arm * config.radial_step
        + seeded_uniform((id * RADIAL_SEED_K) as f64) * config.radial_jitter;

    // Winding: angle grows with radius
    let spiral_angle = arm_offset + radius / 100.0 * config.rotation_factor;

    // Thickness perpendicular to the arm
    let spread = (seeded_uniform((id * SPREAD_SEED_K) as f64) - 0.5)
        * config.arm_spread
        * radius
        * 0.3;
    let spread_angle = spiral_angle + FRAC_PI_2;

    let x = spiral_angle.cos() * radius + spread_angle.cos() * spread;
    let z = spiral_angle.sin() * radius + spread_angle.sin() * spread;

    // Flatter toward the rim
    let y = (seeded_uniform((id * VERTICAL_SEED_K) as f64) - 0.5)
        * config.vertical_amplitude
        * (1.0 - radius / config.falloff_radius);

    GalaxyPlacement {
        index,
        arm,
        radius,
        position: Vector3::new(x, y, z),
    }
}

/// Place `count` collections
pub fn layout_galaxy(count: usize, config: &GalaxyConfig) -> Vec<GalaxyPlacement> {
    (0..count).map(|i| place_collection(i, config)).collect()
}
