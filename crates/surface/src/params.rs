//! Surface parameter set
//!
//! Everything needed to synthesize (or re-synthesize on a GPU) one body's
//! surface: kind, seed, base color, cloud flag. Secondary and tertiary
//! tones are derived from the base color by fixed factors, so they never
//! need to be stored.

use serde::{Deserialize, Serialize};

use celestial::{BodyDescriptor, Color, PlanetKind};

/// Scale factor for the secondary (shadow/low) tone
const SECONDARY_FACTOR: f64 = 0.6;
/// Scale factor for the tertiary (highlight/high) tone
const TERTIARY_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceParams {
    pub kind: PlanetKind,
    pub seed: i64,
    pub base: Color,
    pub has_clouds: bool,
}

impl SurfaceParams {
    pub fn from_body(body: &BodyDescriptor) -> Self {
        Self {
            kind: body.kind,
            seed: body.seed,
            base: body.color,
            has_clouds: body.has_clouds,
        }
    }

    /// Base tone as unit-range channels
    pub fn base_tone(&self) -> [f64; 3] {
        self.base.to_unit()
    }

    /// Darkened secondary tone
    pub fn secondary_tone(&self) -> [f64; 3] {
        self.base.scaled(SECONDARY_FACTOR)
    }

    /// Brightened tertiary tone; may overshoot 1.0 until the pixel write
    /// clamps
    pub fn tertiary_tone(&self) -> [f64; 3] {
        self.base.scaled(TERTIARY_FACTOR)
    }

    /// Uniform set for a shader-driven renderer recomputing this surface
    /// procedurally at render time. Must stay numerically consistent with
    /// the CPU raster path.
    pub fn shader_uniforms(&self) -> ShaderUniforms {
        ShaderUniforms {
            type_id: self.kind.shader_type_id(),
            seed: self.seed,
            color1: self.base.to_hex(),
            color2: scaled_hex(self.base, SECONDARY_FACTOR),
            color3: scaled_hex(self.base, TERTIARY_FACTOR),
            has_clouds: self.has_clouds,
        }
    }
}

/// GPU-facing parameter record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShaderUniforms {
    pub type_id: u8,
    pub seed: i64,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub has_clouds: bool,
}

fn scaled_hex(color: Color, factor: f64) -> String {
    let [r, g, b] = color.scaled(factor);
    Color::new(
        (r * 255.0).round().clamp(0.0, 255.0) as u8,
        (g * 255.0).round().clamp(0.0, 255.0) as u8,
        (b * 255.0).round().clamp(0.0, 255.0) as u8,
    )
    .to_hex()
}
