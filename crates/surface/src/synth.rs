//! Equirectangular surface synthesis
//!
//! Each output pixel maps to a point on the unit sphere; all noise is
//! sampled in 3D at that point, so the left/right edges and the poles are
//! continuous by construction - there is no seam to hide. Every pixel is
//! independent of every other, so synthesis can be chunked per scanline or
//! per pixel with identical results.

use celestial::PlanetKind;
use noisefield::NoiseField;

use crate::field::ColorField;
use crate::params::SurfaceParams;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 512;

/// Lava crack threshold: fbm cubed above this renders molten
const LAVA_CRACK_THRESHOLD: f64 = 0.7;
/// Ocean continent threshold on the low-frequency mask
const OCEAN_LAND_THRESHOLD: f64 = 0.55;
/// Cloud coverage threshold and alpha cap
const CLOUD_THRESHOLD: f64 = 0.2;
const CLOUD_MAX_ALPHA: f64 = 0.8;

/// Synthesize the full color field for one body.
pub fn synthesize(params: &SurfaceParams, width: u32, height: u32) -> ColorField {
    let field = NoiseField::new(params.seed as f64);
    let mut out = ColorField::new(width, height);

    let c1 = params.base_tone();
    let c2 = params.secondary_tone();
    let c3 = params.tertiary_tone();

    for y in 0..height {
        let v = y as f64 / height as f64;
        for x in 0..width {
            let u = x as f64 / width as f64;
            let [sx, sy, sz] = sphere_point(u, v);

            let mut rgb = shade(params.kind, &field, [sx, sy, sz], c1, c2, c3);

            if params.has_clouds {
                rgb = overlay_clouds(&field, [sx, sy, sz], rgb);
            }

            out.put_pixel(x, y, quantize(rgb));
        }
    }

    out
}

/// Map (u, v) in [0, 1)^2 to the unit sphere via longitude/latitude.
/// u wraps: u = 0 and u = 1 land on the same point.
pub(crate) fn sphere_point(u: f64, v: f64) -> [f64; 3] {
    let theta = u * std::f64::consts::TAU;
    let phi = v * std::f64::consts::PI;
    [
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    ]
}

/// Shade one sphere point through the kind-specific remap.
pub(crate) fn shade(
    kind: PlanetKind,
    field: &NoiseField,
    [sx, sy, sz]: [f64; 3],
    c1: [f64; 3],
    c2: [f64; 3],
    c3: [f64; 3],
) -> [f64; 3] {
    match kind {
        PlanetKind::Gas | PlanetKind::IceGiant => {
            // Latitude banding warped by turbulence, blended through
            // secondary -> base -> tertiary -> white.
            let turb = field.fbm(sx * 2.0, sy * 8.0, sz * 2.0, 4, 0.5, 2.0);
            let band = (sy * 10.0 + turb * 5.0).sin();
            let n = (band + 1.0) * 0.5;

            let mut rgb = if n < 0.33 {
                mix(c2, c1, n / 0.33)
            } else if n < 0.66 {
                mix(c1, c3, (n - 0.33) / 0.33)
            } else {
                mix(c3, [1.0, 1.0, 1.0], (n - 0.66) / 0.34)
            };

            // Seed-dependent horizontal drift, matching the shader path
            let drift = field.simplex3(sx * 2.0, sy * 2.0, sz * 2.0) * 0.05;
            for channel in &mut rgb {
                *channel += drift;
            }
            rgb
        }

        PlanetKind::Lava => {
            // Cubing sparsifies the cracks: only the top of the fbm range
            // survives as molten veins over near-black rock.
            let n = field.fbm(sx * 3.0, sy * 3.0, sz * 3.0, 5, 0.5, 2.0);
            let crack = n * n * n;
            if crack > LAVA_CRACK_THRESHOLD {
                let heat = (crack - LAVA_CRACK_THRESHOLD) / (1.0 - LAVA_CRACK_THRESHOLD);
                [1.0, 0.5 * heat, 0.0]
            } else {
                [0.08, 0.04, 0.04]
            }
        }

        PlanetKind::Ocean => {
            let continents = field.fbm(sx * 1.5, sy * 1.5, sz * 1.5, 4, 0.5, 2.0);
            if continents > OCEAN_LAND_THRESHOLD {
                let detail = field.fbm(sx * 6.0, sy * 6.0, sz * 6.0, 2, 0.5, 2.0);
                [c3[0] * detail, c3[1] * detail, c3[2] * detail]
            } else {
                // Deep water: darker with depth, biased toward blue
                let depth = continents / OCEAN_LAND_THRESHOLD;
                [
                    c2[0] * depth,
                    c2[1] * depth,
                    c2[2] * depth + 40.0 / 255.0,
                ]
            }
        }

        // Generic terrain: three elevation bands
        PlanetKind::Rocky | PlanetKind::Desert | PlanetKind::Ice | PlanetKind::Forest => {
            let n = field.fbm(sx * 2.5, sy * 2.5, sz * 2.5, 6, 0.5, 2.0);
            let mut rgb = if n < 0.45 {
                c2
            } else if n < 0.6 {
                mix(c2, c1, (n - 0.45) / 0.15)
            } else {
                mix(c1, c3, (n - 0.6) / 0.4)
            };

            if kind == PlanetKind::Rocky {
                // Independent high-frequency field darkens crater floors
                let crater = field.simplex3(sx * 15.0, sy * 15.0, sz * 15.0);
                if crater > 0.6 {
                    for channel in &mut rgb {
                        *channel *= 0.7;
                    }
                }
            }
            rgb
        }
    }
}

/// Blend an independent cloud field toward white above the coverage
/// threshold.
pub(crate) fn overlay_clouds(field: &NoiseField, [sx, sy, sz]: [f64; 3], rgb: [f64; 3]) -> [f64; 3] {
    let cloud = field.fbm(sx * 3.0 + 10.0, sy * 3.0, sz * 3.0, 3, 0.5, 2.0);
    if cloud > CLOUD_THRESHOLD {
        let alpha = ((cloud - CLOUD_THRESHOLD) * 2.0).min(CLOUD_MAX_ALPHA);
        mix(rgb, [1.0, 1.0, 1.0], alpha)
    } else {
        rgb
    }
}

fn mix(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn quantize([r, g, b]: [f64; 3]) -> [u8; 4] {
    [
        (r * 255.0).round().clamp(0.0, 255.0) as u8,
        (g * 255.0).round().clamp(0.0, 255.0) as u8,
        (b * 255.0).round().clamp(0.0, 255.0) as u8,
        255,
    ]
}
