//! Planetary ring synthesis
//!
//! A ring texture is a flat square RGBA8 buffer: the ring color is constant
//! and all structure lives in the alpha channel, which varies with radius
//! only. Two noise taps at different frequencies produce broad gaps and
//! fine banding, faded to nothing at the inner and outer edges. Keyed by
//! the body's seed and ring color, so regeneration reproduces the same
//! bands.

use celestial::Color;
use noisefield::NoiseField;

use crate::field::ColorField;

/// Default ring texture edge length in pixels
pub const RING_SIZE: u32 = 1024;

/// Band radii on the reference-size texture; other sizes scale into this
/// range.
const INNER_RADIUS: f64 = 250.0;
const OUTER_RADIUS: f64 = 480.0;
/// Width of the inner and outer edge fades
const EDGE_FADE: f64 = 20.0;
/// Peak alpha before the edge fades
const BASE_ALPHA: f64 = 0.8;
/// Bands fainter than this render fully transparent
const MIN_ALPHA: f64 = 0.05;

/// Alpha of the ring at `radius` (reference-size coordinates).
///
/// Zero outside the band. Inside, a low-frequency tap carves broad gaps
/// and a high-frequency tap modulates fine banding on top, with linear
/// fades over the innermost and outermost stretch of the band.
pub fn ring_alpha(field: &NoiseField, radius: f64) -> f64 {
    if !(INNER_RADIUS..OUTER_RADIUS).contains(&radius) {
        return 0.0;
    }

    let broad = field.simplex3(radius * 0.1, 0.0, 0.0) * 0.5 + 0.5;
    let fine = field.simplex3(radius * 1.5, 10.0, 0.0) * 0.3 + 0.7;
    let mut alpha = broad * fine * BASE_ALPHA;

    if radius < INNER_RADIUS + EDGE_FADE {
        alpha *= (radius - INNER_RADIUS) / EDGE_FADE;
    }
    if radius > OUTER_RADIUS - EDGE_FADE {
        alpha *= (OUTER_RADIUS - radius) / EDGE_FADE;
    }

    if alpha < MIN_ALPHA {
        0.0
    } else {
        alpha
    }
}

/// Synthesize a square ring texture for a body.
///
/// The center of the buffer is the planet position; everything inside the
/// inner band radius and outside the outer one is fully transparent.
pub fn synthesize_ring(seed: i64, color: Color, size: u32) -> ColorField {
    let field = NoiseField::new(seed as f64);
    let mut out = ColorField::new(size, size);

    let center = size as f64 / 2.0;
    let scale = RING_SIZE as f64 / size as f64;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            let radius = (dx * dx + dy * dy).sqrt() * scale;

            let alpha = ring_alpha(&field, radius);
            let rgba = if alpha > 0.0 {
                let a = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
                [color.r, color.g, color.b, a]
            } else {
                [0, 0, 0, 0]
            };
            out.put_pixel(x, y, rgba);
        }
    }

    out
}
