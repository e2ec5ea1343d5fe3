use celestial::{Color, PlanetKind};
use noisefield::NoiseField;

use crate::ring::{ring_alpha, synthesize_ring, RING_SIZE};

const TAN: Color = Color::new(0xD2, 0xB4, 0x8C);

#[test]
fn ring_synthesis_is_deterministic() {
    let a = synthesize_ring(42_001, TAN, 128);
    let b = synthesize_ring(42_001, TAN, 128);
    assert_eq!(a.bytes(), b.bytes());
}

#[test]
fn seeds_produce_distinct_bands() {
    let a = synthesize_ring(1, TAN, 128);
    let b = synthesize_ring(2, TAN, 128);
    assert_ne!(a.bytes(), b.bytes());
}

#[test]
fn alpha_is_zero_outside_the_band() {
    let field = NoiseField::new(7.0);
    assert_eq!(ring_alpha(&field, 0.0), 0.0);
    assert_eq!(ring_alpha(&field, 249.9), 0.0);
    assert_eq!(ring_alpha(&field, 250.0), 0.0); // fade starts from zero
    assert_eq!(ring_alpha(&field, 480.0), 0.0);
    assert_eq!(ring_alpha(&field, 1000.0), 0.0);
}

#[test]
fn alpha_stays_below_the_band_peak() {
    // (n*0.5 + 0.5) <= 1 and (n2*0.3 + 0.7) <= 1, so no radius can exceed
    // the base alpha.
    let field = NoiseField::new(13.0);
    let mut r = 250.0;
    while r < 480.0 {
        let a = ring_alpha(&field, r);
        assert!((0.0..=0.8).contains(&a), "alpha {a} at radius {r}");
        r += 0.5;
    }
}

#[test]
fn faint_bands_are_fully_transparent() {
    // The profile never emits a barely-visible sliver: anything below the
    // cutoff collapses to zero.
    let field = NoiseField::new(99.0);
    let mut r = 250.0;
    while r < 480.0 {
        let a = ring_alpha(&field, r);
        assert!(a == 0.0 || a >= 0.05, "sliver alpha {a} at radius {r}");
        r += 0.5;
    }
}

#[test]
fn texture_is_rotationally_symmetric() {
    // Alpha depends on radius alone, so pixels mirrored through the center
    // carry identical RGBA.
    let tex = synthesize_ring(5, TAN, 256);
    for offset in [40u32, 80, 100, 120] {
        let c = 128;
        let right = tex.pixel(c + offset, c);
        let left = tex.pixel(c - 1 - offset, c);
        let down = tex.pixel(c, c + offset);
        assert_eq!(right, left);
        assert_eq!(right, down);
    }
}

#[test]
fn center_and_corners_are_transparent() {
    let tex = synthesize_ring(11, TAN, 128);
    assert_eq!(tex.pixel(64, 64)[3], 0);
    assert_eq!(tex.pixel(0, 0)[3], 0);
    assert_eq!(tex.pixel(127, 127)[3], 0);
}

#[test]
fn visible_pixels_carry_the_ring_color() {
    let color = PlanetKind::IceGiant.ring_color();
    let tex = synthesize_ring(3, color, RING_SIZE / 4);
    let mut visible = 0usize;
    for y in 0..tex.height() {
        for x in 0..tex.width() {
            let [r, g, b, a] = tex.pixel(x, y);
            if a > 0 {
                visible += 1;
                assert_eq!([r, g, b], [color.r, color.g, color.b]);
            }
        }
    }
    assert!(visible > 0, "ring rendered no visible band");
}
