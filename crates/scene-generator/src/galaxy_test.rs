use approx::assert_relative_eq;

use crate::galaxy::{layout_galaxy, place_collection, GalaxyConfig};

#[test]
fn arms_cycle_by_index() {
    let config = GalaxyConfig::default();
    for index in 0..32 {
        let placement = place_collection(index, &config);
        assert_eq!(placement.arm, index % config.arms);
    }
}

#[test]
fn placement_is_deterministic() {
    let config = GalaxyConfig::default();
    for index in 0..64 {
        let a = place_collection(index, &config);
        let b = place_collection(index, &config);
        assert_eq!(a, b);
    }
}

#[test]
fn layout_matches_individual_placement() {
    let config = GalaxyConfig::default();
    let layout = layout_galaxy(40, &config);
    assert_eq!(layout.len(), 40);
    for (index, placement) in layout.iter().enumerate() {
        assert_eq!(placement, &place_collection(index, &config));
    }
}

#[test]
fn radius_grows_along_an_arm() {
    // Within one arm, position-in-arm contributes more than the jitter can
    // take away once indices are far enough apart.
    let config = GalaxyConfig::default();
    let near = place_collection(0, &config);
    let far = place_collection(config.arms * 20, &config);
    assert!(far.radius > near.radius);
}

#[test]
fn radius_matches_position_components() {
    let config = GalaxyConfig::default();
    for index in 0..16 {
        let p = place_collection(index, &config);
        // The planar distance differs from the arm radius only by the
        // perpendicular spread.
        let planar = (p.position.x.powi(2) + p.position.z.powi(2)).sqrt();
        let max_spread = config.arm_spread * p.radius * 0.3 * 0.5;
        assert!(
            (planar - p.radius).abs() <= max_spread + 1e-9,
            "index {index}: planar {planar}, radius {}",
            p.radius
        );
    }
}

#[test]
fn disc_flattens_toward_the_rim() {
    let config = GalaxyConfig::default();
    for index in 0..200 {
        let p = place_collection(index, &config);
        let cap = config.vertical_amplitude * 0.5 * (1.0 - p.radius / config.falloff_radius).abs();
        assert!(
            p.position.y.abs() <= cap + 1e-9,
            "index {index}: y {} beyond cap {cap}",
            p.position.y
        );
    }
}

#[test]
fn inner_bound_with_zero_jitter_draw() {
    // Index 0 draws seed 0 for every placement component, which the scalar
    // hash maps to 0; the placement collapses to the arm's base radius.
    let config = GalaxyConfig::default();
    let p = place_collection(0, &config);
    assert_relative_eq!(p.radius, config.base_radius);
}
