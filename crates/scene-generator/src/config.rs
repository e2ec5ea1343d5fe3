//! Generator configuration
//!
//! Static tunables: the per-kind weight table and the orbital spacing
//! profile. A degenerate weight table (zero or negative total) would make
//! classification unable to select a kind, so it is rejected once at
//! startup rather than checked per call.

use celestial::PlanetKind;

/// Orbital spacing constants for one collection provenance.
///
/// Scanned libraries and simulated libraries use slightly different
/// spacing, but the accumulator algorithm is identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingProfile {
    /// Added to 2x star radius for the innermost bound
    pub inner_offset: f64,
    /// Fixed advance per body
    pub spacing: f64,
    /// Seeded jitter added on top of the fixed advance
    pub jitter: f64,
    /// Beyond this distance, selection is biased toward gas kinds
    pub outer_threshold: f64,
    /// Bias added to the type roll past the outer threshold
    pub gas_bias: f64,
}

impl SpacingProfile {
    /// Profile for collections scanned from a real library
    pub fn scanned() -> Self {
        Self {
            inner_offset: 40.0,
            spacing: 35.0,
            jitter: 20.0,
            outer_threshold: 200.0,
            gas_bias: 30.0,
        }
    }

    /// Profile for synthesized demo libraries
    pub fn simulated() -> Self {
        Self {
            inner_offset: 40.0,
            spacing: 30.0,
            jitter: 25.0,
            outer_threshold: 300.0,
            gas_bias: 35.0,
        }
    }
}

/// Tunables consumed by classification and orbit layout
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Selection weight per kind, indexed in [`PlanetKind::ALL`] order
    pub weights: [f64; 8],
    pub spacing: SpacingProfile,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let mut weights = [0.0; 8];
        for kind in PlanetKind::ALL {
            weights[kind as usize] = kind.profile().weight;
        }
        Self {
            weights,
            spacing: SpacingProfile::scanned(),
        }
    }
}

impl GeneratorConfig {
    /// Default weights with the simulated-library spacing profile
    pub fn simulated() -> Self {
        Self {
            spacing: SpacingProfile::simulated(),
            ..Self::default()
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn weight_of(&self, kind: PlanetKind) -> f64 {
        self.weights[kind as usize]
    }

    /// Startup validation. A config that passes here cannot fail during
    /// generation.
    pub fn validate(&self) -> Result<(), String> {
        for kind in PlanetKind::ALL {
            let w = self.weight_of(kind);
            if !w.is_finite() || w < 0.0 {
                return Err(format!("invalid weight {w} for kind {kind}"));
            }
        }
        if self.total_weight() <= 0.0 {
            return Err("total kind weight must be positive".to_string());
        }
        if self.spacing.spacing <= 0.0 {
            return Err("orbital spacing must be positive".to_string());
        }
        if self.spacing.jitter < 0.0 {
            return Err("orbital jitter must not be negative".to_string());
        }
        Ok(())
    }
}
