//! Color-field cache
//!
//! Synthesis is deterministic, so a field is fully identified by the
//! body's seed, kind, and cloud flag. Entries are dropped only on explicit
//! invalidation; there is no cross-body sharing to account for.

use std::collections::HashMap;
use std::sync::Arc;

use celestial::PlanetKind;

use crate::field::ColorField;
use crate::params::SurfaceParams;
use crate::synth::synthesize;

/// Cache key: everything synthesis depends on besides resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceKey {
    pub seed: i64,
    pub kind: PlanetKind,
    pub has_clouds: bool,
}

impl SurfaceKey {
    pub fn from_params(params: &SurfaceParams) -> Self {
        Self {
            seed: params.seed,
            kind: params.kind,
            has_clouds: params.has_clouds,
        }
    }
}

/// Lazily populated cache of synthesized color fields at one resolution
#[derive(Debug)]
pub struct SurfaceCache {
    width: u32,
    height: u32,
    entries: HashMap<SurfaceKey, Arc<ColorField>>,
}

impl SurfaceCache {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            entries: HashMap::new(),
        }
    }

    /// Fetch the field for `params`, synthesizing it on first request
    pub fn get_or_synthesize(&mut self, params: &SurfaceParams) -> Arc<ColorField> {
        let key = SurfaceKey::from_params(params);
        Arc::clone(
            self.entries
                .entry(key)
                .or_insert_with(|| Arc::new(synthesize(params, self.width, self.height))),
        )
    }

    /// Peek without synthesizing
    pub fn get(&self, key: &SurfaceKey) -> Option<Arc<ColorField>> {
        self.entries.get(key).map(Arc::clone)
    }

    /// Drop one entry; returns whether it was present. The next request
    /// regenerates it from scratch.
    pub fn invalidate(&mut self, key: &SurfaceKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
