//! Agent population management.
//!
//! Converts externally supplied record lists into seeded agent state and
//! keeps that set authoritative for the integrator and the renderer. Record
//! replacement is a full atomic re-seed, not an incremental diff: agents
//! present in both the old and new list do not keep their prior pose.

use parking_lot::RwLock;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::garden::record::AgentRecord;
use crate::garden::state::{Butterfly, Viewport};
use crate::garden::systems;

/// Shared handle: single writer (the integrator), many readers (renderer,
/// hover handlers). Whole-list replacement happens under the write lock, so
/// a tick sees either the old full list or the new one, never a mix.
pub type SharedPopulation = Arc<RwLock<Population>>;

pub struct Population {
    butterflies: Vec<Butterfly>,
    viewport: Viewport,
    rng: SmallRng,
}

impl Population {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            butterflies: Vec::new(),
            viewport,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded constructor for deterministic tests
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self {
            butterflies: Vec::new(),
            viewport,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn into_shared(self) -> SharedPopulation {
        Arc::new(RwLock::new(self))
    }

    /// Replace the whole agent set from a fresh record list.
    /// An empty list yields an empty set; there are no error conditions.
    pub fn set_records(&mut self, records: Vec<AgentRecord>, now: f64) {
        let Self {
            butterflies,
            viewport,
            rng,
        } = self;

        tracing::debug!(count = records.len(), "re-seeding population");
        *butterflies = records
            .into_iter()
            .map(|record| Butterfly::seed(record, *viewport, now, &mut *rng))
            .collect();
    }

    /// Update the bounds used by subsequent seeds and re-entries
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Live read access for rendering
    pub fn states(&self) -> &[Butterfly] {
        &self.butterflies
    }

    pub fn get(&self, id: &str) -> Option<&Butterfly> {
        self.butterflies.iter().find(|b| b.record.id == id)
    }

    pub fn len(&self) -> usize {
        self.butterflies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.butterflies.is_empty()
    }

    /// Toggle hover-freeze for one agent. Unknown ids are ignored; a stale
    /// callback referencing a removed agent is not an error.
    pub fn set_frozen(&mut self, id: &str, frozen: bool) -> bool {
        match self.butterflies.iter_mut().find(|b| b.record.id == id) {
            Some(b) => {
                b.frozen = frozen;
                true
            }
            None => false,
        }
    }

    /// Advance every agent by one step. Frozen agents are skipped inside
    /// [`systems::step`] but remain part of the rendered set.
    pub fn step_all(&mut self, dt_ms: f64, now_ms: f64) {
        let Self {
            butterflies, rng, ..
        } = self;

        for butterfly in butterflies.iter_mut() {
            systems::step(butterfly, dt_ms, now_ms, &mut *rng);
        }
    }
}
