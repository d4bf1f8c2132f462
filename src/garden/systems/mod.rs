//! Per-step motion systems.
//!
//! Each system is a free function over one agent's mutable state, dispatched
//! by phase from [`step`]. Timing inputs are milliseconds since simulation
//! start; `dt` is pre-capped by the caller.

pub mod flight;
pub mod landing;
pub mod respawn;

use rand::Rng;

use crate::garden::constants::flight::FRAME_MS;
use crate::garden::state::{Butterfly, Phase};

/// Advance one agent by one step.
///
/// Frozen agents are held entirely constant. A non-finite agent is re-parked
/// for respawn instead of being allowed to poison the rest of the batch.
pub fn step<R: Rng>(butterfly: &mut Butterfly, dt_ms: f64, now_ms: f64, rng: &mut R) {
    if butterfly.frozen {
        return;
    }

    if !butterfly.is_finite() {
        tracing::warn!(
            id = %butterfly.record.id,
            "non-finite agent state, parking for respawn"
        );
        butterfly.park_for_respawn(now_ms);
        return;
    }

    // Normalize to a 60fps-equivalent frame factor
    let f = (dt_ms / FRAME_MS) as f32;

    match butterfly.phase {
        Phase::TakingOff => landing::update_takeoff(butterfly, f),
        Phase::Landed => landing::update_landed(butterfly, now_ms, rng),
        Phase::Landing => landing::update_landing(butterfly, f, now_ms, rng),
        Phase::Waiting => respawn::update_waiting(butterfly, now_ms, rng),
        Phase::Flying => flight::update_flight(butterfly, f, now_ms, rng),
    }
}
