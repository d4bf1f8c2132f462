//! Agent state definitions.
//!
//! One [`Butterfly`] exists per [`AgentRecord`]; it is created when the
//! record first appears in the input list, mutated every integrator step
//! while not frozen, and discarded on the next whole-list re-seed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::garden::constants::{bobbing, depth, flight, flutter, respawn, spawn};
use crate::garden::record::AgentRecord;
use crate::util::vec2::Vec2;

/// Container bounds the agent flies within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    /// Fallback when the rendering surface has not been measured yet
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Discrete lifecycle phase of an agent's motion state machine.
/// Exactly one phase holds at a time; transitions are the only place the
/// phase-specific scratch fields are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Normal wandering locomotion
    Flying,
    /// Eased descent toward a touchdown point
    Landing,
    /// Resting on a perch until the rest timer expires
    Landed,
    /// Eased climb back into flight
    TakingOff,
    /// Parked off-screen at the sentinel until the respawn timer expires
    Waiting,
}

/// Full per-agent simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Butterfly {
    // Hot fields, touched every step
    /// Position in viewport coordinates
    pub pos: Vec2,
    /// Velocity derived from heading and speed, cached because the landing
    /// and takeoff phases reuse the last flight velocity
    pub vel: Vec2,
    /// Flight direction in radians
    pub heading: f32,
    /// Current speed including transient flutter multipliers
    pub speed: f32,
    /// Speed without transient multipliers
    pub base_speed: f32,
    /// Smoothed angular velocity applied to heading each step
    pub turn_rate: f32,
    pub phase: Phase,
    /// Motion updates suppressed while true (pointer hover)
    pub frozen: bool,

    // Phase scratch fields, written only on transitions
    /// Rest expires at this time (ms since sim start)
    pub landed_until: f64,
    /// Touchdown y-coordinate for the current landing
    pub target_land_y: f32,
    pub takeoff_progress: f32,
    pub landing_progress: f32,
    /// Re-entry time while parked off-screen
    pub next_spawn_at: f64,

    // Organic motion parameters
    pub wander_angle: f32,
    pub wander_speed: f32,
    pub bobbing_phase: f32,
    pub bobbing_phase2: f32,
    pub bobbing_speed: f32,
    pub next_flutter_at: f64,
    pub flutter_until: f64,

    // Render hints
    /// Depth cue: render scale derived from vertical position
    pub size: f32,
    /// Sprite flip: -1 when moving right, 1 when moving left
    /// (the artwork faces left at rest)
    pub facing: i8,
    /// Which artwork variant the renderer should use
    pub sprite_index: u8,

    /// Bounds captured at the most recent seed or re-entry
    pub bounds: Viewport,
    /// Back-reference to the externally owned record, never mutated here
    pub record: AgentRecord,
}

impl Butterfly {
    /// Seed a fresh agent entering from a random horizontal edge
    pub fn seed<R: Rng>(record: AgentRecord, bounds: Viewport, now: f64, rng: &mut R) -> Self {
        let base_speed = spawn::BASE_SPEED_MIN + rng.gen::<f32>() * spawn::BASE_SPEED_RANGE;

        let mut butterfly = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            heading: 0.0,
            speed: base_speed,
            base_speed,
            turn_rate: 0.0,
            phase: Phase::Flying,
            frozen: false,
            landed_until: 0.0,
            target_land_y: 0.0,
            takeoff_progress: 0.0,
            landing_progress: 0.0,
            next_spawn_at: 0.0,
            wander_angle: 0.0,
            wander_speed: flight::WANDER_SPEED_MIN + rng.gen::<f32>() * flight::WANDER_SPEED_RANGE,
            bobbing_phase: rng.gen::<f32>() * 2.0 * PI,
            bobbing_phase2: rng.gen::<f32>() * 2.0 * PI,
            bobbing_speed: bobbing::SPEED_MIN + rng.gen::<f32>() * bobbing::SPEED_RANGE,
            next_flutter_at: now
                + flutter::FIRST_DELAY_MIN_MS
                + rng.gen::<f64>() * flutter::FIRST_DELAY_RANGE_MS,
            flutter_until: 0.0,
            size: 0.0,
            facing: 1,
            sprite_index: rng.gen_range(0..spawn::SPRITE_VARIANTS),
            bounds,
            record,
        };

        butterfly.enter_from_edge(rng);
        butterfly
    }

    /// Place the agent just beyond a random horizontal edge, headed inward
    /// with a small random perturbation. Used at seeding and at respawn.
    pub fn enter_from_edge<R: Rng>(&mut self, rng: &mut R) {
        let offset = spawn::ENTRY_OFFSET_MIN + rng.gen::<f32>() * spawn::ENTRY_OFFSET_RANGE;
        let jitter = (rng.gen::<f32>() - 0.5) * spawn::HEADING_JITTER;
        let from_left = rng.gen::<f32>() > 0.5;

        if from_left {
            self.pos.x = -offset;
            self.heading = jitter;
        } else {
            self.pos.x = self.bounds.width + offset;
            self.heading = PI + jitter;
        }
        self.pos.y = rng.gen::<f32>() * self.bounds.height;

        self.speed = self.base_speed;
        self.vel = Vec2::from_angle(self.heading) * self.speed;
        self.facing = if self.vel.x > 0.0 { -1 } else { 1 };
        self.size = depth_scale(self.pos.y, self.bounds.height);
        self.phase = Phase::Flying;
    }

    /// Park off-screen to wait for a scheduled re-entry
    pub fn park_for_respawn(&mut self, next_spawn_at: f64) {
        self.phase = Phase::Waiting;
        self.next_spawn_at = next_spawn_at;
        self.pos = Vec2::new(respawn::SENTINEL, respawn::SENTINEL);
    }

    /// Refresh the sprite-facing flag from the horizontal velocity,
    /// with hysteresis so it does not flicker near zero
    pub fn update_facing(&mut self) {
        if self.vel.x.abs() > flight::FACING_HYSTERESIS {
            self.facing = if self.vel.x > 0.0 { -1 } else { 1 };
        }
    }

    /// Hover label for the tooltip overlay
    pub fn label(&self) -> String {
        self.record.label()
    }

    /// All continuous fields are finite. A false result means the agent
    /// must be re-parked before the next update.
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite()
            && self.vel.is_finite()
            && self.heading.is_finite()
            && self.speed.is_finite()
            && self.turn_rate.is_finite()
    }
}

/// Depth cue: agents lower in the viewport render larger.
/// Linear in `y / height`, clamped to `[MIN_SCALE, MAX_SCALE]`.
pub fn depth_scale(y: f32, height: f32) -> f32 {
    let normalized = (y / height).clamp(0.0, 1.0);
    depth::MIN_SCALE + normalized * (depth::MAX_SCALE - depth::MIN_SCALE)
}
