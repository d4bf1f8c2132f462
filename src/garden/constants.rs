//! Motion tuning constants.
//!
//! These shape how organic the flight looks; none of them are contractual.
//! Distances are viewport pixels, times are milliseconds, and per-step rates
//! assume the 60fps-normalized frame factor `f = dt / FRAME_MS`.

/// Frame normalization and flight steering
pub mod flight {
    /// One 60fps frame in milliseconds; dt is divided by this to get `f`
    pub const FRAME_MS: f64 = 16.0;
    /// Wander angle decay per step (keeps the drift from spiraling)
    pub const WANDER_DAMPING: f32 = 0.98;
    /// How strongly the wander angle feeds the turn rate
    pub const TURN_GAIN: f32 = 0.002;
    /// Turn-rate friction per step
    pub const TURN_DAMPING: f32 = 0.92;
    /// Distance from an edge at which repulsion starts
    pub const EDGE_MARGIN: f32 = 120.0;
    /// Heading blend factor toward the interior per unit edge proximity
    pub const EDGE_STEER_GAIN: f32 = 0.03;
    /// Steer magnitudes below this are ignored
    pub const EDGE_DEADBAND: f32 = 0.05;
    /// The flight ceiling for the bottom edge sits this far above the
    /// viewport bottom; agents render larger there and need headroom
    pub const GROUND_CLEARANCE: f32 = 400.0;
    /// Vertical velocity retained after bouncing off a clamp
    pub const BOUNCE_RETENTION: f32 = 0.5;
    /// Minimum |vx| before the sprite facing flips (avoids flicker)
    pub const FACING_HYSTERESIS: f32 = 0.2;
    /// Per-agent wander drift speed range: min + rand * range
    pub const WANDER_SPEED_MIN: f32 = 0.3;
    pub const WANDER_SPEED_RANGE: f32 = 0.4;
}

/// Edge entry and initial seeding
pub mod spawn {
    /// Agents enter from min..min+range pixels beyond a horizontal edge
    pub const ENTRY_OFFSET_MIN: f32 = 100.0;
    pub const ENTRY_OFFSET_RANGE: f32 = 200.0;
    /// Total spread of the entry heading perturbation (centered on 0 or PI)
    pub const HEADING_JITTER: f32 = 0.6;
    /// Base flight speed range (simulation units per normalized step)
    pub const BASE_SPEED_MIN: f32 = 0.8;
    pub const BASE_SPEED_RANGE: f32 = 0.8;
    /// Number of sprite artwork variants the renderer can pick from
    pub const SPRITE_VARIANTS: u8 = 3;
}

/// Flutter bursts (brief wing-beat accelerations)
pub mod flutter {
    /// First flutter after seeding: min + rand * range
    pub const FIRST_DELAY_MIN_MS: f64 = 2000.0;
    pub const FIRST_DELAY_RANGE_MS: f64 = 8000.0;
    /// Burst window duration
    pub const WINDOW_MIN_MS: f64 = 300.0;
    pub const WINDOW_RANGE_MS: f64 = 600.0;
    /// Gap until the next burst is scheduled
    pub const NEXT_MIN_MS: f64 = 3000.0;
    pub const NEXT_RANGE_MS: f64 = 10000.0;
    /// Speed multiplier while fluttering
    pub const SPEED_MULT_MIN: f32 = 1.6;
    pub const SPEED_MULT_RANGE: f32 = 0.4;
}

/// Layered vertical bobbing
pub mod bobbing {
    /// Per-agent oscillator speed range
    pub const SPEED_MIN: f32 = 0.04;
    pub const SPEED_RANGE: f32 = 0.02;
    /// Second oscillator advances at this fraction of the first
    pub const SECONDARY_RATIO: f32 = 0.6;
    /// Second oscillator frequency multiplier at sample time
    pub const SECONDARY_FREQ: f32 = 1.7;
    pub const PRIMARY_AMPLITUDE: f32 = 1.8;
    pub const SECONDARY_AMPLITUDE: f32 = 1.0;
    /// Overall bob contribution per normalized step
    pub const BLEND: f32 = 0.3;
}

/// Landing and rest
pub mod landing {
    /// Landing can only trigger below this fraction of the viewport height
    pub const TRIGGER_THRESHOLD: f32 = 0.5;
    /// Per-step probability of starting a landing while eligible
    pub const TRIGGER_CHANCE: f32 = 0.002;
    /// Landing progress advance per normalized step
    pub const PROGRESS_RATE: f32 = 0.015;
    /// Touchdown point below the trigger altitude: min + rand * range
    pub const TARGET_DROP_MIN: f32 = 60.0;
    pub const TARGET_DROP_RANGE: f32 = 40.0;
    /// Rest duration once landed: min + rand * range
    pub const REST_MIN_MS: f64 = 5000.0;
    pub const REST_RANGE_MS: f64 = 25000.0;
}

/// Takeoff after rest
pub mod takeoff {
    /// Takeoff progress advance per normalized step
    pub const PROGRESS_RATE: f32 = 0.02;
    /// Total spread of the upward-biased departure heading (about -PI/2)
    pub const HEADING_SPREAD: f32 = 1.2;
    /// Climb rate: base + ease * bonus, per normalized step
    pub const CLIMB_BASE: f32 = 1.5;
    pub const CLIMB_EASE_BONUS: f32 = 1.5;
    /// Horizontal drift ramps from base to base + bonus as the ease completes
    pub const DRIFT_BASE: f32 = 0.3;
    pub const DRIFT_EASE_BONUS: f32 = 0.7;
}

/// Off-screen exit and re-entry
pub mod respawn {
    /// How far past every bound counts as off-screen
    pub const OFFSCREEN_MARGIN: f32 = 250.0;
    /// Re-entry is scheduled up to this long after exit
    pub const MAX_DELAY_MS: f64 = 20000.0;
    /// Parking coordinate for agents waiting off-screen
    pub const SENTINEL: f32 = -10000.0;
}

/// Pseudo-depth size cue
pub mod depth {
    /// Render scale at the top of the viewport
    pub const MIN_SCALE: f32 = 0.2;
    /// Render scale at the bottom of the viewport
    pub const MAX_SCALE: f32 = 0.6;
}
