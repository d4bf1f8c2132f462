//! Landing descent, perch rest, and takeoff climb.

use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use crate::garden::constants::{landing, takeoff};
use crate::garden::state::{Butterfly, Phase};
use crate::util::vec2::Vec2;
use crate::util::{ease_in_out_cubic, ease_out_cubic};

/// Progress accumulates in f32, so the nominal final step can land a hair
/// below 1.0; treat near-one as complete.
const PROGRESS_DONE: f32 = 1.0 - 1e-6;

/// Eased climb back into flight. Horizontal drift ramps up with the ease,
/// vertical climb accelerates, then the agent resumes normal flight.
pub fn update_takeoff(b: &mut Butterfly, f: f32) {
    b.takeoff_progress += takeoff::PROGRESS_RATE * f;
    let ease = ease_out_cubic(b.takeoff_progress.min(1.0));

    b.pos.x += b.vel.x * f * (takeoff::DRIFT_BASE + ease * takeoff::DRIFT_EASE_BONUS);
    b.pos.y -= (takeoff::CLIMB_BASE + ease * takeoff::CLIMB_EASE_BONUS) * f;

    if b.takeoff_progress >= PROGRESS_DONE {
        b.phase = Phase::Flying;
        b.takeoff_progress = 0.0;
    }
}

/// Rest on the perch until the timer expires, then depart on an
/// upward-biased heading at base speed.
pub fn update_landed<R: Rng>(b: &mut Butterfly, now: f64, rng: &mut R) {
    if now < b.landed_until {
        return;
    }

    b.heading = -FRAC_PI_2 + (rng.gen::<f32>() - 0.5) * takeoff::HEADING_SPREAD;
    b.speed = b.base_speed;
    b.vel = Vec2::from_angle(b.heading) * b.speed;
    b.facing = if b.vel.x > 0.0 { -1 } else { 1 };
    b.phase = Phase::TakingOff;
    b.takeoff_progress = 0.0;
}

/// Eased descent: horizontal motion damps out while the vertical drop
/// accelerates, until the touchdown point is reached.
pub fn update_landing<R: Rng>(b: &mut Butterfly, f: f32, now: f64, rng: &mut R) {
    b.landing_progress += landing::PROGRESS_RATE * f;
    let ease = ease_in_out_cubic(b.landing_progress.min(1.0));

    b.pos.x += b.vel.x * f * (1.0 - ease * 0.9);
    b.pos.y += (1.0 + ease * 1.5) * f;

    if b.pos.y >= b.target_land_y || b.landing_progress >= PROGRESS_DONE {
        b.pos.y = b.target_land_y;
        b.phase = Phase::Landed;
        b.landing_progress = 0.0;
        b.landed_until = now + landing::REST_MIN_MS + rng.gen::<f64>() * landing::REST_RANGE_MS;
    }
}
