//! Normal wandering locomotion.
//!
//! Order matters and mirrors the rest of the machine: steer, flutter,
//! integrate, bob, clamp, then roll for landing or detect off-screen exit.

use rand::Rng;

use crate::garden::constants::{bobbing, flight, flutter, landing, respawn};
use crate::garden::state::{depth_scale, Butterfly, Phase};
use crate::util::vec2::Vec2;
use crate::util::wrap_angle;

pub fn update_flight<R: Rng>(b: &mut Butterfly, f: f32, now: f64, rng: &mut R) {
    let width = b.bounds.width;
    let height = b.bounds.height;

    // Wandering: a slowly drifting steering bias, damped so it cannot spiral
    b.wander_angle += (rng.gen::<f32>() - 0.5) * b.wander_speed * f;
    b.wander_angle *= flight::WANDER_DAMPING;

    b.turn_rate += b.wander_angle * flight::TURN_GAIN * f;
    b.turn_rate *= flight::TURN_DAMPING;
    b.heading += b.turn_rate * f;

    // Soft boundary repulsion: steer back toward the interior, stronger the
    // closer the edge. The bottom margin starts at the lowered flight
    // ceiling, not the viewport bottom.
    let mut steer = Vec2::ZERO;
    if b.pos.x < flight::EDGE_MARGIN {
        steer.x = (flight::EDGE_MARGIN - b.pos.x) / flight::EDGE_MARGIN;
    } else if b.pos.x > width - flight::EDGE_MARGIN {
        steer.x = -(b.pos.x - (width - flight::EDGE_MARGIN)) / flight::EDGE_MARGIN;
    }
    if b.pos.y < flight::EDGE_MARGIN {
        steer.y = (flight::EDGE_MARGIN - b.pos.y) / flight::EDGE_MARGIN;
    } else if b.pos.y > height - flight::GROUND_CLEARANCE {
        steer.y = -(b.pos.y - (height - flight::GROUND_CLEARANCE)) / flight::EDGE_MARGIN;
    }

    let strength = steer.length().min(1.0);
    if strength > flight::EDGE_DEADBAND {
        let diff = wrap_angle(steer.angle() - b.heading);
        b.heading += diff * strength * flight::EDGE_STEER_GAIN * f;
    }

    // Flutter bursts: brief randomized speed windows
    if now >= b.next_flutter_at && now > b.flutter_until {
        b.flutter_until = now + flutter::WINDOW_MIN_MS + rng.gen::<f64>() * flutter::WINDOW_RANGE_MS;
        b.next_flutter_at = now + flutter::NEXT_MIN_MS + rng.gen::<f64>() * flutter::NEXT_RANGE_MS;
    }
    let speed_mult = if now < b.flutter_until {
        flutter::SPEED_MULT_MIN + rng.gen::<f32>() * flutter::SPEED_MULT_RANGE
    } else {
        1.0
    };
    b.speed = b.base_speed * speed_mult;

    b.vel = Vec2::from_angle(b.heading) * b.speed;
    b.pos += b.vel * f;

    // Two independent oscillators layered for organic vertical wobble
    b.bobbing_phase += b.bobbing_speed * f;
    b.bobbing_phase2 += b.bobbing_speed * bobbing::SECONDARY_RATIO * f;
    let bob = b.bobbing_phase.sin() * bobbing::PRIMARY_AMPLITUDE
        + (b.bobbing_phase2 * bobbing::SECONDARY_FREQ).sin() * bobbing::SECONDARY_AMPLITUDE;
    b.pos.y += bob * f * bobbing::BLEND;

    b.update_facing();

    // Hard clamps with a half-energy bounce, heading biased back inward
    let max_y = height - flight::GROUND_CLEARANCE;
    if b.pos.y > max_y {
        b.pos.y = max_y;
        if b.vel.y > 0.0 {
            b.vel.y = -b.vel.y.abs() * flight::BOUNCE_RETENTION;
        }
        b.heading = -b.heading.abs();
    }
    if b.pos.y < 0.0 {
        b.pos.y = 0.0;
        if b.vel.y < 0.0 {
            b.vel.y = b.vel.y.abs() * flight::BOUNCE_RETENTION;
        }
        b.heading = b.heading.abs();
    }

    b.size = depth_scale(b.pos.y, height);

    // Landing roll, only in the lower half of the viewport
    if b.pos.y > height * landing::TRIGGER_THRESHOLD && rng.gen::<f32>() < landing::TRIGGER_CHANCE {
        b.phase = Phase::Landing;
        b.landing_progress = 0.0;
        b.target_land_y = b.pos.y + landing::TARGET_DROP_MIN + rng.gen::<f32>() * landing::TARGET_DROP_RANGE;
        return;
    }

    // Off-screen exit: park at the sentinel and schedule a re-entry
    let margin = respawn::OFFSCREEN_MARGIN;
    let off_screen = b.pos.x < -margin
        || b.pos.x > width + margin
        || b.pos.y < -margin
        || b.pos.y > height + margin;
    if off_screen {
        b.park_for_respawn(now + rng.gen::<f64>() * respawn::MAX_DELAY_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::record::AgentRecord;
    use crate::garden::state::Viewport;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const WIDTH: f32 = 1000.0;
    const HEIGHT: f32 = 800.0;

    fn flying_at(x: f32, y: f32, rng: &mut SmallRng) -> Butterfly {
        let mut b = Butterfly::seed(
            AgentRecord::new("b1", "Alice", "hi", None),
            Viewport::new(WIDTH, HEIGHT),
            0.0,
            rng,
        );
        b.pos = Vec2::new(x, y);
        b
    }

    #[test]
    fn test_bounds_containment_over_time() {
        let mut rng = SmallRng::seed_from_u64(17);
        let mut b = flying_at(500.0, 200.0, &mut rng);
        // Disarm the landing roll so the agent stays in flight
        let mut now = 0.0;

        for _ in 0..5000 {
            now += 16.0;
            if b.phase != Phase::Flying {
                break;
            }
            update_flight(&mut b, 1.0, now, &mut rng);
            assert!(b.pos.y >= 0.0, "y above top bound");
            assert!(b.pos.y <= HEIGHT - 400.0 + 1e-3, "y below flight ceiling");
        }
    }

    #[test]
    fn test_bottom_clamp_bounces() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut b = flying_at(500.0, HEIGHT - 400.5, &mut rng);
        b.heading = std::f32::consts::FRAC_PI_2; // straight down
        b.wander_angle = 0.0;
        b.turn_rate = 0.0;

        update_flight(&mut b, 1.0, 16.0, &mut rng);

        assert!(b.pos.y <= HEIGHT - 400.0 + 1e-3);
        assert!(b.vel.y <= 0.0, "vertical velocity must point up after clamp");
        assert!(b.heading <= 0.0, "heading must be biased upward");
    }

    #[test]
    fn test_top_clamp_bounces() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut b = flying_at(500.0, 0.5, &mut rng);
        b.heading = -std::f32::consts::FRAC_PI_2; // straight up
        b.wander_angle = 0.0;
        b.turn_rate = 0.0;

        update_flight(&mut b, 1.0, 16.0, &mut rng);

        assert!(b.pos.y >= 0.0);
        assert!(b.vel.y >= 0.0, "vertical velocity must point down after clamp");
        assert!(b.heading >= 0.0, "heading must be biased downward");
    }

    #[test]
    fn test_edge_steering_turns_back() {
        let mut rng = SmallRng::seed_from_u64(3);
        // Deep in the left margin, flying further left
        let mut b = flying_at(10.0, 400.0, &mut rng);
        b.heading = std::f32::consts::PI;
        b.wander_angle = 0.0;
        b.turn_rate = 0.0;

        let initial_outward = wrap_angle(b.heading).abs();
        for i in 1..=20 {
            if b.phase != Phase::Flying {
                break;
            }
            update_flight(&mut b, 1.0, i as f64 * 16.0, &mut rng);
        }

        // Heading should have rotated toward 0 (rightward, back inside)
        assert!(wrap_angle(b.heading).abs() < initial_outward);
    }

    #[test]
    fn test_flutter_schedules_window() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut b = flying_at(500.0, 300.0, &mut rng);
        b.next_flutter_at = 100.0;
        b.flutter_until = 0.0;

        update_flight(&mut b, 1.0, 200.0, &mut rng);

        assert!(b.flutter_until >= 500.0 && b.flutter_until <= 1100.0);
        assert!(b.next_flutter_at >= 3200.0 && b.next_flutter_at <= 13200.0);
    }

    #[test]
    fn test_flutter_boosts_speed() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut b = flying_at(500.0, 300.0, &mut rng);
        b.flutter_until = 10_000.0;
        b.next_flutter_at = 50_000.0;

        update_flight(&mut b, 1.0, 200.0, &mut rng);

        let mult = b.speed / b.base_speed;
        assert!(mult >= 1.6 && mult <= 2.0);
    }

    #[test]
    fn test_speed_resets_after_flutter() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut b = flying_at(500.0, 300.0, &mut rng);
        b.flutter_until = 100.0;
        b.next_flutter_at = 50_000.0;

        update_flight(&mut b, 1.0, 200.0, &mut rng);

        assert_eq!(b.speed, b.base_speed);
    }

    #[test]
    fn test_size_tracks_depth() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut b = flying_at(500.0, 100.0, &mut rng);
        update_flight(&mut b, 1.0, 16.0, &mut rng);
        assert_eq!(b.size, depth_scale(b.pos.y, HEIGHT));
    }

    #[test]
    fn test_offscreen_exit_parks_at_sentinel() {
        let mut rng = SmallRng::seed_from_u64(6);
        let mut b = flying_at(WIDTH + 500.0, 300.0, &mut rng);

        update_flight(&mut b, 1.0, 1000.0, &mut rng);

        assert_eq!(b.phase, Phase::Waiting);
        assert_eq!(b.pos.x, -10000.0);
        assert!(b.next_spawn_at >= 1000.0 && b.next_spawn_at <= 21000.0);
    }

    #[test]
    fn test_no_landing_in_upper_half() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut b = flying_at(500.0, 100.0, &mut rng);

        // Many steps near the top; the landing roll must never fire
        for i in 1..=2000 {
            if b.phase != Phase::Flying {
                break;
            }
            b.pos = Vec2::new(500.0, 100.0);
            update_flight(&mut b, 1.0, i as f64 * 16.0, &mut rng);
            assert_ne!(b.phase, Phase::Landing);
        }
    }
}
