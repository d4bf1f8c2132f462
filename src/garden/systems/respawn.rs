//! Off-screen waiting and edge re-entry.

use rand::Rng;

use crate::garden::state::Butterfly;

/// Hold at the sentinel until the scheduled re-entry time, then come back
/// in from a fresh random edge exactly like an initial seed.
pub fn update_waiting<R: Rng>(b: &mut Butterfly, now: f64, rng: &mut R) {
    if now < b.next_spawn_at {
        return;
    }
    b.enter_from_edge(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::record::AgentRecord;
    use crate::garden::state::{Phase, Viewport};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn waiting_butterfly(rng: &mut SmallRng) -> Butterfly {
        let mut b = Butterfly::seed(
            AgentRecord::new("b1", "Alice", "hi", None),
            Viewport::new(1000.0, 800.0),
            0.0,
            rng,
        );
        b.park_for_respawn(5000.0);
        b
    }

    #[test]
    fn test_waiting_holds_at_sentinel() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut b = waiting_butterfly(&mut rng);

        update_waiting(&mut b, 4999.0, &mut rng);

        assert_eq!(b.phase, Phase::Waiting);
        assert_eq!(b.pos.x, -10000.0);
        assert_eq!(b.pos.y, -10000.0);
    }

    #[test]
    fn test_respawn_reenters_from_edge() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut b = waiting_butterfly(&mut rng);

        update_waiting(&mut b, 5000.0, &mut rng);

        assert_eq!(b.phase, Phase::Flying);
        assert!(
            b.pos.x < 0.0 || b.pos.x > 1000.0,
            "re-entry must start beyond an edge, got {}",
            b.pos.x
        );
        assert!(b.pos.y >= 0.0 && b.pos.y <= 800.0);
        assert_eq!(b.speed, b.base_speed);
    }

    #[test]
    fn test_respawn_uses_fresh_randomness() {
        // Two agents respawning at the same instant should not be identical
        let mut rng = SmallRng::seed_from_u64(3);
        let mut a = waiting_butterfly(&mut rng);
        let mut b = waiting_butterfly(&mut rng);

        update_waiting(&mut a, 5000.0, &mut rng);
        update_waiting(&mut b, 5000.0, &mut rng);

        assert!(a.pos != b.pos || a.heading != b.heading);
    }
}
