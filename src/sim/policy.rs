//! Adversary heading policy
//!
//! Adversaries do not chase anyone: each one just draws a fresh heading,
//! uniformly, every time its timer fires.

use rand::Rng;

use super::state::{Direction, GameState};

/// Uniform draw over the four headings (repeats allowed)
pub fn random_direction<R: Rng>(rng: &mut R) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

/// Give one adversary a new heading. No-op unless the session is running.
pub fn retarget<R: Rng>(
    state: &mut GameState,
    adversary: usize,
    rng: &mut R,
) -> Option<Direction> {
    if !state.is_running() {
        return None;
    }
    let mover = state.adversaries.get_mut(adversary)?;
    let direction = random_direction(rng);
    mover.direction = Some(direction);
    log::debug!("Adversary {} now heading {}", adversary, direction.as_str());
    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashMap;

    #[test]
    fn test_draws_are_roughly_uniform() {
        let mut rng = Pcg32::seed_from_u64(7);
        let trials = 40_000;
        let mut counts: HashMap<Direction, u32> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(random_direction(&mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (dir, count) in counts {
            let share = count as f64 / trials as f64;
            assert!(
                (share - 0.25).abs() < 0.02,
                "{} drawn {:.3} of the time",
                dir.as_str(),
                share
            );
        }
    }

    #[test]
    fn test_retarget_requires_running() {
        let mut state = GameState::new(&Config::default());
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(retarget(&mut state, 0, &mut rng), None);

        state.start();
        let dir = retarget(&mut state, 0, &mut rng);
        assert!(dir.is_some());
        assert_eq!(state.adversaries[0].direction, dir);
    }

    #[test]
    fn test_retarget_unknown_adversary() {
        let mut state = GameState::new(&Config::default());
        state.start();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(retarget(&mut state, 99, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_headings() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(random_direction(&mut a), random_direction(&mut b));
        }
    }
}
