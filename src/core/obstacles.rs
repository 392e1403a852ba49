//! Obstacle spawning, scrolling and pruning.

use super::constants::PRUNE_MARGIN;
use super::types::{gate_height_range, Obstacle, Viewport};
use crate::config::Tuning;
use rand::Rng;

/// Emits a new obstacle at the right edge once per spawn interval.
#[derive(Debug, Clone, Default)]
pub struct ObstacleGenerator {
    /// Timestamp (ms) of the last spawn, or of the run start.
    pub last_spawn_ms: f64,
    last_id: Option<u64>,
}

impl ObstacleGenerator {
    /// Restart the spawn timer at `now_ms`. Called on entry to PLAYING.
    pub fn reset(&mut self, now_ms: f64) {
        self.last_spawn_ms = now_ms;
        self.last_id = None;
    }

    pub fn should_spawn(&self, now_ms: f64, tuning: &Tuning) -> bool {
        now_ms - self.last_spawn_ms > tuning.spawn_interval_ms
    }

    /// Spawn if the interval has elapsed, updating the timer.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        now_ms: f64,
        viewport: &Viewport,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Obstacle> {
        if !self.should_spawn(now_ms, tuning) {
            return None;
        }
        let obstacle = self.spawn(now_ms, viewport, tuning, rng);
        self.last_spawn_ms = now_ms;
        Some(obstacle)
    }

    /// Create an obstacle just off-screen right with a random top height.
    ///
    /// Uses the viewport passed in, so a resize mid-run affects the next spawn.
    pub fn spawn<R: Rng>(
        &mut self,
        now_ms: f64,
        viewport: &Viewport,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Obstacle {
        let (min, max) = gate_height_range(viewport, tuning);
        let top_height = rng.gen_range(min..=max);

        // Timestamps double as ids; bump on a same-millisecond collision
        let mut id = now_ms.max(0.0) as u64;
        if let Some(last) = self.last_id {
            if id <= last {
                id = last + 1;
            }
        }
        self.last_id = Some(id);

        Obstacle::new(id, viewport.width, top_height as f64)
    }
}

/// Scroll every obstacle left and drop the ones well past the left edge.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, tuning: &Tuning) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= tuning.obstacle_speed;
    }
    obstacles.retain(|o| o.right(tuning) > -PRUNE_MARGIN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scenario_tuning() -> Tuning {
        Tuning {
            ground_height: 112.0,
            gap: 150.0,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_spawn_at_zero_within_gate_range() {
        let tuning = scenario_tuning();
        let viewport = Viewport::new(800.0, 600.0);
        let mut generator = ObstacleGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let obstacle = generator.spawn(0.0, &viewport, &tuning, &mut rng);
            assert!(obstacle.top_height >= 50.0 && obstacle.top_height <= 288.0);
            assert_eq!(obstacle.x, 800.0);
            assert!(!obstacle.passed);
        }
    }

    #[test]
    fn test_spawn_ids_are_unique() {
        let tuning = scenario_tuning();
        let viewport = Viewport::default();
        let mut generator = ObstacleGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = generator.spawn(1000.0, &viewport, &tuning, &mut rng);
        let b = generator.spawn(1000.0, &viewport, &tuning, &mut rng);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_degenerate_viewport_still_spawns() {
        let tuning = scenario_tuning();
        let viewport = Viewport::new(200.0, 150.0);
        let mut generator = ObstacleGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let obstacle = generator.spawn(0.0, &viewport, &tuning, &mut rng);
        assert_eq!(obstacle.top_height, 50.0);
    }

    #[test]
    fn test_maybe_spawn_waits_for_interval() {
        let tuning = scenario_tuning();
        let viewport = Viewport::default();
        let mut generator = ObstacleGenerator::default();
        generator.reset(1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let exactly = 1000.0 + tuning.spawn_interval_ms;
        assert!(generator
            .maybe_spawn(exactly, &viewport, &tuning, &mut rng)
            .is_none());
        assert!(generator
            .maybe_spawn(exactly + 1.0, &viewport, &tuning, &mut rng)
            .is_some());
        assert_eq!(generator.last_spawn_ms, exactly + 1.0);
        assert!(generator
            .maybe_spawn(exactly + 2.0, &viewport, &tuning, &mut rng)
            .is_none());
    }

    #[test]
    fn test_advance_moves_and_prunes() {
        let tuning = scenario_tuning();
        let mut obstacles = vec![
            Obstacle::new(1, -tuning.obstacle_width - PRUNE_MARGIN + 1.0, 100.0),
            Obstacle::new(2, 400.0, 100.0),
        ];
        advance_obstacles(&mut obstacles, &tuning);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, 2);
        assert_eq!(obstacles[0].x, 400.0 - tuning.obstacle_speed);
    }
}
