//! Score obstacles once the character has cleared them.

use super::types::Obstacle;
use crate::config::Tuning;

/// Mark every unpassed obstacle whose right edge is left of the character as
/// passed. Returns how many were newly passed; each obstacle counts once.
pub fn score_passed(obstacles: &mut [Obstacle], tuning: &Tuning) -> u32 {
    let mut newly_passed = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right(tuning) < tuning.character_x {
            obstacle.passed = true;
            newly_passed += 1;
        }
    }
    newly_passed
}
