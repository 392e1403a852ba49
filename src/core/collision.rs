//! Collision predicate. Pure: same inputs, same answer, no side effects.

use super::constants::COLLISION_PADDING;
use super::types::{Character, Obstacle, Viewport};
use crate::config::Tuning;

/// Axis-aligned box in world pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn of_character(character: &Character, tuning: &Tuning) -> Self {
        Self {
            left: tuning.character_x,
            right: tuning.character_x + tuning.character_width,
            top: character.y,
            bottom: character.y + tuning.character_height,
        }
    }
}

/// Horizontal overlap test with the inward padding applied to both boxes.
pub fn overlaps_horizontally(character: &Bounds, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let char_left = character.left + COLLISION_PADDING;
    let char_right = character.right - COLLISION_PADDING;
    let obstacle_left = obstacle.x + COLLISION_PADDING;
    let obstacle_right = obstacle.right(tuning) - COLLISION_PADDING;
    char_right > obstacle_left && char_left < obstacle_right
}

/// True when the character is outside the obstacle's opening.
pub fn outside_gap(character: &Bounds, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    character.top < obstacle.gate_top() || character.bottom > obstacle.gate_bottom(tuning)
}

/// Ground strike, ceiling strike, or any obstacle hit.
///
/// The ceiling is `-character_height`: flying just past the top edge is allowed,
/// disappearing completely above it is not.
pub fn check_collision(
    character: &Character,
    obstacles: &[Obstacle],
    viewport: &Viewport,
    tuning: &Tuning,
) -> bool {
    let bounds = Bounds::of_character(character, tuning);

    if bounds.bottom >= viewport.ground_y(tuning) {
        return true;
    }
    if bounds.top < -tuning.character_height {
        return true;
    }

    obstacles
        .iter()
        .any(|o| overlaps_horizontally(&bounds, o, tuning) && outside_gap(&bounds, o, tuning))
}
