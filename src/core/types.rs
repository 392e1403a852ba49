//! Data structures shared by the game loop: status, character, obstacles, viewport.

use crate::config::Tuning;
use crate::core::constants::MIN_GATE_HEIGHT;

/// Overall game status. Exactly one holds at any time and it only changes
/// through [`crate::core::machine::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Start,
    Countdown,
    Playing,
    GameOver,
}

impl GameStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Countdown => "COUNTDOWN",
            Self::Playing => "PLAYING",
            Self::GameOver => "GAME_OVER",
        }
    }
}

/// Identifies one run. A tick carrying an old id is stale and must not touch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

/// Size of the playable area in world pixels. May change at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the top of the ground strip.
    pub fn ground_y(&self, tuning: &Tuning) -> f64 {
        self.height - tuning.ground_height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// The player-controlled character. Only `y` moves; `x` is fixed by the tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    /// Top edge, pixels from the top of the viewport.
    pub y: f64,
    /// Pixels per tick, positive is downward.
    pub velocity: f64,
    /// Cosmetic tilt in degrees, derived from velocity.
    pub rotation: f64,
}

impl Character {
    pub fn at(y: f64) -> Self {
        Self {
            y,
            velocity: 0.0,
            rotation: 0.0,
        }
    }
}

/// One obstacle: a top segment of `top_height`, then the gap, then a bottom
/// segment down to the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Creation timestamp in ms; unique within a run.
    pub id: u64,
    /// Left edge in world pixels.
    pub x: f64,
    pub top_height: f64,
    /// Set once when the character clears the obstacle. Never reset.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u64, x: f64, top_height: f64) -> Self {
        Self {
            id,
            x,
            top_height,
            passed: false,
        }
    }

    pub fn right(&self, tuning: &Tuning) -> f64 {
        self.x + tuning.obstacle_width
    }

    /// Y of the top segment's bottom edge.
    pub fn gate_top(&self) -> f64 {
        self.top_height
    }

    /// Y of the bottom segment's top edge.
    pub fn gate_bottom(&self, tuning: &Tuning) -> f64 {
        self.top_height + tuning.gap
    }
}

/// Valid range for a new obstacle's top height in `viewport`.
///
/// The upper bound is floored at [`MIN_GATE_HEIGHT`] so a tiny viewport still
/// yields a spawnable obstacle instead of an empty range.
pub fn gate_height_range(viewport: &Viewport, tuning: &Tuning) -> (u32, u32) {
    let max_available = viewport.height - tuning.ground_height - tuning.gap - MIN_GATE_HEIGHT;
    let safe_max = max_available.max(MIN_GATE_HEIGHT);
    (MIN_GATE_HEIGHT as u32, safe_max.floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_800x600() -> (Viewport, Tuning) {
        let tuning = Tuning {
            ground_height: 112.0,
            gap: 150.0,
            ..Tuning::default()
        };
        (Viewport::new(800.0, 600.0), tuning)
    }

    #[test]
    fn test_gate_range_for_standard_viewport() {
        let (viewport, tuning) = classic_800x600();
        assert_eq!(gate_height_range(&viewport, &tuning), (50, 288));
    }

    #[test]
    fn test_gate_range_clamped_for_tiny_viewport() {
        let (_, tuning) = classic_800x600();
        let tiny = Viewport::new(300.0, 200.0);
        assert_eq!(gate_height_range(&tiny, &tuning), (50, 50));
    }

    #[test]
    fn test_obstacle_edges() {
        let (_, tuning) = classic_800x600();
        let obstacle = Obstacle::new(1, 100.0, 120.0);
        assert_eq!(obstacle.right(&tuning), 100.0 + tuning.obstacle_width);
        assert_eq!(obstacle.gate_top(), 120.0);
        assert_eq!(obstacle.gate_bottom(&tuning), 270.0);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_ground_y() {
        let (viewport, tuning) = classic_800x600();
        assert_eq!(viewport.ground_y(&tuning), 488.0);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(GameStatus::default(), GameStatus::Start);
        assert_eq!(GameStatus::GameOver.name(), "GAME_OVER");
    }
}
