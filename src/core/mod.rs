//! Real-time game core: physics, obstacles, scoring, collision and the
//! status state machine.

pub mod collision;
pub mod constants;
pub mod game;
pub mod machine;
pub mod obstacles;
pub mod physics;
pub mod scoring;
pub mod types;

pub use game::{CommentState, Game};
pub use machine::{Action, Command, SoundCue};
pub use types::{Character, GameStatus, Obstacle, RunId, Viewport};
