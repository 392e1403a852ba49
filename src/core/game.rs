//! The game: single owner of all mutable run state.
//!
//! Rendering reads a `Game`; only `dispatch`, `tick` and `resize` mutate it.

use super::collision::check_collision;
use super::constants::{COUNTDOWN_IMPULSE_FACTOR, MAX_TILT};
use super::machine::{transition, Action, Command, Effect, Guards, SoundCue};
use super::obstacles::{advance_obstacles, ObstacleGenerator};
use super::physics::{apply_jump, integrate};
use super::scoring::score_passed;
use super::types::{Character, GameStatus, Obstacle, RunId, Viewport};
use crate::config::Tuning;
use rand::Rng;

/// Game-over flavor text state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    None,
    Pending,
    Ready(String),
}

#[derive(Debug, Clone)]
pub struct Game {
    pub status: GameStatus,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub character: Character,
    /// Creation order, so the oldest (leftmost) comes first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub high_score: u32,
    /// Countdown ticks left; shown as the big number.
    pub countdown: u32,
    pub comment: CommentState,
    /// Jumps in the current run, drives the flap animation.
    pub jump_count: u32,
    generator: ObstacleGenerator,
    run: Option<RunId>,
    runs_started: u64,
}

impl Game {
    pub fn new(tuning: Tuning, viewport: Viewport, high_score: u32) -> Self {
        Self {
            status: GameStatus::Start,
            tuning,
            viewport,
            character: Character::at(viewport.height / 2.0),
            obstacles: Vec::new(),
            score: 0,
            high_score,
            countdown: 0,
            comment: CommentState::None,
            jump_count: 0,
            generator: ObstacleGenerator::default(),
            run: None,
            runs_started: 0,
        }
    }

    /// The run ticks must carry, if the loop is live.
    pub fn current_run(&self) -> Option<RunId> {
        self.run
    }

    pub fn comment_pending(&self) -> bool {
        self.comment == CommentState::Pending
    }

    /// Adopt a new viewport. Takes effect on the next spawn and collision test.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn guards(&self) -> Guards {
        Guards {
            comment_pending: self.comment_pending(),
            countdown_seconds: self.tuning.countdown_seconds,
            countdown_remaining: self.countdown,
        }
    }

    /// Feed one action through the transition table. Returns the commands the
    /// shell must execute, in order; empty when the action was ignored.
    pub fn dispatch(&mut self, action: Action, now_ms: f64) -> Vec<Command> {
        let Some(t) = transition(self.status, &action, &self.guards()) else {
            log::trace!("ignored {:?} in {}", action, self.status.name());
            return Vec::new();
        };

        if t.next != self.status {
            log::debug!(
                "{} -> {} on {:?}",
                self.status.name(),
                t.next.name(),
                action
            );
        }
        self.status = t.next;

        let mut commands = Vec::new();
        for effect in t.effects {
            self.apply(effect, now_ms, &mut commands);
        }
        commands
    }

    fn apply(&mut self, effect: Effect, now_ms: f64, commands: &mut Vec<Command>) {
        match effect {
            Effect::ResetRun => {
                self.character = Character::at(self.viewport.height / 2.0);
                self.obstacles.clear();
                self.score = 0;
                self.jump_count = 0;
                self.comment = CommentState::None;
            }
            Effect::BeginCountdown => {
                self.countdown = self.tuning.countdown_seconds;
            }
            Effect::StepCountdown => {
                self.countdown = self.countdown.saturating_sub(1);
            }
            Effect::EnterPlaying => {
                self.runs_started += 1;
                let run = RunId(self.runs_started);
                self.run = Some(run);
                self.generator.reset(now_ms);
                if self.tuning.has_countdown() {
                    self.character.velocity = self.tuning.jump_strength * COUNTDOWN_IMPULSE_FACTOR;
                }
                log::info!("run {} started", run.0);
                commands.push(Command::StartLoop(run));
            }
            Effect::ApplyJump => {
                apply_jump(&mut self.character, &self.tuning);
                self.jump_count += 1;
            }
            Effect::EndRun => {
                self.run = None;
                self.character.rotation = MAX_TILT;
                commands.push(Command::StopLoop);
            }
            Effect::RecordHighScore => {
                log::info!("run over with score {}", self.score);
                if self.score > self.high_score {
                    self.high_score = self.score;
                    commands.push(Command::SaveHighScore(self.score));
                }
            }
            Effect::RequestComment => {
                self.comment = CommentState::Pending;
                commands.push(Command::FetchComment(self.score));
            }
            Effect::StoreComment(text) => {
                self.comment = CommentState::Ready(text);
            }
            Effect::Emit(command) => commands.push(command),
        }
    }

    /// One physics/scoring/collision step for `run`.
    ///
    /// A tick for any run other than the live one is stale and does nothing,
    /// so a tick queued before a restart can never touch the new run.
    pub fn tick<R: Rng>(&mut self, run: RunId, now_ms: f64, rng: &mut R) -> Vec<Command> {
        if self.status != GameStatus::Playing || self.run != Some(run) {
            log::trace!("dropping stale tick for run {}", run.0);
            return Vec::new();
        }

        integrate(&mut self.character, &self.tuning);

        if let Some(obstacle) = self
            .generator
            .maybe_spawn(now_ms, &self.viewport, &self.tuning, rng)
        {
            log::trace!("spawned obstacle {} top={}", obstacle.id, obstacle.top_height);
            self.obstacles.push(obstacle);
        }

        advance_obstacles(&mut self.obstacles, &self.tuning);

        let mut commands = Vec::new();
        let passed = score_passed(&mut self.obstacles, &self.tuning);
        for _ in 0..passed {
            self.score += 1;
            commands.push(Command::Sound(SoundCue::Score));
        }

        if check_collision(&self.character, &self.obstacles, &self.viewport, &self.tuning) {
            commands.extend(self.dispatch(Action::Collide, now_ms));
        }
        commands
    }
}
