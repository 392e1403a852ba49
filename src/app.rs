//! Wires the [`Game`] to its collaborators: best-score store, comment service,
//! sound board, countdown timer and the frame-paced physics loop.
//!
//! All time is passed in as milliseconds since the app started, so the whole
//! driver can be stepped deterministically from tests.

use crate::audio::SoundBoard;
use crate::commentary::{CommentService, PendingComment};
use crate::config::Skin;
use crate::core::constants::{
    COUNTDOWN_INTERVAL_MS, FLASH_MS, FRAME_INTERVAL_MS, MAX_CATCH_UP_TICKS,
};
use crate::core::{Action, Command, Game, RunId, Viewport};
use crate::high_score::HighScoreStore;
use crate::input::InputAction;
use rand::RngCore;
use std::sync::Arc;

/// The live physics loop. Owned by exactly one run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LoopState {
    run: RunId,
    next_tick_ms: f64,
}

pub struct App {
    pub game: Game,
    pub skin: Skin,
    store: Box<dyn HighScoreStore>,
    comments: Arc<dyn CommentService>,
    sounds: Box<dyn SoundBoard>,
    rng: Box<dyn RngCore + Send>,
    pending: Option<PendingComment>,
    countdown_next_ms: Option<f64>,
    physics: Option<LoopState>,
    flash_until_ms: f64,
    /// Set while the terminal is too small to show the game.
    suspended_at: Option<f64>,
    /// Last time seen by `update`, for the renderer's animations.
    pub now_ms: f64,
}

impl App {
    pub fn new(
        skin: Skin,
        viewport: Viewport,
        store: Box<dyn HighScoreStore>,
        comments: Arc<dyn CommentService>,
        sounds: Box<dyn SoundBoard>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        let high_score = store.get().unwrap_or(0);
        log::info!(
            "{} skin, best score {}, viewport {}x{}",
            skin.name(),
            high_score,
            viewport.width,
            viewport.height
        );
        Self {
            game: Game::new(skin.tuning(), viewport, high_score),
            skin,
            store,
            comments,
            sounds,
            rng,
            pending: None,
            countdown_next_ms: None,
            physics: None,
            flash_until_ms: 0.0,
            suspended_at: None,
            now_ms: 0.0,
        }
    }

    /// Handle one player input. Returns `false` when the player asked to quit.
    /// While suspended only mute and quit are honoured.
    pub fn handle_input(&mut self, input: InputAction, now_ms: f64) -> bool {
        match input {
            InputAction::Jump | InputAction::Start if self.is_suspended() => {}
            InputAction::Jump => self.send(Action::Jump, now_ms),
            InputAction::Start => self.send(Action::Start, now_ms),
            InputAction::ToggleMute => {
                let muted = self.sounds.toggle_mute();
                log::debug!("muted: {}", muted);
            }
            InputAction::Quit => return false,
        }
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("viewport now {}x{}", viewport.width, viewport.height);
        self.game.resize(viewport);
    }

    /// Freeze or resume the game clock. Pending timers are pushed back by the
    /// time spent suspended so nothing fires in a burst on resume.
    pub fn set_suspended(&mut self, suspended: bool) {
        match (self.suspended_at, suspended) {
            (None, true) => {
                log::info!("terminal too small, pausing");
                self.suspended_at = Some(self.now_ms);
            }
            (Some(since), false) => {
                let paused = self.now_ms - since;
                log::info!("resuming after {:.0}ms", paused);
                if let Some(due) = self.countdown_next_ms.as_mut() {
                    *due += paused;
                }
                if let Some(state) = self.physics.as_mut() {
                    state.next_tick_ms += paused;
                }
                self.suspended_at = None;
            }
            _ => {}
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended_at.is_some()
    }

    pub fn is_muted(&self) -> bool {
        self.sounds.is_muted()
    }

    /// Whether the crash flash is showing.
    pub fn flashing(&self) -> bool {
        self.now_ms < self.flash_until_ms
    }

    /// Whether the physics loop is scheduled.
    pub fn loop_running(&self) -> bool {
        self.physics.is_some()
    }

    /// Advance timers and physics to `now_ms` and collect a finished comment.
    pub fn update(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        if !self.is_suspended() {
            self.run_countdown_timer(now_ms);
            self.run_physics(now_ms);
        }
        self.poll_comment(now_ms);
    }

    fn send(&mut self, action: Action, now_ms: f64) {
        let commands = self.game.dispatch(action, now_ms);
        self.execute(commands, now_ms);
    }

    fn run_countdown_timer(&mut self, now_ms: f64) {
        while let Some(due) = self.countdown_next_ms {
            if now_ms < due {
                break;
            }
            self.countdown_next_ms = Some(due + COUNTDOWN_INTERVAL_MS as f64);
            self.send(Action::CountdownTick, due);
        }
    }

    fn run_physics(&mut self, now_ms: f64) {
        let frame = FRAME_INTERVAL_MS as f64;
        let mut steps = 0;
        while let Some(state) = self.physics {
            if now_ms < state.next_tick_ms {
                return;
            }
            if steps == MAX_CATCH_UP_TICKS {
                // Too far behind (suspended terminal, slow draw): drop the backlog
                log::debug!("physics fell behind, skipping to {:.0}ms", now_ms);
                self.physics = Some(LoopState {
                    next_tick_ms: now_ms + frame,
                    ..state
                });
                return;
            }
            self.physics = Some(LoopState {
                next_tick_ms: state.next_tick_ms + frame,
                ..state
            });
            let commands = self.game.tick(state.run, state.next_tick_ms, &mut self.rng);
            self.execute(commands, state.next_tick_ms);
            steps += 1;
        }
    }

    fn poll_comment(&mut self, now_ms: f64) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if let Some(text) = pending.poll() {
            self.pending = None;
            self.send(Action::CommentReady(text), now_ms);
        }
    }

    fn execute(&mut self, commands: Vec<Command>, now_ms: f64) {
        for command in commands {
            match command {
                Command::Sound(cue) => self.sounds.play(cue),
                Command::StartMusic => self.sounds.start_loop(),
                Command::StopMusic => self.sounds.stop_loop(),
                Command::StartCountdownTimer => {
                    self.countdown_next_ms = Some(now_ms + COUNTDOWN_INTERVAL_MS as f64);
                }
                Command::StopCountdownTimer => self.countdown_next_ms = None,
                Command::StartLoop(run) => {
                    self.physics = Some(LoopState {
                        run,
                        next_tick_ms: now_ms + FRAME_INTERVAL_MS as f64,
                    });
                }
                Command::StopLoop => self.physics = None,
                Command::SaveHighScore(score) => self.store.set(score),
                Command::FetchComment(score) => {
                    self.pending = Some(PendingComment::spawn(
                        Arc::clone(&self.comments),
                        self.skin,
                        score,
                    ));
                }
                Command::Flash => self.flash_until_ms = now_ms + FLASH_MS as f64,
            }
        }
    }

    /// Cancel every timer and the loop. Called when the app is torn down.
    pub fn shutdown(&mut self) {
        self.countdown_next_ms = None;
        self.physics = None;
        self.sounds.stop_loop();
        if let Some(pending) = self.pending.take() {
            log::debug!("abandoning comment fetch for score {}", pending.score);
        }
    }
}
