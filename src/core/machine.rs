//! Explicit transition table for the game status.
//!
//! `transition` is pure: given the current status, an action and the guard
//! values it returns the next status plus an ordered effect list, or `None`
//! when the action is ignored in that status. [`crate::core::game::Game`]
//! applies the effects; the ones it cannot apply itself become [`Command`]s
//! for the shell (sound, timers, persistence, the comment fetch).

use super::types::{GameStatus, RunId};

/// Everything that can drive the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Explicit start/restart button.
    Start,
    /// The single gameplay input. Restarts from START/GAME_OVER.
    Jump,
    /// One second of countdown elapsed.
    CountdownTick,
    /// The collision detector fired during a tick.
    Collide,
    /// The game-over comment fetch finished.
    CommentReady(String),
}

/// Fire-and-forget sound triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Score,
    Die,
    CountdownTick,
    Go,
}

/// Side effects the shell must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sound(SoundCue),
    StartMusic,
    StopMusic,
    StartCountdownTimer,
    StopCountdownTimer,
    /// Begin ticking physics for this run.
    StartLoop(RunId),
    /// Stop ticking; any tick still queued for the old run is stale.
    StopLoop,
    SaveHighScore(u32),
    FetchComment(u32),
    /// Brief red flash on crash.
    Flash,
}

/// One step of a transition, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Clear obstacles and score, recentre the character.
    ResetRun,
    BeginCountdown,
    StepCountdown,
    /// Mint a new run id, restart the spawn timer, start the loop.
    EnterPlaying,
    ApplyJump,
    /// Invalidate the run id and stop the loop.
    EndRun,
    RecordHighScore,
    RequestComment,
    StoreComment(String),
    Emit(Command),
}

/// Values the table consults besides status and action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guards {
    pub comment_pending: bool,
    /// Configured countdown length; 0 means runs start immediately.
    pub countdown_seconds: u32,
    /// Countdown ticks still to go in the current COUNTDOWN.
    pub countdown_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: GameStatus,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: GameStatus, effects: Vec<Effect>) -> Option<Self> {
        Some(Self { next, effects })
    }
}

/// The transition table: `(status, action) -> (next status, effects)`.
pub fn transition(status: GameStatus, action: &Action, guards: &Guards) -> Option<Transition> {
    use Effect::*;
    use GameStatus::*;

    match (status, action) {
        // A finished fetch is stored whatever the status; a late one is dropped
        (_, Action::CommentReady(text)) => {
            if guards.comment_pending {
                Transition::to(status, vec![StoreComment(text.clone())])
            } else {
                None
            }
        }

        (Start | GameOver, Action::Start | Action::Jump) => {
            if guards.comment_pending {
                None
            } else if guards.countdown_seconds > 0 {
                Transition::to(
                    Countdown,
                    vec![
                        ResetRun,
                        BeginCountdown,
                        Emit(Command::StartCountdownTimer),
                        Emit(Command::Sound(SoundCue::CountdownTick)),
                    ],
                )
            } else {
                Transition::to(
                    Playing,
                    vec![ResetRun, EnterPlaying, Emit(Command::StartMusic)],
                )
            }
        }

        (Countdown, Action::CountdownTick) => {
            if guards.countdown_remaining > 1 {
                Transition::to(
                    Countdown,
                    vec![StepCountdown, Emit(Command::Sound(SoundCue::CountdownTick))],
                )
            } else {
                Transition::to(
                    Playing,
                    vec![
                        StepCountdown,
                        Emit(Command::StopCountdownTimer),
                        EnterPlaying,
                        Emit(Command::Sound(SoundCue::Go)),
                        Emit(Command::StartMusic),
                    ],
                )
            }
        }

        (Playing, Action::Jump) => {
            Transition::to(Playing, vec![ApplyJump, Emit(Command::Sound(SoundCue::Jump))])
        }

        (Playing, Action::Collide) => Transition::to(
            GameOver,
            vec![
                EndRun,
                Emit(Command::Sound(SoundCue::Die)),
                Emit(Command::StopMusic),
                Emit(Command::Flash),
                RecordHighScore,
                RequestComment,
            ],
        ),

        // Jump during COUNTDOWN, Start while running, stray timer ticks, ...
        _ => None,
    }
}
