//! Fire-and-forget sound triggers.
//!
//! The game only ever emits [`SoundCue`]s and music start/stop requests; what
//! they sound like (or whether they sound at all) is up to the [`SoundBoard`].

#[cfg(feature = "audio")]
pub mod synth;

use crate::core::SoundCue;

pub trait SoundBoard {
    fn on_jump(&mut self);
    fn on_score(&mut self);
    fn on_die(&mut self);
    fn on_countdown_tick(&mut self);
    fn on_go(&mut self);

    /// Start the ambient music loop (no-op while muted, but remembered).
    fn start_loop(&mut self);
    fn stop_loop(&mut self);

    fn is_muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    /// Flip the mute flag, returning the new value.
    fn toggle_mute(&mut self) -> bool {
        let muted = !self.is_muted();
        self.set_muted(muted);
        muted
    }

    fn play(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::Jump => self.on_jump(),
            SoundCue::Score => self.on_score(),
            SoundCue::Die => self.on_die(),
            SoundCue::CountdownTick => self.on_countdown_tick(),
            SoundCue::Go => self.on_go(),
        }
    }
}

/// Sound board that makes no sound. Used when built without the `audio`
/// feature or when no output device is available.
#[derive(Debug, Default)]
pub struct SilentBoard {
    muted: bool,
    music_wanted: bool,
}

impl SilentBoard {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            music_wanted: false,
        }
    }

    /// Whether music would currently be audible.
    pub fn music_playing(&self) -> bool {
        self.music_wanted && !self.muted
    }

    fn cue(&self, name: &str) {
        if !self.muted {
            log::trace!("sound: {}", name);
        }
    }
}

impl SoundBoard for SilentBoard {
    fn on_jump(&mut self) {
        self.cue("jump");
    }

    fn on_score(&mut self) {
        self.cue("score");
    }

    fn on_die(&mut self) {
        self.cue("die");
    }

    fn on_countdown_tick(&mut self) {
        self.cue("countdown");
    }

    fn on_go(&mut self) {
        self.cue("go");
    }

    fn start_loop(&mut self) {
        self.music_wanted = true;
    }

    fn stop_loop(&mut self) {
        self.music_wanted = false;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

/// Best available board: the synthesizer when compiled in and a device opens,
/// otherwise [`SilentBoard`].
pub fn default_board(muted: bool) -> Box<dyn SoundBoard> {
    #[cfg(feature = "audio")]
    {
        match synth::SynthBoard::new(muted) {
            Ok(board) => return Box::new(board),
            Err(e) => log::warn!("audio unavailable, continuing silently: {}", e),
        }
    }
    Box::new(SilentBoard::new(muted))
}
