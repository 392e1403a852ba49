//! Synthesized retro sound effects and music (fundsp graphs played through rodio).

use super::SoundBoard;
use fundsp::hacker32::*;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

const SAMPLE_RATE: u32 = 44_100;

/// C5 E5 G5 A5 G5 E5 C5 G4
const MELODY: [f32; 8] = [523.25, 659.25, 783.99, 880.0, 783.99, 659.25, 523.25, 392.0];
const NOTE_SECONDS: f32 = 0.15;

/// Render a mono fundsp graph to a sample buffer.
fn render(mut unit: impl AudioUnit, seconds: f32) -> Vec<f32> {
    unit.set_sample_rate(SAMPLE_RATE as f64);
    let frames = (seconds * SAMPLE_RATE as f32) as usize;
    (0..frames).map(|_| unit.get_mono()).collect()
}

/// Exponential glide from `from` to `to` over `duration`, then hold.
fn glide(from: f32, to: f32, duration: f32, t: f32) -> f32 {
    from * (to / from).powf((t / duration).min(1.0))
}

/// Linear ramp from `from` to `to` over `duration`, then hold.
fn ramp(from: f32, to: f32, duration: f32, t: f32) -> f32 {
    from + (to - from) * (t / duration).min(1.0)
}

fn jump_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| ramp(300.0, 600.0, 0.1, t));
    let gain = lfo(|t: f32| glide(0.2, 0.01, 0.1, t));
    render((freq >> sine()) * gain, 0.1)
}

fn score_samples() -> Vec<f32> {
    // Coin: two square tones
    let freq = lfo(|t: f32| if t < 0.1 { 1046.5 } else { 1318.51 });
    let gain = lfo(|t: f32| if t < 0.1 { 0.1 } else { ramp(0.1, 0.01, 0.2, t - 0.1) });
    render((freq >> square()) * gain, 0.3)
}

fn die_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| glide(200.0, 50.0, 0.4, t));
    let gain = lfo(|t: f32| glide(0.2, 0.01, 0.4, t));
    render((freq >> saw()) * gain, 0.4)
}

fn beep_samples(hz: f32, seconds: f32) -> Vec<f32> {
    let gain = lfo(move |t: f32| ramp(0.1, 0.0, seconds, t));
    render((constant(hz) >> square()) * gain, seconds)
}

fn melody_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| MELODY[(t / NOTE_SECONDS) as usize % MELODY.len()]);
    // Staccato: each note decays from 0.05 to 0.01
    let gain = lfo(|t: f32| glide(0.05, 0.01, NOTE_SECONDS - 0.05, t % NOTE_SECONDS));
    render((freq >> triangle()) * gain, NOTE_SECONDS * MELODY.len() as f32)
}

struct Effects {
    jump: Vec<f32>,
    score: Vec<f32>,
    die: Vec<f32>,
    countdown: Vec<f32>,
    go: Vec<f32>,
    melody: Vec<f32>,
}

impl Effects {
    fn render_all() -> Self {
        Self {
            jump: jump_samples(),
            score: score_samples(),
            die: die_samples(),
            countdown: beep_samples(440.0, 0.15),
            go: beep_samples(880.0, 0.4),
            melody: melody_samples(),
        }
    }
}

/// Plays each cue on its own detached sink; music runs on a dedicated sink.
pub struct SynthBoard {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    effects: Effects,
    music: Option<Sink>,
    muted: bool,
    music_wanted: bool,
}

impl SynthBoard {
    pub fn new(muted: bool) -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            effects: Effects::render_all(),
            music: None,
            muted,
            music_wanted: false,
        })
    }

    fn play_samples(&self, samples: &[f32]) {
        if self.muted {
            return;
        }
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.to_vec()));
                sink.detach();
            }
            Err(e) => log::warn!("could not open sink: {}", e),
        }
    }

    fn resume_music(&mut self) {
        if self.muted || self.music.is_some() {
            return;
        }
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                let melody = SamplesBuffer::new(1, SAMPLE_RATE, self.effects.melody.clone());
                sink.append(melody.repeat_infinite());
                self.music = Some(sink);
            }
            Err(e) => log::warn!("could not start music: {}", e),
        }
    }

    fn silence_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }
}

impl SoundBoard for SynthBoard {
    fn on_jump(&mut self) {
        self.play_samples(&self.effects.jump);
    }

    fn on_score(&mut self) {
        self.play_samples(&self.effects.score);
    }

    fn on_die(&mut self) {
        self.play_samples(&self.effects.die);
    }

    fn on_countdown_tick(&mut self) {
        self.play_samples(&self.effects.countdown);
    }

    fn on_go(&mut self) {
        self.play_samples(&self.effects.go);
    }

    fn start_loop(&mut self) {
        self.music_wanted = true;
        self.resume_music();
    }

    fn stop_loop(&mut self) {
        self.music_wanted = false;
        self.silence_music();
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.silence_music();
        } else if self.music_wanted {
            self.resume_music();
        }
    }
}
