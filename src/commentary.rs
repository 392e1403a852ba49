//! Game-over flavor text from a remote text-generation service, with a local
//! fallback table when the service is unavailable.

use crate::config::Skin;
use serde::Deserialize;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

/// Shown if the fetch worker dies without producing anything.
pub const SERVICE_UNAVAILABLE: &str = "Game Over! (AI is sleeping)";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 8;

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("no API key configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not decode response: {0}")]
    Decode(#[from] std::io::Error),
    #[error("service returned no text")]
    Empty,
}

/// Source of game-over comments. `fetch` blocks; callers run it off the frame loop.
pub trait CommentService: Send + Sync {
    fn fetch(&self, skin: Skin, score: u32) -> Result<String, CommentError>;
}

/// Always unavailable; every comment comes from [`fallback_comment`].
#[derive(Debug, Default)]
pub struct OfflineCommentService;

impl CommentService for OfflineCommentService {
    fn fetch(&self, _skin: Skin, _score: u32) -> Result<String, CommentError> {
        Err(CommentError::NotConfigured)
    }
}

/// Google Gemini `generateContent` client.
pub struct GeminiCommentService {
    agent: ureq::Agent,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiCommentService {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            agent,
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build from `GEMINI_API_KEY` (or `API_KEY`). `None` when neither is set.
    pub fn from_env(model: &str) -> Option<Self> {
        std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(|key| Self::new(key, model))
    }
}

impl CommentService for GeminiCommentService {
    fn fetch(&self, skin: Skin, score: u32) -> Result<String, CommentError> {
        let url = format!("{}/models/{}:generateContent", GEMINI_BASE_URL, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt_for(skin, score) }] }]
        });

        let response: GenerateResponse = self
            .agent
            .post(&url)
            .set("x-goog-api-key", &self.api_key)
            .send_json(body)
            .map_err(|e| CommentError::Transport(e.to_string()))?
            .into_json()?;

        first_text(response).ok_or(CommentError::Empty)
    }
}

/// First non-blank text part of the first candidate that has one.
fn first_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .filter_map(|p| p.text)
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}

/// Score bands the announcer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    Noob,
    Lukewarm,
    Impressed,
    Elite,
}

impl ScoreBucket {
    pub fn for_score(score: u32) -> Self {
        match score {
            0..=2 => Self::Noob,
            3..=10 => Self::Lukewarm,
            11..=49 => Self::Impressed,
            _ => Self::Elite,
        }
    }
}

/// Deterministic local comment for `score`.
pub fn fallback_comment(skin: Skin, score: u32) -> &'static str {
    use ScoreBucket::*;
    match (skin, ScoreBucket::for_score(score)) {
        (Skin::Classic, Noob) => "Ouch! That bird took a tumble.",
        (Skin::Classic, Lukewarm) => "Not bad. The pipes barely noticed you.",
        (Skin::Classic, Impressed) => "Okay, okay. Those wings actually work.",
        (Skin::Classic, Elite) => "Bird god. The pipes fear you.",
        (Skin::Degen, Noob) => "Rekt. Zero bags, zero hope. NGMI.",
        (Skin::Degen, Lukewarm) => "Paper hands, but at least you bought the dip.",
        (Skin::Degen, Impressed) => "Diamond hands detected. Still down bad though.",
        (Skin::Degen, Elite) => "Certified whale. The candles bow to you.",
        (Skin::Pixel, Noob) => "GAME OVER. INSERT COIN.",
        (Skin::Pixel, Lukewarm) => "8 bits of courage, 0 bits of skill.",
        (Skin::Pixel, Impressed) => "High-score table material. Almost.",
        (Skin::Pixel, Elite) => "Legendary. Your initials belong on the cabinet.",
    }
}

/// Announcer prompt, tone keyed to the same score bands as the fallback table.
pub fn prompt_for(skin: Skin, score: u32) -> String {
    let (game, hero) = match skin {
        Skin::Classic => ("Clumsy Bird", "a chubby yellow bird who tries to fly through pipes"),
        Skin::Degen => (
            "Clumsy Degen",
            "a crypto trader dodging red candles on the way to the moon",
        ),
        Skin::Pixel => ("Pixel Flap", "an 8-bit bird in a retro arcade cabinet"),
    };
    format!(
        "You are the sarcastic announcer for a game called \"{game}\". \
         The main character is {hero}. The player just died with a score of {score}. \
         If the score is 0-2, mock them ruthlessly. \
         If the score is 3-10, give a lukewarm sarcastic compliment. \
         If the score is 11-49, be impressed but still snarky. \
         If the score is 50 or more, praise them as a legend. \
         Keep it under 20 words."
    )
}

/// Fetch a comment, substituting the fallback table on any failure.
pub fn comment_for(service: &dyn CommentService, skin: Skin, score: u32) -> String {
    match service.fetch(skin, score) {
        Ok(text) => text,
        Err(CommentError::NotConfigured) => fallback_comment(skin, score).to_string(),
        Err(e) => {
            log::warn!("comment fetch failed, using fallback: {}", e);
            fallback_comment(skin, score).to_string()
        }
    }
}

/// A comment being fetched on a background thread.
pub struct PendingComment {
    handle: Option<JoinHandle<String>>,
    pub score: u32,
}

impl PendingComment {
    pub fn spawn(service: Arc<dyn CommentService>, skin: Skin, score: u32) -> Self {
        log::debug!("fetching game-over comment for score {}", score);
        let handle = thread::spawn(move || comment_for(service.as_ref(), skin, score));
        Self {
            handle: Some(handle),
            score,
        }
    }

    /// Non-blocking: the text once the worker is done, `None` while it runs
    /// (and after the text has been taken).
    pub fn poll(&mut self) -> Option<String> {
        if !self.handle.as_ref()?.is_finished() {
            return None;
        }
        self.handle.take().map(join_text)
    }

    /// Block until the worker is done.
    pub fn wait(mut self) -> String {
        self.handle
            .take()
            .map(join_text)
            .unwrap_or_else(|| SERVICE_UNAVAILABLE.to_string())
    }
}

fn join_text(handle: JoinHandle<String>) -> String {
    handle.join().unwrap_or_else(|_| {
        log::warn!("comment worker panicked");
        SERVICE_UNAVAILABLE.to_string()
    })
}
