//! Clumsy - a one-button arcade flyer for the terminal.
//!
//! The library holds the whole game so it can be driven from tests; the
//! binary only owns the terminal.

pub mod app;
pub mod audio;
pub mod build_info;
pub mod commentary;
pub mod config;
pub mod core;
pub mod high_score;
pub mod input;
pub mod logging;
pub mod ui;
pub mod utils;
