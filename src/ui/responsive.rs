//! Minimum terminal size and the fallback screen shown below it.

use crate::config::Tuning;
use crate::core::constants::{CELL_HEIGHT_PX, MIN_GATE_HEIGHT};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub const MIN_COLS: u16 = 40;
/// Rows below the play field (the status line).
pub const STATUS_ROWS: u16 = 1;

/// Smallest terminal height for `tuning`. The play field must leave the
/// character clear of the ground at its start height (half the field) and
/// fit a full opening between two minimum-height segments.
pub fn min_rows(tuning: &Tuning) -> u16 {
    let clear_start = 2.0 * (tuning.character_height + tuning.ground_height);
    let one_gate = tuning.ground_height + tuning.gap + 2.0 * MIN_GATE_HEIGHT;
    // One extra row keeps both bounds strict after rounding to whole cells
    let play_rows = (clear_start.max(one_gate) / CELL_HEIGHT_PX).floor() as u16 + 1;
    play_rows + STATUS_ROWS
}

pub fn fits(tuning: &Tuning, cols: u16, rows: u16) -> bool {
    cols >= MIN_COLS && rows >= min_rows(tuning)
}

pub fn render_too_small(frame: &mut Frame, tuning: &Tuning) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS,
                min_rows(tuning),
                area.width,
                area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Game paused. Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}
