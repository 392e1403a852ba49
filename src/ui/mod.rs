//! Terminal presentation. Reads the [`App`]; never mutates it.

pub mod overlays;
pub mod play_area;
pub mod responsive;
pub mod skins;
pub mod throbber;

use crate::app::App;
use crate::core::constants::{CELL_WIDTH_PX, FRAME_INTERVAL_MS};
use crate::core::{GameStatus, Viewport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Play field on top, one status line below.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(responsive::STATUS_ROWS),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// World size of the play field for a terminal of `cols` x `rows`.
pub fn play_viewport(cols: u16, rows: u16) -> Viewport {
    let (play, _) = split(Rect::new(0, 0, cols, rows));
    play_area::viewport_for(play)
}

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.size();
    if !responsive::fits(&app.game.tuning, size.width, size.height) {
        responsive::render_too_small(frame, &app.game.tuning);
        return;
    }

    let game = &app.game;
    let theme = skins::theme(app.skin);
    let (play, status) = split(size);

    let scroll = if game.status == GameStatus::Playing {
        let travelled = app.now_ms / FRAME_INTERVAL_MS as f64 * game.tuning.obstacle_speed;
        (travelled / CELL_WIDTH_PX) as usize
    } else {
        0
    };
    play_area::render_play_area(frame, play, game, theme, scroll, app.flashing());

    match game.status {
        GameStatus::Start => {
            overlays::render_start_card(frame, play, theme, app.skin, game.high_score)
        }
        GameStatus::Countdown => {
            overlays::render_countdown(frame, play, theme, &game.countdown.to_string())
        }
        GameStatus::Playing => {
            overlays::render_score_hud(frame, play, theme, app.skin, game.score);
            // The go word lingers until the first obstacle scrolls in
            if game.tuning.has_countdown() && game.obstacles.is_empty() {
                overlays::render_countdown(frame, play, theme, theme.go_word);
            }
        }
        GameStatus::GameOver => {
            overlays::render_game_over_card(frame, play, theme, app.skin, game, app.now_ms)
        }
    }

    render_status_bar(frame, status, app);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let controls = [
        ("[Space/Click]", "Flap"),
        ("[R]", "Start"),
        ("[M]", "Mute"),
        ("[Q]", "Quit"),
    ];

    let mut spans = vec![Span::styled(
        format!("{} ", app.skin.name()),
        Style::default()
            .fg(skins::theme(app.skin).accent)
            .add_modifier(Modifier::BOLD),
    )];
    if app.is_muted() {
        spans.push(Span::styled("[muted] ", Style::default().fg(Color::Red)));
    }
    for (key, action) in controls {
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_viewport_excludes_status_line() {
        let v = play_viewport(80, 31);
        assert_eq!(v.width, 800.0);
        assert_eq!(v.height, 600.0);
    }
}
