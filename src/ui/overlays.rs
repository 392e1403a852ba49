//! Cards and banners drawn over the play field.

use super::skins::{format_score, Theme};
use super::throbber::spinner_char;
use crate::config::Skin;
use crate::core::{CommentState, Game};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Bordered, cleared card; returns its inner area.
fn card(frame: &mut Frame, area: Rect, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn render_start_card(frame: &mut Frame, area: Rect, theme: &Theme, skin: Skin, best: u32) {
    let inner = card(frame, centered(area, 44, 9), theme.accent);

    let lines = vec![
        Line::from(Span::styled(theme.title, bold(theme.accent))),
        Line::from(""),
        Line::from(Span::styled(theme.tagline, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", theme.best_label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format_score(skin, best), bold(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(theme.start_hint, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Big countdown number, or the go word once the run is live.
pub fn render_countdown(frame: &mut Frame, area: Rect, theme: &Theme, text: &str) {
    let label = format!(" {} ", text);
    let rect = centered(area, label.chars().count() as u16 + 2, 3);
    let inner = card(frame, rect, theme.accent);
    frame.render_widget(
        Paragraph::new(Span::styled(label, bold(theme.accent))).alignment(Alignment::Center),
        inner,
    );
}

pub fn render_score_hud(frame: &mut Frame, area: Rect, theme: &Theme, skin: Skin, score: u32) {
    if area.height == 0 {
        return;
    }
    let text = format!(" {} ", format_score(skin, score));
    let hud = Paragraph::new(Span::styled(text, bold(theme.accent).bg(Color::Black)))
        .alignment(Alignment::Center);
    frame.render_widget(hud, Rect { height: 1, ..area });
}

pub fn render_game_over_card(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    skin: Skin,
    game: &Game,
    now_ms: f64,
) {
    let inner = card(frame, centered(area, 48, 13), Color::Red);

    let comment = match &game.comment {
        CommentState::Pending => Line::from(Span::styled(
            format!("{} {}", spinner_char(now_ms), theme.loading_caption),
            Style::default().fg(Color::Yellow),
        )),
        CommentState::Ready(text) => Line::from(Span::styled(
            format!("\"{}\"", text),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        )),
        CommentState::None => Line::from(""),
    };

    // Restart is locked until the comment arrives
    let hint = if game.comment_pending() {
        Line::from("")
    } else {
        Line::from(Span::styled(theme.restart_hint, Style::default().fg(Color::DarkGray)))
    };

    let stat = |label: &str, value: u32, color: Color| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(format_score(skin, value), bold(color)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(theme.game_over_title, bold(Color::Red))),
        Line::from(""),
        stat(theme.score_label, game.score, Color::White),
        stat(theme.best_label, game.high_score, theme.accent),
        Line::from(""),
        comment,
        Line::from(""),
        hint,
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let r = centered(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(r, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_clips_to_area() {
        let r = centered(Rect::new(5, 5, 20, 4), 40, 10);
        assert_eq!(r, Rect::new(5, 5, 20, 4));
    }

    #[test]
    fn test_score_hud_uses_skin_accent() {
        use crate::ui::skins::theme;
        use ratatui::{backend::TestBackend, Terminal};

        for skin in Skin::ALL {
            let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
            terminal
                .draw(|frame| render_score_hud(frame, frame.size(), theme(skin), skin, 7))
                .unwrap();
            let buffer = terminal.backend().buffer();
            let digit = buffer
                .content
                .iter()
                .find(|cell| cell.symbol() == "7")
                .expect("score drawn");
            assert_eq!(digit.fg, theme(skin).accent, "{}", skin.name());
        }
    }
}
