//! World-to-terminal mapping and the play field renderer.

use super::skins::{heading_glyph, Theme};
use crate::core::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::core::{Game, Viewport};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Ground,
    Obstacle,
    /// Obstacle row bordering the opening.
    ObstacleCap,
    Character,
    /// Tail column of the character (wing).
    Wing,
    /// Front column of the character.
    Heading,
}

/// World size covered by a terminal area.
pub fn viewport_for(area: Rect) -> Viewport {
    Viewport::new(
        area.width as f64 * CELL_WIDTH_PX,
        area.height as f64 * CELL_HEIGHT_PX,
    )
}

/// Classify a cell by sampling the world at its center.
pub fn cell_kind(game: &Game, col: u16, row: u16) -> CellKind {
    let x = (col as f64 + 0.5) * CELL_WIDTH_PX;
    let y = (row as f64 + 0.5) * CELL_HEIGHT_PX;
    let tuning = &game.tuning;

    let left = tuning.character_x;
    let right = left + tuning.character_width;
    let top = game.character.y;
    if x >= left && x < right && y >= top && y < top + tuning.character_height {
        if x + CELL_WIDTH_PX >= right {
            return CellKind::Heading;
        }
        if x - CELL_WIDTH_PX < left {
            return CellKind::Wing;
        }
        return CellKind::Character;
    }

    if y >= game.viewport.ground_y(tuning) {
        return CellKind::Ground;
    }

    for obstacle in &game.obstacles {
        if x < obstacle.x || x >= obstacle.right(tuning) {
            continue;
        }
        let gate_top = obstacle.gate_top();
        let gate_bottom = obstacle.gate_bottom(tuning);
        if y < gate_top {
            return if y >= gate_top - CELL_HEIGHT_PX {
                CellKind::ObstacleCap
            } else {
                CellKind::Obstacle
            };
        }
        if y >= gate_bottom {
            return if y < gate_bottom + CELL_HEIGHT_PX {
                CellKind::ObstacleCap
            } else {
                CellKind::Obstacle
            };
        }
    }

    CellKind::Sky
}

/// Render the field. `scroll` shifts the ground pattern; `flash` tints the sky.
pub fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    theme: &Theme,
    scroll: usize,
    flash: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let sky = if flash { Color::Red } else { theme.sky };
    let wing = if game.jump_count % 2 == 0 { "▀" } else { "▄" };
    let heading = heading_glyph(game.character.rotation);

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let base = Style::default().bg(sky);
            let span = match cell_kind(game, col, row) {
                CellKind::Sky => Span::styled(" ", base),
                CellKind::Ground => {
                    let glyph = theme.ground_glyphs[(col as usize + scroll) % 2];
                    Span::styled(glyph, Style::default().fg(theme.ground).bg(Color::Black))
                }
                CellKind::Obstacle => Span::styled(theme.obstacle_glyph, base.fg(theme.obstacle)),
                CellKind::ObstacleCap => Span::styled(
                    theme.cap_glyph,
                    base.fg(theme.obstacle_cap).add_modifier(Modifier::BOLD),
                ),
                CellKind::Character => {
                    Span::styled(theme.character_glyph, base.fg(theme.character))
                }
                CellKind::Wing => Span::styled(wing, base.fg(theme.character)),
                CellKind::Heading => Span::styled(
                    heading,
                    base.fg(theme.character).add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
