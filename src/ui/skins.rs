//! Per-skin palette, glyphs and copy.

use crate::config::Skin;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title: &'static str,
    pub tagline: &'static str,
    pub start_hint: &'static str,
    pub game_over_title: &'static str,
    pub score_label: &'static str,
    pub best_label: &'static str,
    pub loading_caption: &'static str,
    pub restart_hint: &'static str,
    pub go_word: &'static str,

    pub sky: Color,
    pub accent: Color,
    pub obstacle: Color,
    pub obstacle_cap: Color,
    pub obstacle_glyph: &'static str,
    pub cap_glyph: &'static str,
    pub ground: Color,
    pub ground_glyphs: [&'static str; 2],
    pub character: Color,
    pub character_glyph: &'static str,
}

const CLASSIC: Theme = Theme {
    title: "CLUMSY BIRD",
    tagline: "Flap through the pipes. Touch nothing.",
    start_hint: "Press SPACE or click to fly",
    game_over_title: "GAME OVER",
    score_label: "Score",
    best_label: "Best",
    loading_caption: "Asking the judges...",
    restart_hint: "Press SPACE to fly again",
    go_word: "GO!",

    sky: Color::Rgb(78, 192, 202),
    accent: Color::Yellow,
    obstacle: Color::Rgb(115, 191, 46),
    obstacle_cap: Color::Rgb(84, 140, 32),
    obstacle_glyph: "█",
    cap_glyph: "▓",
    ground: Color::Rgb(222, 216, 149),
    ground_glyphs: ["▀", "▔"],
    character: Color::Rgb(247, 214, 40),
    character_glyph: "█",
};

const DEGEN: Theme = Theme {
    title: "CLUMSY DEGEN",
    tagline: "Dodge the red candles. Moon or bust.",
    start_hint: "Press SPACE to ape in",
    game_over_title: "LIQUIDATED",
    score_label: "PnL",
    best_label: "ATH",
    loading_caption: "Checking Charts...",
    restart_hint: "Press SPACE to buy the dip",
    go_word: "LFG!!!",

    sky: Color::Rgb(13, 17, 23),
    accent: Color::Rgb(247, 147, 26),
    obstacle: Color::Rgb(234, 57, 67),
    obstacle_cap: Color::Rgb(255, 120, 120),
    obstacle_glyph: "┃",
    cap_glyph: "╋",
    ground: Color::Rgb(48, 54, 61),
    ground_glyphs: ["═", "─"],
    character: Color::Rgb(247, 147, 26),
    character_glyph: "₿",
};

const PIXEL: Theme = Theme {
    title: "PIXEL FLAP",
    tagline: "INSERT COIN. AVOID PIPES.",
    start_hint: "PRESS SPACE TO START",
    game_over_title: "GAME OVER",
    score_label: "SCORE",
    best_label: "HI",
    loading_caption: "LOADING...",
    restart_hint: "PRESS SPACE TO CONTINUE",
    go_word: "GO!",

    sky: Color::Rgb(92, 148, 252),
    accent: Color::White,
    obstacle: Color::Rgb(0, 168, 0),
    obstacle_cap: Color::Rgb(184, 248, 24),
    obstacle_glyph: "▒",
    cap_glyph: "▓",
    ground: Color::Rgb(200, 76, 12),
    ground_glyphs: ["▚", "▞"],
    character: Color::White,
    character_glyph: "▣",
};

pub fn theme(skin: Skin) -> &'static Theme {
    match skin {
        Skin::Classic => &CLASSIC,
        Skin::Degen => &DEGEN,
        Skin::Pixel => &PIXEL,
    }
}

/// Score as the skin presents it. Degen counts in thousands of dollars.
pub fn format_score(skin: Skin, score: u32) -> String {
    match skin {
        Skin::Degen => format!("${}K", score),
        Skin::Classic | Skin::Pixel => score.to_string(),
    }
}

/// Leading-edge glyph for the character, by tilt in degrees.
pub fn heading_glyph(rotation: f64) -> &'static str {
    if rotation < -10.0 {
        "▲"
    } else if rotation > 30.0 {
        "▼"
    } else {
        "►"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degen_copy() {
        let t = theme(Skin::Degen);
        assert_eq!(t.title, "CLUMSY DEGEN");
        assert_eq!(t.game_over_title, "LIQUIDATED");
        assert_eq!(t.go_word, "LFG!!!");
        assert_eq!(format_score(Skin::Degen, 12), "$12K");
    }

    #[test]
    fn test_plain_score_format() {
        assert_eq!(format_score(Skin::Classic, 7), "7");
        assert_eq!(format_score(Skin::Pixel, 0), "0");
    }

    #[test]
    fn test_heading_follows_tilt() {
        assert_eq!(heading_glyph(-25.0), "▲");
        assert_eq!(heading_glyph(0.0), "►");
        assert_eq!(heading_glyph(90.0), "▼");
    }
}
