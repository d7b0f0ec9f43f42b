//! Color theme and glyphs for the Godelarium TUI.
//!
//! Uses the Kanagawa Wave palette by default with an optional
//! high-contrast override, and an ASCII glyph set for terminals without
//! good Unicode support.

use ratatui::style::{Color, Modifier, Style};

use godel_types::Tint;
use godel_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub orange: Color,
    pub red: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
            blue: colors::BLUE,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            primary: Color::Magenta,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            blue: Color::Blue,
            green: Color::Green,
            yellow: Color::Yellow,
            orange: Color::LightRed,
            red: Color::Red,
        }
    }

    /// Concrete color for a symbol tint.
    #[must_use]
    pub fn tint(&self, tint: Tint) -> Color {
        match tint {
            Tint::Green => self.green,
            Tint::Blue => self.blue,
            Tint::Purple => self.primary,
            Tint::Yellow => self.yellow,
        }
    }

    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    #[must_use]
    pub fn body(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Glyph set, with an ASCII fallback for limited terminals.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub check: &'static str,
    pub lock: &'static str,
    pub play: &'static str,
    pub cursor: &'static str,
    pub implies: &'static str,
    pub node_true: &'static str,
    pub node_false: &'static str,
    pub times: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    bullet: "●",
    check: "✓",
    lock: "🔒",
    play: "▶",
    cursor: "▸",
    implies: "→",
    node_true: "◉",
    node_false: "○",
    times: "×",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    bullet: "*",
    check: "v",
    lock: "#",
    play: ">",
    cursor: ">",
    implies: "->",
    node_true: "(T)",
    node_false: "(F)",
    times: "x",
};

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        ASCII_GLYPHS
    } else {
        UNICODE_GLYPHS
    }
}

/// Render a glyph string for display: composite glyphs like `P→Q` get
/// their arrow swapped in ASCII mode.
#[must_use]
pub fn display_glyph(glyph: &str, g: &Glyphs) -> String {
    glyph.replace('→', g.implies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_mode_rewrites_the_implication_arrow() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        assert_eq!(display_glyph("P→Q", &g), "P->Q");
    }

    #[test]
    fn unicode_mode_keeps_the_arrow() {
        let g = glyphs(UiOptions::default());
        assert_eq!(display_glyph("P→Q", &g), "P→Q");
    }
}
