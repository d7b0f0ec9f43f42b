//! The Gödel encoder screen: symbol keyboard, formula buffer,
//! prime-factorization display.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use godel_engine::{ENCODER_SYMBOLS, Encoder};

use crate::shared::panel;
use crate::theme::{Glyphs, Palette};

pub fn draw(frame: &mut Frame, app: &godel_engine::App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let encoder = app.encoder();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Keyboard
            Constraint::Length(5), // Buffer
            Constraint::Min(1),    // Result
        ])
        .split(area);

    draw_keyboard(frame, encoder, rows[0], palette, glyphs);
    draw_buffer(frame, encoder, rows[1], palette);
    draw_result(frame, encoder, rows[2], palette, glyphs);
}

fn draw_keyboard(frame: &mut Frame, encoder: &Encoder, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans: Vec<Span> = Vec::new();
    for (index, (symbol, code)) in ENCODER_SYMBOLS.iter().enumerate() {
        let selected = index == encoder.cursor();
        let style = if selected {
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_primary).bg(palette.bg_highlight)
        };
        spans.push(Span::styled(format!(" {symbol} "), style));
        spans.push(Span::styled(format!("{code}"), palette.muted()));
        spans.push(Span::raw("  "));
    }
    let hint = Line::from(Span::styled(
        format!("{} type a symbol directly, or move with the arrows", glyphs.cursor),
        palette.muted(),
    ));
    frame.render_widget(
        Paragraph::new(vec![Line::from(spans), hint]).block(panel("1. Build Your Formula", palette)),
        area,
    );
}

fn draw_buffer(frame: &mut Frame, encoder: &Encoder, area: Rect, palette: &Palette) {
    let mut lines: Vec<Line> = Vec::new();
    if encoder.formula().is_empty() {
        lines.push(Line::from(Span::styled("Type something...", palette.muted())));
    } else {
        let symbols: Vec<Span> = encoder
            .formula()
            .iter()
            .map(|c| {
                Span::styled(
                    format!(" {c} "),
                    Style::default()
                        .fg(palette.bg_dark)
                        .bg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(symbols));

        let codes: Vec<Span> = encoder
            .formula()
            .iter()
            .map(|&c| {
                let code = Encoder::code_of(c).unwrap_or_default();
                Span::styled(format!("{code:^3}"), Style::default().fg(palette.success))
            })
            .collect();
        lines.push(Line::from(codes));
    }

    if encoder.is_calculating() {
        lines.push(Line::from(Span::styled(
            "Calculating...",
            Style::default().fg(palette.warning),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel("2. Input Buffer", palette)),
        area,
    );
}

fn draw_result(frame: &mut Frame, encoder: &Encoder, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let factors = encoder.factorization();
    let mut lines: Vec<Line> = Vec::new();

    if factors.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press g to encode the formula as a product of primes.",
            palette.muted(),
        )));
    } else {
        let mut spans: Vec<Span> = vec![
            Span::styled("G = ", Style::default().fg(palette.success).add_modifier(Modifier::BOLD)),
        ];
        for (index, factor) in factors.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(format!(" {} ", glyphs.times), palette.muted()));
            }
            spans.push(Span::styled(
                format!("{}", factor.prime),
                Style::default().fg(palette.text_primary).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("^{}", factor.code),
                Style::default().fg(palette.success),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        for factor in &factors {
            lines.push(Line::from(Span::styled(
                format!(
                    "  {}^{}  encodes '{}'",
                    factor.prime, factor.code, factor.symbol
                ),
                palette.body(),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "This number is unique: by the fundamental theorem of arithmetic only one \
             combination of primes produces it, so factoring it recovers the formula.",
            palette.muted(),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("3. Prime Factorization", palette)),
        area,
    );
}
