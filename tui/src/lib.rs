//! TUI rendering and input handling for Godelarium using ratatui.

mod input;
mod scenes;
mod shared;
mod theme;

pub use input::handle_events;
pub use theme::{Glyphs, Palette, display_glyph, glyphs, palette};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use godel_engine::{App, Screen};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Scene
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette);
    match app.screen() {
        Screen::Home => scenes::home::draw(frame, app, chunks[1], &palette, &glyphs),
        Screen::Detective => scenes::detective::draw(frame, app, chunks[1], &palette, &glyphs),
        Screen::Factory => scenes::factory::draw(frame, app, chunks[1], &palette, &glyphs),
        Screen::Paradox => scenes::paradox::draw(frame, app, chunks[1], &palette, &glyphs),
        Screen::Coding => scenes::coding::draw(frame, app, chunks[1], &palette, &glyphs),
    }
    draw_status_bar(frame, app, chunks[2], &palette);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let (title, subtitle) = match app.screen() {
        Screen::Home => ("GODELARIUM :: Command Center", "Paradox & Logic Management System"),
        Screen::Detective => ("The Logical Detective", "Truth is one thing; proof is another"),
        Screen::Factory => ("The Truth Factory", "Axioms in, theorems out"),
        Screen::Paradox => ("Paradox Laboratory", "Welcome to the edge of logic"),
        Screen::Coding => ("Goedel Encoder", "Turn any formula into a single natural number"),
    };

    let line = Line::from(vec![
        Span::styled(title, palette.title()),
        Span::raw("  "),
        Span::styled(subtitle, palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = match app.screen() {
        Screen::Home => "↑/↓ select  Enter open  R reset progress  q quit",
        Screen::Detective => "Tab scene/board  ↑/↓ move  Enter act  c check solution  Esc back",
        Screen::Factory => "←/→ pick axiom  Tab pick machine  Enter feed  n next level  Esc back",
        Screen::Paradox => "Space run/stop  r reset  Esc back",
        Screen::Coding => "←/→ pick symbol  Enter add  Backspace erase  g encode  Esc back",
    };

    let line = if let Some(status) = app.status() {
        Line::from(Span::styled(status, Style::default().fg(palette.accent)))
    } else {
        Line::from(Span::styled(hints, palette.muted()))
    };
    frame.render_widget(Paragraph::new(line), area);
}
