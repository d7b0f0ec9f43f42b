//! The control panel: module cards, global progress, reset control.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use godel_engine::App;
use godel_types::{ScenarioId, ScenarioStatus};

use crate::shared::panel;
use crate::theme::{Glyphs, Palette};

pub fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Global progress
            Constraint::Min(1),     // Module cards
            Constraint::Length(3),  // Reset control
        ])
        .split(area);

    draw_progress(frame, app, chunks[0], palette);
    draw_modules(frame, app, chunks[1], palette, glyphs);
    draw_reset(frame, app, chunks[2], palette);
}

fn draw_progress(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let percent = app.progress().percent_complete();
    let gauge = Gauge::default()
        .block(panel("Global Progress", palette))
        .gauge_style(Style::default().fg(palette.accent).bg(palette.bg_highlight))
        .percent(u16::from(percent))
        .label(format!(
            "{percent}% ({}/{} modules)",
            app.progress().completed_count(),
            ScenarioId::ALL.len()
        ));
    frame.render_widget(gauge, area);
}

fn draw_modules(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();

    for (index, id) in ScenarioId::ALL.iter().enumerate() {
        let selected = index == app.home_cursor();
        let status = app.progress().status(*id);

        let (badge, badge_style) = match status {
            ScenarioStatus::Completed => (glyphs.check, Style::default().fg(palette.success)),
            ScenarioStatus::Unlocked => (glyphs.play, Style::default().fg(palette.accent)),
            ScenarioStatus::Locked => (glyphs.lock, palette.muted()),
        };

        let accent = scenario_color(*id, palette);
        let title_style = if status == ScenarioStatus::Locked {
            palette.muted()
        } else if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };

        let cursor = if selected { glyphs.cursor } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{cursor} "), Style::default().fg(palette.text_primary)),
            Span::styled(format!("{badge} "), badge_style),
            Span::styled(format!("{:<28}", id.title()), title_style),
            Span::styled(id.blurb(), palette.muted()),
        ]));
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines).block(panel("Modules", palette));
    frame.render_widget(list, area);
}

fn draw_reset(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let (text, style) = if app.reset_armed() {
        (
            "ARMED: press R again to wipe all progress",
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        )
    } else {
        ("Press R to reset all progress", palette.muted())
    };
    let control = Paragraph::new(Line::from(Span::styled(text, style)))
        .block(panel("System Control", palette));
    frame.render_widget(control, area);
}

fn scenario_color(id: ScenarioId, palette: &Palette) -> ratatui::style::Color {
    match id {
        ScenarioId::Detective => palette.blue,
        ScenarioId::Factory => palette.orange,
        ScenarioId::Paradox => palette.yellow,
        ScenarioId::Coding => palette.primary,
        ScenarioId::Kingdom => palette.red,
    }
}
