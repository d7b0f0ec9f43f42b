//! The Truth Factory screen: axiom supply, inference machines, goal.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use godel_engine::{App, FactoryScene, MachineState};
use godel_types::InferenceRule;

use crate::shared::{focused_panel, panel};
use crate::theme::{Glyphs, Palette, display_glyph};

pub fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let scene = app.factory();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Level banner
            Constraint::Min(1),    // Floor
        ])
        .split(area);

    draw_banner(frame, scene, rows[0], palette, glyphs);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[1]);

    draw_supply(frame, scene, columns[0], palette, glyphs);
    draw_machines(frame, scene, columns[1], palette, glyphs);
}

fn draw_banner(frame: &mut Frame, scene: &FactoryScene, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let level = scene.level();
    let line = if scene.is_level_complete() {
        let text = if scene.is_last_level() {
            format!(
                "{} Theorem {} produced. The factory has proved everything it can!",
                glyphs.check, level.goal
            )
        } else {
            format!(
                "{} Theorem {} produced. Press n for the next level.",
                glyphs.check, level.goal
            )
        };
        Line::from(Span::styled(
            text,
            Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", level.name), palette.title()),
            Span::styled(level.tutorial, palette.muted()),
        ])
    };

    let title = format!("Level {}/{}", scene.level_number(), scene.level_count());
    frame.render_widget(Paragraph::new(line).block(panel(&title, palette)), area);
}

fn draw_supply(frame: &mut Frame, scene: &FactoryScene, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = vec![Line::from("")];
    for (index, axiom) in scene.level().axioms.iter().enumerate() {
        let selected = index == scene.supply_cursor();
        let cursor = if selected { glyphs.cursor } else { " " };
        let style = if selected {
            Style::default()
                .fg(palette.tint(axiom.tint))
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.tint(axiom.tint))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{cursor} "), Style::default().fg(palette.text_primary)),
            Span::styled(format!("[ {} ]", display_glyph(&axiom.glyph, glyphs)), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel("Axiom Supply", palette)),
        area,
    );
}

fn draw_machines(frame: &mut Frame, scene: &FactoryScene, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let machine_count = scene.machines().len() as u32;
    let constraints: Vec<Constraint> =
        (0..machine_count).map(|_| Constraint::Ratio(1, machine_count)).collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, (machine, rule)) in scene
        .machines()
        .iter()
        .zip(scene.level().rules.iter())
        .enumerate()
    {
        let focused = index == scene.machine_cursor();
        draw_machine(frame, machine, rule, slots[index], focused, palette, glyphs);
    }
}

fn draw_machine(
    frame: &mut Frame,
    machine: &MachineState,
    rule: &InferenceRule,
    area: Rect,
    focused: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(rule.description, palette.muted())));
    lines.push(Line::from(""));

    // Input slots, filled left to right.
    let mut slot_spans: Vec<Span> = vec![Span::styled("IN  ", palette.muted())];
    for slot in 0..rule.arity() {
        let content = machine
            .inputs()
            .get(slot)
            .map_or_else(|| "  ·  ".to_string(), |s| format!("  {}  ", display_glyph(&s.glyph, glyphs)));
        let style = if machine.inputs().get(slot).is_some() {
            Style::default().fg(palette.text_primary).bg(palette.bg_highlight)
        } else {
            palette.muted()
        };
        slot_spans.push(Span::styled(content, style));
        slot_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(slot_spans));
    lines.push(Line::from(""));

    // Output tray.
    let out_line = if machine.is_errored() {
        Line::from(Span::styled(
            format!("OUT {} invalid combination", glyphs.times),
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(output) = machine.output() {
        Line::from(vec![
            Span::styled("OUT ", palette.muted()),
            Span::styled(
                format!(" {} ", display_glyph(&output.glyph, glyphs)),
                Style::default()
                    .fg(palette.success)
                    .bg(palette.bg_highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (theorem)", Style::default().fg(palette.success)),
        ])
    } else {
        Line::from(Span::styled("OUT   ·", palette.muted()))
    };
    lines.push(out_line);

    let title = format!("{} Machine", rule.name);
    let block = if focused {
        focused_panel(&title, palette)
    } else {
        panel(&title, palette)
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
