//! The Paradox Laboratory screen: the liar's sentence oscillator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use godel_engine::{App, ParadoxLoop};

use crate::shared::panel;
use crate::theme::{Glyphs, Palette};

const THEORY: &str = "Epimenides the Cretan said: \"All Cretans are liars.\" \
If he speaks the truth, he is a liar (contradiction). If he lies, he is telling \
the truth (contradiction). The oscillation comes from self-reference: the system \
is trying to evaluate itself.";

pub fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_theory(frame, columns[0], palette);
    draw_engine(
        frame,
        app.paradox(),
        columns[1],
        palette,
        glyphs,
        app.ui_options().reduced_motion,
    );
}

fn draw_theory(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("The Liar's Paradox", palette.title())),
        Line::from(""),
        Line::from(Span::styled(THEORY, palette.body())),
        Line::from(""),
        Line::from(Span::styled(
            "Key concept: self-reference. This sentence evaluates itself, so it can never settle.",
            Style::default().fg(palette.warning),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Theory", palette)),
        area,
    );
}

fn draw_engine(
    frame: &mut Frame,
    node: &ParadoxLoop,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    reduced_motion: bool,
) {
    let block = panel("Paradox Engine", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Sentence
            Constraint::Length(3), // Node
            Constraint::Length(2), // Counter
            Constraint::Min(0),    // Warning
        ])
        .split(inner);

    let sentence = Paragraph::new(Line::from(Span::styled(
        "\"This statement is false.\"",
        palette.title(),
    )));
    frame.render_widget(sentence, rows[0]);

    let (glyph, label, style) = if node.value() {
        (
            glyphs.node_true,
            "TRUE",
            Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            glyphs.node_false,
            "FALSE",
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        )
    };
    let state = if node.is_running() { "running" } else { "stopped" };
    let mut node_spans = vec![
        Span::styled(format!("  {glyph} {label}   "), style),
        Span::styled(format!("[{state}]"), palette.muted()),
    ];
    // Progress toward the next negation, unless animation is off.
    if node.is_running() && !reduced_motion {
        let filled = (node.phase() * 10.0) as usize;
        node_spans.push(Span::styled(
            format!("  {}{}", "#".repeat(filled), ".".repeat(10 - filled.min(10))),
            palette.muted(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(node_spans)), rows[1]);

    let counter = Paragraph::new(Line::from(Span::styled(
        format!("Evaluation steps: {}", node.steps()),
        palette.body(),
    )));
    frame.render_widget(counter, rows[2]);

    if node.warning() {
        let warning = Paragraph::new(vec![
            Line::from(Span::styled(
                "!! INFINITE LOOP DETECTED !!",
                Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "The evaluation will never terminate. There is no answer to compute - that is the lesson.",
                palette.body(),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(warning, rows[3]);
    }
}
