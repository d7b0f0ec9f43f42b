//! The Logical Detective screen: crime scene, notebook, deduction board.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use godel_engine::{App, CaseOutcome, DetectiveFocus, DetectiveScene};
use godel_types::EvidenceKind;

use crate::shared::{centered_rect, focused_panel, panel};
use crate::theme::{Glyphs, Palette};

pub fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let scene = app.detective();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Case brief
            Constraint::Min(1),    // Scene + board
        ])
        .split(area);

    draw_brief(frame, scene, rows[0], palette);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    draw_scene(frame, scene, columns[0], palette, glyphs);
    draw_board(frame, scene, columns[1], palette, glyphs);

    if let Some(result) = scene.deduction_result() {
        draw_deduction_modal(frame, area, palette, result.correct, &result.title, &result.detail);
    } else if let Some(outcome) = scene.outcome() {
        draw_outcome_modal(frame, scene, area, palette, outcome);
    }
}

fn draw_brief(frame: &mut Frame, scene: &DetectiveScene, area: Rect, palette: &Palette) {
    let case = scene.case();
    let lines = vec![
        Line::from(Span::styled(case.title, palette.title())),
        Line::from(Span::styled(case.description, palette.body())),
    ];
    let title = format!("Case {}/{}", scene.case_number(), scene.case_count());
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(&title, palette)),
        area,
    );
}

fn draw_scene(frame: &mut Frame, scene: &DetectiveScene, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = scene.focus() == DetectiveFocus::Scene;
    let block = if focused {
        focused_panel("Crime Scene", palette)
    } else {
        panel("Crime Scene", palette)
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if scene.remaining_evidence().is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing left to investigate here.",
            palette.muted(),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    // Place each marker at its scene position, scaled to the panel.
    for (index, evidence) in scene.remaining_evidence().iter().enumerate() {
        let x = inner.x
            + (u32::from(inner.width.saturating_sub(20)) * u32::from(evidence.position.x) / 100)
                as u16;
        let y = inner.y
            + (u32::from(inner.height.saturating_sub(1)) * u32::from(evidence.position.y) / 100)
                as u16;
        let width = inner.width.saturating_sub(x - inner.x).min(22);
        if width == 0 {
            continue;
        }
        let marker_area = Rect { x, y, width, height: 1 };

        let selected = focused && index == scene.cursor();
        let style = if selected {
            Style::default()
                .fg(palette.warning)
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        };
        let cursor = if selected { glyphs.cursor } else { glyphs.bullet };
        let marker = Paragraph::new(Line::from(Span::styled(
            format!("{cursor} {}", evidence.name),
            style,
        )));
        frame.render_widget(marker, marker_area);
    }
}

fn draw_board(frame: &mut Frame, scene: &DetectiveScene, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = scene.focus() == DetectiveFocus::Board;
    let block = if focused {
        focused_panel("Notebook & Deductions", palette)
    } else {
        panel("Notebook & Deductions", palette)
    };

    let mut lines: Vec<Line> = Vec::new();
    if scene.collected_evidence().is_empty() {
        lines.push(Line::from(Span::styled(
            "Collect clues from the scene to fill the notebook.",
            palette.muted(),
        )));
    }

    for (index, evidence) in scene.collected_evidence().iter().enumerate() {
        let selected = focused && index == scene.cursor();
        let picked = scene.picked() == Some(evidence.id);

        let cursor = if selected { glyphs.cursor } else { " " };
        let mark = if picked { "(1)" } else { "   " };
        let kind = match evidence.kind {
            EvidenceKind::Physical => "physical",
            EvidenceKind::Testimony => "testimony",
            EvidenceKind::Document => "document",
        };
        let style = if selected {
            Style::default().fg(palette.text_primary).bg(palette.bg_highlight)
        } else {
            palette.body()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{cursor} {mark} "), Style::default().fg(palette.warning)),
            Span::styled(format!("{:<22}", evidence.name), style),
            Span::styled(format!("[{kind}]"), palette.muted()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Deductions found: {}", scene.found_deduction_count()),
        Style::default().fg(palette.success),
    )));
    if scene.picked().is_some() {
        lines.push(Line::from(Span::styled(
            "Pick a second clue to connect.",
            Style::default().fg(palette.warning),
        )));
    }
    if scene.is_case_solvable() {
        lines.push(Line::from(Span::styled(
            "The proof is within reach. Press c to close the case.",
            Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_deduction_modal(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    correct: bool,
    title: &str,
    detail: &str,
) {
    let modal = centered_rect(area, 56, 9);
    frame.render_widget(Clear, modal);

    let header_style = if correct {
        Style::default().fg(palette.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.warning).add_modifier(Modifier::BOLD)
    };
    let lines = vec![
        Line::from(Span::styled(title.to_string(), header_style)),
        Line::from(""),
        Line::from(Span::styled(detail.to_string(), palette.body())),
        Line::from(""),
        Line::from(Span::styled("Enter to continue", palette.muted())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Deduction", palette)),
        modal,
    );
}

fn draw_outcome_modal(
    frame: &mut Frame,
    scene: &DetectiveScene,
    area: Rect,
    palette: &Palette,
    outcome: CaseOutcome,
) {
    let modal = centered_rect(area, 60, 11);
    frame.render_widget(Clear, modal);

    let case = scene.case();
    let lines = match outcome {
        CaseOutcome::Solved => vec![
            Line::from(Span::styled(
                "CASE SOLVED",
                Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(format!("The truth: {}", case.truth), palette.body())),
            Line::from(""),
            Line::from(Span::styled(case.provability, palette.body())),
            Line::from(""),
            Line::from(Span::styled(
                if scene.is_last_case() {
                    "Enter to close"
                } else {
                    "n for the next case, Enter to close"
                },
                palette.muted(),
            )),
        ],
        CaseOutcome::Undecidable => vec![
            Line::from(Span::styled(
                "UNDECIDABLE",
                Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Every clue is in hand, and still the case cannot be proved.",
                palette.body(),
            )),
            Line::from(""),
            Line::from(Span::styled(case.provability, palette.body())),
            Line::from(""),
            Line::from(Span::styled("n for the next case, Enter to close", palette.muted())),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Verdict", palette)),
        modal,
    );
}
