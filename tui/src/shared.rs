//! Small layout helpers shared by the scene renderers.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use crate::theme::Palette;

/// A rect of `width` x `height` centered inside `area`, clamped to it.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Standard bordered panel with a title.
#[must_use]
pub fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
}

/// Panel variant with an accent border, used for the focused pane.
#[must_use]
pub fn focused_panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    panel(title, palette).border_style(Style::default().fg(palette.accent))
}
