//! Input handling for the Godelarium TUI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use godel_engine::{App, Encoder, Screen};

// Never starve rendering on a burst of key repeats.
const MAX_EVENTS_PER_FRAME: usize = 64;

/// Drain pending terminal events into the app.
/// Returns true if the app should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        if !event::poll(Duration::ZERO)? {
            break;
        }
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release) - important for Windows
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Handle Ctrl+C globally
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(true);
            }

            match app.screen() {
                Screen::Home => handle_home(app, key),
                Screen::Detective => handle_detective(app, key),
                Screen::Factory => handle_factory(app, key),
                Screen::Paradox => handle_paradox(app, key),
                Screen::Coding => handle_coding(app, key),
            }
        }
    }

    Ok(app.should_quit())
}

fn handle_home(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.home_prev();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.home_next();
        }
        KeyCode::Enter => {
            app.open_selected();
        }
        KeyCode::Char('R' | 'r') => {
            app.request_reset();
        }
        _ => {
            app.disarm_reset();
        }
    }
}

fn handle_detective(app: &mut App, key: KeyEvent) {
    let scene = app.detective_mut();

    // Modals swallow input until dismissed.
    if scene.deduction_result().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            scene.dismiss_deduction_result();
        }
        return;
    }
    if scene.outcome().is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => scene.dismiss_outcome(),
            KeyCode::Char('n') if !scene.is_last_case() => {
                // Undecidable cases advance too; the next case brings the
                // new axiom that makes the thief provable.
                scene.dismiss_outcome();
                scene.advance_case();
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.go_home(),
        KeyCode::Tab => scene.toggle_focus(),
        KeyCode::Up | KeyCode::Char('k') => scene.cursor_prev(),
        KeyCode::Down | KeyCode::Char('j') => scene.cursor_next(),
        KeyCode::Enter => scene.activate(),
        KeyCode::Char('c') => {
            let _ = scene.check_solution();
        }
        _ => {}
    }
}

fn handle_factory(app: &mut App, key: KeyEvent) {
    let scene = app.factory_mut();
    match key.code {
        KeyCode::Esc => app.go_home(),
        KeyCode::Left | KeyCode::Char('h') => scene.select_prev_axiom(),
        KeyCode::Right | KeyCode::Char('l') => scene.select_next_axiom(),
        KeyCode::Tab => scene.select_next_machine(),
        KeyCode::Enter | KeyCode::Char(' ') => scene.feed_selected(),
        KeyCode::Char('n') => {
            if scene.is_level_complete() {
                scene.advance_level();
            }
        }
        _ => {}
    }
}

fn handle_paradox(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.go_home(),
        KeyCode::Char(' ') => app.paradox_mut().toggle_running(),
        KeyCode::Char('r') => app.paradox_mut().reset(),
        _ => {}
    }
}

fn handle_coding(app: &mut App, key: KeyEvent) {
    let encoder = app.encoder_mut();
    match key.code {
        KeyCode::Esc => app.go_home(),
        KeyCode::Left | KeyCode::Up => encoder.cursor_prev(),
        KeyCode::Right | KeyCode::Down => encoder.cursor_next(),
        KeyCode::Enter => encoder.push_selected(),
        KeyCode::Backspace => encoder.backspace(),
        KeyCode::Delete => encoder.clear(),
        KeyCode::Char('g') => encoder.encode(),
        // Direct symbol entry for anything in the table.
        KeyCode::Char(c) if Encoder::code_of(c).is_some() => encoder.push(c),
        _ => {}
    }
}
