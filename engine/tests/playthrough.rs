//! Full playthrough: every module driven to completion through the
//! app surface, with progress persisted across a restart.

use std::time::Duration;

use godel_engine::{App, ProgressStore, Screen};
use godel_types::{ScenarioId, ui::UiOptions};

const FRAME: Duration = Duration::from_millis(16);

fn solve_detective(app: &mut App) {
    app.open_scenario(ScenarioId::Detective);
    assert_eq!(app.screen(), Screen::Detective);

    let scene = app.detective_mut();
    scene.collect("ev-1");
    scene.collect("ev-2");
    scene.connect("ev-1", "ev-2");
    assert!(scene.check_solution().is_some());
    scene.dismiss_outcome();
    scene.advance_case();

    // The locked room: every clue in hand and still no proof.
    for id in ["ev-2-1", "ev-2-2", "ev-2-3"] {
        scene.collect(id);
    }
    assert!(scene.check_solution().is_some());
    scene.dismiss_outcome();
    scene.advance_case();

    for id in ["ev-3-1", "ev-3-2", "ev-3-3"] {
        scene.collect(id);
    }
    scene.connect("ev-3-2", "ev-3-3");
    assert!(scene.check_solution().is_some());
    app.tick(FRAME);
    assert!(app.progress().is_completed(ScenarioId::Detective));
}

fn solve_factory(app: &mut App) {
    app.open_scenario(ScenarioId::Factory);
    assert_eq!(app.screen(), Screen::Factory);

    app.factory_mut().feed(0, 0);
    assert!(app.factory().is_level_complete());
    app.factory_mut().advance_level();

    app.factory_mut().feed(0, 0);
    app.factory_mut().feed(0, 1);
    app.tick(FRAME);
    assert!(app.progress().is_completed(ScenarioId::Factory));
}

fn run_paradox(app: &mut App) {
    app.open_scenario(ScenarioId::Paradox);
    app.paradox_mut().start();
    // Eleven negations push the step counter past the warning mark.
    app.tick(Duration::from_secs(11));
    assert!(app.paradox().warning());
    assert!(app.progress().is_completed(ScenarioId::Paradox));
}

fn run_encoder(app: &mut App) {
    app.open_scenario(ScenarioId::Coding);
    for symbol in ['0', '=', '0'] {
        app.encoder_mut().push(symbol);
    }
    app.encoder_mut().encode();
    app.tick(Duration::from_secs(2));
    assert!(app.encoder().is_encoded());
    assert!(app.progress().is_completed(ScenarioId::Coding));
}

#[test]
fn all_modules_can_be_completed_in_one_session() {
    let mut app = App::with_store(ProgressStore::in_memory(), UiOptions::default());

    solve_detective(&mut app);
    app.go_home();
    solve_factory(&mut app);
    app.go_home();
    run_paradox(&mut app);
    app.go_home();
    run_encoder(&mut app);
    app.go_home();

    // The kingdom stays under construction; four of five modules done.
    assert_eq!(app.progress().percent_complete(), 80);
}

#[test]
fn progress_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut app = App::with_store(ProgressStore::open(dir.path()), UiOptions::default());
    run_paradox(&mut app);
    drop(app);

    let app = App::with_store(ProgressStore::open(dir.path()), UiOptions::default());
    assert!(app.progress().is_completed(ScenarioId::Paradox));
    assert!(!app.progress().is_completed(ScenarioId::Detective));
}

#[test]
fn navigating_away_abandons_scene_state() {
    let mut app = App::with_store(ProgressStore::in_memory(), UiOptions::default());

    app.open_scenario(ScenarioId::Detective);
    app.detective_mut().collect("ev-1");
    app.go_home();
    app.open_scenario(ScenarioId::Detective);
    assert!(app.detective().collected_evidence().is_empty());
}
