//! Application orchestration.
//!
//! `App` owns the active screen, one scene per scenario, and the
//! progress store - the only state that survives navigation. Scenes are
//! rebuilt on entry (navigating away abandons in-progress machine and
//! case state, and cancels pending transients).

use std::time::Duration;

use godel_types::{Progress, ScenarioId, ui::UiOptions};
use tracing::info;

use crate::config::GameConfig;
use crate::detective::DetectiveScene;
use crate::encoder::Encoder;
use crate::factory::FactoryScene;
use crate::paradox::ParadoxLoop;
use crate::progress::ProgressStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Detective,
    Factory,
    Paradox,
    Coding,
}

#[derive(Debug)]
pub struct App {
    screen: Screen,
    detective: DetectiveScene,
    factory: FactoryScene,
    paradox: ParadoxLoop,
    encoder: Encoder,
    store: ProgressStore,
    ui_options: UiOptions,
    status: Option<String>,
    home_cursor: usize,
    /// Two-step confirmation for the destructive progress reset.
    reset_armed: bool,
    should_quit: bool,
}

impl App {
    /// Build the app from the user's config and the on-disk progress.
    #[must_use]
    pub fn new() -> Self {
        let config = GameConfig::load().unwrap_or_default();
        let ui_options = config.ui_options();
        let store = config
            .storage_dir()
            .or_else(ProgressStore::default_dir)
            .map_or_else(ProgressStore::in_memory, |dir| ProgressStore::open(&dir));
        Self::with_store(store, ui_options)
    }

    /// Build around an explicit store. Test seam.
    #[must_use]
    pub fn with_store(store: ProgressStore, ui_options: UiOptions) -> Self {
        Self {
            screen: Screen::Home,
            detective: DetectiveScene::new(),
            factory: FactoryScene::new(),
            paradox: ParadoxLoop::new(),
            encoder: Encoder::new(),
            store,
            ui_options,
            status: None,
            home_cursor: 0,
            reset_armed: false,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        self.store.progress()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // --- scene access for input handling and rendering ---

    #[must_use]
    pub fn detective(&self) -> &DetectiveScene {
        &self.detective
    }

    pub fn detective_mut(&mut self) -> &mut DetectiveScene {
        &mut self.detective
    }

    #[must_use]
    pub fn factory(&self) -> &FactoryScene {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut FactoryScene {
        &mut self.factory
    }

    #[must_use]
    pub fn paradox(&self) -> &ParadoxLoop {
        &self.paradox
    }

    pub fn paradox_mut(&mut self) -> &mut ParadoxLoop {
        &mut self.paradox
    }

    #[must_use]
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn encoder_mut(&mut self) -> &mut Encoder {
        &mut self.encoder
    }

    // --- control panel ---

    #[must_use]
    pub fn home_cursor(&self) -> usize {
        self.home_cursor
    }

    #[must_use]
    pub fn reset_armed(&self) -> bool {
        self.reset_armed
    }

    pub fn home_next(&mut self) {
        self.home_cursor = (self.home_cursor + 1) % ScenarioId::ALL.len();
        self.reset_armed = false;
    }

    pub fn home_prev(&mut self) {
        let count = ScenarioId::ALL.len();
        self.home_cursor = (self.home_cursor + count - 1) % count;
        self.reset_armed = false;
    }

    /// Open the module card under the cursor.
    pub fn open_selected(&mut self) {
        self.open_scenario(ScenarioId::ALL[self.home_cursor]);
    }

    /// Enter a scenario screen with a fresh scene, route-change style.
    pub fn open_scenario(&mut self, id: ScenarioId) {
        self.reset_armed = false;
        if !self.store.progress().is_unlocked(id) {
            self.set_status(format!("\"{}\" is still locked.", id.title()));
            return;
        }
        self.clear_status();
        match id {
            ScenarioId::Detective => {
                self.detective = DetectiveScene::new();
                self.screen = Screen::Detective;
            }
            ScenarioId::Factory => {
                self.factory = FactoryScene::new();
                self.screen = Screen::Factory;
            }
            ScenarioId::Paradox => {
                self.paradox = ParadoxLoop::new();
                self.screen = Screen::Paradox;
            }
            ScenarioId::Coding => {
                self.encoder = Encoder::new();
                self.screen = Screen::Coding;
            }
            ScenarioId::Kingdom => {
                self.set_status("\"The Incomplete Kingdom\" is under construction.");
            }
        }
    }

    /// Back to the control panel. Pending scene transients die with the
    /// scene the next time it is opened.
    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.clear_status();
    }

    /// First press arms the reset, second press wipes all progress.
    pub fn request_reset(&mut self) {
        if self.reset_armed {
            self.store.reset();
            self.reset_armed = false;
            info!("progress reset to defaults");
            self.set_status("All progress has been reset.");
        } else {
            self.reset_armed = true;
            self.set_status("Press R again to wipe all progress.");
        }
    }

    pub fn disarm_reset(&mut self) {
        self.reset_armed = false;
    }

    /// Advance the active scene and record any newly finished scenario.
    pub fn tick(&mut self, delta: Duration) {
        match self.screen {
            // Home and the detective board have no transient timers.
            Screen::Home | Screen::Detective => {}
            Screen::Factory => self.factory.tick(delta),
            Screen::Paradox => self.paradox.tick(delta),
            Screen::Coding => self.encoder.tick(delta),
        }
        self.sync_completion();
    }

    /// Latch scene completion into the progress store exactly once.
    fn sync_completion(&mut self) {
        let finished = match self.screen {
            Screen::Home => None,
            Screen::Detective => self.detective.is_finished().then_some(ScenarioId::Detective),
            Screen::Factory => self.factory.is_finished().then_some(ScenarioId::Factory),
            Screen::Paradox => self.paradox.warning().then_some(ScenarioId::Paradox),
            Screen::Coding => self.encoder.is_encoded().then_some(ScenarioId::Coding),
        };
        if let Some(id) = finished
            && !self.store.progress().is_completed(id)
        {
            self.store.complete(id);
            self.set_status(format!("Module complete: {}", id.title()));
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_store(ProgressStore::in_memory(), UiOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn starts_on_the_control_panel() {
        let app = app();
        assert_eq!(app.screen(), Screen::Home);
        assert!(!app.should_quit());
    }

    #[test]
    fn locked_scenario_does_not_open() {
        let mut app = app();
        app.open_scenario(ScenarioId::Kingdom);
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.status().is_some());
    }

    #[test]
    fn reopening_a_scenario_resets_its_scene() {
        let mut app = app();
        app.open_scenario(ScenarioId::Factory);
        app.factory_mut().feed(0, 0);
        assert!(app.factory().is_level_complete());

        app.go_home();
        app.open_scenario(ScenarioId::Factory);
        assert!(!app.factory().is_level_complete());
    }

    #[test]
    fn finishing_the_factory_completes_the_module_once() {
        let mut app = app();
        app.open_scenario(ScenarioId::Factory);
        app.factory_mut().feed(0, 0);
        app.tick(Duration::from_millis(16));
        assert!(!app.progress().is_completed(ScenarioId::Factory));

        app.factory_mut().advance_level();
        app.factory_mut().feed(0, 0);
        app.factory_mut().feed(0, 1);
        app.tick(Duration::from_millis(16));
        assert!(app.progress().is_completed(ScenarioId::Factory));
    }

    #[test]
    fn paradox_warning_completes_the_module() {
        let mut app = app();
        app.open_scenario(ScenarioId::Paradox);
        app.paradox_mut().start();
        app.tick(Duration::from_secs(11));
        assert!(app.progress().is_completed(ScenarioId::Paradox));
    }

    #[test]
    fn encoding_completes_the_coding_module() {
        let mut app = app();
        app.open_scenario(ScenarioId::Coding);
        app.encoder_mut().push('~');
        app.encoder_mut().encode();
        app.tick(Duration::from_secs(2));
        assert!(app.progress().is_completed(ScenarioId::Coding));
    }

    #[test]
    fn reset_requires_confirmation() {
        let mut app = app();
        app.open_scenario(ScenarioId::Paradox);
        app.paradox_mut().start();
        app.tick(Duration::from_secs(11));
        app.go_home();

        app.request_reset();
        assert!(app.progress().is_completed(ScenarioId::Paradox));
        app.request_reset();
        assert!(!app.progress().is_completed(ScenarioId::Paradox));
        assert_eq!(app.progress(), &Progress::default());
    }

    #[test]
    fn moving_the_home_cursor_disarms_the_reset() {
        let mut app = app();
        app.request_reset();
        assert!(app.reset_armed());
        app.home_next();
        assert!(!app.reset_armed());
    }
}
