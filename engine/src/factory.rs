//! The Truth Factory scene.
//!
//! Each inference machine runs `Idle → Accumulating → {Success |
//! Rejected} → Idle`. Success and rejection are transient display
//! states carried by a [`Countdown`]; the machine clears itself once
//! the countdown expires.

use std::time::Duration;

use godel_types::{FactoryLevel, LogicSymbol};
use tracing::debug;

use crate::content;
use crate::rules::evaluate;
use crate::timer::Countdown;

/// How long a produced theorem stays on the machine's output tray.
const SUCCESS_DISPLAY: Duration = Duration::from_millis(2000);
/// How long a rejected combination keeps the machine in its error state.
const ERROR_DISPLAY: Duration = Duration::from_millis(1000);

/// One inference machine on the factory floor.
#[derive(Debug, Default)]
pub struct MachineState {
    inputs: Vec<LogicSymbol>,
    output: Option<LogicSymbol>,
    errored: bool,
    clear_in: Option<Countdown>,
}

impl MachineState {
    #[must_use]
    pub fn inputs(&self) -> &[LogicSymbol] {
        &self.inputs
    }

    #[must_use]
    pub fn output(&self) -> Option<&LogicSymbol> {
        self.output.as_ref()
    }

    #[must_use]
    pub fn is_errored(&self) -> bool {
        self.errored
    }

    fn reset(&mut self) {
        self.inputs.clear();
        self.output = None;
        self.errored = false;
        self.clear_in = None;
    }
}

#[derive(Debug)]
pub struct FactoryScene {
    levels: Vec<FactoryLevel>,
    level_index: usize,
    machines: Vec<MachineState>,
    level_complete: bool,
    /// Serial for synthetic theorem ids.
    minted: u64,
    /// Glyph of the most recently produced theorem, for the banner.
    produced: Option<String>,
    supply_cursor: usize,
    machine_cursor: usize,
}

impl Default for FactoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl FactoryScene {
    #[must_use]
    pub fn new() -> Self {
        let levels = content::factory_levels();
        let machines = levels[0].rules.iter().map(|_| MachineState::default()).collect();
        Self {
            levels,
            level_index: 0,
            machines,
            level_complete: false,
            minted: 0,
            produced: None,
            supply_cursor: 0,
            machine_cursor: 0,
        }
    }

    #[must_use]
    pub fn level(&self) -> &FactoryLevel {
        &self.levels[self.level_index]
    }

    #[must_use]
    pub fn level_number(&self) -> usize {
        self.level_index + 1
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn machines(&self) -> &[MachineState] {
        &self.machines
    }

    #[must_use]
    pub fn is_level_complete(&self) -> bool {
        self.level_complete
    }

    #[must_use]
    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 == self.levels.len()
    }

    /// The factory is done when the goal of the final level has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_last_level() && self.level_complete
    }

    #[must_use]
    pub fn produced(&self) -> Option<&str> {
        self.produced.as_deref()
    }

    // --- token selection (the terminal rendition of drag-and-drop) ---

    #[must_use]
    pub fn supply_cursor(&self) -> usize {
        self.supply_cursor
    }

    #[must_use]
    pub fn machine_cursor(&self) -> usize {
        self.machine_cursor
    }

    pub fn select_next_axiom(&mut self) {
        let count = self.level().axioms.len();
        self.supply_cursor = (self.supply_cursor + 1) % count;
    }

    pub fn select_prev_axiom(&mut self) {
        let count = self.level().axioms.len();
        self.supply_cursor = (self.supply_cursor + count - 1) % count;
    }

    pub fn select_next_machine(&mut self) {
        let count = self.machines.len();
        self.machine_cursor = (self.machine_cursor + 1) % count;
    }

    /// Feed the axiom under the supply cursor into the machine under the
    /// machine cursor. A full or still-displaying machine ignores the drop.
    pub fn feed_selected(&mut self) {
        self.feed(self.machine_cursor, self.supply_cursor);
    }

    /// Feed `axiom_index` from the supply into machine `machine_index`.
    ///
    /// Axioms are reusable: feeding never removes them from the supply.
    /// When the slot count reaches the rule's arity the machine runs
    /// immediately and enters its success or error display state.
    pub fn feed(&mut self, machine_index: usize, axiom_index: usize) {
        let level = &self.levels[self.level_index];
        let (Some(rule), Some(axiom)) = (
            level.rules.get(machine_index),
            level.axioms.get(axiom_index),
        ) else {
            return;
        };
        let machine = &mut self.machines[machine_index];

        if machine.inputs.len() >= rule.arity() {
            // Slots full (or output/error still displayed).
            return;
        }

        machine.inputs.push(axiom.clone());
        if machine.inputs.len() < rule.arity() {
            return;
        }

        match evaluate(rule, &machine.inputs, self.minted) {
            Ok(theorem) => {
                debug!(rule = rule.id, glyph = %theorem.glyph, "machine produced a theorem");
                self.minted += 1;
                self.produced = Some(theorem.glyph.clone());
                if theorem.glyph == level.goal {
                    // Latched for the rest of the level.
                    self.level_complete = true;
                }
                machine.output = Some(theorem);
                machine.clear_in = Some(Countdown::new(SUCCESS_DISPLAY));
            }
            Err(err) => {
                debug!(rule = rule.id, %err, "machine rejected the combination");
                machine.errored = true;
                machine.clear_in = Some(Countdown::new(ERROR_DISPLAY));
            }
        }
    }

    /// Advance transient machine states.
    pub fn tick(&mut self, delta: Duration) {
        for machine in &mut self.machines {
            if let Some(countdown) = machine.clear_in.as_mut()
                && countdown.tick(delta)
            {
                machine.reset();
            }
        }
    }

    /// Move to the next level, resetting all machine state. Strictly
    /// sequential; a no-op on the last level.
    pub fn advance_level(&mut self) {
        if self.is_last_level() {
            return;
        }
        self.level_index += 1;
        self.machines = self.levels[self.level_index]
            .rules
            .iter()
            .map(|_| MachineState::default())
            .collect();
        self.level_complete = false;
        self.produced = None;
        self.supply_cursor = 0;
        self.machine_cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_drop_completes_level_one() {
        let mut scene = FactoryScene::new();
        scene.feed(0, 0); // axiom A into the Identity machine
        assert_eq!(scene.machines()[0].output().unwrap().glyph, "A");
        assert!(scene.is_level_complete());
        assert_eq!(scene.produced(), Some("A"));
    }

    #[test]
    fn success_display_clears_after_two_seconds() {
        let mut scene = FactoryScene::new();
        scene.feed(0, 0);
        scene.tick(Duration::from_millis(1999));
        assert!(scene.machines()[0].output().is_some());
        scene.tick(Duration::from_millis(1));
        assert!(scene.machines()[0].output().is_none());
        assert!(scene.machines()[0].inputs().is_empty());
        // Completion is latched even after the display clears.
        assert!(scene.is_level_complete());
    }

    #[test]
    fn modus_ponens_level_accepts_either_feed_order() {
        let mut scene = FactoryScene::new();
        scene.feed(0, 0);
        scene.advance_level();
        assert_eq!(scene.level().id, "factory-2");

        scene.feed(0, 1); // P→Q first
        assert!(!scene.is_level_complete());
        scene.feed(0, 0); // then P
        assert_eq!(scene.machines()[0].output().unwrap().glyph, "Q");
        assert!(scene.is_level_complete());
        assert!(scene.is_finished());
    }

    #[test]
    fn rejected_combination_sets_then_clears_the_error_flag() {
        let mut scene = FactoryScene::new();
        scene.feed(0, 0);
        scene.advance_level();

        scene.feed(0, 0); // P
        scene.feed(0, 0); // P again: two simple symbols, no match
        assert!(scene.machines()[0].is_errored());
        scene.tick(Duration::from_millis(999));
        assert!(scene.machines()[0].is_errored());
        scene.tick(Duration::from_millis(1));
        assert!(!scene.machines()[0].is_errored());
        assert!(scene.machines()[0].inputs().is_empty());
    }

    #[test]
    fn full_machine_ignores_further_drops() {
        let mut scene = FactoryScene::new();
        scene.feed(0, 0);
        // Output on display; the single slot is still occupied.
        scene.feed(0, 0);
        assert_eq!(scene.machines()[0].inputs().len(), 1);
    }

    #[test]
    fn advance_resets_machines_and_stops_at_the_last_level() {
        let mut scene = FactoryScene::new();
        scene.feed(0, 0);
        scene.advance_level();
        assert!(!scene.is_level_complete());
        assert!(scene.machines()[0].inputs().is_empty());

        scene.advance_level(); // already on the last level
        assert_eq!(scene.level().id, "factory-2");
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut scene = FactoryScene::new();
        scene.feed(5, 0);
        scene.feed(0, 9);
        assert!(scene.machines()[0].inputs().is_empty());
    }
}
