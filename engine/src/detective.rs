//! The Logical Detective scene.
//!
//! Evidence collection, pairwise deduction lookups, and the solvability
//! predicate. A case with the undecidable sentinel never satisfies the
//! predicate; checking it with every clue in hand surfaces the
//! undecidable outcome instead of the solved one.

use std::collections::BTreeSet;

use godel_types::{Case, Evidence};
use tracing::debug;

use crate::content;

/// What the deduction board shows after connecting two clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionResult {
    pub title: String,
    pub detail: String,
    pub correct: bool,
}

/// Terminal outcome of a "check solution" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The solvability predicate holds; the truth is revealed.
    Solved,
    /// Every clue is collected and the case still cannot be proved.
    Undecidable,
}

/// Which panel the cursor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectiveFocus {
    #[default]
    Scene,
    Board,
}

#[derive(Debug)]
pub struct DetectiveScene {
    cases: Vec<Case>,
    case_index: usize,
    collected: BTreeSet<String>,
    found_deductions: BTreeSet<String>,
    deduction_result: Option<DeductionResult>,
    outcome: Option<CaseOutcome>,
    focus: DetectiveFocus,
    cursor: usize,
    /// First clue picked on the board, awaiting its partner.
    picked: Option<String>,
}

impl Default for DetectiveScene {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectiveScene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cases: content::detective_cases(),
            case_index: 0,
            collected: BTreeSet::new(),
            found_deductions: BTreeSet::new(),
            deduction_result: None,
            outcome: None,
            focus: DetectiveFocus::default(),
            cursor: 0,
            picked: None,
        }
    }

    #[must_use]
    pub fn case(&self) -> &Case {
        &self.cases[self.case_index]
    }

    #[must_use]
    pub fn case_number(&self) -> usize {
        self.case_index + 1
    }

    #[must_use]
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_last_case(&self) -> bool {
        self.case_index + 1 == self.cases.len()
    }

    #[must_use]
    pub fn is_collected(&self, evidence_id: &str) -> bool {
        self.collected.contains(evidence_id)
    }

    /// Evidence still waiting in the scene, in case order.
    #[must_use]
    pub fn remaining_evidence(&self) -> Vec<&Evidence> {
        self.case()
            .evidence
            .iter()
            .filter(|e| !self.collected.contains(e.id))
            .collect()
    }

    /// Evidence already moved to the notebook, in case order.
    #[must_use]
    pub fn collected_evidence(&self) -> Vec<&Evidence> {
        self.case()
            .evidence
            .iter()
            .filter(|e| self.collected.contains(e.id))
            .collect()
    }

    #[must_use]
    pub fn deduction_result(&self) -> Option<&DeductionResult> {
        self.deduction_result.as_ref()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<CaseOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn found_deduction_count(&self) -> usize {
        self.found_deductions.len()
    }

    /// Move an evidence marker from the scene to the notebook. Idempotent;
    /// unknown ids are ignored.
    pub fn collect(&mut self, evidence_id: &str) {
        if !self.case().evidence.iter().any(|e| e.id == evidence_id) {
            return;
        }
        if self.collected.insert(evidence_id.to_string()) {
            debug!(case = self.case().id, evidence = evidence_id, "clue collected");
        }
    }

    /// Try to connect two collected clues.
    ///
    /// A registered pair surfaces its combo; a correct combo is credited
    /// at most once. An unregistered pair surfaces the generic
    /// "no clear connection" result and mutates nothing.
    pub fn connect(&mut self, a: &str, b: &str) -> &DeductionResult {
        let combo = self
            .case()
            .combinations
            .iter()
            .find(|c| c.links(a, b))
            .cloned();

        let result = match combo {
            Some(combo) => {
                if combo.correct {
                    self.found_deductions.insert(combo.id.to_string());
                }
                DeductionResult {
                    title: combo.title.to_string(),
                    detail: combo.detail.to_string(),
                    correct: combo.correct,
                }
            }
            None => DeductionResult {
                title: "No Clear Connection".to_string(),
                detail: "These two clues do not seem to have a direct relation that helps solve the case.".to_string(),
                correct: false,
            },
        };

        &*self.deduction_result.insert(result)
    }

    /// The solvability predicate: every correct combination found and
    /// enough relevant evidence collected. A sentinel case is never
    /// solvable through this predicate.
    #[must_use]
    pub fn is_case_solvable(&self) -> bool {
        let case = self.case();
        if case.is_undecidable() {
            return false;
        }

        let all_combos_found = case
            .combinations
            .iter()
            .filter(|c| c.correct)
            .all(|c| self.found_deductions.contains(c.id));

        let relevant_collected = case
            .evidence
            .iter()
            .filter(|e| e.relevant && self.collected.contains(e.id))
            .count();

        all_combos_found && relevant_collected >= case.min_evidence
    }

    #[must_use]
    pub fn all_evidence_collected(&self) -> bool {
        self.collected.len() == self.case().evidence.len()
    }

    /// Resolve a "check solution" request. Returns the terminal outcome,
    /// if any; a premature check surfaces nothing.
    pub fn check_solution(&mut self) -> Option<CaseOutcome> {
        let outcome = if self.case().is_undecidable() {
            // Even with everything in hand the proof never closes.
            self.all_evidence_collected()
                .then_some(CaseOutcome::Undecidable)
        } else {
            self.is_case_solvable().then_some(CaseOutcome::Solved)
        };

        if outcome.is_some() {
            self.outcome = outcome;
        }
        outcome
    }

    /// Whether the whole scenario is finished: the last case solved.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_last_case() && self.outcome == Some(CaseOutcome::Solved)
    }

    /// Move to the next case, discarding all per-case state. Strictly
    /// sequential; a no-op on the last case.
    pub fn advance_case(&mut self) {
        if self.is_last_case() {
            return;
        }
        self.case_index += 1;
        self.collected.clear();
        self.found_deductions.clear();
        self.deduction_result = None;
        self.outcome = None;
        self.focus = DetectiveFocus::Scene;
        self.cursor = 0;
        self.picked = None;
    }

    pub fn dismiss_deduction_result(&mut self) {
        self.deduction_result = None;
    }

    pub fn dismiss_outcome(&mut self) {
        self.outcome = None;
    }

    // --- cursor / board interaction ---

    #[must_use]
    pub fn focus(&self) -> DetectiveFocus {
        self.focus
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DetectiveFocus::Scene => DetectiveFocus::Board,
            DetectiveFocus::Board => DetectiveFocus::Scene,
        };
        self.cursor = 0;
        self.picked = None;
    }

    pub fn cursor_next(&mut self) {
        let count = match self.focus {
            DetectiveFocus::Scene => self.remaining_evidence().len(),
            DetectiveFocus::Board => self.collected_evidence().len(),
        };
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn cursor_prev(&mut self) {
        let count = match self.focus {
            DetectiveFocus::Scene => self.remaining_evidence().len(),
            DetectiveFocus::Board => self.collected_evidence().len(),
        };
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Activate the item under the cursor: in the scene this collects
    /// the marker, on the board it picks one clue and connects on the
    /// second pick.
    pub fn activate(&mut self) {
        match self.focus {
            DetectiveFocus::Scene => {
                let Some(ev) = self.remaining_evidence().get(self.cursor).map(|e| e.id) else {
                    return;
                };
                self.collect(ev);
                let remaining = self.remaining_evidence().len();
                if remaining > 0 {
                    self.cursor = self.cursor.min(remaining - 1);
                } else {
                    self.cursor = 0;
                }
            }
            DetectiveFocus::Board => {
                let Some(ev) = self.collected_evidence().get(self.cursor).map(|e| e.id) else {
                    return;
                };
                match self.picked.take() {
                    Some(first) if first != ev => {
                        self.connect(&first, ev);
                    }
                    // Picking the same clue twice cancels the pick.
                    Some(_) => {}
                    None => self.picked = Some(ev.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_is_idempotent_and_leaves_the_scene() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-1");
        scene.collect("ev-1");
        assert_eq!(scene.collected_evidence().len(), 1);
        assert!(scene.remaining_evidence().iter().all(|e| e.id != "ev-1"));
    }

    #[test]
    fn unknown_evidence_is_ignored() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-999");
        assert!(scene.collected_evidence().is_empty());
    }

    #[test]
    fn correct_pair_surfaces_combo_and_is_credited_once() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-1");
        scene.collect("ev-2");

        let result = scene.connect("ev-2", "ev-1").clone();
        assert_eq!(result.title, "Temporal Coincidence");
        assert!(result.correct);
        assert_eq!(scene.found_deduction_count(), 1);

        scene.connect("ev-1", "ev-2");
        assert_eq!(scene.found_deduction_count(), 1);
    }

    #[test]
    fn incorrect_pair_does_not_advance_solvability() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-1");
        scene.collect("ev-3");
        let result = scene.connect("ev-1", "ev-3").clone();
        assert_eq!(result.title, "Contradiction");
        assert!(!result.correct);
        assert!(!scene.is_case_solvable());
        assert_eq!(scene.found_deduction_count(), 0);
    }

    #[test]
    fn unregistered_pair_mutates_nothing() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-2");
        scene.collect("ev-3");
        let result = scene.connect("ev-2", "ev-3").clone();
        assert_eq!(result.title, "No Clear Connection");
        assert_eq!(scene.found_deduction_count(), 0);
    }

    #[test]
    fn case_one_becomes_solvable_after_combo_and_evidence() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-1");
        scene.collect("ev-2");
        assert!(!scene.is_case_solvable());

        scene.connect("ev-1", "ev-2");
        assert!(scene.is_case_solvable());
        assert_eq!(scene.check_solution(), Some(CaseOutcome::Solved));
    }

    #[test]
    fn premature_check_surfaces_nothing() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-1");
        assert_eq!(scene.check_solution(), None);
        assert_eq!(scene.outcome(), None);
    }

    #[test]
    fn sentinel_case_is_never_solvable() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-1");
        scene.collect("ev-2");
        scene.connect("ev-1", "ev-2");
        scene.check_solution();
        scene.dismiss_outcome();
        scene.advance_case();
        assert_eq!(scene.case().id, "case-2");

        for id in ["ev-2-1", "ev-2-2", "ev-2-3"] {
            scene.collect(id);
        }
        scene.connect("ev-2-1", "ev-2-3");
        assert!(!scene.is_case_solvable());
        assert_eq!(scene.check_solution(), Some(CaseOutcome::Undecidable));
    }

    #[test]
    fn sentinel_check_without_all_evidence_stays_silent() {
        let mut scene = DetectiveScene::new();
        solve_case_one(&mut scene);
        scene.advance_case();
        scene.collect("ev-2-1");
        assert_eq!(scene.check_solution(), None);
    }

    #[test]
    fn advancing_resets_per_case_state() {
        let mut scene = DetectiveScene::new();
        solve_case_one(&mut scene);
        scene.advance_case();
        assert!(scene.collected_evidence().is_empty());
        assert_eq!(scene.found_deduction_count(), 0);
        assert_eq!(scene.outcome(), None);
        assert_eq!(scene.deduction_result(), None);
    }

    #[test]
    fn final_case_solve_finishes_the_scenario() {
        let mut scene = DetectiveScene::new();
        solve_case_one(&mut scene);
        scene.advance_case();
        for id in ["ev-2-1", "ev-2-2", "ev-2-3"] {
            scene.collect(id);
        }
        scene.check_solution();
        scene.advance_case();
        assert_eq!(scene.case().id, "case-3");

        for id in ["ev-3-1", "ev-3-2", "ev-3-3"] {
            scene.collect(id);
        }
        scene.connect("ev-3-2", "ev-3-3");
        assert_eq!(scene.check_solution(), Some(CaseOutcome::Solved));
        assert!(scene.is_finished());
        // Terminal: no further case to advance to.
        scene.advance_case();
        assert_eq!(scene.case().id, "case-3");
    }

    #[test]
    fn board_picks_connect_on_the_second_selection() {
        let mut scene = DetectiveScene::new();
        scene.collect("ev-1");
        scene.collect("ev-2");
        scene.toggle_focus();
        assert_eq!(scene.focus(), DetectiveFocus::Board);

        scene.activate(); // pick ev-1
        assert_eq!(scene.picked(), Some("ev-1"));
        scene.cursor_next();
        scene.activate(); // connect with ev-2
        assert_eq!(scene.picked(), None);
        assert!(scene.deduction_result().is_some_and(|r| r.correct));
    }

    fn solve_case_one(scene: &mut DetectiveScene) {
        scene.collect("ev-1");
        scene.collect("ev-2");
        scene.connect("ev-1", "ev-2");
        scene.check_solution();
        scene.dismiss_outcome();
    }
}
