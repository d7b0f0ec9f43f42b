//! Persisted progress state.
//!
//! `Progress` is a pure state container: the transitions below touch no
//! I/O, so they are testable in isolation. Persistence lives behind the
//! engine's store, which rewrites the file after every transition.

use std::collections::BTreeSet;

use crate::scenario::ScenarioId;

/// Display status of a module card on the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    Locked,
    Unlocked,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Progress {
    unlocked: BTreeSet<ScenarioId>,
    completed: BTreeSet<ScenarioId>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            unlocked: BTreeSet::from([
                ScenarioId::Detective,
                ScenarioId::Factory,
                ScenarioId::Paradox,
            ]),
            completed: BTreeSet::new(),
        }
    }
}

impl Progress {
    /// Mark a scenario as reachable. Idempotent.
    pub fn unlock(&mut self, id: ScenarioId) {
        self.unlocked.insert(id);
    }

    /// Mark a scenario as finished. Idempotent.
    ///
    /// Also unlocks the scenario, so `completed` is a subset of
    /// `unlocked` by construction on every path through the app.
    pub fn complete(&mut self, id: ScenarioId) {
        self.unlocked.insert(id);
        self.completed.insert(id);
    }

    /// Restore the fixed defaults, discarding all progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_unlocked(&self, id: ScenarioId) -> bool {
        // The encoder has no prerequisite; its card is always open.
        id == ScenarioId::Coding || self.unlocked.contains(&id)
    }

    #[must_use]
    pub fn is_completed(&self, id: ScenarioId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn status(&self, id: ScenarioId) -> ScenarioStatus {
        if self.is_completed(id) {
            ScenarioStatus::Completed
        } else if self.is_unlocked(id) {
            ScenarioStatus::Unlocked
        } else {
            ScenarioStatus::Locked
        }
    }

    /// Overall completion across the five modules, in percent.
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        let total = ScenarioId::ALL.len();
        (self.completed.len() * 100 / total) as u8
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_unlock_three_scenarios() {
        let p = Progress::default();
        assert!(p.is_unlocked(ScenarioId::Detective));
        assert!(p.is_unlocked(ScenarioId::Factory));
        assert!(p.is_unlocked(ScenarioId::Paradox));
        assert!(!p.is_unlocked(ScenarioId::Kingdom));
        assert_eq!(p.completed_count(), 0);
    }

    #[test]
    fn coding_card_is_always_open() {
        let p = Progress::default();
        assert!(p.is_unlocked(ScenarioId::Coding));
        assert_eq!(p.status(ScenarioId::Coding), ScenarioStatus::Unlocked);
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut p = Progress::default();
        p.unlock(ScenarioId::Factory);
        let snapshot = p.clone();
        p.unlock(ScenarioId::Factory);
        assert_eq!(p, snapshot);
    }

    #[test]
    fn complete_implies_unlocked() {
        let mut p = Progress::default();
        p.complete(ScenarioId::Kingdom);
        assert!(p.is_unlocked(ScenarioId::Kingdom));
        assert_eq!(p.status(ScenarioId::Kingdom), ScenarioStatus::Completed);
    }

    #[test]
    fn reset_restores_exact_defaults() {
        let mut p = Progress::default();
        p.complete(ScenarioId::Detective);
        p.unlock(ScenarioId::Kingdom);
        p.reset();
        assert_eq!(p, Progress::default());
    }

    #[test]
    fn percent_over_five_modules() {
        let mut p = Progress::default();
        assert_eq!(p.percent_complete(), 0);
        p.complete(ScenarioId::Detective);
        assert_eq!(p.percent_complete(), 20);
    }

    #[test]
    fn round_trips_through_json() {
        let mut p = Progress::default();
        p.complete(ScenarioId::Paradox);
        let json = serde_json::to_string(&p).unwrap();
        let back: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
