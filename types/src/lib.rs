//! Core domain types for Godelarium.
//!
//! Everything in this crate is plain data: logic symbols and inference
//! rules, factory levels, detective cases, and the persisted progress
//! state. No I/O, no async, no rendering concerns.

mod detective;
mod logic;
mod progress;
mod scenario;
pub mod ui;

pub use detective::{
    Case, DeductionCombo, Evidence, EvidenceKind, ScenePosition, UNDECIDABLE_THRESHOLD,
};
pub use logic::{IMPLIES, InferenceRule, LogicSymbol, RuleKind, SymbolKind, Tint};
pub use progress::{Progress, ScenarioStatus};
pub use scenario::ScenarioId;

/// A factory level: the axioms on the supply belt, the machines on the
/// floor, and the theorem glyph that wins the level.
#[derive(Debug, Clone)]
pub struct FactoryLevel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub axioms: Vec<LogicSymbol>,
    pub rules: Vec<InferenceRule>,
    /// The glyph a machine must produce to complete the level.
    pub goal: &'static str,
    pub tutorial: &'static str,
}
