//! Scenario state machines and orchestration for Godelarium.
//!
//! Each mini-game is a small, tick-driven state machine with no I/O and
//! no wall-clock timers: callers feed in input events and elapsed time,
//! which keeps every transition testable with synthetic deltas. The only
//! side-effectful component is the progress store, which persists after
//! each transition through an adapter kept out of the transition logic.

mod app;
mod config;
pub mod content;
mod detective;
mod encoder;
mod factory;
mod paradox;
mod progress;
mod rules;
mod timer;

pub use app::{App, Screen};
pub use config::GameConfig;
pub use detective::{CaseOutcome, DeductionResult, DetectiveFocus, DetectiveScene};
pub use encoder::{ENCODER_SYMBOLS, Encoder, Factor, PRIMES};
pub use factory::{FactoryScene, MachineState};
pub use paradox::ParadoxLoop;
pub use progress::ProgressStore;
pub use rules::{RuleError, evaluate};
pub use timer::Countdown;
