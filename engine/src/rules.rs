//! Pure rule evaluation.
//!
//! Rules are data (`RuleKind`); this module is the single place that
//! gives them meaning. `evaluate` is a pure function of its inputs, so
//! the factory scene can call it the instant a machine's slots fill up.

use godel_types::{IMPLIES, InferenceRule, LogicSymbol, RuleKind, SymbolKind, Tint};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("{rule} needs {expected} premises, got {got}")]
    Arity {
        rule: &'static str,
        expected: usize,
        got: usize,
    },
    /// The premises are all present but do not fit the rule's pattern.
    #[error("the premises do not match the {rule} pattern")]
    NoMatch { rule: &'static str },
}

/// Run `rule` over exactly `rule.arity()` premises.
///
/// `serial` disambiguates the synthetic id of the produced theorem;
/// callers thread a per-scene counter through it. The observable
/// contract for gameplay is the output glyph, not the id.
pub fn evaluate(
    rule: &InferenceRule,
    inputs: &[LogicSymbol],
    serial: u64,
) -> Result<LogicSymbol, RuleError> {
    let expected = rule.arity();
    if inputs.len() != expected {
        return Err(RuleError::Arity {
            rule: rule.name,
            expected,
            got: inputs.len(),
        });
    }

    match rule.kind {
        RuleKind::Identity => Ok(inputs[0].clone()),
        RuleKind::ModusPonens => modus_ponens(rule, inputs, serial),
    }
}

/// From `P` and `P→Q` (either order), conclude `Q`.
fn modus_ponens(
    rule: &InferenceRule,
    inputs: &[LogicSymbol],
    serial: u64,
) -> Result<LogicSymbol, RuleError> {
    let no_match = RuleError::NoMatch { rule: rule.name };

    let implication = inputs.iter().find(|s| s.is_implication());
    let simple = inputs.iter().find(|s| !s.is_implication());
    let (Some(implication), Some(simple)) = (implication, simple) else {
        // Two implications or two simple symbols.
        return Err(no_match);
    };

    let Some((antecedent, consequent)) = implication.glyph.split_once(IMPLIES) else {
        return Err(no_match);
    };

    if simple.glyph != antecedent {
        return Err(no_match);
    }

    Ok(LogicSymbol {
        id: format!("theorem-{consequent}-{serial}"),
        glyph: consequent.to_string(),
        kind: SymbolKind::Theorem,
        tint: Tint::Green,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> InferenceRule {
        InferenceRule {
            id: "rule-identity",
            name: "Identity",
            description: "",
            kind: RuleKind::Identity,
        }
    }

    fn modus_ponens_rule() -> InferenceRule {
        InferenceRule {
            id: "rule-mp",
            name: "Modus Ponens",
            description: "",
            kind: RuleKind::ModusPonens,
        }
    }

    fn sym(glyph: &str) -> LogicSymbol {
        LogicSymbol::axiom(&format!("axiom-{glyph}"), glyph, Tint::Purple)
    }

    #[test]
    fn identity_echoes_any_symbol() {
        let s = sym("A");
        let out = evaluate(&identity(), std::slice::from_ref(&s), 0).unwrap();
        assert_eq!(out.glyph, s.glyph);
    }

    #[test]
    fn modus_ponens_accepts_both_orders() {
        let rule = modus_ponens_rule();
        let a = evaluate(&rule, &[sym("P"), sym("P→Q")], 0).unwrap();
        let b = evaluate(&rule, &[sym("P→Q"), sym("P")], 1).unwrap();
        assert_eq!(a.glyph, "Q");
        assert_eq!(b.glyph, "Q");
        assert_eq!(a.kind, SymbolKind::Theorem);
    }

    #[test]
    fn modus_ponens_rejects_antecedent_mismatch() {
        let rule = modus_ponens_rule();
        let err = evaluate(&rule, &[sym("P"), sym("X→Q")], 0).unwrap_err();
        assert!(matches!(err, RuleError::NoMatch { .. }));
    }

    #[test]
    fn modus_ponens_rejects_two_implications() {
        let rule = modus_ponens_rule();
        let err = evaluate(&rule, &[sym("P→Q"), sym("Q→R")], 0).unwrap_err();
        assert!(matches!(err, RuleError::NoMatch { .. }));
    }

    #[test]
    fn modus_ponens_rejects_two_simple_symbols() {
        let rule = modus_ponens_rule();
        let err = evaluate(&rule, &[sym("P"), sym("Q")], 0).unwrap_err();
        assert!(matches!(err, RuleError::NoMatch { .. }));
    }

    #[test]
    fn arity_is_checked_before_pattern() {
        let err = evaluate(&modus_ponens_rule(), &[sym("P")], 0).unwrap_err();
        assert!(matches!(err, RuleError::Arity { expected: 2, got: 1, .. }));
    }

    #[test]
    fn minted_theorem_ids_carry_the_serial() {
        let rule = modus_ponens_rule();
        let a = evaluate(&rule, &[sym("P"), sym("P→Q")], 7).unwrap();
        assert_eq!(a.id, "theorem-Q-7");
    }
}
