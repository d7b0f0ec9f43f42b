//! Logic symbols and inference rules.
//!
//! Rules are data, not behavior: `RuleKind` is a closed set of rule
//! shapes and the engine dispatches on it through a single pure
//! evaluation function. Nothing here executes anything.

use std::fmt;

/// The implication marker used inside composite glyphs, e.g. `P→Q`.
pub const IMPLIES: char = '→';

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Axiom,
    Theorem,
    Operator,
}

/// Semantic color tag for a symbol token. The TUI maps these onto the
/// active palette; the engine never sees a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Green,
    Blue,
    Purple,
    Yellow,
}

/// An immutable logic token. Axioms are defined in static content;
/// theorems are minted by the rule engine with synthetic ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicSymbol {
    pub id: String,
    /// Display glyph, e.g. `"P"` or `"P→Q"`.
    pub glyph: String,
    pub kind: SymbolKind,
    pub tint: Tint,
}

impl LogicSymbol {
    #[must_use]
    pub fn axiom(id: &str, glyph: &str, tint: Tint) -> Self {
        Self {
            id: id.to_string(),
            glyph: glyph.to_string(),
            kind: SymbolKind::Axiom,
            tint,
        }
    }

    /// Whether the glyph is an implication (`X→Y`).
    #[must_use]
    pub fn is_implication(&self) -> bool {
        self.glyph.contains(IMPLIES)
    }
}

impl fmt::Display for LogicSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyph)
    }
}

/// The closed set of rule shapes the factory knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Echo: the machine outputs exactly what went in.
    Identity,
    /// From `P` and `P→Q`, conclude `Q`. Input order does not matter.
    ModusPonens,
}

impl RuleKind {
    /// How many premises the rule consumes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Identity => 1,
            Self::ModusPonens => 2,
        }
    }
}

/// An inference rule as placed on the factory floor.
#[derive(Debug, Clone)]
pub struct InferenceRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: RuleKind,
}

impl InferenceRule {
    #[must_use]
    pub fn arity(&self) -> usize {
        self.kind.arity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implication_detection() {
        let p = LogicSymbol::axiom("axiom-p", "P", Tint::Purple);
        let pq = LogicSymbol::axiom("axiom-p-q", "P→Q", Tint::Yellow);
        assert!(!p.is_implication());
        assert!(pq.is_implication());
    }

    #[test]
    fn rule_arities() {
        assert_eq!(RuleKind::Identity.arity(), 1);
        assert_eq!(RuleKind::ModusPonens.arity(), 2);
    }
}
