//! Scenario identifiers.

use std::fmt;

/// The five modules on the control panel. `Kingdom` is a teaser card
/// with no playable scene behind it yet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    Detective,
    Factory,
    Paradox,
    Coding,
    Kingdom,
}

impl ScenarioId {
    pub const ALL: [Self; 5] = [
        Self::Detective,
        Self::Factory,
        Self::Paradox,
        Self::Coding,
        Self::Kingdom,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detective => "detective",
            Self::Factory => "factory",
            Self::Paradox => "paradox",
            Self::Coding => "coding",
            Self::Kingdom => "kingdom",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Detective => "The Logical Detective",
            Self::Factory => "The Truth Factory",
            Self::Paradox => "Paradox Laboratory",
            Self::Coding => "Goedel's Secret Code",
            Self::Kingdom => "The Incomplete Kingdom",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Detective => "Collect clues, connect them, and learn why a true fact can still resist proof.",
            Self::Factory => "Assemble axioms in logic machines to manufacture theorems.",
            Self::Paradox => "Experiment with strange loops and self-referential systems.",
            Self::Coding => "Arithmetization of syntax: turn formulas into numbers.",
            Self::Kingdom => "The final confrontation. Are there unprovable truths?",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ScenarioId;

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ScenarioId::Detective).unwrap();
        assert_eq!(json, "\"detective\"");
        let back: ScenarioId = serde_json::from_str("\"factory\"").unwrap();
        assert_eq!(back, ScenarioId::Factory);
    }
}
