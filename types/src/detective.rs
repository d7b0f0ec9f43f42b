//! Detective case data: evidence, deduction combinations, and cases.

/// Where an evidence marker sits in the scene, as percentages of the
/// scene area. The TUI scales these to the actual viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePosition {
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceKind {
    Physical,
    Testimony,
    Document,
}

#[derive(Debug, Clone)]
pub struct Evidence {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: EvidenceKind,
    /// Whether this item counts toward proving the case truth.
    pub relevant: bool,
    pub position: ScenePosition,
}

/// A registered pairing of two evidence items. The pair is unordered;
/// lookups must accept either orientation.
#[derive(Debug, Clone)]
pub struct DeductionCombo {
    pub id: &'static str,
    pub evidence: [&'static str; 2],
    pub title: &'static str,
    pub detail: &'static str,
    /// Whether this deduction actually advances the proof.
    pub correct: bool,
}

impl DeductionCombo {
    /// Unordered pair match.
    #[must_use]
    pub fn links(&self, a: &str, b: &str) -> bool {
        (self.evidence[0] == a && self.evidence[1] == b)
            || (self.evidence[0] == b && self.evidence[1] == a)
    }
}

/// Sentinel: a `min_evidence` above this value marks the case as
/// intentionally unprovable (an undecidable proposition).
pub const UNDECIDABLE_THRESHOLD: usize = 10;

#[derive(Debug, Clone)]
pub struct Case {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// The objective truth of the case, revealed when solved.
    pub truth: &'static str,
    /// Commentary on why the truth can (or cannot) be proved.
    pub provability: &'static str,
    pub evidence: Vec<Evidence>,
    pub combinations: Vec<DeductionCombo>,
    pub required_evidence: Vec<&'static str>,
    pub min_evidence: usize,
}

impl Case {
    /// Whether the case models an undecidable proposition: no amount of
    /// collected evidence can ever satisfy the solvability predicate.
    #[must_use]
    pub fn is_undecidable(&self) -> bool {
        self.min_evidence > UNDECIDABLE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo() -> DeductionCombo {
        DeductionCombo {
            id: "combo-1",
            evidence: ["ev-1", "ev-2"],
            title: "t",
            detail: "d",
            correct: true,
        }
    }

    #[test]
    fn combo_links_either_orientation() {
        let c = combo();
        assert!(c.links("ev-1", "ev-2"));
        assert!(c.links("ev-2", "ev-1"));
        assert!(!c.links("ev-1", "ev-3"));
    }

    #[test]
    fn undecidable_sentinel() {
        let mut case = Case {
            id: "case-x",
            title: "",
            description: "",
            truth: "",
            provability: "",
            evidence: Vec::new(),
            combinations: Vec::new(),
            required_evidence: Vec::new(),
            min_evidence: 2,
        };
        assert!(!case.is_undecidable());
        case.min_evidence = 99;
        assert!(case.is_undecidable());
    }
}
