//! Static scenario content.
//!
//! All gameplay data is fixed at build time: two factory levels and
//! three detective cases. The encoder's symbol table lives next to the
//! encoder itself.

use godel_types::{
    Case, DeductionCombo, Evidence, EvidenceKind, FactoryLevel, InferenceRule, LogicSymbol,
    RuleKind, ScenePosition, Tint,
};

fn rule_identity() -> InferenceRule {
    InferenceRule {
        id: "rule-identity",
        name: "Identity",
        description: "The machine outputs exactly what goes in.",
        kind: RuleKind::Identity,
    }
}

fn rule_modus_ponens() -> InferenceRule {
    InferenceRule {
        id: "rule-mp",
        name: "Modus Ponens",
        description: "Given P and P→Q, you obtain Q.",
        kind: RuleKind::ModusPonens,
    }
}

/// The ordered level sequence for the Truth Factory.
#[must_use]
pub fn factory_levels() -> Vec<FactoryLevel> {
    vec![
        FactoryLevel {
            id: "factory-1",
            name: "Level 1: Identity",
            description: "Feed Axiom A to the Identity machine.",
            axioms: vec![LogicSymbol::axiom("axiom-a", "A", Tint::Green)],
            rules: vec![rule_identity()],
            goal: "A",
            tutorial: "Feed \"A\" into the machine to produce Theorem A.",
        },
        FactoryLevel {
            id: "factory-2",
            name: "Level 2: Modus Ponens",
            description: "You have \"P\" and \"if P then Q\". Produce Q!",
            axioms: vec![
                LogicSymbol::axiom("axiom-p", "P", Tint::Purple),
                LogicSymbol::axiom("axiom-p-q", "P→Q", Tint::Yellow),
            ],
            rules: vec![rule_modus_ponens()],
            goal: "Q",
            tutorial: "The Modus Ponens machine needs TWO pieces. Feed them one at a time.",
        },
    ]
}

/// The ordered case sequence for the Logical Detective.
#[must_use]
pub fn detective_cases() -> Vec<Case> {
    vec![case_broken_vase(), case_invisible_thief(), case_uv_light()]
}

fn case_broken_vase() -> Case {
    Case {
        id: "case-1",
        title: "The Case of the Broken Vase",
        description: "We know the cat broke the vase (the truth) - but can we prove it?",
        truth: "Mittens the cat broke the vase.",
        provability: "At first there is no direct proof, only suspicion. Connect the clues to assemble a solid proof.",
        evidence: vec![
            Evidence {
                id: "ev-1",
                name: "Cat Paw Prints",
                description: "Small paw prints near the shards.",
                kind: EvidenceKind::Physical,
                relevant: true,
                position: ScenePosition { x: 20, y: 80 },
            },
            Evidence {
                id: "ev-2",
                name: "Grandma's Testimony",
                description: "She says she heard a loud crash and a \"meow\".",
                kind: EvidenceKind::Testimony,
                relevant: true,
                position: ScenePosition { x: 50, y: 50 },
            },
            Evidence {
                id: "ev-3",
                name: "Dog Hair",
                description: "A dog hair - but the dog was outside all day.",
                kind: EvidenceKind::Physical,
                relevant: false,
                position: ScenePosition { x: 80, y: 70 },
            },
        ],
        combinations: vec![
            DeductionCombo {
                id: "combo-1",
                evidence: ["ev-1", "ev-2"],
                title: "Temporal Coincidence",
                detail: "The fresh prints match the moment the \"meow\" was heard. That places Mittens at the scene!",
                correct: true,
            },
            DeductionCombo {
                id: "combo-2",
                evidence: ["ev-1", "ev-3"],
                title: "Contradiction",
                detail: "Cat prints do not explain the dog hair. The hair was probably there already.",
                correct: false,
            },
        ],
        required_evidence: vec!["ev-1", "ev-2"],
        min_evidence: 2,
    }
}

fn case_invisible_thief() -> Case {
    Case {
        id: "case-2",
        title: "The Invisible Thief",
        description: "We know somebody stole the cake (the truth), but nobody left a trace.",
        truth: "The butler ate the cake.",
        provability: "It is TRUE, but with the current evidence (axioms) it is UNDECIDABLE: it can be neither proved nor refuted.",
        evidence: vec![
            Evidence {
                id: "ev-2-1",
                name: "Empty Plate",
                description: "A plate with crumbs, but no fingerprints.",
                kind: EvidenceKind::Physical,
                relevant: true,
                position: ScenePosition { x: 30, y: 40 },
            },
            Evidence {
                id: "ev-2-2",
                name: "Open Window",
                description: "Someone could have come in... or it was the wind.",
                kind: EvidenceKind::Physical,
                relevant: false,
                position: ScenePosition { x: 70, y: 60 },
            },
            Evidence {
                id: "ev-2-3",
                name: "Silk Gloves",
                description: "A pair of clean gloves in the butler's pocket.",
                kind: EvidenceKind::Physical,
                relevant: true,
                position: ScenePosition { x: 10, y: 20 },
            },
        ],
        combinations: vec![DeductionCombo {
            id: "combo-2-1",
            evidence: ["ev-2-1", "ev-2-3"],
            title: "The Glove Hypothesis",
            detail: "If he wore gloves, he would leave no prints. Plausible - but how do we prove he USED them for the theft?",
            // Plausible, not provable: this combo never closes the case.
            correct: false,
        }],
        required_evidence: vec![],
        min_evidence: 99,
    }
}

fn case_uv_light() -> Case {
    Case {
        id: "case-3",
        title: "The Invisible Thief (With New Axioms)",
        description: "A new tool has arrived: UV LIGHT (a new axiom). Does it change what we can prove?",
        truth: "The butler ate the cake.",
        provability: "SOLVED! By adding a new axiom (UV light), what was invisible and undecidable became visible and provable.",
        evidence: vec![
            Evidence {
                id: "ev-3-1",
                name: "Empty Plate",
                description: "The same plate as before.",
                kind: EvidenceKind::Physical,
                relevant: true,
                position: ScenePosition { x: 30, y: 40 },
            },
            Evidence {
                id: "ev-3-2",
                name: "Fluorescent Prints",
                description: "The UV light reveals the butler's shoe prints on the window sill!",
                kind: EvidenceKind::Physical,
                relevant: true,
                position: ScenePosition { x: 70, y: 60 },
            },
            Evidence {
                id: "ev-3-3",
                name: "Icing Residue",
                description: "Glows under UV light on the butler's apron.",
                kind: EvidenceKind::Physical,
                relevant: true,
                position: ScenePosition { x: 50, y: 30 },
            },
        ],
        combinations: vec![DeductionCombo {
            id: "combo-3-1",
            evidence: ["ev-3-2", "ev-3-3"],
            title: "Forensic Connection",
            detail: "Prints on the sill and icing on the apron prove the butler was in both places.",
            correct: true,
        }],
        required_evidence: vec!["ev-3-1", "ev-3-2", "ev-3-3"],
        min_evidence: 3,
    }
}
