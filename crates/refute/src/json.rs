//! JSON serialization types for sessions and proofs

use crate::inference::ProofLine;
use crate::logic::{Clause, Interner, Literal};
use crate::saturation::{Outcome, SaturationProfile, SaturationState};
use serde::{Deserialize, Serialize};

/// JSON representation of a literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralJson {
    pub atom: String,
    pub polarity: bool,
}

impl LiteralJson {
    pub fn from_literal(lit: &Literal, interner: &Interner) -> Self {
        LiteralJson {
            atom: interner.resolve_atom(lit.atom).to_string(),
            polarity: lit.polarity,
        }
    }
}

/// JSON representation of a clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseJson {
    pub literals: Vec<LiteralJson>,
}

impl ClauseJson {
    pub fn from_clause(clause: &Clause, interner: &Interner) -> Self {
        ClauseJson {
            literals: clause
                .iter()
                .map(|l| LiteralJson::from_literal(l, interner))
                .collect(),
        }
    }
}

/// JSON representation of a numbered transcript line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofLineJson {
    pub number: usize,
    pub clause: ClauseJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<[usize; 2]>,
}

impl ProofLineJson {
    pub fn from_line(line: &ProofLine, interner: &Interner) -> Self {
        ProofLineJson {
            number: line.number,
            clause: ClauseJson::from_clause(&line.clause, interner),
            parents: line.parents,
        }
    }
}

/// JSON representation of a session outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum OutcomeJson {
    Valid { transcript: Vec<ProofLineJson> },
    Invalid,
    ResourceLimit,
}

impl OutcomeJson {
    pub fn from_outcome(outcome: &Outcome, interner: &Interner) -> Self {
        match outcome {
            Outcome::Valid(proof) => OutcomeJson::Valid {
                transcript: proof
                    .lines
                    .iter()
                    .map(|line| ProofLineJson::from_line(line, interner))
                    .collect(),
            },
            Outcome::Invalid => OutcomeJson::Invalid,
            Outcome::ResourceLimit => OutcomeJson::ResourceLimit,
        }
    }
}

/// JSON representation of a whole session: numbered premises and outcome
#[derive(Debug, Clone, Serialize)]
pub struct SessionJson {
    pub premises: Vec<ProofLineJson>,
    pub outcome: OutcomeJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<SaturationProfile>,
}

impl SessionJson {
    pub fn from_session(state: &SaturationState, outcome: &Outcome) -> Self {
        let interner = state.interner();
        SessionJson {
            premises: state
                .premises()
                .iter()
                .map(|line| ProofLineJson::from_line(line, interner))
                .collect(),
            outcome: OutcomeJson::from_outcome(outcome, interner),
            profile: state.profile().cloned(),
        }
    }
}
