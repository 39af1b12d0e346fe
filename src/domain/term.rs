// ============================================================
// Layer 3 — Term Candidate Domain Type
// ============================================================
// A technical term observed in the prose, together with how
// often it appeared. Candidates are deduplicated on exact
// surface form (case-sensitive: "API" and "api" are different
// observations) and ranked by descending count, with ties
// broken by first-occurrence order.
//
// That tie-break is a correctness requirement, not a nicety:
// the validator and the tests both depend on re-running the
// pipeline over identical input producing identical output.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// One candidate technical term with its observed frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCandidate {
    /// The surface form exactly as it appeared in the prose
    pub token: String,

    /// How many times the token was observed
    pub count: usize,
}

impl TermCandidate {
    /// Create a new candidate with an initial count
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}
