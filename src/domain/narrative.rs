// ============================================================
// Layer 3 — Narrative Domain Type
// ============================================================
// The finished story: an ordered sequence of paragraphs.
// Created by the composer, checked by the validator, then
// handed to the writer. No partially built narrative ever
// escapes the pipeline — either a full Narrative exists or
// the run has already failed.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// An ordered sequence of narrative paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// The paragraph texts, in reading order
    pub paragraphs: Vec<String>,
}

impl Narrative {
    /// Wrap a list of paragraph strings into a Narrative
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }

    /// Number of paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// True when the narrative has no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// All paragraphs joined with newlines.
    /// The validator runs its substring and pattern checks on
    /// this joined view rather than paragraph by paragraph.
    pub fn joined(&self) -> String {
        self.paragraphs.join("\n")
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_uses_newlines() {
        let n = Narrative::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(n.joined(), "a\nb");
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn test_empty_narrative() {
        let n = Narrative::new(Vec::new());
        assert!(n.is_empty());
        assert_eq!(n.joined(), "");
    }
}
