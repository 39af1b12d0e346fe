// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single manuscript loaded from disk.
// This is a plain data struct with no behaviour —
// just a source name and the ordered paragraph texts.
//
// The paragraph is the unit the whole pipeline works on:
// the classifier labels paragraphs, the extractor scans the
// prose ones, and the composer produces new ones. By the time
// a Document exists, the text has already been pulled out of
// the .docx format and empty paragraphs have been dropped.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// A manuscript as an ordered sequence of non-empty paragraphs.
/// Immutable once loaded — the pipeline only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The filename or path — kept for traceability
    /// so log lines can say which file the terms came from
    pub source: String,

    /// The ordered paragraph texts, already trimmed,
    /// with empty/whitespace-only paragraphs excluded
    pub paragraphs: Vec<String>,
}

impl Document {
    /// Create a new Document from a source path and its paragraphs.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(source: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            source:     source.into(),
            paragraphs,
        }
    }

    /// Number of paragraphs in the manuscript
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// True when the manuscript holds no paragraphs at all
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
