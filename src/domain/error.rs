// ============================================================
// Layer 3 — Pipeline Error Kinds
// ============================================================
// The typed failures the pipeline can surface. Every one of
// them is fatal to the run: there is no degraded mode and no
// retry — the first violation aborts, and nothing is written
// to disk after a validation failure.
//
// thiserror derives std::error::Error for us, so these slot
// straight into the anyhow::Result chains the outer layers
// use (`?` converts automatically).
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// Everything that can go wrong between loading a manuscript
/// and accepting a narrative.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The source file is not a format the loader understands.
    /// Raised by the data layer, never by the core pipeline.
    #[error("unsupported source format '{extension}' — only .docx is supported")]
    UnsupportedFormat {
        /// The extension that was actually seen (may be empty)
        extension: String,
    },

    /// The narrative has the wrong number of paragraphs
    #[error("narrative has {actual} paragraphs but the template requires {expected}")]
    StructuralMismatch {
        /// Paragraph count the template demands
        expected: usize,
        /// Paragraph count the narrative actually has
        actual: usize,
    },

    /// The fixed snapshot opener is missing from the narrative
    #[error("narrative is missing the required section starter '{marker}'")]
    MissingRequiredMarker {
        /// The literal prefix string that was not found
        marker: String,
    },

    /// Terms were enumerated after a colon instead of narrated
    #[error("keyword-dump detected: terms are listed after a colon instead of woven into sentences")]
    ListDumpDetected,

    /// Too few of the required terms appear verbatim in the text
    #[error("insufficient term coverage: {found} of the required {needed} terms appear in the narrative")]
    InsufficientTermCoverage {
        /// How many terms the rule requires
        needed: usize,
        /// How many actually appeared
        found: usize,
    },
}
