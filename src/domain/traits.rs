// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer can swap implementations without
// changing the orchestration code. For example:
//   - DocxLoader implements DocumentSource
//   - A future MarkdownLoader could also implement it
//   - The use cases only see DocumentSource and work with
//     either one unchanged
//
// TermExtractor is the seam the original grew three separate
// script variants around — here it is one capability with one
// default implementation, and a sharper strategy can be
// plugged in later without touching the pipeline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use std::path::Path;

use crate::domain::document::Document;
use crate::domain::narrative::Narrative;
use crate::domain::term::TermCandidate;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load a manuscript.
///
/// Implementations:
///   - DocxLoader → loads a single .docx file
///   - (future) MarkdownLoader → loads from .md files
pub trait DocumentSource {
    /// Load the manuscript this source points at.
    fn load(&self) -> Result<Document>;
}

// ─── TermExtractor ────────────────────────────────────────────────────────────
/// Any strategy that can propose ranked technical-term candidates
/// from a body of prose.
///
/// Implementations:
///   - HeuristicExtractor → shape signals + frequency ranking
pub trait TermExtractor {
    /// Scan `text` and return at most `top_k` unique candidates,
    /// ranked by descending frequency then first occurrence.
    /// May return fewer than `top_k` — callers must not assume
    /// a fixed length.
    fn extract(&self, text: &str, top_k: usize) -> Vec<TermCandidate>;
}

// ─── NarrativeWriter ──────────────────────────────────────────────────────────
/// Any component that can persist a finished narrative.
///
/// Implementations:
///   - DocxWriter → writes a .docx with a heading
pub trait NarrativeWriter {
    /// Write the narrative under the given title to `path`.
    fn write(&self, title: &str, narrative: &Narrative, path: &Path) -> Result<()>;
}
