// ============================================================
// Layer 5 — Story Pipeline
// ============================================================
// The only layer with nontrivial decision logic. Everything
// here is a pure function over immutable inputs — no I/O,
// no shared state, no randomness. Determinism is a design
// requirement: the validator and the tests both assume that
// identical input reproduces identical output.
//
// The pipeline flows in this order:
//
//   paragraphs
//       │
//       ▼
//   classifier   → labels each paragraph prose / code
//       │
//       ▼
//   extractor    → ranked technical-term candidates from prose
//       │
//       ▼
//   selector     → applies the template's {min, max} term policy
//       │
//       ▼
//   composer     → four fixed-shape paragraphs with terms woven in
//       │
//       ▼
//   validator    → hard checks against the template, or abort
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Labels a paragraph as prose or code-like
pub mod classifier;

/// Proposes and ranks technical-term candidates
pub mod extractor;

/// Picks the bounded subset of terms the composer will use
pub mod selector;

/// Emits the four-paragraph narrative
pub mod composer;

/// Checks the narrative against the template's hard rules
pub mod validator;

/// Run-scoped observations about the source (counts, preview)
pub mod notes;
