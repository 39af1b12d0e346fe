// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles the file-format plumbing on both ends of
// the story pipeline:
//
//   manuscript.docx
//       │
//       ▼
//   DocxLoader     → reads the file, extracts raw paragraphs
//       │
//       ▼
//   Preprocessor   → cleans text (whitespace, encoding noise)
//       │
//       ▼
//   (Layer 5: classifier → extractor → selector → composer
//             → validator)
//       │
//       ▼
//   DocxWriter     → writes the validated narrative back out
//
// Each module is responsible for exactly one step.
// The story layer never touches a file — these modules are its
// only contact with the outside world.
//
// Reference: Rust Book §9 (Error Handling)
//            docx-rs crate documentation

/// Loads a single .docx manuscript using docx-rs
pub mod loader;

/// Cleans and normalises raw extracted paragraph text
pub mod preprocessor;

/// Writes the finished narrative as a .docx file
pub mod writer;
