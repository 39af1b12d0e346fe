// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO docx / file I/O types allowed here
//   - NO regex or parsing machinery
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no fixtures on disk needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A manuscript loaded from disk, split into paragraphs
pub mod document;

// The declarative template that constrains the output narrative
pub mod template;

// The composed four-paragraph narrative
pub mod narrative;

// A candidate technical term with its observed frequency
pub mod term;

// The typed error kinds the pipeline can fail with
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
