// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (generating a story or re-checking one).
//
// Rules for this layer:
//   - No heuristics or text analysis here (that's Layer 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct file-format handling (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The generate workflow: manuscript → validated narrative → .docx
pub mod generate_use_case;

// The check workflow: re-validate an externally edited narrative
pub mod check_use_case;
