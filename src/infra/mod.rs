// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the cross-cutting concerns that don't belong in any
// specific business layer:
//
//   template_store.rs — Template file loading
//                       Reads the declarative task template
//                       from YAML (the native format) or JSON
//                       and deserialises it into the domain
//                       Template type.
//
//   naming.rs         — Output filename rendering
//                       Substitutes {book}, {author} and
//                       {date} into the template's
//                       filename_pattern, with today's date
//                       formatted as YYYYMMDD.
//
// Why is this a separate layer?
//   These concerns are used by both use cases but don't belong
//   to either of them. Keeping them here:
//   - Prevents duplication across use cases
//   - Makes it easy to swap implementations
//     (e.g. templates served over HTTP instead of files)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Template file loading (YAML / JSON)
pub mod template_store;

/// Output filename pattern rendering
pub mod naming;
