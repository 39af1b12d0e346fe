// ============================================================
// Layer 5 — Term Selector
// ============================================================
// Applies the template's {min_terms, max_terms} policy to the
// ranked candidate list: take the first max_terms candidates
// in rank order, and if that leaves fewer than min_terms,
// top up with a fixed sequence of placeholder labels.
//
// The placeholders are CJK phrases, so they can never collide
// with a real extracted token (extraction only ever produces
// ASCII-lettered tokens). The composer gets enough material
// even for a degenerate or completely non-technical source,
// without fabricating anything that could be mistaken for a
// real term.
//
// Reference: Rust Book §8 (Vectors)

use crate::domain::term::TermCandidate;

/// Placeholder role labels, in the order they are appended.
const FALLBACK_TERMS: [&str; 3] = ["核心技術", "主要工具", "產出方式"];

/// Padding label once the named fallbacks are exhausted.
const PADDING_TERM: &str = "關鍵概念";

/// Select the terms the composer will weave into the story.
///
/// Returns the first `max_terms` candidate tokens in rank order,
/// padded with deterministic placeholders until the result holds
/// at least `min_terms` entries. Callers pass `min_terms <=
/// max_terms`; the guarantee is `result.len() >= min_terms`.
pub fn select(candidates: &[TermCandidate], min_terms: usize, max_terms: usize) -> Vec<String> {
    let mut picked: Vec<String> = candidates
        .iter()
        .take(max_terms)
        .map(|c| c.token.clone())
        .collect();

    if picked.len() < min_terms {
        // Top up with the named fallbacks first, re-truncating so a
        // small max_terms still bounds the named portion …
        picked.extend(FALLBACK_TERMS.iter().map(|s| s.to_string()));
        picked.truncate(max_terms);

        // … then pad until the minimum is met no matter what.
        while picked.len() < min_terms {
            picked.push(PADDING_TERM.to_string());
        }
    }

    picked
}
