// ============================================================
// Layer 5 — Template Validator
// ============================================================
// Checks a finished narrative against the template's hard
// rules. The first violation aborts the run — there is no
// partial success and nothing gets persisted afterwards.
//
// Checks, in order:
//   1. paragraph count matches the template
//   2. the snapshot starter appears verbatim
//   3. no keyword dump: a colon followed (within 50 chars,
//      before the next sentence boundary) by two or more
//      list separators means terms were enumerated, not
//      narrated
//   4. enough of the ranked candidate terms appear verbatim;
//      a fixed required_terms list, when present, must appear
//      in full
//
// This is a pure function of (template, candidates, narrative).
// The candidates arrive as an explicit argument — never stashed
// on the template — so the validator can be re-run against a
// hand-edited narrative long after the original pipeline run.
//
// Reference: Rust Book §9 (Error Handling)
//            regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::StoryError;
use crate::domain::narrative::Narrative;
use crate::domain::template::Template;
use crate::domain::term::TermCandidate;

/// A colon (full- or half-width) and the stretch of text after it
/// up to the next sentence boundary, capped at 50 characters.
static COLON_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[：:][^。\n]{0,50}").unwrap());

/// Validate `narrative` against `template`, using `candidates` as
/// the ranked term list the coverage rule is measured against.
pub fn validate(
    template:   &Template,
    candidates: &[TermCandidate],
    narrative:  &Narrative,
) -> Result<(), StoryError> {
    let structure = &template.structure;

    // ── Check 1: paragraph count ─────────────────────────────────────────
    if narrative.len() != structure.paragraphs {
        return Err(StoryError::StructuralMismatch {
            expected: structure.paragraphs,
            actual:   narrative.len(),
        });
    }

    let joined = narrative.joined();

    // ── Check 2: snapshot starter present ────────────────────────────────
    let marker = &structure.required_section_starter.snapshot;
    if !joined.contains(marker.as_str()) {
        return Err(StoryError::MissingRequiredMarker {
            marker: marker.clone(),
        });
    }

    // ── Check 3: keyword-dump pattern ────────────────────────────────────
    if has_list_dump(&joined) {
        return Err(StoryError::ListDumpDetected);
    }

    // ── Check 4: term coverage ───────────────────────────────────────────
    // Measure against the first max_terms candidates, in the same
    // ranking the selector used. A degenerate source may yield fewer
    // candidates than min_terms; the requirement is capped at the
    // window size so a faithfully composed narrative always passes.
    let rule = &structure.required_terms_rule;
    let window: Vec<&str> = candidates
        .iter()
        .take(rule.max_terms)
        .map(|c| c.token.as_str())
        .collect();
    let needed = rule.min_terms.min(window.len());
    let found = window.iter().filter(|t| joined.contains(**t)).count();
    if found < needed {
        return Err(StoryError::InsufficientTermCoverage { needed, found });
    }

    // A fixed literal list is checked in full when declared.
    if let Some(required) = &structure.required_terms {
        let missing = required.iter().filter(|t| !joined.contains(t.as_str())).count();
        if missing > 0 {
            return Err(StoryError::InsufficientTermCoverage {
                needed: required.len(),
                found:  required.len() - missing,
            });
        }
    }

    Ok(())
}

/// True when any colon is followed by two or more list separators
/// (`、` or `,`) before the next sentence boundary. This is the
/// structural proxy for "the terms were merely enumerated".
fn has_list_dump(text: &str) -> bool {
    COLON_SPAN.find_iter(text).any(|m| {
        m.as_str().chars().filter(|c| *c == '、' || *c == ',').count() >= 2
    })
}
