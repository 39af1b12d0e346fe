// ============================================================
// Layer 5 — Term Extractor
// ============================================================
// Scans prose text and proposes ranked technical-term
// candidates. The heuristic favours the shapes real product
// and framework names take:
//
//   - acronyms:    LLM, RAG, API        (all caps, 2–8 chars)
//   - TitleCase:   LangGraph, NotebookLM
//   - separators:  tree-sitter, v0.1, snake_case
//
// and rejects everything generic: stop-words, programming
// tokens, and words shorter than 3 characters.
//
// Ranking is by descending frequency with ties broken by
// first-occurrence order. The sort is stable ON PURPOSE —
// re-running on identical input must reproduce the identical
// candidate sequence, because the validator's coverage check
// and the tests depend on it.
//
// Reference: Rust Book §8 (HashMaps)
//            regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::domain::term::TermCandidate;
use crate::domain::traits::TermExtractor;

/// English function words that carry no technical meaning.
const STOP_WORDS: [&str; 34] = [
    "the", "and", "with", "from", "into", "that", "this", "your", "you", "are",
    "for", "to", "in", "of", "on", "as", "is", "be", "by", "an", "or", "at",
    "it", "we", "our", "can", "will", "not", "use", "using", "a", "i", "ok",
    "app",
];

/// Programming tokens and generic words that must never surface
/// as "technical terms" in the story, even when TitleCased at a
/// sentence start (e.g. "Deploy via …").
const BLACKLIST: [&str; 20] = [
    "const", "let", "var", "if", "else", "for", "while", "return", "true",
    "false", "none", "null", "amount", "category", "title", "data", "test",
    "example", "deploy", "install",
];

/// Maximal runs of letter-then-word characters, allowing the
/// separators that appear inside framework and version names.
static RAW_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9_\-.]*").unwrap());

/// The default extraction strategy: shape signals + frequency.
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    /// Create a new extractor (stateless)
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TermExtractor for HeuristicExtractor {
    fn extract(&self, text: &str, top_k: usize) -> Vec<TermCandidate> {
        // Count each qualifying surface form, remembering the order
        // in which it was FIRST seen. The Vec holds the candidates
        // in first-occurrence order; the map points back into it.
        let mut by_order: Vec<TermCandidate> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for m in RAW_TOKEN.find_iter(text) {
            // Trailing separators are sentence punctuation, not part
            // of the term: "Action." → "Action", "etc." → "etc"
            let token = m.as_str().trim_end_matches(&['-', '.', '_'][..]);

            if !qualifies(token) {
                continue;
            }

            match index.get(token) {
                Some(&i) => by_order[i].count += 1,
                None => {
                    index.insert(token.to_string(), by_order.len());
                    by_order.push(TermCandidate::new(token, 1));
                }
            }
        }

        // Stable sort: equal counts keep their first-occurrence order
        by_order.sort_by(|a, b| b.count.cmp(&a.count));
        by_order.truncate(top_k);
        by_order
    }
}

/// A token qualifies when it survives the filters AND shows at
/// least one technical-name shape signal.
fn qualifies(token: &str) -> bool {
    if token.chars().count() < 3 {
        return false;
    }

    let lower = token.to_lowercase();
    if STOP_WORDS.contains(&lower.as_str()) || BLACKLIST.contains(&lower.as_str()) {
        return false;
    }

    is_acronym(token) || is_title_case(token) || has_separator(token)
}

/// All-caps 2–8 character run, e.g. API, RAG, HTTP2
fn is_acronym(token: &str) -> bool {
    let len = token.chars().count();
    (2..=8).contains(&len)
        && token.chars().any(|c| c.is_ascii_uppercase())
        && !token.chars().any(|c| c.is_ascii_lowercase())
}

/// Uppercase first character with at least one later lowercase,
/// e.g. Cursor, LangGraph
fn is_title_case(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.is_ascii_uppercase() && chars.any(|c| c.is_ascii_lowercase()),
        None => false,
    }
}

/// Contains an internal separator, e.g. tree-sitter, v0.1
fn has_separator(token: &str) -> bool {
    token.contains('-') || token.contains('.') || token.contains('_')
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str, top_k: usize) -> Vec<String> {
        HeuristicExtractor::new()
            .extract(text, top_k)
            .into_iter()
            .map(|c| c.token)
            .collect()
    }

    #[test]
    fn test_scenario_extraction() {
        // Lowercase words, stop-words and the blacklisted "Deploy"
        // are all rejected; the four product names survive in
        // first-occurrence order.
        let text = "Cursor helps you write. GitHub Pages hosts it. Deploy via Action.";
        assert_eq!(tokens(text, 12), vec!["Cursor", "GitHub", "Pages", "Action"]);
    }

    #[test]
    fn test_frequency_outranks_position() {
        let text = "Alpha tool. Bravo tool. Bravo again with Bravo.";
        assert_eq!(tokens(text, 12), vec!["Bravo", "Alpha"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let text = "Zephyr before Amber. Amber after Zephyr.";
        // Both appear twice — Zephyr was seen first
        assert_eq!(tokens(text, 12), vec!["Zephyr", "Amber"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "LangGraph 搭配 NotebookLM 與 RAG 流程，再用 LangGraph 收尾。";
        let a = tokens(text, 12);
        let b = tokens(text, 12);
        assert_eq!(a, b);
        assert_eq!(a[0], "LangGraph");
    }

    #[test]
    fn test_top_k_truncates() {
        let text = "Alpha Bravo Charlie Delta Echo";
        assert_eq!(tokens(text, 3).len(), 3);
    }

    #[test]
    fn test_may_return_fewer_than_top_k() {
        assert!(tokens("nothing technical here at all", 12).is_empty());
    }

    #[test]
    fn test_shape_signals() {
        assert!(is_acronym("RAG"));
        assert!(!is_acronym("Rag"));
        assert!(!is_acronym("VERYLONGNAME"));
        assert!(is_title_case("LangGraph"));
        assert!(!is_title_case("lowercase"));
        assert!(has_separator("tree-sitter"));
        assert!(has_separator("v0.1"));
    }

    #[test]
    fn test_trailing_punctuation_is_stripped() {
        // "Action." must come back as "Action", and a plain word
        // followed by a period must NOT sneak in via the separator
        // signal.
        let got = tokens("write. Action.", 12);
        assert_eq!(got, vec!["Action"]);
    }

    #[test]
    fn test_case_sensitive_dedup() {
        // Different surface forms are different candidates
        let got = tokens("API 與 Api 是兩種寫法，API 比較常見。", 12);
        assert_eq!(got, vec!["API", "Api"]);
    }
}
