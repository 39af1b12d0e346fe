// ============================================================
// Layer 5 — Paragraph Classifier
// ============================================================
// Labels a paragraph as "code-like" or "prose" using cheap
// lexical heuristics. Code-heavy paragraphs are excluded
// before term extraction so that tokens like `const` or `for`
// never surface as "technical terms" in the story.
//
// A paragraph counts as code if ANY of four independent
// signals fires:
//   1. short (≤ 25 chars) and contains a code symbol
//   2. high symbol-to-length ratio (≥ 0.08)
//   3. two or more distinct programming keywords
//   4. brace-wrapped like JSON, or contains a ``` fence
//
// Each signal is an independent boolean predicate on the raw
// text — no dynamic dispatch, no state, trivially unit-tested.
//
// Reference: Rust Book §8 (Strings in Rust)

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// The label the classifier assigns to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Ordinary narrative text — feeds the term extractor
    Prose,
    /// Code, config, or markup — excluded from extraction
    Code,
}

/// Punctuation characters that are common in code but rare in prose
const CODE_SYMBOLS: &str = "{}[]();=<>/*\\|`~$#@";

/// Reserved words across common languages. Two distinct hits in
/// one paragraph is a strong code signal.
const CODE_KEYWORDS: [&str; 23] = [
    "const", "let", "var", "function", "return", "if", "else", "for", "while",
    "class", "import", "export", "from", "try", "catch", "async", "await",
    "def", "print", "None", "True", "False", "fn",
];

/// Word tokens as they appear in source code: letter or underscore,
/// then word characters.
static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_]\w*").unwrap());

/// Classify one paragraph. Pure function of the text: calling it
/// twice on the same input always gives the same answer.
pub fn classify(unit: &str) -> UnitKind {
    if looks_like_code(unit) {
        UnitKind::Code
    } else {
        UnitKind::Prose
    }
}

/// The underlying predicate. Empty/whitespace-only paragraphs are
/// never code — the loader drops them before this runs anyway.
pub fn looks_like_code(unit: &str) -> bool {
    let s = unit.trim();
    if s.is_empty() {
        return false;
    }

    is_short_symbolic(s) || has_high_symbol_ratio(s) || has_keyword_cluster(s) || is_code_block(s)
}

/// Signal 1: a short fragment with any code symbol in it,
/// e.g. `x = 1;` or `});`
fn is_short_symbolic(s: &str) -> bool {
    s.chars().count() <= 25 && s.chars().any(|c| CODE_SYMBOLS.contains(c))
}

/// Signal 2: symbol density. Prose rarely exceeds a few percent;
/// real code is full of braces, semicolons and operators.
fn has_high_symbol_ratio(s: &str) -> bool {
    let len = s.chars().count();
    let symbols = s.chars().filter(|c| CODE_SYMBOLS.contains(*c)).count();
    symbols as f64 / len.max(1) as f64 >= 0.08
}

/// Signal 3: at least two DISTINCT reserved words. Distinct matters:
/// prose quoting a single keyword twice should not flip to code.
fn has_keyword_cluster(s: &str) -> bool {
    let hits: HashSet<&str> = WORD_TOKEN
        .find_iter(s)
        .map(|m| m.as_str())
        .filter(|t| CODE_KEYWORDS.contains(t))
        .collect();
    hits.len() >= 2
}

/// Signal 4: the whole paragraph is a brace-wrapped literal
/// (JSON / dict dump) or carries a fenced-code delimiter.
fn is_code_block(s: &str) -> bool {
    (s.starts_with('{') && s.ends_with('}')) || s.contains("```")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_stays_prose() {
        let p = "這本書教你如何把一個想法變成可以交付的成果，步驟清楚而且可以驗證。";
        assert_eq!(classify(p), UnitKind::Prose);
        let e = "Cursor helps you write and GitHub Pages hosts the result so everyone can read it.";
        assert_eq!(classify(e), UnitKind::Prose);
    }

    #[test]
    fn test_short_symbolic_fragment_is_code() {
        assert_eq!(classify("x = 1;"), UnitKind::Code);
        assert_eq!(classify("});"), UnitKind::Code);
    }

    #[test]
    fn test_symbol_ratio_flags_code() {
        // Long enough to escape the short-fragment rule, but dense in symbols
        let line = "const total = items.map((i) => i.price).reduce((a, b) => a + b, 0);";
        assert_eq!(classify(line), UnitKind::Code);
    }

    #[test]
    fn test_keyword_cluster_needs_two_distinct() {
        // Two distinct keywords → code
        assert!(looks_like_code("if the loop breaks then return the accumulated value for review"));
        // One keyword repeated is still prose
        assert!(!looks_like_code(
            "the word return here and the word return there are just ordinary words in prose"
        ));
    }

    #[test]
    fn test_brace_wrapped_and_fenced_blocks() {
        assert!(looks_like_code("{\"amount\": 120, \"category\": \"food\"}"));
        assert!(looks_like_code("以下是範例 ``` 程式碼區塊 ``` 結束"));
    }

    #[test]
    fn test_empty_is_not_code() {
        assert!(!looks_like_code(""));
        assert!(!looks_like_code("   \t  "));
    }

    #[test]
    fn test_classify_is_stable() {
        let u = "let mut total = 0;";
        assert_eq!(classify(u), classify(u));
    }
}
