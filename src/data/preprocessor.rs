// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw paragraph text extracted from .docx files before
// classification and term extraction.
//
// Why do we need to clean text?
//   .docx files often contain:
//   - Non-breaking spaces (U+00A0) from Word formatting
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Carriage returns (\r) from Windows line endings
//   - Tab characters from table formatting
//   - Multiple consecutive spaces from indentation
//   - Control characters from special Word features
//
// If we don't clean these, the classifier sees phantom symbol
// characters and the extractor wastes candidates on tokens
// glued together by invisible whitespace.
//
// Cleaning steps (applied per paragraph, in order):
//   1. Replace Unicode whitespace variants with plain space
//   2. Remove invisible control characters
//   3. Collapse multiple spaces into one
//   4. Trim leading/trailing whitespace
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean one raw paragraph for downstream classification.
    /// Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Normalise individual characters ──────────────────────────
        // Map problematic Unicode characters to their ASCII equivalents.
        let normalised: String = text
            .chars()
            .map(|c| match c {
                // Tab → space
                '\t' => ' ',
                // Non-breaking space → regular space
                '\u{00A0}' => ' ',
                // Zero-width space → regular space
                '\u{200B}' => ' ',
                // Byte order mark → space
                '\u{FEFF}' => ' ',
                // Carriage return / newline inside a paragraph → space
                '\r' | '\n' => ' ',
                // Any other control character → space
                c if c.is_control() => ' ',
                // All other characters pass through unchanged
                c => c,
            })
            .collect();

        // ── Step 2: Collapse runs of spaces and trim ─────────────────────────
        let mut out        = String::with_capacity(normalised.len());
        let mut last_space = false;

        for c in normalised.chars() {
            if c == ' ' {
                // Only add a space if the last char wasn't a space
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        out.trim().to_string()
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// These tests run with `cargo test` and verify the cleaning logic.
// Reference: Rust Book §11 (Writing Automated Tests)
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello   world"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  hello world  "), "hello world");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        // \x01 is a control character that should become a space
        assert_eq!(p.clean("hello\x01world"), "hello world");
    }

    #[test]
    fn test_unicode_whitespace_variants() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("字\u{00A0}與\u{200B}字"), "字 與 字");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(" \t \u{00A0} "), "");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
