// ============================================================
// Layer 5 — Source Notes
// ============================================================
// The run-scoped observation record: which paragraphs were
// prose, what terms were found, and a short preview of the
// opening prose. Use cases log these numbers and feed the
// candidates to the selector and the validator.
//
// Notes are plain data passed by value. They are NOT written
// onto the template or kept anywhere between runs — the whole
// pipeline is a pure pass over one document.
//
// Reference: Rust Book §5 (Structs)

use crate::domain::document::Document;
use crate::domain::term::TermCandidate;
use crate::domain::traits::TermExtractor;
use crate::story::classifier::{classify, UnitKind};

/// How many candidates the extractor is asked for per run.
pub const DEFAULT_TOP_K: usize = 12;

/// How many opening prose paragraphs go into the preview.
const PREVIEW_PARAGRAPHS: usize = 8;

/// What one pass over the source document observed.
#[derive(Debug, Clone)]
pub struct SourceNotes {
    /// Ranked technical-term candidates from the prose
    pub candidates: Vec<TermCandidate>,

    /// A few opening prose paragraphs, for log output
    pub preview: String,

    /// How many paragraphs classified as prose
    pub prose_count: usize,

    /// Total paragraphs in the document
    pub total_count: usize,
}

/// Classify every paragraph, pool the prose, and extract ranked
/// term candidates from it.
pub fn observe(doc: &Document, extractor: &dyn TermExtractor, top_k: usize) -> SourceNotes {
    let prose: Vec<&str> = doc
        .paragraphs
        .iter()
        .filter(|p| classify(p) == UnitKind::Prose)
        .map(String::as_str)
        .collect();

    let prose_text = prose.join("\n");
    let candidates = extractor.extract(&prose_text, top_k);

    let preview = prose
        .iter()
        .take(PREVIEW_PARAGRAPHS)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    SourceNotes {
        candidates,
        preview,
        prose_count: prose.len(),
        total_count: doc.len(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::extractor::HeuristicExtractor;

    #[test]
    fn test_code_paragraphs_do_not_feed_extraction() {
        let doc = Document::new(
            "book.docx",
            vec![
                "這本書用 LangGraph 來編排整個流程。".to_string(),
                "const LangChain = require('langchain');".to_string(),
                "後面接著用 NotebookLM 做整理。".to_string(),
            ],
        );
        let notes = observe(&doc, &HeuristicExtractor::new(), DEFAULT_TOP_K);

        assert_eq!(notes.total_count, 3);
        assert_eq!(notes.prose_count, 2);

        let tokens: Vec<&str> = notes.candidates.iter().map(|c| c.token.as_str()).collect();
        assert!(tokens.contains(&"LangGraph"));
        assert!(tokens.contains(&"NotebookLM"));
        // LangChain only ever appears inside a code paragraph
        assert!(!tokens.contains(&"LangChain"));
    }

    #[test]
    fn test_preview_holds_opening_prose() {
        let doc = Document::new(
            "book.docx",
            vec!["第一段。".to_string(), "第二段。".to_string()],
        );
        let notes = observe(&doc, &HeuristicExtractor::new(), DEFAULT_TOP_K);
        assert_eq!(notes.preview, "第一段。\n第二段。");
    }
}
