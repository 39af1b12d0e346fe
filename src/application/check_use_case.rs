// ============================================================
// Layer 2 — CheckUseCase
// ============================================================
// Re-validates an externally edited narrative against the same
// template and the same extracted candidates a generation run
// would use. The validator is a pure function of its three
// inputs, so it works just as well on a narrative a human has
// rewritten by hand as on one the composer produced.
//
// The edited narrative is a plain-text file with paragraphs
// separated by blank lines — the natural format to hand-edit.
//
//   Step 1: Load the template          (Layer 6 - infra)
//   Step 2: Load the .docx manuscript  (Layer 4 - data)
//   Step 3: Re-extract candidates      (Layer 5 - story)
//   Step 4: Read the edited narrative  (plain text)
//   Step 5: Validate                   (Layer 5 - story)
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::fs;

use crate::data::loader::DocxLoader;
use crate::domain::narrative::Narrative;
use crate::domain::traits::{DocumentSource, TermExtractor};
use crate::infra::template_store::TemplateStore;
use crate::story::{
    extractor::HeuristicExtractor,
    notes::{observe, DEFAULT_TOP_K},
    validator::validate,
};

// ─── Check Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub template_path:  String,
    pub source_path:    String,
    pub narrative_path: String,
}

// ─── CheckUseCase ─────────────────────────────────────────────────────────────
pub struct CheckUseCase {
    config:    CheckConfig,
    extractor: Box<dyn TermExtractor>,
}

impl CheckUseCase {
    /// Create a check run with the default extraction strategy
    pub fn new(config: CheckConfig) -> Self {
        Self {
            config,
            extractor: Box::new(HeuristicExtractor::new()),
        }
    }

    /// Re-run validation. Ok(()) means the edited narrative still
    /// satisfies every template constraint.
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load the template ─────────────────────────────────────────
        let template = TemplateStore::new(&cfg.template_path).load()?;

        // ── Step 2 + 3: Load the source and re-extract candidates ─────────────
        // The coverage rule is measured against the SAME ranking a
        // generation run would produce for this manuscript.
        let doc   = DocxLoader::new(&cfg.source_path).load()?;
        let notes = observe(&doc, self.extractor.as_ref(), DEFAULT_TOP_K);

        // ── Step 4: Read the edited narrative ─────────────────────────────────
        let narrative = read_narrative(&cfg.narrative_path)?;
        tracing::info!(
            "Checking {} paragraphs from '{}'",
            narrative.len(),
            cfg.narrative_path
        );

        // ── Step 5: Validate — first violation aborts ─────────────────────────
        validate(&template, &notes.candidates, &narrative)?;
        Ok(())
    }
}

/// Read a hand-edited narrative from a plain-text file.
/// Paragraphs are separated by one or more blank lines; line
/// breaks inside a paragraph are joined back into one string.
fn read_narrative(path: &str) -> Result<Narrative> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read narrative '{path}'"))?;

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(""));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(""));
    }

    Ok(Narrative::new(paragraphs))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_separate_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.txt");
        fs::write(&path, "第一段第一行\n第一段第二行\n\n第二段\n\n\n第三段\n").unwrap();

        let n = read_narrative(path.to_str().unwrap()).unwrap();
        assert_eq!(n.len(), 3);
        assert_eq!(n.paragraphs[0], "第一段第一行第一段第二行");
        assert_eq!(n.paragraphs[1], "第二段");
    }

    #[test]
    fn test_empty_file_gives_empty_narrative() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let n = read_narrative(path.to_str().unwrap()).unwrap();
        assert!(n.is_empty());
    }
}
