// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates the full story pipeline in order:
//
//   Step 1: Load the template          (Layer 6 - infra)
//   Step 2: Load the .docx manuscript  (Layer 4 - data)
//   Step 3: Classify + extract terms   (Layer 5 - story)
//   Step 4: Select terms per template  (Layer 5 - story)
//   Step 5: Compose the narrative      (Layer 5 - story)
//   Step 6: Validate against template  (Layer 5 - story)
//   Step 7: Write the .docx output     (Layer 4 - data)
//
// Validation failing at Step 6 aborts the run before anything
// touches the output directory — there is no partial output.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use std::path::PathBuf;

use crate::data::{loader::DocxLoader, writer::DocxWriter};
use crate::domain::traits::{DocumentSource, NarrativeWriter, TermExtractor};
use crate::infra::{
    naming::{render_filename, today_stamp, DEFAULT_PATTERN},
    template_store::TemplateStore,
};
use crate::story::{
    composer::compose,
    extractor::HeuristicExtractor,
    notes::{observe, DEFAULT_TOP_K},
    selector::select,
    validator::validate,
};

/// Title used when the template declares no name.
const DEFAULT_TITLE: &str = "任務一｜主題白話理解";

// ─── Generate Configuration ──────────────────────────────────────────────────
// Everything one generation run needs. Built from CLI args by
// Layer 1; the application layer never sees clap types.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub template_path: String,
    pub source_path:   String,
    pub author:        String,
    pub book:          String,
    pub outdir:        String,
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
// Owns the config and the extraction strategy, and runs the
// full pipeline end to end.
pub struct GenerateUseCase {
    config:    GenerateConfig,
    extractor: Box<dyn TermExtractor>,
}

impl GenerateUseCase {
    /// Create a use case with the default extraction strategy
    pub fn new(config: GenerateConfig) -> Self {
        Self::with_extractor(config, Box::new(HeuristicExtractor::new()))
    }

    /// Create a use case with a custom extraction strategy.
    /// This is the seam that replaced the original's three
    /// near-duplicate script variants.
    pub fn with_extractor(config: GenerateConfig, extractor: Box<dyn TermExtractor>) -> Self {
        Self { config, extractor }
    }

    /// Execute the full pipeline. Returns the path of the file
    /// that was written.
    pub fn execute(&self) -> Result<PathBuf> {
        let cfg = &self.config;

        // ── Step 1: Load the template ─────────────────────────────────────────
        let template = TemplateStore::new(&cfg.template_path).load()?;

        // ── Step 2: Load the .docx manuscript ─────────────────────────────────
        let loader = DocxLoader::new(&cfg.source_path);
        let doc    = loader.load()?;

        // ── Step 3: Classify paragraphs and extract term candidates ───────────
        // Code-like paragraphs are excluded before extraction so that
        // programming tokens never surface as story terms.
        let notes = observe(&doc, self.extractor.as_ref(), DEFAULT_TOP_K);
        tracing::info!(
            "Source paragraphs: {} total, {} prose",
            notes.total_count,
            notes.prose_count
        );
        tracing::info!(
            "Observed terms: [{}]",
            notes
                .candidates
                .iter()
                .map(|c| c.token.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        tracing::debug!("Prose preview:\n{}", notes.preview);

        // ── Step 4: Select terms under the template's {min, max} rule ─────────
        let rule   = &template.structure.required_terms_rule;
        let picked = select(&notes.candidates, rule.min_terms, rule.max_terms);

        // ── Step 5: Compose the four-paragraph narrative ──────────────────────
        let snapshot = &template.structure.required_section_starter.snapshot;
        let story    = compose(&picked, snapshot);

        // ── Step 6: Validate — any violation aborts before output ─────────────
        // Candidates are passed explicitly; the template stays read-only.
        validate(&template, &notes.candidates, &story)?;

        // ── Step 7: Render the filename and write the .docx ───────────────────
        let pattern = template
            .output
            .as_ref()
            .map(|o| o.filename_pattern.as_str())
            .unwrap_or(DEFAULT_PATTERN);
        let filename = render_filename(pattern, &cfg.book, &cfg.author, &today_stamp());
        let out_path = PathBuf::from(&cfg.outdir).join(filename);

        let title = template.name.as_deref().unwrap_or(DEFAULT_TITLE);
        DocxWriter::new().write(title, &story, &out_path)?;

        Ok(out_path)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::term::TermCandidate;

    // A strategy that proposes nothing, to exercise the fallback path
    struct EmptyExtractor;

    impl TermExtractor for EmptyExtractor {
        fn extract(&self, _text: &str, _top_k: usize) -> Vec<TermCandidate> {
            Vec::new()
        }
    }

    fn write_template(dir: &std::path::Path) -> String {
        let path = dir.join("task01.yaml");
        std::fs::write(
            &path,
            "name: 任務一\nstructure:\n  paragraphs: 4\n  required_section_starter:\n    snapshot: 一句話收斂\n",
        )
        .unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_unsupported_source_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(dir.path());
        let source = dir.path().join("book.txt");
        std::fs::write(&source, "純文字不是 docx").unwrap();
        let outdir = dir.path().join("outputs");

        let use_case = GenerateUseCase::new(GenerateConfig {
            template_path,
            source_path: source.to_string_lossy().into_owned(),
            author:      "Abby".to_string(),
            book:        "三十天".to_string(),
            outdir:      outdir.to_string_lossy().into_owned(),
        });

        assert!(use_case.execute().is_err());
        // Nothing may be persisted after a failed run
        assert!(!outdir.exists());
    }

    #[test]
    fn test_custom_extractor_is_honoured() {
        // Swapping the strategy must not change the pipeline shape;
        // the use case only fails later because the source is missing.
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(dir.path());

        let use_case = GenerateUseCase::with_extractor(
            GenerateConfig {
                template_path,
                source_path: dir.path().join("absent.docx").to_string_lossy().into_owned(),
                author:      "Abby".to_string(),
                book:        "三十天".to_string(),
                outdir:      dir.path().join("outputs").to_string_lossy().into_owned(),
            },
            Box::new(EmptyExtractor),
        );

        assert!(use_case.execute().is_err());
    }
}
