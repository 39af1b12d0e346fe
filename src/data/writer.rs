// ============================================================
// Layer 4 — Narrative Writer
// ============================================================
// Writes the validated narrative back out as a .docx file:
// one heading run (bold, larger size) followed by one document
// paragraph per narrative paragraph.
//
// The writer is only ever called AFTER validation has passed —
// a narrative that fails its template checks never reaches
// this module, so there is no partial-output mode to handle.
//
// docx-rs builds the document in memory and packs it into the
// ZIP container when we hand it a file:
//
//   Docx::new()
//     .add_paragraph(...)   ← heading and body paragraphs
//     .build()              ← XML document tree
//     .pack(file)           ← ZIP archive on disk
//
// Reference: docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use docx_rs::{Docx, Paragraph, Run};
use std::{fs, path::Path};

use crate::domain::narrative::Narrative;
use crate::domain::traits::NarrativeWriter;

/// Half-point font size for the heading run (docx sizes are
/// half-points, so 32 renders as 16pt).
const HEADING_SIZE: usize = 32;

/// Writes narratives as .docx files.
/// Implements the NarrativeWriter trait from Layer 3.
pub struct DocxWriter;

impl DocxWriter {
    /// Create a new DocxWriter (stateless)
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl NarrativeWriter for DocxWriter {
    fn write(&self, title: &str, narrative: &Narrative, path: &Path) -> Result<()> {
        // Make sure the output directory exists, like `mkdir -p`
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        // Heading first, then the four body paragraphs in order
        let mut docx = Docx::new().add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(title).bold().size(HEADING_SIZE)),
        );
        for para in &narrative.paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(para.as_str())));
        }

        let file = fs::File::create(path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        docx.build()
            .pack(file)
            .map_err(|e| anyhow::anyhow!("Cannot pack '{}': {:?}", path.display(), e))?;

        tracing::info!(
            "Wrote {} paragraphs to '{}'",
            narrative.len(),
            path.display()
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_a_nonempty_docx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("story.docx");

        let narrative = Narrative::new(vec![
            "第一段。".to_string(),
            "第二段。".to_string(),
        ]);
        DocxWriter::new()
            .write("任務一｜主題白話理解", &narrative, &path)
            .unwrap();

        // A .docx is a ZIP archive — it must exist and start with "PK"
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.len() > 2);
        assert_eq!(&bytes[..2], b"PK");
    }
}
