// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Loads one .docx manuscript using the docx-rs crate.
//
// How .docx files work:
//   A .docx file is actually a ZIP archive containing XML
//   files. docx-rs parses this ZIP and gives us a typed Rust
//   API over the XML content:
//
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text (the actual words!)
//
// We walk this tree collecting all Text nodes, one string per
// paragraph, clean each one, and drop the empties — the story
// layer only ever sees non-empty, normalised paragraphs.
//
// Any extension other than .docx is an UnsupportedFormat error
// (that error kind belongs to this layer, never to the story
// pipeline itself).
//
// Reference: docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use docx_rs::read_docx;
use std::{fs, path::Path, path::PathBuf};

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::Document;
use crate::domain::error::StoryError;
use crate::domain::traits::DocumentSource;

/// Loads a single .docx manuscript from a path.
/// Implements the DocumentSource trait from Layer 3.
pub struct DocxLoader {
    /// Path to the .docx file
    path: PathBuf,
}

impl DocxLoader {
    /// Create a new DocxLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for DocxLoader {
    fn load(&self) -> Result<Document> {
        // Reject anything that is not a .docx up front — the
        // extension check is cheap and gives a precise error.
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if extension != "docx" {
            return Err(StoryError::UnsupportedFormat { extension }.into());
        }

        let doc = load_single_docx(&self.path)?;
        tracing::info!(
            "Loaded '{}': {} non-empty paragraphs",
            doc.source,
            doc.len()
        );
        Ok(doc)
    }
}

/// Parse one .docx file into a Document of cleaned paragraphs.
fn load_single_docx(path: &Path) -> Result<Document> {
    // Read the raw bytes of the .docx file (which is a ZIP)
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    // Parse the ZIP/XML using docx-rs
    let docx = read_docx(&bytes).map_err(|e| {
        anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e)
    })?;

    let prep = Preprocessor::new();
    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // We only care about Paragraph nodes (not tables, images, etc.)
        if let DocumentChild::Paragraph(para) = child {
            let cleaned = prep.clean(&extract_paragraph_text(para));

            // Skip empty paragraphs (section breaks, blank lines, etc.)
            if !cleaned.is_empty() {
                paragraphs.push(cleaned);
            }
        }
    }

    // Use the filename as the source identifier
    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Document::new(source, paragraphs))
}

/// Extract plain text from a single docx-rs Paragraph node.
///
/// Paragraph → Run → Text is the path through the docx-rs tree.
/// Multiple runs in a paragraph are concatenated with no separator
/// because they are parts of the same sentence.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}
