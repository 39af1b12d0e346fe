// ============================================================
// Layer 6 — Template Store
// ============================================================
// Loads the declarative task template from disk. Templates are
// authored in YAML (the original task files use it), but JSON
// is accepted too since serde makes the second format free.
//
// The store returns the domain Template type; nothing outside
// this module knows or cares which format the file was in.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_yaml / serde_json documentation

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::template::Template;

/// Loads templates from a file path, dispatching on extension.
pub struct TemplateStore {
    /// Path to the .yaml / .yml / .json template file
    path: PathBuf,
}

impl TemplateStore {
    /// Create a new TemplateStore pointed at a template file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and deserialise the template.
    pub fn load(&self) -> Result<Template> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read template '{}'", self.path.display()))?;

        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let template: Template = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&raw)
                .with_context(|| format!("Invalid YAML template '{}'", self.path.display()))?,
            "json" => serde_json::from_str(&raw)
                .with_context(|| format!("Invalid JSON template '{}'", self.path.display()))?,
            other => bail!(
                "Unknown template format '{}' for '{}' — use .yaml, .yml or .json",
                other,
                self.path.display()
            ),
        };

        tracing::debug!(
            "Loaded template '{}': {} paragraphs required",
            self.path.display(),
            template.structure.paragraphs
        );
        Ok(template)
    }
}
