// ============================================================
// Layer 3 — Template Domain Type
// ============================================================
// The externally supplied task template. It declares the hard
// constraints the composed narrative must satisfy:
//
//   structure:
//     paragraphs: 4
//     required_section_starter:
//       snapshot: "一句話收斂"
//     required_terms_rule:
//       min_terms: 3
//       max_terms: 8
//   output:
//     filename_pattern: "{book}_{author}_{date}.docx"
//
// The template is read-only input. The pipeline NEVER writes
// runtime state back onto it — the validator receives the
// extracted candidates as an explicit argument instead, so
// there is no hidden coupling through shared mutable config.
//
// Reference: Rust Book §5 (Structs)
//            serde documentation (derive, defaults)

use serde::{Deserialize, Serialize};

/// The full template as loaded from a YAML or JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Human-readable task name, used as the document heading
    #[serde(default)]
    pub name: Option<String>,

    /// The structural constraints on the narrative
    pub structure: Structure,

    /// Output file settings (optional — a default pattern applies)
    #[serde(default)]
    pub output: Option<OutputSpec>,
}

/// Structural and lexical constraints checked by the validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// Exact number of paragraphs the narrative must have
    pub paragraphs: usize,

    /// Literal strings that fixed sections must start with
    pub required_section_starter: SectionStarter,

    /// Bounds on how many extracted terms must appear verbatim
    #[serde(default)]
    pub required_terms_rule: TermsRule,

    /// Optional fixed list of literal terms that must all appear.
    /// Intended as an alternative to the frequency-based rule,
    /// but both are checked when both are present.
    #[serde(default)]
    pub required_terms: Option<Vec<String>>,
}

/// Required literal paragraph openers, keyed by section role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionStarter {
    /// The final "snapshot" paragraph must begin with this string
    pub snapshot: String,
}

/// How many of the ranked candidate terms the narrative must use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsRule {
    /// Minimum number of candidate terms that must appear
    #[serde(default = "default_min_terms")]
    pub min_terms: usize,

    /// Only the first max_terms candidates (by rank) are considered
    #[serde(default = "default_max_terms")]
    pub max_terms: usize,
}

/// Output file naming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Pattern with {book}, {author} and {date} placeholders
    pub filename_pattern: String,
}

fn default_min_terms() -> usize {
    3
}

fn default_max_terms() -> usize {
    8
}

impl Default for TermsRule {
    fn default() -> Self {
        Self {
            min_terms: default_min_terms(),
            max_terms: default_max_terms(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_template() {
        // Only the required fields — rule falls back to 3/8
        let yaml = "
structure:
  paragraphs: 4
  required_section_starter:
    snapshot: 一句話收斂
";
        let t: Template = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(t.structure.paragraphs, 4);
        assert_eq!(t.structure.required_section_starter.snapshot, "一句話收斂");
        assert_eq!(t.structure.required_terms_rule.min_terms, 3);
        assert_eq!(t.structure.required_terms_rule.max_terms, 8);
        assert!(t.structure.required_terms.is_none());
        assert!(t.output.is_none());
    }

    #[test]
    fn test_full_json_template() {
        let json = r#"{
            "name": "任務一｜主題白話理解",
            "structure": {
                "paragraphs": 4,
                "required_section_starter": { "snapshot": "快照" },
                "required_terms_rule": { "min_terms": 2, "max_terms": 5 },
                "required_terms": ["RAG", "LangGraph"]
            },
            "output": { "filename_pattern": "{book}_{author}_{date}.docx" }
        }"#;
        let t: Template = serde_json::from_str(json).unwrap();
        assert_eq!(t.name.as_deref(), Some("任務一｜主題白話理解"));
        assert_eq!(t.structure.required_terms_rule.max_terms, 5);
        assert_eq!(
            t.structure.required_terms.as_deref(),
            Some(&["RAG".to_string(), "LangGraph".to_string()][..])
        );
        assert_eq!(
            t.output.unwrap().filename_pattern,
            "{book}_{author}_{date}.docx"
        );
    }
}
