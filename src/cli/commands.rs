// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `generate` and `check`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion for each flag
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::check_use_case::CheckConfig;
use crate::application::generate_use_case::GenerateConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a validated four-paragraph story from a .docx manuscript
    Generate(GenerateArgs),

    /// Re-validate an externally edited narrative against the template
    Check(CheckArgs),
}

/// All arguments for the `generate` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the task template (.yaml / .yml / .json)
    #[arg(long)]
    pub template: String,

    /// Path to the source manuscript (.docx)
    #[arg(long)]
    pub source: String,

    /// Author label used in the output filename
    #[arg(long)]
    pub author: String,

    /// Book label used in the output filename
    #[arg(long)]
    pub book: String,

    /// Directory the finished .docx is written into
    #[arg(long, default_value = "outputs")]
    pub outdir: String,
}

/// Convert CLI GenerateArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<GenerateArgs> for GenerateConfig {
    fn from(a: GenerateArgs) -> Self {
        GenerateConfig {
            template_path: a.template,
            source_path:   a.source,
            author:        a.author,
            book:          a.book,
            outdir:        a.outdir,
        }
    }
}

/// All arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the task template (.yaml / .yml / .json)
    #[arg(long)]
    pub template: String,

    /// Path to the source manuscript (.docx) the terms come from
    #[arg(long)]
    pub source: String,

    /// Path to the edited narrative (plain text, blank-line paragraphs)
    #[arg(long)]
    pub narrative: String,
}

impl From<CheckArgs> for CheckConfig {
    fn from(a: CheckArgs) -> Self {
        CheckConfig {
            template_path:  a.template,
            source_path:    a.source,
            narrative_path: a.narrative,
        }
    }
}
