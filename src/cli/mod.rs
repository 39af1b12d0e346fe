// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `generate` — turn a .docx manuscript into a validated story
//   2. `check`    — re-validate a hand-edited narrative
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckArgs, Commands, GenerateArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "word-doc-story",
    version = "0.1.0",
    about = "Turn a .docx manuscript into a validated four-paragraph story."
)]
pub struct Cli {
    /// The subcommand to run (generate or check)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => Self::run_generate(args),
            Commands::Check(args)    => Self::run_check(args),
        }
    }

    /// Handles the `generate` subcommand.
    /// Converts CLI args into a GenerateConfig and hands off to Layer 2.
    fn run_generate(args: GenerateArgs) -> Result<()> {
        use crate::application::generate_use_case::GenerateUseCase;

        tracing::info!("Generating story from: {}", args.source);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = GenerateUseCase::new(args.into());
        let out_path = use_case.execute()?;

        println!("OK: {}", out_path.display());
        Ok(())
    }

    /// Handles the `check` subcommand.
    /// Re-runs the validator over an externally edited narrative.
    fn run_check(args: CheckArgs) -> Result<()> {
        use crate::application::check_use_case::CheckUseCase;

        tracing::info!("Checking narrative: {}", args.narrative);

        let use_case = CheckUseCase::new(args.into());
        use_case.execute()?;

        println!("OK: narrative satisfies the template");
        Ok(())
    }
}
