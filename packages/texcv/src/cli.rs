//! Command-line interface for texcv.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_PATH, DEFAULT_YAML_PATH};
use crate::convert::{extract_file, regenerate_file};
use crate::error::Result;
use crate::regenerate::ValidationOutcome;

/// texcv - Split a LaTeX CV into editable YAML sections and rebuild it.
#[derive(Parser)]
#[command(name = "texcv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a LaTeX file into a YAML section tree.
    Extract {
        /// LaTeX source file
        #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
        input: PathBuf,

        /// YAML output file
        #[arg(short, long, default_value = DEFAULT_YAML_PATH)]
        output: PathBuf,
    },

    /// Rebuild a LaTeX file from a YAML section tree.
    Regenerate {
        /// YAML input file
        #[arg(short, long, default_value = DEFAULT_YAML_PATH)]
        input: PathBuf,

        /// LaTeX output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Validate against the original (default)
        #[arg(long, overrides_with = "no_validate")]
        validate: bool,

        /// Skip validation
        #[arg(long, overrides_with = "validate")]
        no_validate: bool,

        /// Original LaTeX file to validate against
        #[arg(long, default_value = DEFAULT_SOURCE_PATH)]
        original: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, output } => extract_command(&input, &output),
        Commands::Regenerate {
            input,
            output,
            no_validate,
            original,
            ..
        } => {
            let original = (!no_validate).then_some(original.as_path());
            regenerate_command(&input, &output, original)
        }
    }
}

/// Execute the extract command.
fn extract_command(input: &Path, output: &Path) -> Result<()> {
    println!(
        "{} {}",
        style("Extracting").bold(),
        style(input.display()).cyan()
    );

    let summary = extract_file(input, output)?;

    println!("  Sections: {}", summary.stats.sections);
    println!("  Subsections: {}", summary.stats.subsections);
    println!(
        "  Output size: {:.1} KB",
        summary.output_bytes as f64 / 1024.0
    );
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

/// Execute the regenerate command.
fn regenerate_command(
    input: &Path,
    output: &Path,
    original: Option<&Path>,
) -> Result<()> {
    println!(
        "{} {}",
        style("Regenerating from").bold(),
        style(input.display()).cyan()
    );

    let summary = regenerate_file(input, output, original)?;

    println!("  Sections: {}", summary.sections);
    println!("  Output size: {} characters", summary.output_chars);
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    match summary.validation {
        Some(ValidationOutcome::Identical) => {
            tracing::info!("Regenerated LaTeX is identical to original");
            println!(
                "{}",
                style("Regenerated LaTeX is identical to original").green()
            );
        }
        Some(ValidationOutcome::Mismatch(mismatch)) => {
            tracing::warn!(
                original = mismatch.original_len,
                regenerated = mismatch.regenerated_len,
                position = mismatch.offset,
                "Files are not identical"
            );
            println!("{}", style("Files are not identical").yellow().bold());
            println!("  Original: {} chars", mismatch.original_len);
            println!("  Regenerated: {} chars", mismatch.regenerated_len);
            println!("  First difference at position {}", mismatch.offset);
            println!("  Context: ...{}...", mismatch.context);
        }
        None => {}
    }

    Ok(())
}
