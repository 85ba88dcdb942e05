//! Extraction and regeneration runs that tie all components together.

use std::path::Path;

use crate::error::Result;
use crate::files::{read_text, write_atomic};
use crate::regenerate::{compare_documents, regenerate_document, ValidationOutcome};
use crate::splitting::split_document;
use crate::types::{DocumentStats, ExtractedDocument, ExtractionMetadata};
use crate::yaml::{load_yaml, save_yaml};

/// What an extraction run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub stats: DocumentStats,

    /// Size of the written YAML file in bytes.
    pub output_bytes: usize,
}

/// What a regeneration run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationSummary {
    /// Number of sections in the loaded tree.
    pub sections: usize,

    /// Length of the regenerated text in characters.
    pub output_chars: usize,

    /// Comparison against the original, when one was made.
    pub validation: Option<ValidationOutcome>,
}

/// Split the LaTeX file at `input` and save the tree as YAML at `output`.
///
/// # Errors
/// * `TexcvError::Io` if the input cannot be read or the output cannot be written
/// * `TexcvError::Structure` if the input has no body-start marker
pub fn extract_file(input: &Path, output: &Path) -> Result<ExtractionSummary> {
    tracing::info!(path = %input.display(), "Extracting CV");

    let content = read_text(input)?;
    tracing::info!(characters = content.chars().count(), "Loaded source");

    let tree = split_document(&content)?;
    let stats = tree.stats();
    tracing::info!(sections = stats.sections, subsections = stats.subsections, "Split document");

    let document = ExtractedDocument::new(
        ExtractionMetadata::now(input.display().to_string()),
        tree,
    );

    tracing::info!(path = %output.display(), "Saving YAML");
    let output_bytes = save_yaml(&document, output)?;

    Ok(ExtractionSummary {
        stats,
        output_bytes,
    })
}

/// Rebuild the LaTeX file at `output` from the YAML tree at `input`.
///
/// When `original` is given the result is compared against it. A missing
/// original only skips the comparison; the output is written regardless
/// of the comparison result.
///
/// # Errors
/// * `TexcvError::Io` if the input cannot be read or the output cannot be written
/// * `TexcvError::Schema` or `TexcvError::Yaml` if the input is not a valid tree
pub fn regenerate_file(
    input: &Path,
    output: &Path,
    original: Option<&Path>,
) -> Result<RegenerationSummary> {
    tracing::info!(path = %input.display(), "Regenerating LaTeX");

    let document = load_yaml(input)?;
    let sections = document.tree.sections.len();
    tracing::info!(sections, "Loaded CV data");

    let regenerated = regenerate_document(&document.tree);
    write_atomic(output, &regenerated)?;

    let output_chars = regenerated.chars().count();
    tracing::info!(path = %output.display(), characters = output_chars, "Saved regenerated LaTeX");

    let validation = match original {
        Some(path) if path.exists() => {
            let original_text = read_text(path)?;
            Some(compare_documents(&original_text, &regenerated))
        }
        Some(path) => {
            tracing::warn!(path = %path.display(), "Original file not found for validation");
            None
        }
        None => None,
    };

    Ok(RegenerationSummary {
        sections,
        output_chars,
        validation,
    })
}
