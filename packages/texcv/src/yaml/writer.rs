//! YAML writer for extracted documents.

use std::path::Path;

use crate::error::Result;
use crate::files::write_atomic;
use crate::types::ExtractedDocument;

/// Generate the YAML text for an extracted document.
///
/// Field text is emitted as-is: multi-line values become block scalars and
/// values that a block scalar cannot carry exactly (trailing spaces, tabs)
/// become double-quoted strings. No line-level post-processing is applied,
/// since that would alter field content.
pub fn generate_yaml(document: &ExtractedDocument) -> Result<String> {
    let yaml_string = serde_yaml::to_string(document)?;

    Ok(format!("---\n{yaml_string}"))
}

/// Save an extracted document as a YAML file.
///
/// # Returns
/// Size of the written file in bytes
pub fn save_yaml(document: &ExtractedDocument, path: &Path) -> Result<usize> {
    let content = generate_yaml(document)?;
    write_atomic(path, &content)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Saved YAML");
    Ok(content.len())
}
