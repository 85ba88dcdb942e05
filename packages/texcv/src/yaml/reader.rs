//! YAML reader for extracted documents.
//!
//! Fields needed to rebuild the document text are required. A missing
//! field is reported by path instead of being replaced with empty text,
//! which would hide data lost between extraction and regeneration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TexcvError};
use crate::files::read_text;
use crate::types::{DocumentTree, ExtractedDocument, ExtractionMetadata, Section, Subsection};

#[derive(Debug, Deserialize)]
struct RawSubsection {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    title: Option<String>,
    header: Option<String>,
    intro: Option<String>,
    subsections: Option<Vec<RawSubsection>>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    metadata: Option<serde_yaml::Value>,
    preamble: Option<String>,
    frontmatter: Option<String>,
    sections: Option<Vec<RawSection>>,
    epilogue: Option<String>,
    body_terminated: Option<bool>,
}

fn require<T>(value: Option<T>, field: impl FnOnce() -> String) -> Result<T> {
    value.ok_or_else(|| TexcvError::schema(field()))
}

impl RawSubsection {
    fn into_subsection(self, path: &str) -> Result<Subsection> {
        Ok(Subsection {
            title: self.title.unwrap_or_default(),
            content: require(self.content, || format!("{path}.content"))?,
        })
    }
}

impl RawSection {
    fn into_section(self, path: &str) -> Result<Section> {
        let header = require(self.header, || format!("{path}.header"))?;
        let subsections = self
            .subsections
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_subsection(&format!("{path}.subsections[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Section {
            title: self.title.unwrap_or_default(),
            header,
            intro: self.intro.unwrap_or_default(),
            subsections,
        })
    }
}

impl RawDocument {
    fn into_document(self) -> Result<ExtractedDocument> {
        let sections = require(self.sections, || "sections".to_string())?
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_section(&format!("sections[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        let tree = DocumentTree {
            preamble: require(self.preamble, || "preamble".to_string())?,
            frontmatter: require(self.frontmatter, || "frontmatter".to_string())?,
            sections,
            epilogue: require(self.epilogue, || "epilogue".to_string())?,
            body_terminated: self.body_terminated.unwrap_or(true),
        };

        Ok(ExtractedDocument {
            metadata: self.metadata.and_then(parse_metadata),
            tree,
        })
    }
}

/// Metadata is informational; an unreadable block is dropped with a warning.
fn parse_metadata(value: serde_yaml::Value) -> Option<ExtractionMetadata> {
    match serde_yaml::from_value(value) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable metadata block");
            None
        }
    }
}

/// Parse an extracted document from YAML text.
///
/// # Errors
/// * `TexcvError::Yaml` if the text is not valid YAML or a field has the wrong type
/// * `TexcvError::Schema` if a field required for regeneration is missing
pub fn parse_yaml(text: &str) -> Result<ExtractedDocument> {
    let raw: RawDocument = serde_yaml::from_str(text)?;
    raw.into_document()
}

/// Load an extracted document from a YAML file.
pub fn load_yaml(path: &Path) -> Result<ExtractedDocument> {
    let text = read_text(path)?;
    parse_yaml(&text)
}
