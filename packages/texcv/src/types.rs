//! Core data types for the document tree.
//!
//! A `DocumentTree` holds verbatim slices of the source document. Joining
//! the slices back together with the body markers reproduces the source
//! exactly; see [`crate::regenerate`].

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::{BODY_END_MARKER, BODY_START_MARKER, EXTRACTION_METHOD};

/// A subsection: its marker and everything up to the next subsection marker
/// or the end of the parent section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    /// Title taken from the marker argument.
    pub title: String,

    /// Verbatim text, starting with the subsection marker itself.
    pub content: String,
}

impl Subsection {
    /// Create a new subsection.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A top-level section of the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Title taken from the marker argument.
    pub title: String,

    /// The literal marker text, e.g. `\section{Education}`.
    pub header: String,

    /// Verbatim text between the header and the first subsection marker.
    pub intro: String,

    /// Subsections in document order.
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// Create a new section with no intro and no subsections.
    #[must_use]
    pub fn new(title: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            header: header.into(),
            intro: String::new(),
            subsections: Vec::new(),
        }
    }

    /// Set the intro text.
    #[must_use]
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Append a subsection.
    #[must_use]
    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    /// Character count of the header, intro and every subsection.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.header.chars().count()
            + self.intro.chars().count()
            + self
                .subsections
                .iter()
                .map(|s| s.content.chars().count())
                .sum::<usize>()
    }
}

fn is_true(value: &bool) -> bool {
    *value
}

/// The intermediate representation of a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTree {
    /// Everything before the body-start marker.
    pub preamble: String,

    /// Body text before the first section marker.
    pub frontmatter: String,

    /// Sections in document order.
    pub sections: Vec<Section>,

    /// Everything after the body-end marker.
    pub epilogue: String,

    /// Whether the source closed its body with the body-end marker.
    #[serde(skip_serializing_if = "is_true")]
    pub body_terminated: bool,
}

impl DocumentTree {
    /// Create an empty, terminated tree with the given preamble.
    #[must_use]
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            frontmatter: String::new(),
            sections: Vec::new(),
            epilogue: String::new(),
            body_terminated: true,
        }
    }

    /// Section titles in document order.
    pub fn section_titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }

    /// Look up a section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Character count of all stored fields plus the body markers.
    ///
    /// Equals the character count of the source the tree was split from.
    #[must_use]
    pub fn char_count(&self) -> usize {
        let markers = BODY_START_MARKER.chars().count()
            + if self.body_terminated {
                BODY_END_MARKER.chars().count()
            } else {
                0
            };
        self.preamble.chars().count()
            + self.frontmatter.chars().count()
            + self.sections.iter().map(Section::char_count).sum::<usize>()
            + self.epilogue.chars().count()
            + markers
    }

    /// Summary counts for reporting.
    #[must_use]
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            sections: self.sections.len(),
            subsections: self.sections.iter().map(|s| s.subsections.len()).sum(),
            characters: self.char_count(),
        }
    }
}

/// Summary counts of a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub sections: usize,
    pub subsections: usize,
    pub characters: usize,
}

/// Provenance of an extracted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Path of the LaTeX source.
    pub source_file: String,

    /// When the extraction ran.
    pub extraction_date: DateTime<Local>,

    /// Field layout tag, see [`EXTRACTION_METHOD`].
    pub extraction_method: String,
}

impl ExtractionMetadata {
    /// Metadata for an extraction of `source_file` happening now.
    #[must_use]
    pub fn now(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            extraction_date: Local::now(),
            extraction_method: EXTRACTION_METHOD.to_string(),
        }
    }
}

/// A document tree together with its provenance, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ExtractionMetadata>,

    #[serde(flatten)]
    pub tree: DocumentTree,
}

impl ExtractedDocument {
    /// Wrap a tree with metadata.
    #[must_use]
    pub fn new(metadata: ExtractionMetadata, tree: DocumentTree) -> Self {
        Self {
            metadata: Some(metadata),
            tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocumentTree {
        let mut tree = DocumentTree::new("\\documentclass{article}\n");
        tree.frontmatter = "\n\\maketitle\n".to_string();
        tree.sections.push(
            Section::new("Education", "\\section{Education}").with_intro("\nPhD.\n"),
        );
        tree.sections.push(
            Section::new("Work", "\\section{Work}")
                .with_intro("\n")
                .with_subsection(Subsection::new("Jobs", "\\subsection{Jobs}\nMany.\n"))
                .with_subsection(Subsection::new("Talks", "\\subsection{Talks}\nSome.\n")),
        );
        tree.epilogue = "\n".to_string();
        tree
    }

    #[test]
    fn test_stats() {
        let stats = sample_tree().stats();
        assert_eq!(stats.sections, 2);
        assert_eq!(stats.subsections, 2);
    }

    #[test]
    fn test_section_titles_in_order() {
        let tree = sample_tree();
        let titles: Vec<&str> = tree.section_titles().collect();
        assert_eq!(titles, vec!["Education", "Work"]);
        assert!(tree.section("Work").is_some());
        assert!(tree.section("Hobbies").is_none());
    }

    #[test]
    fn test_char_count_counts_unicode_as_chars() {
        let mut tree = DocumentTree::new("é");
        tree.body_terminated = false;
        assert_eq!(tree.char_count(), 1 + BODY_START_MARKER.len());
    }

    #[test]
    fn test_metadata_now_uses_method_tag() {
        let metadata = ExtractionMetadata::now("input/cv.tex");
        assert_eq!(metadata.source_file, "input/cv.tex");
        assert_eq!(metadata.extraction_method, EXTRACTION_METHOD);
    }
}
