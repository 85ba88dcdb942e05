//! Regeneration of LaTeX text from a `DocumentTree`.
//!
//! The splitter keeps every byte of the source in some field, so
//! regeneration is plain concatenation in document order with no separator.

mod validate;

pub use validate::{compare_documents, normalize_trailing_whitespace, Mismatch, ValidationOutcome};

use crate::config::{BODY_END_MARKER, BODY_START_MARKER};
use crate::types::{DocumentTree, Section};

fn push_section(out: &mut String, section: &Section) {
    out.push_str(&section.header);
    out.push_str(&section.intro);
    for subsection in &section.subsections {
        out.push_str(&subsection.content);
    }
}

/// Rebuild the document text from a tree.
///
/// Order: preamble, body-start marker, frontmatter, each section (header,
/// intro, subsection contents), body-end marker, epilogue. The body-end
/// marker is omitted for trees split from an unterminated source.
#[must_use]
pub fn regenerate_document(tree: &DocumentTree) -> String {
    let mut out = String::with_capacity(tree.char_count());

    out.push_str(&tree.preamble);
    out.push_str(BODY_START_MARKER);
    out.push_str(&tree.frontmatter);

    for section in &tree.sections {
        push_section(&mut out, section);
    }

    if tree.body_terminated {
        out.push_str(BODY_END_MARKER);
    }
    out.push_str(&tree.epilogue);

    out
}
