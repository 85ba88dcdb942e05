//! Marker scanner for section and subsection commands.
//!
//! Produces `(kind, title, start, end)` tuples so the splitter can work
//! purely on byte offsets.

use crate::config::{SECTION_COMMAND, SUBSECTION_COMMAND};

/// The two levels of structure the splitter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `\section{...}`
    Section,

    /// `\subsection{...}`
    Subsection,
}

impl MarkerKind {
    /// The command literal, without the argument.
    #[must_use]
    pub fn command(&self) -> &'static str {
        match self {
            Self::Section => SECTION_COMMAND,
            Self::Subsection => SUBSECTION_COMMAND,
        }
    }
}

/// A marker occurrence in scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    pub kind: MarkerKind,

    /// The marker argument.
    pub title: &'a str,

    /// Byte offset of the backslash.
    pub start: usize,

    /// Byte offset just past the closing brace.
    pub end: usize,
}

impl Marker<'_> {
    /// The literal marker text within `text`.
    #[must_use]
    pub fn literal<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Scan `text` left to right for complete markers of `kind`.
///
/// A marker is the command, `{`, a non-empty title without `}`, and `}`.
/// Matches never overlap; an incomplete command is ordinary text.
#[must_use]
pub fn scan_markers(text: &str, kind: MarkerKind) -> Vec<Marker<'_>> {
    let opening = format!("{}{{", kind.command());
    let mut markers = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(&opening) {
        let start = cursor + found;
        let title_start = start + opening.len();

        match text[title_start..].find('}') {
            Some(0) | None => {
                // Empty or unterminated argument; step past the backslash.
                cursor = start + 1;
            }
            Some(len) => {
                let end = title_start + len + 1;
                markers.push(Marker {
                    kind,
                    title: &text[title_start..title_start + len],
                    start,
                    end,
                });
                cursor = end;
            }
        }
    }

    markers
}

/// Offset of the first complete marker of `kind`, if any.
#[must_use]
pub fn first_marker(text: &str, kind: MarkerKind) -> Option<usize> {
    scan_markers(text, kind).first().map(|m| m.start)
}
