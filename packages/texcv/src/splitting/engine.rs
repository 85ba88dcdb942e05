//! Splitter that turns a flat LaTeX document into a `DocumentTree`.
//!
//! Every field is a verbatim slice between two marker offsets, so the
//! fields partition the normalized input with no byte lost or repeated.

use super::scanner::{first_marker, scan_markers, Marker, MarkerKind};
use crate::config::{BODY_END_MARKER, BODY_START_MARKER};
use crate::error::{Result, TexcvError};
use crate::types::{DocumentTree, Section, Subsection};
use crate::url::normalize_urls;

/// Byte offsets of the body within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BodyBounds {
    /// Offset of the body-start marker.
    start_marker: usize,

    /// First byte of body content.
    content_start: usize,

    /// One past the last byte of body content.
    content_end: usize,

    /// First byte of the epilogue, if the body-end marker is present.
    epilogue_start: Option<usize>,
}

/// Locate the body markers.
///
/// The body-end marker is searched after the body-start marker only.
fn locate_body(content: &str) -> Result<BodyBounds> {
    let start_marker = content
        .find(BODY_START_MARKER)
        .ok_or_else(|| TexcvError::Structure {
            anchor: "body start".to_string(),
        })?;
    let content_start = start_marker + BODY_START_MARKER.len();

    match content[content_start..].find(BODY_END_MARKER) {
        Some(offset) => {
            let content_end = content_start + offset;
            Ok(BodyBounds {
                start_marker,
                content_start,
                content_end,
                epilogue_start: Some(content_end + BODY_END_MARKER.len()),
            })
        }
        None => {
            tracing::warn!("No body end marker found, treating the rest of the document as body");
            Ok(BodyBounds {
                start_marker,
                content_start,
                content_end: content.len(),
                epilogue_start: None,
            })
        }
    }
}

/// Pair each marker with the end of its span: the next marker's start, or
/// `region_end` for the last one.
fn marker_spans<'m, 'a>(
    markers: &'m [Marker<'a>],
    region_end: usize,
) -> impl Iterator<Item = (&'m Marker<'a>, usize)> {
    markers.iter().enumerate().map(move |(i, marker)| {
        let end = markers.get(i + 1).map_or(region_end, |next| next.start);
        (marker, end)
    })
}

/// Split the text following a section header into intro and subsections.
///
/// The intro is everything before the first subsection marker, or the whole
/// text when there is none.
#[must_use]
pub fn split_subsections(text: &str) -> (String, Vec<Subsection>) {
    let markers = scan_markers(text, MarkerKind::Subsection);
    let intro_end = markers.first().map_or(text.len(), |m| m.start);

    let subsections = marker_spans(&markers, text.len())
        .map(|(marker, end)| Subsection::new(marker.title, &text[marker.start..end]))
        .collect();

    (text[..intro_end].to_string(), subsections)
}

/// Split a region that starts at its first section marker into sections.
///
/// Text before the first marker is not part of any section; callers
/// store it as frontmatter.
#[must_use]
pub fn split_sections(region: &str) -> Vec<Section> {
    let markers = scan_markers(region, MarkerKind::Section);

    marker_spans(&markers, region.len())
        .map(|(marker, end)| {
            let (intro, subsections) = split_subsections(&region[marker.end..end]);
            tracing::debug!(
                title = marker.title,
                subsections = subsections.len(),
                "Split section"
            );
            Section {
                title: marker.title.to_string(),
                header: marker.literal(region).to_string(),
                intro,
                subsections,
            }
        })
        .collect()
}

/// Split an already URL-normalized document.
///
/// # Errors
/// Returns `TexcvError::Structure` when the body-start marker is missing.
pub fn split_normalized(content: &str) -> Result<DocumentTree> {
    let bounds = locate_body(content)?;
    let body = &content[bounds.content_start..bounds.content_end];

    let section_start = first_marker(body, MarkerKind::Section).unwrap_or(body.len());

    let tree = DocumentTree {
        preamble: content[..bounds.start_marker].to_string(),
        frontmatter: body[..section_start].to_string(),
        sections: split_sections(&body[section_start..]),
        epilogue: bounds
            .epilogue_start
            .map(|start| content[start..].to_string())
            .unwrap_or_default(),
        body_terminated: bounds.epilogue_start.is_some(),
    };

    Ok(tree)
}

/// Normalize hyperlink targets, then split the document into a tree.
///
/// # Errors
/// Returns `TexcvError::Structure` when the body-start marker is missing.
pub fn split_document(content: &str) -> Result<DocumentTree> {
    let normalized = normalize_urls(content);
    split_normalized(&normalized.text)
}
