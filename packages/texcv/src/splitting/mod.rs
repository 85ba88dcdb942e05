//! Document splitting for LaTeX CVs.
//!
//! The scanner finds `\section` and `\subsection` markers; the engine turns
//! their offsets into a two-level `DocumentTree`. Deeper nesting is not
//! recognised: `\subsubsection` and friends stay inside subsection content,
//! and a `\section` inside subsection content starts a new section.

mod engine;
mod scanner;

pub use engine::{split_document, split_normalized, split_sections, split_subsections};
pub use scanner::{first_marker, scan_markers, Marker, MarkerKind};
