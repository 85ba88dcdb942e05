//! texcv - Lossless round trip between a LaTeX CV and a YAML section tree.
//!
//! The splitter cuts a document into preamble, frontmatter, sections with
//! their subsections, and epilogue. The tree can be saved as YAML, edited
//! or reordered, and turned back into LaTeX by the regenerator.
//!
//! # Example
//!
//! ```
//! use texcv::{regenerate_document, split_document};
//!
//! let source = "\\documentclass{article}\n\\begin{document}\n\\section{Education}\nPhD.\n\\end{document}\n";
//! let tree = split_document(source).unwrap();
//!
//! assert_eq!(tree.sections[0].title, "Education");
//! assert_eq!(regenerate_document(&tree), source);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Default paths and marker literals
//! - [`types`]: The document tree
//! - [`error`]: Error types and Result alias
//! - [`url`]: `\href` protocol normalization
//! - [`splitting`]: Marker scanning and document splitting
//! - [`regenerate`]: Document regeneration and validation
//! - [`yaml`]: The persisted intermediate form
//! - [`files`]: File access with path-carrying errors
//! - [`convert`]: Extraction and regeneration runs
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod files;
pub mod regenerate;
pub mod splitting;
pub mod types;
pub mod url;
pub mod yaml;

// Re-export main functions
pub use convert::{extract_file, regenerate_file};
pub use regenerate::{compare_documents, regenerate_document};
pub use splitting::split_document;

// Re-export commonly used items
pub use error::{Result, TexcvError};
pub use types::{DocumentTree, ExtractedDocument, ExtractionMetadata, Section, Subsection};
