//! The persisted intermediate form.
//!
//! Documents are stored as YAML mappings with keys in a fixed order:
//! `metadata`, `preamble`, `frontmatter`, `sections`, `epilogue`.

mod reader;
mod writer;

pub use reader::{load_yaml, parse_yaml};
pub use writer::{generate_yaml, save_yaml};
