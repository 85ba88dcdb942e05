//! Error types for texcv.
//!
//! Every fatal condition names the anchor, field or path involved so the
//! CLI can report it without extra context.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the texcv library.
#[derive(Debug, Error)]
pub enum TexcvError {
    /// A required markup anchor is absent from the source document.
    #[error("Structure error: missing {anchor} marker")]
    Structure { anchor: String },

    /// The intermediate form lacks a field needed for reconstruction.
    #[error("Schema error: missing required field '{field}'")]
    Schema { field: String },

    /// File could not be read, written or created.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TexcvError {
    /// Build an `Io` error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a `Schema` error for the given field path.
    pub fn schema(field: impl Into<String>) -> Self {
        Self::Schema {
            field: field.into(),
        }
    }
}

/// Result type alias for texcv operations.
pub type Result<T> = std::result::Result<T, TexcvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_names_anchor() {
        let err = TexcvError::Structure {
            anchor: "body start".to_string(),
        };
        assert_eq!(err.to_string(), "Structure error: missing body start marker");
    }

    #[test]
    fn test_schema_error_names_field() {
        let err = TexcvError::schema("sections[2].header");
        assert_eq!(
            err.to_string(),
            "Schema error: missing required field 'sections[2].header'"
        );
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = TexcvError::io(
            "data/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("data/missing.yaml"));
        assert!(msg.contains("not found"));
    }
}
