//! Protocol normalization for `\href` targets.
//!
//! Bare domains such as `www.ams.org/` become `https://www.ams.org/`.
//! Targets with a protocol, fragment or path prefix are left alone.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::{DEFAULT_PROTOCOL, KNOWN_PROTOCOLS, LOCAL_REFERENCE_PREFIXES};

/// Regex pattern for `\href{target}`; captures the target.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HREF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\href\{([^}]+)\}").expect("valid regex"));

/// Result of normalizing a text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// The rewritten text.
    pub text: String,

    /// Number of targets that were rewritten.
    pub fixes: usize,
}

/// Decide the replacement for a single hyperlink target.
///
/// Returns `None` when the target stays as it is. The protocol check runs
/// first, then the local-reference check, then the domain heuristic, so
/// `../archive.tar` is never mistaken for a domain.
#[must_use]
pub fn normalize_target(target: &str) -> Option<String> {
    if KNOWN_PROTOCOLS.iter().any(|p| target.starts_with(p)) {
        return None;
    }

    if LOCAL_REFERENCE_PREFIXES
        .iter()
        .any(|p| target.starts_with(p))
    {
        return None;
    }

    if target.contains('.') && !target.starts_with('.') {
        return Some(format!("{DEFAULT_PROTOCOL}{target}"));
    }

    None
}

/// Add a protocol to every bare-domain `\href` target in `content`.
///
/// Non-target text and occurrence order are preserved exactly.
#[must_use]
pub fn normalize_urls(content: &str) -> NormalizedText {
    let mut fixes = 0;

    let text = HREF_PATTERN.replace_all(content, |caps: &Captures<'_>| {
        let (Some(whole), Some(target)) = (caps.get(0), caps.get(1)) else {
            return String::new();
        };
        match normalize_target(target.as_str()) {
            Some(fixed) => {
                tracing::debug!(from = target.as_str(), to = %fixed, "Fixing URL");
                fixes += 1;
                format!("\\href{{{fixed}}}")
            }
            None => whole.as_str().to_string(),
        }
    });

    if fixes > 0 {
        tracing::info!(fixes, "Fixed URLs missing protocol");
    }

    NormalizedText {
        text: text.into_owned(),
        fixes,
    }
}
