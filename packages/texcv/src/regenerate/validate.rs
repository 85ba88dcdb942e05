//! Comparison of regenerated text against the original source.
//!
//! Both sides have trailing whitespace stripped from every line before
//! comparison. A mismatch is a diagnostic; it never changes the output.

use crate::config::DIFF_CONTEXT_CHARS;

/// Strip trailing whitespace from every line.
#[must_use]
pub fn normalize_trailing_whitespace(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Position and context of the first difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Normalized original length, in characters.
    pub original_len: usize,

    /// Normalized regenerated length, in characters.
    pub regenerated_len: usize,

    /// Character offset of the first difference.
    pub offset: usize,

    /// Original text around `offset`.
    pub context: String,
}

/// Outcome of comparing regenerated text against the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Identical,
    Mismatch(Mismatch),
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }
}

/// Compare `regenerated` against `original` after whitespace normalization.
///
/// When one normalized text is a prefix of the other, the first difference
/// is at the shorter length.
#[must_use]
pub fn compare_documents(original: &str, regenerated: &str) -> ValidationOutcome {
    let original = normalize_trailing_whitespace(original);
    let regenerated = normalize_trailing_whitespace(regenerated);

    if original == regenerated {
        return ValidationOutcome::Identical;
    }

    let original_chars: Vec<char> = original.chars().collect();
    let regenerated_len = regenerated.chars().count();

    let offset = original_chars
        .iter()
        .zip(regenerated.chars())
        .position(|(o, r)| *o != r)
        .unwrap_or_else(|| original_chars.len().min(regenerated_len));

    let window_start = offset.saturating_sub(DIFF_CONTEXT_CHARS);
    let window_end = (offset + DIFF_CONTEXT_CHARS).min(original_chars.len());
    let context = original_chars[window_start..window_end]
        .iter()
        .collect();

    ValidationOutcome::Mismatch(Mismatch {
        original_len: original_chars.len(),
        regenerated_len,
        offset,
        context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_trailing_whitespace() {
        assert_eq!(
            normalize_trailing_whitespace("a  \nb\t\n\nc \r\n"),
            "a\nb\n\nc\n"
        );
    }

    #[test]
    fn test_trailing_whitespace_differences_are_identical() {
        let outcome = compare_documents("line one   \nline two\n", "line one\nline two \n");
        assert!(outcome.is_identical());
    }

    #[test]
    fn test_mismatch_reports_offset_and_context() {
        let original = "\\section{Education}\nPhD in applied mathematics";
        let regenerated = "\\section{Education}\nMSc in applied mathematics";

        let ValidationOutcome::Mismatch(mismatch) = compare_documents(original, regenerated)
        else {
            panic!("expected a mismatch");
        };
        assert_eq!(mismatch.offset, 20);
        assert_eq!(mismatch.context, "\\section{Education}\nPhD in applied mathe");
        assert_eq!(mismatch.original_len, original.chars().count());
    }

    #[test]
    fn test_prefix_mismatch_points_at_shorter_length() {
        let ValidationOutcome::Mismatch(mismatch) = compare_documents("abc", "abcdef") else {
            panic!("expected a mismatch");
        };
        assert_eq!(mismatch.offset, 3);
        assert_eq!(mismatch.regenerated_len, 6);
        assert_eq!(mismatch.context, "abc");
    }

    #[test]
    fn test_offset_counts_characters_not_bytes() {
        let ValidationOutcome::Mismatch(mismatch) = compare_documents("ééa", "ééb") else {
            panic!("expected a mismatch");
        };
        assert_eq!(mismatch.offset, 2);
    }
}
