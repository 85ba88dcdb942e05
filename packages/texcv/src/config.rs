//! Configuration constants for the splitter and regenerator.

/// Default LaTeX source read by `extract` and used as the validation baseline.
pub const DEFAULT_SOURCE_PATH: &str = "input/CV-Dutykh.tex";

/// Default location of the persisted intermediate form.
pub const DEFAULT_YAML_PATH: &str = "data/cv_extracted.yaml";

/// Default LaTeX file written by `regenerate`.
pub const DEFAULT_OUTPUT_PATH: &str = "output/ClassicFullCV-Dutykh.tex";

/// Marker separating the preamble from the document body.
pub const BODY_START_MARKER: &str = r"\begin{document}";

/// Marker separating the document body from the epilogue.
pub const BODY_END_MARKER: &str = r"\end{document}";

/// Command introducing a top-level section.
pub const SECTION_COMMAND: &str = r"\section";

/// Command introducing a subsection.
pub const SUBSECTION_COMMAND: &str = r"\subsection";

/// Tag recorded in the metadata of every extracted document.
///
/// Identifies the field layout: verbatim slices joined without separators.
pub const EXTRACTION_METHOD: &str = "verbatim_structure";

/// Characters of context shown on each side of the first validation mismatch.
pub const DIFF_CONTEXT_CHARS: usize = 20;

/// Protocol prefixes that mark a hyperlink target as already absolute.
pub const KNOWN_PROTOCOLS: [&str; 4] = ["http://", "https://", "ftp://", "mailto:"];

/// Prefixes of fragment and path references, never rewritten.
pub const LOCAL_REFERENCE_PREFIXES: [&str; 4] = ["#", "/", "./", "../"];

/// Protocol prepended to bare domain targets.
pub const DEFAULT_PROTOCOL: &str = "https://";
