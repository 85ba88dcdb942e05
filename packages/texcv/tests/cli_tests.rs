//! Integration tests for the texcv binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_texcv"))
}

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cv")
        .join(name)
}

/// A document without bare-domain links, so regeneration matches it exactly.
const CLEAN_CV: &str = "\\documentclass{article}\n\\begin{document}\n\\section{Education}\nPhD.   \n\\section{Work}\n\\subsection{Now}\nHere.\n\\end{document}\n";

#[test]
fn test_help_lists_commands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("regenerate"));
}

#[test]
fn test_extract_writes_yaml() {
    let dir = TempDir::new().unwrap();
    let yaml = dir.path().join("data").join("cv_extracted.yaml");

    cli()
        .arg("extract")
        .arg("-i")
        .arg(fixture_path("CV-sample.tex"))
        .arg("-o")
        .arg(&yaml)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sections: 3"))
        .stdout(predicate::str::contains("Subsections: 4"));

    let content = fs::read_to_string(&yaml).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("extraction_method: verbatim_structure"));
}

#[test]
fn test_extract_without_body_start_fails() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("broken.tex");
    fs::write(&source, "\\documentclass{article}\n\\section{A}\n").unwrap();

    cli()
        .arg("extract")
        .arg("-i")
        .arg(&source)
        .arg("-o")
        .arg(dir.path().join("out.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing body start marker"));
}

#[test]
fn test_regenerate_validates_identical() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("CV.tex");
    let yaml = dir.path().join("cv.yaml");
    let output = dir.path().join("output").join("CV.tex");
    fs::write(&source, CLEAN_CV).unwrap();

    cli()
        .args(["extract", "-i"])
        .arg(&source)
        .arg("-o")
        .arg(&yaml)
        .assert()
        .success();

    cli()
        .args(["regenerate", "-i"])
        .arg(&yaml)
        .arg("-o")
        .arg(&output)
        .arg("--original")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("identical to original"));

    assert_eq!(fs::read_to_string(&output).unwrap(), CLEAN_CV);
}

#[test]
fn test_regenerate_reports_mismatch_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let yaml = dir.path().join("cv.yaml");
    let output = dir.path().join("CV.tex");

    cli()
        .arg("extract")
        .arg("-i")
        .arg(fixture_path("CV-sample.tex"))
        .arg("-o")
        .arg(&yaml)
        .assert()
        .success();

    cli()
        .args(["regenerate", "-i"])
        .arg(&yaml)
        .arg("-o")
        .arg(&output)
        .arg("--original")
        .arg(fixture_path("CV-sample.tex"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Files are not identical"))
        .stdout(predicate::str::contains("First difference at position"));

    assert!(output.exists());
}

#[test]
fn test_regenerate_no_validate_skips_comparison() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("CV.tex");
    let yaml = dir.path().join("cv.yaml");
    fs::write(&source, CLEAN_CV).unwrap();

    cli()
        .args(["extract", "-i"])
        .arg(&source)
        .arg("-o")
        .arg(&yaml)
        .assert()
        .success();

    cli()
        .args(["regenerate", "--no-validate", "-i"])
        .arg(&yaml)
        .arg("-o")
        .arg(dir.path().join("out.tex"))
        .arg("--original")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("identical").not());
}

#[test]
fn test_regenerate_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    cli()
        .args(["regenerate", "-i"])
        .arg(dir.path().join("missing.yaml"))
        .arg("-o")
        .arg(dir.path().join("out.tex"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.yaml"));
}

#[test]
fn test_regenerate_missing_field_fails_with_schema_error() {
    let dir = TempDir::new().unwrap();
    let yaml = dir.path().join("cv.yaml");
    fs::write(&yaml, "frontmatter: ''\nsections: []\nepilogue: ''\n").unwrap();

    cli()
        .args(["regenerate", "--no-validate", "-i"])
        .arg(&yaml)
        .arg("-o")
        .arg(dir.path().join("out.tex"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("'preamble'"));
}
