//! Library-level end-to-end tests over a real fixture tree.

use aptly_webindex::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Reporter that swallows everything; test output stays clean.
struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _message: &str) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

fn write_index(root: &Path, dist: &str, arch: &str, content: &str) {
    let dir = root
        .join("dists")
        .join(dist)
        .join("main")
        .join(format!("binary-{}", arch));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Packages"), content).unwrap();
}

fn stanza(name: &str, version: &str, arch: &str) -> String {
    format!(
        "Package: {name}\nVersion: {version}\nArchitecture: {arch}\nFilename: pool/main/{c}/{name}/{name}_{version}_{arch}.deb\n",
        c = &name[..1]
    )
}

fn generate(root: &Path) -> Result<String> {
    let use_case = GenerateWebindexUseCase::new(FileSystemScanner::new(), SilentReporter);
    let request = WebindexRequest::new(root.to_path_buf(), "aptly-webindex".to_string());
    let response = use_case.execute(request)?;
    HtmlFormatter::new().format(&response.distributions, &response.metadata)
}

#[test]
fn test_two_distributions_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let stable = format!(
        "{}\n{}",
        stanza("tool", "1.0-1", "amd64"),
        stanza("tool", "1.0-2", "amd64")
    );
    let unstable = format!(
        "{}\n{}",
        stanza("tool", "1.1-1", "amd64"),
        stanza("tool", "1.1~rc1-1", "amd64")
    );
    write_index(temp_dir.path(), "stable", "amd64", &stable);
    write_index(temp_dir.path(), "unstable", "amd64", &unstable);

    let html = generate(temp_dir.path()).unwrap();

    // Two tables, one anchor per distribution.
    assert_eq!(html.matches("<table>").count(), 2);
    assert!(html.contains("<tr id=\"stable\">"));
    assert!(html.contains("<tr id=\"unstable\">"));
    assert!(html.contains("Distribution: stable"));
    assert!(html.contains("Distribution: unstable"));

    // One data row each: two header rows + one body row per table.
    assert_eq!(html.matches("<tr").count(), 6);

    // Correct newest/older split per distribution.
    assert!(html.contains("<td class=\"centered\">1.0-2</td>"));
    assert!(html.contains("<td class=\"versions\">1.0-1</td>"));
    assert!(html.contains("<td class=\"centered\">1.1-1</td>"));
    assert!(html.contains("<td class=\"versions\">1.1~rc1-1</td>"));

    // Navigation links both distributions.
    assert!(html.contains("<a href=\"#stable\" class=\"mono\">stable</a>"));
    assert!(html.contains("<a href=\"#unstable\" class=\"mono\">unstable</a>"));
}

#[test]
fn test_multi_architecture_artifacts_linked() {
    let temp_dir = TempDir::new().unwrap();
    write_index(
        temp_dir.path(),
        "stable",
        "amd64",
        &stanza("htop", "3.2.2-2", "amd64"),
    );
    write_index(
        temp_dir.path(),
        "stable",
        "arm64",
        &stanza("htop", "3.2.2-2", "arm64"),
    );

    let html = generate(temp_dir.path()).unwrap();

    assert!(html.contains(
        "<a href=\"pool/main/h/htop/htop_3.2.2-2_amd64.deb\">amd64</a> | \
         <a href=\"pool/main/h/htop/htop_3.2.2-2_arm64.deb\">arm64</a>"
    ));
    // Package name links to the shared pool directory.
    assert!(html.contains("<a href=\"pool/main/h/htop\">htop</a>"));
}

#[test]
fn test_arch_all_package_not_duplicated() {
    let temp_dir = TempDir::new().unwrap();
    let doc_stanza = "Package: docs\nVersion: 1.0\nArchitecture: all\nFilename: pool/main/d/docs/docs_1.0_all.deb\n";
    write_index(temp_dir.path(), "stable", "amd64", doc_stanza);
    write_index(temp_dir.path(), "stable", "arm64", doc_stanza);

    let html = generate(temp_dir.path()).unwrap();

    // Same (all, filename) pair from both indexes renders as one link.
    assert_eq!(
        html.matches("pool/main/d/docs/docs_1.0_all.deb").count(),
        1
    );
}

#[test]
fn test_empty_repository_renders_empty_document() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("dists")).unwrap();

    let html = generate(temp_dir.path()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>aptly-webindex</h1>"));
    assert_eq!(html.matches("<table>").count(), 0);
}

#[test]
fn test_missing_dists_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    let result = generate(temp_dir.path());

    assert!(result.is_err());
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("dists/ directory not found"));
}

#[test]
fn test_malformed_index_fails_without_partial_output() {
    let temp_dir = TempDir::new().unwrap();
    write_index(temp_dir.path(), "stable", "amd64", "Package: broken\n");

    let result = generate(temp_dir.path());

    assert!(result.is_err());
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("Malformed Packages index"));
}

#[test]
fn test_hostile_package_name_is_escaped() {
    let temp_dir = TempDir::new().unwrap();
    let content = "Package: x<img src=a>&y\nVersion: 1.0\nArchitecture: amd64\nFilename: pool/main/x/x/x_1.0_amd64.deb\n";
    write_index(temp_dir.path(), "stable", "amd64", content);

    let html = generate(temp_dir.path()).unwrap();

    assert!(html.contains("x&lt;img src=a&gt;&amp;y"));
    assert!(!html.contains("<img src=a>"));
}
