#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]

//! End-to-end flow: a `ContentSource` hands the engine raw markdown, the
//! engine produces the page fragment and the sidebar outline.

use std::collections::HashMap;

use docport_markdown::{
  ContentSource, EntryKind, MarkdownRenderer, RepoLocation, SourceEntry,
  SourceError, extract_headings,
};

/// In-memory stand-in for the GitHub-backed source the portal uses.
struct FixtureSource {
  files: HashMap<String, String>,
}

impl FixtureSource {
  fn new(files: &[(&str, &str)]) -> Self {
    Self {
      files: files
        .iter()
        .map(|(path, text)| ((*path).to_string(), (*text).to_string()))
        .collect(),
    }
  }
}

impl ContentSource for FixtureSource {
  fn list_entries(&self, path: &str) -> Result<Vec<SourceEntry>, SourceError> {
    let prefix = format!("{path}/");
    let mut entries: Vec<SourceEntry> = self
      .files
      .keys()
      .filter(|file| file.starts_with(&prefix))
      .map(|file| SourceEntry {
        name: file.rsplit('/').next().unwrap_or(file).to_string(),
        path: file.clone(),
        kind: EntryKind::File,
      })
      .collect();
    if entries.is_empty() {
      return Err(SourceError::NotFound(path.to_string()));
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
  }

  fn read_file(&self, path: &str) -> Result<String, SourceError> {
    self
      .files
      .get(path)
      .cloned()
      .ok_or_else(|| SourceError::NotFound(path.to_string()))
  }
}

fn fixture() -> FixtureSource {
  FixtureSource::new(&[
    (
      "doc/overview.md",
      "# Overview\n\nSee [the aim core](../src/core/aim.hpp).\n\n## Pipeline\n\n\
       | Stage | Output |\n| - | - |\n| detect | armor |\n",
    ),
    ("doc/empty.md", ""),
  ])
}

#[test]
fn test_render_page_from_source() {
  let source = fixture();
  let renderer = MarkdownRenderer::new(RepoLocation::new(
    "Alliance-Algorithm",
    "rmcs_auto_aim_v2",
  ));

  let entries = source.list_entries("doc").unwrap();
  let page = entries
    .iter()
    .find(|entry| entry.name.ends_with("overview.md"))
    .unwrap();

  let content = source.read_file(&page.path).unwrap();
  let result = renderer.render(&content, &page.path);

  assert_eq!(result.title.as_deref(), Some("Overview"));
  assert!(result.html.contains(
    "https://github.com/Alliance-Algorithm/rmcs_auto_aim_v2/blob/main/src/core/aim.hpp"
  ));
  assert!(result.html.contains("<th>Stage</th>"));

  // The sidebar outline computed separately agrees with the page.
  let outline = extract_headings(&content);
  assert_eq!(outline, result.headings);
  assert_eq!(outline[0].id, "overview");
  assert_eq!(outline[1].id, "pipeline");
}

#[test]
fn test_empty_file_renders_placeholder_state() {
  let source = fixture();
  let renderer = MarkdownRenderer::new(RepoLocation::new("O", "R"));

  let content = source.read_file("doc/empty.md").unwrap();
  let result = renderer.render(&content, "doc/empty.md");

  assert!(result.html.is_empty());
  assert!(result.headings.is_empty());
}

#[test]
fn test_missing_file_is_an_error() {
  let source = fixture();
  let err = source.read_file("doc/nope.md").unwrap_err();
  assert!(matches!(err, SourceError::NotFound(_)));
  assert_eq!(err.to_string(), "entry not found: doc/nope.md");
}

#[test]
fn test_missing_directory_is_an_error() {
  let source = fixture();
  assert!(source.list_entries("not-there").is_err());
}
