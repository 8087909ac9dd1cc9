#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]

use docport_markdown::{MarkdownRenderer, RepoLocation, extract_headings};

/// Pull the `id` attributes out of an HTML fragment, in document order.
fn ids_in(html: &str) -> Vec<String> {
  html
    .split("id=\"")
    .skip(1)
    .filter_map(|rest| rest.split('"').next())
    .map(ToString::to_string)
    .collect()
}

fn rendered(md: &str) -> String {
  MarkdownRenderer::new(RepoLocation::new("O", "R"))
    .render(md, "doc/test.md")
    .html
}

#[test]
fn test_document_order_not_level_order() {
  let headings = extract_headings("#### Deep\n# Shallow");
  assert_eq!(headings.len(), 2);
  assert_eq!(headings[0].level, 4);
  assert_eq!(headings[0].text, "Deep");
  assert_eq!(headings[1].level, 1);
  assert_eq!(headings[1].text, "Shallow");
}

#[test]
fn test_anchor_ids() {
  let headings = extract_headings("## Getting Started\n### What's New?");
  assert_eq!(headings[0].id, "getting-started");
  assert_eq!(headings[1].id, "whats-new");
}

#[test]
fn test_empty_input_yields_empty_outline() {
  assert!(extract_headings("").is_empty());
  assert!(extract_headings("no headings here").is_empty());
}

#[test]
fn test_fenced_code_is_not_an_outline_entry() {
  let md = "# Real\n```bash\n# just a comment\n```\n## Also real";
  let headings = extract_headings(md);
  assert_eq!(headings.len(), 2);
  assert_eq!(headings[0].text, "Real");
  assert_eq!(headings[1].text, "Also real");
}

#[test]
fn test_duplicate_heading_text_yields_same_id() {
  let headings = extract_headings("## Setup\ntext\n## Setup");
  assert_eq!(headings[0].id, "setup");
  assert_eq!(headings[1].id, "setup");
}

#[test]
fn test_outline_matches_rendered_ids() {
  let md = "# Overview!\n\npara\n\n## auto_aim v2\n\n```py\n# fence noise\n\
            ```\n\n### **Bold** heading\n\n#### C++ & CUDA\n\n## auto_aim v2";
  let outline: Vec<String> =
    extract_headings(md).into_iter().map(|h| h.id).collect();
  assert_eq!(ids_in(&rendered(md)), outline);
  assert!(!outline.is_empty());
}

#[test]
fn test_outline_matches_rendered_ids_for_plain_doc() {
  let md = "# A\n## B\n### C";
  assert_eq!(ids_in(&rendered(md)), vec!["a", "b", "c"]);
  let outline: Vec<String> =
    extract_headings(md).into_iter().map(|h| h.id).collect();
  assert_eq!(outline, vec!["a", "b", "c"]);
}

#[test]
fn test_heading_serialization_shape() {
  let heading = &extract_headings("## Getting Started")[0];
  let json = serde_json::to_value(heading).unwrap();
  assert_eq!(json["text"], "Getting Started");
  assert_eq!(json["level"], 2);
  assert_eq!(json["id"], "getting-started");
}
