//! Small helpers shared across the rendering pipeline.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

static NON_ANCHOR_CHARS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[^\w\s-]").unwrap_or_else(|e| {
    error!("Failed to compile NON_ANCHOR_CHARS regex: {e}");
    never_matching_regex()
  })
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\s+").unwrap_or_else(|e| {
    error!("Failed to compile WHITESPACE_RUN regex: {e}");
    never_matching_regex()
  })
});

/// Derive a URL-fragment-safe anchor id from heading text.
///
/// Lowercases the text, strips every character outside word characters,
/// whitespace and `-`, then collapses whitespace runs into single hyphens.
/// The same heading text always yields the same id, and both the renderer
/// and [`crate::extract_headings`] call this exact function, so in-document
/// anchors and the navigation outline can never drift apart.
#[must_use]
pub fn anchor_id(text: &str) -> String {
  let lowered = text.to_lowercase();
  let stripped = NON_ANCHOR_CHARS.replace_all(&lowered, "");
  WHITESPACE_RUN.replace_all(stripped.trim(), "-").into_owned()
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a static pattern fails to compile. Matching
/// nothing degrades the affected transformation to a no-op, which is safer
/// than failing the whole render.
///
/// # Panics
///
/// Panics if the pattern `[^\s\S]` fails to compile, which cannot happen.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "The pattern is a constant and always valid"
  )]
  Regex::new(r"[^\s\S]").expect("never-matching regex should compile")
}
