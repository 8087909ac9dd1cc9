//! Rewriting of repository-relative link targets.
//!
//! Documentation files live in a subdirectory of the tracked repository and
//! link to sibling sources via relative paths (`../src/...`). Those paths
//! are meaningless from the portal's base path, so they are rewritten to the
//! canonical remote blob viewer. Absolute URLs and in-page anchors pass
//! through untouched.

use std::borrow::Cow;

use crate::types::RepoLocation;

/// Resolves link targets against a fixed [`RepoLocation`].
#[derive(Debug, Clone)]
pub struct LinkResolver {
  repo: RepoLocation,
}

impl LinkResolver {
  /// Create a resolver for the given repository.
  #[must_use]
  pub const fn new(repo: RepoLocation) -> Self {
    Self { repo }
  }

  /// The repository this resolver rewrites links into.
  #[must_use]
  pub const fn repo(&self) -> &RepoLocation {
    &self.repo
  }

  /// Resolve a single link target.
  ///
  /// Absolute URLs (`http://`, `https://`), protocol-relative URLs (`//`)
  /// and in-page anchors (`#`) are returned unchanged. A `../src/` prefix is
  /// rewritten under the blob viewer's `src/` tree; any other `../` prefix
  /// is stripped exactly once and rewritten under the repository root.
  /// Everything else is left alone.
  #[must_use]
  pub fn resolve<'a>(&self, url: &'a str) -> Cow<'a, str> {
    if url.starts_with("http://")
      || url.starts_with("https://")
      || url.starts_with("//")
      || url.starts_with('#')
    {
      return Cow::Borrowed(url);
    }

    if let Some(rest) = url.strip_prefix("../src/") {
      return Cow::Owned(format!("{}/src/{rest}", self.repo.blob_base()));
    }

    if let Some(rest) = url.strip_prefix("../") {
      return Cow::Owned(format!("{}/{rest}", self.repo.blob_base()));
    }

    Cow::Borrowed(url)
  }
}
