//! Types for the docport-markdown public API.
use serde::{Deserialize, Serialize};

/// Represents a heading in a Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Heading text with the `#` prefix and surrounding whitespace removed.
  pub text:  String,
  /// Heading level (1-6).
  pub level: u8,
  /// Anchor id derived from the heading text, used both as the `id`
  /// attribute of the rendered element and as the navigation target.
  pub id:    String,
}

/// Result of rendering a Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderResult {
  /// Rendered HTML fragment.
  pub html: String,

  /// Headings in document order (for the ToC sidebar, navigation, etc).
  pub headings: Vec<Heading>,

  /// Title of the document, if found (first H1).
  pub title: Option<String>,
}

/// Identity of the remote repository that relative documentation links
/// resolve against.
///
/// Rendered pages are served from a different base path than the tracked
/// repository, so repository-relative links must be rewritten to the remote
/// blob viewer under `https://<host>/<owner>/<repo>/blob/<branch>/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoLocation {
  /// Host of the remote viewer, e.g. `github.com`.
  pub host:   String,
  /// Repository owner or organization.
  pub owner:  String,
  /// Repository name.
  pub repo:   String,
  /// Branch the documentation tracks.
  pub branch: String,
}

impl RepoLocation {
  /// Create a location for a repository on `github.com`, branch `main`.
  #[must_use]
  pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
    Self {
      host:   "github.com".to_string(),
      owner:  owner.into(),
      repo:   repo.into(),
      branch: "main".to_string(),
    }
  }

  /// Base URL of the remote blob viewer for this repository.
  #[must_use]
  pub fn blob_base(&self) -> String {
    format!(
      "https://{}/{}/{}/blob/{}",
      self.host, self.owner, self.repo, self.branch
    )
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::RepoLocation;

  #[test]
  fn test_blob_base() {
    let repo = RepoLocation::new("Alliance-Algorithm", "rmcs_auto_aim_v2");
    assert_eq!(
      repo.blob_base(),
      "https://github.com/Alliance-Algorithm/rmcs_auto_aim_v2/blob/main"
    );
  }

  #[test]
  fn test_repo_location_roundtrip() {
    let repo = RepoLocation {
      host:   "codeberg.org".to_string(),
      owner:  "o".to_string(),
      repo:   "r".to_string(),
      branch: "dev".to_string(),
    };
    let json = serde_json::to_string(&repo).unwrap();
    let back: RepoLocation = serde_json::from_str(&json).unwrap();
    assert_eq!(repo, back);
  }
}
