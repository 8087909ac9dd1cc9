//! Capability for obtaining raw documentation content.
//!
//! The engine itself performs no I/O; a [`ContentSource`] implementation
//! (typically backed by the GitHub contents API and the raw file endpoint)
//! hands it the markdown text to render. Retrieval latency, caching and
//! retries are the implementation's business, not the engine's.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for content retrieval.
#[derive(Debug, Error)]
pub enum SourceError {
  /// The requested entry does not exist in the repository.
  #[error("entry not found: {0}")]
  NotFound(String),

  /// The source could not be reached or answered with an error.
  #[error("source unavailable: {0}")]
  Unavailable(String),
}

/// Kind of a repository entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
  File,
  Directory,
}

/// A single entry in a repository directory listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceEntry {
  /// Entry name, e.g. `overview.md`.
  pub name: String,
  /// Full repository path, e.g. `doc/overview.md`.
  pub path: String,
  /// Whether the entry is a file or a directory.
  pub kind: EntryKind,
}

/// Access to the documented repository's contents.
pub trait ContentSource {
  /// List the entries of a directory.
  ///
  /// # Errors
  ///
  /// Returns [`SourceError`] if the path does not exist or the source is
  /// unreachable. Callers rendering a page typically treat any error as an
  /// empty listing.
  fn list_entries(&self, path: &str) -> Result<Vec<SourceEntry>, SourceError>;

  /// Read a file as text.
  ///
  /// # Errors
  ///
  /// Returns [`SourceError`] if the path does not exist or the source is
  /// unreachable. An empty string is a valid result and renders as the
  /// portal's placeholder state.
  fn read_file(&self, path: &str) -> Result<String, SourceError>;
}
