//! # docport-markdown
//!
//! Markdown rendering engine for the docport documentation portal. Turns
//! raw Markdown fetched from a tracked repository into a safe, navigable
//! HTML fragment with stable heading anchors, and extracts the matching
//! table-of-contents outline for the sidebar.
//!
//! ## Quick Start
//!
//! ```rust
//! use docport_markdown::{MarkdownRenderer, RepoLocation};
//!
//! let renderer = MarkdownRenderer::new(RepoLocation::new(
//!   "Alliance-Algorithm",
//!   "rmcs_auto_aim_v2",
//! ));
//! let result = renderer.render("# Hello\n\nSome **bold** text.", "doc/hello.md");
//!
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! assert_eq!(result.headings[0].id, "hello");
//! assert!(result.html.contains("<strong>bold</strong>"));
//! ```
//!
//! ## Guarantees
//!
//! - **Anchor consistency**: the ids emitted into the HTML and the ids
//!   returned by [`extract_headings`] come from one shared derivation over
//!   one shared block scan; they agree byte for byte, in document order.
//! - **Escaping safety**: raw angle brackets and ampersands in the input are
//!   always entity-escaped; only tags the engine generates reach the output
//!   unescaped.
//! - **Link protection**: `[text](url)` spans are parsed before emphasis, so
//!   underscores and asterisks inside link text or targets are never treated
//!   as markup.
//! - **Graceful degradation**: malformed markup renders as literal text;
//!   rendering never fails a page.
//!
//! Repository-relative link targets (`../src/...`) are rewritten to the
//! remote blob viewer configured via [`RepoLocation`]; see
//! [`resolver::LinkResolver`].

mod headings;
mod renderer;
pub mod resolver;
pub mod source;
mod types;
pub mod utils;

pub use crate::{
  headings::extract_headings,
  renderer::MarkdownRenderer,
  resolver::LinkResolver,
  source::{ContentSource, EntryKind, SourceEntry, SourceError},
  types::{Heading, RenderResult, RepoLocation},
};
