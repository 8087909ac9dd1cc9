//! Navigation outline extraction.

use crate::{
  renderer::block::{self, Block},
  types::Heading,
  utils::anchor_id,
};

/// Extract the ordered heading outline of a document.
///
/// Document order is preserved; levels are never sorted. The same block
/// scanner and anchor-id derivation back both this function and
/// [`crate::MarkdownRenderer::render`], so every entry returned here has a
/// matching `id` attribute in the rendered HTML of the same document. In
/// particular, `#` lines inside fenced code blocks are not headings on
/// either side.
#[must_use]
pub fn extract_headings(content: &str) -> Vec<Heading> {
  block::scan(content)
    .into_iter()
    .filter_map(|block| match block {
      Block::Heading { level, text } => Some(Heading {
        id: anchor_id(&text),
        text,
        level,
      }),
      _ => None,
    })
    .collect()
}
