//! Markdown rendering pipeline.
//!
//! The pipeline is two phases over typed nodes: [`block`] scans the
//! document's lines into block nodes, [`inline`] parses inline-eligible text
//! spans of each block and renders them. The renderer is a pure function of
//! its input; malformed markup degrades into literal text instead of
//! failing the render.

pub(crate) mod block;
pub(crate) mod inline;

use std::fmt::Write as _;

use log::trace;

use self::block::Block;
use crate::{
  resolver::LinkResolver,
  types::{Heading, RenderResult, RepoLocation},
  utils::anchor_id,
};

/// Renders Markdown documents into HTML fragments for the portal.
///
/// Holds no per-document state; one renderer serves any number of documents
/// and identical input always produces identical output.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
  resolver: LinkResolver,
}

impl MarkdownRenderer {
  /// Create a renderer whose relative links resolve against `repo`.
  #[must_use]
  pub const fn new(repo: RepoLocation) -> Self {
    Self {
      resolver: LinkResolver::new(repo),
    }
  }

  /// The link resolver used for anchor targets.
  #[must_use]
  pub const fn resolver(&self) -> &LinkResolver {
    &self.resolver
  }

  /// Render a document to an HTML fragment.
  ///
  /// `current_path` is the document's repository path; empty or
  /// whitespace-only content yields an empty fragment, which the portal
  /// shows as its placeholder state.
  #[must_use]
  pub fn render(&self, content: &str, current_path: &str) -> RenderResult {
    if content.trim().is_empty() {
      trace!("no content for {current_path}; rendering empty fragment");
      return RenderResult {
        html:     String::new(),
        headings: Vec::new(),
        title:    None,
      };
    }

    let blocks = block::scan(content);
    let mut headings = Vec::new();
    let mut title = None;
    let mut fragments = Vec::with_capacity(blocks.len());

    for block in &blocks {
      if let Block::Heading { level, text } = block {
        let heading = Heading {
          text:  text.clone(),
          level: *level,
          id:    anchor_id(text),
        };
        if title.is_none() && *level == 1 {
          title = Some(text.clone());
        }
        headings.push(heading);
      }
      fragments.push(self.render_block(block));
    }

    trace!(
      "rendered {current_path}: {} blocks, {} headings",
      blocks.len(),
      headings.len()
    );

    RenderResult {
      html: fragments.join("\n"),
      headings,
      title,
    }
  }

  fn render_block(&self, block: &Block) -> String {
    match block {
      Block::Heading { level, text } => {
        // The id must come from the raw heading text, the same input
        // extract_headings sees, or the sidebar and the document drift.
        let id = anchor_id(text);
        format!(
          "<h{level} id=\"{id}\" class=\"scroll-mt-20\">{}</h{level}>",
          self.render_inline_text(text)
        )
      },
      Block::CodeFence { language, body } => {
        let class = language
          .as_ref()
          .map_or(String::new(), |lang| format!(" class=\"language-{lang}\""));
        format!(
          "<pre><code{class}>{}</code></pre>",
          html_escape::encode_text(body)
        )
      },
      Block::Blockquote { text } => {
        format!("<blockquote>{}</blockquote>", self.render_inline_text(text))
      },
      Block::List { ordered, items } => {
        let tag = if *ordered { "ol" } else { "ul" };
        let mut html = format!("<{tag}>\n");
        for item in items {
          let _ = writeln!(html, "<li>{}</li>", self.render_inline_text(item));
        }
        let _ = write!(html, "</{tag}>");
        html
      },
      Block::Rule => "<hr>".to_string(),
      Block::Table { header, rows } => {
        self.render_table(header.as_deref(), rows)
      },
      Block::Paragraph { text } => {
        format!("<p>{}</p>", self.render_inline_text(text))
      },
    }
  }

  fn render_table(
    &self,
    header: Option<&[String]>,
    rows: &[Vec<String>],
  ) -> String {
    let mut html = String::from("<table>\n");
    if let Some(cells) = header {
      html.push_str("<thead>\n<tr>");
      for cell in cells {
        let _ = write!(html, "<th>{}</th>", self.render_inline_text(cell));
      }
      html.push_str("</tr>\n</thead>\n");
    }
    if !rows.is_empty() {
      html.push_str("<tbody>\n");
      for row in rows {
        html.push_str("<tr>");
        for cell in row {
          let _ = write!(html, "<td>{}</td>", self.render_inline_text(cell));
        }
        html.push_str("</tr>\n");
      }
      html.push_str("</tbody>\n");
    }
    html.push_str("</table>");
    html
  }

  fn render_inline_text(&self, text: &str) -> String {
    inline::render_inlines(&inline::parse_inlines(text), &self.resolver)
  }
}
