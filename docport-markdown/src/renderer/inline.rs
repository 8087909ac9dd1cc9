//! Inline span parsing and rendering.
//!
//! Phase one parses a run of inline-eligible text into typed nodes in a
//! single left-to-right scan; phase two renders each node. Link text and
//! targets are captured as nodes before any emphasis interpretation, so
//! underscores or asterisks inside them can never be mistaken for emphasis
//! markers. Raw text is entity-escaped exactly once, when a text node is
//! rendered.

use std::fmt::Write as _;

use crate::resolver::LinkResolver;

/// An inline construct. Emphasis nodes carry parsed children so links and
/// code spans survive inside them; link and code contents stay verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Inline {
  Text(String),
  Code(String),
  Em(Vec<Inline>),
  Strong(Vec<Inline>),
  StrongEm(Vec<Inline>),
  Image { alt: String, url: String },
  Link { text: String, url: String },
}

/// Parse a run of text into inline nodes.
pub(crate) fn parse_inlines(text: &str) -> Vec<Inline> {
  let mut nodes = Vec::new();
  let mut plain = String::new();
  let mut i = 0;

  while i < text.len() {
    let rest = &text[i..];
    let Some(c) = rest.chars().next() else { break };

    let matched = match c {
      '`' => match_code_span(rest),
      '!' => match_image(rest),
      '[' => match_link(rest),
      '*' | '_' => match_emphasis(rest, c),
      _ => None,
    };

    if let Some((node, len)) = matched {
      if !plain.is_empty() {
        nodes.push(Inline::Text(std::mem::take(&mut plain)));
      }
      nodes.push(node);
      i += len;
    } else {
      plain.push(c);
      i += c.len_utf8();
    }
  }

  if !plain.is_empty() {
    nodes.push(Inline::Text(plain));
  }
  nodes
}

/// Render inline nodes to HTML. Link targets go through the resolver here,
/// in the final phase, so no earlier pass can re-interpret link text as
/// markup.
pub(crate) fn render_inlines(
  nodes: &[Inline],
  resolver: &LinkResolver,
) -> String {
  let mut html = String::new();
  for node in nodes {
    match node {
      Inline::Text(text) => {
        html.push_str(&html_escape::encode_text(text));
      },
      Inline::Code(code) => {
        let _ = write!(html, "<code>{}</code>", html_escape::encode_text(code));
      },
      Inline::Em(children) => {
        let _ =
          write!(html, "<em>{}</em>", render_inlines(children, resolver));
      },
      Inline::Strong(children) => {
        let _ = write!(
          html,
          "<strong>{}</strong>",
          render_inlines(children, resolver)
        );
      },
      Inline::StrongEm(children) => {
        let _ = write!(
          html,
          "<strong><em>{}</em></strong>",
          render_inlines(children, resolver)
        );
      },
      // Image sources are deliberately not resolved; existing documents
      // rely on the raw src passing through as written.
      Inline::Image { alt, url } => {
        let _ = write!(
          html,
          "<img src=\"{}\" alt=\"{}\">",
          html_escape::encode_double_quoted_attribute(url),
          html_escape::encode_double_quoted_attribute(alt)
        );
      },
      Inline::Link { text, url } => {
        let resolved = resolver.resolve(url);
        let _ = write!(
          html,
          "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
          html_escape::encode_double_quoted_attribute(resolved.as_ref()),
          html_escape::encode_text(text)
        );
      },
    }
  }
  html
}

/// Match a single-backtick code span at the start of `rest`.
fn match_code_span(rest: &str) -> Option<(Inline, usize)> {
  let after = rest.strip_prefix('`')?;
  let end = after.find('`')?;
  let content = &after[..end];
  if content.is_empty() || content.contains('\n') {
    return None;
  }
  Some((Inline::Code(content.to_string()), end + 2))
}

/// Match `![alt](url)` at the start of `rest`. Alt text may be empty.
fn match_image(rest: &str) -> Option<(Inline, usize)> {
  let after = rest.strip_prefix('!')?;
  let (alt, url, len) = match_bracket_span(after, true)?;
  Some((Inline::Image { alt, url }, len + 1))
}

/// Match `[text](url)` at the start of `rest`.
fn match_link(rest: &str) -> Option<(Inline, usize)> {
  let (text, url, len) = match_bracket_span(rest, false)?;
  Some((Inline::Link { text, url }, len))
}

/// Match a `[..](..)` span: bracketed non-bracket text followed directly by
/// parenthesized non-paren text. Returns the two parts and the consumed
/// length.
fn match_bracket_span(
  rest: &str,
  allow_empty_text: bool,
) -> Option<(String, String, usize)> {
  let after_open = rest.strip_prefix('[')?;
  let close = after_open.find(']')?;
  let text = &after_open[..close];
  if text.contains('[') || text.contains('\n') {
    return None;
  }
  if text.is_empty() && !allow_empty_text {
    return None;
  }

  let after_text = &after_open[close + 1..];
  let after_paren = after_text.strip_prefix('(')?;
  let close_paren = after_paren.find(')')?;
  let url = &after_paren[..close_paren];
  if url.is_empty() || url.contains('\n') {
    return None;
  }

  // '[' + text + ']' + '(' + url + ')'
  let len = 1 + close + 1 + 1 + close_paren + 1;
  Some((text.to_string(), url.to_string(), len))
}

/// Match an emphasis span opened by `delim` (`*` or `_`). Tries the triple
/// marker first, then double, then single, each with the nearest closing
/// marker. Content is parsed recursively.
fn match_emphasis(rest: &str, delim: char) -> Option<(Inline, usize)> {
  for width in [3usize, 2, 1] {
    let marker: String = delim.to_string().repeat(width);
    let Some(after) = rest.strip_prefix(&marker) else {
      continue;
    };
    let Some(end) = after.find(&marker) else {
      continue;
    };
    let content = &after[..end];
    if content.is_empty() || content.contains('\n') {
      continue;
    }
    let children = parse_inlines(content);
    let node = match width {
      3 => Inline::StrongEm(children),
      2 => Inline::Strong(children),
      _ => Inline::Em(children),
    };
    return Some((node, end + 2 * width));
  }
  None
}
