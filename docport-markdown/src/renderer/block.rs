//! Line-scanning block recognizer.
//!
//! A single top-to-bottom pass over the document's lines, producing typed
//! block nodes. Grouping of multi-line constructs (fenced code, lists,
//! tables) happens here, in one place, instead of being reconstructed from
//! independent whole-document passes. Inline markup inside the blocks is
//! untouched at this stage.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::utils::never_matching_regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(#{1,6})\s+(.+)$").unwrap_or_else(|e| {
    warn!("Failed to compile HEADING_RE regex: {e}");
    never_matching_regex()
  })
});

static UNORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*[-*]\s+(.+)$").unwrap_or_else(|e| {
    warn!("Failed to compile UNORDERED_ITEM_RE regex: {e}");
    never_matching_regex()
  })
});

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*\d+\.\s+(.+)$").unwrap_or_else(|e| {
    warn!("Failed to compile ORDERED_ITEM_RE regex: {e}");
    never_matching_regex()
  })
});

static SEPARATOR_CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^:?-+:?$").unwrap_or_else(|e| {
    warn!("Failed to compile SEPARATOR_CELL_RE regex: {e}");
    never_matching_regex()
  })
});

/// A block-level construct recognized by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block {
  /// `#`-prefixed heading line. Text is trimmed, markup not yet parsed.
  Heading { level: u8, text: String },
  /// Fenced code block. Body is verbatim, leading/trailing blank lines
  /// removed.
  CodeFence {
    language: Option<String>,
    body:     String,
  },
  /// A single `> `-prefixed line. Consecutive quote lines stay separate
  /// blocks; merging them is deliberately out of scope.
  Blockquote { text: String },
  /// A run of consecutive bullet or numbered lines. The first item decides
  /// whether the list is ordered.
  List { ordered: bool, items: Vec<String> },
  /// A line that is exactly `---`.
  Rule,
  /// A run of consecutive pipe-delimited lines. The separator row is
  /// already dropped; `header` is `None` when the run opened with one.
  Table {
    header: Option<Vec<String>>,
    rows:   Vec<Vec<String>>,
  },
  /// Any other non-blank line.
  Paragraph { text: String },
}

/// Scan a document into block nodes.
pub(crate) fn scan(content: &str) -> Vec<Block> {
  let lines: Vec<&str> = content.lines().collect();
  let mut blocks = Vec::new();
  let mut i = 0;

  while i < lines.len() {
    let line = lines[i];
    let trimmed = line.trim();

    if trimmed.is_empty() {
      i += 1;
      continue;
    }

    if let Some(tag) = trimmed.strip_prefix("```") {
      let (block, next) = scan_code_fence(&lines, i, tag);
      blocks.push(block);
      i = next;
      continue;
    }

    if trimmed == "---" {
      blocks.push(Block::Rule);
      i += 1;
      continue;
    }

    if let Some(caps) = HEADING_RE.captures(line) {
      let level = u8::try_from(caps[1].len()).unwrap_or(6);
      blocks.push(Block::Heading {
        level,
        text: caps[2].trim().to_string(),
      });
      i += 1;
      continue;
    }

    if let Some(rest) = trimmed.strip_prefix('>') {
      if rest.starts_with(char::is_whitespace) {
        blocks.push(Block::Blockquote {
          text: rest.trim_start().to_string(),
        });
        i += 1;
        continue;
      }
    }

    if is_table_line(trimmed) {
      let (block, next) = scan_table(&lines, i);
      blocks.push(block);
      i = next;
      continue;
    }

    if let Some((ordered, item)) = list_item(line) {
      let mut items = vec![item];
      let mut j = i + 1;
      while let Some((_, next_item)) = lines.get(j).and_then(|l| list_item(l))
      {
        items.push(next_item);
        j += 1;
      }
      blocks.push(Block::List { ordered, items });
      i = j;
      continue;
    }

    blocks.push(Block::Paragraph {
      text: trimmed.to_string(),
    });
    i += 1;
  }

  blocks
}

/// Consume a fenced code block starting at `start`. Returns the block and
/// the index of the first line after it.
fn scan_code_fence(lines: &[&str], start: usize, tag: &str) -> (Block, usize) {
  let language = {
    let tag = tag.trim();
    (!tag.is_empty()).then(|| tag.to_string())
  };

  let mut end = start + 1;
  let mut closed = false;
  while end < lines.len() {
    if lines[end].trim_start().starts_with("```") {
      closed = true;
      break;
    }
    end += 1;
  }
  if !closed {
    warn!(
      "unterminated code fence at line {}; consuming the rest of the document",
      start + 1
    );
  }

  let mut body = &lines[start + 1..end];
  while body.first().is_some_and(|l| l.trim().is_empty()) {
    body = &body[1..];
  }
  while body.last().is_some_and(|l| l.trim().is_empty()) {
    body = &body[..body.len() - 1];
  }

  let block = Block::CodeFence {
    language,
    body: body.join("\n"),
  };
  (block, if closed { end + 1 } else { end })
}

/// Consume a run of table lines starting at `start`.
///
/// The first non-separator line of the run is the header, unless the run
/// opened with a separator row, in which case every line is a body row.
/// Separator rows are dropped wherever they appear.
fn scan_table(lines: &[&str], start: usize) -> (Block, usize) {
  let mut header = None;
  let mut rows = Vec::new();
  let mut expect_header = true;
  let mut i = start;

  while i < lines.len() {
    let trimmed = lines[i].trim();
    if !is_table_line(trimmed) {
      break;
    }
    let cells = split_cells(trimmed);
    if cells.is_empty() {
      i += 1;
      continue;
    }
    if is_separator_row(&cells) {
      expect_header = false;
    } else if expect_header {
      header = Some(cells);
      expect_header = false;
    } else {
      rows.push(cells);
    }
    i += 1;
  }

  (Block::Table { header, rows }, i)
}

/// A table line starts and ends with a pipe after trimming.
fn is_table_line(trimmed: &str) -> bool {
  trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a table line into cells, dropping empty trim results.
fn split_cells(trimmed: &str) -> Vec<String> {
  trimmed
    .split('|')
    .map(str::trim)
    .filter(|cell| !cell.is_empty())
    .map(ToString::to_string)
    .collect()
}

/// A separator row consists solely of `:?-+:?` cells.
fn is_separator_row(cells: &[String]) -> bool {
  cells.iter().all(|cell| SEPARATOR_CELL_RE.is_match(cell))
}

/// Match a bullet (`-`/`*`) or numbered (`1.`) list item line.
fn list_item(line: &str) -> Option<(bool, String)> {
  if let Some(caps) = UNORDERED_ITEM_RE.captures(line) {
    return Some((false, caps[1].to_string()));
  }
  if let Some(caps) = ORDERED_ITEM_RE.captures(line) {
    return Some((true, caps[1].to_string()));
  }
  None
}
