use std::{env, fs};

use docport_markdown::{MarkdownRenderer, RepoLocation, extract_headings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let path = env::args()
    .nth(1)
    .unwrap_or_else(|| "README.md".to_string());
  let content = fs::read_to_string(&path)?;

  let renderer = MarkdownRenderer::new(RepoLocation::new(
    "Alliance-Algorithm",
    "rmcs_auto_aim_v2",
  ));
  let result = renderer.render(&content, &path);

  println!("Rendered {path}");
  println!("  - Title: {:?}", result.title);
  println!("  - Headings: {}", result.headings.len());
  println!("  - HTML output length: {} characters", result.html.len());

  let outline = extract_headings(&content);
  if !outline.is_empty() {
    println!("\nOutline:");
    for heading in &outline {
      println!(
        "  {}{} -> #{}",
        "  ".repeat(usize::from(heading.level.saturating_sub(1))),
        heading.text,
        heading.id
      );
    }
  }

  println!("\n{}", result.html);
  Ok(())
}
