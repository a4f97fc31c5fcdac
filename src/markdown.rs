//! Markdown transcoder – converts raw Markdown text into an HTML string.
//!
//! Thin wrapper over `pulldown-cmark` with the default CommonMark rule set:
//! `#`/`##`/`###` headings, blank-line-separated paragraphs, and `-`/`*`/
//! `1.` list lines are all this pipeline consumes downstream. Malformed
//! input never fails; it renders best-effort per the CommonMark grammar.

use pulldown_cmark::{html, Parser};

/// Render Markdown to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new(text);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
