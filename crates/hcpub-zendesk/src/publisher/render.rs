//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Render CommonMark to HTML without extensions.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
