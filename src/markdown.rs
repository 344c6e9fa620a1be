//! Note Markup
//!
//! Feed notes and warnings may carry inline Markdown (`**bold**`, `*italic*`,
//! `~~strike~~`). Raw HTML in a note is escaped before parsing.

use pulldown_cmark::{html::push_html, Options, Parser};

/// Render a note to inline HTML (outer <p> stripped)
pub fn render_inline(text: &str) -> String {
    let source = text.replace('<', "&lt;");
    let parser = Parser::new_ext(&source, Options::ENABLE_STRIKETHROUGH);
    let mut html = String::new();
    push_html(&mut html, parser);

    let trimmed = html.trim();
    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_emphasis() {
        assert_eq!(render_inline("**Toxic sap!** Wear gloves."), "<strong>Toxic sap!</strong> Wear gloves.");
        assert_eq!(render_inline("~~old~~ new"), "<del>old</del> new");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render_inline("Quarter dose"), "Quarter dose");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_inline("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;") || html.contains("&lt;script>"));
    }
}
