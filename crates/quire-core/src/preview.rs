//! Markdown to HTML for the post preview.

use pulldown_cmark::{Options, Parser, html};

fn md_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Render post content the way readers will see it.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, md_options());
    let mut html_buf = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut html_buf, parser);
    html_buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MARKDOWN_RULES, image_markdown};

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(
            render_markdown("# Title\n\nSome *text*."),
            "<h1>Title</h1>\n<p>Some <em>text</em>.</p>\n"
        );
    }

    #[test]
    fn test_copied_image_reference_renders_as_image() {
        let html = render_markdown(&image_markdown("https://img.example/a.png"));
        assert!(html.contains(r#"<img src="https://img.example/a.png" alt="add image description" />"#));
    }

    #[test]
    fn test_hint_examples_are_valid_markdown() {
        let quote = MARKDOWN_RULES.iter().find(|r| r.title == "Blockquote").unwrap();
        assert!(render_markdown(quote.rule).starts_with("<blockquote>"));
        let link = MARKDOWN_RULES.iter().find(|r| r.title == "Link").unwrap();
        assert!(render_markdown(link.rule).contains(r#"<a href="http://your_link.com">Link Text</a>"#));
    }
}
