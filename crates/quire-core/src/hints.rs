//! Markdown syntax reference shown next to the content field.

/// One entry of the reference panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkdownRule {
    pub title: &'static str,
    pub rule: &'static str,
}

pub const MARKDOWN_RULES: &[MarkdownRule] = &[
    MarkdownRule {
        title: "From h1 to h6",
        rule: "# Heading -> ###### Heading",
    },
    MarkdownRule {
        title: "Blockquote",
        rule: "> Your Quote",
    },
    MarkdownRule {
        title: "Image",
        rule: "![image alt](http://image_url.com)",
    },
    MarkdownRule {
        title: "Link",
        rule: "[Link Text](http://your_link.com)",
    },
];

/// Where "Find out more" points.
pub const MARKDOWN_GUIDE_URL: &str = "https://www.markdownguide.org/basic-syntax/";
