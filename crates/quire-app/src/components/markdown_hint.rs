use dioxus::prelude::*;
use quire_browser::{MARKDOWN_GUIDE_URL, MARKDOWN_RULES};

/// Cheat sheet of common markdown, shown beside the content editor.
#[component]
pub fn MarkdownHint() -> Element {
    let mut entered = use_signal(|| false);
    use_effect(move || entered.set(true));

    rsx! {
        aside {
            class: if entered() { "markdown-hint markdown-hint-entered" } else { "markdown-hint" },
            h2 { class: "markdown-hint-title", "General Markdown Rules" }
            ul { class: "markdown-hint-list",
                for rule in MARKDOWN_RULES {
                    li { key: "{rule.title}", class: "markdown-hint-item",
                        p { class: "markdown-hint-name", "{rule.title}" }
                        code { "{rule.rule}" }
                    }
                }
                li { class: "markdown-hint-item",
                    a {
                        href: MARKDOWN_GUIDE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Find out more"
                    }
                }
            }
        }
    }
}
