use dioxus::prelude::*;
use quire_browser::render_markdown;

/// Full-screen rendering of the post as readers will see it.
#[component]
pub fn PostPreview(
    title: String,
    content: String,
    thumbnail: Option<String>,
    on_close: EventHandler<()>,
) -> Element {
    let html = render_markdown(&content);
    rsx! {
        div { class: "post-preview-backdrop",
            article { class: "post-preview",
                button {
                    class: "post-preview-close",
                    r#type: "button",
                    aria_label: "Close preview",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                if let Some(url) = thumbnail {
                    img { class: "post-preview-thumbnail", src: "{url}", alt: "" }
                }
                h1 { class: "post-preview-title", "{title}" }
                div { class: "post-preview-body", dangerous_inner_html: "{html}" }
            }
        }
    }
}
