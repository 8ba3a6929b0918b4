use dioxus::prelude::*;
use quire_browser::{DraftStore, LocalDraftStore};

use crate::{CONFIG, Route};

#[component]
pub fn Home() -> Element {
    let draft = use_hook(|| match LocalDraftStore::default().load() {
        Ok(draft) => draft,
        Err(e) => {
            tracing::warn!("could not read stored draft: {e}");
            None
        }
    });

    rsx! {
        document::Title { "{CONFIG.app_name}" }
        section { class: "home",
            h1 { "{CONFIG.app_name}" }
            match draft {
                Some(draft) if !draft.title.is_empty() => rsx! {
                    p { class: "home-draft", "You have an unfinished draft: " strong { "{draft.title}" } }
                    Link { to: Route::CreatePost {}, class: "button button-primary", "Continue writing" }
                },
                Some(_) => rsx! {
                    p { class: "home-draft", "You have an unfinished draft." }
                    Link { to: Route::CreatePost {}, class: "button button-primary", "Continue writing" }
                },
                None => rsx! {
                    p { "Nothing in progress." }
                    Link { to: Route::CreatePost {}, class: "button button-primary", "Write a post" }
                },
            }
        }
    }
}
