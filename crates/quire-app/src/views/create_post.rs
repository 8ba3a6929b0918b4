use dioxus::prelude::*;
use quire_browser::{DraftStore, LocalDraftStore, Notify, PostPayload};

use crate::Route;
use crate::api;
use crate::components::{PostForm, use_notifications};

/// New post page. Restores any stored draft and publishes through the API.
#[component]
pub fn CreatePost() -> Element {
    let notifications = use_notifications();
    let navigator = use_navigator();
    let mut busy = use_signal(|| false);
    let mut reset_after_submit = use_signal(|| false);

    let initial_post = use_hook(|| match LocalDraftStore::default().load() {
        Ok(draft) => draft,
        Err(e) => {
            tracing::warn!("discarding unreadable draft: {e}");
            None
        }
    });

    let on_submit = {
        let notifications = notifications.clone();
        move |payload: PostPayload| {
            if busy() {
                return;
            }
            let notifications = notifications.clone();
            busy.set(true);
            spawn(async move {
                let result = api::create_post(&payload).await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        tracing::info!(slug = %payload.slug, "post created");
                        notifications.success("Post created!");
                        reset_after_submit.set(true);
                        navigator.push(Route::Home {});
                    }
                    Err(e) => {
                        tracing::error!("failed to create post: {e}");
                        notifications.error(&e.to_string());
                    }
                }
            });
        }
    };

    rsx! {
        document::Title { "Create Post" }
        section { class: "create-post",
            h1 { "Create Post" }
            PostForm {
                initial_post,
                busy: busy(),
                post_btn_title: "Post".to_string(),
                on_submit,
                reset_after_submit,
                notifications,
            }
        }
    }
}
