//! The post authoring form.
//!
//! All field state lives in a [`quire_browser::PostForm`], which writes the
//! draft through to local storage on every edit. This component only maps DOM
//! events onto it and renders what it holds.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaCopy, FaImage, FaSpinner};
use quire_browser::{
    DraftPost, DraftStore, ImageFile, LocalDraftStore, META_MAX_CHARS, Notifications, Notify,
    PostPayload, TextField, alert, write_clipboard_text,
};

use crate::api;
use crate::components::{MarkdownHint, PostPreview};

type FormState = quire_browser::PostForm<LocalDraftStore, Notifications>;

/// Read the first file from a file input.
///
/// The type the browser declares wins; the bytes are sniffed only when it
/// gives none.
async fn first_file(evt: Event<FormData>) -> Option<ImageFile> {
    let files = evt.files();
    let file = files.first()?;
    let name = file.name();
    let declared = file.content_type();
    match file.read_bytes().await {
        Ok(data) => Some(ImageFile::new(name, data.to_vec(), declared.as_deref())),
        Err(e) => {
            tracing::warn!("failed to read {name}: {e:?}");
            None
        }
    }
}

#[component]
pub fn PostForm(
    /// Seeds the form. Missing fields fall back to their defaults.
    #[props(default)]
    initial_post: Option<DraftPost>,
    /// Disables the submit button and shows a spinner.
    #[props(default)]
    busy: bool,
    post_btn_title: String,
    on_submit: EventHandler<PostPayload>,
    /// When true at unmount, the form and stored draft are cleared.
    reset_after_submit: ReadSignal<bool>,
    notifications: Notifications,
) -> Element {
    let mut form = use_signal(|| {
        let form = FormState::new(LocalDraftStore::default(), notifications.clone());
        match initial_post.clone() {
            Some(post) => form.with_initial_post(post),
            None => form,
        }
    });

    use_effect(use_reactive!(|initial_post| {
        if let Some(post) = initial_post {
            form.write().seed(post);
        }
    }));

    use_drop(move || {
        if !*reset_after_submit.peek() {
            return;
        }
        match form.try_write() {
            Ok(mut form) => form.reset(),
            Err(_) => LocalDraftStore::default().clear(),
        }
    });

    let on_thumbnail = move |evt: Event<FormData>| {
        spawn(async move {
            let Some(file) = first_file(evt).await else {
                return;
            };
            let selected = form.write().select_thumbnail(file);
            if let Err(e) = selected {
                alert(&e.to_string());
            }
        });
    };

    let on_inline_image = move |evt: Event<FormData>| {
        if form.peek().is_image_uploading() {
            return;
        }
        spawn(async move {
            let Some(file) = first_file(evt).await else {
                return;
            };
            let started = form.write().begin_image_upload(&file);
            if started.is_err() {
                return;
            }
            let result = api::upload_image(&file).await;
            form.write().finish_image_upload(result);
        });
    };

    let on_copy = move |_| {
        let Some(markdown) = form.peek().image_markdown() else {
            return;
        };
        let notifications = form.peek().notifier().clone();
        spawn(async move {
            match write_clipboard_text(&markdown).await {
                Ok(()) => notifications.success("Image markdown copied"),
                Err(e) => {
                    tracing::warn!("clipboard write failed: {e}");
                    notifications.error("Could not copy to clipboard");
                }
            }
        });
    };

    let on_form_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let submitted = form.peek().submit();
        if let Ok(payload) = submitted {
            on_submit.call(payload);
        }
    };

    let state = form.read();
    let draft = state.draft().clone();
    let thumbnail_url = state.selected_thumbnail_url().map(str::to_owned);
    let image_url = state.image_url_to_copy().map(str::to_owned);
    let uploading = state.is_image_uploading();
    let hint_visible = state.markdown_hint_visible();
    let preview_visible = state.preview_visible();
    let meta_len = state.meta_len();
    drop(state);

    let meta_max = META_MAX_CHARS + 1;

    rsx! {
        form { class: "post-form", onsubmit: on_form_submit,
            div { class: "post-form-main",
                label { class: "thumbnail-picker",
                    input {
                        r#type: "file",
                        class: "visually-hidden",
                        onchange: on_thumbnail,
                    }
                    if let Some(url) = thumbnail_url.clone() {
                        img { class: "thumbnail-image", src: "{url}", alt: "Thumbnail" }
                    } else {
                        div { class: "thumbnail-placeholder",
                            Icon { width: 32, height: 32, fill: "currentColor", icon: FaImage }
                            p { "Add a thumbnail" }
                            small { "1280 × 720" }
                        }
                    }
                }

                input {
                    r#type: "text",
                    class: "post-title-input",
                    name: "title",
                    placeholder: "Title",
                    value: "{draft.title}",
                    onfocus: move |_| form.write().focus(TextField::Title),
                    oninput: move |evt| form.write().update_text(TextField::Title, evt.value()),
                }

                label { class: "featured-toggle",
                    input {
                        r#type: "checkbox",
                        name: "featured",
                        checked: draft.featured,
                        onchange: move |evt| form.write().set_featured(evt.checked()),
                    }
                    "Featured"
                }

                div { class: "inline-image",
                    label { class: "inline-image-picker",
                        input {
                            r#type: "file",
                            class: "visually-hidden",
                            disabled: uploading,
                            onchange: on_inline_image,
                        }
                        if uploading {
                            Icon { class: "spin", width: 16, height: 16, fill: "currentColor", icon: FaSpinner }
                            "Uploading…"
                        } else {
                            Icon { width: 16, height: 16, fill: "currentColor", icon: FaImage }
                            "Upload image"
                        }
                    }
                    if let Some(url) = image_url {
                        div { class: "inline-image-url",
                            code { "{url}" }
                            button {
                                r#type: "button",
                                class: "icon-button",
                                aria_label: "Copy image markdown",
                                onclick: on_copy,
                                Icon { width: 16, height: 16, fill: "currentColor", icon: FaCopy }
                            }
                        }
                    }
                }

                textarea {
                    class: "post-content-input",
                    name: "content",
                    placeholder: "Write your post in markdown…",
                    value: "{draft.content}",
                    onfocus: move |_| form.write().focus(TextField::Content),
                    oninput: move |evt| form.write().update_text(TextField::Content, evt.value()),
                }

                input {
                    r#type: "text",
                    class: "post-tags-input",
                    name: "tags",
                    placeholder: "Tags, separated by commas",
                    value: "{draft.tags}",
                    onfocus: move |_| form.write().focus(TextField::Tags),
                    oninput: move |evt| form.write().update_text(TextField::Tags, evt.value()),
                }

                div { class: "post-meta",
                    textarea {
                        class: "post-meta-input",
                        name: "meta",
                        placeholder: "Meta description",
                        value: "{draft.meta}",
                        onfocus: move |_| form.write().focus(TextField::Meta),
                        oninput: move |evt| form.write().update_text(TextField::Meta, evt.value()),
                    }
                    span { class: "post-meta-counter", "{meta_len} / {meta_max}" }
                }

                div { class: "post-form-actions",
                    button {
                        r#type: "button",
                        class: "button button-secondary",
                        onclick: move |_| form.write().reset(),
                        "Reset"
                    }
                    button {
                        r#type: "button",
                        class: "button button-secondary",
                        onclick: move |_| form.write().open_preview(),
                        "View"
                    }
                    button {
                        r#type: "submit",
                        class: "button button-primary",
                        disabled: busy,
                        if busy {
                            Icon { class: "spin", width: 16, height: 16, fill: "currentColor", icon: FaSpinner }
                        } else {
                            "{post_btn_title}"
                        }
                    }
                }
            }

            if hint_visible {
                MarkdownHint {}
            }
        }

        if preview_visible {
            PostPreview {
                title: draft.title.clone(),
                content: draft.content.clone(),
                thumbnail: thumbnail_url,
                on_close: move |_| form.write().close_preview(),
            }
        }
    }
}
