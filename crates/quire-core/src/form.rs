//! Post form state machine.
//!
//! `PostForm` owns the draft and the upload transients, applies per-field
//! change rules, mirrors the draft into a `DraftStore` and reports problems
//! through a `Notify` implementation. It knows nothing about the DOM; the UI
//! layer forwards events and renders from the accessors.
//!
//! Persistence rule: every change writes the whole draft to the store except
//! selecting a thumbnail file, which has no serialized form.

use crate::draft::{DraftPost, ImageFile, TextField, Thumbnail};
use crate::error::{FormError, ValidationError};
use crate::notification::Notify;
use crate::payload::PostPayload;
use crate::platform::DraftStore;
use crate::slug::slugify;
use crate::tags::{MAX_TAGS, cap_tags, split_tags};
use crate::META_MAX_CHARS;

const TOO_MANY_TAGS: &str = "Only Five Tags can be selected";

/// Markdown reference for an uploaded image, ready to paste into content.
pub fn image_markdown(url: &str) -> String {
    format!("![add image description]({url})")
}

pub struct PostForm<S, N> {
    draft: DraftPost,
    selected_thumbnail_url: Option<String>,
    image_url_to_copy: Option<String>,
    image_uploading: bool,
    markdown_hint_visible: bool,
    preview_visible: bool,
    store: S,
    notifier: N,
}

impl<S: DraftStore, N: Notify> PostForm<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            draft: DraftPost::default(),
            selected_thumbnail_url: None,
            image_url_to_copy: None,
            image_uploading: false,
            markdown_hint_visible: false,
            preview_visible: false,
            store,
            notifier,
        }
    }

    /// Start from an existing post (edit mode, or a restored draft).
    pub fn with_initial_post(mut self, post: DraftPost) -> Self {
        self.seed(post);
        self
    }

    /// Replace the draft wholesale and preview its thumbnail.
    pub fn seed(&mut self, post: DraftPost) {
        self.selected_thumbnail_url = match &post.thumbnail {
            Thumbnail::None => None,
            Thumbnail::Url(url) => Some(url.clone()),
            Thumbnail::File(file) => Some(file.data_url()),
        };
        self.draft = post;
    }

    pub fn draft(&self) -> &DraftPost {
        &self.draft
    }

    pub fn selected_thumbnail_url(&self) -> Option<&str> {
        self.selected_thumbnail_url.as_deref()
    }

    pub fn image_url_to_copy(&self) -> Option<&str> {
        self.image_url_to_copy.as_deref()
    }

    pub fn is_image_uploading(&self) -> bool {
        self.image_uploading
    }

    pub fn markdown_hint_visible(&self) -> bool {
        self.markdown_hint_visible
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Characters used by the meta description.
    pub fn meta_len(&self) -> usize {
        self.draft.meta.chars().count()
    }

    /// Select a thumbnail file.
    ///
    /// Non-images are rejected and nothing changes; the caller raises the
    /// alert. Accepted files are kept in memory only.
    pub fn select_thumbnail(&mut self, file: ImageFile) -> Result<(), FormError> {
        if !file.is_image() {
            tracing::debug!(mime = %file.mime_type, "rejected thumbnail");
            return Err(FormError::NotAnImage {
                mime_type: file.mime_type,
            });
        }
        self.selected_thumbnail_url = Some(file.data_url());
        self.draft.thumbnail = Thumbnail::File(file);
        Ok(())
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.draft.featured = featured;
        self.persist();
    }

    /// Apply a change to one of the text fields.
    ///
    /// - tags: warns once when the change takes the list above `MAX_TAGS`;
    ///   the text is stored regardless.
    /// - meta: never stored longer than `META_MAX_CHARS`.
    pub fn update_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Title => self.draft.title = value,
            TextField::Content => self.draft.content = value,
            TextField::Tags => {
                let before = split_tags(&self.draft.tags).count();
                let after = split_tags(&value).count();
                if after > MAX_TAGS && before <= MAX_TAGS {
                    self.notifier.warning(TOO_MANY_TAGS);
                }
                self.draft.tags = value;
            }
            TextField::Meta => {
                self.draft.meta = if value.chars().count() > META_MAX_CHARS {
                    value.chars().take(META_MAX_CHARS).collect()
                } else {
                    value
                };
            }
        }
        self.persist();
    }

    /// A field gained input focus. The markdown hint follows the content field.
    pub fn focus(&mut self, field: TextField) {
        self.markdown_hint_visible = field == TextField::Content;
    }

    pub fn open_preview(&mut self) {
        self.preview_visible = true;
    }

    pub fn close_preview(&mut self) {
        self.preview_visible = false;
    }

    /// Claim the upload slot for an inline image.
    ///
    /// Fails without side effects while another upload is in flight. A
    /// non-image is reported as an error notification.
    pub fn begin_image_upload(&mut self, file: &ImageFile) -> Result<(), FormError> {
        if self.image_uploading {
            return Err(FormError::UploadInProgress);
        }
        if !file.is_image() {
            let err = FormError::NotAnImage {
                mime_type: file.mime_type.clone(),
            };
            self.notifier.error(&err.to_string());
            return Err(err);
        }
        self.image_uploading = true;
        Ok(())
    }

    /// Record the outcome of the upload started by `begin_image_upload`.
    pub fn finish_image_upload<E: std::fmt::Display>(&mut self, result: Result<String, E>) {
        self.image_uploading = false;
        match result {
            Ok(url) => self.image_url_to_copy = Some(url),
            Err(e) => {
                tracing::warn!("image upload failed: {}", e);
                self.notifier.error(&e.to_string());
            }
        }
    }

    /// Markdown for the last uploaded image.
    pub fn image_markdown(&self) -> Option<String> {
        self.image_url_to_copy.as_deref().map(image_markdown)
    }

    /// Validate and build the payload.
    ///
    /// The first missing field is reported through the notifier; the draft is
    /// left untouched either way.
    pub fn submit(&self) -> Result<PostPayload, ValidationError> {
        if let Err(e) = validate(&self.draft) {
            self.notifier.error(&e.to_string());
            return Err(e);
        }
        let draft = &self.draft;
        Ok(PostPayload {
            title: draft.title.clone(),
            thumbnail: draft.thumbnail.clone(),
            featured: draft.featured,
            content: draft.content.clone(),
            tags: cap_tags(&draft.tags),
            meta: draft.meta.clone(),
            slug: slugify(&draft.title),
        })
    }

    /// Back to an empty form, and forget the stored draft.
    pub fn reset(&mut self) {
        self.draft = DraftPost::default();
        self.selected_thumbnail_url = None;
        self.store.clear();
        tracing::debug!("form reset");
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.draft) {
            tracing::warn!("failed to save draft: {}", e);
        }
    }
}

/// Required fields, checked in order.
fn validate(draft: &DraftPost) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if draft.content.trim().is_empty() {
        return Err(ValidationError::MissingContent);
    }
    if split_tags(&draft.tags).next().is_none() {
        return Err(ValidationError::MissingTags);
    }
    if draft.meta.trim().is_empty() {
        return Err(ValidationError::MissingMeta);
    }
    Ok(())
}
