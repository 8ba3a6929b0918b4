//! quire-core: Post authoring logic without framework dependencies.
//!
//! This crate provides:
//! - `DraftPost` - the in-progress post record and its persisted JSON form
//! - `PostForm<S, N>` - form state machine generic over draft storage and notifications
//! - `NotificationDispatcher<T>` - single-slot toast queue with timed auto-clear
//! - `PostPayload` - the validated, multipart-ready submission
//! - Slug and tag helpers, markdown hints and preview rendering

pub mod draft;
pub mod error;
pub mod form;
pub mod hints;
pub mod notification;
pub mod payload;
pub mod platform;
pub mod preview;
pub mod slug;
pub mod tags;

pub use draft::{DraftPost, ImageFile, TextField, Thumbnail};
pub use error::{FormError, StorageError, ValidationError};
pub use form::{PostForm, image_markdown};
pub use hints::{MARKDOWN_GUIDE_URL, MARKDOWN_RULES, MarkdownRule};
pub use notification::{
    NOTIFICATION_DURATION, Notification, NotificationDispatcher, NotificationKind, Notify,
    Subscription, TimerSource,
};
pub use payload::{FormField, PostPayload};
pub use platform::{DraftStore, MemoryDraftStore, PlatformError};
pub use preview::render_markdown;
pub use slug::slugify;
pub use smol_str::SmolStr;
pub use tags::{MAX_TAGS, cap_tags, split_tags};

/// localStorage key holding the serialized draft.
pub const DRAFT_STORAGE_KEY: &str = "blogPost";

/// Longest meta description that will be stored, in characters.
pub const META_MAX_CHARS: usize = 149;
