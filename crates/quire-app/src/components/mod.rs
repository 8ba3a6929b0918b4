//! Shared components used by the views.

mod markdown_hint;
pub use markdown_hint::MarkdownHint;

mod navbar;
pub use navbar::NavBar;

pub mod notification;
pub use notification::{NotificationProvider, use_notifications};

pub mod post_form;
pub use post_form::PostForm;

mod post_preview;
pub use post_preview::PostPreview;
