//! Error types for form operations.

use smol_str::SmolStr;
use thiserror::Error;

/// A required field was blank when the post was submitted.
///
/// Variants are declared in validation order; the `Display` text is what the
/// author sees in the toast.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is missing!")]
    MissingTitle,

    #[error("Content is missing!")]
    MissingContent,

    #[error("Tags are missing!")]
    MissingTags,

    #[error("Meta Description is missing!")]
    MissingMeta,
}

/// Errors surfaced by `PostForm` operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FormError {
    /// The selected file is not an image.
    #[error("This is not an image!")]
    NotAnImage { mime_type: SmolStr },

    /// An inline image upload is already in flight.
    #[error("an image upload is already in progress")]
    UploadInProgress,

    /// Submission failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Errors from persisting or restoring the draft.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StorageError {
    /// The draft could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage backend rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}
