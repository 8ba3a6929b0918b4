//! localStorage persistence for the draft.
//!
//! The draft lives under a single key as plain JSON, so it stays readable in
//! devtools and survives reloads.

use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use quire_core::{DRAFT_STORAGE_KEY, DraftPost, DraftStore, StorageError};

/// `DraftStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDraftStore {
    key: &'static str,
}

impl LocalDraftStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for LocalDraftStore {
    fn default() -> Self {
        Self::new(DRAFT_STORAGE_KEY)
    }
}

fn convert(err: GlooStorageError) -> StorageError {
    match err {
        GlooStorageError::SerdeError(e) => StorageError::Serialization(e),
        other => StorageError::Backend(other.to_string()),
    }
}

impl DraftStore for LocalDraftStore {
    fn load(&self) -> Result<Option<DraftPost>, StorageError> {
        match LocalStorage::get::<DraftPost>(self.key) {
            Ok(draft) => Ok(Some(draft)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(convert(e)),
        }
    }

    fn save(&self, draft: &DraftPost) -> Result<(), StorageError> {
        LocalStorage::set(self.key, draft).map_err(convert)
    }

    fn clear(&self) {
        LocalStorage::delete(self.key);
    }
}
