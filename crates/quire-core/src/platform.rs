//! Platform abstraction traits for form persistence.
//!
//! `DraftStore` is the seam between the form logic and wherever the draft
//! lives (browser localStorage, or memory in tests and native builds).

use std::cell::RefCell;
use std::rc::Rc;

use crate::draft::DraftPost;
use crate::error::StorageError;

/// Error type for platform operations.
#[derive(Debug, Clone)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Persistent home of the single in-progress draft.
pub trait DraftStore {
    /// Load the stored draft, if one exists.
    fn load(&self) -> Result<Option<DraftPost>, StorageError>;

    /// Replace the stored draft.
    fn save(&self, draft: &DraftPost) -> Result<(), StorageError>;

    /// Remove the stored draft.
    fn clear(&self);
}

/// In-memory draft store.
///
/// Holds the draft as JSON, so it exercises the same serialized form the
/// browser store writes. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryDraftStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON currently stored.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<DraftPost>, StorageError> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, draft: &DraftPost) -> Result<(), StorageError> {
        let json = serde_json::to_string(draft)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

impl PartialEq for MemoryDraftStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}
