//! Browser layer for quire.
//!
//! Implements the `quire-core` platform traits on top of web APIs. It assumes
//! a `wasm32-unknown-unknown` target environment.
//!
//! - `storage`: localStorage-backed `DraftStore`
//! - `timers`: `setTimeout`-backed `TimerSource`
//! - `clipboard`: async Clipboard API and `window.alert`
//!
//! This crate re-exports `quire-core` so consumers only need one dependency.

pub use quire_core;
pub use quire_core::*;

pub mod clipboard;
pub mod storage;
pub mod timers;

pub use clipboard::{alert, write_clipboard_text};
pub use storage::LocalDraftStore;
pub use timers::TimeoutTimers;

/// Browser-backed notification service.
pub type Notifications = NotificationDispatcher<TimeoutTimers>;
