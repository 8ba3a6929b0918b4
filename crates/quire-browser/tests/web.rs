//! WASM browser tests for quire-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`
#![cfg(all(target_family = "wasm", target_os = "unknown"))]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use quire_browser::{
    DraftPost, DraftStore, LocalDraftStore, NotificationDispatcher, Notify, PostForm, TextField,
    TimeoutTimers, TimerSource,
};

fn scratch_store(key: &'static str) -> LocalDraftStore {
    let store = LocalDraftStore::new(key);
    store.clear();
    store
}

// === Draft storage ===

#[wasm_bindgen_test]
fn test_missing_draft_loads_as_none() {
    let store = scratch_store("quire-test-missing");
    assert_eq!(store.load().unwrap(), None);
}

#[wasm_bindgen_test]
fn test_draft_round_trip_and_clear() {
    let store = scratch_store("quire-test-roundtrip");
    let draft = DraftPost {
        title: "Stored".into(),
        featured: true,
        tags: "a, b".into(),
        ..Default::default()
    };
    store.save(&draft).unwrap();
    assert_eq!(store.load().unwrap(), Some(draft));

    store.clear();
    assert_eq!(store.load().unwrap(), None);
}

#[wasm_bindgen_test]
fn test_form_writes_through_to_local_storage() {
    let store = scratch_store("quire-test-form");
    let notes = NotificationDispatcher::new(TimeoutTimers);
    let mut form = PostForm::new(store, notes);
    form.update_text(TextField::Title, "Typed");
    assert_eq!(store.load().unwrap().unwrap().title, "Typed");

    form.reset();
    assert_eq!(store.load().unwrap(), None);
}

// === Timers ===

#[wasm_bindgen_test]
async fn test_timeout_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let _handle = TimeoutTimers.start(Duration::from_millis(10), Box::new(move || flag.set(true)));
    TimeoutFuture::new(50).await;
    assert!(fired.get());
}

#[wasm_bindgen_test]
async fn test_dropping_handle_before_firing_cancels() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    drop(TimeoutTimers.start(Duration::from_millis(10), Box::new(move || flag.set(true))));
    TimeoutFuture::new(50).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn test_handle_released_inside_its_own_callback() {
    let slot: Rc<RefCell<Option<gloo_timers::callback::Timeout>>> = Rc::default();
    let fired = Rc::new(Cell::new(false));
    let (inner_slot, flag) = (slot.clone(), fired.clone());
    let handle = TimeoutTimers.start(
        Duration::from_millis(10),
        Box::new(move || {
            if let Some(handle) = inner_slot.borrow_mut().take() {
                TimeoutTimers.cancel(handle);
            }
            flag.set(true);
        }),
    );
    *slot.borrow_mut() = Some(handle);
    TimeoutFuture::new(50).await;
    assert!(fired.get());
    assert!(slot.borrow().is_none());
}

#[wasm_bindgen_test]
async fn test_cancelled_timeout_does_not_fire() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let handle = TimeoutTimers.start(Duration::from_millis(10), Box::new(move || flag.set(true)));
    TimeoutTimers.cancel(handle);
    TimeoutFuture::new(50).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn test_notification_clears_after_duration() {
    let notes = NotificationDispatcher::new(TimeoutTimers);
    notes.error("gone soon");
    assert!(notes.current().is_some());
    TimeoutFuture::new(3100).await;
    assert!(notes.current().is_none());
}

#[wasm_bindgen_test]
async fn test_replaced_notification_only_clears_once() {
    let notes = NotificationDispatcher::new(TimeoutTimers);
    let clears = Rc::new(Cell::new(0));
    let seen = clears.clone();
    notes.subscribe(move |n| {
        if n.is_none() {
            seen.set(seen.get() + 1);
        }
    });
    notes.error("first");
    TimeoutFuture::new(1000).await;
    notes.success("second");
    TimeoutFuture::new(2500).await;
    // The first timer would have fired by now had it not been cancelled.
    assert_eq!(notes.current().map(|n| n.message.to_string()), Some("second".into()));
    TimeoutFuture::new(700).await;
    assert!(notes.current().is_none());
    assert_eq!(clears.get(), 1);
}
