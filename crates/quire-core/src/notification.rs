//! Toast notifications with timed auto-clear.
//!
//! `NotificationDispatcher` holds at most one notification. Each dispatch
//! replaces it, cancels the pending clear and schedules a new one, so when
//! dispatches overlap only the most recent survives and only its clear fires.
//!
//! Scheduling is delegated to a `TimerSource` so the same logic runs against
//! browser `setTimeout` and against a manual clock in tests.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use smol_str::SmolStr;

/// How long a notification stays visible.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Kind of notification, which also picks its presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Error,
    Warning,
    Success,
    /// Any other kind string; styled like an error.
    Unspecified,
}

impl NotificationKind {
    /// Classify a kind string. Empty strings are not a kind at all.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "" => None,
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "success" => Some(Self::Success),
            _ => Some(Self::Unspecified),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Unspecified => "unspecified",
        }
    }

    /// CSS class of the toast bucket this kind falls into.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Warning => "toast-warning",
            Self::Success => "toast-success",
            Self::Error | Self::Unspecified => "toast-error",
        }
    }
}

/// The visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Increases with every dispatch; distinguishes repeated identical messages.
    pub id: u64,
    pub kind: NotificationKind,
    pub message: SmolStr,
}

/// Anything that can surface a message to the author.
pub trait Notify {
    fn notify(&self, kind: NotificationKind, message: &str);

    fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }

    fn warning(&self, message: &str) {
        self.notify(NotificationKind::Warning, message);
    }

    fn success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }
}

/// One-shot timers.
///
/// Implementations must not run `on_elapsed` synchronously from `start`.
pub trait TimerSource: 'static {
    type Handle: 'static;

    fn start(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> Self::Handle;

    /// Release a handle, cancelling the timer if it has not fired yet.
    fn cancel(&self, handle: Self::Handle);
}

type Listener = Rc<dyn Fn(Option<&Notification>)>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

struct Slot<H> {
    current: Option<Notification>,
    pending_clear: Option<H>,
    generation: u64,
}

struct Inner<T: TimerSource> {
    timers: T,
    slot: RefCell<Slot<T::Handle>>,
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_subscription: Cell<u64>,
    /// Bumped on every emit, so an outer emit can tell a listener replaced
    /// the value under it.
    revision: Cell<u64>,
}

/// Application-scoped notification service.
///
/// Clones share state; hand a clone to every component that needs to notify.
pub struct NotificationDispatcher<T: TimerSource> {
    inner: Rc<Inner<T>>,
}

impl<T: TimerSource> NotificationDispatcher<T> {
    pub fn new(timers: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                timers,
                slot: RefCell::new(Slot {
                    current: None,
                    pending_clear: None,
                    generation: 0,
                }),
                listeners: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
                revision: Cell::new(0),
            }),
        }
    }

    /// Show `message` as a notification of `kind`.
    ///
    /// Silently ignored when either argument is empty.
    pub fn update_notification(&self, kind: &str, message: &str) {
        match NotificationKind::parse(kind) {
            Some(kind) => self.notify(kind, message),
            None => tracing::trace!("ignoring notification without a kind"),
        }
    }

    /// The notification currently visible, if any.
    pub fn current(&self) -> Option<Notification> {
        self.inner.slot.borrow().current.clone()
    }

    /// Register a listener called with the new value after every change.
    pub fn subscribe(&self, listener: impl Fn(Option<&Notification>) + 'static) -> Subscription {
        let id = self.inner.next_subscription.get();
        self.inner.next_subscription.set(id + 1);
        let subscription = Subscription(id);
        self.inner
            .listeners
            .borrow_mut()
            .push((subscription, Rc::new(listener)));
        subscription
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(id, _)| *id != subscription);
    }

    /// Clear immediately, cancelling the pending auto-clear.
    pub fn dismiss(&self) {
        let stale = {
            let mut slot = self.inner.slot.borrow_mut();
            if slot.current.take().is_none() {
                return;
            }
            slot.pending_clear.take()
        };
        if let Some(handle) = stale {
            self.inner.timers.cancel(handle);
        }
        self.emit(None);
    }

    fn show(&self, kind: NotificationKind, message: &str) {
        let (notification, stale) = {
            let mut slot = self.inner.slot.borrow_mut();
            slot.generation += 1;
            let notification = Notification {
                id: slot.generation,
                kind,
                message: SmolStr::new(message),
            };
            slot.current = Some(notification.clone());
            (notification, slot.pending_clear.take())
        };
        if let Some(handle) = stale {
            self.inner.timers.cancel(handle);
        }

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        let generation = notification.id;
        let handle = self.inner.timers.start(
            NOTIFICATION_DURATION,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    NotificationDispatcher { inner }.expire(generation);
                }
            }),
        );
        self.inner.slot.borrow_mut().pending_clear = Some(handle);

        tracing::debug!(
            id = notification.id,
            kind = notification.kind.as_str(),
            "notification dispatched"
        );
        self.emit(Some(&notification));
    }

    fn expire(&self, generation: u64) {
        {
            let mut slot = self.inner.slot.borrow_mut();
            if slot.generation != generation || slot.current.is_none() {
                return;
            }
            slot.current = None;
            slot.pending_clear = None;
        }
        tracing::debug!(id = generation, "notification cleared");
        self.emit(None);
    }

    fn emit(&self, notification: Option<&Notification>) {
        let revision = self.inner.revision.get() + 1;
        self.inner.revision.set(revision);
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            if self.inner.revision.get() != revision {
                // A listener changed the notification; the nested emit has
                // already delivered the newer value to everyone.
                break;
            }
            listener(notification);
        }
    }
}

impl<T: TimerSource> Notify for NotificationDispatcher<T> {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if message.is_empty() {
            tracing::trace!("ignoring empty notification");
            return;
        }
        self.show(kind, message);
    }
}

impl<T: TimerSource> Clone for NotificationDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: TimerSource> PartialEq for NotificationDispatcher<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: TimerSource> fmt::Debug for NotificationDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("current", &self.inner.slot.borrow().current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    type Pending = Vec<Option<(Duration, Box<dyn FnOnce()>)>>;

    /// Timers that only fire when told to.
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        pending: Rc<RefCell<Pending>>,
        cancelled: Rc<Cell<usize>>,
    }

    impl ManualTimers {
        /// Fire every timer still pending, returning how many fired.
        pub fn fire_all(&self) -> usize {
            let due: Vec<_> = self
                .pending
                .borrow_mut()
                .iter_mut()
                .filter_map(Option::take)
                .collect();
            let fired = due.len();
            for (_, callback) in due {
                callback();
            }
            fired
        }

        pub fn pending(&self) -> usize {
            self.pending.borrow().iter().flatten().count()
        }

        pub fn cancelled(&self) -> usize {
            self.cancelled.get()
        }

        pub fn last_delay(&self) -> Option<Duration> {
            self.pending.borrow().iter().flatten().last().map(|(d, _)| *d)
        }
    }

    impl TimerSource for ManualTimers {
        type Handle = usize;

        fn start(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> usize {
            let mut pending = self.pending.borrow_mut();
            pending.push(Some((delay, on_elapsed)));
            pending.len() - 1
        }

        fn cancel(&self, handle: usize) {
            if let Some(slot) = self.pending.borrow_mut().get_mut(handle) {
                if slot.take().is_some() {
                    self.cancelled.set(self.cancelled.get() + 1);
                }
            }
        }
    }

    /// Records every notification instead of showing it.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub sent: Rc<RefCell<Vec<(NotificationKind, String)>>>,
    }

    impl RecordingNotifier {
        pub fn sent(&self) -> Vec<(NotificationKind, String)> {
            self.sent.borrow().clone()
        }
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, kind: NotificationKind, message: &str) {
            self.sent.borrow_mut().push((kind, message.to_string()));
        }
    }
}
