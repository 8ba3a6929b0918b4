//! `setTimeout`-backed timers for the notification dispatcher.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use quire_core::TimerSource;

/// One-shot browser timers.
///
/// The handle owns the scheduled callback. Dropping it clears the timeout and
/// frees the closure; wasm-bindgen defers the free when that happens from
/// inside the callback itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeoutTimers;

impl TimerSource for TimeoutTimers {
    type Handle = Timeout;

    fn start(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, on_elapsed)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle.cancel());
    }
}
