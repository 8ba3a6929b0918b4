//! Toast display for the app-wide notification dispatcher.

use dioxus::prelude::*;
use quire_browser::{Notification, Notifications, TimeoutTimers};

/// The dispatcher provided by [`NotificationProvider`].
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>()
}

/// Owns the single notification dispatcher, provides it as context and renders
/// whatever it is currently showing.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let visible = use_signal(|| None::<Notification>);
    let (notifications, subscription) = use_hook(|| {
        let notifications = Notifications::new(TimeoutTimers);
        let subscription = notifications.subscribe(move |current| {
            let mut visible = visible;
            visible.set(current.cloned());
        });
        (notifications, subscription)
    });
    use_context_provider(|| notifications.clone());

    use_drop(move || {
        notifications.unsubscribe(subscription);
        notifications.dismiss();
    });

    rsx! {
        {children}
        div { class: "toast-region", aria_live: "polite",
            if let Some(notification) = visible() {
                Toast { key: "{notification.id}", notification }
            }
        }
    }
}

/// One notification. Keyed by id so a replacement mounts fresh and replays
/// the entry transition.
#[component]
fn Toast(notification: Notification) -> Element {
    let mut entered = use_signal(|| false);
    use_effect(move || entered.set(true));

    let kind = notification.kind.css_class();
    let state = if entered() { "toast-entered" } else { "" };

    rsx! {
        div {
            class: "toast {kind} {state}",
            role: "status",
            "{notification.message}"
        }
    }
}
