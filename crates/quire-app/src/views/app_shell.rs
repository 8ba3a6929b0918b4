use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::FaBars;

use crate::Route;
use crate::components::NavBar;

/// Sidebar layout wrapping every route.
#[component]
pub fn AppShell() -> Element {
    let mut closed = use_signal(|| false);

    rsx! {
        div { class: "shell",
            aside { class: if closed() { "sidebar sidebar-closed" } else { "sidebar" },
                NavBar { closed: closed() }
            }
            main { class: "shell-content",
                button {
                    r#type: "button",
                    class: "sidebar-toggle icon-button",
                    aria_label: "Toggle navigation",
                    onclick: move |_| closed.set(!closed()),
                    Icon { width: 20, height: 20, fill: "currentColor", icon: FaBars }
                }
                Outlet::<Route> {}
            }
        }
    }
}
