use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaHouse, FaPenToSquare};

use crate::{CONFIG, Route};

/// Sidebar navigation. Labels collapse away when `closed`.
#[component]
pub fn NavBar(closed: bool) -> Element {
    let class = if closed { "nav nav-closed" } else { "nav" };
    rsx! {
        nav { class,
            div { class: "nav-brand",
                span { class: "nav-brand-mark", "{CONFIG.app_name}" }
            }
            ul { class: "nav-list",
                li {
                    Link {
                        to: Route::Home {},
                        class: "nav-item",
                        active_class: "nav-item-active",
                        Icon { width: 20, height: 20, fill: "currentColor", icon: FaHouse }
                        if !closed {
                            span { class: "nav-label", "Home" }
                        }
                    }
                }
                li {
                    Link {
                        to: Route::CreatePost {},
                        class: "nav-item",
                        active_class: "nav-item-active",
                        Icon { width: 20, height: 20, fill: "currentColor", icon: FaPenToSquare }
                        if !closed {
                            span { class: "nav-label", "Create Post" }
                        }
                    }
                }
            }
        }
    }
}
