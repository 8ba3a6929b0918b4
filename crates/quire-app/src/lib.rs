//! Quire authoring app.

use dioxus::prelude::*;
use std::sync::LazyLock;

pub mod api;
pub mod components;
pub mod config;
pub mod env;
pub mod views;

use components::NotificationProvider;
use config::Config;
use views::{AppShell, CreatePost, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/create-post")]
        CreatePost {},
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "{CONFIG.app_name}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        NotificationProvider {
            Router::<Route> {}
        }
    }
}
