use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod diagnostics;
mod pagination;
mod viewport;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: "/assets/favicon.ico" }
        document::Link { rel: "apple-touch-icon", href: "/assets/apple-touch-icon.png" }

        // Web app manifest
        document::Link { rel: "manifest", href: "/assets/site.webmanifest" }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#18181b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "RustyCast" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
