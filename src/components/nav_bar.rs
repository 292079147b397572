use crate::components::{AppView, Icon};
use dioxus::prelude::*;

/// Vertical space the bar takes from the viewport; sub-frame sizing subtracts
/// this.
pub const NAV_BAR_HEIGHT: u32 = 64;

#[component]
pub fn NavBar() -> Element {
    let view = use_route::<AppView>();
    let navigator = use_navigator();

    rsx! {
        header {
            class: "flex items-center gap-2 border-b border-zinc-800/60 bg-zinc-950/80 px-4 backdrop-blur-xl",
            style: "height:{NAV_BAR_HEIGHT}px;",
            div { class: "mr-4 flex items-center gap-3",
                div { class: "flex h-9 w-9 items-center justify-center rounded-xl bg-gradient-to-br from-amber-500 to-orange-600 text-lg font-bold text-white",
                    "R"
                }
                h1 { class: "text-lg font-bold text-white", "RustyCast" }
            }

            NavItem {
                icon: "home",
                label: "Home",
                active: matches!(view, AppView::Home {}),
                onclick: move |_| {
                    navigator.push(AppView::Home {});
                },
            }
            NavItem {
                icon: "folder",
                label: "Library",
                active: matches!(view, AppView::Browse { .. }),
                onclick: move |_| {
                    navigator.push(AppView::browse("/"));
                },
            }
            NavItem {
                icon: "play",
                label: "Now Playing",
                active: matches!(view, AppView::NowPlaying {}),
                onclick: move |_| {
                    navigator.push(AppView::NowPlaying {});
                },
            }

            div { class: "flex-1" }

            NavItem {
                icon: "settings",
                label: "Settings",
                active: matches!(view, AppView::Settings {}),
                onclick: move |_| {
                    navigator.push(AppView::Settings {});
                },
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "flex items-center gap-2 rounded-xl px-3 py-2 text-sm font-medium transition-all duration-200 cursor-pointer";
    let active_class = if active {
        "bg-gradient-to-r from-amber-500/20 to-orange-500/10 text-amber-400"
    } else {
        "text-zinc-400 hover:text-white hover:bg-zinc-800/50"
    };

    rsx! {
        button {
            class: "{base_class} {active_class}",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-4 h-4".to_string() }
            span { class: "hidden md:inline", "{label}" }
        }
    }
}
