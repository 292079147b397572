use crate::api::{ListEntry, MediaCenterClient, MediaKind, ServerConfig};
use crate::components::{AppView, Icon};
use crate::pagination::run_continuation;
use dioxus::prelude::*;

/// Front page: the server's root containers. One bounded fragment, so the
/// chain runs with page size 0 and never continues.
#[component]
pub fn Home() -> Element {
    let servers = use_context::<Signal<Vec<ServerConfig>>>();
    let navigator = use_navigator();

    let mut roots = use_signal(|| None::<Vec<ListEntry>>);
    let mut load_generation = use_signal(|| 0u64);

    use_effect(move || {
        let server = servers().into_iter().find(|s| s.active);
        load_generation.with_mut(|value| *value = value.saturating_add(1));
        let generation = *load_generation.peek();

        let Some(server) = server else {
            roots.set(Some(Vec::new()));
            return;
        };

        spawn(async move {
            let client = MediaCenterClient::new(server);
            let mut collected = Vec::new();
            run_continuation(
                "roots",
                "/",
                0,
                0,
                |query| {
                    let client = &client;
                    async move { client.fetch_list_page(&query).await }
                },
                |page| collected.extend(page),
            )
            .await;

            if *load_generation.peek() == generation {
                roots.set(Some(collected));
            }
        });
    });

    rsx! {
        div { class: "space-y-8 p-6",
            header { class: "page-header",
                h1 { class: "text-2xl font-bold text-white", "Library" }
            }

            {match roots() {
                Some(entries) => {
                    if entries.is_empty() {
                        rsx! {
                            div { class: "flex flex-col items-center justify-center py-20",
                                Icon { name: "folder".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                                p { class: "text-zinc-400", "No media found. Add a server under Settings." }
                            }
                        }
                    } else {
                        rsx! {
                            div { class: "grid grid-cols-2 gap-4 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5",
                                for entry in entries {
                                    RootCard {
                                        entry: entry.clone(),
                                        onclick: {
                                            let path = entry.path.clone();
                                            move |_| {
                                                navigator.push(AppView::browse(&path));
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "flex items-center justify-center py-20",
                        Icon { name: "loader".to_string(), class: "w-8 h-8 text-zinc-500".to_string() }
                    }
                }
            }}
        }
    }
}

#[component]
fn RootCard(entry: ListEntry, onclick: EventHandler<MouseEvent>) -> Element {
    let icon = match entry.kind {
        MediaKind::Image => "photo",
        MediaKind::Audio => "music",
        MediaKind::Video => "film",
        MediaKind::Folder => "folder",
    };
    let count_text = entry
        .child_count
        .map(|count| format!("{count} items"))
        .unwrap_or_default();

    rsx! {
        button {
            class: "flex flex-col items-center gap-3 rounded-2xl border border-zinc-800/60 bg-zinc-900/40 p-6 transition-colors hover:border-zinc-600",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.to_string(), class: "w-10 h-10 text-amber-400".to_string() }
            div { class: "text-center",
                p { class: "text-sm font-medium text-white", "{entry.title}" }
                if !count_text.is_empty() {
                    p { class: "text-xs text-zinc-500", "{count_text}" }
                }
            }
        }
    }
}
