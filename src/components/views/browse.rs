use crate::api::{format_duration, ListEntry, MediaCenterClient, MediaKind, ServerConfig};
use crate::components::{
    browse_path, delay_ms, AppView, Icon, NowPlayingDirSignal, PlayerCommand, PlayerSession,
    NAV_BAR_HEIGHT,
};
use crate::db::AppSettings;
use crate::pagination::{run_continuation, LIST_PAGE_SIZE};
use crate::viewport::frame_size;
use dioxus::prelude::*;

/// Paginated folder listing. Rows appear as pages arrive; the chain keeps
/// requesting the next offset until the server sends an empty page.
#[component]
pub fn Browse(segments: Vec<String>) -> Element {
    let servers = use_context::<Signal<Vec<ServerConfig>>>();
    let session = use_context::<Signal<PlayerSession>>();
    let settings = use_context::<Signal<AppSettings>>();
    let mut now_playing_dir = use_context::<NowPlayingDirSignal>().0;
    let commands = use_coroutine_handle::<PlayerCommand>();
    let navigator = use_navigator();

    let path = browse_path(&segments);

    let mut items = use_signal(Vec::<ListEntry>::new);
    let mut chain_done = use_signal(|| false);
    let mut chain_generation = use_signal(|| 0u64);

    let mut filter_query = use_signal(String::new);
    let debounced_filter = use_signal(String::new);
    let mut debounce_generation = use_signal(|| 0u64);

    // Start a fresh chain whenever the folder changes. The generation guard
    // makes a superseded chain's late pages land in the void.
    use_effect(use_reactive!(|path| {
        let server = servers().into_iter().find(|s| s.active);
        chain_generation.with_mut(|value| *value = value.saturating_add(1));
        let chain = *chain_generation.peek();
        items.set(Vec::new());
        chain_done.set(false);

        let Some(server) = server else {
            chain_done.set(true);
            return;
        };

        spawn(async move {
            let client = MediaCenterClient::new(server);
            run_continuation(
                "list",
                &path,
                0,
                LIST_PAGE_SIZE,
                |query| {
                    let client = &client;
                    async move { client.fetch_list_page(&query).await }
                },
                |page| {
                    if *chain_generation.peek() == chain {
                        items.write().extend(page);
                    }
                },
            )
            .await;

            if *chain_generation.peek() == chain {
                chain_done.set(true);
            }
        });
    }));

    // Debounce typing so the row filter is not recomputed on every keystroke.
    use_effect(move || {
        let raw_query = filter_query();
        let query = raw_query.trim().to_lowercase();
        debounce_generation.with_mut(|value| *value = value.saturating_add(1));
        let generation = *debounce_generation.peek();

        let mut debounced_filter = debounced_filter.clone();
        if query.is_empty() {
            debounced_filter.set(String::new());
            return;
        }

        spawn(async move {
            delay_ms(220).await;
            if *debounce_generation.peek() != generation {
                return;
            }
            debounced_filter.set(query);
        });
    });

    let Some(server) = servers().into_iter().find(|s| s.active) else {
        return rsx! {
            div { class: "flex items-center justify-center py-20 text-zinc-500",
                "No media server configured"
            }
        };
    };
    let client = MediaCenterClient::new(server);
    let thumb_size = settings().thumb_size;

    let query = debounced_filter();
    let visible: Vec<ListEntry> = items()
        .into_iter()
        .filter(|entry| query.is_empty() || entry.title.to_lowercase().contains(&query))
        .collect();
    let loading = !chain_done();

    // The list pane is an embedded sub-frame: viewport minus the nav bar.
    let pane_height = frame_size(session().viewport(), NAV_BAR_HEIGHT).height;

    rsx! {
        div { class: "space-y-4 p-6",
            header { class: "flex flex-col gap-3 md:flex-row md:items-center md:justify-between",
                h1 { class: "text-xl font-bold text-white", "{path}" }
                input {
                    class: "w-full rounded-xl border border-zinc-700/50 bg-zinc-800/50 px-4 py-2 text-sm text-white placeholder:text-zinc-500 focus:outline-none md:max-w-xs",
                    placeholder: "Filter this folder",
                    value: filter_query,
                    oninput: move |e| filter_query.set(e.value()),
                }
            }

            div { class: "overflow-y-auto", style: "height:{pane_height}px;",
                if visible.is_empty() && !loading {
                    div { class: "flex flex-col items-center justify-center py-20",
                        Icon { name: "folder".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                        p { class: "text-zinc-400", "Nothing here" }
                    }
                } else {
                    div { class: "space-y-1",
                        for entry in visible {
                            EntryRow {
                                entry: entry.clone(),
                                thumb_url: entry
                                    .kind
                                    .is_playable()
                                    .then(|| client.thumbnail_url(&entry.path, thumb_size)),
                                onclick: {
                                    let entry = entry.clone();
                                    let path = path.clone();
                                    move |_| {
                                        if entry.kind == MediaKind::Folder {
                                            navigator.push(AppView::browse(&entry.path));
                                        } else {
                                            now_playing_dir.set(Some(path.clone()));
                                            if let Some(command) = PlayerCommand::for_selection(
                                                entry.kind,
                                                &entry.path,
                                                &entry.title,
                                            ) {
                                                commands.send(command);
                                            }
                                            navigator.push(AppView::NowPlaying {});
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if loading {
                    div { class: "flex items-center justify-center py-6",
                        Icon { name: "loader".to_string(), class: "w-6 h-6 text-zinc-500".to_string() }
                    }
                }
            }
        }
    }
}

#[component]
fn EntryRow(entry: ListEntry, thumb_url: Option<String>, onclick: EventHandler<MouseEvent>) -> Element {
    let icon = match entry.kind {
        MediaKind::Folder => "folder",
        MediaKind::Image => "photo",
        MediaKind::Audio => "music",
        MediaKind::Video => "film",
    };

    let mut detail = Vec::new();
    if let Some(duration) = entry.duration {
        detail.push(format_duration(duration));
    }
    if let Some(date) = entry.date {
        detail.push(date.format("%Y-%m-%d").to_string());
    }
    if let Some(count) = entry.child_count {
        detail.push(format!("{count} items"));
    }
    let detail = detail.join(" · ");

    rsx! {
        button {
            class: "flex w-full items-center gap-3 rounded-xl px-3 py-2 text-left transition-colors hover:bg-zinc-800/50",
            onclick: move |e| onclick.call(e),
            if let Some(thumb) = thumb_url {
                img {
                    src: "{thumb}",
                    alt: "{entry.title}",
                    loading: "lazy",
                    class: "h-10 w-10 rounded-lg object-cover",
                }
            } else {
                Icon { name: icon.to_string(), class: "w-6 h-6 text-amber-400".to_string() }
            }
            div { class: "min-w-0 flex-1",
                p { class: "truncate text-sm font-medium text-white", "{entry.title}" }
                if !detail.is_empty() {
                    p { class: "truncate text-xs text-zinc-500", "{detail}" }
                }
            }
        }
    }
}
