//! Horizontal thumbnail strip for the folder whose item is playing. Runs its
//! own continuation chain, independent of any list chain.

use crate::api::{MediaCenterClient, ServerConfig, ThumbEntry, TYPE_ALL_MEDIA};
use crate::components::player::PlayerCommand;
use crate::db::AppSettings;
use crate::pagination::{run_continuation, THUMB_PAGE_SIZE};
use dioxus::prelude::*;

/// Vertical space the strip occupies below the player surface.
pub const STRIP_HEIGHT: u32 = 120;

/// The loaded strip entries, shared so the slideshow can walk them.
#[derive(Clone, Copy)]
pub struct ThumbStripSignal(pub Signal<Vec<ThumbEntry>>);

#[component]
pub fn ThumbnailBar(path: String) -> Element {
    let servers = use_context::<Signal<Vec<ServerConfig>>>();
    let settings = use_context::<Signal<AppSettings>>();
    let mut strip = use_context::<ThumbStripSignal>().0;
    let commands = use_coroutine_handle::<PlayerCommand>();
    let mut generation = use_signal(|| 0u64);

    use_effect(use_reactive!(|path| {
        let server = servers().into_iter().find(|s| s.active);
        generation.with_mut(|value| *value = value.saturating_add(1));
        let chain = *generation.peek();
        strip.set(Vec::new());

        let Some(server) = server else {
            return;
        };

        spawn(async move {
            let client = MediaCenterClient::new(server);
            run_continuation(
                "items",
                &path,
                0,
                THUMB_PAGE_SIZE,
                |query| {
                    let client = &client;
                    async move {
                        client
                            .fetch_thumbnail_page(
                                &query.path,
                                query.start,
                                query.page_size,
                                TYPE_ALL_MEDIA,
                            )
                            .await
                    }
                },
                |page| {
                    // A newer chain owns the strip now; drop stale pages.
                    if *generation.peek() == chain {
                        strip.write().extend(page);
                    }
                },
            )
            .await;
        });
    }));

    let Some(server) = servers().into_iter().find(|s| s.active) else {
        return rsx! {};
    };
    let client = MediaCenterClient::new(server);
    let thumb_size = settings().thumb_size;
    let thumb_px = thumb_size / 2;
    let entries = strip();

    rsx! {
        div {
            class: "thumb-strip flex items-center gap-2 px-4",
            style: "height:{STRIP_HEIGHT}px;",
            for entry in entries {
                button {
                    class: "shrink-0 overflow-hidden rounded-lg border border-zinc-800/60 hover:border-zinc-500",
                    title: "{entry.title}",
                    onclick: {
                        let entry = entry.clone();
                        move |_| {
                            if let Some(command) =
                                PlayerCommand::for_selection(entry.kind, &entry.path, &entry.title)
                            {
                                commands.send(command);
                            }
                        }
                    },
                    img {
                        src: client.thumbnail_url(&entry.path, thumb_size),
                        alt: "{entry.title}",
                        loading: "lazy",
                        style: "width:{thumb_px}px;height:{thumb_px}px;object-fit:cover;",
                    }
                }
            }
        }
    }
}
