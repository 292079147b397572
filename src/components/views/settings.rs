use crate::api::ServerConfig;
use crate::components::{delay_ms, Icon};
use crate::db::{save_servers, save_settings, AppSettings};
use dioxus::prelude::*;

fn resolve_server_name(name: &str, url: &str) -> String {
    let name = name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    url.trim_start_matches("http://")
        .trim_start_matches("https://")
        .trim_end_matches('/')
        .to_string()
}

/// Show a transient notice, cleared after a short delay.
fn flash_status(mut save_status: Signal<Option<String>>, message: &str) {
    save_status.set(Some(message.to_string()));
    spawn(async move {
        delay_ms(2000).await;
        save_status.set(None);
    });
}

fn persist_servers(servers: Signal<Vec<ServerConfig>>) {
    spawn(async move {
        let _ = save_servers(servers.peek().clone()).await;
    });
}

#[component]
pub fn Settings() -> Element {
    let mut servers = use_context::<Signal<Vec<ServerConfig>>>();
    let mut app_settings = use_context::<Signal<AppSettings>>();

    let mut server_name = use_signal(String::new);
    let mut server_url = use_signal(String::new);
    let save_status = use_signal(|| None::<String>);

    let on_add = move |_| {
        let url = server_url().trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            return;
        }
        let name = resolve_server_name(&server_name(), &url);

        let new_server = ServerConfig::new(name, url);
        servers.with_mut(|list| {
            for server in list.iter_mut() {
                server.active = false;
            }
            list.push(new_server);
        });
        server_name.set(String::new());
        server_url.set(String::new());

        persist_servers(servers);
        flash_status(save_status, "Server added!");
    };

    let on_save_settings = move |_| {
        spawn(async move {
            let _ = save_settings(app_settings.peek().clone()).await;
        });
        flash_status(save_status, "Settings saved!");
    };

    let server_list = servers();
    let settings = app_settings();

    rsx! {
        div { class: "mx-auto max-w-2xl space-y-8 p-6",
            header { class: "page-header",
                h1 { class: "text-2xl font-bold text-white", "Settings" }
            }

            if let Some(message) = save_status() {
                div { class: "rounded-xl border border-emerald-500/35 bg-emerald-500/10 px-4 py-2 text-sm text-emerald-300",
                    "{message}"
                }
            }

            section { class: "space-y-3",
                h2 { class: "text-sm font-semibold uppercase tracking-wider text-zinc-500",
                    "Media servers"
                }
                for server in server_list {
                    div { class: "flex items-center gap-3 rounded-xl border border-zinc-800/60 bg-zinc-900/40 px-4 py-3",
                        button {
                            class: if server.active {
                                "h-3 w-3 rounded-full bg-emerald-400"
                            } else {
                                "h-3 w-3 rounded-full bg-zinc-600 hover:bg-zinc-400"
                            },
                            title: "Use this server",
                            onclick: {
                                let id = server.id.clone();
                                move |_| {
                                    servers.with_mut(|list| {
                                        for server in list.iter_mut() {
                                            server.active = server.id == id;
                                        }
                                    });
                                    persist_servers(servers);
                                }
                            },
                        }
                        div { class: "min-w-0 flex-1",
                            p { class: "truncate text-sm font-medium text-white", "{server.name}" }
                            p { class: "truncate text-xs text-zinc-500", "{server.url}" }
                        }
                        button {
                            class: "rounded-lg p-2 text-zinc-500 hover:text-rose-400",
                            title: "Remove",
                            onclick: {
                                let id = server.id.clone();
                                move |_| {
                                    servers.with_mut(|list| list.retain(|s| s.id != id));
                                    persist_servers(servers);
                                    flash_status(save_status, "Server removed");
                                }
                            },
                            Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                        }
                    }
                }

                div { class: "flex flex-col gap-2 md:flex-row",
                    input {
                        class: "flex-1 rounded-xl border border-zinc-700/50 bg-zinc-800/50 px-4 py-2 text-sm text-white placeholder:text-zinc-500",
                        placeholder: "Name (optional)",
                        value: server_name,
                        oninput: move |e| server_name.set(e.value()),
                    }
                    input {
                        class: "flex-1 rounded-xl border border-zinc-700/50 bg-zinc-800/50 px-4 py-2 text-sm text-white placeholder:text-zinc-500",
                        placeholder: "http://server:4280",
                        value: server_url,
                        oninput: move |e| server_url.set(e.value()),
                    }
                    button {
                        class: "rounded-xl bg-amber-500/20 px-4 py-2 text-sm font-medium text-amber-400 hover:bg-amber-500/30",
                        onclick: on_add,
                        "Add"
                    }
                }
            }

            section { class: "space-y-3",
                h2 { class: "text-sm font-semibold uppercase tracking-wider text-zinc-500",
                    "Slideshow"
                }
                label { class: "flex items-center justify-between rounded-xl border border-zinc-800/60 bg-zinc-900/40 px-4 py-3 text-sm text-zinc-300",
                    span { "Slide duration (ms)" }
                    input {
                        class: "w-28 rounded-lg border border-zinc-700/50 bg-zinc-800/50 px-3 py-1 text-right text-sm text-white",
                        r#type: "number",
                        min: "1000",
                        step: "500",
                        value: "{settings.slide_duration_ms}",
                        oninput: move |e| {
                            if let Ok(ms) = e.value().parse::<u32>() {
                                app_settings.write().slide_duration_ms = ms.max(1000);
                            }
                        },
                    }
                }
                label { class: "flex items-center justify-between rounded-xl border border-zinc-800/60 bg-zinc-900/40 px-4 py-3 text-sm text-zinc-300",
                    span { "Shuffle order" }
                    input {
                        r#type: "checkbox",
                        checked: settings.slideshow_shuffle,
                        onchange: move |e| {
                            app_settings.write().slideshow_shuffle = e.checked();
                        },
                    }
                }
                label { class: "flex items-center justify-between rounded-xl border border-zinc-800/60 bg-zinc-900/40 px-4 py-3 text-sm text-zinc-300",
                    span { "Thumbnail size (px)" }
                    input {
                        class: "w-28 rounded-lg border border-zinc-700/50 bg-zinc-800/50 px-3 py-1 text-right text-sm text-white",
                        r#type: "number",
                        min: "80",
                        step: "40",
                        value: "{settings.thumb_size}",
                        oninput: move |e| {
                            if let Ok(size) = e.value().parse::<u32>() {
                                app_settings.write().thumb_size = size.clamp(80, 640);
                            }
                        },
                    }
                }
                button {
                    class: "rounded-xl bg-amber-500/20 px-4 py-2 text-sm font-medium text-amber-400 hover:bg-amber-500/30",
                    onclick: on_save_settings,
                    "Save settings"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_name_falls_back_to_host() {
        assert_eq!(resolve_server_name("Den", "http://nas:4280"), "Den");
        assert_eq!(resolve_server_name("  ", "http://nas:4280/"), "nas:4280");
        assert_eq!(resolve_server_name("", "https://media.home"), "media.home");
    }
}
