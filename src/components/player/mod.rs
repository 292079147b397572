//! The player: session state machine, controls overlay, and the component
//! that renders the active surface.

mod controls;
mod session;

pub use controls::*;
pub use session::*;

use crate::api::{MediaCenterClient, ServerConfig};
use crate::viewport::Viewport;
use dioxus::prelude::*;

/// Commands the rest of the app sends to the player. Selection results are
/// typed; the handlers form a small fixed set.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    ShowImage { path: String },
    PlayAudio { path: String, label: String },
    PlayVideo { path: String },
    Stop,
}

impl PlayerCommand {
    /// Command for a selected library entry; folders are not selectable into
    /// the player.
    pub fn for_selection(kind: crate::api::MediaKind, path: &str, title: &str) -> Option<Self> {
        use crate::api::MediaKind;
        match kind {
            MediaKind::Folder => None,
            MediaKind::Image => Some(PlayerCommand::ShowImage {
                path: path.to_string(),
            }),
            MediaKind::Audio => Some(PlayerCommand::PlayAudio {
                path: path.to_string(),
                label: title.to_string(),
            }),
            MediaKind::Video => Some(PlayerCommand::PlayVideo {
                path: path.to_string(),
            }),
        }
    }
}

/// Size of the box the player surface may fill, viewport minus chrome.
#[derive(Clone, Copy)]
pub struct PlayerFrameSignal(pub Signal<Viewport>);

fn active_server(servers: &[ServerConfig]) -> Option<ServerConfig> {
    servers.iter().find(|s| s.active).cloned()
}

/// Display title for the overlay: the audio label, or the file name of the
/// shown image.
fn surface_title(session: &PlayerSession) -> String {
    if let Some(label) = session.label() {
        return label.to_string();
    }
    session
        .current_image()
        .and_then(|path| path.rsplit('/').next())
        .unwrap_or("")
        .to_string()
}

#[component]
pub fn Player() -> Element {
    let servers = use_context::<Signal<Vec<ServerConfig>>>();
    let session = use_context::<Signal<PlayerSession>>();
    let controls = use_context::<Signal<ControlsState>>();
    let frame = use_context::<PlayerFrameSignal>().0;

    let Some(server) = active_server(&servers()) else {
        return rsx! {
            div { class: "flex items-center justify-center py-20 text-zinc-500",
                "No media server configured"
            }
        };
    };

    let client = MediaCenterClient::new(server);
    let current = session();
    let surface = current.surface(&client);
    let title = surface_title(&current);
    let box_size = frame();

    rsx! {
        div {
            class: "player-surface mx-auto rounded-xl",
            style: "width:{box_size.width}px;height:{box_size.height}px;",
            onpointermove: move |_| show_controls(controls),
            onpointerdown: move |_| show_controls(controls),

            {match surface {
                Surface::Empty => rsx! {
                    div { class: "flex h-full items-center justify-center text-zinc-600",
                        "Nothing playing"
                    }
                },
                Surface::Image { src } => rsx! {
                    img { src: "{src}", alt: "{title}" }
                },
                Surface::Audio { label, sources } => rsx! {
                    div { class: "flex h-full flex-col items-center justify-center gap-4",
                        p { class: "text-lg text-zinc-200", "{label}" }
                        audio { autoplay: true,
                            for source in sources {
                                source { src: "{source.url}", r#type: "{source.mime}" }
                            }
                        }
                    }
                },
                Surface::Video { sources, width, height } => rsx! {
                    video { autoplay: true, width: "{width}", height: "{height}",
                        for source in sources {
                            source { src: "{source.url}", r#type: "{source.mime}" }
                        }
                    }
                },
            }}

            ControlsOverlay { title }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MediaKind;

    #[test]
    fn selection_maps_kind_to_typed_command() {
        assert_eq!(
            PlayerCommand::for_selection(MediaKind::Image, "/p/a.jpg", "a"),
            Some(PlayerCommand::ShowImage {
                path: "/p/a.jpg".to_string()
            })
        );
        assert_eq!(
            PlayerCommand::for_selection(MediaKind::Audio, "/m/s.flac", "Song"),
            Some(PlayerCommand::PlayAudio {
                path: "/m/s.flac".to_string(),
                label: "Song".to_string()
            })
        );
        assert_eq!(
            PlayerCommand::for_selection(MediaKind::Video, "/v/c.avi", "c"),
            Some(PlayerCommand::PlayVideo {
                path: "/v/c.avi".to_string()
            })
        );
        assert_eq!(
            PlayerCommand::for_selection(MediaKind::Folder, "/d/", "d"),
            None
        );
    }

    #[test]
    fn surface_title_prefers_label_then_image_name() {
        let mut session = PlayerSession::new();
        assert_eq!(surface_title(&session), "");

        session.select_image("/photos/holiday/img_0001.jpg");
        assert_eq!(surface_title(&session), "img_0001.jpg");

        session.select_audio("/music/song.flac", "Song");
        assert_eq!(surface_title(&session), "Song");
    }
}
