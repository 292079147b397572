use crate::api::ServerConfig;
use crate::components::{
    ControlsState, NavBar, PlayerCommand, PlayerFrameSignal, PlayerSession, ThumbStripSignal,
    NAV_BAR_HEIGHT, STRIP_HEIGHT,
};
use crate::components::{show_controls, view_label, AppView};
use crate::db::{initialize_database, load_servers, load_settings, AppSettings};
use crate::viewport::frame_size;
use dioxus::prelude::*;
use futures_util::StreamExt;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Vertical chrome around the player surface: the nav bar plus the thumbnail
/// strip below it.
const PLAYER_CHROME_HEIGHT: u32 = NAV_BAR_HEIGHT + STRIP_HEIGHT;

/// Folder whose entries feed the now-playing thumbnail strip.
#[derive(Clone, Copy)]
pub struct NowPlayingDirSignal(pub Signal<Option<String>>);

#[component]
pub fn AppShell() -> Element {
    let mut servers = use_signal(Vec::<ServerConfig>::new);
    let mut app_settings = use_signal(AppSettings::default);
    let session = use_signal(PlayerSession::new);
    let controls = use_signal(ControlsState::new);
    let strip = use_signal(Vec::new);
    let player_frame = use_signal(|| frame_size(Default::default(), PLAYER_CHROME_HEIGHT));
    let now_playing_dir = use_signal(|| None::<String>);
    let mut db_initialized = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| servers);
    use_context_provider(|| app_settings);
    use_context_provider(|| session);
    use_context_provider(|| controls);
    use_context_provider(|| ThumbStripSignal(strip));
    use_context_provider(|| PlayerFrameSignal(player_frame));
    use_context_provider(|| NowPlayingDirSignal(now_playing_dir));

    // The player command loop: the typed selection surface every view and the
    // thumbnail strip send into.
    use_coroutine(move |mut rx: UnboundedReceiver<PlayerCommand>| {
        let mut session = session;
        let mut player_frame = player_frame;
        async move {
            while let Some(command) = rx.next().await {
                match command {
                    PlayerCommand::ShowImage { path } => {
                        session.write().select_image(path);
                        show_controls(controls);
                    }
                    PlayerCommand::PlayAudio { path, label } => {
                        session.write().select_audio(path, label);
                        show_controls(controls);
                    }
                    PlayerCommand::PlayVideo { path } => {
                        session.write().select_video(path);
                        show_controls(controls);
                    }
                    PlayerCommand::Stop => {
                        session.write().clear();
                    }
                }
                // Selection may have remeasured the viewport (audio swaps
                // change the layout); keep the surface box in step.
                let frame = frame_size(session.peek().viewport(), PLAYER_CHROME_HEIGHT);
                player_frame.set(frame);
            }
        }
    });

    // Initialize the database and load saved state on mount, then size the
    // player frame from the first live measurement.
    use_effect(move || {
        let mut session = session;
        let mut player_frame = player_frame;
        spawn(async move {
            if let Err(_e) = initialize_database().await {
                #[cfg(not(target_arch = "wasm32"))]
                eprintln!("Failed to initialize database: {}", _e);
                return;
            }
            db_initialized.set(true);

            if let Ok(saved_servers) = load_servers().await {
                servers.set(saved_servers);
            }

            if let Ok(settings) = load_settings().await {
                app_settings.set(settings);
            }

            let frame = session.write().on_host_resize(PLAYER_CHROME_HEIGHT);
            player_frame.set(frame);
        });
    });

    // Global resize listener: remeasure and re-derive the player frame.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };

        let runtime = Runtime::current();
        let mut session = session;
        let mut player_frame = player_frame;

        let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let frame = session.write().on_host_resize(PLAYER_CHROME_HEIGHT);
            player_frame.set(frame);
        }) as Box<dyn FnMut(_)>);

        let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        resize_cb.forget();
    });

    let route = use_route::<AppView>();
    let title = view_label(&route);

    rsx! {
        document::Title { "RustyCast · {title}" }

        div { class: "flex h-full flex-col",
            NavBar {}
            main { class: "flex-1 overflow-y-auto",
                Outlet::<AppView> {}
            }
        }
    }
}
