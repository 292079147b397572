use crate::api::{MediaKind, ThumbEntry};
use crate::components::{
    delay_ms, Icon, NowPlayingDirSignal, Player, PlayerCommand, PlayerMode, PlayerSession,
    ThumbStripSignal, ThumbnailBar,
};
use crate::db::AppSettings;
use dioxus::prelude::*;
use rand::seq::SliceRandom;

/// Pick the image shown after `current`. Sequential order walks the strip
/// and wraps; shuffle picks any other image.
fn next_slide(entries: &[ThumbEntry], current: &str, shuffle: bool) -> Option<String> {
    let images: Vec<&ThumbEntry> = entries
        .iter()
        .filter(|entry| entry.kind == MediaKind::Image)
        .collect();
    if images.is_empty() {
        return None;
    }

    if shuffle {
        let others: Vec<&&ThumbEntry> = images
            .iter()
            .filter(|entry| entry.path != current)
            .collect();
        return others
            .choose(&mut rand::thread_rng())
            .map(|entry| entry.path.clone())
            .or_else(|| Some(images[0].path.clone()));
    }

    let position = images.iter().position(|entry| entry.path == current);
    let next = match position {
        Some(index) => images[(index + 1) % images.len()],
        None => images[0],
    };
    Some(next.path.clone())
}

#[component]
pub fn NowPlaying() -> Element {
    let session = use_context::<Signal<PlayerSession>>();
    let settings = use_context::<Signal<AppSettings>>();
    let strip = use_context::<ThumbStripSignal>().0;
    let dir = use_context::<NowPlayingDirSignal>().0;
    let commands = use_coroutine_handle::<PlayerCommand>();

    let mut slideshow_on = use_signal(|| false);
    let mut slide_generation = use_signal(|| 0u64);

    // Arm the slide timer for the image on screen. Any selection change or
    // toggle bumps the generation, so a superseded timer fires into nothing.
    use_effect(move || {
        let advancing = slideshow_on();
        let current = session().current_image().map(str::to_string);
        slide_generation.with_mut(|value| *value = value.saturating_add(1));
        let generation = *slide_generation.peek();

        let Some(current) = current else {
            return;
        };
        if !advancing {
            return;
        }

        let delay = settings.peek().slide_duration_ms as u64;
        let shuffle = settings.peek().slideshow_shuffle;

        spawn(async move {
            delay_ms(delay).await;
            if *slide_generation.peek() != generation {
                return;
            }
            if let Some(next) = next_slide(&strip.peek(), &current, shuffle) {
                commands.send(PlayerCommand::ShowImage { path: next });
            }
        });
    });

    let mode = session().mode();
    let playing_dir = dir();
    let slideshow_icon = if slideshow_on() { "pause" } else { "play" };

    rsx! {
        div { class: "flex flex-col items-center gap-4 p-6",
            div { class: "flex w-full max-w-5xl items-center justify-between",
                h1 { class: "text-xl font-bold text-white", "Now Playing" }
                if mode == PlayerMode::Image {
                    button {
                        class: "flex items-center gap-2 rounded-xl bg-zinc-800/60 px-3 py-2 text-sm text-zinc-300 hover:text-white",
                        onclick: move |_| {
                            let on = *slideshow_on.peek();
                            slideshow_on.set(!on);
                        },
                        Icon { name: slideshow_icon.to_string(), class: "w-4 h-4".to_string() }
                        span { "Slideshow" }
                    }
                }
            }

            Player {}

            if let Some(path) = playing_dir {
                ThumbnailBar { path }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: MediaKind, path: &str) -> ThumbEntry {
        ThumbEntry {
            title: path.to_string(),
            path: path.to_string(),
            kind,
        }
    }

    #[test]
    fn sequential_advance_wraps_and_skips_non_images() {
        let entries = vec![
            entry(MediaKind::Image, "/p/a.jpg"),
            entry(MediaKind::Audio, "/m/s.flac"),
            entry(MediaKind::Image, "/p/b.jpg"),
        ];

        assert_eq!(
            next_slide(&entries, "/p/a.jpg", false).as_deref(),
            Some("/p/b.jpg")
        );
        assert_eq!(
            next_slide(&entries, "/p/b.jpg", false).as_deref(),
            Some("/p/a.jpg")
        );
        // Unknown current restarts at the first image.
        assert_eq!(
            next_slide(&entries, "/gone.jpg", false).as_deref(),
            Some("/p/a.jpg")
        );
    }

    #[test]
    fn no_images_means_no_advance() {
        let entries = vec![entry(MediaKind::Audio, "/m/s.flac")];
        assert_eq!(next_slide(&entries, "/p/a.jpg", false), None);
        assert_eq!(next_slide(&entries, "/p/a.jpg", true), None);
    }

    #[test]
    fn shuffle_never_repeats_when_alternatives_exist() {
        let entries = vec![
            entry(MediaKind::Image, "/p/a.jpg"),
            entry(MediaKind::Image, "/p/b.jpg"),
        ];
        for _ in 0..16 {
            assert_eq!(
                next_slide(&entries, "/p/a.jpg", true).as_deref(),
                Some("/p/b.jpg")
            );
        }
        // A one-image strip keeps showing that image.
        let single = vec![entry(MediaKind::Image, "/p/a.jpg")];
        assert_eq!(
            next_slide(&single, "/p/a.jpg", true).as_deref(),
            Some("/p/a.jpg")
        );
    }
}
