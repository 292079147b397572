//! Defines the application routes.

use crate::components::views::{Browse, Home, NowPlaying, Settings};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/browse/:..segments")]
    Browse { segments: Vec<String> },
    #[route("/playing")]
    NowPlaying {},
    #[route("/settings")]
    Settings {},
}

impl AppView {
    /// Route for a library folder path such as `/photos/holiday/`.
    pub fn browse(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        AppView::Browse { segments }
    }
}

/// Library path for a browse route; folders always carry a trailing slash.
pub fn browse_path(segments: &[String]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home {} => "Home",
        AppView::Browse { .. } => "Library",
        AppView::NowPlaying {} => "Now Playing",
        AppView::Settings {} => "Settings",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_round_trips_library_paths() {
        let AppView::Browse { segments } = AppView::browse("/photos/holiday/") else {
            panic!("expected browse route");
        };
        assert_eq!(segments, vec!["photos".to_string(), "holiday".to_string()]);
        assert_eq!(browse_path(&segments), "/photos/holiday/");
    }

    #[test]
    fn browse_root_is_slash() {
        assert_eq!(browse_path(&[]), "/");
    }
}
