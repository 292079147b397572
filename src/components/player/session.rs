//! Player session state: which media kind is active, which asset it shows,
//! and the viewport the next asset request should be sized for. All mutation
//! goes through the operations below; the rendering surface is derived from
//! the state on every render, never cached.

use crate::api::{MediaCenterClient, SourceCandidate};
use crate::viewport::{self, frame_size, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    Empty,
    Image,
    Audio,
    Video,
}

#[derive(Debug, Clone, PartialEq)]
enum LoadedAsset {
    Image(String),
    Audio { path: String, label: String },
    Video { path: String, resolution: Viewport },
}

/// What the rendering surface should currently show. Audio and video carry
/// their source candidates in descending preference; the element picks the
/// first it can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Empty,
    Image {
        src: String,
    },
    Audio {
        label: String,
        sources: Vec<SourceCandidate>,
    },
    Video {
        sources: Vec<SourceCandidate>,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSession {
    loaded: Option<LoadedAsset>,
    viewport: Viewport,
    measured: bool,
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerSession {
    pub fn new() -> Self {
        Self {
            loaded: None,
            viewport: Viewport::default(),
            measured: false,
        }
    }

    pub fn mode(&self) -> PlayerMode {
        match &self.loaded {
            None => PlayerMode::Empty,
            Some(LoadedAsset::Image(_)) => PlayerMode::Image,
            Some(LoadedAsset::Audio { .. }) => PlayerMode::Audio,
            Some(LoadedAsset::Video { .. }) => PlayerMode::Video,
        }
    }

    /// Remembered image path, present only in Image mode. Resize re-requests
    /// are issued for exactly this path.
    pub fn current_image(&self) -> Option<&str> {
        match &self.loaded {
            Some(LoadedAsset::Image(path)) => Some(path),
            _ => None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Title of the active asset, if it carries one.
    pub fn label(&self) -> Option<&str> {
        match &self.loaded {
            Some(LoadedAsset::Audio { label, .. }) => Some(label),
            _ => None,
        }
    }

    pub fn select_image(&mut self, path: impl Into<String>) {
        self.measure_if_first();
        self.loaded = Some(LoadedAsset::Image(path.into()));
    }

    pub fn select_audio(&mut self, path: impl Into<String>, label: impl Into<String>) {
        self.loaded = Some(LoadedAsset::Audio {
            path: path.into(),
            label: label.into(),
        });
        // The audio surface occupies different vertical space than an image,
        // so the swap needs a fresh layout measurement.
        self.viewport = viewport::measure();
        self.measured = true;
    }

    pub fn select_video(&mut self, path: impl Into<String>) {
        self.measure_if_first();
        // The transcoder targets the size negotiated now; a later resize does
        // not restart the stream.
        self.loaded = Some(LoadedAsset::Video {
            path: path.into(),
            resolution: self.viewport,
        });
    }

    /// Reset to the empty state (page unload or navigation away).
    pub fn clear(&mut self) {
        self.loaded = None;
    }

    pub fn on_resize(&mut self) {
        self.on_resize_to(viewport::measure());
    }

    /// Resize with an explicit measurement. In Image mode the surface derives
    /// a fresh request at the new size for the unchanged remembered path;
    /// audio and video surfaces are not resolution-parameterized and keep
    /// their sources.
    pub fn on_resize_to(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.measured = true;
    }

    /// Composite-surface resize: remeasure, then report the size left for an
    /// embedded sub-frame once the sibling chrome took its share.
    pub fn on_host_resize(&mut self, chrome_height: u32) -> Viewport {
        self.on_resize();
        frame_size(self.viewport, chrome_height)
    }

    /// Derive the rendering surface from the current state.
    pub fn surface(&self, client: &MediaCenterClient) -> Surface {
        match &self.loaded {
            None => Surface::Empty,
            Some(LoadedAsset::Image(path)) => Surface::Image {
                src: client.image_url(path, self.viewport),
            },
            Some(LoadedAsset::Audio { path, label }) => Surface::Audio {
                label: label.clone(),
                sources: client.audio_sources(path),
            },
            Some(LoadedAsset::Video { path, resolution }) => Surface::Video {
                sources: client.video_sources(path, *resolution),
                width: resolution.width,
                height: resolution.height,
            },
        }
    }

    fn measure_if_first(&mut self) {
        if !self.measured {
            self.viewport = viewport::measure();
            self.measured = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ServerConfig;
    use crate::viewport::DEFAULT_VIEWPORT;

    fn client() -> MediaCenterClient {
        MediaCenterClient::new(ServerConfig {
            id: "s1".to_string(),
            name: "Den".to_string(),
            url: "http://nas:4280".to_string(),
            active: true,
        })
    }

    #[test]
    fn starts_empty() {
        let session = PlayerSession::new();
        assert_eq!(session.mode(), PlayerMode::Empty);
        assert_eq!(session.current_image(), None);
        assert_eq!(session.surface(&client()), Surface::Empty);
    }

    #[test]
    fn first_image_selection_measures_viewport() {
        let mut session = PlayerSession::new();
        session.select_image("/photos/a.jpg");
        assert_eq!(session.mode(), PlayerMode::Image);
        // Headless measurement degrades to the fixed default.
        assert_eq!(session.viewport(), DEFAULT_VIEWPORT);

        let Surface::Image { src } = session.surface(&client()) else {
            panic!("expected image surface");
        };
        assert!(src.contains("resolution=630x460"));
    }

    #[test]
    fn resize_rerequests_same_image_at_new_size() {
        let mut session = PlayerSession::new();
        session.select_image("/photos/a.jpg");

        session.on_resize_to(Viewport {
            width: 1280,
            height: 720,
        });

        assert_eq!(session.current_image(), Some("/photos/a.jpg"));
        let Surface::Image { src } = session.surface(&client()) else {
            panic!("expected image surface");
        };
        assert!(src.contains("/photos/a.jpg"));
        assert!(src.contains("resolution=1280x720"));
    }

    #[test]
    fn later_selections_keep_the_measured_viewport() {
        let mut session = PlayerSession::new();
        session.on_resize_to(Viewport {
            width: 1920,
            height: 1080,
        });

        session.select_image("/photos/b.jpg");
        let Surface::Image { src } = session.surface(&client()) else {
            panic!("expected image surface");
        };
        assert!(src.contains("resolution=1920x1080"));
    }

    #[test]
    fn switching_to_audio_clears_remembered_image() {
        let mut session = PlayerSession::new();
        session.select_image("/photos/a.jpg");
        assert_eq!(session.current_image(), Some("/photos/a.jpg"));

        session.select_audio("/music/song.flac", "Song");
        assert_eq!(session.mode(), PlayerMode::Audio);
        assert_eq!(session.current_image(), None);
        assert_eq!(session.label(), Some("Song"));

        // A later resize must not produce an image request.
        session.on_resize_to(Viewport {
            width: 800,
            height: 600,
        });
        let Surface::Audio { sources, .. } = session.surface(&client()) else {
            panic!("expected audio surface");
        };
        assert!(!sources.is_empty());
    }

    #[test]
    fn switching_to_video_clears_remembered_image() {
        let mut session = PlayerSession::new();
        session.select_image("/photos/a.jpg");
        session.select_video("/videos/clip.avi");
        assert_eq!(session.mode(), PlayerMode::Video);
        assert_eq!(session.current_image(), None);
    }

    #[test]
    fn any_selection_overrides_any_prior_mode() {
        let mut session = PlayerSession::new();
        session.select_audio("/music/a.flac", "A");
        session.select_video("/videos/b.avi");
        assert_eq!(session.mode(), PlayerMode::Video);
        session.select_image("/photos/c.jpg");
        assert_eq!(session.mode(), PlayerMode::Image);
        assert_eq!(session.current_image(), Some("/photos/c.jpg"));
    }

    #[test]
    fn video_resolution_is_fixed_at_selection() {
        let mut session = PlayerSession::new();
        session.on_resize_to(Viewport {
            width: 1024,
            height: 576,
        });
        session.select_video("/videos/clip.avi");

        session.on_resize_to(Viewport {
            width: 1920,
            height: 1080,
        });

        let Surface::Video { sources, width, .. } = session.surface(&client()) else {
            panic!("expected video surface");
        };
        assert_eq!(width, 1024);
        assert!(sources.iter().all(|s| s.url.contains("resolution=1024x576")));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut session = PlayerSession::new();
        session.select_image("/photos/a.jpg");
        session.clear();
        assert_eq!(session.mode(), PlayerMode::Empty);
        assert_eq!(session.surface(&client()), Surface::Empty);
    }

    #[test]
    fn host_resize_reserves_chrome_space() {
        let mut session = PlayerSession::new();
        let frame = session.on_host_resize(160);
        // Native measurement is the 630x460 default; the sub-frame keeps the
        // width and gives up the chrome height.
        assert_eq!(frame.width, 630);
        assert_eq!(frame.height, 300);
    }
}
