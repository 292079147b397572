use crate::api::models::*;
use crate::pagination::PageQuery;
use crate::viewport::Viewport;
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// One playable source offered to a rendering surface. Candidates are listed
/// in descending preference; the surface picks the first it can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCandidate {
    pub url: String,
    pub mime: &'static str,
}

/// Audio output variants the server can produce, most preferred first.
const AUDIO_VARIANTS: [(&str, &str); 3] = [
    ("oga", "audio/ogg"),
    ("wav", "audio/wave"),
    ("mp3", "audio/mpeg"),
];

/// Video output variants, most preferred first.
const VIDEO_VARIANTS: [(&str, &str); 3] = [
    ("ogv", "video/ogg; codecs=\"theora, flac\""),
    ("mpeg", "video/mpeg"),
    ("flv", "video/x-flv"),
];

pub struct MediaCenterClient {
    pub server: ServerConfig,
}

impl MediaCenterClient {
    pub fn new(server: ServerConfig) -> Self {
        Self { server }
    }

    /// List page request: `{path}?{container}={start},{page_size}`.
    pub fn list_page_url(&self, container: &str, path: &str, start: u32, page_size: u32) -> String {
        format!(
            "{}{}?{}={},{}",
            self.server.url,
            path,
            urlencoding::encode(container),
            start,
            page_size
        )
    }

    /// Thumbnail strip page request: `{path}?items={start},{count}&type={mask}`.
    pub fn thumbnail_page_url(&self, path: &str, start: u32, count: u32, type_mask: u32) -> String {
        format!(
            "{}{}?items={},{}&type={}",
            self.server.url, path, start, count, type_mask
        )
    }

    /// Image asset sized to the viewport. Rebuilt on every call so a viewport
    /// change is always reflected in the next request.
    pub fn image_url(&self, path: &str, viewport: Viewport) -> String {
        format!(
            "{}{}?format=jpeg&resolution={}&bgcolor=000000",
            self.server.url,
            path,
            viewport.resolution()
        )
    }

    /// Square thumbnail for list rows and the thumbnail strip.
    pub fn thumbnail_url(&self, path: &str, size: u32) -> String {
        format!(
            "{}{}-thumb.png?resolution={}x{}",
            self.server.url, path, size, size
        )
    }

    pub fn audio_sources(&self, path: &str) -> Vec<SourceCandidate> {
        AUDIO_VARIANTS
            .iter()
            .map(|(format, mime)| SourceCandidate {
                url: format!("{}{}?format={}", self.server.url, path, format),
                mime,
            })
            .collect()
    }

    /// Video sources carry the resolution the transcoder should target. The
    /// size is fixed when the selection is made; a later resize only changes
    /// the element box, not the stream.
    pub fn video_sources(&self, path: &str, viewport: Viewport) -> Vec<SourceCandidate> {
        VIDEO_VARIANTS
            .iter()
            .map(|(format, mime)| SourceCandidate {
                url: format!(
                    "{}{}?format={}&resolution={}",
                    self.server.url,
                    path,
                    format,
                    viewport.resolution()
                ),
                mime,
            })
            .collect()
    }

    pub async fn fetch_list_page(&self, query: &PageQuery) -> Result<Vec<ListEntry>, String> {
        let url = self.list_page_url(&query.container, &query.path, query.start, query.page_size);
        self.fetch_rows(&url, "api.list_page").await
    }

    pub async fn fetch_thumbnail_page(
        &self,
        path: &str,
        start: u32,
        count: u32,
        type_mask: u32,
    ) -> Result<Vec<ThumbEntry>, String> {
        let url = self.thumbnail_page_url(path, start, count, type_mask);
        self.fetch_rows(&url, "api.thumbnail_page").await
    }

    async fn fetch_rows<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        scope: &str,
    ) -> Result<Vec<T>, String> {
        #[cfg(not(target_arch = "wasm32"))]
        let started_at = std::time::Instant::now();

        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("status {}", response.status()));
        }

        let rows: Vec<T> = response.json().await.map_err(|e| e.to_string())?;

        #[cfg(not(target_arch = "wasm32"))]
        crate::diagnostics::log_perf(scope, started_at, &format!("rows={}", rows.len()));
        #[cfg(target_arch = "wasm32")]
        let _ = scope;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MediaCenterClient {
        MediaCenterClient::new(ServerConfig {
            id: "s1".to_string(),
            name: "Den".to_string(),
            url: "http://nas:4280".to_string(),
            active: true,
        })
    }

    #[test]
    fn list_page_url_matches_protocol_shape() {
        let url = client().list_page_url("items", "/browse/photos/", 0, 128);
        assert_eq!(url, "http://nas:4280/browse/photos/?items=0,128");

        let url = client().list_page_url("roots", "/", 0, 0);
        assert_eq!(url, "http://nas:4280/?roots=0,0");
    }

    #[test]
    fn thumbnail_page_url_carries_type_mask() {
        let url = client().thumbnail_page_url("/browse/photos/", 16, 16, TYPE_ALL_MEDIA);
        assert_eq!(url, "http://nas:4280/browse/photos/?items=16,16&type=7");
    }

    #[test]
    fn image_url_embeds_viewport_and_hints() {
        let vp = Viewport {
            width: 1280,
            height: 720,
        };
        let url = client().image_url("/photos/img_0001.jpg", vp);
        assert_eq!(
            url,
            "http://nas:4280/photos/img_0001.jpg?format=jpeg&resolution=1280x720&bgcolor=000000"
        );
    }

    #[test]
    fn image_url_is_rebuilt_per_viewport() {
        let c = client();
        let small = c.image_url(
            "/p.jpg",
            Viewport {
                width: 630,
                height: 460,
            },
        );
        let large = c.image_url(
            "/p.jpg",
            Viewport {
                width: 1920,
                height: 1080,
            },
        );
        assert_ne!(small, large);
        assert!(large.contains("resolution=1920x1080"));
    }

    #[test]
    fn audio_sources_descend_in_preference() {
        let sources = client().audio_sources("/music/song.flac");
        assert_eq!(sources.len(), 3);
        assert_eq!(
            sources[0].url,
            "http://nas:4280/music/song.flac?format=oga"
        );
        assert_eq!(sources[0].mime, "audio/ogg");
        assert_eq!(sources[2].mime, "audio/mpeg");
        // Audio variants are not resolution-parameterized.
        assert!(sources.iter().all(|s| !s.url.contains("resolution")));
    }

    #[test]
    fn video_sources_snapshot_resolution() {
        let vp = Viewport {
            width: 1024,
            height: 576,
        };
        let sources = client().video_sources("/videos/clip.avi", vp);
        assert_eq!(sources.len(), 3);
        assert!(sources
            .iter()
            .all(|s| s.url.contains("resolution=1024x576")));
        assert!(sources[0].mime.starts_with("video/ogg"));
    }

    #[test]
    fn thumbnail_url_is_square() {
        let url = client().thumbnail_url("/photos/img_0001.jpg", 160);
        assert_eq!(
            url,
            "http://nas:4280/photos/img_0001.jpg-thumb.png?resolution=160x160"
        );
    }
}
