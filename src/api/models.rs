use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub id: String,
    pub name: String,
    pub url: String,
    pub active: bool,
}

impl ServerConfig {
    pub fn new(name: String, url: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            url: url.trim_end_matches('/').to_string(),
            active: true,
        }
    }
}

/// What a library row refers to. Folders navigate deeper; the other three
/// select into the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Folder,
    Image,
    Audio,
    Video,
}

/// Bits for the thumbnail-strip `type` filter mask.
pub const TYPE_IMAGE: u32 = 1;
pub const TYPE_AUDIO: u32 = 2;
pub const TYPE_VIDEO: u32 = 4;
pub const TYPE_ALL_MEDIA: u32 = TYPE_IMAGE | TYPE_AUDIO | TYPE_VIDEO;

impl MediaKind {
    pub fn is_playable(&self) -> bool {
        !matches!(self, MediaKind::Folder)
    }

    /// This kind's bit in the `type` filter mask; folders have none.
    pub fn mask_bit(&self) -> u32 {
        match self {
            MediaKind::Folder => 0,
            MediaKind::Image => TYPE_IMAGE,
            MediaKind::Audio => TYPE_AUDIO,
            MediaKind::Video => TYPE_VIDEO,
        }
    }
}

/// One row of a paginated library listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListEntry {
    pub title: String,
    pub path: String,
    #[serde(default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, alias = "childCount")]
    pub child_count: Option<u32>,
}

/// One entry of a thumbnail strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbEntry {
    pub title: String,
    pub path: String,
    pub kind: MediaKind,
}

pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}
