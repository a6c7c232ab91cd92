use serde::{Deserialize, Serialize};
use url::Url;

const VIDEO_SUFFIXES: [&str; 4] = [".mp4", ".webm", ".mov", ".m4v"];
const VIDEO_CDN_HOSTS: [&str; 1] = ["googlevideo.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Guess the kind from the location alone: a video suffix or a known
    /// video CDN means video, anything else is treated as an image.
    pub fn infer(url: &str) -> Self {
        let path = Url::parse(url)
            .map(|u| u.path().to_ascii_lowercase())
            .unwrap_or_default();
        let raw = url.to_ascii_lowercase();

        let has_suffix = VIDEO_SUFFIXES
            .iter()
            .any(|ext| raw.ends_with(ext) || path.ends_with(ext));
        let on_video_cdn = VIDEO_CDN_HOSTS.iter().any(|host| raw.contains(host));

        if has_suffix || on_video_cdn {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A direct, fetchable media location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = MediaKind::infer(&url);
        Self { url, kind }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
