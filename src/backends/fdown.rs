use crate::backends::medias_from_value;
use crate::core::{Backend, BackendError, MediaItem};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

pub const FDOWN_ENDPOINT: &str = "https://fdown.net/download.php";

// Direct fbcdn video links as they appear in the download page, either plain
// or with JSON-escaped slashes.
static VIDEO_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https:(?:\\/|/){2}video[^"'\s<>]+"#).expect("video link pattern is valid")
});

/// Facebook video lookup through fdown.net.
pub struct FdownBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl FdownBackend {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn request_url(&self, url: &str) -> String {
        format!("{}?URLz={}", self.endpoint, urlencoding::encode(url))
    }

    /// Accepts either a `medias` JSON document or the HTML download page.
    pub fn parse_page(body: &str) -> Vec<MediaItem> {
        if let Ok(value) = serde_json::from_str::<Value>(body.trim()) {
            if value.is_object() {
                return medias_from_value(&value);
            }
        }

        VIDEO_LINK_RE
            .find_iter(body)
            .map(|m| m.as_str().replace("\\/", "/").replace("&amp;", "&"))
            .filter(|link| link.contains(".mp4"))
            .map(MediaItem::new)
            .collect()
    }
}

#[async_trait]
impl Backend for FdownBackend {
    fn name(&self) -> &'static str {
        "fdown"
    }

    async fn try_resolve(&self, url: &str) -> Result<Vec<MediaItem>, BackendError> {
        let request_url = self.request_url(url);
        debug!(backend = "fdown", %request_url, "fetching download page");

        let response = self.client.get(&request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = response.text().await?;
        Ok(Self::parse_page(&body))
    }
}
