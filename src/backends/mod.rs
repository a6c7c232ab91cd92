pub mod ajax_search;
pub mod fdown;
pub mod ytdlp;

pub use ajax_search::AjaxSearchBackend;
pub use fdown::FdownBackend;
pub use ytdlp::YtDlpBackend;

use crate::config::Config;
use crate::core::{BackendError, MediaItem};
use serde_json::Value;

/// Shared HTTP client for the scraping backends.
pub fn http_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
}

/// Parse a scraper response body of the shape `{"medias": [{"url": ...}]}`.
///
/// Only a body that is not JSON at all is an error; a missing `medias` list or
/// entries without a `url` just contribute nothing.
pub fn parse_medias(body: &str) -> Result<Vec<MediaItem>, BackendError> {
    let value: Value = serde_json::from_str(body.trim())?;
    Ok(medias_from_value(&value))
}

pub(crate) fn medias_from_value(value: &Value) -> Vec<MediaItem> {
    value
        .get("medias")
        .and_then(Value::as_array)
        .map(|medias| {
            medias
                .iter()
                .filter_map(|m| m.get("url").and_then(Value::as_str))
                .filter(|url| !url.is_empty())
                .map(MediaItem::new)
                .collect()
        })
        .unwrap_or_default()
}
