use crate::backends::parse_medias;
use crate::core::{Backend, BackendError, MediaItem};
use async_trait::async_trait;
use tracing::debug;

pub const SAVEIG_ENDPOINT: &str = "https://saveig.app/api/ajaxSearch";
pub const SNAPINSTA_ENDPOINT: &str = "https://snapinsta.app/api/ajaxSearch";

/// Instagram download sites that expose an `ajaxSearch` endpoint taking the
/// post URL as form field `q`.
pub struct AjaxSearchBackend {
    name: &'static str,
    endpoint: String,
    client: reqwest::Client,
    require_url_marker: bool,
}

impl AjaxSearchBackend {
    pub fn saveig(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            name: "saveig",
            endpoint: endpoint.into(),
            client,
            require_url_marker: false,
        }
    }

    /// snapinsta answers some failures with 200 and a body that has no media
    /// at all, so a body without any `url` is taken as empty.
    pub fn snapinsta(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            name: "snapinsta",
            endpoint: endpoint.into(),
            client,
            require_url_marker: true,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Backend for AjaxSearchBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn try_resolve(&self, url: &str) -> Result<Vec<MediaItem>, BackendError> {
        debug!(backend = self.name, endpoint = %self.endpoint, "posting search request");

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("q", url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = response.text().await?;
        if self.require_url_marker && !body.contains("url") {
            debug!(backend = self.name, "response carries no media urls");
            return Ok(Vec::new());
        }

        parse_medias(&body)
    }
}
