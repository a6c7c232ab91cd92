use crate::config::Config;
use crate::core::{Backend, BackendError, MediaItem};
use crate::utils::{run_output_with_timeout, stderr_summary};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// General purpose extraction through the `yt-dlp` binary.
///
/// Runs in metadata-only mode (`--skip-download`, best single format, quiet)
/// and reads the direct `url` of the selected format out of the JSON dump.
/// Playlists and multi-media posts come back as `entries`, one item each.
pub struct YtDlpBackend {
    program: String,
    socket_timeout: Duration,
    run_timeout: Duration,
}

impl YtDlpBackend {
    pub fn new(program: impl Into<String>, socket_timeout: Duration, run_timeout: Duration) -> Self {
        Self {
            program: program.into(),
            socket_timeout,
            run_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.ytdlp_path.clone(),
            config.request_timeout(),
            config.engine_timeout(),
        )
    }

    pub fn build_args(&self, url: &str) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--skip-download".to_string(),
            "--format".to_string(),
            "best".to_string(),
            "--quiet".to_string(),
            "--no-warnings".to_string(),
            "--no-progress".to_string(),
            "--socket-timeout".to_string(),
            self.socket_timeout.as_secs().to_string(),
            url.to_string(),
        ]
    }

    pub fn parse_info(stdout: &str) -> Result<Vec<MediaItem>, BackendError> {
        let info: Value = serde_json::from_str(stdout.trim())?;
        if !info.is_object() {
            return Err(BackendError::MalformedResponse(
                "info JSON is not an object".to_string(),
            ));
        }

        let urls: Vec<&str> = match info.get("entries").and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| entry.get("url").and_then(Value::as_str))
                .collect(),
            None => info.get("url").and_then(Value::as_str).into_iter().collect(),
        };

        Ok(urls
            .into_iter()
            .filter(|url| !url.is_empty())
            .map(MediaItem::new)
            .collect())
    }
}

#[async_trait]
impl Backend for YtDlpBackend {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn try_resolve(&self, url: &str) -> Result<Vec<MediaItem>, BackendError> {
        let args = self.build_args(url);
        debug!(program = %self.program, ?args, "running extraction engine");

        let output = run_output_with_timeout(&self.program, &args, self.run_timeout).await?;
        if !output.status.success() {
            return Err(BackendError::Engine(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr_summary(&output)
            )));
        }

        Self::parse_info(&String::from_utf8_lossy(&output.stdout))
    }
}
