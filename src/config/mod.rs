use crate::backends::ajax_search::{SAVEIG_ENDPOINT, SNAPINSTA_ENDPOINT};
use crate::backends::fdown::FDOWN_ENDPOINT;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chat bot credential. Only the chat front end needs it.
    #[serde(skip_serializing)]
    pub bot_token: Option<String>,
    pub user_agent: String,
    /// Per-request timeout for scraping backends, in seconds.
    pub timeout: u64,
    /// Upper bound for one `yt-dlp` run, in seconds.
    pub engine_timeout: u64,
    pub ytdlp_path: String,
    /// Base of the manual lookup link offered when every backend fails.
    pub lookup_service: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub saveig: String,
    pub snapinsta: String,
    pub fdown: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: None,
            user_agent: format!("mediagrab/{}", env!("CARGO_PKG_VERSION")),
            timeout: 10,
            engine_timeout: 60,
            ytdlp_path: "yt-dlp".to_string(),
            lookup_service: "https://www.hitube.io".to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            saveig: SAVEIG_ENDPOINT.to_string(),
            snapinsta: SNAPINSTA_ENDPOINT.to_string(),
            fdown: FDOWN_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overlaid with the TOML file at `path` if given, then with
    /// `BOT_TOKEN` from the environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_token(std::env::var(BOT_TOKEN_VAR).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_token(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.bot_token = Some(token);
        }
    }

    pub fn require_bot_token(&self) -> anyhow::Result<&str> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("{} is not set", BOT_TOKEN_VAR))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn engine_timeout(&self) -> Duration {
        Duration::from_secs(self.engine_timeout)
    }
}
