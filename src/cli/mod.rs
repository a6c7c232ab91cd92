use crate::config::Config;
use crate::core::{LinkResolution, MediaKind, Orchestrator, ResolutionResult};
use anyhow::{Context, Result};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

pub const GREETING: &str = "Send YouTube, Instagram, or Facebook link to download media.";

#[derive(Parser)]
#[command(name = "mediagrab")]
#[command(about = "Resolve social media links to direct media URLs")]
#[command(version)]
pub struct Cli {
    /// Message text to scan for links (read from stdin when omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds for scraping backends
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to the yt-dlp binary
    #[arg(long = "yt-dlp", value_name = "PATH")]
    pub ytdlp: Option<String>,

    /// Print results as JSON instead of reply lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One message the chat front end would send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Video(String),
    Photo(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => f.write_str(text),
            Reply::Video(url) => write!(f, "video: {}", url),
            Reply::Photo(url) => write!(f, "photo: {}", url),
        }
    }
}

pub fn render_reply(resolution: &LinkResolution) -> Vec<Reply> {
    let mut replies = vec![Reply::Text(format!(
        "Fetching media from {}...",
        resolution.platform
    ))];

    match &resolution.result {
        ResolutionResult::Success { media } => {
            replies.extend(media.iter().map(|item| match item.kind {
                MediaKind::Video => Reply::Video(item.url.clone()),
                MediaKind::Image => Reply::Photo(item.url.clone()),
            }));
        }
        ResolutionResult::Failure {
            platform,
            manual_url,
        } => replies.push(Reply::Text(format!(
            "Could not fetch media from {}.\nTry manually: {}",
            platform.display_name(),
            manual_url
        ))),
    }

    replies
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(path) = &self.ytdlp {
            config.ytdlp_path = path.clone();
        }
        Ok(config)
    }

    pub async fn read_message(&self) -> Result<String> {
        if !self.message.is_empty() {
            return Ok(self.message.join(" "));
        }

        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("reading message from stdin")?;
        Ok(text)
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let orchestrator = Orchestrator::new(&config)?;

        let text = self.read_message().await?;
        let resolutions = orchestrator.resolve_message(&text).await;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolutions)?);
            return Ok(());
        }

        if resolutions.is_empty() {
            println!("{}", GREETING);
            return Ok(());
        }

        for resolution in &resolutions {
            for reply in render_reply(resolution) {
                println!("{}", reply);
            }
        }

        Ok(())
    }
}
