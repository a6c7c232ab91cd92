use crate::config::Config;
use crate::core::{extract_links, FallbackResolver, MediaItem, Platform};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResolutionResult {
    Success { media: Vec<MediaItem> },
    Failure { platform: Platform, manual_url: String },
}

impl ResolutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ResolutionResult::Success { .. })
    }

    pub fn media(&self) -> &[MediaItem] {
        match self {
            ResolutionResult::Success { media } => media,
            ResolutionResult::Failure { .. } => &[],
        }
    }
}

/// Outcome for one link found in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResolution {
    pub link: String,
    pub platform: Platform,
    pub result: ResolutionResult,
}

/// `<service>/en?url=<link>`, the page users are pointed at when nothing
/// could be resolved automatically. The link is passed through untouched.
pub fn manual_lookup_url(service: &str, link: &str) -> String {
    format!("{}/en?url={}", service.trim_end_matches('/'), link)
}

/// Drives a message through link extraction, classification and the
/// platform's fallback chain. Links are handled one after another.
pub struct Orchestrator {
    resolver: FallbackResolver,
    lookup_service: String,
}

impl Orchestrator {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_resolver(
            FallbackResolver::from_config(config)?,
            config.lookup_service.clone(),
        ))
    }

    pub fn with_resolver(resolver: FallbackResolver, lookup_service: impl Into<String>) -> Self {
        Self {
            resolver,
            lookup_service: lookup_service.into(),
        }
    }

    pub fn resolver(&self) -> &FallbackResolver {
        &self.resolver
    }

    pub async fn resolve_message(&self, text: &str) -> Vec<LinkResolution> {
        let links = extract_links(text);
        info!(count = links.len(), "extracted links");

        let mut resolutions = Vec::with_capacity(links.len());
        for link in links {
            resolutions.push(self.resolve_link(&link).await);
        }
        resolutions
    }

    pub async fn resolve_link(&self, link: &str) -> LinkResolution {
        let platform = Platform::detect(link);
        info!(%link, %platform, "fetching media");

        let media = self.resolver.resolve(platform, link).await;
        let result = if media.is_empty() {
            warn!(%link, %platform, "could not resolve media");
            ResolutionResult::Failure {
                platform,
                manual_url: manual_lookup_url(&self.lookup_service, link),
            }
        } else {
            ResolutionResult::Success { media }
        };

        LinkResolution {
            link: link.to_string(),
            platform,
            result,
        }
    }
}
