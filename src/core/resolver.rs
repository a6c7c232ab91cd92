use crate::backends::{http_client, AjaxSearchBackend, FdownBackend, YtDlpBackend};
use crate::config::Config;
use crate::core::{Backend, BackendError, MediaItem, Platform};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-platform ordered backend chains.
///
/// Backends of a chain are tried one at a time, in registration order, and
/// the first non-empty answer wins. [`Platform::Unknown`] never has a chain.
#[derive(Default)]
pub struct FallbackResolver {
    chains: HashMap<Platform, Vec<Arc<dyn Backend>>>,
}

impl FallbackResolver {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock chains:
    ///
    /// - YouTube: yt-dlp
    /// - Instagram: yt-dlp, saveig, snapinsta
    /// - Facebook: yt-dlp, fdown
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = http_client(config)?;
        let ytdlp: Arc<dyn Backend> = Arc::new(YtDlpBackend::from_config(config));

        let mut resolver = Self::empty();
        resolver
            .register(Platform::YouTube, ytdlp.clone())
            .register(Platform::Instagram, ytdlp.clone())
            .register(
                Platform::Instagram,
                Arc::new(AjaxSearchBackend::saveig(
                    client.clone(),
                    config.endpoints.saveig.clone(),
                )),
            )
            .register(
                Platform::Instagram,
                Arc::new(AjaxSearchBackend::snapinsta(
                    client.clone(),
                    config.endpoints.snapinsta.clone(),
                )),
            )
            .register(Platform::Facebook, ytdlp)
            .register(
                Platform::Facebook,
                Arc::new(FdownBackend::new(client, config.endpoints.fdown.clone())),
            );

        Ok(resolver)
    }

    /// Append `backend` to the end of `platform`'s chain.
    pub fn register(&mut self, platform: Platform, backend: Arc<dyn Backend>) -> &mut Self {
        if platform == Platform::Unknown {
            warn!(backend = backend.name(), "ignoring backend registered for unknown platform");
            return self;
        }
        self.chains.entry(platform).or_default().push(backend);
        self
    }

    /// Backend names of `platform`'s chain, in the order they are tried.
    pub fn chain(&self, platform: Platform) -> Vec<&'static str> {
        self.chains
            .get(&platform)
            .map(|chain| chain.iter().map(|b| b.name()).collect())
            .unwrap_or_default()
    }

    /// Like [`resolve`](Self::resolve), but reports a platform without any
    /// backend as [`BackendError::NoMatch`].
    pub async fn try_resolve_chain(
        &self,
        platform: Platform,
        url: &str,
    ) -> Result<Vec<MediaItem>, BackendError> {
        let chain = match self.chains.get(&platform) {
            Some(chain) if !chain.is_empty() => chain,
            _ => return Err(BackendError::NoMatch(platform.to_string())),
        };

        for backend in chain {
            debug!(%platform, backend = backend.name(), "trying backend");
            let items = backend.resolve(url).await;
            if !items.is_empty() {
                info!(%platform, backend = backend.name(), count = items.len(), "resolved media");
                return Ok(items);
            }
        }

        Ok(Vec::new())
    }

    pub async fn resolve(&self, platform: Platform, url: &str) -> Vec<MediaItem> {
        match self.try_resolve_chain(platform, url).await {
            Ok(items) => items,
            Err(e) => {
                debug!(%url, "{}", e);
                Vec::new()
            }
        }
    }
}
