use crate::core::{BackendError, MediaItem};
use async_trait::async_trait;
use tracing::{debug, warn};

/// One external extraction service.
///
/// Implementors only write [`try_resolve`](Backend::try_resolve); callers use
/// [`resolve`](Backend::resolve), which never fails. Any error is logged with
/// the backend's name and turned into an empty list so the next backend in a
/// chain gets its turn.
#[async_trait]
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn try_resolve(&self, url: &str) -> Result<Vec<MediaItem>, BackendError>;

    async fn resolve(&self, url: &str) -> Vec<MediaItem> {
        match self.try_resolve(url).await {
            Ok(items) => {
                debug!(backend = self.name(), count = items.len(), "backend finished");
                items
            }
            Err(e) => {
                warn!(backend = self.name(), "[{} FAIL] {}", self.name(), e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    #[async_trait]
    impl Backend for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn try_resolve(&self, _url: &str) -> Result<Vec<MediaItem>, BackendError> {
            Err(BackendError::Engine("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_resolve_absorbs_errors() {
        let backend = Broken;
        assert!(backend.try_resolve("https://x").await.is_err());
        assert!(backend.resolve("https://x").await.is_empty());
    }
}
