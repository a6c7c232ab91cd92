pub mod backend;
pub mod error;
pub mod link;
pub mod media;
pub mod orchestrator;
pub mod platform;
pub mod resolver;

pub use backend::Backend;
pub use error::BackendError;
pub use link::extract_links;
pub use media::{MediaItem, MediaKind};
pub use orchestrator::{manual_lookup_url, LinkResolution, Orchestrator, ResolutionResult};
pub use platform::Platform;
pub use resolver::FallbackResolver;
