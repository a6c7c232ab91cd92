pub mod backends;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

pub use config::Config;
pub use core::{
    extract_links, Backend, BackendError, FallbackResolver, LinkResolution, MediaItem, MediaKind,
    Orchestrator, Platform, ResolutionResult,
};
