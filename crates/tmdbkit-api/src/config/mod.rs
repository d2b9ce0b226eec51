//! Configuration fetched once at initialization.
//!
//! Holds the image base URLs, genre lookup tables, the TV watch provider
//! catalogue, and the caller's [`ApiOptions`].

#[allow(clippy::module_inception)]
mod config;
mod genres;
mod options;
mod watch_providers;

pub use config::{DEFAULT_IMG_URL, DEFAULT_SECURE_IMG_URL, TmdbConfig, resolve_image_base};
pub use genres::GenreMap;
pub use options::ApiOptions;
pub use watch_providers::{WATCH_PROVIDER_REGION, WatchProviderEntry, sort_providers};
