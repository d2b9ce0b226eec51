//! Application configuration module.
//!
//! Manages the TOML config file holding TMDB credentials and the options
//! applied to curated calls.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, Credential, TmdbSection};
pub use paths::resolve_config_path;
