//! `Tmdb` - initialized handle for curated calls.

use tracing::instrument;

use crate::config::{ApiOptions, TmdbConfig};
use crate::raw::{LocalTmdbRawApi, TmdbClient};

/// Initialized TMDB handle.
///
/// Owns the raw API and the configuration loaded at initialization, so a
/// curated call can never run against missing genre tables or image bases.
#[derive(Debug, Clone)]
pub struct Tmdb<A = TmdbClient> {
    pub(super) api: A,
    pub(super) config: TmdbConfig,
}

impl<A: LocalTmdbRawApi> Tmdb<A> {
    /// Loads the configuration through `api` and returns the handle.
    ///
    /// Failed configuration fetches fall back to built-in defaults (see
    /// [`TmdbConfig::load`]).
    #[instrument(skip_all)]
    pub async fn initialize(api: A, options: ApiOptions) -> Self {
        let config = TmdbConfig::load(&api, options).await;
        Self { api, config }
    }
}

impl<A> Tmdb<A> {
    /// Builds a handle from an already loaded configuration.
    pub const fn with_config(api: A, config: TmdbConfig) -> Self {
        Self { api, config }
    }

    /// Loaded configuration.
    pub const fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Replaces the options block.
    pub fn update_options(&mut self, options: ApiOptions) {
        self.config.options = options;
    }

    /// Underlying raw API.
    pub const fn raw(&self) -> &A {
        &self.api
    }
}
