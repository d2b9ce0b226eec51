//! `TmdbConfig` - values fetched once at initialization.

use serde::Serialize;
use tracing::{instrument, warn};

use super::genres::GenreMap;
use super::options::ApiOptions;
use super::watch_providers::{WATCH_PROVIDER_REGION, WatchProviderEntry, sort_providers};
use crate::helpers::{ImageSize, format_image_url};
use crate::raw::LocalTmdbRawApi;
use crate::raw::types::ImagesConfiguration;

/// Plain HTTP image base used when `configuration` is unavailable.
pub const DEFAULT_IMG_URL: &str = "http://image.tmdb.org/t/p/";

/// HTTPS image base used when `configuration` is unavailable.
pub const DEFAULT_SECURE_IMG_URL: &str = "https://image.tmdb.org/t/p/";

/// Configuration shared by every curated call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbConfig {
    /// Plain HTTP image base URL.
    pub img_url: String,
    /// HTTPS image base URL.
    pub secure_img_url: String,
    /// TV genre table.
    pub tv_genres: GenreMap,
    /// Movie genre table.
    pub movie_genres: GenreMap,
    /// TV watch provider catalogue, ranked for [`WATCH_PROVIDER_REGION`].
    pub watch_providers: Vec<WatchProviderEntry>,
    /// Caller options.
    pub options: ApiOptions,
}

impl TmdbConfig {
    /// Configuration built only from built-in defaults.
    #[must_use]
    pub fn fallback(options: ApiOptions) -> Self {
        Self {
            img_url: String::from(DEFAULT_IMG_URL),
            secure_img_url: String::from(DEFAULT_SECURE_IMG_URL),
            tv_genres: GenreMap::default_tv(),
            movie_genres: GenreMap::default_movie(),
            watch_providers: Vec::new(),
            options,
        }
    }

    /// Fetches `configuration`, both genre lists, and the TV provider
    /// catalogue concurrently.
    ///
    /// Never fails: each failed fetch is logged and replaced by its
    /// built-in default.
    #[instrument(skip_all)]
    pub async fn load<A: LocalTmdbRawApi>(api: &A, options: ApiOptions) -> Self {
        let (configuration, tv_genres, movie_genres, providers) = tokio::join!(
            api.configuration(),
            api.tv_genres(),
            api.movie_genres(),
            api.tv_watch_provider_list(WATCH_PROVIDER_REGION),
        );

        let images = match configuration {
            Ok(response) => Some(response.data.images),
            Err(err) => {
                warn!(error = %err, "failed to fetch TMDB configuration");
                None
            }
        };
        let (img_url, secure_img_url) = resolve_image_base(images.as_ref());

        let tv_genres = match tv_genres {
            Ok(response) => GenreMap::from_genres(&response.data.genres),
            Err(err) => {
                warn!(error = %err, "failed to fetch TV genres, using built-in table");
                GenreMap::default_tv()
            }
        };

        let movie_genres = match movie_genres {
            Ok(response) => GenreMap::from_genres(&response.data.genres),
            Err(err) => {
                warn!(error = %err, "failed to fetch movie genres, using built-in table");
                GenreMap::default_movie()
            }
        };

        let watch_providers = match providers {
            Ok(response) => sort_providers(&response.data.results, WATCH_PROVIDER_REGION),
            Err(err) => {
                warn!(error = %err, "failed to fetch TV watch providers");
                Vec::new()
            }
        };

        tracing::debug!(
            tv_genres = tv_genres.len(),
            movie_genres = movie_genres.len(),
            watch_providers = watch_providers.len(),
            "TMDB configuration loaded"
        );

        Self {
            img_url,
            secure_img_url,
            tv_genres,
            movie_genres,
            watch_providers,
            options,
        }
    }

    /// Image base URL.
    #[must_use]
    pub fn image_base(&self, secure: bool) -> &str {
        if secure {
            &self.secure_img_url
        } else {
            &self.img_url
        }
    }

    /// Absolute image URL for a relative path. Empty when `path` is missing.
    #[must_use]
    pub fn image_url(&self, path: Option<&str>, size: ImageSize, secure: bool) -> String {
        format_image_url(self.image_base(secure), path, size)
    }
}

/// Picks `(img_url, secure_img_url)` from the image configuration.
///
/// Falls back to both built-in bases (with one warning) when the block is
/// missing or either URL is missing or empty.
#[must_use]
pub fn resolve_image_base(images: Option<&ImagesConfiguration>) -> (String, String) {
    let bases = images.and_then(|images| {
        let plain = images.base_url.as_deref().filter(|url| !url.is_empty())?;
        let secure = images
            .secure_base_url
            .as_deref()
            .filter(|url| !url.is_empty())?;
        Some((String::from(plain), String::from(secure)))
    });

    bases.unwrap_or_else(|| {
        warn!(
            img_url = DEFAULT_IMG_URL,
            secure_img_url = DEFAULT_SECURE_IMG_URL,
            "image base URLs unavailable, using defaults"
        );
        (
            String::from(DEFAULT_IMG_URL),
            String::from(DEFAULT_SECURE_IMG_URL),
        )
    })
}
