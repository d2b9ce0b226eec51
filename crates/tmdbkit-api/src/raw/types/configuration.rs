//! Types for `configuration` and `watch/providers/{tv,movie}`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Response from `configuration`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigurationResponse {
    /// Image configuration.
    pub images: ImagesConfiguration,
    /// Keys tracked by the changes endpoints.
    pub change_keys: Vec<String>,
}

/// Image configuration block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImagesConfiguration {
    /// Plain HTTP image base (e.g. `http://image.tmdb.org/t/p/`).
    pub base_url: Option<String>,
    /// HTTPS image base.
    pub secure_base_url: Option<String>,
    /// Available backdrop sizes.
    pub backdrop_sizes: Vec<String>,
    /// Available logo sizes.
    pub logo_sizes: Vec<String>,
    /// Available poster sizes.
    pub poster_sizes: Vec<String>,
    /// Available profile sizes.
    pub profile_sizes: Vec<String>,
    /// Available still sizes.
    pub still_sizes: Vec<String>,
}

/// Response from `watch/providers/tv`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderListResponse {
    /// Providers.
    pub results: Vec<ProviderListEntry>,
}

/// Provider in the provider catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderListEntry {
    /// Provider ID.
    pub provider_id: u32,
    /// Provider name.
    pub provider_name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Display priority per country code.
    pub display_priorities: BTreeMap<String, i32>,
}
