//! `AppConfig` struct and TOML read/write.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write as _};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tmdbkit_api::ApiOptions;
use url::Url;

/// Environment variable holding a v4 read access token.
pub const TOKEN_ENV: &str = "TMDB_API_TOKEN";
/// Environment variable holding a v3 API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Credentials and endpoint.
    #[serde(default)]
    pub tmdb: TmdbSection,
    /// Options applied to curated calls.
    #[serde(default)]
    pub options: ApiOptions,
}

/// `[tmdb]` table.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbSection {
    /// v3 API key, sent as the `api_key` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// v4 read access token, sent as a bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// Override for the API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Credential resolved from the environment and the config file.
#[derive(PartialEq, Eq)]
pub enum Credential {
    /// v3 API key.
    ApiKey(String),
    /// v4 bearer token.
    Bearer(String),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

impl AppConfig {
    /// Reads the config file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// `base_url` is not an http(s) URL.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config
            .base_url()
            .with_context(|| format!("invalid [tmdb] table in {}", path.display()))?;
        Ok(config)
    }

    /// Writes the config file, creating parent directories.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists and `overwrite` is false, or if
    /// the directory or file cannot be written.
    pub fn save(&self, path: &Path, overwrite: bool) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;

        let mut options = OpenOptions::new();
        if overwrite {
            options.write(true).create(true).truncate(true);
        } else {
            options.write(true).create_new(true);
        }
        let mut file = match options.open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => bail!(
                "config file already exists: {} (use --force to overwrite)",
                path.display()
            ),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to open {}", path.display()));
            }
        };
        file.write_all(content.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// API base URL override, normalized to end with `/` so endpoint paths
    /// join under it.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or is not http(s).
    pub fn base_url(&self) -> Result<Option<Url>> {
        let Some(raw) = self.tmdb.base_url.as_deref() else {
            return Ok(None);
        };
        let mut normalized = String::from(raw.trim());
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let url = Url::parse(&normalized).with_context(|| format!("invalid base_url: {raw}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base_url must be an http(s) URL: {raw}");
        }
        Ok(Some(url))
    }

    /// Picks the credential to use.
    ///
    /// Order: `TMDB_API_TOKEN`, `TMDB_API_KEY`, then `bearer_token` and
    /// `api_key` from the file. Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if no credential is available.
    pub fn credential(&self) -> Result<Credential> {
        self.credential_with(|name| std::env::var(name).ok())
    }

    fn credential_with(&self, env: impl Fn(&str) -> Option<String>) -> Result<Credential> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(env(TOKEN_ENV)) {
            return Ok(Credential::Bearer(token));
        }
        if let Some(key) = non_empty(env(API_KEY_ENV)) {
            return Ok(Credential::ApiKey(key));
        }
        if let Some(token) = non_empty(self.tmdb.bearer_token.clone()) {
            return Ok(Credential::Bearer(token));
        }
        if let Some(key) = non_empty(self.tmdb.api_key.clone()) {
            return Ok(Credential::ApiKey(key));
        }
        bail!(
            "TMDB credential is required: set {TOKEN_ENV} or {API_KEY_ENV}, \
             or add one to the [tmdb] table of the config file"
        )
    }

    /// Copy with credentials masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mask = |value: &Option<String>| value.as_ref().map(|_| String::from("***"));
        Self {
            tmdb: TmdbSection {
                api_key: mask(&self.tmdb.api_key),
                bearer_token: mask(&self.tmdb.bearer_token),
                base_url: self.tmdb.base_url.clone(),
            },
            options: self.options.clone(),
        }
    }
}
