//! Caller-controlled options applied to curated calls.

use serde::{Deserialize, Serialize};

/// Options applied to curated calls.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiOptions {
    /// `chrono` format string for [`crate::helpers::DateObject::formatted`].
    pub date_format: String,
    /// Include adult titles in search and discover calls.
    pub include_adult: bool,
    /// Language sent to list endpoints (e.g. `en-US`).
    pub language: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            date_format: String::from("%m-%d-%Y"),
            include_adult: false,
            language: String::from("en-US"),
        }
    }
}

impl ApiOptions {
    /// Sets the date format.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets the adult content flag.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }

    /// Sets the list language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
