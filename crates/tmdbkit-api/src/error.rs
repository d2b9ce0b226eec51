//! `TmdbError` - failure of a single TMDB API call.

use reqwest::StatusCode;

/// Failure of a single TMDB API call.
///
/// Every variant except [`TmdbError::Url`] and [`TmdbError::Segment`] carries the URL of the call
/// (without credentials).
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// The API answered with a non-success HTTP status.
    #[error("TMDB API error (HTTP {status}): {message}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
        /// TMDB `status_code` from the error body, if present.
        tmdb_code: Option<u32>,
        /// TMDB `status_message`, or the raw body when it is not JSON.
        message: String,
        /// URL of the call.
        api_call: String,
    },

    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {api_call}")]
    Transport {
        /// URL of the call.
        api_call: String,
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode JSON response: {api_call}")]
    Decode {
        /// URL of the call.
        api_call: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The endpoint path could not be joined onto the base URL.
    #[error("failed to join URL path: {path}")]
    Url {
        /// Endpoint path that was being joined.
        path: String,
        /// Underlying URL error.
        #[source]
        source: url::ParseError,
    },

    /// An id cannot be sent as a single path segment (empty, `.` or `..`).
    #[error("invalid path segment: {segment:?}")]
    Segment {
        /// Rejected id.
        segment: String,
    },
}

impl TmdbError {
    /// HTTP status of the failed call, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status(),
            Self::Decode { .. } | Self::Url { .. } | Self::Segment { .. } => None,
        }
    }

    /// Canonical reason phrase of [`Self::status`] (e.g. `"Not Found"`).
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        self.status().and_then(|status| status.canonical_reason())
    }

    /// TMDB-specific error code from the error body.
    #[must_use]
    pub const fn tmdb_code(&self) -> Option<u32> {
        match self {
            Self::Status { tmdb_code, .. } => *tmdb_code,
            Self::Transport { .. }
            | Self::Decode { .. }
            | Self::Url { .. }
            | Self::Segment { .. } => None,
        }
    }

    /// URL of the failed call.
    #[must_use]
    pub fn api_call(&self) -> Option<&str> {
        match self {
            Self::Status { api_call, .. }
            | Self::Transport { api_call, .. }
            | Self::Decode { api_call, .. } => Some(api_call),
            Self::Url { .. } | Self::Segment { .. } => None,
        }
    }
}
