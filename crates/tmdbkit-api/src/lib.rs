//! TMDB API client library.
//!
//! Provides a raw layer that issues one GET per TMDB v3 endpoint and a
//! curated layer ([`Tmdb`]) that reshapes those responses using the
//! configuration fetched once at initialization.

/// Configuration fetched at initialization (image bases, genre tables).
pub mod config;

/// Curated calls built on top of the raw layer.
pub mod curated;

/// Normalized error for TMDB API calls.
pub mod error;

/// Image URL, date, and list helpers.
pub mod helpers;

/// Raw TMDB API calls.
pub mod raw;

pub use config::{ApiOptions, GenreMap, TmdbConfig, WatchProviderEntry};
pub use curated::{Curated, CuratedResult, Page, Tmdb};
pub use error::TmdbError;
pub use helpers::{DateObject, ImageSize, ImageType};
pub use raw::{
    CompareType, DiscoverCriteria, LocalTmdbRawApi, MovieList, RawResponse, SortBy, TmdbClient,
    TmdbClientBuilder, TmdbRawApi,
};
