//! Raw TMDB v3 calls.
//!
//! One method per endpoint. Responses are deserialized into the types in
//! [`types`] and returned with the URL that was requested.

mod api;
mod client;
mod params;
pub mod types;

pub use api::{LocalTmdbRawApi, RawResult, TmdbRawApi};
pub use client::{TmdbClient, TmdbClientBuilder};
pub use params::{CompareType, DiscoverCriteria, MovieList, ParseSortByError, SortBy};
pub use types::RawResponse;
