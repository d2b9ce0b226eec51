//! Curated calls: raw responses reshaped for direct consumption.

mod common;
mod movies;
mod tmdb;
mod tv;
pub mod types;

use serde::Serialize;

use crate::error::TmdbError;
use crate::raw::RawResponse;
use crate::raw::types::PagedResponse;

pub use tmdb::Tmdb;

/// Result of a curated call.
pub type CuratedResult<T> = Result<Curated<T>, TmdbError>;

/// Reshaped data with the URL of the underlying raw call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Curated<T> {
    /// Reshaped data.
    pub data: T,
    /// Request URL (without credentials).
    pub api_call: String,
}

impl<T> Curated<T> {
    /// Reshapes a raw response, keeping its `api_call`.
    pub fn from_raw<R>(raw: RawResponse<R>, reshape: impl FnOnce(R) -> T) -> Self {
        Self {
            data: reshape(raw.data),
            api_call: raw.api_call,
        }
    }
}

/// Flattened pagination envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Current page number.
    pub page: u32,
    /// Total number of results.
    pub total_results: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Results on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Maps every result of a raw page.
    pub fn from_paged<R>(paged: PagedResponse<R>, map: impl FnMut(R) -> T) -> Self {
        Self {
            page: paged.page,
            total_results: paged.total_results,
            total_pages: paged.total_pages,
            results: paged.results.into_iter().map(map).collect(),
        }
    }
}
