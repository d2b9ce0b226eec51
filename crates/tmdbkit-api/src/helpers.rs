//! Image URL, date, and list helpers used by the curated layer.

use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Upstream date format (`YYYY-MM-DD`).
const TMDB_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rendered image width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    /// `w185`.
    Small,
    /// `w300`.
    #[default]
    Medium,
    /// `w500`.
    Large,
    /// Full resolution.
    Original,
}

impl ImageSize {
    /// Size segment of the image URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "w185",
            Self::Medium => "w300",
            Self::Large => "w500",
            Self::Original => "original",
        }
    }
}

/// Which image collection to return for a movie or series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageType {
    /// Posters.
    #[default]
    Posters,
    /// Backdrops.
    Backdrops,
}

/// Builds an absolute image URL from a relative TMDB path.
///
/// Leading `/` characters are stripped from `path`. A missing or empty path
/// yields an empty string.
#[must_use]
pub fn format_image_url(base: &str, path: Option<&str>, size: ImageSize) -> String {
    let file = path.map(|p| p.trim_start_matches('/')).unwrap_or_default();
    if file.is_empty() {
        return String::new();
    }
    format!("{base}{}/{file}", size.as_str())
}

/// [`format_image_url`] over a list of paths.
#[must_use]
pub fn format_image_urls<S: AsRef<str>>(base: &str, paths: &[S], size: ImageSize) -> Vec<String> {
    paths
        .iter()
        .map(|path| format_image_url(base, Some(path.as_ref()), size))
        .collect()
}

/// A parsed upstream date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateObject {
    /// Calendar date.
    pub date: NaiveDate,
    /// Unix seconds at UTC midnight.
    pub epoch: i64,
    /// Date rendered with the configured format.
    pub formatted: String,
}

/// Parses a `YYYY-MM-DD` date string.
///
/// Returns `None` for a missing, empty, or invalid string. When `format`
/// contains an invalid specifier, `formatted` falls back to `YYYY-MM-DD`.
#[must_use]
pub fn parse_to_date(value: Option<&str>, format: &str) -> Option<DateObject> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(value, TMDB_DATE_FORMAT).ok()?;
    let epoch = date.and_time(NaiveTime::MIN).and_utc().timestamp();

    let mut formatted = String::new();
    if write!(formatted, "{}", date.format(format)).is_err() {
        formatted = date.format(TMDB_DATE_FORMAT).to_string();
    }

    Some(DateObject {
        date,
        epoch,
        formatted,
    })
}

/// Rounded mean of the values; 0 for an empty slice.
#[must_use]
pub fn average_of_array(values: &[u32]) -> u32 {
    let len = u64::try_from(values.len()).unwrap_or(u64::MAX);
    let sum = values
        .iter()
        .fold(0_u64, |acc, &value| acc.saturating_add(u64::from(value)));
    let half = len.checked_div(2).unwrap_or_default();
    let avg = sum.saturating_add(half).checked_div(len).unwrap_or_default();
    u32::try_from(avg).unwrap_or(u32::MAX)
}

/// Joins ids with a delimiter.
#[must_use]
pub fn flatten_ids<T: ToString>(ids: &[T], delimiter: &str) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// IMDb title page for an IMDb id. Empty when the id is missing.
#[must_use]
pub fn imdb_url(imdb_id: Option<&str>) -> String {
    match imdb_id {
        Some(id) if !id.is_empty() => format!("https://www.imdb.com/title/{id}"),
        _ => String::new(),
    }
}

/// Watch URL for a video hosted on `YouTube` or Vimeo.
#[must_use]
pub fn video_url(site: &str, key: &str) -> Option<String> {
    if site.eq_ignore_ascii_case("youtube") {
        Some(format!("https://www.youtube.com/watch?v={key}"))
    } else if site.eq_ignore_ascii_case("vimeo") {
        Some(format!("https://vimeo.com/{key}"))
    } else {
        None
    }
}

/// Thumbnail URL for a video. Only `YouTube` exposes one without an API call.
#[must_use]
pub fn video_thumbnail_url(site: &str, key: &str) -> Option<String> {
    site.eq_ignore_ascii_case("youtube")
        .then(|| format!("https://img.youtube.com/vi/{key}/0.jpg"))
}
