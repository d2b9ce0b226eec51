//! Movie response types.

use serde::Deserialize;

use super::common::{Genre, VideosResponse};

/// Movie entry in search, discover, recommendation, and list responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieResult {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
    /// Release date (YYYY-MM-DD, may be empty).
    pub release_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    pub adult: bool,
    /// Video flag.
    pub video: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `movie/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Release status (e.g. `"Released"`).
    pub status: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Budget in USD.
    pub budget: u64,
    /// Revenue in USD.
    pub revenue: u64,
    /// Release date (YYYY-MM-DD).
    pub release_date: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Videos (present with `append_to_response=videos`).
    pub videos: Option<VideosResponse>,
}

/// Movie credit of a person (`person/{id}/movie_credits`).
///
/// Cast entries carry `character`; crew entries carry `job` and `department`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieCredit {
    /// TMDB movie ID.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date.
    pub release_date: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Character name (cast).
    pub character: Option<String>,
    /// Job title (crew).
    pub job: Option<String>,
    /// Department (crew).
    pub department: Option<String>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
}

/// Response from `person/{id}/movie_credits`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MoviePersonCredits {
    /// Person ID.
    pub id: Option<u64>,
    /// Acting credits.
    pub cast: Vec<MovieCredit>,
    /// Crew credits.
    pub crew: Vec<MovieCredit>,
}
