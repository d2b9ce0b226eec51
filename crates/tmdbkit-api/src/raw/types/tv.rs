//! TV response types.

use serde::{Deserialize, Serialize};

use super::common::{ExternalIds, Genre};

/// Series entry in search, discover, and popular responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TvResult {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
    /// Origin countries (ISO 3166-1).
    pub origin_country: Vec<String>,
    /// First air date (YYYY-MM-DD, may be empty).
    pub first_air_date: Option<String>,
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
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `tv/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Status (e.g. `"Returning Series"`, `"Ended"`).
    pub status: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Typical episode runtimes in minutes.
    pub episode_run_time: Vec<u32>,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Last air date.
    pub last_air_date: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Total number of episodes.
    pub number_of_episodes: u32,
    /// Total number of seasons.
    pub number_of_seasons: u32,
    /// Whether the show is still in production.
    pub in_production: bool,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Season summaries.
    pub seasons: Vec<SeasonSummary>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// External IDs (present with `append_to_response=external_ids`).
    pub external_ids: Option<ExternalIds>,
}

/// Season summary within TV details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Number of episodes in this season.
    pub episode_count: u32,
    /// Air date of this season.
    pub air_date: Option<String>,
    /// Season name.
    pub name: String,
    /// Season overview.
    pub overview: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// Response from `tv/{id}/season/{season_number}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TvSeason {
    /// Internal `MongoDB` ID.
    #[serde(rename = "_id")]
    pub internal_id: Option<String>,
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    pub name: Option<String>,
    /// Season overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Episodes in this season.
    pub episodes: Vec<Episode>,
}

/// A single episode within a season.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Episode name.
    pub name: String,
    /// Episode overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Parent show ID.
    pub show_id: Option<u64>,
}

/// TV credit of a person (`person/{id}/tv_credits`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TvCredit {
    /// TMDB series ID.
    pub id: u64,
    /// Series name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Character name (cast).
    pub character: Option<String>,
    /// Job title (crew).
    pub job: Option<String>,
    /// Department (crew).
    pub department: Option<String>,
    /// Number of episodes credited.
    pub episode_count: Option<u32>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
}

/// Response from `person/{id}/tv_credits`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TvPersonCredits {
    /// Person ID.
    pub id: Option<u64>,
    /// Acting credits.
    pub cast: Vec<TvCredit>,
    /// Crew credits.
    pub crew: Vec<TvCredit>,
}
