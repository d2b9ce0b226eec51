//! Person response types.

use serde::{Deserialize, Serialize};

use super::common::Image;

/// Person entry in `search/person` results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonSearchResult {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Titles the person is known for.
    pub known_for: Vec<KnownFor>,
    /// Adult flag.
    pub adult: bool,
}

/// Title a person is known for (movie or TV).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KnownFor {
    /// Movie or series ID.
    pub id: u64,
    /// `"movie"` or `"tv"`.
    pub media_type: Option<String>,
    /// Movie title.
    pub title: Option<String>,
    /// Series name.
    pub name: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `person/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Birthday (YYYY-MM-DD).
    pub birthday: Option<String>,
    /// Day of death (YYYY-MM-DD).
    pub deathday: Option<String>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Biography.
    pub biography: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u8>,
}

/// Response from `person/{id}/images`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonImagesResponse {
    /// Person ID.
    pub id: Option<u64>,
    /// Profile images.
    pub profiles: Vec<Image>,
}

/// Credit in `person/{id}/combined_credits` (movie or TV).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CombinedCredit {
    /// Movie or series ID.
    pub id: u64,
    /// `"movie"` or `"tv"`.
    pub media_type: Option<String>,
    /// Movie title.
    pub title: Option<String>,
    /// Series name.
    pub name: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Character name (cast).
    pub character: Option<String>,
    /// Job title (crew).
    pub job: Option<String>,
    /// Department (crew).
    pub department: Option<String>,
    /// Movie release date.
    pub release_date: Option<String>,
    /// Series first air date.
    pub first_air_date: Option<String>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `person/{id}/combined_credits`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CombinedCreditsResponse {
    /// Person ID.
    pub id: Option<u64>,
    /// Acting credits.
    pub cast: Vec<CombinedCredit>,
    /// Crew credits.
    pub crew: Vec<CombinedCredit>,
}
