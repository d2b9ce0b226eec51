//! Response types shared by movie, TV, and person endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of a raw call: the deserialized body and the URL that was called.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse<T> {
    /// Deserialized response body.
    pub data: T,
    /// Request URL (without credentials).
    pub api_call: String,
}

/// Paginated list envelope (`page`, `results`, `total_pages`, `total_results`).
#[derive(Debug, Clone, Deserialize)]
pub struct PagedResponse<T> {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Results on this page.
    #[serde(default)]
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// Genre entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Response from `genre/{movie,tv}/list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreListResponse {
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Image entry from an images endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Width / height ratio.
    pub aspect_ratio: f64,
    /// Relative file path (e.g. `/abc.jpg`).
    pub file_path: String,
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
    /// Language of text in the image (ISO 639-1), `null` for textless.
    pub iso_639_1: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
}

/// Response from `movie/{id}/images` and `tv/{id}/images`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImagesResponse {
    /// Movie or series ID.
    pub id: Option<u64>,
    /// Backdrop images.
    pub backdrops: Vec<Image>,
    /// Poster images.
    pub posters: Vec<Image>,
    /// Logo images.
    pub logos: Vec<Image>,
}

/// Video entry (trailer, teaser, clip...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Video {
    /// TMDB video ID.
    pub id: String,
    /// Language (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Country (ISO 3166-1).
    pub iso_3166_1: Option<String>,
    /// Site-specific key (e.g. `YouTube` video ID).
    pub key: String,
    /// Video title.
    pub name: String,
    /// Hosting site (e.g. `"YouTube"`, `"Vimeo"`).
    pub site: String,
    /// Resolution (e.g. 1080).
    pub size: u32,
    /// Video type (e.g. `"Trailer"`).
    #[serde(rename = "type")]
    pub video_type: String,
    /// Official flag.
    pub official: bool,
    /// Publication timestamp.
    pub published_at: Option<String>,
}

/// Response from `movie/{id}/videos`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideosResponse {
    /// Movie ID.
    pub id: Option<u64>,
    /// Videos.
    pub results: Vec<Video>,
}

/// Cast member in a credits response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CastCredit {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character name.
    pub character: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u8>,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Billing order.
    pub order: Option<u32>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
}

/// Crew member in a credits response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrewCredit {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Credit ID.
    pub credit_id: String,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u8>,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Job title (e.g. `"Director"`).
    pub job: String,
    /// Department (e.g. `"Directing"`).
    pub department: String,
}

/// Response from `movie/{id}/credits` and `tv/{id}/credits`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreditsResponse {
    /// Movie or series ID.
    pub id: Option<u64>,
    /// Cast.
    pub cast: Vec<CastCredit>,
    /// Crew.
    pub crew: Vec<CrewCredit>,
}

/// Response from `credit/{credit_id}`.
///
/// `media` and `person` differ by media type and are kept as JSON values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CreditDetails {
    /// Credit ID.
    pub id: String,
    /// `"cast"` or `"crew"`.
    pub credit_type: Option<String>,
    /// Department.
    pub department: Option<String>,
    /// Job title.
    pub job: Option<String>,
    /// `"movie"` or `"tv"`.
    pub media_type: Option<String>,
    /// Media object.
    pub media: serde_json::Value,
    /// Person object.
    pub person: serde_json::Value,
}

/// Response from `tv/{id}/external_ids` (also appended to TV details).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExternalIds {
    /// Series ID.
    pub id: Option<u64>,
    /// IMDb ID (e.g. `tt0903747`).
    pub imdb_id: Option<String>,
    /// TheTVDB ID.
    pub tvdb_id: Option<u64>,
    /// `TVRage` ID.
    pub tvrage_id: Option<u64>,
    /// Wikidata ID.
    pub wikidata_id: Option<String>,
    /// Facebook handle.
    pub facebook_id: Option<String>,
    /// Instagram handle.
    pub instagram_id: Option<String>,
    /// Twitter handle.
    pub twitter_id: Option<String>,
}

/// A watch provider offering a title.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchProviderItem {
    /// Provider ID.
    pub provider_id: u32,
    /// Provider name.
    pub provider_name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Display priority (lower is more prominent).
    pub display_priority: i32,
}

/// Watch providers for a single country.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryWatchProviders {
    /// `JustWatch` page for the title.
    pub link: Option<String>,
    /// Subscription streaming.
    pub flatrate: Vec<WatchProviderItem>,
    /// Purchase.
    pub buy: Vec<WatchProviderItem>,
    /// Rental.
    pub rent: Vec<WatchProviderItem>,
}

/// Response from `movie/{id}/watch/providers` and `tv/{id}/watch/providers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchProvidersResponse {
    /// Movie or series ID.
    pub id: u64,
    /// Providers keyed by country code (ISO 3166-1).
    pub results: BTreeMap<String, CountryWatchProviders>,
}

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}
