//! Curated response shapes.
//!
//! All types serialize with camelCase keys. Image fields are absolute URLs
//! (empty when the upstream path is missing). Dates are [`DateObject`]s.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::helpers::DateObject;

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

/// Person in a search result page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSearchItem {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image URL.
    pub profile_image_url: String,
    /// Titles the person is known for.
    pub known_for: Vec<KnownForItem>,
}

/// Title a person is known for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownForItem {
    /// Movie or series ID.
    pub id: u64,
    /// `"movie"` or `"tv"`.
    pub media_type: Option<String>,
    /// Movie title or series name.
    pub title: String,
    /// Poster URL.
    pub poster_url: String,
    /// Backdrop URL.
    pub backdrop_url: String,
}

/// Person details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetailsItem {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Birthday.
    pub birthday: Option<DateObject>,
    /// Day of death.
    pub death_day: Option<DateObject>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Biography.
    pub biography: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Profile image URL.
    pub profile_image: String,
}

/// Image with its dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Width / height ratio.
    pub aspect_ratio: f64,
    /// Image URL.
    pub image_url: String,
}

/// Cast member of a movie or series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    /// Character name.
    pub character_name: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Person ID.
    pub person_id: u64,
    /// Person name.
    pub name: String,
    /// Gender code.
    pub gender: Option<u8>,
    /// Profile image URL.
    pub profile_url: String,
    /// Billing order.
    pub order: Option<u32>,
}

/// Crew member of a movie or series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    /// Credit ID.
    pub credit_id: String,
    /// Person ID.
    pub person_id: u64,
    /// Person name.
    pub name: String,
    /// Gender code.
    pub gender: Option<u8>,
    /// Profile image URL.
    pub profile_url: String,
    /// Job title.
    pub job: String,
    /// Department.
    pub department: String,
}

/// Cast and crew of a movie or series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credits {
    /// Cast.
    pub cast: Vec<CastMember>,
    /// Crew.
    pub crew: Vec<CrewMember>,
}

// ---------------------------------------------------------------------------
// Watch providers
// ---------------------------------------------------------------------------

/// Where a movie or series can be watched, per country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchProviders {
    /// Movie or series ID.
    pub id: u64,
    /// Providers keyed by country code.
    pub results: BTreeMap<String, CountryProviders>,
}

/// Watch providers in one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProviders {
    /// `JustWatch` page for the title.
    pub just_watch_link: Option<String>,
    /// Subscription streaming.
    pub stream: Vec<ProviderItem>,
    /// Purchase.
    pub buy: Vec<ProviderItem>,
    /// Rental.
    pub rent: Vec<ProviderItem>,
}

/// One provider offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderItem {
    /// Provider ID.
    pub provider_id: u32,
    /// Provider name.
    pub provider: String,
    /// Display priority.
    pub display_priority: i32,
    /// Logo URL.
    pub logo_url: String,
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

/// Movie in search, recommendation, and list pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date.
    pub release_date: Option<DateObject>,
    /// Poster URL.
    pub poster_url: String,
    /// Backdrop URL.
    pub backdrop_url: String,
    /// Genre names.
    pub genres: Vec<String>,
}

/// Movie details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailsItem {
    /// TMDB movie ID.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Tagline.
    pub tag_line: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Release status.
    pub status: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Budget in USD.
    pub budget: u64,
    /// Revenue in USD.
    pub revenue: u64,
    /// Release date.
    pub release_date: Option<DateObject>,
    /// Poster URL.
    pub poster_url: String,
    /// Backdrop URL.
    pub backdrop_url: String,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// IMDb title page.
    pub imdb_url: String,
    /// Genre names.
    pub genres: Vec<String>,
    /// Videos, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<VideoItem>>,
}

/// Movie video with playable URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    /// TMDB video ID.
    pub id: String,
    /// Language (ISO 639-1).
    pub language: Option<String>,
    /// Country (ISO 3166-1).
    pub country: Option<String>,
    /// Site-specific key.
    pub key: String,
    /// Title.
    pub name: String,
    /// Hosting site.
    pub site: String,
    /// Resolution.
    pub size: u32,
    /// Video type (e.g. `"Trailer"`).
    #[serde(rename = "type")]
    pub video_type: String,
    /// Watch URL (`YouTube` and Vimeo only).
    pub video_url: Option<String>,
    /// Thumbnail URL (`YouTube` only).
    pub video_thumbnail_url: Option<String>,
}

/// A person's movie credits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonMovieCredits {
    /// Acting credits.
    pub cast: Vec<MovieCastCredit>,
    /// Crew credits.
    pub crew: Vec<MovieCrewCredit>,
}

/// Acting credit in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCastCredit {
    /// TMDB movie ID.
    pub movie_id: u64,
    /// Title.
    pub title: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date.
    pub release_date: Option<DateObject>,
    /// Credit ID.
    pub credit_id: String,
    /// Character name.
    pub character_name: Option<String>,
    /// Genre names.
    pub genres: Vec<String>,
    /// Poster URL.
    pub poster_url: String,
    /// Backdrop URL.
    pub backdrop_url: String,
    /// Original language.
    pub original_language: Option<String>,
}

/// Crew credit in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCrewCredit {
    /// TMDB movie ID.
    pub movie_id: u64,
    /// Title.
    pub title: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date.
    pub release_date: Option<DateObject>,
    /// Credit ID.
    pub credit_id: String,
    /// Job title.
    pub job: Option<String>,
    /// Department.
    pub department: Option<String>,
    /// Genre names.
    pub genres: Vec<String>,
    /// Poster URL.
    pub poster_url: String,
    /// Backdrop URL.
    pub backdrop_url: String,
    /// Original language.
    pub original_language: Option<String>,
}

/// Movie in a discover page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDiscoverItem {
    /// TMDB movie ID.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Popularity score.
    pub popularity: f64,
    /// Original language.
    pub original_language: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date.
    pub release_date: Option<DateObject>,
    /// Poster URL.
    pub poster_url: String,
    /// Backdrop URL.
    pub backdrop_url: String,
    /// Genre names.
    pub genres: Vec<String>,
}

// ---------------------------------------------------------------------------
// TV
// ---------------------------------------------------------------------------

/// Series in search, popular, and discover pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TvSummary {
    /// TMDB series ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// First air date.
    pub first_air_date: Option<DateObject>,
    /// Backdrop URL.
    pub backdrop_url: String,
    /// Poster URL.
    pub poster_url: String,
    /// Genre names.
    pub genres: Vec<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Original language.
    pub original_language: Option<String>,
}

/// Series details with external ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TvShowDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Status.
    pub status: Option<String>,
    /// Tagline.
    pub tag_line: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Rounded mean of the episode runtimes (minutes).
    pub avg_episode_run_time: u32,
    /// First air date.
    pub first_air_date: Option<DateObject>,
    /// Last air date.
    pub last_air_date: Option<DateObject>,
    /// Poster URL.
    pub poster_url: String,
    /// Backdrop URL.
    pub backdrop_url: String,
    /// Homepage URL.
    pub home_page: Option<String>,
    /// Total number of episodes.
    pub number_of_episodes: u32,
    /// Total number of seasons.
    pub number_of_seasons: u32,
    /// Genre names.
    pub genres: Vec<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// IMDb title page.
    pub imdb_url: String,
    /// Instagram handle.
    pub instagram_id: Option<String>,
    /// TheTVDB ID.
    pub tvdb_id: Option<u64>,
    /// `TVRage` ID.
    pub tv_rage_id: Option<u64>,
    /// Twitter handle.
    pub twitter_id: Option<String>,
    /// Facebook handle.
    pub facebook_id: Option<String>,
    /// Seasons.
    pub seasons: Vec<SeasonItem>,
}

/// Season summary within series details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonItem {
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Poster URL.
    pub poster_url: String,
    /// Name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Number of episodes.
    pub episode_count: u32,
    /// Air date.
    pub air_date: Option<DateObject>,
}

/// One season with its episodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TvSeasonItem {
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Name.
    pub name: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<DateObject>,
    /// Poster URL.
    pub poster_url: String,
    /// Episodes.
    pub episodes: Vec<EpisodeItem>,
}

/// Episode within a season.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeItem {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<DateObject>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Still image URL.
    pub still_url: String,
    /// Vote average.
    pub vote_average: f64,
}
