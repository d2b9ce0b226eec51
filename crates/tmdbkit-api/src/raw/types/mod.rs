//! TMDB API response types.
//!
//! Field names follow the upstream JSON. Values TMDB may send as `null`
//! are `Option`; missing arrays deserialize as empty.

mod common;
mod configuration;
mod movie;
mod person;
mod tv;

pub use common::{
    CastCredit, CountryWatchProviders, CreditDetails, CreditsResponse, CrewCredit, ExternalIds,
    Genre, GenreListResponse, Image, ImagesResponse, PagedResponse, RawResponse, TmdbErrorResponse,
    Video, VideosResponse, WatchProviderItem, WatchProvidersResponse,
};
pub use configuration::{ConfigurationResponse, ImagesConfiguration, ProviderListEntry, ProviderListResponse};
pub use movie::{MovieCredit, MovieDetails, MoviePersonCredits, MovieResult};
pub use person::{
    CombinedCredit, CombinedCreditsResponse, KnownFor, PersonDetails, PersonImagesResponse,
    PersonSearchResult,
};
pub use tv::{Episode, SeasonSummary, TvCredit, TvDetails, TvPersonCredits, TvResult, TvSeason};
