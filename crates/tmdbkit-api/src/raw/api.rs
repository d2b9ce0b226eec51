//! `TmdbRawApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::TmdbError;

use super::params::{DiscoverCriteria, MovieList};
use super::types::{
    CombinedCreditsResponse, ConfigurationResponse, CreditDetails, CreditsResponse, ExternalIds,
    GenreListResponse, ImagesResponse, MovieDetails, MoviePersonCredits, MovieResult,
    PagedResponse, PersonDetails, PersonImagesResponse, PersonSearchResult, ProviderListResponse,
    RawResponse, TvDetails, TvPersonCredits, TvResult, TvSeason, VideosResponse,
    WatchProvidersResponse,
};

/// Shorthand for the result of a raw call.
pub type RawResult<T> = Result<RawResponse<T>, TmdbError>;

/// Raw TMDB API surface.
///
/// One method per endpoint, so the curated layer can run against a mock.
/// `trait_variant::make` generates the `Send`-bound [`TmdbRawApi`].
///
/// Every method returns [`TmdbError`] when the request fails, the API answers
/// with a non-success status, or the body does not decode.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbRawApi: Send)]
pub trait LocalTmdbRawApi {
    /// `configuration`: image base URLs and sizes.
    async fn configuration(&self) -> RawResult<ConfigurationResponse>;

    /// `genre/tv/list`.
    async fn tv_genres(&self) -> RawResult<GenreListResponse>;

    /// `genre/movie/list`.
    async fn movie_genres(&self) -> RawResult<GenreListResponse>;

    /// `watch/providers/tv` for one region.
    async fn tv_watch_provider_list(&self, region: &str) -> RawResult<ProviderListResponse>;

    /// `search/person`.
    async fn search_person(
        &self,
        query: &str,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<PersonSearchResult>>;

    /// `person/{id}`.
    async fn person_details(&self, person_id: u64) -> RawResult<PersonDetails>;

    /// `person/{id}/images`.
    async fn person_images(&self, person_id: u64) -> RawResult<PersonImagesResponse>;

    /// `person/{id}/combined_credits`.
    async fn person_combined_credits(&self, person_id: u64) -> RawResult<CombinedCreditsResponse>;

    /// `credit/{credit_id}`.
    async fn credit_details(&self, credit_id: &str) -> RawResult<CreditDetails>;

    /// `search/movie`.
    async fn movie_search_by_title(
        &self,
        query: &str,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<MovieResult>>;

    /// `movie/{id}`, optionally with `append_to_response=videos`.
    async fn movie_details(&self, movie_id: u64, with_videos: bool) -> RawResult<MovieDetails>;

    /// `movie/{id}/videos`.
    async fn movie_videos(&self, movie_id: u64) -> RawResult<VideosResponse>;

    /// `movie/{id}/recommendations`.
    async fn movie_recommendations(
        &self,
        movie_id: u64,
        page: u32,
    ) -> RawResult<PagedResponse<MovieResult>>;

    /// `movie/{id}/images`.
    async fn movie_images(&self, movie_id: u64) -> RawResult<ImagesResponse>;

    /// `movie/{id}/credits`.
    async fn movie_credits(&self, movie_id: u64) -> RawResult<CreditsResponse>;

    /// `movie/{id}/watch/providers`.
    async fn movie_watch_providers(&self, movie_id: u64) -> RawResult<WatchProvidersResponse>;

    /// `person/{id}/movie_credits`.
    async fn movie_person_credits(&self, person_id: u64) -> RawResult<MoviePersonCredits>;

    /// `movie/popular`, `movie/now_playing`, or `movie/upcoming`.
    async fn movie_list(
        &self,
        list: MovieList,
        page: u32,
        language: &str,
    ) -> RawResult<PagedResponse<MovieResult>>;

    /// `discover/movie`.
    async fn movie_discover(
        &self,
        criteria: &DiscoverCriteria,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<MovieResult>>;

    /// `search/tv`.
    async fn tv_search_by_title(
        &self,
        query: &str,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<TvResult>>;

    /// `tv/{id}` with `append_to_response=external_ids`.
    async fn tv_details(&self, series_id: u64) -> RawResult<TvDetails>;

    /// `tv/{id}/season/{season_number}`.
    async fn tv_episodes(&self, series_id: u64, season_number: u32) -> RawResult<TvSeason>;

    /// `tv/{id}/images`.
    async fn tv_images(&self, series_id: u64) -> RawResult<ImagesResponse>;

    /// `tv/{id}/external_ids`.
    async fn tv_external_ids(&self, series_id: u64) -> RawResult<ExternalIds>;

    /// `tv/{id}/credits`.
    async fn tv_credits(&self, series_id: u64) -> RawResult<CreditsResponse>;

    /// `tv/{id}/watch/providers`.
    async fn tv_watch_providers(&self, series_id: u64) -> RawResult<WatchProvidersResponse>;

    /// `person/{id}/tv_credits`.
    async fn tv_person_credits(&self, person_id: u64) -> RawResult<TvPersonCredits>;

    /// `tv/popular`.
    async fn tv_popular(&self, page: u32, language: &str) -> RawResult<PagedResponse<TvResult>>;

    /// `discover/tv`.
    async fn tv_discover(
        &self,
        criteria: &DiscoverCriteria,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<TvResult>>;
}
