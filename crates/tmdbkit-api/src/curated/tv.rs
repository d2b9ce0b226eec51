//! Curated TV calls.

use tracing::instrument;

use super::common::{credits, date, english_images, image, watch_providers};
use super::types::{
    Credits, EpisodeItem, SeasonItem, TvSeasonItem, TvShowDetails, TvSummary, WatchProviders,
};
use super::{Curated, CuratedResult, Page, Tmdb};
use crate::config::TmdbConfig;
use crate::helpers::{ImageType, average_of_array, imdb_url};
use crate::raw::types::{TvDetails, TvResult, TvSeason};
use crate::raw::{DiscoverCriteria, LocalTmdbRawApi};

impl<A: LocalTmdbRawApi> Tmdb<A> {
    /// English posters or backdrops of a series.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_get_images(
        &self,
        series_id: u64,
        image_type: ImageType,
    ) -> CuratedResult<Vec<String>> {
        let raw = self.api.tv_images(series_id).await?;
        Ok(Curated::from_raw(raw, |images| {
            english_images(&self.config, images, image_type)
        }))
    }

    /// Searches series by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_search_by_title(
        &self,
        query: &str,
        page: u32,
    ) -> CuratedResult<Page<TvSummary>> {
        let include_adult = self.config.options.include_adult;
        let raw = self
            .api
            .tv_search_by_title(query, page, include_adult)
            .await?;
        Ok(Curated::from_raw(raw, |paged| {
            Page::from_paged(paged, |show| tv_summary(&self.config, show))
        }))
    }

    /// Popular series. `language` defaults to the configured language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_get_popular(
        &self,
        page: u32,
        language: Option<&str>,
    ) -> CuratedResult<Page<TvSummary>> {
        let language = language.unwrap_or(&self.config.options.language);
        let raw = self.api.tv_popular(page, language).await?;
        Ok(Curated::from_raw(raw, |paged| {
            Page::from_paged(paged, |show| tv_summary(&self.config, show))
        }))
    }

    /// Discovers series matching the criteria. Cast and crew filters are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_discover(
        &self,
        criteria: &DiscoverCriteria,
        page: u32,
    ) -> CuratedResult<Page<TvSummary>> {
        let include_adult = self.config.options.include_adult;
        let raw = self.api.tv_discover(criteria, page, include_adult).await?;
        Ok(Curated::from_raw(raw, |paged| {
            Page::from_paged(paged, |show| tv_summary(&self.config, show))
        }))
    }

    /// Series details including external ids and season summaries.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_get_show_details(&self, series_id: u64) -> CuratedResult<TvShowDetails> {
        let raw = self.api.tv_details(series_id).await?;
        Ok(Curated::from_raw(raw, |details| {
            tv_show_details(&self.config, details)
        }))
    }

    /// Episodes of one season.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_get_episodes(
        &self,
        series_id: u64,
        season_number: u32,
    ) -> CuratedResult<TvSeasonItem> {
        let raw = self.api.tv_episodes(series_id, season_number).await?;
        Ok(Curated::from_raw(raw, |season| {
            tv_season_item(&self.config, season)
        }))
    }

    /// Cast and crew of a series.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_get_show_credits(&self, series_id: u64) -> CuratedResult<Credits> {
        let raw = self.api.tv_credits(series_id).await?;
        Ok(Curated::from_raw(raw, |raw| credits(&self.config, raw)))
    }

    /// Watch providers of a series in the given countries (`US` when empty).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn tv_get_watch_providers(
        &self,
        series_id: u64,
        country_codes: &[&str],
    ) -> CuratedResult<WatchProviders> {
        let raw = self.api.tv_watch_providers(series_id).await?;
        Ok(Curated::from_raw(raw, |raw| {
            watch_providers(&self.config, raw, country_codes)
        }))
    }
}

pub(super) fn tv_summary(config: &TmdbConfig, show: TvResult) -> TvSummary {
    TvSummary {
        id: show.id,
        name: show.name,
        original_name: show.original_name,
        overview: show.overview,
        first_air_date: date(config, show.first_air_date.as_deref()),
        backdrop_url: image(config, show.backdrop_path.as_deref()),
        poster_url: image(config, show.poster_path.as_deref()),
        genres: config.tv_genres.names(&show.genre_ids),
        popularity: show.popularity,
        original_language: show.original_language,
    }
}

pub(super) fn tv_show_details(config: &TmdbConfig, details: TvDetails) -> TvShowDetails {
    let external_ids = details.external_ids.unwrap_or_default();
    TvShowDetails {
        id: details.id,
        name: details.name,
        overview: details.overview,
        status: details.status,
        tag_line: details.tagline,
        popularity: details.popularity,
        avg_episode_run_time: average_of_array(&details.episode_run_time),
        first_air_date: date(config, details.first_air_date.as_deref()),
        last_air_date: date(config, details.last_air_date.as_deref()),
        poster_url: image(config, details.poster_path.as_deref()),
        backdrop_url: image(config, details.backdrop_path.as_deref()),
        home_page: details.homepage,
        number_of_episodes: details.number_of_episodes,
        number_of_seasons: details.number_of_seasons,
        genres: details.genres.into_iter().map(|genre| genre.name).collect(),
        imdb_url: imdb_url(external_ids.imdb_id.as_deref()),
        imdb_id: external_ids.imdb_id,
        instagram_id: external_ids.instagram_id,
        tvdb_id: external_ids.tvdb_id,
        tv_rage_id: external_ids.tvrage_id,
        twitter_id: external_ids.twitter_id,
        facebook_id: external_ids.facebook_id,
        seasons: details
            .seasons
            .into_iter()
            .map(|season| SeasonItem {
                id: season.id,
                season_number: season.season_number,
                poster_url: image(config, season.poster_path.as_deref()),
                name: season.name,
                overview: season.overview,
                episode_count: season.episode_count,
                air_date: date(config, season.air_date.as_deref()),
            })
            .collect(),
    }
}

pub(super) fn tv_season_item(config: &TmdbConfig, season: TvSeason) -> TvSeasonItem {
    TvSeasonItem {
        id: season.id,
        season_number: season.season_number,
        name: season.name,
        overview: season.overview,
        air_date: date(config, season.air_date.as_deref()),
        poster_url: image(config, season.poster_path.as_deref()),
        episodes: season
            .episodes
            .into_iter()
            .map(|episode| EpisodeItem {
                id: episode.id,
                episode_number: episode.episode_number,
                season_number: episode.season_number,
                name: episode.name,
                overview: episode.overview,
                air_date: date(config, episode.air_date.as_deref()),
                runtime: episode.runtime,
                still_url: image(config, episode.still_path.as_deref()),
                vote_average: episode.vote_average,
            })
            .collect(),
    }
}
