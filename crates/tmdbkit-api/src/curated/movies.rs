//! Curated movie calls.

use tracing::instrument;

use super::common::{credits, date, english_images, image, watch_providers};
use super::types::{
    Credits, MovieCastCredit, MovieCrewCredit, MovieDetailsItem, MovieDiscoverItem, MovieSummary,
    PersonMovieCredits, VideoItem, WatchProviders,
};
use super::{Curated, CuratedResult, Page, Tmdb};
use crate::config::TmdbConfig;
use crate::helpers::{ImageType, imdb_url, video_thumbnail_url, video_url};
use crate::raw::types::{MovieDetails, MoviePersonCredits, MovieResult, Video};
use crate::raw::{DiscoverCriteria, LocalTmdbRawApi, MovieList};

impl<A: LocalTmdbRawApi> Tmdb<A> {
    /// English posters or backdrops of a movie.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_get_images(
        &self,
        movie_id: u64,
        image_type: ImageType,
    ) -> CuratedResult<Vec<String>> {
        let raw = self.api.movie_images(movie_id).await?;
        Ok(Curated::from_raw(raw, |images| {
            english_images(&self.config, images, image_type)
        }))
    }

    /// Searches movies by title.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_search_by_title(
        &self,
        query: &str,
        page: u32,
    ) -> CuratedResult<Page<MovieSummary>> {
        let include_adult = self.config.options.include_adult;
        let raw = self
            .api
            .movie_search_by_title(query, page, include_adult)
            .await?;
        Ok(Curated::from_raw(raw, |paged| {
            Page::from_paged(paged, |movie| movie_summary(&self.config, movie))
        }))
    }

    /// Movie details, optionally with its videos.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_get_details(
        &self,
        movie_id: u64,
        with_videos: bool,
    ) -> CuratedResult<MovieDetailsItem> {
        let raw = self.api.movie_details(movie_id, with_videos).await?;
        Ok(Curated::from_raw(raw, |details| {
            movie_details_item(&self.config, details)
        }))
    }

    /// Videos of a movie.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_get_videos(&self, movie_id: u64) -> CuratedResult<Vec<VideoItem>> {
        let raw = self.api.movie_videos(movie_id).await?;
        Ok(Curated::from_raw(raw, |videos| video_items(videos.results)))
    }

    /// Recommendations based on a movie.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_get_recommendations(
        &self,
        movie_id: u64,
        page: u32,
    ) -> CuratedResult<Page<MovieSummary>> {
        let raw = self.api.movie_recommendations(movie_id, page).await?;
        Ok(Curated::from_raw(raw, |paged| {
            Page::from_paged(paged, |movie| movie_summary(&self.config, movie))
        }))
    }

    /// Popular movies. `language` defaults to the configured language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    pub async fn movie_get_popular(
        &self,
        page: u32,
        language: Option<&str>,
    ) -> CuratedResult<Page<MovieSummary>> {
        self.movie_list_page(MovieList::Popular, page, language).await
    }

    /// Movies now in theatres. `language` defaults to the configured language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    pub async fn movie_get_now_playing(
        &self,
        page: u32,
        language: Option<&str>,
    ) -> CuratedResult<Page<MovieSummary>> {
        self.movie_list_page(MovieList::NowPlaying, page, language).await
    }

    /// Upcoming movies. `language` defaults to the configured language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    pub async fn movie_get_upcoming(
        &self,
        page: u32,
        language: Option<&str>,
    ) -> CuratedResult<Page<MovieSummary>> {
        self.movie_list_page(MovieList::Upcoming, page, language).await
    }

    #[instrument(skip_all, fields(list = list.path()))]
    async fn movie_list_page(
        &self,
        list: MovieList,
        page: u32,
        language: Option<&str>,
    ) -> CuratedResult<Page<MovieSummary>> {
        let language = language.unwrap_or(&self.config.options.language);
        let raw = self.api.movie_list(list, page, language).await?;
        Ok(Curated::from_raw(raw, |paged| {
            Page::from_paged(paged, |movie| movie_summary(&self.config, movie))
        }))
    }

    /// Movie credits of a person.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_get_person_credits(
        &self,
        person_id: u64,
    ) -> CuratedResult<PersonMovieCredits> {
        let raw = self.api.movie_person_credits(person_id).await?;
        Ok(Curated::from_raw(raw, |credits| {
            person_movie_credits(&self.config, credits)
        }))
    }

    /// Cast and crew of a movie.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_get_credits(&self, movie_id: u64) -> CuratedResult<Credits> {
        let raw = self.api.movie_credits(movie_id).await?;
        Ok(Curated::from_raw(raw, |raw| credits(&self.config, raw)))
    }

    /// Watch providers of a movie in the given countries (`US` when empty).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_get_watch_providers(
        &self,
        movie_id: u64,
        country_codes: &[&str],
    ) -> CuratedResult<WatchProviders> {
        let raw = self.api.movie_watch_providers(movie_id).await?;
        Ok(Curated::from_raw(raw, |raw| {
            watch_providers(&self.config, raw, country_codes)
        }))
    }

    /// Discovers movies matching the criteria.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn movie_discover(
        &self,
        criteria: &DiscoverCriteria,
        page: u32,
    ) -> CuratedResult<Page<MovieDiscoverItem>> {
        let include_adult = self.config.options.include_adult;
        let raw = self
            .api
            .movie_discover(criteria, page, include_adult)
            .await?;
        Ok(Curated::from_raw(raw, |paged| {
            Page::from_paged(paged, |movie| movie_discover_item(&self.config, movie))
        }))
    }
}

pub(super) fn movie_summary(config: &TmdbConfig, movie: MovieResult) -> MovieSummary {
    MovieSummary {
        id: movie.id,
        title: movie.title,
        overview: movie.overview,
        release_date: date(config, movie.release_date.as_deref()),
        poster_url: image(config, movie.poster_path.as_deref()),
        backdrop_url: image(config, movie.backdrop_path.as_deref()),
        genres: config.movie_genres.names(&movie.genre_ids),
    }
}

pub(super) fn movie_discover_item(config: &TmdbConfig, movie: MovieResult) -> MovieDiscoverItem {
    MovieDiscoverItem {
        id: movie.id,
        title: movie.title,
        popularity: movie.popularity,
        original_language: movie.original_language,
        overview: movie.overview,
        release_date: date(config, movie.release_date.as_deref()),
        poster_url: image(config, movie.poster_path.as_deref()),
        backdrop_url: image(config, movie.backdrop_path.as_deref()),
        genres: config.movie_genres.names(&movie.genre_ids),
    }
}

pub(super) fn movie_details_item(config: &TmdbConfig, details: MovieDetails) -> MovieDetailsItem {
    MovieDetailsItem {
        id: details.id,
        title: details.title,
        tag_line: details.tagline,
        overview: details.overview,
        status: details.status,
        runtime: details.runtime,
        budget: details.budget,
        revenue: details.revenue,
        release_date: date(config, details.release_date.as_deref()),
        poster_url: image(config, details.poster_path.as_deref()),
        backdrop_url: image(config, details.backdrop_path.as_deref()),
        imdb_url: imdb_url(details.imdb_id.as_deref()),
        imdb_id: details.imdb_id,
        genres: details.genres.into_iter().map(|genre| genre.name).collect(),
        videos: details.videos.map(|videos| video_items(videos.results)),
    }
}

pub(super) fn video_items(videos: Vec<Video>) -> Vec<VideoItem> {
    videos
        .into_iter()
        .map(|video| VideoItem {
            video_url: video_url(&video.site, &video.key),
            video_thumbnail_url: video_thumbnail_url(&video.site, &video.key),
            id: video.id,
            language: video.iso_639_1,
            country: video.iso_3166_1,
            key: video.key,
            name: video.name,
            site: video.site,
            size: video.size,
            video_type: video.video_type,
        })
        .collect()
}

pub(super) fn person_movie_credits(
    config: &TmdbConfig,
    credits: MoviePersonCredits,
) -> PersonMovieCredits {
    PersonMovieCredits {
        cast: credits
            .cast
            .into_iter()
            .map(|movie| MovieCastCredit {
                movie_id: movie.id,
                release_date: date(config, movie.release_date.as_deref()),
                genres: config.movie_genres.names(&movie.genre_ids),
                poster_url: image(config, movie.poster_path.as_deref()),
                backdrop_url: image(config, movie.backdrop_path.as_deref()),
                title: movie.title,
                overview: movie.overview,
                credit_id: movie.credit_id,
                character_name: movie.character,
                original_language: movie.original_language,
            })
            .collect(),
        crew: credits
            .crew
            .into_iter()
            .map(|movie| MovieCrewCredit {
                movie_id: movie.id,
                release_date: date(config, movie.release_date.as_deref()),
                genres: config.movie_genres.names(&movie.genre_ids),
                poster_url: image(config, movie.poster_path.as_deref()),
                backdrop_url: image(config, movie.backdrop_path.as_deref()),
                title: movie.title,
                overview: movie.overview,
                credit_id: movie.credit_id,
                job: movie.job,
                department: movie.department,
                original_language: movie.original_language,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiOptions;
    use crate::raw::TmdbClient;
    use crate::raw::types::PagedResponse;

    fn config() -> TmdbConfig {
        TmdbConfig::fallback(ApiOptions::default())
    }

    fn tmdb_for(server: &MockServer, options: ApiOptions) -> Tmdb {
        let client = TmdbClient::builder()
            .base_url(format!("{}/3/", server.uri()).parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        Tmdb::with_config(client, TmdbConfig::fallback(options))
    }

    #[test]
    fn test_movie_summary_mapping() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/search_movie_alien.json");
        let paged: PagedResponse<MovieResult> = serde_json::from_str(json).unwrap();

        // Act
        let page = Page::from_paged(paged, |movie| movie_summary(&config(), movie));

        // Assert
        let alien = &page.results[0];
        assert_eq!(alien.id, 348);
        assert_eq!(alien.genres, vec!["Horror", "Science Fiction"]);
        assert_eq!(alien.release_date.as_ref().unwrap().formatted, "05-25-1979");
        assert_eq!(
            alien.poster_url,
            "https://image.tmdb.org/t/p/w300/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg"
        );
        assert!(alien.backdrop_url.contains("/w300/"));
    }

    #[test]
    fn test_poster_kept_without_backdrop() {
        // Arrange
        let movie = MovieResult {
            id: 1,
            title: String::from("No Backdrop"),
            poster_path: Some(String::from("/poster.jpg")),
            backdrop_path: None,
            genre_ids: vec![28, 999_999],
            ..MovieResult::default()
        };

        // Act
        let summary = movie_summary(&config(), movie);

        // Assert
        assert_eq!(summary.poster_url, "https://image.tmdb.org/t/p/w300/poster.jpg");
        assert_eq!(summary.backdrop_url, "");
        assert_eq!(summary.genres, vec!["Action"]);
        assert!(summary.release_date.is_none());
    }

    #[test]
    fn test_movie_details_with_videos() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movie_details_348.json");
        let details: MovieDetails = serde_json::from_str(json).unwrap();

        // Act
        let item = movie_details_item(&config(), details);

        // Assert
        assert_eq!(item.tag_line.as_deref(), Some("In space no one can hear you scream."));
        assert_eq!(item.imdb_url, "https://www.imdb.com/title/tt0078748");
        assert_eq!(item.genres, vec!["Horror", "Science Fiction"]);
        let videos = item.videos.unwrap();
        let trailer = videos.iter().find(|v| v.site == "YouTube").unwrap();
        assert!(trailer.video_url.as_ref().unwrap().starts_with("https://www.youtube.com/watch?v="));
        assert!(trailer.video_thumbnail_url.is_some());
        let vimeo = videos.iter().find(|v| v.site == "Vimeo").unwrap();
        assert!(vimeo.video_thumbnail_url.is_none());
    }

    #[test]
    fn test_movie_details_without_videos_omits_field() {
        // Arrange
        let details = MovieDetails {
            id: 348,
            title: String::from("Alien"),
            ..MovieDetails::default()
        };

        // Act
        let item = movie_details_item(&config(), details);
        let json = serde_json::to_value(&item).unwrap();

        // Assert
        assert!(json.get("videos").is_none());
        assert_eq!(json["imdbUrl"], "");
        assert!(json.get("tagLine").is_some());
    }

    #[test]
    fn test_person_movie_credits_mapping() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/person_movie_credits.json");
        let raw: MoviePersonCredits = serde_json::from_str(json).unwrap();

        // Act
        let credits = person_movie_credits(&config(), raw);

        // Assert
        assert_eq!(credits.cast[0].movie_id, 348);
        assert_eq!(credits.cast[0].character_name.as_deref(), Some("Ellen Ripley"));
        assert_eq!(credits.crew[0].job.as_deref(), Some("Producer"));
        let json = serde_json::to_value(&credits).unwrap();
        assert!(json["cast"][0].get("originalLanguage").is_some());
    }

    #[tokio::test]
    async fn test_movie_get_popular_uses_configured_language() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/popular"))
            .and(query_param("language", "es-ES"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../../fixtures/tmdb/search_movie_alien.json"
            )))
            .expect(1)
            .mount(&mock_server)
            .await;
        let tmdb = tmdb_for(&mock_server, ApiOptions::default().language("es-ES"));

        // Act
        let result = tmdb.movie_get_popular(1, None).await.unwrap();

        // Assert
        assert_eq!(result.data.page, 1);
        assert!(!result.data.results.is_empty());
    }

    #[tokio::test]
    async fn test_movie_get_images_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/348/images"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../../fixtures/tmdb/movie_images_348.json"
            )))
            .mount(&mock_server)
            .await;
        let tmdb = tmdb_for(&mock_server, ApiOptions::default());

        // Act
        let result = tmdb
            .movie_get_images(348, ImageType::Posters)
            .await
            .unwrap();

        // Assert
        assert_eq!(result.data.len(), 1);
        assert!(result.api_call.ends_with("/3/movie/348/images"));
    }

    #[tokio::test]
    async fn test_movie_error_is_propagated() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#,
            ))
            .mount(&mock_server)
            .await;
        let tmdb = tmdb_for(&mock_server, ApiOptions::default());

        // Act
        let err = tmdb.movie_get_credits(348).await.unwrap_err();

        // Assert
        assert_eq!(err.tmdb_code(), Some(7));
        assert_eq!(err.status_text(), Some("Unauthorized"));
    }
}
