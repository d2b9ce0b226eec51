//! `TmdbClient` - TMDB API client implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::TmdbError;

use super::api::{LocalTmdbRawApi, RawResult};
use super::params::{DiscoverCriteria, MediaKind, MovieList};
use super::types::{
    CombinedCreditsResponse, ConfigurationResponse, CreditDetails, CreditsResponse, ExternalIds,
    GenreListResponse, ImagesResponse, MovieDetails, MoviePersonCredits, MovieResult,
    PagedResponse, PersonDetails, PersonImagesResponse, PersonSearchResult, ProviderListResponse,
    RawResponse, TmdbErrorResponse, TvDetails, TvPersonCredits, TvResult, TvSeason,
    VideosResponse, WatchProvidersResponse,
};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// How requests are authenticated.
#[derive(Clone)]
enum Credential {
    /// v3 API key, sent as the `api_key` query parameter.
    ApiKey(String),
    /// v4 read access token, sent as `Authorization: Bearer`.
    Bearer(String),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(..)"),
            Self::Bearer(_) => f.write_str("Bearer(..)"),
        }
    }
}

/// TMDB API client.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Request credential.
    credential: Credential,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    credential: Option<Credential>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            credential: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Authenticates with a v3 API key. Replaces any bearer token.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(Credential::ApiKey(key.into()));
        self
    }

    /// Authenticates with a v4 read access token. Replaces any API key.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credential = Some(Credential::Bearer(token.into()));
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - Neither `api_key` nor `bearer_token` is set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let credential = self.credential.context("api credential is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let mut builder = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            credential,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Base URL requests are joined onto.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends an authenticated GET and decodes the JSON body.
    ///
    /// `api_call` in the result and in errors is the request URL without
    /// the `api_key` parameter.
    #[instrument(skip_all)]
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RawResult<T> {
        let url = self.endpoint(path)?;
        self.get_json_url(url, query).await
    }

    /// Joins `path` onto the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, TmdbError> {
        self.base_url.join(path).map_err(|source| TmdbError::Url {
            path: String::from(path),
            source,
        })
    }

    /// Like [`Self::endpoint`], with `segment` appended as one encoded path
    /// segment. Dot segments would be resolved away, so they are rejected.
    fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url, TmdbError> {
        let invalid = || TmdbError::Segment {
            segment: String::from(segment),
        };
        if matches!(segment, "" | "." | "..") {
            return Err(invalid());
        }
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Sends an authenticated GET to a fully built endpoint URL.
    async fn get_json_url<T: DeserializeOwned>(
        &self,
        mut url: Url,
        query: &[(&str, String)],
    ) -> RawResult<T> {
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let api_call = url.to_string();
        tracing::debug!(path = url.path(), "TMDB API request");

        let request = self.http_client.get(url);
        let request = match &self.credential {
            Credential::ApiKey(key) => request.query(&[("api_key", key)]),
            Credential::Bearer(token) => request.bearer_auth(token),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(TmdbError::Transport { api_call, source }),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(TmdbError::Transport { api_call, source }),
        };

        if !status.is_success() {
            let (tmdb_code, message) = match serde_json::from_str::<TmdbErrorResponse>(&body) {
                Ok(error_response) => (
                    Some(error_response.status_code),
                    error_response.status_message,
                ),
                Err(_) => (None, body),
            };
            return Err(TmdbError::Status {
                status,
                tmdb_code,
                message,
                api_call,
            });
        }

        match serde_json::from_str(&body) {
            Ok(data) => Ok(RawResponse { data, api_call }),
            Err(source) => Err(TmdbError::Decode { api_call, source }),
        }
    }
}

/// Query pairs shared by the search endpoints.
fn search_query(query: &str, page: u32, include_adult: bool) -> [(&'static str, String); 3] {
    [
        ("query", String::from(query)),
        ("page", page.to_string()),
        ("include_adult", include_adult.to_string()),
    ]
}

/// Query pairs for the discover endpoints.
fn discover_query(
    criteria: &DiscoverCriteria,
    kind: MediaKind,
    page: u32,
    include_adult: bool,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", page.to_string()),
        ("include_adult", include_adult.to_string()),
    ];
    query.extend(criteria.to_query(kind));
    query
}

impl LocalTmdbRawApi for TmdbClient {
    #[instrument(skip_all)]
    async fn configuration(&self) -> RawResult<ConfigurationResponse> {
        self.get_json("configuration", &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_genres(&self) -> RawResult<GenreListResponse> {
        self.get_json("genre/tv/list", &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_genres(&self) -> RawResult<GenreListResponse> {
        self.get_json("genre/movie/list", &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_watch_provider_list(&self, region: &str) -> RawResult<ProviderListResponse> {
        let query = [("watch_region", String::from(region))];
        self.get_json("watch/providers/tv", &query).await
    }

    #[instrument(skip_all)]
    async fn search_person(
        &self,
        query: &str,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<PersonSearchResult>> {
        let query = search_query(query, page, include_adult);
        self.get_json("search/person", &query).await
    }

    #[instrument(skip_all)]
    async fn person_details(&self, person_id: u64) -> RawResult<PersonDetails> {
        let path = format!("person/{person_id}");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn person_images(&self, person_id: u64) -> RawResult<PersonImagesResponse> {
        let path = format!("person/{person_id}/images");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn person_combined_credits(&self, person_id: u64) -> RawResult<CombinedCreditsResponse> {
        let path = format!("person/{person_id}/combined_credits");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn credit_details(&self, credit_id: &str) -> RawResult<CreditDetails> {
        let url = self.endpoint_with_segment("credit/", credit_id)?;
        self.get_json_url(url, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_search_by_title(
        &self,
        query: &str,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<MovieResult>> {
        let query = search_query(query, page, include_adult);
        self.get_json("search/movie", &query).await
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, movie_id: u64, with_videos: bool) -> RawResult<MovieDetails> {
        let path = format!("movie/{movie_id}");
        if with_videos {
            let query = [("append_to_response", String::from("videos"))];
            self.get_json(&path, &query).await
        } else {
            self.get_json(&path, &[]).await
        }
    }

    #[instrument(skip_all)]
    async fn movie_videos(&self, movie_id: u64) -> RawResult<VideosResponse> {
        let path = format!("movie/{movie_id}/videos");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_recommendations(
        &self,
        movie_id: u64,
        page: u32,
    ) -> RawResult<PagedResponse<MovieResult>> {
        let path = format!("movie/{movie_id}/recommendations");
        let query = [("page", page.to_string())];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn movie_images(&self, movie_id: u64) -> RawResult<ImagesResponse> {
        let path = format!("movie/{movie_id}/images");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_credits(&self, movie_id: u64) -> RawResult<CreditsResponse> {
        let path = format!("movie/{movie_id}/credits");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_watch_providers(&self, movie_id: u64) -> RawResult<WatchProvidersResponse> {
        let path = format!("movie/{movie_id}/watch/providers");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_person_credits(&self, person_id: u64) -> RawResult<MoviePersonCredits> {
        let path = format!("person/{person_id}/movie_credits");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_list(
        &self,
        list: MovieList,
        page: u32,
        language: &str,
    ) -> RawResult<PagedResponse<MovieResult>> {
        let query = [
            ("page", page.to_string()),
            ("language", String::from(language)),
        ];
        self.get_json(list.path(), &query).await
    }

    #[instrument(skip_all)]
    async fn movie_discover(
        &self,
        criteria: &DiscoverCriteria,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<MovieResult>> {
        let query = discover_query(criteria, MediaKind::Movie, page, include_adult);
        self.get_json("discover/movie", &query).await
    }

    #[instrument(skip_all)]
    async fn tv_search_by_title(
        &self,
        query: &str,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<TvResult>> {
        let query = search_query(query, page, include_adult);
        self.get_json("search/tv", &query).await
    }

    #[instrument(skip_all)]
    async fn tv_details(&self, series_id: u64) -> RawResult<TvDetails> {
        let path = format!("tv/{series_id}");
        let query = [("append_to_response", String::from("external_ids"))];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn tv_episodes(&self, series_id: u64, season_number: u32) -> RawResult<TvSeason> {
        let path = format!("tv/{series_id}/season/{season_number}");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_images(&self, series_id: u64) -> RawResult<ImagesResponse> {
        let path = format!("tv/{series_id}/images");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_external_ids(&self, series_id: u64) -> RawResult<ExternalIds> {
        let path = format!("tv/{series_id}/external_ids");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_credits(&self, series_id: u64) -> RawResult<CreditsResponse> {
        let path = format!("tv/{series_id}/credits");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_watch_providers(&self, series_id: u64) -> RawResult<WatchProvidersResponse> {
        let path = format!("tv/{series_id}/watch/providers");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_person_credits(&self, person_id: u64) -> RawResult<TvPersonCredits> {
        let path = format!("person/{person_id}/tv_credits");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_popular(&self, page: u32, language: &str) -> RawResult<PagedResponse<TvResult>> {
        let query = [
            ("page", page.to_string()),
            ("language", String::from(language)),
        ];
        self.get_json("tv/popular", &query).await
    }

    #[instrument(skip_all)]
    async fn tv_discover(
        &self,
        criteria: &DiscoverCriteria,
        page: u32,
        include_adult: bool,
    ) -> RawResult<PagedResponse<TvResult>> {
        let query = discover_query(criteria, MediaKind::Tv, page, include_adult);
        self.get_json("discover/tv", &query).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use reqwest::StatusCode;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::raw::params::{CompareType, SortBy};

    /// Builds a client pointed at the mock server's `/3/` prefix.
    fn api_key_client(server: &MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_credential() {
        // Arrange & Act
        let result = TmdbClient::builder().user_agent("test/0.0.0").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api credential is required")
        );
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = TmdbClient::builder().api_key("test-key").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_defaults_to_public_base_url() {
        // Arrange & Act
        let client = TmdbClient::builder()
            .bearer_token("test-token")
            .user_agent("test/0.0.0")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_last_credential_wins() {
        // Arrange & Act
        let client = TmdbClient::builder()
            .api_key("test-key")
            .bearer_token("test-token")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Assert
        assert!(matches!(client.credential, Credential::Bearer(ref t) if t == "test-token"));
        assert!(!format!("{client:?}").contains("test-token"));
    }

    #[test]
    fn test_parse_error_response() {
        // Arrange
        let json = r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#;

        // Act
        let error: TmdbErrorResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(error.status_code, 34);
        assert!(!error.success);
    }

    #[tokio::test]
    async fn test_api_key_is_sent_but_not_reported() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/configuration.json");

        Mock::given(method("GET"))
            .and(path("/3/configuration"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let response = client.configuration().await.unwrap();

        // Assert
        assert_eq!(
            response.api_call,
            format!("{}/3/configuration", mock_server.uri())
        );
        assert!(!response.api_call.contains("test-key"));
        assert_eq!(
            response.data.images.secure_base_url.as_deref(),
            Some("https://image.tmdb.org/t/p/")
        );
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/genre_tv_list.json");

        Mock::given(method("GET"))
            .and(path("/3/genre/tv/list"))
            .and(header("Authorization", "Bearer my-secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .bearer_token("my-secret-token")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let response = client.tv_genres().await.unwrap();

        // Assert
        assert!(!response.data.genres.is_empty());
    }

    #[tokio::test]
    async fn test_search_movie_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_movie_alien.json");

        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("query", "Alien"))
            .and(query_param("page", "1"))
            .and(query_param("include_adult", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let response = client.movie_search_by_title("Alien", 1, false).await.unwrap();

        // Assert
        assert_eq!(response.data.page, 1);
        assert_eq!(response.data.results[0].id, 348);
        assert_eq!(response.data.results[0].title, "Alien");
        assert!(response.api_call.contains("query=Alien"));
    }

    #[tokio::test]
    async fn test_movie_details_appends_videos() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/movie_details_348.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/348"))
            .and(query_param("append_to_response", "videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let response = client.movie_details(348, true).await.unwrap();

        // Assert
        assert_eq!(response.data.id, 348);
        assert!(response.data.videos.is_some());
    }

    #[tokio::test]
    async fn test_tv_details_appends_external_ids() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/tv_details_1396.json");

        Mock::given(method("GET"))
            .and(path("/3/tv/1396"))
            .and(query_param("append_to_response", "external_ids"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let response = client.tv_details(1396).await.unwrap();

        // Assert
        assert_eq!(response.data.name, "Breaking Bad");
        let external_ids = response.data.external_ids.unwrap();
        assert_eq!(external_ids.imdb_id.as_deref(), Some("tt0903747"));
    }

    #[tokio::test]
    async fn test_tv_season_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/tv_season_1396_1.json");

        Mock::given(method("GET"))
            .and(path("/3/tv/1396/season/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let response = client.tv_episodes(1396, 1).await.unwrap();

        // Assert
        assert_eq!(response.data.season_number, 1);
        assert!(!response.data.episodes.is_empty());
        assert_eq!(response.data.episodes[0].episode_number, 1);
    }

    #[tokio::test]
    async fn test_movie_discover_sends_criteria() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_movie_alien.json");

        Mock::given(method("GET"))
            .and(path("/3/discover/movie"))
            .and(query_param("page", "2"))
            .and(query_param("with_genres", "27|878"))
            .and(query_param("with_cast", "10205"))
            .and(query_param("sort_by", "vote_count.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);
        let criteria = DiscoverCriteria::new()
            .genres(vec![27, 878], CompareType::Or)
            .cast(vec![10205], CompareType::And)
            .sort_by(SortBy::VoteCountDesc);

        // Act
        let response = client.movie_discover(&criteria, 2, false).await.unwrap();

        // Assert
        assert!(!response.data.results.is_empty());
    }

    #[tokio::test]
    async fn test_movie_list_uses_list_path() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_movie_alien.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/now_playing"))
            .and(query_param("language", "en-GB"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let result = client.movie_list(MovieList::NowPlaying, 1, "en-GB").await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_credit_id_is_path_encoded() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"id":"52fe4211c3a36847f8001b2f","credit_type":"cast","media_type":"movie","media":{"id":348},"person":{"id":10205}}"#;

        Mock::given(method("GET"))
            .and(path("/3/credit/52fe4211c3a36847f8001b2f"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let response = client
            .credit_details("52fe4211c3a36847f8001b2f")
            .await
            .unwrap();

        // Assert
        assert_eq!(response.data.credit_type.as_deref(), Some("cast"));
        assert_eq!(response.data.person["id"], 10205);
    }

    #[tokio::test]
    async fn test_credit_id_stays_one_segment() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/credit/..%2Fmovie%2F348"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let spaced = client.endpoint_with_segment("credit/", "a b").unwrap();
        let dotted = client.credit_details("..").await.unwrap_err();
        let err = client.credit_details("../movie/348").await.unwrap_err();

        // Assert
        assert_eq!(spaced.path(), "/3/credit/a%20b");
        assert!(matches!(dotted, TmdbError::Segment { ref segment } if segment == ".."));
        assert_eq!(dotted.api_call(), None);
        assert_eq!(err.tmdb_code(), Some(34));
        assert!(err.api_call().unwrap().ends_with("/3/credit/..%2Fmovie%2F348"));
    }

    #[tokio::test]
    async fn test_http_error_returns_status_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        let error_body = r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let err = client.person_details(0).await.unwrap_err();

        // Assert
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.status_text(), Some("Not Found"));
        assert_eq!(err.tmdb_code(), Some(34));
        assert_eq!(
            err.api_call(),
            Some(format!("{}/3/person/0", mock_server.uri()).as_str())
        );
        assert!(err.to_string().contains("could not be found"));
    }

    #[tokio::test]
    async fn test_rate_limit_is_not_retried() {
        // Arrange
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let err = client.tv_popular(1, "en-US").await.unwrap_err();

        // Assert
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.tmdb_code(), None);
        assert!(err.to_string().contains("slow down"));
    }

    #[tokio::test]
    async fn test_unexpected_body_returns_decode_error() {
        // Arrange
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/3/movie/348/credits"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);

        // Act
        let err = client.movie_credits(348).await.unwrap_err();

        // Assert
        assert!(matches!(err, TmdbError::Decode { .. }));
        assert!(err.status().is_none());
    }

    #[test]
    fn test_parse_watch_providers_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movie_watch_providers_348.json");

        // Act
        let response: WatchProvidersResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(response.id, 348);
        let us = response.results.get("US").unwrap();
        assert!(us.link.is_some());
        assert!(!us.flatrate.is_empty());
    }

    #[test]
    fn test_parse_person_search_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/search_person.json");

        // Act
        let response: PagedResponse<PersonSearchResult> = serde_json::from_str(json).unwrap();

        // Assert
        assert!(response.results.len() >= 2);
        assert!(!response.results[0].known_for.is_empty());
    }
}
