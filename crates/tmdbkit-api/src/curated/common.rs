//! Person calls and reshaping shared by movie and TV calls.

use tracing::instrument;

use super::types::{
    CastMember, CountryProviders, Credits, CrewMember, ImageItem, KnownForItem, PersonDetailsItem,
    PersonSearchItem, ProviderItem, WatchProviders,
};
use super::{Curated, CuratedResult, Page, Tmdb};
use crate::config::TmdbConfig;
use crate::helpers::{DateObject, ImageSize, ImageType, parse_to_date};
use crate::raw::LocalTmdbRawApi;
use crate::raw::types::{
    CreditsResponse, ImagesResponse, PagedResponse, PersonDetails, PersonImagesResponse,
    PersonSearchResult, WatchProviderItem, WatchProvidersResponse,
};

/// Country used when no country codes are requested.
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Language kept by the image collection calls.
const IMAGE_LANGUAGE: &str = "en";

impl<A: LocalTmdbRawApi> Tmdb<A> {
    /// Searches people by name, most popular first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn search_for_person_id(
        &self,
        name: &str,
        page: u32,
    ) -> CuratedResult<Page<PersonSearchItem>> {
        let include_adult = self.config.options.include_adult;
        let raw = self.api.search_person(name, page, include_adult).await?;
        Ok(Curated::from_raw(raw, |paged| {
            person_search_page(&self.config, paged)
        }))
    }

    /// Person details.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn person_details(&self, person_id: u64) -> CuratedResult<PersonDetailsItem> {
        let raw = self.api.person_details(person_id).await?;
        Ok(Curated::from_raw(raw, |details| {
            person_details_item(&self.config, details)
        }))
    }

    /// Profile images, highest rated first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TmdbError`] if the raw call fails.
    #[instrument(skip_all)]
    pub async fn person_images(&self, person_id: u64) -> CuratedResult<Vec<ImageItem>> {
        let raw = self.api.person_images(person_id).await?;
        Ok(Curated::from_raw(raw, |images| {
            person_image_items(&self.config, images)
        }))
    }
}

/// Medium, secure image URL.
pub(super) fn image(config: &TmdbConfig, path: Option<&str>) -> String {
    config.image_url(path, ImageSize::Medium, true)
}

/// Parses an upstream date with the configured format.
pub(super) fn date(config: &TmdbConfig, value: Option<&str>) -> Option<DateObject> {
    parse_to_date(value, &config.options.date_format)
}

pub(super) fn person_search_page(
    config: &TmdbConfig,
    paged: PagedResponse<PersonSearchResult>,
) -> Page<PersonSearchItem> {
    let mut page = Page::from_paged(paged, |person| PersonSearchItem {
        id: person.id,
        name: person.name,
        popularity: person.popularity,
        profile_image_url: image(config, person.profile_path.as_deref()),
        known_for: person
            .known_for
            .into_iter()
            .map(|known| KnownForItem {
                id: known.id,
                media_type: known.media_type,
                title: known.title.or(known.name).unwrap_or_default(),
                poster_url: image(config, known.poster_path.as_deref()),
                backdrop_url: image(config, known.backdrop_path.as_deref()),
            })
            .collect(),
    });
    page.results
        .sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    page
}

pub(super) fn person_details_item(config: &TmdbConfig, details: PersonDetails) -> PersonDetailsItem {
    PersonDetailsItem {
        id: details.id,
        name: details.name,
        birthday: date(config, details.birthday.as_deref()),
        death_day: date(config, details.deathday.as_deref()),
        known_for_department: details.known_for_department,
        biography: details.biography,
        place_of_birth: details.place_of_birth,
        imdb_id: details.imdb_id,
        profile_image: image(config, details.profile_path.as_deref()),
    }
}

pub(super) fn person_image_items(
    config: &TmdbConfig,
    images: PersonImagesResponse,
) -> Vec<ImageItem> {
    let mut profiles = images.profiles;
    profiles.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));
    profiles
        .into_iter()
        .map(|profile| ImageItem {
            width: profile.width,
            height: profile.height,
            aspect_ratio: profile.aspect_ratio,
            image_url: image(config, Some(&profile.file_path)),
        })
        .collect()
}

/// English posters or backdrops as URLs.
pub(super) fn english_images(
    config: &TmdbConfig,
    images: ImagesResponse,
    image_type: ImageType,
) -> Vec<String> {
    let collection = match image_type {
        ImageType::Posters => images.posters,
        ImageType::Backdrops => images.backdrops,
    };
    collection
        .into_iter()
        .filter(|img| img.iso_639_1.as_deref() == Some(IMAGE_LANGUAGE))
        .map(|img| image(config, Some(&img.file_path)))
        .collect()
}

pub(super) fn credits(config: &TmdbConfig, raw: CreditsResponse) -> Credits {
    Credits {
        cast: raw
            .cast
            .into_iter()
            .map(|member| CastMember {
                character_name: member.character,
                credit_id: member.credit_id,
                person_id: member.id,
                name: member.name,
                gender: member.gender,
                profile_url: image(config, member.profile_path.as_deref()),
                order: member.order,
            })
            .collect(),
        crew: raw
            .crew
            .into_iter()
            .map(|member| CrewMember {
                credit_id: member.credit_id,
                person_id: member.id,
                name: member.name,
                gender: member.gender,
                profile_url: image(config, member.profile_path.as_deref()),
                job: member.job,
                department: member.department,
            })
            .collect(),
    }
}

/// Keeps the requested countries. An empty list selects [`DEFAULT_COUNTRY_CODE`].
pub(super) fn watch_providers(
    config: &TmdbConfig,
    raw: WatchProvidersResponse,
    country_codes: &[&str],
) -> WatchProviders {
    let wanted: &[&str] = if country_codes.is_empty() {
        &[DEFAULT_COUNTRY_CODE]
    } else {
        country_codes
    };
    let provider_items = |items: Vec<WatchProviderItem>| -> Vec<ProviderItem> {
        items
            .into_iter()
            .map(|item| ProviderItem {
                provider_id: item.provider_id,
                provider: item.provider_name,
                display_priority: item.display_priority,
                logo_url: image(config, item.logo_path.as_deref()),
            })
            .collect()
    };

    let results = raw
        .results
        .into_iter()
        .filter(|(country, _)| wanted.contains(&country.as_str()))
        .map(|(country, providers)| {
            let entry = CountryProviders {
                just_watch_link: providers.link,
                stream: provider_items(providers.flatrate),
                buy: provider_items(providers.buy),
                rent: provider_items(providers.rent),
            };
            (country, entry)
        })
        .collect();

    WatchProviders {
        id: raw.id,
        results,
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

    fn config() -> TmdbConfig {
        TmdbConfig::fallback(ApiOptions::default())
    }

    #[test]
    fn test_person_search_sorted_by_popularity() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/search_person.json");
        let paged: PagedResponse<PersonSearchResult> = serde_json::from_str(json).unwrap();

        // Act
        let page = person_search_page(&config(), paged);

        // Assert
        assert_eq!(page.page, 1);
        assert!(
            page.results
                .windows(2)
                .all(|pair| pair[0].popularity >= pair[1].popularity)
        );
        let first = &page.results[0];
        assert_eq!(first.name, "Sigourney Weaver");
        assert!(first.profile_image_url.starts_with("https://image.tmdb.org/t/p/w300/"));
        assert_eq!(first.known_for[0].title, "Alien");
    }

    #[test]
    fn test_person_details_dates() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/person_details_10205.json");
        let details: PersonDetails = serde_json::from_str(json).unwrap();

        // Act
        let item = person_details_item(&config(), details);

        // Assert
        assert_eq!(item.id, 10205);
        assert_eq!(item.birthday.unwrap().formatted, "10-08-1949");
        assert!(item.death_day.is_none());
        assert_eq!(item.imdb_id.as_deref(), Some("nm0000244"));
    }

    #[test]
    fn test_person_images_sorted_by_vote_average() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/person_images_10205.json");
        let images: PersonImagesResponse = serde_json::from_str(json).unwrap();

        // Act
        let items = person_image_items(&config(), images);

        // Assert
        assert_eq!(items.len(), 3);
        assert!(items[0].image_url.ends_with("/w300/best.jpg"));
        assert!(items[2].image_url.ends_with("/w300/worst.jpg"));
    }

    #[test]
    fn test_english_images_only() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movie_images_348.json");
        let images: ImagesResponse = serde_json::from_str(json).unwrap();

        // Act
        let posters = english_images(&config(), images.clone(), ImageType::Posters);
        let backdrops = english_images(&config(), images, ImageType::Backdrops);

        // Assert
        assert_eq!(
            posters,
            vec![String::from(
                "https://image.tmdb.org/t/p/w300/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg"
            )]
        );
        assert_eq!(backdrops.len(), 1);
    }

    #[test]
    fn test_credits_mapping() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movie_credits_348.json");
        let raw: CreditsResponse = serde_json::from_str(json).unwrap();

        // Act
        let credits = credits(&config(), raw);

        // Assert
        let ripley = &credits.cast[0];
        assert_eq!(ripley.person_id, 10205);
        assert_eq!(ripley.character_name.as_deref(), Some("Ellen Ripley"));
        assert_eq!(ripley.order, Some(0));
        let director = credits.crew.iter().find(|c| c.job == "Director").unwrap();
        assert_eq!(director.name, "Ridley Scott");
        assert_eq!(director.profile_url, "");
    }

    #[test]
    fn test_watch_providers_filtered_by_country() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movie_watch_providers_348.json");
        let raw: WatchProvidersResponse = serde_json::from_str(json).unwrap();

        // Act
        let default_only = watch_providers(&config(), raw.clone(), &[]);
        let selected = watch_providers(&config(), raw, &["GB", "DE", "JP"]);

        // Assert
        assert_eq!(default_only.results.keys().collect::<Vec<_>>(), vec!["US"]);
        let us = &default_only.results["US"];
        assert!(us.just_watch_link.is_some());
        assert_eq!(us.stream[0].provider, "Hulu");
        assert!(us.stream[0].logo_url.starts_with("https://"));
        assert_eq!(selected.results.keys().collect::<Vec<_>>(), vec!["DE", "GB"]);
    }

    #[tokio::test]
    async fn test_search_for_person_id_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/person"))
            .and(query_param("query", "Weaver"))
            .and(query_param("include_adult", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../../fixtures/tmdb/search_person.json"
            )))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TmdbClient::builder()
            .base_url(format!("{}/3/", mock_server.uri()).parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        let tmdb = Tmdb::with_config(
            client,
            TmdbConfig::fallback(ApiOptions::default().include_adult(true)),
        );

        // Act
        let result = tmdb.search_for_person_id("Weaver", 1).await.unwrap();

        // Assert
        assert!(result.api_call.contains("search/person"));
        assert!(!result.data.results.is_empty());
    }
}
