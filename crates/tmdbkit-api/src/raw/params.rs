//! Request parameters for list and discover endpoints.

use std::fmt;
use std::str::FromStr;

use crate::config::WATCH_PROVIDER_REGION;

/// How multiple ids in one discover filter are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareType {
    /// Titles matching all ids (joined with `,`).
    And,
    /// Titles matching any id (joined with `|`).
    #[default]
    Or,
}

impl CompareType {
    /// Separator used when joining ids.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::And => ",",
            Self::Or => "|",
        }
    }

    /// Joins ids with this compare type's separator.
    #[must_use]
    pub fn join<T: ToString>(self, ids: &[T]) -> String {
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Sort order for discover results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SortBy {
    PopularityAsc,
    PopularityDesc,
    ReleaseDateAsc,
    ReleaseDateDesc,
    RevenueAsc,
    RevenueDesc,
    PrimaryReleaseDateAsc,
    PrimaryReleaseDateDesc,
    FirstAirDateAsc,
    FirstAirDateDesc,
    OriginalTitleAsc,
    OriginalTitleDesc,
    VoteAverageAsc,
    VoteAverageDesc,
    VoteCountAsc,
    VoteCountDesc,
}

impl SortBy {
    const ALL: [Self; 16] = [
        Self::PopularityAsc,
        Self::PopularityDesc,
        Self::ReleaseDateAsc,
        Self::ReleaseDateDesc,
        Self::RevenueAsc,
        Self::RevenueDesc,
        Self::PrimaryReleaseDateAsc,
        Self::PrimaryReleaseDateDesc,
        Self::FirstAirDateAsc,
        Self::FirstAirDateDesc,
        Self::OriginalTitleAsc,
        Self::OriginalTitleDesc,
        Self::VoteAverageAsc,
        Self::VoteAverageDesc,
        Self::VoteCountAsc,
        Self::VoteCountDesc,
    ];

    /// Query value (e.g. `popularity.desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PopularityAsc => "popularity.asc",
            Self::PopularityDesc => "popularity.desc",
            Self::ReleaseDateAsc => "release_date.asc",
            Self::ReleaseDateDesc => "release_date.desc",
            Self::RevenueAsc => "revenue.asc",
            Self::RevenueDesc => "revenue.desc",
            Self::PrimaryReleaseDateAsc => "primary_release_date.asc",
            Self::PrimaryReleaseDateDesc => "primary_release_date.desc",
            Self::FirstAirDateAsc => "first_air_date.asc",
            Self::FirstAirDateDesc => "first_air_date.desc",
            Self::OriginalTitleAsc => "original_title.asc",
            Self::OriginalTitleDesc => "original_title.desc",
            Self::VoteAverageAsc => "vote_average.asc",
            Self::VoteAverageDesc => "vote_average.desc",
            Self::VoteCountAsc => "vote_count.asc",
            Self::VoteCountDesc => "vote_count.desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known sort order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0}")]
pub struct ParseSortByError(String);

impl FromStr for SortBy {
    type Err = ParseSortByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| ParseSortByError(String::from(s)))
    }
}

/// Movie list endpoints that share the paged `MovieResult` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieList {
    /// `movie/popular`.
    Popular,
    /// `movie/now_playing`.
    NowPlaying,
    /// `movie/upcoming`.
    Upcoming,
}

impl MovieList {
    /// Endpoint path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Popular => "movie/popular",
            Self::NowPlaying => "movie/now_playing",
            Self::Upcoming => "movie/upcoming",
        }
    }
}

/// Which discover endpoint criteria are rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaKind {
    Movie,
    Tv,
}

/// Filters for `discover/movie` and `discover/tv`.
///
/// Unset values and empty id lists add no query parameter. Cast and crew
/// filters only apply to movies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverCriteria {
    /// Genre ids.
    pub genres: Vec<u32>,
    /// How `genres` are combined.
    pub genre_compare: CompareType,
    /// Release year (movie) or first air date year (TV).
    pub year: Option<u32>,
    /// Earliest release / first air date (YYYY-MM-DD).
    pub release_date_gte: Option<String>,
    /// Latest release / first air date (YYYY-MM-DD).
    pub release_date_lte: Option<String>,
    /// Person ids credited as cast.
    pub cast: Vec<u64>,
    /// How `cast` ids are combined.
    pub cast_compare: CompareType,
    /// Person ids credited as crew.
    pub crew: Vec<u64>,
    /// How `crew` ids are combined.
    pub crew_compare: CompareType,
    /// Watch provider ids.
    pub watch_providers: Vec<u32>,
    /// How `watch_providers` are combined.
    pub watch_provider_compare: CompareType,
    /// Region the watch provider filter applies to (ISO 3166-1). Defaults
    /// to [`WATCH_PROVIDER_REGION`] when providers are set.
    pub watch_region: Option<String>,
    /// Sort order.
    pub sort_by: Option<SortBy>,
}

impl DiscoverCriteria {
    /// Creates empty criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the genre filter.
    #[must_use]
    pub fn genres(mut self, genres: impl Into<Vec<u32>>, compare: CompareType) -> Self {
        self.genres = genres.into();
        self.genre_compare = compare;
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the earliest release date (YYYY-MM-DD).
    #[must_use]
    pub fn release_date_gte(mut self, date: impl Into<String>) -> Self {
        self.release_date_gte = Some(date.into());
        self
    }

    /// Sets the latest release date (YYYY-MM-DD).
    #[must_use]
    pub fn release_date_lte(mut self, date: impl Into<String>) -> Self {
        self.release_date_lte = Some(date.into());
        self
    }

    /// Sets the cast filter (movies only).
    #[must_use]
    pub fn cast(mut self, person_ids: impl Into<Vec<u64>>, compare: CompareType) -> Self {
        self.cast = person_ids.into();
        self.cast_compare = compare;
        self
    }

    /// Sets the crew filter (movies only).
    #[must_use]
    pub fn crew(mut self, person_ids: impl Into<Vec<u64>>, compare: CompareType) -> Self {
        self.crew = person_ids.into();
        self.crew_compare = compare;
        self
    }

    /// Sets the watch provider filter.
    #[must_use]
    pub fn watch_providers(mut self, provider_ids: impl Into<Vec<u32>>, compare: CompareType) -> Self {
        self.watch_providers = provider_ids.into();
        self.watch_provider_compare = compare;
        self
    }

    /// Sets the watch region.
    #[must_use]
    pub fn watch_region(mut self, region: impl Into<String>) -> Self {
        self.watch_region = Some(region.into());
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Renders the criteria as query pairs for the given endpoint.
    pub(crate) fn to_query(&self, kind: MediaKind) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if !self.genres.is_empty() {
            query.push(("with_genres", self.genre_compare.join(&self.genres)));
        }

        let (year_key, gte_key, lte_key) = match kind {
            MediaKind::Movie => (
                "primary_release_year",
                "primary_release_date.gte",
                "primary_release_date.lte",
            ),
            MediaKind::Tv => (
                "first_air_date_year",
                "first_air_date.gte",
                "first_air_date.lte",
            ),
        };
        if let Some(year) = self.year {
            query.push((year_key, year.to_string()));
        }
        if let Some(ref date) = self.release_date_gte {
            query.push((gte_key, date.clone()));
        }
        if let Some(ref date) = self.release_date_lte {
            query.push((lte_key, date.clone()));
        }

        if kind == MediaKind::Movie {
            if !self.cast.is_empty() {
                query.push(("with_cast", self.cast_compare.join(&self.cast)));
            }
            if !self.crew.is_empty() {
                query.push(("with_crew", self.crew_compare.join(&self.crew)));
            }
        }

        if !self.watch_providers.is_empty() {
            query.push((
                "with_watch_providers",
                self.watch_provider_compare.join(&self.watch_providers),
            ));
        }
        match self.watch_region {
            Some(ref region) => query.push(("watch_region", region.clone())),
            // TMDB ignores a provider filter without a region.
            None if !self.watch_providers.is_empty() => {
                query.push(("watch_region", String::from(WATCH_PROVIDER_REGION)));
            }
            None => {}
        }
        if let Some(sort_by) = self.sort_by {
            query.push(("sort_by", String::from(sort_by.as_str())));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_compare_type_join() {
        // Arrange
        let ids = [28_u32, 12, 16];

        // Act & Assert
        assert_eq!(CompareType::And.join(&ids), "28,12,16");
        assert_eq!(CompareType::Or.join(&ids), "28|12|16");
        assert_eq!(CompareType::default(), CompareType::Or);
    }

    #[test]
    fn test_sort_by_from_str() {
        // Arrange & Act
        let parsed: SortBy = "vote_average.desc".parse().unwrap();
        let err = "rating.desc".parse::<SortBy>().unwrap_err();

        // Assert
        assert_eq!(parsed, SortBy::VoteAverageDesc);
        assert_eq!(err.to_string(), "unknown sort order: rating.desc");
    }

    #[test]
    fn test_sort_by_round_trips_every_variant() {
        for sort in SortBy::ALL {
            assert_eq!(sort.as_str().parse::<SortBy>().unwrap(), sort);
        }
    }

    #[test]
    fn test_empty_criteria_emit_nothing() {
        // Arrange
        let criteria = DiscoverCriteria::new();

        // Act
        let query = criteria.to_query(MediaKind::Movie);

        // Assert
        assert!(query.is_empty());
    }

    #[test]
    fn test_movie_criteria_query() {
        // Arrange
        let criteria = DiscoverCriteria::new()
            .genres(vec![28, 878], CompareType::And)
            .year(1979)
            .release_date_gte("1979-01-01")
            .cast(vec![10205], CompareType::Or)
            .crew(vec![578, 1], CompareType::And)
            .watch_providers(vec![8, 9], CompareType::Or)
            .watch_region("US")
            .sort_by(SortBy::PopularityDesc);

        // Act
        let query = criteria.to_query(MediaKind::Movie);

        // Assert
        assert_eq!(
            query,
            vec![
                ("with_genres", String::from("28,878")),
                ("primary_release_year", String::from("1979")),
                ("primary_release_date.gte", String::from("1979-01-01")),
                ("with_cast", String::from("10205")),
                ("with_crew", String::from("578,1")),
                ("with_watch_providers", String::from("8|9")),
                ("watch_region", String::from("US")),
                ("sort_by", String::from("popularity.desc")),
            ]
        );
    }

    #[test]
    fn test_tv_criteria_use_first_air_date_and_skip_people() {
        // Arrange
        let criteria = DiscoverCriteria::new()
            .year(2008)
            .release_date_lte("2013-12-31")
            .cast(vec![17419], CompareType::Or);

        // Act
        let query = criteria.to_query(MediaKind::Tv);

        // Assert
        assert_eq!(
            query,
            vec![
                ("first_air_date_year", String::from("2008")),
                ("first_air_date.lte", String::from("2013-12-31")),
            ]
        );
    }

    #[test]
    fn test_watch_providers_default_region() {
        // Arrange
        let criteria = DiscoverCriteria::new().watch_providers(vec![8], CompareType::Or);

        // Act
        let movie = criteria.to_query(MediaKind::Movie);
        let tv = criteria.to_query(MediaKind::Tv);

        // Assert
        let expected = vec![
            ("with_watch_providers", String::from("8")),
            ("watch_region", String::from("US")),
        ];
        assert_eq!(movie, expected);
        assert_eq!(tv, expected);
    }

    #[test]
    fn test_watch_region_without_providers_is_kept() {
        // Arrange
        let criteria = DiscoverCriteria::new().watch_region("GB");

        // Act
        let query = criteria.to_query(MediaKind::Movie);

        // Assert
        assert_eq!(query, vec![("watch_region", String::from("GB"))]);
    }

    #[test]
    fn test_movie_list_paths() {
        assert_eq!(MovieList::Popular.path(), "movie/popular");
        assert_eq!(MovieList::NowPlaying.path(), "movie/now_playing");
        assert_eq!(MovieList::Upcoming.path(), "movie/upcoming");
    }
}
