//! Genre id to name lookup tables.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::raw::types::Genre;

/// Built-in TV genres, used when `genre/tv/list` fails.
const DEFAULT_TV_GENRES: [(u32, &str); 16] = [
    (10751, "Family"),
    (10759, "Action & Adventure"),
    (10762, "Kids"),
    (10763, "News"),
    (10764, "Reality"),
    (10765, "Sci-Fi & Fantasy"),
    (10766, "Soap"),
    (10767, "Talk"),
    (10768, "War & Politics"),
    (16, "Animation"),
    (18, "Drama"),
    (35, "Comedy"),
    (37, "Western"),
    (80, "Crime"),
    (9648, "Mystery"),
    (99, "Documentary"),
];

/// Built-in movie genres, used when `genre/movie/list` fails.
const DEFAULT_MOVIE_GENRES: [(u32, &str); 19] = [
    (10402, "Music"),
    (10749, "Romance"),
    (10751, "Family"),
    (10752, "War"),
    (10770, "TV Movie"),
    (12, "Adventure"),
    (14, "Fantasy"),
    (16, "Animation"),
    (18, "Drama"),
    (27, "Horror"),
    (28, "Action"),
    (35, "Comedy"),
    (36, "History"),
    (37, "Western"),
    (53, "Thriller"),
    (80, "Crime"),
    (878, "Science Fiction"),
    (9648, "Mystery"),
    (99, "Documentary"),
];

/// Genre lookup table (id to display name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenreMap(BTreeMap<u32, String>);

impl GenreMap {
    /// Builds a table from a genre list response.
    #[must_use]
    pub fn from_genres(genres: &[Genre]) -> Self {
        Self(
            genres
                .iter()
                .map(|genre| (genre.id, genre.name.clone()))
                .collect(),
        )
    }

    /// Built-in TV genres.
    #[must_use]
    pub fn default_tv() -> Self {
        Self::from_table(&DEFAULT_TV_GENRES)
    }

    /// Built-in movie genres.
    #[must_use]
    pub fn default_movie() -> Self {
        Self::from_table(&DEFAULT_MOVIE_GENRES)
    }

    fn from_table(table: &[(u32, &str)]) -> Self {
        Self(
            table
                .iter()
                .map(|&(id, name)| (id, String::from(name)))
                .collect(),
        )
    }

    /// Name of one genre.
    #[must_use]
    pub fn name(&self, id: u32) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Names of the given genres, in input order. Unknown ids are dropped.
    #[must_use]
    pub fn names(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .filter_map(|id| self.name(*id))
            .map(String::from)
            .collect()
    }

    /// Number of genres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(id, name)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(id, name)| (*id, name.as_str()))
    }
}
