//! Multi-field equality filtering over catalog records.
//!
//! A [`MovieFilter`] is a conjunction of up to three predicates. Each one is
//! optional; an unset predicate accepts every record. All set predicates are
//! evaluated together once per record, so the result is the intersection of
//! the single-predicate results in the input order.

use chrono::Datelike;

use crate::movie::Movie;
use crate::text::{eq_ignore_case, non_blank};

/// Requested filter predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Case-insensitive exact match against `Movie::category`.
    pub category: Option<String>,
    /// Case-insensitive equality against any entry of `Movie::genres`.
    pub genre: Option<String>,
    /// Calendar year of `Movie::release_date`.
    pub release_year: Option<i32>,
}

impl MovieFilter {
    /// Build a filter from raw request parameters.
    ///
    /// Blank text and a release year of zero or below all mean "unset".
    pub fn new(category: Option<&str>, genre: Option<&str>, release_year: i32) -> Self {
        Self {
            category: non_blank(category).map(str::to_string),
            genre: non_blank(genre).map(str::to_string),
            release_year: (release_year > 0).then_some(release_year),
        }
    }

    /// `true` when no predicate is set.
    pub fn is_unrestricted(&self) -> bool {
        self.category.is_none() && self.genre.is_none() && self.release_year.is_none()
    }

    /// Evaluate every set predicate against `movie`.
    pub fn matches(&self, movie: &Movie) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| eq_ignore_case(&movie.category, c));

        let genre_ok = self
            .genre
            .as_deref()
            .map_or(true, |g| movie.genres.iter().any(|entry| eq_ignore_case(entry, g)));

        let year_ok = self
            .release_year
            .map_or(true, |y| movie.release_date.year() == y);

        category_ok && genre_ok && year_ok
    }

    /// Owned copies of the records passing every predicate, order preserved.
    pub fn apply(&self, movies: &[Movie]) -> Vec<Movie> {
        movies.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}
