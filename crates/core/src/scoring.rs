//! Relevance scoring between a catalog record and a free-text query.
//!
//! The score is the number of record attributes containing the query as a
//! case-insensitive substring. Scalar text fields (title, description,
//! category, director, poster URL) count once each; every genre entry and
//! every actor entry is its own attribute. Repeated occurrences inside one attribute do
//! not add to the score.

use crate::movie::Movie;
use crate::text::contains_folded;

/// Prepare a query for repeated scoring: trimmed and lowercased.
///
/// Returns `None` for blank input, which never matches anything.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Score `movie` against a query that already went through [`normalize_query`].
pub fn score_normalized(movie: &Movie, needle: &str) -> u32 {
    let scalars = [
        movie.title.as_str(),
        movie.description.as_str(),
        movie.category.as_str(),
        movie.director.as_str(),
        movie.poster_url.as_str(),
    ];

    let attributes = scalars
        .into_iter()
        .chain(movie.genres.iter().map(String::as_str))
        .chain(movie.actors.iter().map(String::as_str));

    attributes.filter(|a| contains_folded(a, needle)).count() as u32
}

/// Number of attributes of `movie` matching `query`. Zero means no match.
pub fn match_score(movie: &Movie, query: &str) -> u32 {
    match normalize_query(query) {
        Some(needle) => score_normalized(movie, &needle),
        None => 0,
    }
}
