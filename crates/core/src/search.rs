//! Relevance-ranked text search returning only the best matches.
//!
//! Every record is scored exactly once into a [`ScoredMovie`]. Zero scores
//! are dropped, the rest are stable-sorted by descending score, and only the
//! records reaching the maximum score are returned.

use serde::Serialize;

use crate::movie::Movie;
use crate::scoring::{normalize_query, score_normalized};

/// A record paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub score: u32,
}

/// All records with a positive score, highest first. Ties keep input order.
pub fn rank(movies: &[Movie], query: &str) -> Vec<ScoredMovie> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut ranked: Vec<ScoredMovie> = movies
        .iter()
        .filter_map(|movie| {
            let score = score_normalized(movie, &needle);
            (score > 0).then(|| ScoredMovie {
                movie: movie.clone(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Only the records sharing the highest positive score, with their score.
pub fn search_scored(movies: &[Movie], query: &str) -> Vec<ScoredMovie> {
    let mut ranked = rank(movies, query);
    let Some(max) = ranked.first().map(|s| s.score) else {
        return ranked;
    };

    ranked.retain(|s| s.score == max);
    ranked
}

/// Only the records sharing the highest positive score.
pub fn search(movies: &[Movie], query: &str) -> Vec<Movie> {
    search_scored(movies, query)
        .into_iter()
        .map(|s| s.movie)
        .collect()
}
