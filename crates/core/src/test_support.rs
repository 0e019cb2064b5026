//! Shared fixtures for unit tests.

use chrono::NaiveDate;

use crate::movie::{Movie, MovieInput};
use crate::types::{MovieId, ReleaseDate};

pub fn date(year: i32, month: u32, day: u32) -> ReleaseDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn input(title: &str, category: &str, genres: &[&str], year: i32) -> MovieInput {
    MovieInput {
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        release_date: date(year, 1, 1),
        director: String::new(),
        actors: Vec::new(),
        rating: 5.0,
        poster_url: String::new(),
    }
}

pub fn movie(id: MovieId, title: &str, category: &str, genres: &[&str], year: i32) -> Movie {
    input(title, category, genres, year).into_movie(id)
}

/// The two-record catalog shared by several tests: "Alpha" (Film,
/// Drama, 2001) and "beta" (Film, Comedy, 1999).
pub fn alpha_beta() -> Vec<Movie> {
    vec![
        movie(0, "Alpha", "Film", &["Drama"], 2001),
        movie(1, "beta", "Film", &["Comedy"], 1999),
    ]
}

pub fn ids(movies: &[Movie]) -> Vec<MovieId> {
    movies.iter().map(|m| m.id).collect()
}
