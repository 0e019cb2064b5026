//! Catalog record types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{MovieId, ReleaseDate};

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub genres: Vec<String>,
    pub release_date: ReleaseDate,
    pub director: String,
    pub actors: Vec<String>,
    pub rating: f64,
    pub poster_url: String,
}

impl Movie {
    /// Overwrite every field except `id` with the values from `input`.
    pub fn apply(&mut self, input: MovieInput) {
        let MovieInput {
            title,
            description,
            category,
            genres,
            release_date,
            director,
            actors,
            rating,
            poster_url,
        } = input;

        self.title = title;
        self.description = description;
        self.category = category;
        self.genres = genres;
        self.release_date = release_date;
        self.director = director;
        self.actors = actors;
        self.rating = rating;
        self.poster_url = poster_url;
    }
}

// ---------------------------------------------------------------------------
// DTO
// ---------------------------------------------------------------------------

/// Every mutable field of a [`Movie`]. Body of create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MovieInput {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub release_date: ReleaseDate,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub actors: Vec<String>,
    #[validate(range(min = 0.0, max = MAX_RATING, message = "rating must be between 0 and 10"))]
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub poster_url: String,
}

impl MovieInput {
    /// Build the stored record under the given identifier.
    pub fn into_movie(self, id: MovieId) -> Movie {
        let mut movie = Movie {
            id,
            title: String::new(),
            description: String::new(),
            category: String::new(),
            genres: Vec::new(),
            release_date: self.release_date,
            director: String::new(),
            actors: Vec::new(),
            rating: 0.0,
            poster_url: String::new(),
        };
        movie.apply(self);
        movie
    }

    /// Run field validation, mapping failures into [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

impl From<Movie> for MovieInput {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            description: movie.description,
            category: movie.category,
            genres: movie.genres,
            release_date: movie.release_date,
            director: movie.director,
            actors: movie.actors,
            rating: movie.rating,
            poster_url: movie.poster_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
