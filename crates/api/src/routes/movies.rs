//! Route definitions for the movie catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /                  -> list_movies
/// POST   /                  -> create_movie
/// GET    /filter            -> filter_movies
/// POST   /sort              -> sort_movies
/// GET    /sorted            -> sorted_movies
/// GET    /search            -> search_movies
/// GET    /{id}              -> get_movie
/// PUT    /{id}              -> update_movie
/// DELETE /{id}              -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/filter", get(movies::filter_movies))
        .route("/sort", post(movies::sort_movies))
        .route("/sorted", get(movies::sorted_movies))
        .route("/search", get(movies::search_movies))
        .route(
            "/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}
