pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                       list, create
/// /movies/filter                filter by category, genre, release year
/// /movies/sort                  reorder the catalog (POST)
/// /movies/sorted                sorted view, catalog order unchanged
/// /movies/search                best-scoring text matches
/// /movies/{id}                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
