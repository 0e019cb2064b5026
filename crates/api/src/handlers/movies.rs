//! Handlers for the movie catalog.
//!
//! Extractor rejections (malformed JSON, unparsable path or query values)
//! are converted to [`AppError::BadRequest`] so every failure carries the
//! same JSON error body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::movie::MovieInput;
use cinedex_core::sort::SortRequest;
use cinedex_core::types::MovieId;

use crate::error::{AppError, AppResult};
use crate::query::{FilterParams, SearchParams, SortParams};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: MovieId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
///
/// Every movie in catalog order.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = state.catalog.list().await;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    path: Result<Path<MovieId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let movie = state.catalog.get(id).await.ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: movie }))
}

/// POST /api/v1/movies
///
/// Append a movie. The identifier is assigned by the catalog; any `id` in
/// the body is ignored.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let movie = state.catalog.add(input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// PUT /api/v1/movies/{id}
///
/// Replace every field of the movie except its identifier.
pub async fn update_movie(
    State(state): State<AppState>,
    path: Result<Path<MovieId>, PathRejection>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let movie = state
        .catalog
        .update(id, input)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    path: Result<Path<MovieId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    state.catalog.delete(id).await.ok_or_else(|| not_found(id))?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/v1/movies/filter
///
/// Movies matching every supplied criterion, in catalog order.
pub async fn filter_movies(
    State(state): State<AppState>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let movies = state.catalog.filter(&params.to_filter()).await;

    Ok(Json(DataResponse { data: movies }))
}

/// POST /api/v1/movies/sort
///
/// Reorder the catalog itself and return the new order. With no sort flag
/// set the catalog is left as it is.
pub async fn sort_movies(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let movies = state.catalog.sort(&SortRequest::from(params)).await;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/sorted
///
/// Sorted copy of the catalog; the stored order does not change.
pub async fn sorted_movies(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let movies = state.catalog.sorted(&SortRequest::from(params)).await;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/search
///
/// Only the movies sharing the highest match score, each carrying its
/// `score`. Empty when nothing matches.
pub async fn search_movies(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let results = state.catalog.search(&params.q).await;

    Ok(Json(DataResponse { data: results }))
}
