//! Concurrent service wrapper around the catalog store.
//!
//! Every public operation holds the lock for its own duration only and hands
//! back owned records, so callers never observe a sequence mid-mutation and
//! cannot reorder the canonical sequence through a returned value.

use cinedex_core::error::CoreError;
use cinedex_core::filter::MovieFilter;
use cinedex_core::movie::{Movie, MovieInput};
use cinedex_core::search::{self, ScoredMovie};
use cinedex_core::sort::{self, SortRequest};
use cinedex_core::store::MovieStore;
use cinedex_core::types::MovieId;
use tokio::sync::RwLock;

/// Shared movie catalog.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Reads take the read lock; add, update,
/// delete and in-place sort take the write lock.
#[derive(Debug)]
pub struct MovieCatalog {
    store: RwLock<MovieStore>,
}

impl MovieCatalog {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Owned copy of every record in canonical order.
    pub async fn list(&self) -> Vec<Movie> {
        self.store.read().await.snapshot()
    }

    pub async fn get(&self, id: MovieId) -> Option<Movie> {
        self.store.read().await.get(id).cloned()
    }

    /// Validate and append a record.
    pub async fn add(&self, input: MovieInput) -> Result<Movie, CoreError> {
        input.check()?;

        let movie = self.store.write().await.add(input)?.clone();
        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie added");
        Ok(movie)
    }

    /// Validate and replace every field of an existing record.
    ///
    /// `Ok(None)` when no record has the identifier; nothing changes then.
    pub async fn update(&self, id: MovieId, input: MovieInput) -> Result<Option<Movie>, CoreError> {
        input.check()?;

        let updated = self.store.write().await.update(id, input).cloned();
        match &updated {
            Some(movie) => tracing::info!(movie_id = id, title = %movie.title, "Movie updated"),
            None => tracing::debug!(movie_id = id, "Update skipped, no such movie"),
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: MovieId) -> Option<Movie> {
        let removed = self.store.write().await.delete(id);
        match &removed {
            Some(_) => tracing::info!(movie_id = id, "Movie deleted"),
            None => tracing::debug!(movie_id = id, "Delete skipped, no such movie"),
        }
        removed
    }

    pub async fn filter(&self, filter: &MovieFilter) -> Vec<Movie> {
        let result = filter.apply(self.store.read().await.list());
        tracing::debug!(?filter, matched = result.len(), "Catalog filtered");
        result
    }

    /// Reorder the canonical sequence and return the new order.
    pub async fn sort(&self, request: &SortRequest) -> Vec<Movie> {
        let result = self.store.write().await.sort(request).to_vec();
        tracing::info!(key = ?request.key(), ascending = request.ascending, "Catalog reordered");
        result
    }

    /// Sorted copy; the canonical order is left untouched.
    pub async fn sorted(&self, request: &SortRequest) -> Vec<Movie> {
        sort::sorted(self.store.read().await.list(), request)
    }

    /// Best-scoring records for `query`, each with its score.
    pub async fn search(&self, query: &str) -> Vec<ScoredMovie> {
        let result = search::search_scored(self.store.read().await.list(), query);
        tracing::debug!(
            query,
            matched = result.len(),
            score = result.first().map(|s| s.score),
            "Catalog searched"
        );
        result
    }

    /// Add many records in order.
    ///
    /// Every input is validated before the first add, so an invalid entry
    /// adds nothing. An identifier collision stops the batch at the
    /// colliding entry; earlier entries stay.
    pub async fn extend<I>(&self, inputs: I) -> Result<usize, CoreError>
    where
        I: IntoIterator<Item = MovieInput>,
    {
        let inputs: Vec<MovieInput> = inputs.into_iter().collect();
        for input in &inputs {
            input.check()?;
        }

        let mut store = self.store.write().await;
        let mut added = 0;
        for input in inputs {
            store.add(input)?;
            added += 1;
        }
        Ok(added)
    }
}
