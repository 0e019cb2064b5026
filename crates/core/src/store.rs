//! The canonical, ordered record sequence and identifier assignment.
//!
//! [`MovieStore`] is the only owner of catalog records. Its sequence order is
//! the canonical display order; [`MovieStore::sort`] rewrites that order in
//! place. Reads hand out borrowed views or owned snapshots. The store is not
//! synchronized; callers sharing it across tasks wrap it in a lock.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::movie::{Movie, MovieInput};
use crate::sort::{sort_in_place, SortRequest};
use crate::types::MovieId;

// ---------------------------------------------------------------------------
// Identifier policy
// ---------------------------------------------------------------------------

/// How [`MovieStore::add`] picks the identifier of a new record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdAssignment {
    /// A counter that only grows. Identifiers are never reused.
    #[default]
    Monotonic,
    /// The current record count. Can collide after deletions; a collision is
    /// rejected with [`CoreError::DuplicateId`].
    SequenceLength,
}

impl IdAssignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monotonic => "monotonic",
            Self::SequenceLength => "sequence_length",
        }
    }
}

impl fmt::Display for IdAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdAssignment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(Self::Monotonic),
            "sequence_length" | "legacy" => Ok(Self::SequenceLength),
            other => Err(CoreError::Validation(format!(
                "Invalid id assignment '{other}'. Must be one of: monotonic, sequence_length"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
    next_id: MovieId,
    id_assignment: IdAssignment,
}

impl MovieStore {
    /// An empty store using [`IdAssignment::Monotonic`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_assignment(id_assignment: IdAssignment) -> Self {
        Self {
            id_assignment,
            ..Self::default()
        }
    }

    pub fn id_assignment(&self) -> IdAssignment {
        self.id_assignment
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Borrowed view of the records in canonical order.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    /// Owned copy of the records in canonical order.
    pub fn snapshot(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    /// First record with the given identifier.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    fn position(&self, id: MovieId) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }

    /// Append a new record and return it with its assigned identifier.
    pub fn add(&mut self, input: MovieInput) -> Result<&Movie, CoreError> {
        let id = match self.id_assignment {
            IdAssignment::Monotonic => self.next_id,
            IdAssignment::SequenceLength => self.movies.len() as MovieId,
        };

        if self.position(id).is_some() {
            return Err(CoreError::DuplicateId(id));
        }

        self.next_id = self.next_id.max(id) + 1;
        let index = self.movies.len();
        self.movies.push(input.into_movie(id));
        Ok(&self.movies[index])
    }

    /// Replace every field but the identifier. `None` when no record matches.
    pub fn update(&mut self, id: MovieId, input: MovieInput) -> Option<&Movie> {
        let index = self.position(id)?;
        self.movies[index].apply(input);
        Some(&self.movies[index])
    }

    /// Remove the first record with the given identifier.
    pub fn delete(&mut self, id: MovieId) -> Option<Movie> {
        let index = self.position(id)?;
        Some(self.movies.remove(index))
    }

    /// Reorder the canonical sequence and return it.
    ///
    /// This mutates the store; use [`crate::sort::sorted`] on [`Self::list`]
    /// for a view that leaves the canonical order alone.
    pub fn sort(&mut self, request: &SortRequest) -> &[Movie] {
        sort_in_place(&mut self.movies, request);
        &self.movies
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
