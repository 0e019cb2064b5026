//! Ordering catalog records by release date or title.
//!
//! Only one key is ever applied. When both keys are requested the release
//! date wins and the title flag is ignored. All sorts are stable, including
//! descending ones: records with equal keys keep their prior relative order.

use std::cmp::Ordering;

use crate::movie::Movie;
use crate::text::cmp_ignore_case;

/// The single comparator a [`SortRequest`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ReleaseDate,
    Title,
}

/// Raw sort flags as received from a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortRequest {
    pub by_date: bool,
    pub by_title: bool,
    pub ascending: bool,
}

impl SortRequest {
    pub fn new(by_date: bool, by_title: bool, ascending: bool) -> Self {
        Self {
            by_date,
            by_title,
            ascending,
        }
    }

    /// Resolve the flags to one key. Release date takes precedence.
    pub fn key(&self) -> Option<SortKey> {
        if self.by_date {
            Some(SortKey::ReleaseDate)
        } else if self.by_title {
            Some(SortKey::Title)
        } else {
            None
        }
    }

    fn compare(&self, key: SortKey, a: &Movie, b: &Movie) -> Ordering {
        let ord = match key {
            SortKey::ReleaseDate => a.release_date.cmp(&b.release_date),
            SortKey::Title => cmp_ignore_case(&a.title, &b.title),
        };
        if self.ascending {
            ord
        } else {
            ord.reverse()
        }
    }
}

/// Reorder `movies` in place. This is the store-mutating variant.
pub fn sort_in_place(movies: &mut [Movie], request: &SortRequest) {
    if let Some(key) = request.key() {
        movies.sort_by(|a, b| request.compare(key, a, b));
    }
}

/// Sorted owned copy of `movies`; the input order is left untouched.
pub fn sorted(movies: &[Movie], request: &SortRequest) -> Vec<Movie> {
    let mut view = movies.to_vec();
    sort_in_place(&mut view, request);
    view
}
