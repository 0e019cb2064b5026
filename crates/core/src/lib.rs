//! Cinedex catalog engine.
//!
//! Pure domain logic for an in-memory movie catalog: the record store,
//! relevance scoring, filtering, sorting and search. No I/O and no locking;
//! the API crate owns concurrency and transport.

pub mod error;
pub mod filter;
pub mod movie;
pub mod scoring;
pub mod search;
pub mod sort;
pub mod store;
pub mod text;
pub mod types;

#[cfg(test)]
mod test_support;
