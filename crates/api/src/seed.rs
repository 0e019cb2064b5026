//! Startup seeding of the in-memory catalog from a JSON file.
//!
//! The file holds a JSON array of movie objects without identifiers. Every
//! entry is validated before any is added, so an unreadable, malformed or
//! invalid file adds nothing. Entries are then added in file order. Nothing
//! is ever written back.

use std::path::{Path, PathBuf};

use cinedex_core::error::CoreError;
use cinedex_core::movie::MovieInput;

use crate::catalog::MovieCatalog;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file is not a JSON array of movies: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed entry {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error("Seeding the catalog failed: {0}")]
    Catalog(#[from] CoreError),
}

/// Parse and validate seed entries from a JSON string.
pub fn parse_seed(raw: &str) -> Result<Vec<MovieInput>, SeedError> {
    let inputs: Vec<MovieInput> = serde_json::from_str(raw)?;

    for (index, input) in inputs.iter().enumerate() {
        input
            .check()
            .map_err(|source| SeedError::Invalid { index, source })?;
    }

    Ok(inputs)
}

/// Read, parse and validate a seed file.
pub fn load_seed(path: &Path) -> Result<Vec<MovieInput>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&raw)
}

/// Load `path` into `catalog`. Returns the number of movies added.
pub async fn seed_catalog(catalog: &MovieCatalog, path: &Path) -> Result<usize, SeedError> {
    let inputs = load_seed(path)?;
    let added = catalog.extend(inputs).await?;
    tracing::info!(path = %path.display(), added, "Catalog seeded");
    Ok(added)
}
