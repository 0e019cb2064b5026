use std::sync::Arc;

use crate::catalog::MovieCatalog;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The in-memory movie catalog.
    pub catalog: Arc<MovieCatalog>,
}
