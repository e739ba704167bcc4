use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory store holding campuses and classrooms.
    pub pool: campus_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
