use std::sync::Arc;

use osaka_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: osaka_db::DbPool,
    /// Server configuration (admin password, token secret, timeouts).
    pub config: Arc<ServerConfig>,
    /// Image object store (S3-compatible in production, memory in tests).
    pub object_store: Arc<dyn ObjectStore>,
}
