//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` is a pool
//! handle and `IdAllocator` shares its per-collection locks behind an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::allocator::IdAllocator;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Id allocator used by every create operation.
    ///
    /// There must be exactly one per process; clones share its locks, which is what
    /// keeps concurrent creates in one collection from picking the same id.
    pub allocator: IdAllocator,
}

impl AppState {
    pub fn new(db: DatabaseConnection, allocator: IdAllocator) -> Self {
        Self { db, allocator }
    }
}
