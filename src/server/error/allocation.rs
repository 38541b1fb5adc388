use sea_orm::DbErr;
use thiserror::Error;

use crate::server::allocator::Collection;

/// Failures of the id allocator.
#[derive(Error, Debug)]
pub enum AllocationError {
    /// Every attempt produced an id that was already taken.
    ///
    /// Either the random policy kept drawing ids present in the collection or
    /// inserts kept failing on the unique `id` constraint because another writer
    /// claimed the id first. Results in a 500 Internal Server Error.
    #[error("Failed to allocate a unique id in {collection} after {attempts} attempts")]
    Exhausted {
        /// Collection the id was requested for
        collection: Collection,
        /// Number of attempts made before giving up
        attempts: u32,
    },

    /// The sequential policy reached the largest representable id.
    #[error("No ids left in {collection}: maximum id {max} already in use")]
    Overflow {
        /// Collection the id was requested for
        collection: Collection,
        /// The current maximum id
        max: i32,
    },

    /// The store failed while looking up or inserting a candidate id.
    #[error(transparent)]
    Store(#[from] DbErr),
}
