//! Collection-unique integer id allocation.
//!
//! Every drone, mission and schedule is keyed by an application-level integer `id`
//! chosen here rather than by the database. `IdAllocator` combines two guards:
//!
//! - **Per-collection serialization**: one async mutex per collection is held from
//!   the moment an id is proposed until the insert using it completes, so
//!   concurrent creates inside this process can never observe the same free id.
//! - **Store uniqueness**: `id` is the table primary key. An insert that fails with
//!   a unique-constraint violation (another process won the race) is retried with a
//!   fresh id.
//!
//! Both loops share a budget of [`MAX_ALLOCATION_ATTEMPTS`]; when it runs out the
//! allocator fails with [`AllocationError::Exhausted`] instead of spinning forever.

mod collection;
mod policy;

pub use collection::{Collection, KeyedEntity};
pub use policy::{AllocationPolicy, RANDOM_ID_MAX};

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use std::{future::Future, sync::Arc};
use tokio::sync::Mutex;

use crate::server::error::allocation::AllocationError;

/// Attempts made before an allocation is abandoned.
pub const MAX_ALLOCATION_ATTEMPTS: u32 = 10;

/// Assigns unique ids to new records, one lock per collection.
///
/// Cloning is cheap and clones share the same locks, so a single allocator held in
/// the application state serializes allocation for all request handlers.
#[derive(Clone)]
pub struct IdAllocator {
    policy: AllocationPolicy,
    locks: Arc<[Mutex<()>; 3]>,
}

impl IdAllocator {
    pub fn new(policy: AllocationPolicy) -> Self {
        Self {
            policy,
            locks: Arc::new([Mutex::new(()), Mutex::new(()), Mutex::new(())]),
        }
    }

    pub fn policy(&self) -> AllocationPolicy {
        self.policy
    }

    /// Allocates an id for `E` and hands it to `insert`.
    ///
    /// The collection lock is held across the whole loop. `insert` is called with each
    /// candidate id and should perform the actual write; a unique-constraint violation
    /// from it consumes an attempt and triggers a new candidate, any other error is
    /// returned as-is.
    ///
    /// # Arguments
    /// - `entity` - Entity whose collection the id is allocated in
    /// - `db` - Database connection used to look up candidates
    /// - `insert` - Writes the record using the allocated id
    ///
    /// # Returns
    /// - `Ok(T)` - Whatever `insert` returned for the first id it could store
    /// - `Err(AllocationError::Exhausted)` - No id could be stored within the attempt budget
    /// - `Err(AllocationError::Overflow)` - Sequential ids ran out
    /// - `Err(AllocationError::Store)` - Lookup or insert failed for another reason
    pub async fn insert_with<E, T, F, Fut>(
        &self,
        _entity: E,
        db: &DatabaseConnection,
        mut insert: F,
    ) -> Result<T, AllocationError>
    where
        E: KeyedEntity,
        F: FnMut(i32) -> Fut,
        Fut: Future<Output = Result<T, DbErr>>,
    {
        let collection = E::COLLECTION;
        let _guard = self.locks[collection.index()].lock().await;

        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let Some(id) = self.policy.candidate::<E, _>(db).await? else {
                tracing::debug!(
                    "Random id already taken in {} (attempt {}/{})",
                    collection,
                    attempt,
                    MAX_ALLOCATION_ATTEMPTS
                );
                continue;
            };

            match insert(id).await {
                Ok(record) => return Ok(record),
                Err(err) if is_unique_violation(&err) => {
                    tracing::warn!(
                        "Id {} in {} was claimed concurrently (attempt {}/{})",
                        id,
                        collection,
                        attempt,
                        MAX_ALLOCATION_ATTEMPTS
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(AllocationError::Exhausted {
            collection,
            attempts: MAX_ALLOCATION_ATTEMPTS,
        })
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(AllocationPolicy::default())
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
