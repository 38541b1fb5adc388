use rand::Rng;
use sea_orm::{ColumnTrait, ConnectionTrait, QueryFilter, QuerySelect};
use std::str::FromStr;

use crate::server::{allocator::collection::KeyedEntity, error::allocation::AllocationError};

/// Largest id the random policy draws, `2^31 - 1`.
pub const RANDOM_ID_MAX: i32 = i32::MAX;

/// How the allocator picks the next id of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationPolicy {
    /// One more than the largest id in the collection, `1` when empty.
    #[default]
    Sequential,
    /// Uniform draw from `[1, 2^31 - 1]`, redrawn while the id is taken.
    Random,
}

impl AllocationPolicy {
    /// Proposes an id for `E`.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - An id not present in the collection at the time of the check
    /// - `Ok(None)` - The random draw hit an existing id; the caller should try again
    /// - `Err(AllocationError::Overflow)` - Sequential ids ran past `i32::MAX`
    /// - `Err(AllocationError::Store)` - The lookup failed
    pub(super) async fn candidate<E, C>(self, db: &C) -> Result<Option<i32>, AllocationError>
    where
        E: KeyedEntity,
        C: ConnectionTrait,
    {
        match self {
            AllocationPolicy::Sequential => {
                let max = max_id::<E, C>(db).await?;
                match max {
                    None => Ok(Some(1)),
                    Some(max) => max
                        .checked_add(1)
                        .map(Some)
                        .ok_or(AllocationError::Overflow {
                            collection: E::COLLECTION,
                            max,
                        }),
                }
            }
            AllocationPolicy::Random => {
                let candidate = random_id();
                let taken = E::find()
                    .filter(E::id_column().eq(candidate))
                    .one(db)
                    .await?
                    .is_some();

                Ok((!taken).then_some(candidate))
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AllocationPolicy::Sequential => "sequential",
            AllocationPolicy::Random => "random",
        }
    }
}

impl FromStr for AllocationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(AllocationPolicy::Sequential),
            "random" => Ok(AllocationPolicy::Random),
            other => Err(format!(
                "unknown allocation policy '{}', expected 'sequential' or 'random'",
                other
            )),
        }
    }
}

/// Largest id currently stored for `E`, `None` for an empty collection.
async fn max_id<E, C>(db: &C) -> Result<Option<i32>, sea_orm::DbErr>
where
    E: KeyedEntity,
    C: ConnectionTrait,
{
    let max = E::find()
        .select_only()
        .column_as(E::id_column().max(), "max_id")
        .into_tuple::<Option<i32>>()
        .one(db)
        .await?;

    Ok(max.flatten())
}

fn random_id() -> i32 {
    rand::rng().random_range(1..=RANDOM_ID_MAX)
}
