//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for factory-assigned ids.
///
/// Starts well above the ids a test would normally allocate through the
/// application so seeded rows are easy to tell apart in assertions.
static COUNTER: std::sync::atomic::AtomicI32 = std::sync::atomic::AtomicI32::new(100_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `i32` - Next unique counter value
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a schedule together with the drone and mission it references.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((drone, mission, schedule))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_schedule_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::drone::Model,
        entity::mission::Model,
        entity::schedule::Model,
    ),
    DbErr,
> {
    let drone = crate::factory::drone::create_drone(db).await?;
    let mission = crate::factory::mission::create_mission(db).await?;
    let schedule = crate::factory::schedule::create_schedule(db, drone.id, mission.id).await?;

    Ok((drone, mission, schedule))
}
