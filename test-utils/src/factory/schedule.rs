//! Schedule factory for creating test schedule entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schedules with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::schedule::ScheduleFactory;
///
/// let schedule = ScheduleFactory::new(&db, drone.id, mission.id)
///     .start_time(start)
///     .end_time(start + chrono::Duration::hours(2))
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    drone_id: i32,
    mission_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - id: next value of the factory counter
    /// - start_time: 1 hour from now
    /// - end_time: 2 hours from now
    /// - status: `"planned"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `drone_id` - Drone the schedule assigns
    /// - `mission_id` - Mission the schedule assigns
    pub fn new(db: &'a DatabaseConnection, drone_id: i32, mission_id: i32) -> Self {
        let start_time = Utc::now() + Duration::hours(1);
        Self {
            db,
            id: next_id(),
            drone_id,
            mission_id,
            start_time,
            end_time: start_time + Duration::hours(1),
            status: "planned".to_string(),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the schedule entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::schedule::Model)` - Created schedule entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            id: ActiveValue::Set(self.id),
            drone_id: ActiveValue::Set(self.drone_id),
            mission_id: ActiveValue::Set(self.mission_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a schedule with default values for the given drone and mission.
pub async fn create_schedule(
    db: &DatabaseConnection,
    drone_id: i32,
    mission_id: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, drone_id, mission_id).build().await
}

/// Creates a schedule occupying exactly `[start_time, end_time]`.
pub async fn create_schedule_between(
    db: &DatabaseConnection,
    drone_id: i32,
    mission_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, drone_id, mission_id)
        .start_time(start_time)
        .end_time(end_time)
        .build()
        .await
}
