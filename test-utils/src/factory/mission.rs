//! Mission factory for creating test mission entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test missions with customizable fields.
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    trajectory_id: i32,
    duration: i32,
    priority: i32,
}

impl<'a> MissionFactory<'a> {
    /// Creates a new MissionFactory with default values.
    ///
    /// Defaults:
    /// - id: next value of the factory counter
    /// - trajectory_id: `1`
    /// - duration: `600`
    /// - priority: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_id(),
            trajectory_id: 1,
            duration: 600,
            priority: 1,
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn trajectory_id(mut self, trajectory_id: i32) -> Self {
        self.trajectory_id = trajectory_id;
        self
    }

    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds and inserts the mission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mission::Model)` - Created mission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            id: ActiveValue::Set(self.id),
            trajectory_id: ActiveValue::Set(self.trajectory_id),
            duration: ActiveValue::Set(self.duration),
            priority: ActiveValue::Set(self.priority),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission with default values.
pub async fn create_mission(db: &DatabaseConnection) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db).build().await
}
