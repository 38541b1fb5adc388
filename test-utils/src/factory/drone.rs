//! Drone factory for creating test drone entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test drones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::drone::DroneFactory;
///
/// let drone = DroneFactory::new(&db)
///     .status("in_flight")
///     .current_mission_id(Some(serde_json::json!(4)))
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    status: String,
    current_mission_id: Option<serde_json::Value>,
    possible_missions_ids: Vec<i32>,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory with default values.
    ///
    /// Defaults:
    /// - id: next value of the factory counter
    /// - name: `"Drone {id}"`
    /// - status: `"idle"`
    /// - current_mission_id: `None`
    /// - possible_missions_ids: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DroneFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            name: format!("Drone {}", id),
            status: "idle".to_string(),
            current_mission_id: None,
            possible_missions_ids: Vec::new(),
        }
    }

    /// Overrides the factory-assigned id.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the raw JSON stored for the current mission reference.
    pub fn current_mission_id(mut self, current_mission_id: Option<serde_json::Value>) -> Self {
        self.current_mission_id = current_mission_id;
        self
    }

    pub fn possible_missions_ids(mut self, possible_missions_ids: Vec<i32>) -> Self {
        self.possible_missions_ids = possible_missions_ids;
        self
    }

    /// Builds and inserts the drone entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drone::Model)` - Created drone entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            status: ActiveValue::Set(self.status),
            current_mission_id: ActiveValue::Set(self.current_mission_id),
            possible_missions_ids: ActiveValue::Set(json!(self.possible_missions_ids)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone with default values.
///
/// Shorthand for `DroneFactory::new(db).build().await`.
pub async fn create_drone(db: &DatabaseConnection) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db).build().await
}

/// Creates a drone with the given status and default values otherwise.
pub async fn create_drone_with_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db).status(status).build().await
}
