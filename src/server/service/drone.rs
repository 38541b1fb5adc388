use sea_orm::DatabaseConnection;

use crate::server::{
    allocator::IdAllocator,
    data::drone::DroneRepository,
    error::AppError,
    model::drone::{CreateDroneParam, DroneParam, DronePatch},
};

pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new drone, ignoring any id the client may have sent
    pub async fn create(
        &self,
        allocator: &IdAllocator,
        params: CreateDroneParam,
    ) -> Result<DroneParam, AppError> {
        let repo = DroneRepository::new(self.db);

        let drone = repo.create(allocator, params).await?;

        tracing::debug!("Created drone {} ({})", drone.id, drone.name);

        Ok(drone)
    }

    pub async fn get_all(&self) -> Result<Vec<DroneParam>, AppError> {
        let repo = DroneRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneParam>, AppError> {
        let repo = DroneRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets all drones with the given status
    ///
    /// # Returns
    /// - `Ok(Vec<DroneParam>)` - At least one matching drone
    /// - `Err(AppError::NotFound)` - No drone has this status
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<DroneParam>, AppError> {
        let repo = DroneRepository::new(self.db);

        let drones = repo.get_by_status(status).await?;

        if drones.is_empty() {
            return Err(AppError::NotFound(format!(
                "No drones with status '{}'",
                status
            )));
        }

        Ok(drones)
    }

    /// Replaces a drone's status
    /// Returns None if the drone doesn't exist
    pub async fn update_status(
        &self,
        id: i32,
        status: String,
    ) -> Result<Option<DroneParam>, AppError> {
        let repo = DroneRepository::new(self.db);

        Ok(repo.update(id, DronePatch::Status(status)).await?)
    }

    /// Replaces a drone's list of possible missions
    /// Returns None if the drone doesn't exist
    pub async fn update_possible_missions(
        &self,
        id: i32,
        possible_missions_ids: Vec<i32>,
    ) -> Result<Option<DroneParam>, AppError> {
        let repo = DroneRepository::new(self.db);

        Ok(repo
            .update(id, DronePatch::PossibleMissions(possible_missions_ids))
            .await?)
    }
}
