use sea_orm::DatabaseConnection;

use crate::server::{
    allocator::IdAllocator,
    data::{drone::DroneRepository, mission::MissionRepository, schedule::ScheduleRepository},
    error::AppError,
    model::schedule::{CreateScheduleParam, ScheduleParam, SchedulePatch, TimeRange},
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new schedule after validating it
    ///
    /// # Returns
    /// - `Ok(ScheduleParam)` - The created schedule
    /// - `Err(AppError::BadRequest)` - `end_time` precedes `start_time`, or the drone
    ///   or mission does not exist
    /// - `Err(AppError::DbErr)` / `Err(AppError::AllocationErr)` - Store or allocation failure
    pub async fn create(
        &self,
        allocator: &IdAllocator,
        params: CreateScheduleParam,
    ) -> Result<ScheduleParam, AppError> {
        if params.end_time < params.start_time {
            return Err(AppError::BadRequest(
                "end_time must not be earlier than start_time".to_string(),
            ));
        }

        if DroneRepository::new(self.db)
            .get_by_id(params.drone_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Drone {} does not exist",
                params.drone_id
            )));
        }

        if MissionRepository::new(self.db)
            .get_by_id(params.mission_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Mission {} does not exist",
                params.mission_id
            )));
        }

        let repo = ScheduleRepository::new(self.db);

        Ok(repo.create(allocator, params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<ScheduleParam>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the schedules of a drone; an unknown drone simply has none
    pub async fn get_by_drone(&self, drone_id: i32) -> Result<Vec<ScheduleParam>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.get_by_drone_id(drone_id).await?)
    }

    /// Gets the schedules lying entirely inside `range`. An inverted range matches nothing.
    pub async fn get_within(&self, range: TimeRange) -> Result<Vec<ScheduleParam>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.get_within(range).await?)
    }

    /// Replaces a schedule's status
    /// Returns None if the schedule doesn't exist
    pub async fn update_status(
        &self,
        id: i32,
        status: String,
    ) -> Result<Option<ScheduleParam>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.update(id, SchedulePatch::Status(status)).await?)
    }
}
