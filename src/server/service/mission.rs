use sea_orm::DatabaseConnection;

use crate::server::{
    allocator::IdAllocator,
    data::mission::MissionRepository,
    error::AppError,
    model::mission::{CreateMissionParam, MissionParam},
};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new mission. Trajectory references are not checked.
    pub async fn create(
        &self,
        allocator: &IdAllocator,
        params: CreateMissionParam,
    ) -> Result<MissionParam, AppError> {
        let repo = MissionRepository::new(self.db);

        Ok(repo.create(allocator, params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<MissionParam>, AppError> {
        let repo = MissionRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MissionParam>, AppError> {
        let repo = MissionRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }
}
