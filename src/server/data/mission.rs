use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    allocator::IdAllocator,
    error::allocation::AllocationError,
    model::mission::{CreateMissionParam, MissionParam},
};

pub struct MissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new mission under an allocator-assigned id
    pub async fn create(
        &self,
        allocator: &IdAllocator,
        params: CreateMissionParam,
    ) -> Result<MissionParam, AllocationError> {
        let mission = allocator
            .insert_with(entity::prelude::Mission, self.db, |id| {
                entity::mission::ActiveModel {
                    id: ActiveValue::Set(id),
                    trajectory_id: ActiveValue::Set(params.trajectory_id),
                    duration: ActiveValue::Set(params.duration),
                    priority: ActiveValue::Set(params.priority),
                }
                .insert(self.db)
            })
            .await?;

        Ok(MissionParam::from_entity(mission))
    }

    /// Gets every mission ordered by id
    pub async fn get_all(&self) -> Result<Vec<MissionParam>, DbErr> {
        let missions = entity::prelude::Mission::find()
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await?;

        Ok(missions.into_iter().map(MissionParam::from_entity).collect())
    }

    /// Gets a mission by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MissionParam>, DbErr> {
        let mission = entity::prelude::Mission::find_by_id(id).one(self.db).await?;

        Ok(mission.map(MissionParam::from_entity))
    }
}
