use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    allocator::IdAllocator,
    error::allocation::AllocationError,
    model::schedule::{CreateScheduleParam, ScheduleParam, SchedulePatch, TimeRange},
};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new schedule under an allocator-assigned id
    ///
    /// The drone and mission references are stored as given; checking that they
    /// exist is up to the caller.
    pub async fn create(
        &self,
        allocator: &IdAllocator,
        params: CreateScheduleParam,
    ) -> Result<ScheduleParam, AllocationError> {
        let schedule = allocator
            .insert_with(entity::prelude::Schedule, self.db, |id| {
                entity::schedule::ActiveModel {
                    id: ActiveValue::Set(id),
                    drone_id: ActiveValue::Set(params.drone_id),
                    mission_id: ActiveValue::Set(params.mission_id),
                    start_time: ActiveValue::Set(params.start_time),
                    end_time: ActiveValue::Set(params.end_time),
                    status: ActiveValue::Set(params.status.clone()),
                }
                .insert(self.db)
            })
            .await?;

        Ok(ScheduleParam::from_entity(schedule))
    }

    /// Gets every schedule ordered by id
    pub async fn get_all(&self) -> Result<Vec<ScheduleParam>, DbErr> {
        let schedules = entity::prelude::Schedule::find()
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;

        Ok(schedules
            .into_iter()
            .map(ScheduleParam::from_entity)
            .collect())
    }

    /// Gets a schedule by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ScheduleParam>, DbErr> {
        let schedule = entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(schedule.map(ScheduleParam::from_entity))
    }

    /// Gets all schedules assigned to a drone, ordered by start time
    pub async fn get_by_drone_id(&self, drone_id: i32) -> Result<Vec<ScheduleParam>, DbErr> {
        let schedules = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::DroneId.eq(drone_id))
            .order_by_asc(entity::schedule::Column::StartTime)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;

        Ok(schedules
            .into_iter()
            .map(ScheduleParam::from_entity)
            .collect())
    }

    /// Gets schedules lying entirely within `range`, bounds included
    ///
    /// Selects `start_time >= range.lower AND end_time <= range.upper`, ordered by
    /// start time.
    pub async fn get_within(&self, range: TimeRange) -> Result<Vec<ScheduleParam>, DbErr> {
        let schedules = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::StartTime.gte(range.lower))
            .filter(entity::schedule::Column::EndTime.lte(range.upper))
            .order_by_asc(entity::schedule::Column::StartTime)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;

        Ok(schedules
            .into_iter()
            .map(ScheduleParam::from_entity)
            .collect())
    }

    /// Replaces the field named by `patch`, leaving every other field untouched
    ///
    /// Returns `None` if no schedule has the given id.
    pub async fn update(
        &self,
        id: i32,
        patch: SchedulePatch,
    ) -> Result<Option<ScheduleParam>, DbErr> {
        let Some(schedule) = entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::schedule::ActiveModel = schedule.into();
        match patch {
            SchedulePatch::Status(status) => {
                active_model.status = ActiveValue::Set(status);
            }
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(ScheduleParam::from_entity(updated)))
    }
}
