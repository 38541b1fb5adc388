use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    allocator::IdAllocator,
    error::allocation::AllocationError,
    model::drone::{
        mission_reference_to_json, possible_missions_to_json, CreateDroneParam, DroneParam,
        DronePatch,
    },
};

pub struct DroneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new drone under an allocator-assigned id
    pub async fn create(
        &self,
        allocator: &IdAllocator,
        params: CreateDroneParam,
    ) -> Result<DroneParam, AllocationError> {
        let current_mission_id = params
            .current_mission_id
            .as_ref()
            .map(mission_reference_to_json);
        let possible_missions_ids = possible_missions_to_json(&params.possible_missions_ids);

        let drone = allocator
            .insert_with(entity::prelude::Drone, self.db, |id| {
                entity::drone::ActiveModel {
                    id: ActiveValue::Set(id),
                    name: ActiveValue::Set(params.name.clone()),
                    status: ActiveValue::Set(params.status.clone()),
                    current_mission_id: ActiveValue::Set(current_mission_id.clone()),
                    possible_missions_ids: ActiveValue::Set(possible_missions_ids.clone()),
                }
                .insert(self.db)
            })
            .await?;

        Ok(DroneParam::from_entity(drone)?)
    }

    /// Gets every drone ordered by id
    pub async fn get_all(&self) -> Result<Vec<DroneParam>, DbErr> {
        entity::prelude::Drone::find()
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(DroneParam::from_entity)
            .collect()
    }

    /// Gets a drone by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneParam>, DbErr> {
        entity::prelude::Drone::find_by_id(id)
            .one(self.db)
            .await?
            .map(DroneParam::from_entity)
            .transpose()
    }

    /// Gets all drones whose status matches exactly
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<DroneParam>, DbErr> {
        entity::prelude::Drone::find()
            .filter(entity::drone::Column::Status.eq(status))
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(DroneParam::from_entity)
            .collect()
    }

    /// Replaces the field named by `patch`, leaving every other field untouched
    ///
    /// Returns `None` if no drone has the given id.
    pub async fn update(&self, id: i32, patch: DronePatch) -> Result<Option<DroneParam>, DbErr> {
        let Some(drone) = entity::prelude::Drone::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::drone::ActiveModel = drone.into();
        match patch {
            DronePatch::Status(status) => {
                active_model.status = ActiveValue::Set(status);
            }
            DronePatch::PossibleMissions(ids) => {
                active_model.possible_missions_ids =
                    ActiveValue::Set(possible_missions_to_json(&ids));
            }
        }

        let updated = active_model.update(self.db).await?;

        DroneParam::from_entity(updated).map(Some)
    }
}
