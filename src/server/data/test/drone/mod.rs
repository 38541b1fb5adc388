use crate::{
    model::drone::MissionReference,
    server::{
        allocator::IdAllocator,
        data::drone::DroneRepository,
        error::allocation::AllocationError,
        model::drone::{CreateDroneParam, DronePatch},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
mod get_by_status;
mod update;

fn create_param(name: &str, status: &str) -> CreateDroneParam {
    CreateDroneParam {
        name: name.to_string(),
        status: status.to_string(),
        current_mission_id: None,
        possible_missions_ids: vec![],
    }
}
