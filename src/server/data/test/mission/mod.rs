use crate::server::{
    allocator::IdAllocator, data::mission::MissionRepository,
    error::allocation::AllocationError, model::mission::CreateMissionParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
