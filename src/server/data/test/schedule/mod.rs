use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    allocator::IdAllocator,
    data::schedule::ScheduleRepository,
    error::allocation::AllocationError,
    model::schedule::{CreateScheduleParam, SchedulePatch, TimeRange},
};

mod create;
mod get_by_drone_id;
mod get_within;
mod update;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap()
}
