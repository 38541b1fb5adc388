//! Parameter models for schedule data operations.

use chrono::{DateTime, Utc};

use crate::model::schedule::{CreateScheduleDto, ScheduleDto};

/// Represents a schedule with full data from the database.
///
/// A schedule assigns a drone to a mission for the closed interval
/// `[start_time, end_time]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleParam {
    pub id: i32,
    pub drone_id: i32,
    pub mission_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

impl ScheduleParam {
    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            drone_id: self.drone_id,
            mission_id: self.mission_id,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
        }
    }

    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            drone_id: entity.drone_id,
            mission_id: entity.mission_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status: entity.status,
        }
    }
}

/// Parameters for creating a new schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScheduleParam {
    pub drone_id: i32,
    pub mission_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

impl CreateScheduleParam {
    pub fn from_dto(dto: CreateScheduleDto) -> Self {
        Self {
            drone_id: dto.drone_id,
            mission_id: dto.mission_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
            status: dto.status,
        }
    }
}

/// The fields of a schedule that may change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulePatch {
    Status(String),
}

/// Inclusive time window used to select schedules lying entirely inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub lower: DateTime<Utc>,
    pub upper: DateTime<Utc>,
}
