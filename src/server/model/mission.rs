//! Parameter models for mission data operations.

use crate::model::mission::{CreateMissionDto, MissionDto};

/// Represents a mission with full data from the database. Missions never change
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionParam {
    pub id: i32,
    /// Reference to a trajectory managed elsewhere; not validated.
    pub trajectory_id: i32,
    pub duration: i32,
    pub priority: i32,
}

impl MissionParam {
    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            id: self.id,
            trajectory_id: self.trajectory_id,
            duration: self.duration,
            priority: self.priority,
        }
    }

    pub fn from_entity(entity: entity::mission::Model) -> Self {
        Self {
            id: entity.id,
            trajectory_id: entity.trajectory_id,
            duration: entity.duration,
            priority: entity.priority,
        }
    }
}

/// Parameters for creating a new mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMissionParam {
    pub trajectory_id: i32,
    pub duration: i32,
    pub priority: i32,
}

impl CreateMissionParam {
    pub fn from_dto(dto: CreateMissionDto) -> Self {
        Self {
            trajectory_id: dto.trajectory_id,
            duration: dto.duration,
            priority: dto.priority,
        }
    }
}
