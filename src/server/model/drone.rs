//! Parameter models for drone data operations.

use sea_orm::DbErr;
use serde_json::Value;

use crate::model::drone::{CreateDroneDto, DroneDto, MissionReference};

/// Represents a drone with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneParam {
    /// Allocator-assigned identifier, unique among drones.
    pub id: i32,
    pub name: String,
    /// Free-form availability state such as `idle` or `in_flight`.
    pub status: String,
    pub current_mission_id: Option<MissionReference>,
    /// Missions the drone can fly, in client-supplied order. May contain duplicates.
    pub possible_missions_ids: Vec<i32>,
}

impl DroneParam {
    /// Converts the drone param to a DTO for API responses.
    pub fn into_dto(self) -> DroneDto {
        DroneDto {
            id: self.id,
            name: self.name,
            status: self.status,
            current_mission_id: self.current_mission_id,
            possible_missions_ids: self.possible_missions_ids,
        }
    }

    /// Converts an entity model to a drone param.
    ///
    /// The two JSON columns are decoded here, so a row written by something other
    /// than this service can fail to convert.
    ///
    /// # Returns
    /// - `Ok(DroneParam)` - The converted drone
    /// - `Err(DbErr::Json)` - A JSON column holds an unexpected shape
    pub fn from_entity(entity: entity::drone::Model) -> Result<Self, DbErr> {
        let current_mission_id = entity
            .current_mission_id
            .map(|value| mission_reference_from_json(entity.id, value))
            .transpose()?
            .flatten();

        let possible_missions_ids = serde_json::from_value::<Vec<i32>>(
            entity.possible_missions_ids,
        )
        .map_err(|e| {
            DbErr::Json(format!(
                "Drone {} has malformed possible_missions_ids: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            status: entity.status,
            current_mission_id,
            possible_missions_ids,
        })
    }
}

/// Parameters for creating a new drone. The id is assigned by the allocator.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDroneParam {
    pub name: String,
    pub status: String,
    pub current_mission_id: Option<MissionReference>,
    pub possible_missions_ids: Vec<i32>,
}

impl CreateDroneParam {
    pub fn from_dto(dto: CreateDroneDto) -> Self {
        Self {
            name: dto.name,
            status: dto.status,
            current_mission_id: dto
                .current_mission_id
                .map(|id| MissionReference::Id(i64::from(id))),
            possible_missions_ids: dto.possible_missions_ids,
        }
    }
}

/// The fields of a drone that may change after creation.
///
/// Each variant replaces exactly one field; nothing else on the record is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum DronePatch {
    Status(String),
    PossibleMissions(Vec<i32>),
}

pub fn mission_reference_to_json(reference: &MissionReference) -> Value {
    match reference {
        MissionReference::Id(id) => Value::from(*id),
        MissionReference::Label(label) => Value::from(label.as_str()),
    }
}

pub fn possible_missions_to_json(ids: &[i32]) -> Value {
    Value::from(ids.to_vec())
}

fn mission_reference_from_json(
    drone_id: i32,
    value: Value,
) -> Result<Option<MissionReference>, DbErr> {
    match value {
        Value::Null => Ok(None),
        Value::String(label) => Ok(Some(MissionReference::Label(label))),
        Value::Number(number) => number
            .as_i64()
            .map(|id| Some(MissionReference::Id(id)))
            .ok_or_else(|| {
                DbErr::Json(format!(
                    "Drone {} has non-integer current_mission_id {}",
                    drone_id, number
                ))
            }),
        other => Err(DbErr::Json(format!(
            "Drone {} has unsupported current_mission_id {}",
            drone_id, other
        ))),
    }
}
