use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference to the mission a drone is currently flying.
///
/// Stored records may carry either a numeric mission id or a free-form label,
/// so both shapes are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum MissionReference {
    Id(i64),
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroneDto {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub current_mission_id: Option<MissionReference>,
    pub possible_missions_ids: Vec<i32>,
}

/// Payload for registering a drone. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDroneDto {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub current_mission_id: Option<i32>,
    pub possible_missions_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePossibleMissionsDto {
    pub possible_missions_ids: Vec<i32>,
}
