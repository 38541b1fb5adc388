use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MissionDto {
    pub id: i32,
    pub trajectory_id: i32,
    pub duration: i32,
    pub priority: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateMissionDto {
    pub trajectory_id: i32,
    pub duration: i32,
    pub priority: i32,
}
