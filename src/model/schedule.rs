use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub drone_id: i32,
    pub mission_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub drone_id: i32,
    pub mission_id: i32,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>, // RFC 3339, or naive ISO-8601 read as UTC
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,
    pub status: String,
}

/// Accepts RFC 3339 timestamps as well as offset-less `YYYY-MM-DDTHH:MM:SS[.f]`,
/// which is taken to be UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value = String::deserialize(deserializer)?;

    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", value, e)))
}
