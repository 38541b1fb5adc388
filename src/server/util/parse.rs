use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::{error::AppError, model::schedule::TimeRange};

/// Format of the date segments in `/schedules/{start_date}/{end_date}`.
pub const RANGE_BOUND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a range bound from a path segment, interpreting it as UTC
///
/// # Arguments
/// - `value` - Date in `RANGE_BOUND_FORMAT`, e.g. `2025-03-01T08:00:00`
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The parsed instant
/// - `Err(AppError::BadRequest)` - The value does not match the format
pub fn parse_range_bound(value: &str) -> Result<DateTime<Utc>, AppError> {
    let parsed = NaiveDateTime::parse_from_str(value, RANGE_BOUND_FORMAT).map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid date '{}', expected YYYY-MM-DDTHH:MM:SS: {}",
            value, e
        ))
    })?;

    Ok(parsed.and_utc())
}

/// Parses both path segments of a range query into a `TimeRange`
pub fn parse_time_range(start_date: &str, end_date: &str) -> Result<TimeRange, AppError> {
    Ok(TimeRange {
        lower: parse_range_bound(start_date)?,
        upper: parse_range_bound(end_date)?,
    })
}
