use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, UpdateStatusDto},
        schedule::{CreateScheduleDto, ScheduleDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam},
        error::AppError,
        model::schedule::{CreateScheduleParam, ScheduleParam},
        service::schedule::ScheduleService,
        state::AppState,
        util::parse::parse_time_range,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

fn into_dtos(schedules: Vec<ScheduleParam>) -> Vec<ScheduleDto> {
    schedules.into_iter().map(ScheduleParam::into_dto).collect()
}

/// List every schedule.
#[utoipa::path(
    get,
    path = "/schedules",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All schedules", body = Vec<ScheduleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedules = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(schedules))))
}

/// Create a schedule assigning a drone to a mission.
///
/// Both references must exist and `end_time` may not precede `start_time`.
/// Timestamps are RFC 3339, or `YYYY-MM-DDTHH:MM:SS[.fraction]` read as UTC.
///
/// # Returns
/// - `201 Created` - The created schedule
/// - `400 Bad Request` - Malformed payload, unknown drone or mission, or inverted window
/// - `500 Internal Server Error` - Database or id allocation error
#[utoipa::path(
    post,
    path = "/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Successfully created schedule", body = ScheduleDto),
        (status = 400, description = "Invalid schedule", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedule = service
        .create(&state.allocator, CreateScheduleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

/// Replace a schedule's status.
///
/// # Returns
/// - `200 OK` - The updated schedule
/// - `400 Bad Request` - Malformed payload or id
/// - `404 Not Found` - No schedule with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = i32, Path, description = "Schedule id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Updated schedule", body = ScheduleDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedule = service
        .update_status(id, payload.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Schedule {} not found", id)))?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// List schedules lying entirely inside a time window.
///
/// Selects schedules with `start_time >= start_date` and `end_time <= end_date`.
/// Both dates use `YYYY-MM-DDTHH:MM:SS` and are read as UTC.
///
/// # Returns
/// - `200 OK` - Matching schedules, possibly none
/// - `400 Bad Request` - A date does not match the format
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/schedules/{start_date}/{end_date}",
    tag = SCHEDULE_TAG,
    params(
        ("start_date" = String, Path, description = "Lower bound, e.g. 2025-03-01T08:00:00"),
        ("end_date" = String, Path, description = "Upper bound, e.g. 2025-03-01T18:00:00")
    ),
    responses(
        (status = 200, description = "Schedules inside the window", body = Vec<ScheduleDto>),
        (status = 400, description = "Unparseable date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules_in_range(
    State(state): State<AppState>,
    PathParam((start_date, end_date)): PathParam<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let range = parse_time_range(&start_date, &end_date)?;

    let service = ScheduleService::new(&state.db);

    let schedules = service.get_within(range).await?;

    Ok((StatusCode::OK, Json(into_dtos(schedules))))
}

/// List the schedules of one drone.
///
/// Shares its path with the status update; on `GET` the segment is a drone id.
///
/// # Returns
/// - `200 OK` - The drone's schedules, possibly none
/// - `400 Bad Request` - Id is not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = i32, Path, description = "Drone id")
    ),
    responses(
        (status = 200, description = "Schedules of the drone", body = Vec<ScheduleDto>),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules_by_drone(
    State(state): State<AppState>,
    PathParam(drone_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedules = service.get_by_drone(drone_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(schedules))))
}
