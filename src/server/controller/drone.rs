use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, UpdateStatusDto},
        drone::{CreateDroneDto, DroneDto, UpdatePossibleMissionsDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam},
        error::AppError,
        model::drone::{CreateDroneParam, DroneParam},
        service::drone::DroneService,
        state::AppState,
    },
};

/// Tag for grouping drone endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drone";

fn drone_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Drone {} not found", id))
}

fn into_dtos(drones: Vec<DroneParam>) -> Vec<DroneDto> {
    drones.into_iter().map(DroneParam::into_dto).collect()
}

/// List every drone.
///
/// # Returns
/// - `200 OK` - All drones ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones",
    tag = DRONE_TAG,
    responses(
        (status = 200, description = "All drones", body = Vec<DroneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drones(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drones = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(drones))))
}

/// List drones with an exact status.
///
/// Unlike the other list endpoints an empty result is reported as 404.
///
/// # Returns
/// - `200 OK` - Drones with the given status
/// - `404 Not Found` - No drone has this status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones/status/{status}",
    tag = DRONE_TAG,
    params(
        ("status" = String, Path, description = "Drone status, matched exactly")
    ),
    responses(
        (status = 200, description = "Drones with the given status", body = Vec<DroneDto>),
        (status = 404, description = "No drone has this status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drones_by_status(
    State(state): State<AppState>,
    PathParam(status): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drones = service.get_by_status(&status).await?;

    Ok((StatusCode::OK, Json(into_dtos(drones))))
}

/// Get a drone by id.
///
/// # Returns
/// - `200 OK` - The drone
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No drone with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones/id/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone id")
    ),
    responses(
        (status = 200, description = "The drone", body = DroneDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drone = service.get_by_id(id).await?.ok_or_else(|| drone_not_found(id))?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}

/// Create a drone.
///
/// The id is assigned by the server; an `id` field in the payload is ignored.
///
/// # Returns
/// - `201 Created` - The created drone
/// - `400 Bad Request` - Malformed payload
/// - `500 Internal Server Error` - Database or id allocation error
#[utoipa::path(
    post,
    path = "/drones",
    tag = DRONE_TAG,
    request_body = CreateDroneDto,
    responses(
        (status = 201, description = "Successfully created drone", body = DroneDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateDroneDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drone = service
        .create(&state.allocator, CreateDroneParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(drone.into_dto())))
}

/// Replace a drone's status.
///
/// # Returns
/// - `200 OK` - The updated drone
/// - `400 Bad Request` - Malformed payload or id
/// - `404 Not Found` - No drone with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Updated drone", body = DroneDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drone = service
        .update_status(id, payload.status)
        .await?
        .ok_or_else(|| drone_not_found(id))?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}

/// Replace the list of missions a drone can fly.
///
/// # Returns
/// - `200 OK` - The updated drone
/// - `400 Bad Request` - Malformed payload or id
/// - `404 Not Found` - No drone with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/drones/{id}/possible_missions",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone id")
    ),
    request_body = UpdatePossibleMissionsDto,
    responses(
        (status = 200, description = "Updated drone", body = DroneDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_possible_missions(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdatePossibleMissionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drone = service
        .update_possible_missions(id, payload.possible_missions_ids)
        .await?
        .ok_or_else(|| drone_not_found(id))?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}
