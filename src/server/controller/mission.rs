use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        mission::{CreateMissionDto, MissionDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam},
        error::AppError,
        model::mission::{CreateMissionParam, MissionParam},
        service::mission::MissionService,
        state::AppState,
    },
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

/// List every mission.
#[utoipa::path(
    get,
    path = "/missions",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "All missions", body = Vec<MissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_missions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let missions: Vec<MissionDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(MissionParam::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(missions)))
}

/// Get a mission by id.
#[utoipa::path(
    get,
    path = "/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = i32, Path, description = "Mission id")
    ),
    responses(
        (status = 200, description = "The mission", body = MissionDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(mission) => Ok((StatusCode::OK, Json(mission.into_dto()))),
        None => Err(AppError::NotFound(format!("Mission {} not found", id))),
    }
}

/// Create a mission.
///
/// # Returns
/// - `201 Created` - The created mission
/// - `400 Bad Request` - Malformed payload
/// - `500 Internal Server Error` - Database or id allocation error
#[utoipa::path(
    post,
    path = "/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    responses(
        (status = 201, description = "Successfully created mission", body = MissionDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateMissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let mission = service
        .create(&state.allocator, CreateMissionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(mission.into_dto())))
}
