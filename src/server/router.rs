use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, UpdateStatusDto},
        drone::{CreateDroneDto, DroneDto, MissionReference, UpdatePossibleMissionsDto},
        mission::{CreateMissionDto, MissionDto},
        schedule::{CreateScheduleDto, ScheduleDto},
    },
    server::{
        controller::{
            drone::{
                create_drone, get_drone_by_id, get_drones, get_drones_by_status,
                update_drone_possible_missions, update_drone_status,
            },
            health::hello,
            mission::{create_mission, get_mission_by_id, get_missions},
            schedule::{
                create_schedule, get_schedules, get_schedules_by_drone, get_schedules_in_range,
                update_schedule_status,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Drone Scheduler API"),
    paths(
        crate::server::controller::health::hello,
        crate::server::controller::drone::get_drones,
        crate::server::controller::drone::get_drones_by_status,
        crate::server::controller::drone::get_drone_by_id,
        crate::server::controller::drone::create_drone,
        crate::server::controller::drone::update_drone_status,
        crate::server::controller::drone::update_drone_possible_missions,
        crate::server::controller::mission::get_missions,
        crate::server::controller::mission::get_mission_by_id,
        crate::server::controller::mission::create_mission,
        crate::server::controller::schedule::get_schedules,
        crate::server::controller::schedule::create_schedule,
        crate::server::controller::schedule::update_schedule_status,
        crate::server::controller::schedule::get_schedules_in_range,
        crate::server::controller::schedule::get_schedules_by_drone
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UpdateStatusDto,
        DroneDto,
        CreateDroneDto,
        MissionReference,
        UpdatePossibleMissionsDto,
        MissionDto,
        CreateMissionDto,
        ScheduleDto,
        CreateScheduleDto
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "drone", description = "Drone registry"),
        (name = "mission", description = "Mission catalogue"),
        (name = "schedule", description = "Drone-to-mission time slots")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the application router with all routes and HTTP layers applied.
///
/// Requests taking longer than `request_timeout` are dropped with
/// `408 Request Timeout`, which also cancels their pending database work.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    // Collection roots answer with and without a trailing slash. Segments at the
    // same position must share a parameter name, so the range route reuses `{id}`
    // for its lower bound.
    Router::new()
        .route("/", get(hello))
        .route("/drones", get(get_drones).post(create_drone))
        .route("/drones/", get(get_drones).post(create_drone))
        .route("/drones/status/{status}", get(get_drones_by_status))
        .route("/drones/id/{id}", get(get_drone_by_id))
        .route("/drones/{id}", put(update_drone_status))
        .route(
            "/drones/{id}/possible_missions",
            put(update_drone_possible_missions),
        )
        .route("/missions", get(get_missions).post(create_mission))
        .route("/missions/", get(get_missions).post(create_mission))
        .route("/missions/{id}", get(get_mission_by_id))
        .route("/schedules", get(get_schedules).post(create_schedule))
        .route("/schedules/", get(get_schedules).post(create_schedule))
        .route(
            "/schedules/{id}",
            get(get_schedules_by_drone).put(update_schedule_status),
        )
        .route("/schedules/{id}/{end_date}", get(get_schedules_in_range))
        .route("/api/openapi.json", get(openapi))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
