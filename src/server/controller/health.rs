use axum::{response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Tag for grouping service-level endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = MessageDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    Json(MessageDto {
        message: "Hello World".to_string(),
    })
}
