use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::ActivityError;
use crate::models::{Activity, ActivityField};
use crate::services::activities_service::{self, CommandMessage, SharedRegistry};
use crate::web::error::detail_response;

#[derive(Debug, Deserialize, Default)]
pub struct StudentQuery {
    #[serde(alias = "student_email")]
    pub email: Option<String>,
}

pub async fn activity_detail_handler(
    Path(activity_name): Path<String>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Activity>, ActivityError> {
    activities_service::get_activity(&registry, &activity_name).map(Json)
}

pub async fn activity_field_handler(
    Path((activity_name, field)): Path<(String, String)>,
    State(registry): State<SharedRegistry>,
) -> Response {
    if !registry.contains(&activity_name) {
        return ActivityError::not_found(activity_name).into_response();
    }
    let Ok(field) = field.parse::<ActivityField>() else {
        return detail_response(StatusCode::NOT_FOUND, "Unknown activity field");
    };
    match activities_service::project_one(&registry, &activity_name, field) {
        Ok(value) => Json(value).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<CommandMessage>, ActivityError> {
    activities_service::sign_up(&registry, &activity_name, query.email.as_deref()).map(Json)
}

pub async fn unsignup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<CommandMessage>, ActivityError> {
    activities_service::withdraw(&registry, &activity_name, query.email.as_deref()).map(Json)
}
