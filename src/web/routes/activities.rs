use axum::{extract::State, routing::get, routing::MethodRouter, Json};
use serde_json::{Map, Value};

use crate::models::ActivityField;
use crate::services::activities_service::{self, SharedRegistry};

pub async fn list_activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<Map<String, Value>> {
    Json(activities_service::list_activities(&registry))
}

pub async fn list_names_handler(State(registry): State<SharedRegistry>) -> Json<Vec<String>> {
    Json(activities_service::list_activity_names(&registry))
}

/// GET route mapping every activity name to one field of its record.
pub fn projection_route(field: ActivityField) -> MethodRouter<SharedRegistry> {
    get(move |State(registry): State<SharedRegistry>| async move {
        Json(activities_service::project_all(&registry, field))
    })
}
