use axum::{extract::State, Json};
use serde_json::Value;

use crate::services::activities_service::SharedRegistry;

pub async fn health_handler(State(registry): State<SharedRegistry>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "activities": registry.len(),
    }))
}
