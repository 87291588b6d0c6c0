use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ActivityError;

pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "detail": detail.into() }))).into_response()
}

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::NotFound { .. } => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp { .. }
            | ActivityError::ActivityFull { .. }
            | ActivityError::NotSignedUp { .. }
            | ActivityError::MissingEmail => StatusCode::BAD_REQUEST,
            ActivityError::InvalidSeed { .. } | ActivityError::Io(_) | ActivityError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "activity request failed");
            return detail_response(status, "Internal server error");
        }
        detail_response(status, self.to_string())
    }
}
