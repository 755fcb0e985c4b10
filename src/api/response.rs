use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type TrackResult = Result<(StatusCode, Json<serde_json::Value>), ApiError>;

pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Writes are fire-and-forget, so a track endpoint can only ever acknowledge.
pub fn accepted(event_type: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::ACCEPTED,
        Json(json!({ "status": "accepted", "event_type": event_type })),
    )
}
