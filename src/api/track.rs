use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use super::response::{accepted, ApiError, TrackResult};
use super::AppState;
use crate::engine::Tracker;
use crate::models::{EventType, FormSubmission};
use crate::services::StaticEnvironment;

#[derive(Debug, Deserialize)]
pub struct PageViewRequest {
    pub page_path: String,
    #[serde(default)]
    pub referrer: String,
}

#[derive(Debug, Deserialize)]
pub struct ButtonClickRequest {
    pub page_path: String,
    pub button_name: String,
    pub button_location: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactFormRequest {
    pub page_path: String,
    pub name: String,
    pub email: String,
}

fn request_tracker(
    state: &AppState,
    headers: &HeaderMap,
    page_path: &str,
    referrer: &str,
) -> Tracker {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let environment = StaticEnvironment::new(page_path)
        .with_referrer(referrer)
        .with_user_agent(user_agent);

    state.tracker.with_environment(Arc::new(environment))
}

fn require_path(page_path: &str) -> Result<(), ApiError> {
    if page_path.starts_with('/') || page_path.is_empty() {
        Ok(())
    } else {
        warn!("Rejected track request with page_path '{}'", page_path);
        Err(ApiError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "page_path must be a path starting with '/'".to_string(),
        })
    }
}

pub async fn page_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PageViewRequest>,
) -> TrackResult {
    require_path(&payload.page_path)?;
    debug!("Page view on {}", payload.page_path);

    let tracker = request_tracker(&state, &headers, &payload.page_path, &payload.referrer);
    tracker.record_page_view(&payload.page_path);

    Ok(accepted(EventType::PageView.as_str()))
}

pub async fn button_click(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ButtonClickRequest>,
) -> TrackResult {
    require_path(&payload.page_path)?;
    debug!(
        "Button click '{}' at '{}' on {}",
        payload.button_name, payload.button_location, payload.page_path
    );

    let tracker = request_tracker(&state, &headers, &payload.page_path, "");
    tracker.record_button_click(&payload.button_name, &payload.button_location);

    Ok(accepted(EventType::ButtonClick.as_str()))
}

pub async fn contact_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ContactFormRequest>,
) -> TrackResult {
    require_path(&payload.page_path)?;
    debug!("Contact form submitted on {}", payload.page_path);

    let tracker = request_tracker(&state, &headers, &payload.page_path, "");
    tracker.record_form_submission(&FormSubmission {
        name: payload.name,
        email: payload.email,
    });

    Ok(accepted(EventType::ContactFormSubmit.as_str()))
}
