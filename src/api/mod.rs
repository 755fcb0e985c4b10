pub mod health;
pub mod response;
pub mod track;

use axum::{
    routing::{get, post},
    Router,
};

use crate::engine::Tracker;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Tracker,
}

pub fn build_router(tracker: Tracker) -> Router {
    let state = AppState { tracker };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/track/page-view", post(track::page_view))
        .route("/track/button-click", post(track::button_click))
        .route("/track/contact-form", post(track::contact_form))
        .with_state(state)
}
