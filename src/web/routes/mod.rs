//! Contains all the routes that this application can handle.

mod activities;

use axum::{
    http::StatusCode,
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::AppState;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// The frontend lives under `/static`.
async fn home() -> Redirect {
    Redirect::to("/static/index.html")
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.static_dir);

    Router::new()
        .merge(activity_routes(app_state))
        .nest_service("/static", static_files)
        .route("/", get(home))
        .route("/health-check", get(health_check))
}

/// ACTIVITIES - listing and (un)registering participants
fn activity_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list))
        .route("/activities/{name}/signup", post(activities::signup))
        .route(
            "/activities/{name}/participants",
            delete(activities::unregister),
        )
        .with_state(app_state)
}
