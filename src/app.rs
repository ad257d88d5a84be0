use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/goals", get(handlers::list_goals).post(handlers::add_goal))
        .route(
            "/api/goals/:id",
            patch(handlers::edit_goal).delete(handlers::delete_goal),
        )
        .route("/api/periods", get(handlers::list_periods))
        .route("/api/goals/:id/toggle", post(handlers::toggle_goal))
        .route("/api/settings", post(handlers::update_settings))
        .with_state(state)
}
