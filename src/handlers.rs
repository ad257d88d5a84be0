use crate::dashboard::{build_dashboard, Dashboard};
use crate::errors::AppError;
use crate::models::{
    AddGoalRequest, EditGoalRequest, Goal, GoalId, GoalsResponse, Settings, SettingsRequest,
    ToggleResponse,
};
use crate::progress::{MAX_AGE, MIN_AGE};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&snapshot(&state).await))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<Dashboard> {
    Json(snapshot(&state).await)
}

pub async fn list_goals(State(state): State<AppState>) -> Json<GoalsResponse> {
    let court = state.court.lock().await;
    Json(GoalsResponse {
        groups: court.group_by_period(state.config.timeline.as_slice()),
        completion: court.completion_ratio(),
    })
}

pub async fn list_periods(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.config.timeline.clone())
}

/// Files a goal under whatever mode the dashboard shows right now.
pub async fn add_goal(
    State(state): State<AppState>,
    Json(payload): Json<AddGoalRequest>,
) -> Result<(StatusCode, Json<Goal>), AppError> {
    let mode = state.settings.lock().await.mode;
    let mut court = state.court.lock().await;
    let id = court.add(
        &payload.task,
        payload.difficulty,
        payload.period.as_deref(),
        mode,
    )?;
    let goal = court
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("goal not found: {id}")))?;
    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn edit_goal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<EditGoalRequest>,
) -> Result<StatusCode, AppError> {
    state
        .court
        .lock()
        .await
        .edit_task(GoalId(id), &payload.task)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ToggleResponse>, AppError> {
    let id = GoalId(id);
    let done = state.court.lock().await.toggle_done(id)?;
    Ok(Json(ToggleResponse { id, done }))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Goal>, AppError> {
    let removed = state.court.lock().await.delete(GoalId(id))?;
    Ok(Json(removed))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<SettingsRequest>,
) -> Result<Json<Settings>, AppError> {
    if let Some(age) = payload.age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AppError::bad_request(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }
    }

    let mut settings = state.settings.lock().await;
    if let Some(mode) = payload.mode {
        settings.mode = mode;
    }
    if let Some(age) = payload.age {
        settings.age = age;
    }
    info!(mode = %settings.mode, age = settings.age, "settings updated");
    Ok(Json(*settings))
}

async fn snapshot(state: &AppState) -> Dashboard {
    let settings = *state.settings.lock().await;
    let court = state.court.lock().await;
    build_dashboard(
        settings,
        state.config.life_expectancy,
        &court,
        &state.config.timeline,
    )
}
