use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use clinicdesk_core::time_groups::{NewTimeGroup, TimeGroup, TimeOption};

async fn list_time_groups(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<TimeGroup>>> {
    let groups = state.session()?.list_time_groups().to_vec();
    Ok(Json(groups))
}

async fn create_time_group(
    State(state): State<Arc<AppState>>,
    Json(group): Json<NewTimeGroup>,
) -> ApiResult<Json<TimeGroup>> {
    let g = state.session()?.add_time_group(group)?;
    Ok(Json(g))
}

async fn update_time_group(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(group): Json<NewTimeGroup>,
) -> ApiResult<Json<TimeGroup>> {
    let g = state.session()?.update_time_group(&id, group)?;
    Ok(Json(g))
}

async fn delete_time_group(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.session()?.delete_time_group(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_time_options(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<TimeOption>>> {
    Ok(Json(state.session()?.time_options()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/time-groups/options", get(get_time_options))
        .route("/time-groups", get(list_time_groups).post(create_time_group))
        .route(
            "/time-groups/{id}",
            put(update_time_group).delete(delete_time_group),
        )
}
