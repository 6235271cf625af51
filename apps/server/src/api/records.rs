use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use clinicdesk_core::appointments::Appointment;
use clinicdesk_core::records::{NewTreatmentRecord, SavedTreatmentRecord};

async fn save_record(
    State(state): State<Arc<AppState>>,
    Json(record): Json<NewTreatmentRecord>,
) -> ApiResult<Json<SavedTreatmentRecord>> {
    let saved = state.session()?.save_treatment_record(record)?;
    Ok(Json(saved))
}

async fn create_follow_up(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Appointment>> {
    let appointment = state.session()?.create_follow_up(&id)?;
    Ok(Json(appointment))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/records", post(save_record))
        .route("/records/{id}/follow-up", post(create_follow_up))
}
