use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use chrono::NaiveDate;
use clinicdesk_core::appointments::{
    Appointment, AppointmentFilter, AppointmentStatus, NewAppointment, StatusChange,
};
use clinicdesk_core::utils::SlotTime;
use serde::Deserialize;

#[derive(Deserialize)]
struct StatusBody {
    status: AppointmentStatus,
}

#[derive(Deserialize)]
struct ConflictQuery {
    date: NaiveDate,
    time: SlotTime,
}

async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<AppointmentFilter>,
) -> ApiResult<Json<Vec<Appointment>>> {
    Ok(Json(state.session()?.filter_appointments(&filter)))
}

async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(appointment): Json<NewAppointment>,
) -> ApiResult<Json<Appointment>> {
    let a = state.session()?.create_appointment(appointment)?;
    Ok(Json(a))
}

async fn delete_appointment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.session()?.delete_appointment(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_appointment_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<StatusBody>,
) -> ApiResult<Json<StatusChange>> {
    let change = state
        .session()?
        .update_appointment_status(&id, body.status)?;
    Ok(Json(change))
}

async fn list_conflicts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConflictQuery>,
) -> ApiResult<Json<Vec<Appointment>>> {
    let conflicts = state
        .session()?
        .list_active_conflicts(query.date, &query.time);
    Ok(Json(conflicts))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/appointments/conflicts", get(list_conflicts))
        .route(
            "/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route("/appointments/{id}", delete(delete_appointment))
        .route("/appointments/{id}/status", put(update_appointment_status))
}
