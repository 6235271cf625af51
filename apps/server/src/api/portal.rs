use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use clinicdesk_core::appointments::Appointment;
use clinicdesk_core::portal::{PortalBooking, PortalTimeOption};
use serde::Deserialize;

#[derive(Deserialize)]
struct DateQuery {
    date: Option<NaiveDate>,
}

async fn get_portal_time_options(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<Vec<PortalTimeOption>>> {
    Ok(Json(state.session()?.portal_time_options(query.date)))
}

async fn book_from_portal(
    State(state): State<Arc<AppState>>,
    Json(booking): Json<PortalBooking>,
) -> ApiResult<Json<Appointment>> {
    let appointment = state.session()?.book_from_portal(booking)?;
    Ok(Json(appointment))
}

async fn list_client_appointments(
    Path(client_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Appointment>>> {
    Ok(Json(state.session()?.client_appointments(&client_id)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portal/time-options", get(get_portal_time_options))
        .route("/portal/appointments", post(book_from_portal))
        .route(
            "/portal/clients/{id}/appointments",
            get(list_client_appointments),
        )
}
