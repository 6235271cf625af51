use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use clinicdesk_core::time_settings::AppointmentTimeSettings;

async fn get_appointment_time_settings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AppointmentTimeSettings>> {
    Ok(Json(state.session()?.appointment_time_settings()))
}

async fn update_appointment_time_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<AppointmentTimeSettings>,
) -> ApiResult<Json<AppointmentTimeSettings>> {
    let saved = state.session()?.save_appointment_time_settings(settings)?;
    Ok(Json(saved))
}

async fn get_legacy_time_options(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.session()?.legacy_time_options()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/settings/appointment-time",
            get(get_appointment_time_settings).put(update_appointment_time_settings),
        )
        .route(
            "/settings/appointment-time/options",
            get(get_legacy_time_options),
        )
}
