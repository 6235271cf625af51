use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use clinicdesk_core::dashboard::DashboardSummary;
use clinicdesk_core::utils::local_today;
use serde::Deserialize;

#[derive(Deserialize)]
struct DashboardQuery {
    /// Defaults to the server's local date.
    date: Option<NaiveDate>,
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<DashboardSummary>> {
    let today = query.date.unwrap_or_else(local_today);
    Ok(Json(state.session()?.dashboard(today)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
