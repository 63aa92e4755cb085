use axum::{
    extract::{Extension, Query},
    response::Json,
};
use chrono::Local;
use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::controllers::DateQuery;
use crate::models::showtime_model::DailySchedule;
use crate::resolver;

pub async fn list_daily_schedule(
    Query(query): Query<DateQuery>,
    Extension(catalogue): Extension<Arc<Catalogue>>,
) -> Json<Vec<DailySchedule>> {
    let now = Local::now().naive_local();
    Json(resolver::get_daily_schedule(
        &catalogue,
        query.date.as_deref(),
        now,
    ))
}
