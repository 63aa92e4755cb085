use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::controllers::DateQuery;
use crate::models::{hall_model::Hall, showtime_model::ShowtimeWithMovie};
use crate::resolver;

pub async fn list_halls(Extension(catalogue): Extension<Arc<Catalogue>>) -> Json<Vec<Hall>> {
    Json(catalogue.halls.clone())
}

pub async fn fetch_hall_by_id(
    Path(id): Path<String>,
    Extension(catalogue): Extension<Arc<Catalogue>>,
) -> Result<Json<Hall>, StatusCode> {
    match resolver::get_hall_by_id(&catalogue, &id) {
        Some(hall) => Ok(Json(hall.clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

pub async fn list_hall_schedule(
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
    Extension(catalogue): Extension<Arc<Catalogue>>,
) -> Json<Vec<ShowtimeWithMovie>> {
    let now = Local::now().naive_local();
    Json(resolver::get_hall_schedule(
        &catalogue,
        &id,
        query.date.as_deref(),
        now,
    ))
}
