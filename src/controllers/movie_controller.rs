use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::controllers::DateQuery;
use crate::models::{movie_model::Movie, showtime_model::ShowtimeWithHall};
use crate::resolver;

pub async fn list_movies(Extension(catalogue): Extension<Arc<Catalogue>>) -> Json<Vec<Movie>> {
    Json(catalogue.movies.clone())
}

pub async fn fetch_movie_by_id(
    Path(id): Path<String>,
    Extension(catalogue): Extension<Arc<Catalogue>>,
) -> Result<Json<Movie>, StatusCode> {
    match resolver::get_movie_by_id(&catalogue, &id) {
        Some(movie) => Ok(Json(movie.clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

pub async fn list_movie_showtimes(
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
    Extension(catalogue): Extension<Arc<Catalogue>>,
) -> Json<Vec<ShowtimeWithHall>> {
    let now = Local::now().naive_local();
    Json(resolver::get_movie_showtimes(
        &catalogue,
        &id,
        query.date.as_deref(),
        now,
    ))
}
