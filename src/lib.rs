pub mod catalogue;
pub mod controllers;
pub mod models;
pub mod resolver;
pub mod utils;

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use catalogue::Catalogue;
use controllers::{
    hall_controller::*, home_controller, movie_controller::*, schedule_controller::*,
};

/// Read-only routes over an already loaded snapshot. Outer layers (CORS)
/// are the binary's concern.
pub fn app(catalogue: Arc<Catalogue>) -> Router {
    Router::new()
        .route("/", get(home_controller::index))
        .route("/movies", get(list_movies))
        .route("/movies/:id", get(fetch_movie_by_id))
        .route("/movies/:id/showtimes", get(list_movie_showtimes))
        .route("/halls", get(list_halls))
        .route("/halls/:id", get(fetch_hall_by_id))
        .route("/halls/:id/schedule", get(list_hall_schedule))
        .route("/schedule", get(list_daily_schedule))
        .layer(Extension(catalogue))
}
