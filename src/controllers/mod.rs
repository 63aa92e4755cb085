pub mod hall_controller;
pub mod home_controller;
pub mod movie_controller;
pub mod schedule_controller;

use serde::Deserialize;

/// Optional `?date=YYYY-MM-DD` filter accepted by the schedule endpoints.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}
