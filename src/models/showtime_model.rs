use serde::{Deserialize, Serialize};

use super::{hall_model::Hall, movie_model::Movie};

/// A single screening. `date` is `YYYY-MM-DD` and `start_time` is 24-hour
/// `HH:MM`; both are zero-padded, so lexicographic order on the pair is
/// chronological order.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub id: String,
    pub movie_id: String,
    pub hall_id: String,
    pub date: String,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShowtimeWithHall {
    #[serde(flatten)]
    pub showtime: Showtime,
    pub hall: Hall,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShowtimeWithMovie {
    #[serde(flatten)]
    pub showtime: Showtime,
    pub movie: Movie,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnrichedShowtime {
    #[serde(flatten)]
    pub showtime: Showtime,
    pub movie: Movie,
    pub hall: Hall,
}

/// One calendar date with its screenings, ascending by start time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DailySchedule {
    pub date: String,
    pub showtimes: Vec<EnrichedShowtime>,
}
