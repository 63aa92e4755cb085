use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::catalogue::Catalogue;
use crate::models::hall_model::Hall;
use crate::models::movie_model::Movie;
use crate::models::showtime_model::{
    DailySchedule, EnrichedShowtime, Showtime, ShowtimeWithHall, ShowtimeWithMovie,
};
use crate::utils::showtime_instant;

// Showtimes whose movieId/hallId resolve to nothing are dropped from the
// joined view being computed, never raised as errors. That is intentional:
// a dangling reference is a data-quality gap in the source collections,
// not a failure of the request.

/// True when the showtime starts strictly after `now`. A start exactly at
/// `now` is not upcoming, and an unparseable date/time pair never is.
pub fn is_showtime_upcoming(showtime: &Showtime, now: NaiveDateTime) -> bool {
    match showtime_instant(&showtime.date, &showtime.start_time) {
        Some(start) => start > now,
        None => false,
    }
}

pub fn get_movie_by_id<'a>(catalogue: &'a Catalogue, movie_id: &str) -> Option<&'a Movie> {
    catalogue.movies.iter().find(|m| m.id == movie_id)
}

pub fn get_hall_by_id<'a>(catalogue: &'a Catalogue, hall_id: &str) -> Option<&'a Hall> {
    catalogue.halls.iter().find(|h| h.id == hall_id)
}

/// Upcoming showtimes of one movie across all halls, each joined with its
/// hall, ascending by `(date, startTime)`.
pub fn get_movie_showtimes(
    catalogue: &Catalogue,
    movie_id: &str,
    date: Option<&str>,
    now: NaiveDateTime,
) -> Vec<ShowtimeWithHall> {
    let mut result: Vec<ShowtimeWithHall> = catalogue
        .showtimes
        .iter()
        .filter(|s| s.movie_id == movie_id)
        .filter(|s| is_showtime_upcoming(s, now))
        .filter(|s| date.map_or(true, |d| s.date == d))
        .filter_map(|s| {
            let hall = get_hall_by_id(catalogue, &s.hall_id)?;
            Some(ShowtimeWithHall {
                showtime: s.clone(),
                hall: hall.clone(),
            })
        })
        .collect();

    result.sort_by(|a, b| chronological(&a.showtime, &b.showtime));
    result
}

/// Upcoming schedule of one hall, each showtime joined with its movie,
/// ascending by `(date, startTime)`.
pub fn get_hall_schedule(
    catalogue: &Catalogue,
    hall_id: &str,
    date: Option<&str>,
    now: NaiveDateTime,
) -> Vec<ShowtimeWithMovie> {
    let mut result: Vec<ShowtimeWithMovie> = catalogue
        .showtimes
        .iter()
        .filter(|s| s.hall_id == hall_id)
        .filter(|s| is_showtime_upcoming(s, now))
        .filter(|s| date.map_or(true, |d| s.date == d))
        .filter_map(|s| {
            let movie = get_movie_by_id(catalogue, &s.movie_id)?;
            Some(ShowtimeWithMovie {
                showtime: s.clone(),
                movie: movie.clone(),
            })
        })
        .collect();

    result.sort_by(|a, b| chronological(&a.showtime, &b.showtime));
    result
}

/// All upcoming showtimes joined with both movie and hall, grouped into one
/// bucket per date. Buckets appear in ascending date order and keep the
/// global `(date, startTime)` ordering inside each date.
pub fn get_daily_schedule(
    catalogue: &Catalogue,
    date: Option<&str>,
    now: NaiveDateTime,
) -> Vec<DailySchedule> {
    let mut enriched: Vec<EnrichedShowtime> = catalogue
        .showtimes
        .iter()
        .filter(|s| is_showtime_upcoming(s, now))
        .filter(|s| date.map_or(true, |d| s.date == d))
        .filter_map(|s| {
            let movie = get_movie_by_id(catalogue, &s.movie_id)?;
            let hall = get_hall_by_id(catalogue, &s.hall_id)?;
            Some(EnrichedShowtime {
                showtime: s.clone(),
                movie: movie.clone(),
                hall: hall.clone(),
            })
        })
        .collect();

    enriched.sort_by(|a, b| chronological(&a.showtime, &b.showtime));

    // The sequence is sorted, so showtimes of one date are contiguous and
    // buckets come out in ascending date order.
    let mut days: Vec<DailySchedule> = Vec::new();
    for showtime in enriched {
        match days.last_mut() {
            Some(day) if day.date == showtime.showtime.date => day.showtimes.push(showtime),
            _ => days.push(DailySchedule {
                date: showtime.showtime.date.clone(),
                showtimes: vec![showtime],
            }),
        }
    }
    days
}

// Both formats are zero-padded, so string order equals chronological
// order. `sort_by` is stable: showtimes tied on (date, startTime) keep
// their input-relative order.
fn chronological(a: &Showtime, b: &Showtime) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.start_time.cmp(&b.start_time))
}
