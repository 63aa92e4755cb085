use chrono::NaiveDateTime;

/// Combine a `YYYY-MM-DD` date and a `HH:MM` start time into a local
/// wall-clock instant. `None` when either part is malformed.
pub fn showtime_instant(date: &str, start_time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date}T{start_time}"), "%Y-%m-%dT%H:%M").ok()
}
